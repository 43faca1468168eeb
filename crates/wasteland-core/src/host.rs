//! Interfaces to the host engine.
//!
//! The engine owns world state, entities, and effect mechanics; the rules only
//! read through `WorldQuery` and write through `EffectSink`. Both are traits so
//! tests can stand in a mock world.

use crate::identifier::Identifier;
use crate::position::BlockPos;

/// Kind of liquid occupying a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidKind {
    None,
    Water,
    Lava,
}

/// Read access to the world the host is simulating.
pub trait WorldQuery {
    /// Whether this is a visual-only replica of the world. Rules are no-ops
    /// on the client side; only the authoritative side cancels spawns or
    /// applies effects.
    fn is_client_side(&self) -> bool;

    /// The biome occupying `pos`, or `None` if the lookup does not resolve
    /// to a registered key.
    fn biome_at(&self, pos: BlockPos) -> Option<Identifier>;

    /// The liquid occupying `pos`.
    fn liquid_at(&self, pos: BlockPos) -> LiquidKind;
}

/// Status effect kinds this mod applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEffect {
    Poison,
}

/// A single timed status effect application.
///
/// Duration refresh and stacking are the engine's business; the rules just
/// re-issue the application every eligible tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectApplication {
    pub effect: StatusEffect,
    pub duration_ticks: u32,
    /// 0 = level I, 1 = level II, and so on.
    pub amplifier: u8,
    /// Reduced particle intensity.
    pub ambient: bool,
    /// Shown in the subject's effect UI.
    pub visible: bool,
}

/// Write access for applying status effects to the current subject.
pub trait EffectSink {
    fn apply_effect(&mut self, application: &EffectApplication);
}
