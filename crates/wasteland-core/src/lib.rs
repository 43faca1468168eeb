//! Core types shared by the wasteland crates: identifiers, block positions,
//! host-facing traits, and the event payloads the host hands to the rules.
//!
//! This crate has no dependency on the other workspace members.

pub mod event;
pub mod host;
pub mod identifier;
pub mod position;

pub use event::{EventResult, SpawnCause, SpawnRequest, TickSubject};
pub use host::{EffectApplication, EffectSink, LiquidKind, StatusEffect, WorldQuery};
pub use identifier::{Identifier, IdentifierError};
pub use position::BlockPos;

/// Namespace owned by this mod; every identifier it declares uses it.
pub const MOD_ID: &str = "wasteland";

/// Namespace of the built-in engine content.
pub const VANILLA_NAMESPACE: &str = "minecraft";

/// Player game modes, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    /// Creative and spectator players are exempt from environmental hazards.
    pub fn is_hazard_exempt(self) -> bool {
        matches!(self, GameMode::Creative | GameMode::Spectator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazard_exempt_modes() {
        assert!(GameMode::Creative.is_hazard_exempt());
        assert!(GameMode::Spectator.is_hazard_exempt());
        assert!(!GameMode::Survival.is_hazard_exempt());
        assert!(!GameMode::Adventure.is_hazard_exempt());
    }
}
