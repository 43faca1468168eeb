//! Mod assembly: owns the configuration handle and wires the wasteland rules
//! to the host's event entry points.
//!
//! The host drives everything. It calls [`WastelandMod::on_enable`] once at
//! startup, [`WastelandMod::on_spawn_finalize`] per spawn attempt, and
//! [`WastelandMod::on_living_tick`] per living entity per tick; the mod never
//! schedules anything itself.

use std::path::Path;

use tracing::info;
use wasteland_config::{ConfigError, ConfigHandle, WastelandConfig};
use wasteland_content::ContentRegistry;
use wasteland_core::{EffectSink, EventResult, SpawnRequest, TickSubject, WorldQuery};
use wasteland_rules::{evaluate_spawn, evaluate_water_hazard, AllowExternalStructures};

pub struct WastelandMod {
    config: ConfigHandle,
}

impl WastelandMod {
    pub fn new(config: WastelandConfig) -> Self {
        Self {
            config: ConfigHandle::new(config),
        }
    }

    /// Construct with a validated config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Ok(Self::new(WastelandConfig::load(path)?))
    }

    /// Startup hook: declare this mod's content to the host registry.
    pub fn on_enable(&self, registry: &mut dyn ContentRegistry) {
        wasteland_content::register_all(registry);
        info!("wasteland mod initialized (content + config + conditions)");
    }

    /// Spawn-finalize hook. `Cancelled` means the host must not create the
    /// entity.
    pub fn on_spawn_finalize(&self, world: &dyn WorldQuery, request: &SpawnRequest) -> EventResult {
        evaluate_spawn(world, request, &self.config.current())
    }

    /// Living-entity tick hook. Applies water radiation through `effects`
    /// when the subject is eligible.
    pub fn on_living_tick(
        &self,
        world: &dyn WorldQuery,
        subject: &TickSubject,
        effects: &mut dyn EffectSink,
    ) {
        if let Some(application) = evaluate_water_hazard(world, subject, &self.config.current()) {
            effects.apply_effect(&application);
        }
    }

    /// Hook for the data-driven condition evaluator: the live value of the
    /// `wasteland:allow_external_structures` condition.
    pub fn allow_external_structures(&self) -> bool {
        AllowExternalStructures.evaluate(&self.config.current())
    }

    /// Swap in a new configuration snapshot. On error the previous snapshot
    /// stays active.
    pub fn reload_config<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        self.config.reload(path)
    }
}

impl Default for WastelandMod {
    fn default() -> Self {
        Self::new(WastelandConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasteland_core::{
        BlockPos, EffectApplication, GameMode, Identifier, LiquidKind, SpawnCause, StatusEffect,
    };

    struct MockWorld {
        biome: Option<Identifier>,
    }

    impl MockWorld {
        fn wasteland() -> Self {
            Self {
                biome: Some(Identifier::new("wasteland", "wasteland")),
            }
        }
    }

    impl WorldQuery for MockWorld {
        fn is_client_side(&self) -> bool {
            false
        }
        fn biome_at(&self, _pos: BlockPos) -> Option<Identifier> {
            self.biome.clone()
        }
        fn liquid_at(&self, _pos: BlockPos) -> LiquidKind {
            LiquidKind::None
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        applied: Vec<EffectApplication>,
    }

    impl EffectSink for RecordingSink {
        fn apply_effect(&mut self, application: &EffectApplication) {
            self.applied.push(*application);
        }
    }

    #[derive(Default)]
    struct RecordingRegistry {
        blocks: usize,
        items: usize,
    }

    impl ContentRegistry for RecordingRegistry {
        fn register_block(&mut self, _def: &wasteland_content::BlockDef) {
            self.blocks += 1;
        }
        fn register_item(&mut self, _def: &wasteland_content::ItemDef) {
            self.items += 1;
        }
    }

    fn external_spawn() -> SpawnRequest {
        SpawnRequest {
            entity_type: Some(Identifier::new("othermod", "mutant")),
            position: BlockPos::new(0, 64, 0),
            cause: SpawnCause::Natural,
        }
    }

    fn wet_player() -> TickSubject {
        TickSubject {
            position: BlockPos::new(0, 64, 0),
            in_water_or_bubble: true,
            is_player: true,
            game_mode: Some(GameMode::Survival),
        }
    }

    #[test]
    fn enable_registers_content() {
        let module = WastelandMod::default();
        let mut registry = RecordingRegistry::default();
        module.on_enable(&mut registry);
        assert_eq!(registry.blocks, 2);
        assert_eq!(registry.items, 2);
    }

    #[test]
    fn spawn_hook_cancels_external_mob() {
        let module = WastelandMod::default();
        let world = MockWorld::wasteland();
        assert_eq!(
            module.on_spawn_finalize(&world, &external_spawn()),
            EventResult::Cancelled
        );
    }

    #[test]
    fn tick_hook_applies_poison() {
        let module = WastelandMod::default();
        let world = MockWorld::wasteland();
        let mut sink = RecordingSink::default();
        module.on_living_tick(&world, &wet_player(), &mut sink);
        assert_eq!(sink.applied.len(), 1);
        assert_eq!(sink.applied[0].effect, StatusEffect::Poison);
        assert_eq!(sink.applied[0].duration_ticks, 60);
    }

    #[test]
    fn tick_hook_no_op_outside_biome() {
        let module = WastelandMod::default();
        let world = MockWorld {
            biome: Some(Identifier::vanilla("plains")),
        };
        let mut sink = RecordingSink::default();
        module.on_living_tick(&world, &wet_player(), &mut sink);
        assert!(sink.applied.is_empty());
    }

    #[test]
    fn condition_follows_reload() {
        let module = WastelandMod::default();
        assert!(!module.allow_external_structures());

        let dir = std::env::temp_dir().join("wasteland-mod-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("opt-in.toml");
        std::fs::write(&path, "[worldgen]\nallow_external_structures = true\n").unwrap();
        module.reload_config(&path).unwrap();
        assert!(module.allow_external_structures());
    }

    #[test]
    fn reload_changes_rule_inputs() {
        let module = WastelandMod::default();
        let world = MockWorld::wasteland();
        assert_eq!(
            module.on_spawn_finalize(&world, &external_spawn()),
            EventResult::Cancelled
        );

        let dir = std::env::temp_dir().join("wasteland-mod-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("allow-mobs.toml");
        std::fs::write(&path, "[spawns]\nallow_external_mobs = true\n").unwrap();
        module.reload_config(&path).unwrap();
        assert_eq!(
            module.on_spawn_finalize(&world, &external_spawn()),
            EventResult::Continue
        );
    }

    #[test]
    fn load_rejects_invalid_file() {
        let dir = std::env::temp_dir().join("wasteland-mod-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("invalid.toml");
        std::fs::write(&path, "[water_radiation]\npoison_amplifier = 9\n").unwrap();
        assert!(WastelandMod::load(&path).is_err());
    }
}
