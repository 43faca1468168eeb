//! Water hazard: poison for entities touching water inside the wasteland.

use tracing::debug;
use wasteland_config::WastelandConfig;
use wasteland_core::{
    EffectApplication, LiquidKind, StatusEffect, TickSubject, WorldQuery,
};

use crate::biome::is_wasteland_biome;

/// Decide whether to poison the subject this tick.
///
/// Returns the effect to apply, or `None` for a no-op. The rule holds no
/// timer state: it re-issues the application every eligible tick and lets the
/// engine's effect mechanics handle refresh.
pub fn evaluate_water_hazard(
    world: &dyn WorldQuery,
    subject: &TickSubject,
    config: &WastelandConfig,
) -> Option<EffectApplication> {
    if world.is_client_side() {
        return None;
    }

    if config.water_radiation.affect_players_only && !subject.is_player {
        return None;
    }

    // Creative and spectator players are non-physical by convention.
    if subject.is_player && subject.game_mode.is_some_and(|m| m.is_hazard_exempt()) {
        return None;
    }

    if !is_wasteland_biome(world, subject.position) {
        return None;
    }

    let in_water =
        subject.in_water_or_bubble || world.liquid_at(subject.position) == LiquidKind::Water;
    if !in_water {
        return None;
    }

    debug!("water radiation at {:?}", subject.position);
    Some(EffectApplication {
        effect: StatusEffect::Poison,
        duration_ticks: config.water_radiation.poison_duration_ticks,
        amplifier: config.water_radiation.poison_amplifier,
        ambient: true,
        visible: true,
    })
}
