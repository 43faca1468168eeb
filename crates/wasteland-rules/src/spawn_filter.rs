//! Spawn filter: blocks non-whitelisted mobs from spawning naturally in the
//! wasteland biome.

use tracing::debug;
use wasteland_config::WastelandConfig;
use wasteland_core::{
    EventResult, SpawnCause, SpawnRequest, WorldQuery, MOD_ID, VANILLA_NAMESPACE,
};

use crate::biome::is_wasteland_biome;

/// Decide whether a proposed spawn goes ahead.
///
/// Only natural-like spawns (natural, chunk generation, patrol, structure)
/// inside the wasteland are ever restricted; everything else continues.
/// `Cancelled` means the host must not create the entity. Deterministic given
/// identical inputs; a cancelled spawn carries no retry state.
pub fn evaluate_spawn(
    world: &dyn WorldQuery,
    request: &SpawnRequest,
    config: &WastelandConfig,
) -> EventResult {
    // Only the authoritative side cancels spawns.
    if world.is_client_side() {
        return EventResult::Continue;
    }

    if !is_wasteland_biome(world, request.position) {
        return EventResult::Continue;
    }

    if config.spawns.allow_external_mobs {
        return EventResult::Continue;
    }

    // Spawners, eggs, commands, and the rest are always permitted; the
    // default arm is deliberate fail-open policy.
    match request.cause {
        SpawnCause::Natural
        | SpawnCause::ChunkGeneration
        | SpawnCause::Patrol
        | SpawnCause::Structure => {}
        _ => return EventResult::Continue,
    }

    // Unresolvable entity types are allowed to avoid false positives.
    let Some(entity_type) = &request.entity_type else {
        return EventResult::Continue;
    };

    let ns = entity_type.namespace();
    if ns == VANILLA_NAMESPACE || ns == MOD_ID {
        return EventResult::Continue;
    }

    debug!("cancelling wasteland spawn of {entity_type} ({:?})", request.cause);
    EventResult::Cancelled
}
