//! Event payloads the host builds and hands to the rules, one per occurrence.

use crate::identifier::Identifier;
use crate::position::BlockPos;
use crate::GameMode;

/// Result of evaluating a cancellable host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue normal handling.
    Continue,
    /// Cancel the event at the host level.
    Cancelled,
}

/// The enumerated reason an entity is being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnCause {
    Natural,
    ChunkGeneration,
    Patrol,
    Structure,
    Spawner,
    SpawnEgg,
    Command,
    Other,
}

/// A proposed entity spawn, consumed once by the spawn filter.
#[derive(Debug, Clone)]
pub struct SpawnRequest {
    /// `None` when the host registry cannot resolve the entity's type.
    pub entity_type: Option<Identifier>,
    pub position: BlockPos,
    pub cause: SpawnCause,
}

/// A living entity's per-tick state, supplied by the host each tick.
#[derive(Debug, Clone)]
pub struct TickSubject {
    pub position: BlockPos,
    /// Whether the entity is submerged in water or in a bubble column.
    pub in_water_or_bubble: bool,
    pub is_player: bool,
    /// `None` for non-players.
    pub game_mode: Option<GameMode>,
}
