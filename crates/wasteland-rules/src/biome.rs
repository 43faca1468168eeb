//! The biome gate shared by both rules.

use wasteland_core::{BlockPos, Identifier, WorldQuery, MOD_ID};

/// The reserved identifier of the wasteland biome.
pub fn wasteland_biome_id() -> Identifier {
    Identifier::new(MOD_ID, "wasteland")
}

/// Whether `pos` lies inside the wasteland biome.
///
/// An unresolvable biome key means "not the wasteland", never an error.
pub fn is_wasteland_biome(world: &dyn WorldQuery, pos: BlockPos) -> bool {
    match world.biome_at(pos) {
        Some(id) => id == wasteland_biome_id(),
        None => false,
    }
}
