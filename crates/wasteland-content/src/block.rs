//! Block declaration table.
//!
//! Strength values follow the engine convention: destroy time in seconds of
//! bare-hand mining, explosion resistance as blast units.

/// Map color shown for a block on in-game maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapColor {
    Stone,
    Dirt,
}

/// Sound group played when the block is placed, broken, or stepped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSound {
    Stone,
    Gravel,
}

/// Declaration of a single block.
#[derive(Debug, Clone)]
pub struct BlockDef {
    /// Namespaced block identifier.
    pub name: &'static str,
    pub map_color: MapColor,
    /// Seconds to destroy without a tool.
    pub destroy_time: f32,
    /// Blast resistance.
    pub explosion_resistance: f32,
    /// Whether drops require the correct tool tier.
    pub requires_correct_tool: bool,
    pub sound: BlockSound,
}

/// All block declarations.
static BLOCK_DEFS: &[BlockDef] = &[
    BlockDef {
        name: "wasteland:wasteland_block",
        map_color: MapColor::Stone,
        destroy_time: 1.5,
        explosion_resistance: 6.0,
        requires_correct_tool: true,
        sound: BlockSound::Stone,
    },
    BlockDef {
        name: "wasteland:wasteland_dirt",
        map_color: MapColor::Dirt,
        destroy_time: 0.6,
        explosion_resistance: 0.6,
        requires_correct_tool: false,
        sound: BlockSound::Gravel,
    },
];

/// The static block declaration table.
pub fn blocks() -> &'static [BlockDef] {
    BLOCK_DEFS
}
