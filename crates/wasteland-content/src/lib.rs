//! Static content declarations: the wasteland blocks and their item forms.
//!
//! These are data tables, not logic. At startup they are fed to the host
//! engine's registration API through the [`ContentRegistry`] trait; the engine
//! owns rendering, tool handling, and sound playback.

pub mod block;
pub mod item;

use tracing::info;

pub use block::{blocks, BlockDef, BlockSound, MapColor};
pub use item::{items, ItemDef};

/// The host engine's registration API, called once at startup.
pub trait ContentRegistry {
    fn register_block(&mut self, def: &BlockDef);
    fn register_item(&mut self, def: &ItemDef);
}

/// Feed every declared block and item to the host registry.
pub fn register_all(registry: &mut dyn ContentRegistry) {
    for def in blocks() {
        registry.register_block(def);
    }
    for def in items() {
        registry.register_item(def);
    }
    info!(
        "registered {} wasteland blocks and {} items",
        blocks().len(),
        items().len()
    );
}
