//! Item declaration table. Every wasteland item is the block-item form of a
//! declared block.

/// Declaration of a single item.
#[derive(Debug, Clone)]
pub struct ItemDef {
    /// Namespaced item identifier.
    pub name: &'static str,
    /// The block this item places.
    pub block: &'static str,
}

static ITEM_DEFS: &[ItemDef] = &[
    ItemDef {
        name: "wasteland:wasteland_block",
        block: "wasteland:wasteland_block",
    },
    ItemDef {
        name: "wasteland:wasteland_dirt",
        block: "wasteland:wasteland_dirt",
    },
];

/// The static item declaration table.
pub fn items() -> &'static [ItemDef] {
    ITEM_DEFS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_two_block_items() {
        assert_eq!(items().len(), 2);
        for item in items() {
            assert_eq!(item.name, item.block);
        }
    }
}
