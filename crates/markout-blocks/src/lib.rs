//! # markout-blocks
//!
//! Block container conversions for [`markout`]: quotes, lists, tables,
//! fenced code blocks, thematic breaks and images.
//!
//! These live outside the serializer core and are built entirely from its
//! public extension contract (`wrap_block`, `flush_pending_close`,
//! `pending_block`, `set_suppress_blank_lines`), so they double as a
//! reference for writing conversion maps for custom node kinds.
//!
//! ## Example
//!
//! ```rust
//! use markout::{MarkdownExporter, Node};
//! use markout_blocks::{block_conversions, bulleted_list, list_item, quote};
//!
//! let doc = Node::root().with_child(
//!     quote().with_child(
//!         bulleted_list()
//!             .with_child(list_item().with_child(
//!                 Node::paragraph().with_child(Node::text("first")),
//!             ))
//!             .with_child(list_item().with_child(
//!                 Node::paragraph().with_child(Node::text("second")),
//!             )),
//!     ),
//! );
//!
//! let exporter = MarkdownExporter::with_maps(block_conversions());
//! assert_eq!(exporter.export(&doc).unwrap(), "> - first\n> - second");
//! ```

mod code;
mod list;
mod media;
mod quote;
mod table;

pub use code::{code_block, code_conversions, CODE_BLOCK};
pub use list::{bulleted_list, list_conversions, list_item, ordered_list, LIST, LIST_ITEM};
pub use media::{horizontal_rule, image, media_conversions, HORIZONTAL_RULE, IMAGE};
pub use quote::{quote, quote_conversions, QUOTE};
pub use table::{table, table_cell, table_conversions, table_row, TABLE, TABLE_CELL, TABLE_ROW};

use markout::ConversionMap;

/// All block conversion maps, ready to pass to
/// [`markout::MarkdownExporter::with_maps`] or
/// [`markout::generate_markdown`].
pub fn block_conversions() -> Vec<ConversionMap> {
    vec![
        quote_conversions(),
        list_conversions(),
        table_conversions(),
        code_conversions(),
        media_conversions(),
    ]
}
