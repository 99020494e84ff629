//! # markout
//!
//! Serialize rich-document trees to Markdown.
//!
//! The serializer walks a tree of blocks containing inline runs (each run
//! carrying a set of active text formats) and emits Markdown that parses
//! back to the same structure. The two load-bearing pieces:
//!
//! - **Format-run reconciliation**: adjacent runs that share formats get
//!   exactly one open/close tag pair for the shared part, tags always nest
//!   properly, and a tag stays open across sibling runs that keep using
//!   it.
//! - **Delimiter stacking**: nested block containers (quotes, list items)
//!   prefix every output line with an accumulated delimiter, sibling
//!   blocks get exact blank-line spacing, and contexts that forbid bare
//!   newlines (table cells) suppress it.
//!
//! Conversions are pluggable: node kinds map to conversion factories via
//! [`ConversionMap`]s, merged with priority tie-breaking, so hosts can add
//! custom node kinds without touching the core.
//!
//! ## Example
//!
//! ```rust
//! use markout::{Format, MarkdownExporter, Node};
//!
//! let doc = Node::root()
//!     .with_child(Node::heading(1).with_child(Node::text("Title")))
//!     .with_child(
//!         Node::paragraph()
//!             .with_child(Node::text("plain "))
//!             .with_child(Node::text("bold").with_format(Format::Bold)),
//!     );
//!
//! let exporter = MarkdownExporter::new();
//! let markdown = exporter.export(&doc).unwrap();
//! assert_eq!(markdown, "# Title\n\nplain **bold**");
//! ```

pub mod conversions;
pub mod dispatch;
pub mod format;
pub mod node;
mod options;
mod reconcile;
mod state;
mod utilities;

mod exporter;

pub use conversions::{builtin_conversions, ApplyFn, Conversion, ConversionMap, Registry};
pub use dispatch::{dispatch, dispatch_children, dispatch_inline_region};
pub use exporter::{generate_markdown, MarkdownExporter};
pub use format::{Format, FormatSpec, InlineRun};
pub use node::Node;
pub use options::ExportOptions;
pub use reconcile::reconcile;
pub use state::State;
pub use utilities::escape_inline;

/// Error type for export operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The root node resolved no conversion and has no children to walk.
    #[error("root node type `{0}` has no conversion and no children")]
    UnconvertibleRoot(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;
