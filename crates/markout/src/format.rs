//! Text formats and their Markdown tag pairs.
//!
//! A [`Format`] is what a host tree stores on a text node ("this run is
//! bold"). A [`FormatSpec`] is the concrete tag pair the serializer emits
//! for it. The reconciler only ever sees `FormatSpec`s, so alternate tag
//! pairs for the same format kind can be introduced without touching it.

/// An active text format on an inline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Bold,
    Italic,
    Strikethrough,
    Highlight,
    Underline,
    Subscript,
    Superscript,
    Code,
}

impl Format {
    /// Application order for overlapping formats.
    ///
    /// This order defines how tags nest when a run carries several formats
    /// at once, and it must be applied identically for every text leaf —
    /// otherwise two runs sharing the same format set would produce
    /// different tag sequences and the reconciler could not merge them.
    pub const PRECEDENCE: [Format; 8] = [
        Format::Bold,
        Format::Italic,
        Format::Strikethrough,
        Format::Highlight,
        Format::Underline,
        Format::Subscript,
        Format::Superscript,
        Format::Code,
    ];

    /// The tag pair emitted for this format.
    pub fn spec(self) -> FormatSpec {
        match self {
            Format::Bold => FormatSpec::markdown("bold", "**"),
            Format::Italic => FormatSpec::markdown("italic", "*"),
            Format::Strikethrough => FormatSpec::markdown("strikethrough", "~~"),
            Format::Highlight => FormatSpec::html("highlight", "<mark>", "</mark>"),
            Format::Underline => FormatSpec::html("underline", "<u>", "</u>"),
            Format::Subscript => FormatSpec::html("subscript", "<sub>", "</sub>"),
            Format::Superscript => FormatSpec::html("superscript", "<sup>", "</sup>"),
            Format::Code => FormatSpec::markdown("code", "`"),
        }
    }
}

/// A concrete open/close tag pair for one format kind.
#[derive(Debug, Clone, Copy)]
pub struct FormatSpec {
    pub kind: &'static str,
    pub open_tag: &'static str,
    pub close_tag: &'static str,
    /// True for formats Markdown has no syntax for (`<u>`, `<sub>`, ...).
    pub html_inline: bool,
}

impl FormatSpec {
    /// A symmetric Markdown delimiter pair (`**`, `*`, `~~`, `` ` ``).
    pub const fn markdown(kind: &'static str, tag: &'static str) -> Self {
        Self {
            kind,
            open_tag: tag,
            close_tag: tag,
            html_inline: false,
        }
    }

    /// An HTML-inline tag pair.
    pub const fn html(kind: &'static str, open: &'static str, close: &'static str) -> Self {
        Self {
            kind,
            open_tag: open,
            close_tag: close,
            html_inline: true,
        }
    }
}

// close_tag is derived from the other fields, never compared: one kind may
// map to alternate close forms without becoming a distinct format.
impl PartialEq for FormatSpec {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.open_tag == other.open_tag
            && self.html_inline == other.html_inline
    }
}

impl Eq for FormatSpec {}

/// A contiguous piece of text with its active format tag pairs, in
/// application order. Produced while visiting text-bearing leaves and
/// discarded once the inline buffer is flushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRun {
    pub text: String,
    pub formats: Vec<FormatSpec>,
}

impl InlineRun {
    pub fn new(text: impl Into<String>, formats: Vec<FormatSpec>) -> Self {
        Self {
            text: text.into(),
            formats,
        }
    }

    /// A run with no active formats.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }
}
