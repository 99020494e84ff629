//! Serialization state.
//!
//! One `State` is created per export, mutated throughout the tree walk,
//! and discarded after the output is read. It owns the output buffer, the
//! block delimiter stack, pending-close tracking, and the inline-run
//! buffer. All literal text reaches the buffer through [`State::write`],
//! which is what keeps delimiter prefixing and blank-line spacing
//! consistent no matter which conversion is emitting.

use crate::conversions::Registry;
use crate::format::InlineRun;
use crate::node::Node;
use crate::options::ExportOptions;
use crate::reconcile::reconcile;

/// Whether the previous block is still awaiting its trailing separation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BlockState {
    Open,
    /// A block finished and deferred its trailing blank lines; holds the
    /// node type of that block so siblings can adjust their spacing.
    PendingClose(String),
}

/// Mutable serialization state, single-owner and single-threaded.
pub struct State<'a> {
    registry: &'a Registry,
    options: ExportOptions,
    out: String,
    delimiter: String,
    block: BlockState,
    suppress_blank_lines: bool,
    inline_buffer: Vec<InlineRun>,
}

impl<'a> State<'a> {
    pub fn new(registry: &'a Registry, options: ExportOptions) -> Self {
        Self {
            registry,
            options,
            out: String::new(),
            delimiter: String::new(),
            block: BlockState::Open,
            suppress_blank_lines: false,
            inline_buffer: Vec::new(),
        }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// The prefix written at the start of every new line while a block
    /// container is active (`"> "` for quotes, spaces for list items).
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: &str) {
        self.delimiter = delimiter.to_string();
    }

    /// Node type of the block awaiting closure, if any.
    pub fn pending_block(&self) -> Option<&str> {
        match &self.block {
            BlockState::Open => None,
            BlockState::PendingClose(node_type) => Some(node_type),
        }
    }

    /// Mark `node` as a finished block whose trailing separation is
    /// deferred until the next write decides how much spacing it needs.
    pub fn close_block(&mut self, node: &Node) {
        self.block = BlockState::PendingClose(node.node_type().to_string());
    }

    /// Drop any pending block closure without emitting anything.
    pub fn clear_pending_close(&mut self) {
        self.block = BlockState::Open;
    }

    pub fn blank_lines_suppressed(&self) -> bool {
        self.suppress_blank_lines
    }

    /// Toggle blank-line suppression (table cells and other contexts that
    /// forbid bare newlines). Returns the previous value so callers can
    /// restore it.
    pub fn set_suppress_blank_lines(&mut self, suppress: bool) -> bool {
        std::mem::replace(&mut self.suppress_blank_lines, suppress)
    }

    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    /// Append a newline unless the output is empty or already ends one.
    /// Idempotent: calling twice produces a single newline.
    pub fn ensure_newline(&mut self) {
        if !self.at_line_start() {
            self.out.push('\n');
        }
    }

    /// If a block closure is pending, emit its trailing separation and
    /// clear the marker. `size` is the total line count: 1 is a tight
    /// continuation, 2 (the default between sibling blocks) leaves one
    /// blank line, 3 leaves two. Separator lines carry the delimiter
    /// trimmed of trailing whitespace, so a quote yields `>` lines rather
    /// than `> `. The marker clears even when suppression skips emission.
    pub fn flush_pending_close(&mut self, size: usize) {
        if matches!(self.block, BlockState::PendingClose(_)) {
            if !self.suppress_blank_lines {
                self.ensure_newline();
                if size > 1 {
                    let trimmed = self.delimiter.trim_end().to_string();
                    for _ in 1..size {
                        self.out.push_str(&trimmed);
                        self.out.push('\n');
                    }
                }
            }
            self.block = BlockState::Open;
        }
    }

    /// Write literal content. The single choke point for output: flushes
    /// any pending block closure, prefixes the delimiter at start-of-line,
    /// then appends `content`.
    pub fn write(&mut self, content: &str) {
        self.flush_pending_close(2);
        if self.at_line_start() && !self.delimiter.is_empty() {
            self.out.push_str(&self.delimiter);
        }
        if !content.is_empty() {
            self.out.push_str(content);
        }
    }

    /// Write possibly-multiline content, one [`State::write`] per line, so
    /// embedded newlines still get delimiter-prefixed lines.
    pub fn text(&mut self, content: &str) {
        let mut lines = content.split('\n').peekable();
        while let Some(line) = lines.next() {
            self.write(line);
            if lines.peek().is_some() {
                self.out.push('\n');
            }
        }
    }

    /// Buffer an inline run for the current inline region.
    pub fn push_inline_run(&mut self, run: InlineRun) {
        self.inline_buffer.push(run);
    }

    /// Read-only view of the buffered runs.
    pub fn inline_runs(&self) -> &[InlineRun] {
        &self.inline_buffer
    }

    pub fn clear_inline_runs(&mut self) {
        self.inline_buffer.clear();
    }

    /// Reconcile the buffered runs, write the result, clear the buffer.
    pub fn flush_inline(&mut self) {
        if self.inline_buffer.is_empty() {
            return;
        }
        let reconciled = self.take_reconciled();
        self.text(&reconciled);
    }

    /// Reconcile the buffered runs and clear the buffer without writing.
    /// Used when reconciled text is embedded in other syntax (link labels).
    pub fn take_reconciled(&mut self) -> String {
        let runs = std::mem::take(&mut self.inline_buffer);
        reconcile(&runs)
    }

    /// Run `body` inside a nested block: writes `first_delim` (or `delim`)
    /// as the opening marker, extends the line delimiter by `delim` for
    /// the duration, restores it afterward, and marks `node` as a pending
    /// block closure.
    pub fn wrap_block<F>(&mut self, delim: &str, first_delim: Option<&str>, node: &Node, body: F)
    where
        F: FnOnce(&mut Self),
    {
        let saved = self.delimiter.clone();
        self.write(first_delim.unwrap_or(delim));
        self.delimiter.push_str(delim);
        body(self);
        self.delimiter = saved;
        self.close_block(node);
    }

    /// Consume the state, trimming leading and trailing newlines.
    pub fn into_output(self) -> String {
        self.out.trim_matches('\n').to_string()
    }

    #[cfg(test)]
    pub(crate) fn raw_output(&self) -> &str {
        &self.out
    }
}
