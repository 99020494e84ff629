//! Built-in conversions for the generic document primitives.

use super::ConversionMap;
use crate::dispatch::{dispatch_children, dispatch_inline_region};
use crate::format::{Format, InlineRun};
use crate::node::{self, Node};
use crate::state::State;
use crate::utilities::escape_inline;

/// The conversion map every exporter starts from: root, text, line break,
/// tab, paragraph, heading, link and autolink. All priority 0, so
/// extension maps can override any of them with a higher priority.
pub fn builtin_conversions() -> ConversionMap {
    let mut map = ConversionMap::new();

    map.on(node::ROOT, |node, state| dispatch_children(node, state));

    // Declines for empty text so other maps may still claim the node.
    map.insert(node::TEXT, |node| {
        if node.text_content().is_empty() {
            None
        } else {
            Some(super::Conversion::new(convert_text))
        }
    });

    map.on(node::LINE_BREAK, |_, state| {
        state.flush_inline();
        state.ensure_newline();
    });

    // Markdown has no tab semantics; expand to four spaces. The spaces
    // join the inline buffer as an unformatted run so a tab between two
    // buffered text runs keeps its position.
    map.on(node::TAB, |_, state| {
        state.push_inline_run(InlineRun::plain("    "));
    });

    map.on(node::PARAGRAPH, convert_paragraph);
    map.on(node::HEADING, convert_heading);
    map.on(node::LINK, convert_link);
    map.on(node::AUTOLINK, convert_link);

    map
}

fn convert_text(node: &Node, state: &mut State) {
    let formats = node.active_specs();
    // Backticks neutralize inline syntax, so code runs stay verbatim.
    let text = if node.has_format(Format::Code) {
        node.text_content().to_string()
    } else {
        escape_inline(node.text_content())
    };
    state.push_inline_run(InlineRun::new(text, formats));
}

fn convert_paragraph(node: &Node, state: &mut State) {
    if state.blank_lines_suppressed() {
        // Contexts like table cells forbid bare newlines: emit the inline
        // content only and skip the block closure entirely.
        dispatch_inline_region(node, state);
        return;
    }
    if node.is_empty() {
        state.write("<br>");
        state.close_block(node);
        return;
    }
    dispatch_inline_region(node, state);
    state.close_block(node);
}

fn convert_heading(node: &Node, state: &mut State) {
    let level = node.level() as usize;
    let mut marker = "#".repeat(level);
    marker.push(' ');
    state.write(&marker);
    dispatch_inline_region(node, state);
    state.close_block(node);
}

fn convert_link(node: &Node, state: &mut State) {
    // The link's label is its own inline region: flush whatever the
    // enclosing region buffered, then collect the children into a fresh
    // buffer that is read back instead of written.
    state.flush_inline();
    dispatch_children(node, state);
    let label = state.take_reconciled();

    if node.is_unlinked() {
        state.write(&label);
        return;
    }

    let url = node.url().unwrap_or("");
    let rendered = match node.title() {
        Some(title) => format!("[{}]({} \"{}\")", label, url, title),
        None => format!("[{}]({})", label, url),
    };
    state.write(&rendered);
}
