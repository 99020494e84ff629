//! Table conversion.
//!
//! A table node's children are rows, a row's children are cells, and a
//! cell's children are blocks (usually a single paragraph). The first row
//! is the header row. Cells forbid bare newlines, so blank-line
//! suppression is active while cell content is converted: paragraphs
//! inside a cell emit their inline content and never a trailing blank
//! line.

use markout::{dispatch_inline_region, ConversionMap, Node};

pub const TABLE: &str = "table";
pub const TABLE_ROW: &str = "tablerow";
pub const TABLE_CELL: &str = "tablecell";

pub fn table() -> Node {
    Node::container(TABLE)
}

pub fn table_row() -> Node {
    Node::container(TABLE_ROW)
}

pub fn table_cell() -> Node {
    Node::container(TABLE_CELL)
}

pub fn table_conversions() -> ConversionMap {
    let mut map = ConversionMap::new();
    map.on(TABLE, convert_table);
    map
}

fn convert_table(node: &Node, state: &mut markout::State) {
    for (row_index, row) in node.children().enumerate() {
        for cell in row.children() {
            state.write("| ");
            let prev = state.set_suppress_blank_lines(true);
            dispatch_inline_region(cell, state);
            state.set_suppress_blank_lines(prev);
            state.write(" ");
        }
        state.write("|");
        state.ensure_newline();

        if row_index == 0 {
            for _ in row.children() {
                state.write("| --- ");
            }
            state.write("|");
            state.ensure_newline();
        }
    }
    state.close_block(node);
}
