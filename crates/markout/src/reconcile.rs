//! Format-run reconciliation.
//!
//! Adjacent inline runs may share some active formats and differ in others.
//! Emitting every run's tags independently would produce redundant pairs
//! (`**a****b**` for two bold runs) or broken nesting. Reconciliation diffs
//! each run's format list against the previous run's and only emits the
//! tags that actually change.
//!
//! Invariant: a contiguous sequence of runs sharing a leading format
//! produces exactly one open/close pair for it, and tags close in reverse
//! order of opening.

use crate::format::{FormatSpec, InlineRun};

/// Reconcile an ordered sequence of inline runs into a single string.
///
/// For each run, the longest common leading prefix of its format list
/// against the previous run's stays open; everything the previous run had
/// beyond the prefix closes (in reverse), everything the current run adds
/// opens (in order). A format that applies to runs 1 and 3 but not 2
/// closes and reopens; that is the documented behavior of the diffing
/// policy.
pub fn reconcile(runs: &[InlineRun]) -> String {
    let mut out = String::new();
    let mut open: &[FormatSpec] = &[];

    for run in runs {
        let current = run.formats.as_slice();
        let common = open
            .iter()
            .zip(current)
            .take_while(|(prev, cur)| prev == cur)
            .count();

        for spec in open[common..].iter().rev() {
            out.push_str(spec.close_tag);
        }
        for spec in &current[common..] {
            out.push_str(spec.open_tag);
        }
        out.push_str(&run.text);
        open = current;
    }

    for spec in open.iter().rev() {
        out.push_str(spec.close_tag);
    }

    out
}
