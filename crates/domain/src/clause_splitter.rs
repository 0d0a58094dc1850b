//! Naive clause splitting
//!
//! Page texts are joined with a single newline and the result is cut on
//! blank lines (two consecutive newlines). No attempt is made to understand
//! numbering, headings or tables.

use crate::value_objects::{BlankClausePolicy, Clause};

/// Delimiter between clauses
pub const CLAUSE_DELIMITER: &str = "\n\n";

/// Separator inserted between consecutive pages
pub const PAGE_SEPARATOR: &str = "\n";

/// Join page texts in page order, skipping pages with no text
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push_str(PAGE_SEPARATOR);
        }
        joined.push_str(page);
    }
    joined
}

/// Split text into clauses on [`CLAUSE_DELIMITER`], preserving order
///
/// Segments are kept verbatim. With [`BlankClausePolicy::Skip`] segments that
/// are empty or whitespace-only are dropped; with [`BlankClausePolicy::Keep`]
/// the output has exactly one element per delimiter-separated segment.
pub fn split_clauses(text: &str, policy: BlankClausePolicy) -> Vec<Clause> {
    text.split(CLAUSE_DELIMITER)
        .filter(|segment| policy.keeps_blank() || !segment.trim().is_empty())
        .map(Clause::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(clauses: &[Clause]) -> Vec<&str> {
        clauses.iter().map(Clause::as_str).collect()
    }

    #[test]
    fn splits_on_blank_lines() {
        let clauses = split_clauses(
            "Data is stored securely.\n\nWe sell user data without consent.",
            BlankClausePolicy::Skip,
        );
        assert_eq!(
            texts(&clauses),
            vec![
                "Data is stored securely.",
                "We sell user data without consent."
            ]
        );
    }

    #[test]
    fn text_without_separator_is_one_clause() {
        let text = "One long block of text\nspanning several lines\nwith no blank line.";
        let clauses = split_clauses(text, BlankClausePolicy::Skip);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].as_str(), text);
    }

    #[test]
    fn keep_policy_passes_blank_segments_through() {
        let clauses = split_clauses("A\n\n\n\nB", BlankClausePolicy::Keep);
        assert_eq!(texts(&clauses), vec!["A", "", "B"]);
    }

    #[test]
    fn skip_policy_drops_blank_segments() {
        let clauses = split_clauses("A\n\n\n\nB\n\n   \n\n", BlankClausePolicy::Skip);
        assert_eq!(texts(&clauses), vec!["A", "B"]);
    }

    #[test]
    fn odd_newline_runs_leave_leading_newline() {
        let clauses = split_clauses("A\n\n\nB", BlankClausePolicy::Skip);
        assert_eq!(texts(&clauses), vec!["A", "\nB"]);
    }

    #[test]
    fn empty_text_yields_nothing_when_skipping() {
        assert!(split_clauses("", BlankClausePolicy::Skip).is_empty());
        assert_eq!(split_clauses("", BlankClausePolicy::Keep).len(), 1);
    }

    #[test]
    fn join_pages_uses_single_newline() {
        let joined = join_pages(["Page one.", "Page two."]);
        assert_eq!(joined, "Page one.\nPage two.");
    }

    #[test]
    fn join_pages_skips_empty_pages() {
        let joined = join_pages(["", "First", "", "Second", ""]);
        assert_eq!(joined, "First\nSecond");
    }

    #[test]
    fn clause_spanning_a_page_break_stays_whole() {
        let joined = join_pages(["Data is stored", "securely in the EU."]);
        let clauses = split_clauses(&joined, BlankClausePolicy::Skip);
        assert_eq!(texts(&clauses), vec!["Data is stored\nsecurely in the EU."]);
    }
}
