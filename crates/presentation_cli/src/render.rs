//! Terminal output for clauses and reports

use std::fmt::Write;

use domain::Clause;
use presentation_http::handlers::compliance::{ReportResponse, VerdictItem};

const RULE: &str = "---";

/// Numbered clause listing, one based
pub fn clauses(clauses: &[Clause]) -> String {
    let mut out = format!("Extracted {} clauses from the document.\n\n", clauses.len());
    out.push_str("### Extracted Clauses\n");
    for (i, clause) in clauses.iter().enumerate() {
        let _ = writeln!(out, "Clause {}: {}", i + 1, clause.as_str().trim_end());
    }
    out
}

fn section(out: &mut String, title: &str, items: &[VerdictItem], when_empty: &str) {
    let _ = writeln!(out, "\n#### {title}");
    if items.is_empty() {
        let _ = writeln!(out, "{when_empty}");
        return;
    }
    for item in items {
        let _ = writeln!(out, "Clause: {}", item.clause.trim_end());
        let _ = writeln!(out, "Result: {}", item.result.trim_end());
        let _ = writeln!(out, "{RULE}");
    }
}

/// Compliant and non-compliant sections followed by the overall banner
pub fn report(report: &ReportResponse) -> String {
    let mut out = String::from("### GDPR Compliance Results\n");
    section(
        &mut out,
        "Compliant Clauses",
        &report.compliant,
        "No compliant clauses found.",
    );
    section(
        &mut out,
        "Non-Compliant Clauses",
        &report.non_compliant,
        "No non-compliant clauses found.",
    );
    let _ = writeln!(out, "\n{}", report.summary);
    out
}
