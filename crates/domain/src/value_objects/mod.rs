//! Value objects - Immutable objects defined by their attributes

mod blank_clause_policy;
mod clause;
mod compliance_status;
mod verdict_rule;

pub use blank_clause_policy::BlankClausePolicy;
pub use clause::Clause;
pub use compliance_status::{COMPLIANT_TOKEN, ComplianceStatus, NON_COMPLIANT_TOKEN};
pub use verdict_rule::VerdictRule;
