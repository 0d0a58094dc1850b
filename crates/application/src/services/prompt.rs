//! Prompt construction for per-clause review

use domain::{COMPLIANT_TOKEN, Clause, NON_COMPLIANT_TOKEN, VerdictRule};

/// Builds the instruction sent to the model for one clause
#[derive(Debug, Clone, Copy, Default)]
pub struct ClausePromptBuilder {
    rule: VerdictRule,
}

impl ClausePromptBuilder {
    #[must_use]
    pub const fn new(rule: VerdictRule) -> Self {
        Self { rule }
    }

    #[must_use]
    pub const fn rule(&self) -> VerdictRule {
        self.rule
    }

    /// The full prompt for `clause`, embedding its text verbatim
    #[must_use]
    pub fn build(&self, clause: &Clause) -> String {
        let mut prompt = format!(
            "Review the following clause for GDPR compliance:\n\n\
             Clause: {clause}\n\n\
             Output: Indicate whether the clause is compliant or non-compliant and provide reasoning."
        );

        if self.rule.requires_token() {
            prompt.push_str(&format!(
                "\n\nBegin your answer with exactly one of the tokens {COMPLIANT_TOKEN} or \
                 {NON_COMPLIANT_TOKEN} on its own line, then give your reasoning."
            ));
        }

        prompt
    }
}
