//! Classification service - One model call per clause

use std::{fmt, sync::Arc, time::Duration};

use domain::{Clause, ClauseVerdict, VerdictRule};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use super::prompt::ClausePromptBuilder;
use crate::{error::ApplicationError, ports::InferencePort};

/// Service that asks the model for a verdict on each clause
pub struct ClassificationService {
    inference: Arc<dyn InferencePort>,
    prompts: ClausePromptBuilder,
    call_timeout: Option<Duration>,
}

impl fmt::Debug for ClassificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationService")
            .field("rule", &self.prompts.rule())
            .field("call_timeout", &self.call_timeout)
            .finish_non_exhaustive()
    }
}

impl ClassificationService {
    /// Create a classification service prompting for the given rule
    pub fn new(inference: Arc<dyn InferencePort>, rule: VerdictRule) -> Self {
        Self {
            inference,
            prompts: ClausePromptBuilder::new(rule),
            call_timeout: None,
        }
    }

    /// Bound every model call by `limit`
    #[must_use]
    pub const fn with_call_timeout(mut self, limit: Duration) -> Self {
        self.call_timeout = Some(limit);
        self
    }

    pub const fn rule(&self) -> VerdictRule {
        self.prompts.rule()
    }

    /// Classify clauses strictly in order, one call each
    ///
    /// Returns one verdict per clause in input order. The first failing call
    /// aborts the run and everything computed so far is dropped.
    #[instrument(skip(self, clauses), fields(clauses = clauses.len(), rule = %self.rule()))]
    pub async fn classify(&self, clauses: &[Clause]) -> Result<Vec<ClauseVerdict>, ApplicationError> {
        let mut verdicts = Vec::with_capacity(clauses.len());

        for (clause_index, clause) in clauses.iter().enumerate() {
            let content = self
                .classify_one(clause)
                .await
                .map_err(|reason| {
                    warn!(clause_index, %reason, "Clause classification failed");
                    ApplicationError::Classification {
                        clause_index,
                        reason,
                    }
                })?;
            verdicts.push(ClauseVerdict::new(clause.clone(), content));
        }

        debug!(verdicts = verdicts.len(), "Classification completed");
        Ok(verdicts)
    }

    async fn classify_one(&self, clause: &Clause) -> Result<String, String> {
        let prompt = self.prompts.build(clause);
        let call = self.inference.generate(&prompt);

        let result = match self.call_timeout {
            Some(limit) => timeout(limit, call)
                .await
                .map_err(|_| format!("model call timed out after {}ms", limit.as_millis()))?,
            None => call.await,
        };

        let result = result.map_err(|e| e.to_string())?;
        debug!(
            model = %result.model,
            tokens = ?result.tokens_used,
            latency_ms = result.latency_ms,
            "Clause classified"
        );
        Ok(result.content)
    }
}
