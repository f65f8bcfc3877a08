//! Analysis state for one session.
//!
//! Tracks the lifecycle of the current invocation and the most recent
//! successful result. A failed invocation never clears an earlier success.

use bygg_core::catalog::Catalog;
use bygg_core::entities::{AiAnalysis, TimeEntry};
use bygg_core::enums::AnalysisState;

use crate::client::AnalysisClient;
use crate::error::AnalysisError;
use crate::GenerateContent;

#[derive(Debug, Clone)]
pub struct AnalysisSlot {
    state: AnalysisState,
    latest: Option<AiAnalysis>,
}

impl Default for AnalysisSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: AnalysisState::Idle,
            latest: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> AnalysisState {
        self.state
    }

    /// Most recent successful analysis, if any.
    #[must_use]
    pub const fn latest(&self) -> Option<&AiAnalysis> {
        self.latest.as_ref()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state == AnalysisState::Requesting
    }

    /// Enter `Requesting`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Busy`] while an invocation is outstanding.
    pub fn begin(&mut self) -> Result<(), AnalysisError> {
        if !self.state.can_transition_to(AnalysisState::Requesting) {
            return Err(AnalysisError::Busy);
        }
        self.state = AnalysisState::Requesting;
        Ok(())
    }

    /// Record the outcome of the outstanding invocation and return the new
    /// state. `None` keeps the previous result.
    pub fn complete(&mut self, outcome: Option<AiAnalysis>) -> AnalysisState {
        if !self.is_busy() {
            tracing::debug!(state = %self.state, "completing analysis that was not requested");
        }
        self.state = match outcome {
            Some(analysis) => {
                self.latest = Some(analysis);
                AnalysisState::Succeeded
            }
            None => AnalysisState::Failed,
        };
        self.state
    }

    /// `begin`, run `client` over `entries`, then `complete`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Busy`] if an invocation is already running.
    /// Analysis failures are not errors; they end in [`AnalysisState::Failed`].
    pub async fn run<T: GenerateContent>(
        &mut self,
        client: &AnalysisClient<T>,
        entries: &[TimeEntry],
        catalog: &Catalog,
    ) -> Result<AnalysisState, AnalysisError> {
        self.begin()?;
        let outcome = client.analyze(entries, catalog).await;
        Ok(self.complete(outcome))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn analysis(summary: &str) -> AiAnalysis {
        AiAnalysis {
            summary: summary.into(),
            efficiency: "e".into(),
            recommendations: vec![],
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let slot = AnalysisSlot::new();
        assert_eq!(slot.state(), AnalysisState::Idle);
        assert!(slot.latest().is_none());
        assert!(!slot.is_busy());
    }

    #[test]
    fn begin_refuses_while_requesting() {
        let mut slot = AnalysisSlot::new();
        slot.begin().unwrap();
        assert!(matches!(slot.begin(), Err(AnalysisError::Busy)));
        assert!(slot.is_busy());
    }

    #[test]
    fn success_then_failure_keeps_result() {
        let mut slot = AnalysisSlot::new();
        slot.begin().unwrap();
        assert_eq!(slot.complete(Some(analysis("första"))), AnalysisState::Succeeded);

        slot.begin().unwrap();
        assert_eq!(slot.complete(None), AnalysisState::Failed);
        assert_eq!(slot.latest().map(|a| a.summary.as_str()), Some("första"));
    }

    #[test]
    fn later_success_replaces_result() {
        let mut slot = AnalysisSlot::new();
        slot.begin().unwrap();
        slot.complete(Some(analysis("första")));
        slot.begin().unwrap();
        slot.complete(Some(analysis("andra")));
        assert_eq!(slot.latest().map(|a| a.summary.as_str()), Some("andra"));
    }
}
