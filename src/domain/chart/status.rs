use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle of the chart narrative within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStatus {
    /// No profile submitted yet, or profile just replaced.
    #[default]
    NotStarted,
    Generating,
    Ready,
    Failed,
}

impl ChartStatus {
    /// Whether the "next" control may move on to the soulmate step.
    pub fn is_complete(&self) -> bool {
        matches!(self, ChartStatus::Ready)
    }
}

impl StateMachine for ChartStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ChartStatus::*;
        matches!(
            (self, target),
            (NotStarted, Generating) | (Generating, Ready) | (Generating, Failed) | (Failed, Generating)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ChartStatus::*;
        match self {
            NotStarted => vec![Generating],
            Generating => vec![Ready, Failed],
            Ready => vec![],
            Failed => vec![Generating],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_is_terminal() {
        assert!(ChartStatus::Ready.is_terminal());
        assert!(ChartStatus::Ready.is_complete());
    }

    #[test]
    fn failed_can_retry() {
        assert_eq!(
            ChartStatus::Failed.transition_to(ChartStatus::Generating),
            Ok(ChartStatus::Generating)
        );
        assert!(!ChartStatus::Failed.is_complete());
    }

    #[test]
    fn cannot_skip_generation() {
        assert!(ChartStatus::NotStarted
            .transition_to(ChartStatus::Ready)
            .is_err());
    }
}
