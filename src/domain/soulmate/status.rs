use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Progress of a soulmate reveal.
///
/// ```text
/// idle -> checking_cache -> done                                  (cache hit)
///                        -> generating_description -> generating_image -> done
///                                                 \-> error <-/
/// error | done -> checking_cache                                  (retry)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoulmateStatus {
    #[default]
    Idle,
    CheckingCache,
    GeneratingDescription,
    GeneratingImage,
    Done,
    Error,
}

impl SoulmateStatus {
    /// True while an attempt is between its first and last step.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            SoulmateStatus::CheckingCache
                | SoulmateStatus::GeneratingDescription
                | SoulmateStatus::GeneratingImage
        )
    }
}

impl StateMachine for SoulmateStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SoulmateStatus::*;
        matches!(
            (self, target),
            (Idle, CheckingCache)
                | (CheckingCache, Done)
                | (CheckingCache, GeneratingDescription)
                | (GeneratingDescription, GeneratingImage)
                | (GeneratingDescription, Error)
                | (GeneratingImage, Done)
                | (GeneratingImage, Error)
                | (Error, CheckingCache)
                | (Done, CheckingCache)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SoulmateStatus::*;
        match self {
            Idle => vec![CheckingCache],
            CheckingCache => vec![Done, GeneratingDescription],
            GeneratingDescription => vec![GeneratingImage, Error],
            GeneratingImage => vec![Done, Error],
            Error => vec![CheckingCache],
            Done => vec![CheckingCache],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SoulmateStatus; 6] = [
        SoulmateStatus::Idle,
        SoulmateStatus::CheckingCache,
        SoulmateStatus::GeneratingDescription,
        SoulmateStatus::GeneratingImage,
        SoulmateStatus::Done,
        SoulmateStatus::Error,
    ];

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{from:?} -> {to:?}"
                );
            }
        }
    }

    #[test]
    fn image_never_precedes_description() {
        assert!(SoulmateStatus::CheckingCache
            .transition_to(SoulmateStatus::GeneratingImage)
            .is_err());
    }

    #[test]
    fn retry_restarts_at_cache_lookup() {
        assert_eq!(
            SoulmateStatus::Error.valid_transitions(),
            vec![SoulmateStatus::CheckingCache]
        );
    }

    #[test]
    fn no_state_is_terminal() {
        assert!(ALL.iter().all(|s| !s.is_terminal()));
    }

    #[test]
    fn in_flight_states() {
        assert!(SoulmateStatus::GeneratingImage.is_in_flight());
        assert!(!SoulmateStatus::Done.is_in_flight());
        assert!(!SoulmateStatus::Idle.is_in_flight());
    }
}
