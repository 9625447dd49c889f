use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The three screens of the experience, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    DataEntry,
    Chart,
    Soulmate,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::DataEntry, Step::Chart, Step::Soulmate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::DataEntry => "data_entry",
            Step::Chart => "chart",
            Step::Soulmate => "soulmate",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a navigation or workflow command was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Preencha seus dados de nascimento primeiro.")]
    ProfileRequired,

    #[error("O mapa astral precisa estar pronto antes de revelar sua alma gêmea.")]
    ChartRequired,
}
