//! Gender as collected by the birth data form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The user's stated gender.
///
/// Serialized with the form's values (`feminino` / `masculino`), which are
/// also the words interpolated into prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "feminino")]
    Feminine,
    #[serde(rename = "masculino")]
    Masculine,
}

impl Gender {
    /// Returns the form value, e.g. `"feminino"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Feminine => "feminino",
            Gender::Masculine => "masculino",
        }
    }

    /// The other gender. Soulmate portraits depict the complement of the
    /// profile's gender.
    pub fn complement(&self) -> Gender {
        match self {
            Gender::Feminine => Gender::Masculine,
            Gender::Masculine => Gender::Feminine,
        }
    }

    /// English noun used as the subject of the image prompt.
    pub fn portrait_subject(&self) -> &'static str {
        match self {
            Gender::Feminine => "woman",
            Gender::Masculine => "man",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "feminino" => Ok(Gender::Feminine),
            "masculino" => Ok(Gender::Masculine),
            "" => Err(ValidationError::empty_field("gender")),
            _ => Err(ValidationError::invalid_format(
                "gender",
                "esperado 'feminino' ou 'masculino'",
            )),
        }
    }
}
