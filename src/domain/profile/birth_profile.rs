//! Birth profile value object.
//!
//! A profile is created once per form submission and never mutated; a new
//! submission replaces it wholesale.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::{CacheKey, Gender};
use crate::domain::foundation::ValidationError;

/// Display format for birth dates inside prompts.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format for birth times inside prompts.
pub const BIRTH_TIME_FORMAT: &str = "%H:%M";

/// Natal data submitted by the user.
///
/// # Invariants
///
/// - `full_name` and `birth_place` are trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthProfile {
    full_name: String,
    birth_date: NaiveDate,
    #[serde(serialize_with = "serialize_birth_time")]
    birth_time: NaiveTime,
    gender: Gender,
    birth_place: String,
}

impl BirthProfile {
    /// Builds a validated profile.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name or place is blank
    pub fn new(
        full_name: impl Into<String>,
        birth_date: NaiveDate,
        birth_time: NaiveTime,
        gender: Gender,
        birth_place: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let full_name = required("full_name", full_name.into())?;
        let birth_place = required("birth_place", birth_place.into())?;

        Ok(Self {
            full_name,
            birth_date,
            birth_time,
            gender,
            birth_place,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn birth_time(&self) -> NaiveTime {
        self.birth_time
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn birth_place(&self) -> &str {
        &self.birth_place
    }

    /// Birth date as interpolated into prompts (`1990-05-01`).
    pub fn formatted_birth_date(&self) -> String {
        self.birth_date.format(BIRTH_DATE_FORMAT).to_string()
    }

    /// Birth time as interpolated into prompts (`14:30`).
    pub fn formatted_birth_time(&self) -> String {
        self.birth_time.format(BIRTH_TIME_FORMAT).to_string()
    }

    /// Key under which this person's soulmate portrait is cached.
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::from_full_name(&self.full_name)
    }
}

/// Parses a birth date as sent by a `<input type="date">` field (`YYYY-MM-DD`).
pub fn parse_birth_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::empty_field("birth_date"));
    }
    NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT)
        .map_err(|_| ValidationError::invalid_format("birth_date", "esperado AAAA-MM-DD"))
}

/// Parses a birth time as sent by a `<input type="time">` field.
///
/// Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_birth_time(value: &str) -> Result<NaiveTime, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::empty_field("birth_time"));
    }
    NaiveTime::parse_from_str(value, BIRTH_TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ValidationError::invalid_format("birth_time", "esperado HH:MM"))
}

fn required(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn serialize_birth_time<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&time.format(BIRTH_TIME_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn new_trims_text_fields() {
        let profile = BirthProfile::new(
            "  Ana Silva ",
            date(1990, 5, 1),
            time(14, 30),
            Gender::Feminine,
            " São Paulo",
        )
        .unwrap();

        assert_eq!(profile.full_name(), "Ana Silva");
        assert_eq!(profile.birth_place(), "São Paulo");
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = BirthProfile::new("   ", date(1990, 5, 1), time(14, 30), Gender::Feminine, "Rio")
            .unwrap_err();
        assert_eq!(err, ValidationError::empty_field("full_name"));
    }

    #[test]
    fn new_rejects_blank_place() {
        let err = BirthProfile::new("Ana", date(1990, 5, 1), time(14, 30), Gender::Feminine, "")
            .unwrap_err();
        assert_eq!(err, ValidationError::empty_field("birth_place"));
    }

    #[test]
    fn formats_date_and_time_for_prompts() {
        let profile =
            BirthProfile::new("Ana", date(1990, 5, 1), time(9, 5), Gender::Feminine, "Rio")
                .unwrap();
        assert_eq!(profile.formatted_birth_date(), "1990-05-01");
        assert_eq!(profile.formatted_birth_time(), "09:05");
    }

    #[test]
    fn parse_birth_time_accepts_form_formats() {
        assert_eq!(parse_birth_time("14:30").unwrap(), time(14, 30));
        assert_eq!(parse_birth_time("14:30:00").unwrap(), time(14, 30));
    }

    #[test]
    fn parse_birth_time_rejects_invalid_values() {
        assert_eq!(
            parse_birth_time(" ").unwrap_err(),
            ValidationError::empty_field("birth_time")
        );
        assert!(matches!(
            parse_birth_time("25:99"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn parse_birth_date_reads_iso_dates() {
        assert_eq!(parse_birth_date("1990-05-01").unwrap(), date(1990, 5, 1));
        assert!(matches!(
            parse_birth_date("01/05/1990"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert_eq!(
            parse_birth_date("").unwrap_err(),
            ValidationError::empty_field("birth_date")
        );
    }

    #[test]
    fn serializes_time_without_seconds() {
        let profile =
            BirthProfile::new("Ana", date(1990, 5, 1), time(14, 30), Gender::Feminine, "Rio")
                .unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["birth_time"], "14:30");
        assert_eq!(json["birth_date"], "1990-05-01");
        assert_eq!(json["gender"], "feminino");
    }
}
