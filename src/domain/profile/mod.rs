//! Birth profile module.

mod birth_profile;
mod cache_key;
mod gender;

pub use birth_profile::{
    parse_birth_date, parse_birth_time, BirthProfile, BIRTH_DATE_FORMAT, BIRTH_TIME_FORMAT,
};
pub use cache_key::CacheKey;
pub use gender::Gender;
