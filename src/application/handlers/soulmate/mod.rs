//! Soulmate reveal handler.

mod reveal_soulmate;

pub use reveal_soulmate::{
    RevealSoulmateError, RevealSoulmateHandler, RevealStep, SOULMATE_EMPTY_DESCRIPTION_ERROR,
    SOULMATE_EMPTY_IMAGE_ERROR, SOULMATE_PROVIDER_ERROR,
};
