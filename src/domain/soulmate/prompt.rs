//! Prompt templates for the soulmate reveal.
//!
//! The description prompt sees only an excerpt of the chart and the user's
//! gender. The image prompt wraps the description in fixed style
//! instructions and asks for the complementary gender.

use crate::domain::profile::Gender;

/// Maximum number of characters of the chart narrative quoted in the
/// description prompt.
pub const NARRATIVE_EXCERPT_CHARS: usize = 2000;

/// Returns the first [`NARRATIVE_EXCERPT_CHARS`] characters of the narrative.
///
/// Counts Unicode scalar values, so the cut never splits a character.
pub fn narrative_excerpt(narrative: &str) -> &str {
    match narrative.char_indices().nth(NARRATIVE_EXCERPT_CHARS) {
        Some((byte_index, _)) => &narrative[..byte_index],
        None => narrative,
    }
}

/// Prompt asking for a short physical description of the ideal partner.
pub fn build_description_prompt(narrative: &str, gender: Gender) -> String {
    format!(
        "Com base neste mapa astral: {excerpt}\n\
         Descreva fisicamente como seria a alma gêmea ideal para esta pessoa.\n\
         Considere que o usuário é do gênero {gender}.\n\
         A descrição deve ser focada em traços faciais, olhar e aura.\n\
         Retorne um parágrafo curto e poético.\n",
        excerpt = narrative_excerpt(narrative),
        gender = gender,
    )
}

/// Prompt for the charcoal portrait, built from this attempt's description.
pub fn build_image_prompt(description: &str, gender: Gender) -> String {
    let subject = gender.complement();
    format!(
        "A realistic, artistic hand-drawn sketch portrait of a person.\n\
         Black and white charcoal style.\n\
         The person should look like a soulmate based on this description: {description}.\n\
         Focus on a deep, soulful look in the eyes.\n\
         High contrast, fine lines, professional artistic drawing.\n\
         The person should be a {noun} ({subject}), the complement of the user's gender ({gender}).\n\
         Vintage paper texture background.\n",
        description = description.trim(),
        noun = subject.portrait_subject(),
        subject = subject,
        gender = gender,
    )
}
