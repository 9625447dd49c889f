//! Chart prompt template.

use crate::domain::profile::BirthProfile;

/// Section headings the narrative must contain, in order.
pub const CHART_SECTIONS: [&str; 6] = [
    "1. Introdução (Essência da Alma)",
    "2. Sol, Lua e Ascendente (O Triângulo da Personalidade)",
    "3. Vênus e Marte (Desejo e Atração - FOCO TOTAL AQUI)",
    "4. Casas Astrológicas Relevantes (Casa 5 e Casa 7)",
    "5. Desafios e Potenciais no Amor",
    "6. Conclusão Celestial",
];

/// Builds the single prompt sent for a chart narrative.
///
/// Field order is name, birth date and time, place, gender; followed by the
/// relationship focus, the six sections and tone guidance.
pub fn build_chart_prompt(profile: &BirthProfile) -> String {
    let mut prompt = String::with_capacity(768);

    prompt.push_str("Você é um astrólogo mestre. Gere um mapa astral completo e detalhado para:\n");
    prompt.push_str(&format!("Nome: {}\n", profile.full_name()));
    prompt.push_str(&format!(
        "Nascimento: {} às {}\n",
        profile.formatted_birth_date(),
        profile.formatted_birth_time()
    ));
    prompt.push_str(&format!("Local: {}\n", profile.birth_place()));
    prompt.push_str(&format!("Gênero: {}\n\n", profile.gender()));

    prompt.push_str("O foco principal deve ser a VIDA AMOROSA e RELACIONAMENTOS.\n\n");
    prompt.push_str("Retorne em formato Markdown com as seguintes seções:\n");
    for section in CHART_SECTIONS {
        prompt.push_str(section);
        prompt.push('\n');
    }
    prompt.push_str("\nSeja poético, profundo e místico. Use emojis.\n");

    prompt
}
