use crate::domain::model::{ChatMessage, ChatRequest, CompanyProfile};

pub const FIRM_NAME: &str = "Everyday Capital";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const SUBJECT_LINE: &str = "Exploring Investment Opportunities with Everyday Capital";
pub const SYSTEM_PROMPT: &str =
    "You are an expert email composer for a prestigious private equity firm.";
pub const SOFTWARE_INVESTMENT_SENTENCE: &str = "We have experience investing in the software space, with recent investments in Xero and Vend in New Zealand.";

/// Case-insensitive substring match on "software".
pub fn is_software_company(description: &str) -> bool {
    description.to_lowercase().contains("software")
}

pub fn build_user_prompt(profile: &CompanyProfile) -> String {
    let ceo = &profile.ceo_name;
    let company = &profile.company_name;

    let mut lines = vec![
        format!(
            "Compose a concise, professional email from {} to {}, CEO of {}.",
            FIRM_NAME, ceo, company
        ),
        "  The email must:".to_string(),
        format!("  1. Use the subject line: \"{}\"", SUBJECT_LINE),
        format!("  2. Begin with \"Dear {},\"", ceo),
        "  3. Open with a brief, professional greeting.".to_string(),
        format!(
            "  4. In the next paragraph, express interest in {}, mentioning why their industry ({}) is exciting and has potential for growth and briefly highlight a key trend or driver in the industry.",
            company, profile.description
        ),
    ];

    if is_software_company(&profile.description) {
        lines.push(format!(
            "  5. Include this exact sentence in an appropriate place: '{}'",
            SOFTWARE_INVESTMENT_SENTENCE
        ));
    }

    // Numbering stays fixed whether or not item 5 is present.
    lines.push(
        "  6. In the next paragraph, propose a meeting to explore potential synergies.".to_string(),
    );
    lines.push(format!(
        "  7. Close with \"Best regards,\" followed by \"{}\"",
        FIRM_NAME
    ));

    lines.join("\n")
}

pub fn build_request(profile: &CompanyProfile, model: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(profile)),
        ],
    }
}
