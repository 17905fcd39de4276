// LLM prompt constants for outreach message generation.

/// Message generation prompt template.
/// Replace: {platform}, {name}, {company}, {role}, {location}, {original_post},
///          {context}, {priority}, {tone}, {length}, {language}
pub const MESSAGE_PROMPT_TEMPLATE: &str = r#"You are a world-class copywriter and sales expert.
Write a direct message (DM) for a lead found on {platform}.

Details:
Name: {name}
Company: {company}
Role: {role}
Location: {location}
Original Post: "{original_post}"
Context/Notes: {context}
Priority Level: {priority}

Settings:
- Tone: {tone}
- Length: {length}
- Language: {language}

Instructions:
- Be personal and engaging. Reference their location or specific words from their post if relevant.
- Adapt the style to the platform (e.g. LinkedIn is professional but conversational, Twitter is short and punchy, Reddit is community-focused and authentic, Email is structured).
- Do not sound robotic or generic.
- Focus on starting a conversation, not just selling.
- Return ONLY the message body. No subject lines or headers unless typical for a DM on that platform.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_carries_all_placeholders() {
        for placeholder in [
            "{platform}",
            "{name}",
            "{company}",
            "{role}",
            "{location}",
            "{original_post}",
            "{context}",
            "{priority}",
            "{tone}",
            "{length}",
            "{language}",
        ] {
            assert!(
                MESSAGE_PROMPT_TEMPLATE.contains(placeholder),
                "missing {placeholder}"
            );
        }
    }
}
