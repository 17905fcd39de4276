// LLM prompt constants for lead extraction.

/// Extraction prompt template. Replace `{input_text}` before sending.
/// The call runs in JSON output mode; the model must return an array of
/// candidate objects matching `ExtractedLead`.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Analyze the following text and extract a list of sales leads.
For each lead, extract details, assign a PRIORITY level, and identify the SOURCE PLATFORM.

Priority Logic:
- "Paid": If they explicitly mention a budget, "hiring", "looking to buy", or are an existing customer.
- "High": C-level executives (CEO, CTO, Founder) with a clear pain point or urgent need.
- "Solid": Relevant job titles with a specific problem or inquiry.
- "Standard": General inquiries, students, or vague context.

Platform Logic:
- "LinkedIn": If LinkedIn URLs or typical LinkedIn phrasing ("Connections", "InMail") is present.
- "Twitter": If "Tweet", "@handle", "X.com" or twitter URLs are present.
- "Reddit": If "reddit.com", "r/", "u/", or typical Reddit karma/sub phrasing is present.
- "Email": If the source seems to be a direct email or mentions "Emailed you".
- "Instagram": If "IG", "Story", or instagram URLs.
- "Website": If it comes from a generic contact form or website.
- "Other": Default if unknown.

Return a JSON ARRAY of objects with these fields (camelCase):
- name (or "Unknown")
- company (or "Unknown")
- role (job title, or "Unknown")
- industry (infer from context)
- email (if available)
- location (City, Country if available)
- postDate (e.g. "2d ago")
- postLink (URL)
- originalPostText (full content)
- context (summary for DM generation — REQUIRED for every lead)
- platform (one of: "LinkedIn", "Twitter", "Reddit", "Email", "Instagram", "Website", "Other")
- priority (one of: "Paid", "High", "Solid", "Standard")

Return ONLY the JSON array, no other text.

Input Text:
"{input_text}"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_carries_input_placeholder() {
        assert!(EXTRACTION_PROMPT_TEMPLATE.contains("{input_text}"));
    }

    #[test]
    fn test_template_names_all_priority_levels() {
        for level in ["Paid", "High", "Solid", "Standard"] {
            assert!(EXTRACTION_PROMPT_TEMPLATE.contains(level), "missing {level}");
        }
    }
}
