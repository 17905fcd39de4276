//! Boundary abstraction over the external AI service, covering both lead
//! extraction and message generation. Handlers and the orchestrator depend on
//! the trait, never on the concrete client, so tests can inject a fake.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::extraction::prompts::EXTRACTION_PROMPT_TEMPLATE;
use crate::extraction::ExtractedLead;
use crate::generation::prompts::MESSAGE_PROMPT_TEMPLATE;
use crate::llm_client::{GeminiClient, EXTRACTION_MODEL, GENERATION_MODEL};
use crate::models::lead::Lead;
use crate::models::settings::AppSettings;

/// Placeholder installed when the model returns an empty body — `completed`
/// always carries a non-empty message.
pub const EMPTY_MESSAGE_PLACEHOLDER: &str = "Could not generate message.";

#[async_trait]
pub trait OutreachGateway: Send + Sync {
    /// Extracts an ordered list of lead candidates from raw pasted text.
    /// Any HTTP or parse failure surfaces as one extraction failure; there is
    /// no partial result.
    async fn extract_leads(&self, text: &str) -> Result<Vec<ExtractedLead>, AppError>;

    /// Generates one outreach message for one lead under the given settings.
    /// The full text is returned in one response; there is no streaming.
    async fn generate_message(
        &self,
        lead: &Lead,
        settings: &AppSettings,
    ) -> Result<String, AppError>;
}

/// Production gateway backed by the Gemini client.
pub struct GeminiGateway {
    client: GeminiClient,
}

impl GeminiGateway {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OutreachGateway for GeminiGateway {
    async fn extract_leads(&self, text: &str) -> Result<Vec<ExtractedLead>, AppError> {
        let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{input_text}", text);
        self.client
            .call_json::<Vec<ExtractedLead>>(EXTRACTION_MODEL, &prompt)
            .await
            .map_err(|e| AppError::Llm(format!("lead extraction failed: {e}")))
    }

    async fn generate_message(
        &self,
        lead: &Lead,
        settings: &AppSettings,
    ) -> Result<String, AppError> {
        let prompt = build_message_prompt(lead, settings);
        let message = self
            .client
            .call_text(GENERATION_MODEL, &prompt)
            .await
            .map_err(|e| AppError::Llm(format!("message generation failed: {e}")))?;

        if message.trim().is_empty() {
            return Ok(EMPTY_MESSAGE_PLACEHOLDER.to_string());
        }
        Ok(message)
    }
}

fn build_message_prompt(lead: &Lead, settings: &AppSettings) -> String {
    MESSAGE_PROMPT_TEMPLATE
        .replace("{platform}", lead.platform.as_deref().unwrap_or("a social platform"))
        .replace("{name}", &lead.name)
        .replace("{company}", &lead.company)
        .replace("{role}", &lead.role)
        .replace("{location}", lead.location.as_deref().unwrap_or("N/A"))
        .replace(
            "{original_post}",
            lead.original_post_text.as_deref().unwrap_or("N/A"),
        )
        .replace("{context}", &lead.context)
        .replace("{priority}", lead.priority.label())
        .replace("{tone}", settings.tone.label())
        .replace("{length}", settings.length.label())
        .replace("{language}", &settings.language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lead::{GenerationStatus, Priority};
    use uuid::Uuid;

    fn sample_lead() -> Lead {
        Lead {
            id: Uuid::new_v4(),
            name: "John Doe".to_string(),
            company: "TechStart".to_string(),
            role: "CEO".to_string(),
            industry: "SaaS".to_string(),
            context: "Struggling to scale backend infrastructure".to_string(),
            email: None,
            location: Some("San Francisco, CA".to_string()),
            post_date: None,
            post_link: None,
            original_post_text: None,
            platform: Some("LinkedIn".to_string()),
            generated_message: None,
            status: GenerationStatus::Pending,
            priority: Priority::High,
            is_collapsed: false,
        }
    }

    #[test]
    fn test_message_prompt_interpolates_lead_and_settings() {
        let prompt = build_message_prompt(&sample_lead(), &AppSettings::default());
        assert!(prompt.contains("John Doe"));
        assert!(prompt.contains("LinkedIn"));
        assert!(prompt.contains("San Francisco, CA"));
        assert!(prompt.contains("Professional"));
        assert!(prompt.contains("Medium (Email style)"));
        assert!(prompt.contains("English"));
        assert!(!prompt.contains('{'), "unreplaced placeholder in:\n{prompt}");
    }

    #[test]
    fn test_message_prompt_defaults_for_absent_optionals() {
        let mut lead = sample_lead();
        lead.platform = None;
        lead.location = None;
        let prompt = build_message_prompt(&lead, &AppSettings::default());
        assert!(prompt.contains("a social platform"));
        assert!(prompt.contains("N/A"));
    }
}
