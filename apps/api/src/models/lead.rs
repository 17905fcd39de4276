//! Core lead record: descriptive fields, priority classification, and the
//! per-lead generation status machine (pending → generating → completed|error).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extraction::ExtractedLead;

/// Four-level priority classification. The rank drives sort order:
/// Paid leads float to the top, Standard leads sink to the bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Paid,
    High,
    Solid,
    #[default]
    Standard,
}

impl Priority {
    /// Total ordering: Paid=0 < High=1 < Solid=2 < Standard=3.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Paid => 0,
            Priority::High => 1,
            Priority::Solid => 2,
            Priority::Standard => 3,
        }
    }

    /// Coerces a free-form extractor label into the closed enumeration.
    /// Unrecognized or absent values become `Standard`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some(l) if l.eq_ignore_ascii_case("paid") => Priority::Paid,
            Some(l) if l.eq_ignore_ascii_case("high") => Priority::High,
            Some(l) if l.eq_ignore_ascii_case("solid") => Priority::Solid,
            _ => Priority::Standard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Paid => "Paid",
            Priority::High => "High",
            Priority::Solid => "Solid",
            Priority::Standard => "Standard",
        }
    }
}

/// Per-lead generation lifecycle.
///
/// `generating` is entered exactly once per request: either by the bulk sweep
/// (which skips leads already generating or completed) or by an explicit
/// regenerate (which is allowed from any state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    #[default]
    Pending,
    Generating,
    Completed,
    Error,
}

impl GenerationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GenerationStatus::Pending => "pending",
            GenerationStatus::Generating => "generating",
            GenerationStatus::Completed => "completed",
            GenerationStatus::Error => "error",
        }
    }
}

/// Canonical source platforms for display. The stored `platform` string is kept
/// verbatim as the extractor returned it; this is only the display mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    LinkedIn,
    Twitter,
    Reddit,
    Instagram,
    Email,
    Website,
    Other,
}

impl Platform {
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "X / Twitter",
            Platform::Reddit => "Reddit",
            Platform::Instagram => "Instagram",
            Platform::Email => "Email",
            Platform::Website => "Website",
            Platform::Other => "Unknown Source",
        }
    }
}

/// Maps a free-form platform string onto the canonical set by substring match.
/// Order matters: more specific markers are checked before generic ones.
pub fn classify_platform(raw: Option<&str>) -> Platform {
    let p = raw.unwrap_or("Other").to_lowercase();

    if p.contains("linkedin") {
        Platform::LinkedIn
    } else if p.contains("twitter") || p.contains("x.com") {
        Platform::Twitter
    } else if p.contains("reddit") {
        Platform::Reddit
    } else if p.contains("instagram") {
        Platform::Instagram
    } else if p.contains("email") || p.contains("mail") {
        Platform::Email
    } else if p.contains("web") {
        Platform::Website
    } else {
        Platform::Other
    }
}

/// One prospect record. Wire shape is camelCase so a JSON export parses back
/// field-for-field into the same collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub role: String,
    pub industry: String,
    /// Extractor summary used for message generation and as display fallback.
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_post_text: Option<String>,
    /// Verbatim extractor value; see `classify_platform` for display mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_message: Option<String>,
    pub status: GenerationStatus,
    pub priority: Priority,
    pub is_collapsed: bool,
}

impl Lead {
    /// Promotes an extractor candidate to a full record: assigns a fresh id,
    /// starts `pending` and expanded, and coerces the priority label.
    pub fn from_extracted(extracted: ExtractedLead) -> Self {
        Lead {
            id: Uuid::new_v4(),
            priority: Priority::from_label(extracted.priority.as_deref()),
            name: extracted.name,
            company: extracted.company,
            role: extracted.role,
            industry: extracted.industry,
            context: extracted.context,
            email: extracted.email,
            location: extracted.location,
            post_date: extracted.post_date,
            post_link: extracted.post_link,
            original_post_text: extracted.original_post_text,
            platform: extracted.platform,
            generated_message: None,
            status: GenerationStatus::Pending,
            is_collapsed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extracted(priority: Option<&str>) -> ExtractedLead {
        ExtractedLead {
            name: "John Doe".to_string(),
            company: "TechStart".to_string(),
            role: "CEO".to_string(),
            industry: "SaaS".to_string(),
            context: "Struggling to scale backend infrastructure".to_string(),
            email: None,
            location: None,
            post_date: None,
            post_link: None,
            original_post_text: None,
            platform: Some("LinkedIn".to_string()),
            priority: priority.map(str::to_string),
        }
    }

    #[test]
    fn test_priority_rank_is_total_and_fixed() {
        assert!(Priority::Paid.rank() < Priority::High.rank());
        assert!(Priority::High.rank() < Priority::Solid.rank());
        assert!(Priority::Solid.rank() < Priority::Standard.rank());
    }

    #[test]
    fn test_priority_from_label_is_case_insensitive() {
        assert_eq!(Priority::from_label(Some("paid")), Priority::Paid);
        assert_eq!(Priority::from_label(Some("HIGH")), Priority::High);
        assert_eq!(Priority::from_label(Some(" Solid ")), Priority::Solid);
    }

    #[test]
    fn test_priority_unrecognized_label_coerces_to_standard() {
        assert_eq!(Priority::from_label(Some("Urgent")), Priority::Standard);
        assert_eq!(Priority::from_label(Some("")), Priority::Standard);
        assert_eq!(Priority::from_label(None), Priority::Standard);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&GenerationStatus::Generating).unwrap(),
            "\"generating\""
        );
        assert_eq!(
            serde_json::to_string(&GenerationStatus::Error).unwrap(),
            "\"error\""
        );
    }

    #[test]
    fn test_classify_platform_known_substrings() {
        assert_eq!(
            classify_platform(Some("linkedin.com/in/jdoe")),
            Platform::LinkedIn
        );
        assert_eq!(classify_platform(Some("x.com")), Platform::Twitter);
        assert_eq!(classify_platform(Some("Twitter")), Platform::Twitter);
        assert_eq!(classify_platform(Some("r/startups on Reddit")), Platform::Reddit);
        assert_eq!(classify_platform(Some("Instagram Story")), Platform::Instagram);
        assert_eq!(classify_platform(Some("Direct mail")), Platform::Email);
        assert_eq!(classify_platform(Some("website contact form")), Platform::Website);
    }

    #[test]
    fn test_classify_platform_unknown_falls_back_to_other() {
        assert_eq!(classify_platform(Some("carrier pigeon")), Platform::Other);
        assert_eq!(classify_platform(None), Platform::Other);
        assert_eq!(classify_platform(None).display_name(), "Unknown Source");
    }

    #[test]
    fn test_from_extracted_defaults() {
        let lead = Lead::from_extracted(extracted(None));
        assert_eq!(lead.status, GenerationStatus::Pending);
        assert_eq!(lead.priority, Priority::Standard);
        assert!(!lead.is_collapsed);
        assert!(lead.generated_message.is_none());
    }

    #[test]
    fn test_from_extracted_assigns_unique_ids() {
        let a = Lead::from_extracted(extracted(Some("Paid")));
        let b = Lead::from_extracted(extracted(Some("Paid")));
        assert_ne!(a.id, b.id);
        assert_eq!(a.priority, Priority::Paid);
    }

    #[test]
    fn test_lead_json_wire_shape_is_camel_case() {
        let lead = Lead::from_extracted(extracted(Some("High")));
        let json = serde_json::to_value(&lead).unwrap();
        assert!(json.get("isCollapsed").is_some());
        assert_eq!(json["priority"], "High");
        assert_eq!(json["status"], "pending");
        // Absent optionals are omitted entirely
        assert!(json.get("generatedMessage").is_none());
    }
}
