//! Export Formatter — pure functions from a lead collection snapshot to
//! serialized text in one of three formats. Serving the result as a download
//! is the handler's concern.

pub mod handlers;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::lead::Lead;

const TXT_DIVIDER: &str = "----------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Txt,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "txt" => Ok(ExportFormat::Txt),
            other => Err(format!("unknown export format '{other}'")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Txt => "text/plain",
        }
    }

    pub fn filename(&self, date: NaiveDate) -> String {
        format!("leads-export-{date}.{}", self.extension())
    }

    /// Serializes the snapshot. An empty collection yields a header-only CSV,
    /// a JSON `[]`, or an empty TXT — never an error.
    pub fn render(&self, leads: &[Lead]) -> Result<String, AppError> {
        match self {
            ExportFormat::Json => render_json(leads),
            ExportFormat::Csv => Ok(render_csv(leads)),
            ExportFormat::Txt => Ok(render_txt(leads)),
        }
    }
}

/// Full-fidelity dump of the collection, internal status and ids included.
fn render_json(leads: &[Lead]) -> Result<String, AppError> {
    serde_json::to_string_pretty(leads).map_err(|e| AppError::Internal(e.into()))
}

const CSV_HEADERS: &str =
    "Name,Company,Role,Platform,Email,Priority,Status,Generated Message,Original Context";

/// One row per lead in current (already-sorted) order. Only the message and
/// context fields are quote-wrapped, with inner quotes doubled — no other CSV
/// escaping is performed.
fn render_csv(leads: &[Lead]) -> String {
    let mut lines = vec![CSV_HEADERS.to_string()];
    for lead in leads {
        let row = [
            lead.name.clone(),
            lead.company.clone(),
            lead.role.clone(),
            lead.platform.clone().unwrap_or_else(|| "Unknown".to_string()),
            lead.email.clone().unwrap_or_default(),
            lead.priority.label().to_string(),
            lead.status.label().to_string(),
            csv_quote(lead.generated_message.as_deref().unwrap_or_default()),
            csv_quote(&lead.context),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// One human-readable block per lead, blocks separated by a fixed divider.
fn render_txt(leads: &[Lead]) -> String {
    leads
        .iter()
        .map(|lead| {
            format!(
                "LEAD: {} ({})\nSOURCE: {}\nROLE: {} @ {}\nCONTEXT: {}\nMESSAGE:\n{}\n{TXT_DIVIDER}\n",
                lead.name,
                lead.priority.label(),
                lead.platform.as_deref().unwrap_or("Unknown"),
                lead.role,
                lead.company,
                lead.context,
                lead.generated_message.as_deref().unwrap_or("(Not Generated)"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lead::{GenerationStatus, Priority};
    use uuid::Uuid;

    fn lead(name: &str) -> Lead {
        Lead {
            id: Uuid::new_v4(),
            name: name.to_string(),
            company: "TechStart".to_string(),
            role: "CEO".to_string(),
            industry: "SaaS".to_string(),
            context: "Needs scaling help".to_string(),
            email: Some("john@techstart.io".to_string()),
            location: None,
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
    fn test_format_parses_case_insensitively() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_filename_pattern() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(
            ExportFormat::Csv.filename(date),
            "leads-export-2025-03-09.csv"
        );
        assert_eq!(
            ExportFormat::Json.filename(date),
            "leads-export-2025-03-09.json"
        );
    }

    #[test]
    fn test_csv_quotes_are_escaped_by_doubling() {
        let mut l = lead("John");
        l.context = "said \"we need help\" twice".to_string();
        l.generated_message = Some("Hi \"John\"".to_string());
        l.status = GenerationStatus::Completed;

        let csv = ExportFormat::Csv.render(&[l]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"Hi \"\"John\"\"\""));
        assert!(row.contains("\"said \"\"we need help\"\" twice\""));
    }

    #[test]
    fn test_csv_defaults_platform_unknown_and_email_empty() {
        let mut l = lead("John");
        l.platform = None;
        l.email = None;
        let csv = ExportFormat::Csv.render(&[l]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "John,TechStart,CEO,Unknown,,High,pending,\"\",\"Needs scaling help\"");
    }

    #[test]
    fn test_csv_empty_collection_is_header_only() {
        let csv = ExportFormat::Csv.render(&[]).unwrap();
        assert_eq!(csv, CSV_HEADERS);
    }

    #[test]
    fn test_json_export_parses_back_field_for_field() {
        let leads = vec![lead("John"), lead("Sarah"), lead("Mike")];
        let json = ExportFormat::Json.render(&leads).unwrap();
        let parsed: Vec<Lead> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), leads.len());
        for (original, roundtripped) in leads.iter().zip(&parsed) {
            assert_eq!(roundtripped.id, original.id);
            assert_eq!(roundtripped.name, original.name);
            assert_eq!(roundtripped.email, original.email);
            assert_eq!(roundtripped.status, original.status);
            assert_eq!(roundtripped.priority, original.priority);
            assert_eq!(roundtripped.is_collapsed, original.is_collapsed);
        }
    }

    #[test]
    fn test_json_empty_collection_is_empty_array() {
        assert_eq!(ExportFormat::Json.render(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_txt_block_layout_and_placeholder() {
        let txt = ExportFormat::Txt.render(&[lead("John")]).unwrap();
        assert!(txt.starts_with("LEAD: John (High)\n"));
        assert!(txt.contains("SOURCE: LinkedIn\n"));
        assert!(txt.contains("ROLE: CEO @ TechStart\n"));
        assert!(txt.contains("MESSAGE:\n(Not Generated)\n"));
        assert!(txt.contains(TXT_DIVIDER));
    }

    #[test]
    fn test_txt_empty_collection_is_empty() {
        assert_eq!(ExportFormat::Txt.render(&[]).unwrap(), "");
    }
}
