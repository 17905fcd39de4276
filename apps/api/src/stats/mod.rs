//! Lightweight frequency summaries over the lead collection, backing the
//! insights panel: top industries and the keyword cloud over lead contexts.

use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::lead::{classify_platform, GenerationStatus, Lead};
use crate::state::AppState;

const TOP_INDUSTRIES: usize = 5;
const TOP_KEYWORDS: usize = 15;
const MIN_KEYWORD_LEN: usize = 4;
const STOPWORDS: &[&str] = &["this", "that", "with", "from", "have", "need", "looking"];

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NamedCount {
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Serialize)]
pub struct LeadStats {
    pub total_leads: usize,
    pub completed: usize,
    pub industries: Vec<NamedCount>,
    pub platforms: Vec<NamedCount>,
    pub keywords: Vec<NamedCount>,
}

pub fn compute(leads: &[Lead]) -> LeadStats {
    let completed = leads
        .iter()
        .filter(|l| l.status == GenerationStatus::Completed)
        .count();

    LeadStats {
        total_leads: leads.len(),
        completed,
        industries: industry_counts(leads),
        platforms: platform_counts(leads),
        keywords: keyword_counts(leads),
    }
}

fn industry_counts(leads: &[Lead]) -> Vec<NamedCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for lead in leads {
        let industry = if lead.industry.trim().is_empty() {
            "Unknown"
        } else {
            lead.industry.as_str()
        };
        *counts.entry(industry).or_default() += 1;
    }
    top_n(counts, TOP_INDUSTRIES)
}

/// Stored platform strings are free-form; counts are over the canonical
/// display names so "linkedin.com/..." and "LinkedIn" land in one bucket.
fn platform_counts(leads: &[Lead]) -> Vec<NamedCount> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for lead in leads {
        let platform = classify_platform(lead.platform.as_deref()).display_name();
        *counts.entry(platform).or_default() += 1;
    }
    top_n(counts, usize::MAX)
}

/// Naive keyword frequency over all contexts: lowercase words of at least four
/// characters, minus a small stopword list.
fn keyword_counts(leads: &[Lead]) -> Vec<NamedCount> {
    let text = leads
        .iter()
        .map(|l| l.context.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in text.split(|c: char| !c.is_alphanumeric()) {
        if word.chars().count() < MIN_KEYWORD_LEN || STOPWORDS.contains(&word) {
            continue;
        }
        *counts.entry(word.to_string()).or_default() += 1;
    }
    top_n(counts, TOP_KEYWORDS)
}

fn top_n<K: Into<String>>(counts: HashMap<K, usize>, n: usize) -> Vec<NamedCount> {
    let mut entries: Vec<NamedCount> = counts
        .into_iter()
        .map(|(name, value)| NamedCount {
            name: name.into(),
            value,
        })
        .collect();
    // Descending by count; ties broken alphabetically so output is stable
    entries.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    entries.truncate(n);
    entries
}

/// GET /api/v1/leads/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<LeadStats> {
    Json(compute(&state.store.snapshot()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lead::Priority;
    use uuid::Uuid;

    fn lead(industry: &str, context: &str, status: GenerationStatus) -> Lead {
        Lead {
            id: Uuid::new_v4(),
            name: "n".to_string(),
            company: "c".to_string(),
            role: "r".to_string(),
            industry: industry.to_string(),
            context: context.to_string(),
            email: None,
            location: None,
            post_date: None,
            post_link: None,
            original_post_text: None,
            platform: None,
            generated_message: None,
            status,
            priority: Priority::Standard,
            is_collapsed: false,
        }
    }

    #[test]
    fn test_counts_totals_and_completed() {
        let leads = vec![
            lead("SaaS", "scaling backend", GenerationStatus::Completed),
            lead("SaaS", "scaling frontend", GenerationStatus::Pending),
            lead("Energy", "brand strategy", GenerationStatus::Error),
        ];
        let stats = compute(&leads);
        assert_eq!(stats.total_leads, 3);
        assert_eq!(stats.completed, 1);
    }

    #[test]
    fn test_industries_sorted_desc_and_capped() {
        let mut leads = Vec::new();
        for (industry, n) in [("A", 1), ("B", 3), ("C", 2), ("D", 1), ("E", 1), ("F", 1)] {
            for _ in 0..n {
                leads.push(lead(industry, "ctx words here", GenerationStatus::Pending));
            }
        }
        let stats = compute(&leads);
        assert_eq!(stats.industries.len(), TOP_INDUSTRIES);
        assert_eq!(stats.industries[0].name, "B");
        assert_eq!(stats.industries[0].value, 3);
        assert_eq!(stats.industries[1].name, "C");
    }

    #[test]
    fn test_empty_industry_counts_as_unknown() {
        let stats = compute(&[lead("", "some context", GenerationStatus::Pending)]);
        assert_eq!(stats.industries[0].name, "Unknown");
    }

    #[test]
    fn test_keywords_skip_short_words_and_stopwords() {
        let leads = vec![
            lead("X", "need help scaling infrastructure", GenerationStatus::Pending),
            lead("X", "help with scaling too", GenerationStatus::Pending),
        ];
        let stats = compute(&leads);
        let names: Vec<_> = stats.keywords.iter().map(|k| k.name.as_str()).collect();
        assert!(names.contains(&"scaling"));
        assert!(names.contains(&"help"));
        assert!(!names.contains(&"need"), "stopword leaked");
        assert!(!names.contains(&"with"), "stopword leaked");
        assert!(!names.contains(&"too"), "short word leaked");

        let scaling = stats.keywords.iter().find(|k| k.name == "scaling").unwrap();
        assert_eq!(scaling.value, 2);
    }

    #[test]
    fn test_platforms_bucket_by_canonical_name() {
        let mut a = lead("X", "ctx words", GenerationStatus::Pending);
        a.platform = Some("linkedin.com/in/jdoe".to_string());
        let mut b = lead("X", "ctx words", GenerationStatus::Pending);
        b.platform = Some("LinkedIn".to_string());
        let mut c = lead("X", "ctx words", GenerationStatus::Pending);
        c.platform = None;

        let stats = compute(&[a, b, c]);
        let linkedin = stats.platforms.iter().find(|p| p.name == "LinkedIn").unwrap();
        assert_eq!(linkedin.value, 2);
        let unknown = stats
            .platforms
            .iter()
            .find(|p| p.name == "Unknown Source")
            .unwrap();
        assert_eq!(unknown.value, 1);
    }

    #[test]
    fn test_empty_collection_yields_empty_stats() {
        let stats = compute(&[]);
        assert_eq!(stats.total_leads, 0);
        assert!(stats.industries.is_empty());
        assert!(stats.keywords.is_empty());
    }
}
