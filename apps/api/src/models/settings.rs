//! Session-wide generation settings. Mutated only by explicit user action and
//! read (never written) by the Message Generation Gateway.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Witty,
    Direct,
    Empathetic,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Witty => "Witty",
            Tone::Direct => "Direct",
            Tone::Empathetic => "Empathetic",
        }
    }
}

/// Size class of the outreach message. Serialized labels match the UI copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageLength {
    #[serde(rename = "Short (Tweet style)")]
    Short,
    #[default]
    #[serde(rename = "Medium (Email style)")]
    Medium,
    #[serde(rename = "Long (Detailed proposal)")]
    Long,
}

impl MessageLength {
    pub fn label(&self) -> &'static str {
        match self {
            MessageLength::Short => "Short (Tweet style)",
            MessageLength::Medium => "Medium (Email style)",
            MessageLength::Long => "Long (Detailed proposal)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub tone: Tone,
    pub length: MessageLength,
    pub language: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            tone: Tone::Professional,
            length: MessageLength::Medium,
            language: "English".to_string(),
        }
    }
}
