//! Session settings store. Settings persist for the whole session — including
//! across a lead-collection clear — and are only replaced wholesale by an
//! explicit update.

pub mod handlers;

use std::sync::{Arc, RwLock};

use crate::models::settings::AppSettings;

#[derive(Clone, Default)]
pub struct SettingsStore {
    inner: Arc<RwLock<AppSettings>>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> AppSettings {
        self.inner.read().expect("settings lock poisoned").clone()
    }

    pub fn set(&self, settings: AppSettings) {
        *self.inner.write().expect("settings lock poisoned") = settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{MessageLength, Tone};

    #[test]
    fn test_defaults_until_explicit_update() {
        let store = SettingsStore::new();
        assert_eq!(store.get(), AppSettings::default());
    }

    #[test]
    fn test_update_replaces_wholesale_and_persists() {
        let store = SettingsStore::new();
        let custom = AppSettings {
            tone: Tone::Direct,
            length: MessageLength::Short,
            language: "French".to_string(),
        };
        store.set(custom.clone());
        assert_eq!(store.get(), custom);
        // Reads do not consume the value
        assert_eq!(store.get(), custom);
    }
}
