use std::sync::Arc;

use crate::error::ConfigError;
use crate::i18n;
use crate::model::UserSettings;
use crate::store::RecordStore;

/// The single settings record of the signed-in teacher.
pub struct SettingsService {
    store: Arc<dyn RecordStore<UserSettings>>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn RecordStore<UserSettings>>) -> Self {
        Self { store }
    }

    /// The stored settings, created with defaults on first access.
    pub fn current(&self) -> UserSettings {
        match self.store.list().into_iter().next() {
            Some(settings) => settings,
            // An empty store always has a free id.
            None => self.store.create(UserSettings::default()).unwrap_or_default(),
        }
    }

    pub fn set_language(&self, language: &str) -> Result<UserSettings, ConfigError> {
        if !i18n::is_supported(language) {
            return Err(ConfigError::Validation {
                message: format!("Unsupported language: {}", language),
            });
        }
        Ok(self.apply(|s| s.language = language.to_string()))
    }

    pub fn apply(&self, mut change: impl FnMut(&mut UserSettings)) -> UserSettings {
        let current = self.current();
        self.store
            .update(current.id, &mut change)
            .unwrap_or(current)
    }

    /// Translates `key` into the current language.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(&self.current().language, key)
    }
}
