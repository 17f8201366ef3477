//! Status messages
//!
//! Facades only decide the [`Status`]; the text shown for it comes from a
//! host-supplied [`MessageCatalog`].

use crate::config::defaults::DEFAULT_ADDRESS_HEADING;
use crate::config::MessagesConfig;
use crate::constants::render::INDEX_PLACEHOLDER;
use crate::error::{Error, Result};
use crate::outcome::Status;
use std::collections::HashMap;
use std::str::FromStr;

/// Maps statuses to human-readable text
pub trait MessageCatalog: Send + Sync {
    /// Message for a status
    fn message(&self, status: Status) -> String;

    /// Heading placed before record `index` (1-based) of a multi-address listing
    fn address_heading(&self, index: usize) -> String {
        DEFAULT_ADDRESS_HEADING.replace(INDEX_PLACEHOLDER, &index.to_string())
    }
}

/// Built-in English messages
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl MessageCatalog for DefaultMessages {
    fn message(&self, status: Status) -> String {
        status.default_message().to_string()
    }
}

/// Messages from the `[messages]` config section, falling back to English
#[derive(Debug, Clone)]
pub struct ConfiguredMessages {
    overrides: HashMap<Status, String>,
    address_heading: String,
}

impl ConfiguredMessages {
    /// Build from config, rejecting keys that don't name a status
    pub fn from_config(config: &MessagesConfig) -> Result<Self> {
        let mut overrides = HashMap::with_capacity(config.overrides.len());
        for (key, text) in &config.overrides {
            let status = Status::from_str(key).map_err(|e| {
                Error::Config(format!("Invalid [messages] key: {}", e))
            })?;
            overrides.insert(status, text.clone());
        }

        Ok(Self {
            overrides,
            address_heading: config.address_heading.clone(),
        })
    }
}

impl MessageCatalog for ConfiguredMessages {
    fn message(&self, status: Status) -> String {
        self.overrides
            .get(&status)
            .cloned()
            .unwrap_or_else(|| status.default_message().to_string())
    }

    fn address_heading(&self, index: usize) -> String {
        self.address_heading
            .replace(INDEX_PLACEHOLDER, &index.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages() {
        let messages = DefaultMessages;
        assert_eq!(messages.message(Status::LimitInvalid), "Limit is not valid");
        assert_eq!(messages.address_heading(2), "Address 2");
    }

    #[test]
    fn test_every_status_has_text() {
        for status in Status::all() {
            assert!(!DefaultMessages.message(status).is_empty(), "{}", status);
        }
    }

    #[test]
    fn test_configured_overrides_and_fallback() {
        let mut config = MessagesConfig::default();
        config.address_heading = "Result #{n}".to_string();
        config
            .overrides
            .insert("no_results".to_string(), "Nothing nearby".to_string());

        let messages = ConfiguredMessages::from_config(&config).unwrap();
        assert_eq!(messages.message(Status::NoResults), "Nothing nearby");
        assert_eq!(
            messages.message(Status::ServiceUnavailable),
            "Service is not available"
        );
        assert_eq!(messages.address_heading(3), "Result #3");
    }

    #[test]
    fn test_configured_rejects_unknown_status() {
        let mut config = MessagesConfig::default();
        config
            .overrides
            .insert("NOT_A_STATUS".to_string(), "?".to_string());
        assert!(ConfiguredMessages::from_config(&config).is_err());
    }
}
