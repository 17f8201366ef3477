//! Output formatters
//!
//! Provides trait-based output formatting for facade results.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::geo::AddressRecord;
use crate::location::Fix;
use crate::outcome::Rendered;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format an address lookup outcome
    fn format_addresses(&self, rendered: &Rendered<Vec<AddressRecord>>) -> Result<String>;

    /// Format a location lookup outcome
    fn format_location(&self, rendered: &Rendered<Fix>) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "text" => Some(Box::new(text::TextFormatter)),
        "json" => Some(Box::new(json::JsonFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable text".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "Status, text and payload as JSON".to_string(),
        },
    ]
}
