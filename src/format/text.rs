//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::geo::AddressRecord;
use crate::location::Fix;
use crate::outcome::Rendered;

/// Text formatter - outputs the rendered text, newline-terminated
pub struct TextFormatter;

impl TextFormatter {
    fn terminated(text: &str) -> String {
        if text.ends_with('\n') {
            text.to_string()
        } else {
            format!("{}\n", text)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format_addresses(&self, rendered: &Rendered<Vec<AddressRecord>>) -> Result<String> {
        Ok(Self::terminated(rendered.text()))
    }

    fn format_location(&self, rendered: &Rendered<Fix>) -> Result<String> {
        Ok(Self::terminated(rendered.text()))
    }
}
