//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::geo::AddressRecord;
use crate::location::Fix;
use crate::outcome::Rendered;

/// JSON formatter - status, text and payload as a pretty-printed object
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Status, text and payload as JSON"
    }

    fn format_addresses(&self, rendered: &Rendered<Vec<AddressRecord>>) -> Result<String> {
        Ok(serde_json::to_string_pretty(rendered)?)
    }

    fn format_location(&self, rendered: &Rendered<Fix>) -> Result<String> {
        Ok(serde_json::to_string_pretty(rendered)?)
    }
}
