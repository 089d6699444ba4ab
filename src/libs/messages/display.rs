//! Display implementation for timeplot application messages.
//!
//! Converts structured `Message` variants into the human-readable text shown
//! on the terminal. All user-facing wording lives here, which keeps the
//! commands free of string literals and makes future localization possible.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ServerConfigNotFound => {
                "Server configuration not found. Run 'timeplot init' first.".to_string()
            }

            // === FETCH MESSAGES ===
            Message::RecordsFetched(count) => format!("Fetched {} time record(s)", count),

            // === CHART MESSAGES ===
            Message::ChartSaved(path) => format!("Chart saved to {}", path),
            Message::NoRecordsInRange(start, end) => {
                format!("No time records found between {} and {}; rendering an empty chart.", start, end)
            }
            Message::RecordsHeader(start, end) => format!("Time records from {} to {}", start, end),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} in {} format...", data, format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptServerApiUrl => "Enter the time records API URL".to_string(),
        };

        write!(f, "{}", text)
    }
}
