//! Export of a generated record as a downloadable artifact.

use designai_core::error::{DesignError, Result};
use designai_core::record::GenerationRecord;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    Html,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Html, ExportFormat::Json];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Html => "design-export.html",
            Self::Json => "design-export.json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Html => "text/html;charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// Upper-case label used in user messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Json => "JSON",
        }
    }
}

/// A serialized record ready to be written somewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
}

/// Serializes `record` in `format`.
///
/// HTML is the stored preview, byte for byte. JSON is the full record,
/// pretty-printed with two-space indentation.
pub fn export_record(record: Option<&GenerationRecord>, format: ExportFormat) -> Result<ExportArtifact> {
    let record = record.ok_or(DesignError::NothingToExport)?;

    let content = match format {
        ExportFormat::Html => record.html.clone(),
        ExportFormat::Json => serde_json::to_string_pretty(record)?,
    };

    Ok(ExportArtifact {
        file_name: format.file_name().to_string(),
        mime_type: format.mime_type().to_string(),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use designai_core::record::Complexity;
    use designai_core::state::Device;
    use std::str::FromStr;

    fn record() -> GenerationRecord {
        GenerationRecord {
            id: "1760780000000-00beef".to_string(),
            prompt: "Checkout flow with address form and order summary".to_string(),
            template: "Checkout".to_string(),
            tone: "Minimal".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap(),
            device: Device::Mobile,
            complexity: Complexity::Low,
            html: "<!doctype html><p>checkout</p>".to_string(),
        }
    }

    #[test]
    fn test_nothing_to_export() {
        let err = export_record(None, ExportFormat::Html).unwrap_err();
        assert!(matches!(err, DesignError::NothingToExport));
    }

    #[test]
    fn test_html_export_is_the_stored_preview() {
        let record = record();
        let artifact = export_record(Some(&record), ExportFormat::Html).unwrap();

        assert_eq!(artifact.content, record.html);
        assert_eq!(artifact.file_name, "design-export.html");
        assert_eq!(artifact.mime_type, "text/html;charset=utf-8");
    }

    #[test]
    fn test_json_export_is_pretty_full_record() {
        let record = record();
        let artifact = export_record(Some(&record), ExportFormat::Json).unwrap();

        assert!(artifact.content.starts_with("{\n  \"id\": \"1760780000000-00beef\""));
        assert!(artifact.content.contains("\n  \"createdAt\": "));
        assert!(artifact.content.contains("\"html\": \"<!doctype html><p>checkout</p>\""));
        assert_eq!(artifact.file_name, "design-export.json");

        let parsed: GenerationRecord = serde_json::from_str(&artifact.content).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_export_is_idempotent() {
        let record = record();
        for format in [ExportFormat::Html, ExportFormat::Json] {
            assert_eq!(
                export_record(Some(&record), format).unwrap(),
                export_record(Some(&record), format).unwrap()
            );
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(ExportFormat::from_str("HTML").unwrap(), ExportFormat::Html);
        assert_eq!(ExportFormat::from_str("json").unwrap(), ExportFormat::Json);
        assert!(ExportFormat::from_str("pdf").is_err());
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }
}
