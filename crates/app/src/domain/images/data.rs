//! Image Mapping Data

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::images::records::ImageTarget;

/// One line of a mapping file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageMappingEntry {
    pub target: ImageTarget,
    pub uuid: Uuid,
    pub image_url: String,
    /// When set, the current URL must match or the entry is reported as a conflict.
    #[serde(default)]
    pub expected_current: Option<String>,
}

/// Parse a mapping file: a JSON array of entries.
///
/// # Errors
///
/// Returns an error when the document is not a valid mapping array.
pub fn parse_mapping(json: &str) -> Result<Vec<ImageMappingEntry>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_with_and_without_expectation() -> Result<(), serde_json::Error> {
        let entries = parse_mapping(
            r#"[
                {"target": "brand", "uuid": "0190f1a2-0000-7000-8000-000000000001",
                 "image_url": "https://cdn.example/brands/adire.jpg"},
                {"target": "product", "uuid": "0190f1a2-0000-7000-8000-000000000002",
                 "image_url": "https://cdn.example/products/kaftan.jpg",
                 "expected_current": "https://cdn.example/products/old.jpg"}
            ]"#,
        )?;

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].target, ImageTarget::Brand);
        assert_eq!(entries[0].expected_current, None);
        assert_eq!(entries[1].target, ImageTarget::Product);
        assert_eq!(
            entries[1].expected_current.as_deref(),
            Some("https://cdn.example/products/old.jpg")
        );

        Ok(())
    }

    #[test]
    fn rejects_unknown_target() {
        let result = parse_mapping(
            r#"[{"target": "collection", "uuid": "0190f1a2-0000-7000-8000-000000000001",
                 "image_url": "https://cdn.example/x.jpg"}]"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_array_document() {
        assert!(parse_mapping(r#"{"target": "brand"}"#).is_err());
    }
}
