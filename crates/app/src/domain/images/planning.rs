//! Per-entry reassignment decisions.

use crate::domain::images::{data::ImageMappingEntry, records::ReassignmentOutcome};

/// Decide what to do with one entry.
///
/// `current` is `None` when the target row does not exist, and `Some(None)`
/// when it exists without an image.
pub(crate) fn plan(
    entry: &ImageMappingEntry,
    current: Option<Option<String>>,
    dry_run: bool,
) -> ReassignmentOutcome {
    let Some(current) = current else {
        return ReassignmentOutcome::Missing;
    };

    if current.as_deref() == Some(entry.image_url.as_str()) {
        return ReassignmentOutcome::Unchanged;
    }

    if let Some(expected) = entry.expected_current.as_deref()
        && current.as_deref() != Some(expected)
    {
        return ReassignmentOutcome::Conflict { current };
    }

    if dry_run {
        ReassignmentOutcome::WouldApply { previous: current }
    } else {
        ReassignmentOutcome::Applied { previous: current }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::domain::images::records::ImageTarget;

    use super::*;

    const NEW: &str = "https://cdn.example/new.jpg";
    const OLD: &str = "https://cdn.example/old.jpg";

    fn entry(expected_current: Option<&str>) -> ImageMappingEntry {
        ImageMappingEntry {
            target: ImageTarget::Product,
            uuid: Uuid::nil(),
            image_url: NEW.to_string(),
            expected_current: expected_current.map(str::to_string),
        }
    }

    #[test]
    fn missing_target() {
        assert_eq!(
            plan(&entry(None), None, false),
            ReassignmentOutcome::Missing
        );
    }

    #[test]
    fn already_pointing_at_new_url_is_unchanged() {
        let outcome = plan(&entry(Some(OLD)), Some(Some(NEW.to_string())), false);

        assert_eq!(outcome, ReassignmentOutcome::Unchanged);
    }

    #[test]
    fn unexpected_current_url_is_a_conflict() {
        let current = Some("https://cdn.example/other.jpg".to_string());

        let outcome = plan(&entry(Some(OLD)), Some(current.clone()), false);

        assert_eq!(outcome, ReassignmentOutcome::Conflict { current });
    }

    #[test]
    fn expected_url_on_image_less_target_is_a_conflict() {
        let outcome = plan(&entry(Some(OLD)), Some(None), false);

        assert_eq!(outcome, ReassignmentOutcome::Conflict { current: None });
    }

    #[test]
    fn matching_expectation_applies() {
        let outcome = plan(&entry(Some(OLD)), Some(Some(OLD.to_string())), false);

        assert_eq!(
            outcome,
            ReassignmentOutcome::Applied {
                previous: Some(OLD.to_string())
            }
        );
    }

    #[test]
    fn no_expectation_applies_over_anything() {
        assert_eq!(
            plan(&entry(None), Some(None), false),
            ReassignmentOutcome::Applied { previous: None }
        );
    }

    #[test]
    fn dry_run_reports_would_apply() {
        assert_eq!(
            plan(&entry(None), Some(Some(OLD.to_string())), true),
            ReassignmentOutcome::WouldApply {
                previous: Some(OLD.to_string())
            }
        );
    }
}
