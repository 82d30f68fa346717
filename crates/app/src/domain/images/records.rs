//! Image Reassignment Records

use std::fmt;

use serde::Deserialize;
use uuid::Uuid;

use crate::{domain::images::data::ImageMappingEntry, uuids::TypedUuid};

/// Reassignment batch UUID, shared by every audit row of one run.
pub type ReassignmentBatchUuid = TypedUuid<ReassignmentReport>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageTarget {
    Brand,
    Product,
}

impl ImageTarget {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Product => "product",
        }
    }
}

impl fmt::Display for ImageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReassignmentOutcome {
    Missing,
    Unchanged,
    Conflict { current: Option<String> },
    Applied { previous: Option<String> },
    WouldApply { previous: Option<String> },
}

impl ReassignmentOutcome {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Unchanged => "unchanged",
            Self::Conflict { .. } => "conflict",
            Self::Applied { .. } => "applied",
            Self::WouldApply { .. } => "would_apply",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignmentLine {
    pub target: ImageTarget,
    pub uuid: Uuid,
    pub image_url: String,
    pub outcome: ReassignmentOutcome,
}

impl ReassignmentLine {
    #[must_use]
    pub fn new(entry: &ImageMappingEntry, outcome: ReassignmentOutcome) -> Self {
        Self {
            target: entry.target,
            uuid: entry.uuid,
            image_url: entry.image_url.clone(),
            outcome,
        }
    }
}

impl fmt::Display for ReassignmentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<11} {} {} -> {}",
            self.outcome.label(),
            self.target,
            self.uuid,
            self.image_url
        )?;

        match &self.outcome {
            ReassignmentOutcome::Conflict { current } => {
                write!(f, " (current: {})", current.as_deref().unwrap_or("none"))
            }
            ReassignmentOutcome::Applied { previous }
            | ReassignmentOutcome::WouldApply { previous } => {
                write!(f, " (was: {})", previous.as_deref().unwrap_or("none"))
            }
            ReassignmentOutcome::Missing | ReassignmentOutcome::Unchanged => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignmentReport {
    pub batch_uuid: ReassignmentBatchUuid,
    pub dry_run: bool,
    pub lines: Vec<ReassignmentLine>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReassignmentSummary {
    pub missing: usize,
    pub unchanged: usize,
    pub conflicts: usize,
    pub applied: usize,
    pub would_apply: usize,
}

impl ReassignmentReport {
    #[must_use]
    pub fn summary(&self) -> ReassignmentSummary {
        self.lines
            .iter()
            .fold(ReassignmentSummary::default(), |mut summary, line| {
                match line.outcome {
                    ReassignmentOutcome::Missing => summary.missing += 1,
                    ReassignmentOutcome::Unchanged => summary.unchanged += 1,
                    ReassignmentOutcome::Conflict { .. } => summary.conflicts += 1,
                    ReassignmentOutcome::Applied { .. } => summary.applied += 1,
                    ReassignmentOutcome::WouldApply { .. } => summary.would_apply += 1,
                }

                summary
            })
    }
}

impl fmt::Display for ReassignmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "applied: {}, would apply: {}, unchanged: {}, conflicts: {}, missing: {}",
            self.applied, self.would_apply, self.unchanged, self.conflicts, self.missing
        )
    }
}
