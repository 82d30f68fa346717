//! Images service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::images::{
        data::ImageMappingEntry,
        errors::ImagesServiceError,
        planning::plan,
        records::{
            ReassignmentBatchUuid, ReassignmentLine, ReassignmentOutcome, ReassignmentReport,
        },
        repository::PgImagesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgImagesService {
    db: Db,
    repository: PgImagesRepository,
}

impl PgImagesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgImagesRepository::new(),
        }
    }
}

#[async_trait]
impl ImagesService for PgImagesService {
    async fn reassign_images(
        &self,
        entries: Vec<ImageMappingEntry>,
        dry_run: bool,
    ) -> Result<ReassignmentReport, ImagesServiceError> {
        let batch_uuid = ReassignmentBatchUuid::new();
        let mut tx = self.db.begin().await?;
        let mut lines = Vec::with_capacity(entries.len());

        for entry in &entries {
            let current = self
                .repository
                .get_current_image(&mut tx, entry.target, entry.uuid)
                .await?;

            let outcome = plan(entry, current, dry_run);

            if let ReassignmentOutcome::Applied { previous } = &outcome {
                self.repository
                    .set_image(&mut tx, entry.target, entry.uuid, &entry.image_url)
                    .await?;

                self.repository
                    .create_reassignment(
                        &mut tx,
                        batch_uuid,
                        entry.target,
                        entry.uuid,
                        previous.as_deref(),
                        &entry.image_url,
                    )
                    .await?;
            }

            lines.push(ReassignmentLine::new(entry, outcome));
        }

        if dry_run {
            tx.rollback().await?;
        } else {
            tx.commit().await?;
        }

        let report = ReassignmentReport {
            batch_uuid,
            dry_run,
            lines,
        };

        info!(
            batch = %batch_uuid,
            dry_run,
            summary = %report.summary(),
            "image reassignment finished"
        );

        Ok(report)
    }
}

#[automock]
#[async_trait]
pub trait ImagesService: Send + Sync {
    /// Apply a mapping of image URLs in one transaction, writing an audit row
    /// per change. Nothing is written in dry-run mode.
    async fn reassign_images(
        &self,
        entries: Vec<ImageMappingEntry>,
        dry_run: bool,
    ) -> Result<ReassignmentReport, ImagesServiceError>;
}
