use std::path::PathBuf;

use clap::Args;
use omahub_app::domain::images::{ImagesService, PgImagesService, data::parse_mapping};

use crate::cli::connect;

#[derive(Debug, Args)]
pub(crate) struct ReassignImagesArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// JSON file listing `{target, uuid, image_url, expected_current}` entries
    #[arg(long)]
    mapping: PathBuf,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,
}

pub(crate) async fn run(args: ReassignImagesArgs) -> Result<(), String> {
    let raw = tokio::fs::read_to_string(&args.mapping)
        .await
        .map_err(|error| format!("failed to read {}: {error}", args.mapping.display()))?;

    let entries = parse_mapping(&raw)
        .map_err(|error| format!("invalid mapping file {}: {error}", args.mapping.display()))?;

    let service = PgImagesService::new(connect(&args.database_url).await?);

    let report = service
        .reassign_images(entries, args.dry_run)
        .await
        .map_err(|error| format!("failed to reassign images: {error}"))?;

    for line in &report.lines {
        println!("{line}");
    }

    println!("batch_uuid: {}", report.batch_uuid);
    if report.dry_run {
        println!("dry run: nothing was written");
    }
    println!("{}", report.summary());

    Ok(())
}
