use clap::Args;
use omahub_app::domain::products::{PgProductsService, ProductsService, records::ProductUuid};
use uuid::Uuid;

use crate::cli::connect;

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product to withdraw from the catalogue
    #[arg(long)]
    product_uuid: Uuid,
}

/// Soft-deletes the product; existing basket lines stop resolving at submission.
pub(crate) async fn run(args: DeleteProductArgs) -> Result<(), String> {
    let service = PgProductsService::new(connect(&args.database_url).await?);

    service
        .delete_product(ProductUuid::from_uuid(args.product_uuid))
        .await
        .map_err(|error| format!("failed to delete product: {error}"))?;

    println!("deleted product: {}", args.product_uuid);

    Ok(())
}
