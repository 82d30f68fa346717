use clap::Args;
use omahub_app::domain::{
    brands::{BrandsService, PgBrandsService, data::NewBrand, records::BrandUuid},
    users::records::UserUuid,
};
use uuid::Uuid;

use crate::cli::connect;

#[derive(Debug, Args)]
pub(crate) struct CreateBrandArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Brand display name
    #[arg(long)]
    name: String,

    /// ISO 4217 currency code orders are placed in
    #[arg(long, default_value = "NGN")]
    currency: String,

    /// User notified about new orders
    #[arg(long)]
    owner_uuid: Option<Uuid>,

    /// Brand image URL
    #[arg(long)]
    image_url: Option<String>,

    /// Optional brand UUID; generated when omitted
    #[arg(long)]
    brand_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateBrandArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let service = PgBrandsService::new(connect(&args.database_url).await?);

    let brand = service
        .create_brand(NewBrand {
            uuid: args
                .brand_uuid
                .map_or_else(BrandUuid::new, BrandUuid::from_uuid),
            name: args.name.trim().to_string(),
            currency: args.currency.trim().to_ascii_uppercase(),
            owner_uuid: args.owner_uuid.map(UserUuid::from_uuid),
            image_url: args.image_url,
        })
        .await
        .map_err(|error| format!("failed to create brand: {error}"))?;

    println!("brand_uuid: {}", brand.uuid);
    println!("name: {}", brand.name);
    println!("currency: {}", brand.currency);
    if let Some(owner) = brand.owner_uuid {
        println!("owner_uuid: {owner}");
    }

    Ok(())
}
