use clap::Args;
use omahub_app::domain::{
    brands::records::BrandUuid,
    products::{PgProductsService, ProductsService, data::NewProduct, records::ProductUuid},
};
use uuid::Uuid;

use crate::cli::connect;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Owning brand
    #[arg(long)]
    brand_uuid: Uuid,

    /// Product title
    #[arg(long)]
    title: String,

    /// Catalogue category
    #[arg(long)]
    category: Option<String>,

    /// Price in minor units
    #[arg(long)]
    price: u64,

    /// Sale price in minor units
    #[arg(long)]
    sale_price: Option<u64>,

    /// Product image URL
    #[arg(long)]
    image_url: Option<String>,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    if args.title.trim().is_empty() {
        return Err("title cannot be empty".to_string());
    }

    if args.sale_price.is_some_and(|sale| sale > args.price) {
        return Err("sale-price cannot exceed price".to_string());
    }

    let service = PgProductsService::new(connect(&args.database_url).await?);

    let product = service
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            brand_uuid: BrandUuid::from_uuid(args.brand_uuid),
            title: args.title.trim().to_string(),
            category: args.category,
            price: args.price,
            sale_price: args.sale_price,
            image_url: args.image_url,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("brand_uuid: {}", product.brand_uuid);
    println!("title: {}", product.title);
    println!("price: {}", product.price);
    if let Some(sale_price) = product.sale_price {
        println!("sale_price: {sale_price}");
    }

    Ok(())
}
