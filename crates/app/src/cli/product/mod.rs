use clap::{Args, Subcommand};

mod create;
mod delete;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Add a product to a brand's catalogue
    Create(create::CreateProductArgs),

    /// Withdraw a product from the catalogue
    Delete(delete::DeleteProductArgs),
}

pub(crate) async fn run(command: ProductCommand) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Create(args) => create::run(args).await,
        ProductSubcommand::Delete(args) => delete::run(args).await,
    }
}
