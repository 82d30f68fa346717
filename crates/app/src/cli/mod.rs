use clap::{Parser, Subcommand};

mod brand;
mod db;
mod images;
mod product;
mod session;
mod user;

#[derive(Debug, Parser)]
#[command(name = "omahub-app", about = "OmaHub operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(user::UserCommand),
    Session(session::SessionCommand),
    Brand(brand::BrandCommand),
    Product(product::ProductCommand),
    Images(images::ImagesCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::User(command) => user::run(command).await,
            Commands::Session(command) => session::run(command).await,
            Commands::Brand(command) => brand::run(command).await,
            Commands::Product(command) => product::run(command).await,
            Commands::Images(command) => images::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

async fn connect(database_url: &str) -> Result<omahub_app::database::Db, String> {
    omahub_app::database::connect(database_url)
        .await
        .map(omahub_app::database::Db::new)
        .map_err(|error| format!("failed to connect to database: {error}"))
}
