use clap::{Args, Subcommand};

mod reassign;

#[derive(Debug, Args)]
pub(crate) struct ImagesCommand {
    #[command(subcommand)]
    command: ImagesSubcommand,
}

#[derive(Debug, Subcommand)]
enum ImagesSubcommand {
    Reassign(reassign::ReassignImagesArgs),
}

pub(crate) async fn run(command: ImagesCommand) -> Result<(), String> {
    match command.command {
        ImagesSubcommand::Reassign(args) => reassign::run(args).await,
    }
}
