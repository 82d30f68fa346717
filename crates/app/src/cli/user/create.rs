use clap::Args;
use omahub_app::domain::users::{
    PgUsersService, UsersService,
    data::{NewUser, ProfileUpdate},
    records::UserUuid,
};
use uuid::Uuid;

use crate::cli::connect;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Login email address
    #[arg(long)]
    email: String,

    /// Optional user UUID; generated when omitted
    #[arg(long)]
    user_uuid: Option<Uuid>,

    /// Full name shown on orders
    #[arg(long)]
    full_name: Option<String>,

    /// Contact phone number
    #[arg(long)]
    phone: Option<String>,

    /// Delivery address
    #[arg(long)]
    address: Option<String>,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    if args.email.trim().is_empty() {
        return Err("email cannot be empty".to_string());
    }

    let service = PgUsersService::new(connect(&args.database_url).await?);
    let uuid = args
        .user_uuid
        .map_or_else(UserUuid::new, UserUuid::from_uuid);

    let user = service
        .create_user(NewUser {
            uuid,
            email: args.email.trim().to_string(),
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    let profile = service
        .upsert_profile(
            user.uuid,
            ProfileUpdate {
                full_name: args.full_name,
                phone: args.phone,
                address: args.address,
            },
        )
        .await
        .map_err(|error| format!("failed to create profile: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("email: {}", user.email);
    if let Some(full_name) = profile.full_name {
        println!("full_name: {full_name}");
    }

    Ok(())
}
