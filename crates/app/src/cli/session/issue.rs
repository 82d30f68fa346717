use clap::Args;
use jiff::{SignedDuration, Timestamp};
use omahub_app::{auth::PgAuthService, database, domain::users::records::UserUuid};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct IssueSessionArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// User the session acts as
    #[arg(long)]
    user_uuid: Uuid,

    /// Session lifetime in hours
    #[arg(long, default_value_t = 720)]
    ttl_hours: i64,
}

pub(crate) async fn run(args: IssueSessionArgs) -> Result<(), String> {
    if args.ttl_hours <= 0 {
        return Err("ttl-hours must be positive".to_string());
    }

    let expires_at = Timestamp::now()
        .checked_add(SignedDuration::from_hours(args.ttl_hours))
        .map_err(|error| format!("invalid ttl-hours: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let issued = PgAuthService::new(pool)
        .issue_session(UserUuid::from_uuid(args.user_uuid), expires_at)
        .await
        .map_err(|error| format!("failed to issue session: {error}"))?;

    println!("session_uuid: {}", issued.uuid);
    println!("user_uuid: {}", issued.user_uuid);
    println!("session_expires_at: {}", issued.expires_at);
    println!("session_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
