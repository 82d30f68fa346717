//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Seconds a basket submission claim blocks a retry before it is treated as abandoned
    #[arg(long, env = "BASKET_CLAIM_TTL_SECONDS", default_value_t = 300_i64)]
    pub basket_claim_ttl_seconds: i64,
}
