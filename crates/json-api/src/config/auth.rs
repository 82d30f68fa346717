//! Auth Config

use clap::Args;

/// Session authentication settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Name of the cookie carrying the session token
    #[arg(long, env = "SESSION_COOKIE_NAME", default_value = "omahub_session")]
    pub session_cookie_name: String,
}
