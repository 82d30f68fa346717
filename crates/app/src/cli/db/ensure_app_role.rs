use clap::Args;
use omahub_app::database;
use sqlx::{Postgres, Transaction, query, query_scalar};

/// Privileges the API role needs, per table.
///
/// Catalogue and account tables are never deleted from at runtime; the image
/// audit trail is append-only.
const TABLE_PRIVILEGES: &[(&str, &str)] = &[
    ("users", "SELECT, INSERT, UPDATE"),
    ("sessions", "SELECT, INSERT, UPDATE"),
    ("profiles", "SELECT, INSERT, UPDATE"),
    ("brands", "SELECT, INSERT, UPDATE"),
    ("products", "SELECT, INSERT, UPDATE"),
    ("baskets", "SELECT, INSERT, UPDATE, DELETE"),
    ("basket_items", "SELECT, INSERT, UPDATE, DELETE"),
    ("orders", "SELECT, INSERT, UPDATE"),
    ("order_items", "SELECT, INSERT"),
    ("notifications", "SELECT, INSERT, UPDATE"),
    ("image_reassignments", "SELECT, INSERT"),
];

/// Tables whose rows belong to a single user.
const OWNER_SCOPED_TABLES: &[&str] = &[
    "profiles",
    "baskets",
    "basket_items",
    "orders",
    "order_items",
    "notifications",
];

#[derive(Debug, Args)]
pub(crate) struct EnsureAppRoleArgs {
    /// Administrative PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Role the JSON API connects as
    #[arg(long, default_value = "omahub_app")]
    role_name: String,

    /// Password to set on the role
    #[arg(long, env = "APP_DB_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) async fn run(args: EnsureAppRoleArgs) -> Result<(), String> {
    if args.role_name.trim().is_empty() {
        return Err("role_name cannot be empty".to_string());
    }

    if args.password.trim().is_empty() {
        return Err("password cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|error| format!("failed to start transaction: {error}"))?;

    let role = quote(&mut tx, "quote_ident", &args.role_name).await?;
    let password = quote(&mut tx, "quote_literal", &args.password).await?;

    let role_exists: bool =
        query_scalar("SELECT EXISTS (SELECT 1 FROM pg_roles WHERE rolname = $1)")
            .bind(&args.role_name)
            .fetch_one(&mut *tx)
            .await
            .map_err(|error| format!("failed to check role existence: {error}"))?;

    let verb = if role_exists { "ALTER" } else { "CREATE" };

    // NOBYPASSRLS keeps basket, order and inbox rows scoped to the acting user.
    execute(
        &mut tx,
        &format!(
            "{verb} ROLE {role} LOGIN PASSWORD {password} \
             NOSUPERUSER NOCREATEDB NOCREATEROLE NOREPLICATION NOBYPASSRLS"
        ),
    )
    .await?;

    let database: String = query_scalar("SELECT quote_ident(current_database())")
        .fetch_one(&mut *tx)
        .await
        .map_err(|error| format!("failed to resolve database name: {error}"))?;

    execute(
        &mut tx,
        &format!("GRANT CONNECT ON DATABASE {database} TO {role}"),
    )
    .await?;
    execute(&mut tx, &format!("GRANT USAGE ON SCHEMA public TO {role}")).await?;

    for (table, privileges) in TABLE_PRIVILEGES {
        execute(&mut tx, &format!("GRANT {privileges} ON {table} TO {role}")).await?;
    }

    let unprotected = unprotected_tables(&mut tx).await?;

    if !unprotected.is_empty() {
        return Err(format!(
            "row level security is not forced on: {}; run migrations first",
            unprotected.join(", ")
        ));
    }

    tx.commit()
        .await
        .map_err(|error| format!("failed to commit changes: {error}"))?;

    println!("ensured app role: {}", args.role_name);
    println!("granted {} tables", TABLE_PRIVILEGES.len());

    Ok(())
}

async fn quote(
    tx: &mut Transaction<'_, Postgres>,
    function: &str,
    value: &str,
) -> Result<String, String> {
    query_scalar(&format!("SELECT {function}($1)"))
        .bind(value)
        .fetch_one(&mut **tx)
        .await
        .map_err(|error| format!("failed to {function} value: {error}"))
}

async fn execute(tx: &mut Transaction<'_, Postgres>, sql: &str) -> Result<(), String> {
    query(sql)
        .execute(&mut **tx)
        .await
        .map(|_done| ())
        .map_err(|error| format!("failed to run `{sql}`: {error}"))
}

/// Owner-scoped tables missing `FORCE ROW LEVEL SECURITY`.
async fn unprotected_tables(tx: &mut Transaction<'_, Postgres>) -> Result<Vec<String>, String> {
    let names: Vec<String> = OWNER_SCOPED_TABLES
        .iter()
        .map(ToString::to_string)
        .collect();

    query_scalar(
        "SELECT relname::TEXT FROM pg_class \
         WHERE relname = ANY($1) \
           AND relnamespace = 'public'::regnamespace \
           AND NOT (relrowsecurity AND relforcerowsecurity) \
         ORDER BY relname",
    )
    .bind(names)
    .fetch_all(&mut **tx)
    .await
    .map_err(|error| format!("failed to inspect row level security: {error}"))
}
