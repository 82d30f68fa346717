//! Per-test PostgreSQL databases on one shared container.
//!
//! The container starts on first use. Every [`TestDb`] gets a fresh database
//! with all migrations applied, so service tests never share rows. Databases
//! are dropped in the background once their `TestDb` goes away.

use std::env;

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool, query};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};
use uuid::Uuid;

const SUPERUSER: &str = "omahub_test";
const SUPERUSER_PASSWORD: &str = "omahub_test_password";

/// Where the shared container can be reached.
struct PgServer {
    _container: ContainerAsync<PostgresImage>,
    host: String,
    port: u16,
}

impl PgServer {
    async fn start() -> Self {
        let container = PostgresImage::default()
            .with_user(SUPERUSER)
            .with_password(SUPERUSER_PASSWORD)
            .with_db_name(SUPERUSER)
            .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get container port");

        let host =
            env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

        Self {
            _container: container,
            host,
            port,
        }
    }

    /// Superuser connection string for `database`.
    fn url(&self, database: &str) -> String {
        format!(
            "postgresql://{SUPERUSER}:{SUPERUSER_PASSWORD}@{}:{}/{database}",
            self.host, self.port
        )
    }

    async fn admin_connection(&self) -> Result<PgConnection, sqlx::Error> {
        PgConnection::connect(&self.url("postgres")).await
    }
}

static SERVER: Lazy<OnceCell<PgServer>> = Lazy::new(OnceCell::new);

/// Names of databases waiting to be dropped.
static DROPS: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn server() -> &'static PgServer {
    SERVER.get_or_init(PgServer::start).await
}

async fn spawn_dropper() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Err(error) = drop_database(&name).await {
                eprintln!("Failed to drop test database '{name}': {error}");
            }
        }
    });

    sender
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    let Some(server) = SERVER.get() else {
        return Ok(());
    };

    let mut conn = server.admin_connection().await?;

    query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// A freshly migrated database owned by one test.
#[derive(Debug, Clone)]
pub struct TestDb {
    /// Superuser pool; bypasses row-level security.
    pub pool: PgPool,

    pub name: String,

    /// Connection string of `pool`, used to derive app-role credentials.
    pub(super) superuser_url: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROPS.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        DROPS.get_or_init(spawn_dropper).await;

        let server = server().await;

        // Generated names are lowercase hex, always a valid identifier.
        let name = format!("omahub_test_{}", Uuid::now_v7().simple());

        let mut conn = server
            .admin_connection()
            .await
            .expect("Failed to connect to postgres database");

        query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let superuser_url = server.url(&name);

        let pool = PgPool::connect(&superuser_url)
            .await
            .expect("Failed to create pool for test database");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self {
            pool,
            name,
            superuser_url,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use sqlx::query_scalar;

    use super::*;

    #[tokio::test]
    async fn fresh_database_has_schema_and_no_rows() {
        let test_db = TestDb::new().await;

        let baskets: i64 = query_scalar("SELECT COUNT(*) FROM baskets")
            .fetch_one(test_db.pool())
            .await
            .expect("baskets table should exist after migrations");

        assert_eq!(baskets, 0);
    }

    #[tokio::test]
    async fn databases_are_isolated() {
        let first = TestDb::new().await;
        let second = TestDb::new().await;

        assert_ne!(first.name, second.name);

        query("INSERT INTO users (uuid, email) VALUES ($1, 'ada@example.com')")
            .bind(Uuid::now_v7())
            .execute(first.pool())
            .await
            .expect("insert should succeed");

        let users: i64 = query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(second.pool())
            .await
            .expect("count should succeed");

        assert_eq!(users, 0);
    }
}
