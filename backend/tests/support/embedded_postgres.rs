//! Database reset and schema helpers for the embedded cluster.
//!
//! Reset uses the `postgres` client directly so `DROP DATABASE` runs outside
//! any Diesel transaction. Schema setup runs the crate's own embedded
//! migrations so test schemas never drift from production.

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use rest_ws::outbound::persistence::run_pending_migrations_blocking;

use super::format_postgres_error;

const ADMIN_DATABASE: &str = "postgres";

/// Drop and recreate `database` on `cluster`.
pub fn reset_database(cluster: &TestCluster, database: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url(ADMIN_DATABASE);
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    // Separate statements: DROP DATABASE cannot run inside the implicit
    // transaction of a multi-statement query.
    client
        .batch_execute(&format!("DROP DATABASE IF EXISTS \"{database}\" WITH (FORCE)"))
        .map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{database}\""))
        .map_err(|err| format_postgres_error(&err))
}

/// Runs all pending migrations against `url`.
pub fn migrate_schema(url: &str) -> Result<(), String> {
    run_pending_migrations_blocking(url)
        .map(|_| ())
        .map_err(|err| err.to_string())
}
