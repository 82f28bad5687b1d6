//! CLI maintenance commands.
//!
//! Database problems are reported as text for the operator; none of these
//! functions fail.

use persistence::db::{create_pool, ping};
use persistence::repair::{repair_invite_schema, RepairReport};
use persistence::schema::init_schema;
use tracing::error;

use crate::config::Config;

/// Create missing tables.
///
/// `init-db`
pub async fn init_db(config: &Config) -> String {
    let result = async {
        let pool = create_pool(&config.pool_config()).await?;
        init_schema(&pool).await
    }
    .await;

    match result {
        Ok(()) => "Database tables are in place.".to_string(),
        Err(err) => {
            error!(error = %err, "Schema initialization failed");
            failure("Could not initialize the database", &err, config)
        }
    }
}

/// Check connectivity with `SELECT 1`.
///
/// `test-db`
pub async fn test_db(config: &Config) -> String {
    let result = async {
        let pool = create_pool(&config.pool_config()).await?;
        ping(&pool).await
    }
    .await;

    match result {
        Ok(_) => format!(
            "Database connection OK ({})",
            config.masked_database_url()
        ),
        Err(err) => failure("Database connection failed", &err, config),
    }
}

/// Run the legacy invite column repair.
///
/// `fix-invites-schema`
pub async fn fix_invites_schema(config: &Config) -> String {
    let result = async {
        let pool = create_pool(&config.pool_config()).await?;
        repair_invite_schema(&pool).await
    }
    .await;

    match result {
        Ok(report) => describe_repair(&report),
        Err(err) => {
            error!(error = %err, "Invite schema repair failed");
            failure("Invite schema repair failed", &err, config)
        }
    }
}

/// One line per column, then a summary.
pub fn describe_repair(report: &RepairReport) -> String {
    let mut lines: Vec<String> = report
        .columns
        .iter()
        .map(|(column, outcome)| format!("{}: invites.{} {}", report.step, column, outcome))
        .collect();

    lines.push(if report.changed() {
        "Invite schema updated.".to_string()
    } else {
        "Invite schema already up to date.".to_string()
    });
    lines.join("\n")
}

fn failure(what: &str, err: &sqlx::Error, config: &Config) -> String {
    format!(
        "{}: {}\nDatabase URL: {}",
        what,
        err,
        config.masked_database_url()
    )
}
