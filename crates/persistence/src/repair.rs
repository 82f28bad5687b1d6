//! One-shot repair for invites tables created by an older schema.
//!
//! Older deployments carried `code` and `created_by` columns declared
//! NOT NULL without a default, which makes every insert from the current
//! code fail. The repair relaxes them to nullable. Running it again is a
//! no-op.

use std::fmt;

use sqlx::MySqlPool;
use tracing::{info, warn};

use crate::query_timer::QueryTimer;

/// Name of the repair step, reported by the CLI.
pub const INVITE_SCHEMA_REPAIR: &str = "invites-legacy-nullable-v1";

/// A column the current schema no longer writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyColumn {
    pub name: &'static str,
    /// Column type used when redeclaring it as nullable.
    pub definition: &'static str,
}

pub const LEGACY_INVITE_COLUMNS: [LegacyColumn; 2] = [
    LegacyColumn {
        name: "code",
        definition: "VARCHAR(64)",
    },
    LegacyColumn {
        name: "created_by",
        definition: "INT",
    },
];

/// What `information_schema` says about a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnState {
    Absent,
    Nullable,
    NotNull,
}

impl ColumnState {
    /// Maps an `IS_NULLABLE` value (`YES` / `NO`) for a present column.
    pub fn from_is_nullable(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("YES") {
            ColumnState::Nullable
        } else {
            ColumnState::NotNull
        }
    }
}

/// What happened to a single legacy column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOutcome {
    Absent,
    AlreadyNullable,
    MadeNullable,
}

impl fmt::Display for ColumnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ColumnOutcome::Absent => "absent, nothing to do",
            ColumnOutcome::AlreadyNullable => "already nullable",
            ColumnOutcome::MadeNullable => "made nullable",
        };
        f.write_str(text)
    }
}

/// Per-column result of a repair run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairReport {
    pub step: &'static str,
    pub columns: Vec<(&'static str, ColumnOutcome)>,
}

impl RepairReport {
    /// Whether any ALTER statement was executed.
    pub fn changed(&self) -> bool {
        self.columns
            .iter()
            .any(|(_, outcome)| *outcome == ColumnOutcome::MadeNullable)
    }
}

/// Decide what to do with one column. Returns the ALTER statement to run, if any.
pub fn plan(column: &LegacyColumn, state: ColumnState) -> (ColumnOutcome, Option<String>) {
    match state {
        ColumnState::Absent => (ColumnOutcome::Absent, None),
        ColumnState::Nullable => (ColumnOutcome::AlreadyNullable, None),
        ColumnState::NotNull => (
            ColumnOutcome::MadeNullable,
            Some(format!(
                "ALTER TABLE invites MODIFY COLUMN {} {} NULL DEFAULT NULL",
                column.name, column.definition
            )),
        ),
    }
}

async fn column_state(
    pool: &MySqlPool,
    schema: &str,
    column: &str,
) -> Result<ColumnState, sqlx::Error> {
    let timer = QueryTimer::new("inspect_invite_column");
    let result = sqlx::query_scalar::<_, String>(
        r#"
        SELECT CAST(IS_NULLABLE AS CHAR(3))
        FROM information_schema.COLUMNS
        WHERE TABLE_SCHEMA = ? AND TABLE_NAME = 'invites' AND COLUMN_NAME = ?
        "#,
    )
    .bind(schema)
    .bind(column)
    .fetch_optional(pool)
    .await;
    timer.record();

    Ok(match result? {
        Some(value) => ColumnState::from_is_nullable(&value),
        None => ColumnState::Absent,
    })
}

/// Make the legacy invite columns nullable where they exist and are not.
///
/// Each column is inspected independently against the connection's current
/// database.
pub async fn repair_invite_schema(pool: &MySqlPool) -> Result<RepairReport, sqlx::Error> {
    let schema: Option<String> = sqlx::query_scalar("SELECT DATABASE()")
        .fetch_one(pool)
        .await?;
    let Some(schema) = schema else {
        return Err(sqlx::Error::Configuration(
            "no database selected on the connection".into(),
        ));
    };

    let mut report = RepairReport {
        step: INVITE_SCHEMA_REPAIR,
        columns: Vec::with_capacity(LEGACY_INVITE_COLUMNS.len()),
    };

    for column in &LEGACY_INVITE_COLUMNS {
        let state = column_state(pool, &schema, column.name).await?;
        let (outcome, statement) = plan(column, state);

        if let Some(statement) = statement {
            warn!(column = column.name, "Relaxing legacy NOT NULL invite column");
            let timer = QueryTimer::new("alter_invite_column");
            let result = sqlx::query(&statement).execute(pool).await;
            timer.record();
            result?;
        }

        info!(
            step = INVITE_SCHEMA_REPAIR,
            column = column.name,
            outcome = %outcome,
            "Invite schema column checked"
        );
        report.columns.push((column.name, outcome));
    }

    Ok(report)
}
