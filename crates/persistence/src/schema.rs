//! Table creation for a fresh database.

use sqlx::MySqlPool;
use tracing::info;

/// Guestbook wishes. `created_at` holds UTC.
pub const CREATE_WISHES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS wishes (
    id INT NOT NULL AUTO_INCREMENT,
    name VARCHAR(100) NOT NULL,
    message TEXT NOT NULL,
    created_at DATETIME(6) NOT NULL,
    PRIMARY KEY (id)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

/// Invite tracker rows. `created_at` holds UTC.
pub const CREATE_INVITES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS invites (
    id INT NOT NULL AUTO_INCREMENT,
    person_name VARCHAR(120) NOT NULL,
    village_name VARCHAR(120) NOT NULL,
    total_people INT NOT NULL DEFAULT 1,
    created_at DATETIME(6) NOT NULL,
    PRIMARY KEY (id)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

/// Create any missing tables. Existing tables and rows are left alone.
pub async fn init_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    for (table, ddl) in [
        ("wishes", CREATE_WISHES_TABLE),
        ("invites", CREATE_INVITES_TABLE),
    ] {
        sqlx::query(ddl).execute(pool).await?;
        info!(table, "Table ensured");
    }
    Ok(())
}
