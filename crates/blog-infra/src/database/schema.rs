//! Startup schema initialization.

use sea_orm::sea_query::{ColumnDef, Expr, Table, TableCreateStatement};
use sea_orm::{ConnectionTrait, DbBackend, DbErr, FromQueryResult, Statement, Value};

use blog_core::domain::TITLE_MAX_CHARS;

use super::entity::post;

/// `CREATE TABLE IF NOT EXISTS posts (...)`.
pub fn posts_table() -> TableCreateStatement {
    Table::create()
        .table(post::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(post::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(post::Column::Title)
                .string_len(TITLE_MAX_CHARS as u32)
                .not_null(),
        )
        .col(ColumnDef::new(post::Column::Content).text().not_null())
        .col(
            ColumnDef::new(post::Column::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

/// Column type `created_at` must have for rows to decode.
const CREATED_AT_TYPE: &str = "timestamp with time zone";

#[derive(Debug, FromQueryResult)]
struct ColumnType {
    data_type: String,
}

/// Fail when an existing `posts` table stores `created_at` without a time
/// zone. `IF NOT EXISTS` keeps such a table, and every read would then fail.
async fn check_created_at_type<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let stmt = Statement::from_sql_and_values(
        DbBackend::Postgres,
        "SELECT data_type FROM information_schema.columns \
         WHERE table_schema = current_schema() AND table_name = $1 AND column_name = $2",
        [Value::from("posts"), Value::from("created_at")],
    );

    match ColumnType::find_by_statement(stmt).one(db).await? {
        Some(column) if column.data_type != CREATED_AT_TYPE => Err(DbErr::Custom(format!(
            "posts.created_at is `{}`, expected `{}`; run \
             ALTER TABLE posts ALTER COLUMN created_at TYPE TIMESTAMPTZ",
            column.data_type, CREATED_AT_TYPE
        ))),
        _ => Ok(()),
    }
}

/// Ensure the posts table exists. Safe to run on every startup; existing
/// rows are never touched.
pub async fn ensure_schema<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    db.execute(backend.build(&posts_table())).await?;

    if backend == DbBackend::Postgres {
        check_created_at_type(db).await?;
    }

    tracing::info!("Database schema initialized");
    Ok(())
}
