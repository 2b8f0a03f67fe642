use crate::storage::entity::{product, review};
use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use std::time::Duration;

pub async fn establish_connection(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url.to_owned());
    opt.max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;

    let _ = db
        .execute(sea_orm::Statement::from_string(
            sea_orm::DatabaseBackend::Sqlite,
            "PRAGMA journal_mode=WAL;".to_string(),
        ))
        .await?;

    create_tables(&db).await?;

    info!("database connection established with WAL mode and tables initialized");

    Ok(db)
}

/// Create the `reviews` and `products` tables from their entity
/// definitions (no-op when they exist). Load uses the same helper after
/// dropping the old tables.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let stmt = builder.build(schema.create_table_from_entity(review::Entity).if_not_exists());
    db.execute(stmt).await?;

    let stmt = builder.build(schema.create_table_from_entity(product::Entity).if_not_exists());
    db.execute(stmt).await?;

    Ok(())
}
