pub mod connection;
pub mod entity;
pub mod repository;

pub use connection::establish_connection;

#[cfg(test)]
pub(crate) mod testutil {
    use sea_orm::DatabaseConnection;

    /// File-backed scratch database; a pooled in-memory SQLite would hand
    /// each connection its own empty database.
    pub async fn open_temp() -> (tempfile::TempDir, DatabaseConnection) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let db = super::establish_connection(&url).await.unwrap();
        (dir, db)
    }
}
