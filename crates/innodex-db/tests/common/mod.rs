pub mod fixtures;

use sea_orm::{ConnectionTrait, Database, DbConn, DbErr};

pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    db.execute_unprepared(include_str!("sqlite.sql")).await?;
    Ok(())
}

pub async fn memory_db() -> DbConn {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();
    db
}
