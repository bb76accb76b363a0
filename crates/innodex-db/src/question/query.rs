use innodex_entity::question;
use innodex_entity::question::{Entity as QuestionEntity, Model as Question};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Question>, DbErr> {
        QuestionEntity::find()
            .order_by_asc(question::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load questions"))
    }

    /// Loads the questions with the given ids. Unknown ids are skipped, so callers compare the result with
    /// their request.
    pub async fn find_by_ids<C: ConnectionTrait>(conn: &C, ids: &[i32]) -> Result<Vec<Question>, DbErr> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        QuestionEntity::find()
            .filter(question::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(question::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, ?ids, "failed to load questions"))
    }

    pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
        QuestionEntity::find()
            .count(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to count questions"))
    }
}
