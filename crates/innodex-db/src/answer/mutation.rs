use innodex_entity::answer::{ActiveModel as ActiveAnswer, Entity as AnswerEntity};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAnswer {
    pub question_id: i32,
    pub value: i32,
}

pub struct Mutation;

impl Mutation {
    pub async fn insert_many<C: ConnectionTrait>(
        conn: &C,
        assessment_id: Uuid,
        answers: Vec<NewAnswer>,
    ) -> Result<(), DbErr> {
        if answers.is_empty() {
            return Ok(());
        }
        let data: Vec<_> = answers
            .into_iter()
            .map(|answer| ActiveAnswer {
                id: NotSet,
                value: Set(answer.value),
                question_id: Set(answer.question_id),
                assessment_id: Set(assessment_id),
            })
            .collect();

        AnswerEntity::insert_many(data).exec(conn).await.inspect_err(
            |error| tracing::error!(error = error as &dyn Error, %assessment_id, "failed to insert answers"),
        )?;
        Ok(())
    }
}
