use innodex_entity::answer::Entity as AnswerEntity;
use innodex_entity::question::{ActiveModel as ActiveQuestion, Entity as QuestionEntity};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use std::error::Error;

use crate::util::FlattenTransactionResultExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub category: String,
    pub max_score: i32,
}

pub struct Mutation;

impl Mutation {
    pub async fn insert_many<C: ConnectionTrait>(conn: &C, questions: Vec<NewQuestion>) -> Result<usize, DbErr> {
        if questions.is_empty() {
            return Ok(0);
        }
        let count = questions.len();
        let data: Vec<_> = questions
            .into_iter()
            .map(|question| ActiveQuestion {
                id: NotSet,
                text: Set(question.text),
                category: Set(question.category),
                max_score: Set(question.max_score),
            })
            .collect();

        QuestionEntity::insert_many(data)
            .exec(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to insert questions"))?;
        Ok(count)
    }

    /// Replaces the whole question set.
    ///
    /// Fails with [`DbErr::Custom`] once answers exist, since they reference the current questions.
    pub async fn replace_all<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        questions: Vec<NewQuestion>,
    ) -> Result<usize, DbErr> {
        conn.transaction(|conn| {
            Box::pin(async move {
                let answers = AnswerEntity::find().count(conn).await?;
                if answers > 0 {
                    tracing::error!(answers, "refusing to replace questions that have been answered");
                    return Err(DbErr::Custom(format!(
                        "{answers} answers reference the current questions"
                    )));
                }
                QuestionEntity::delete_many().exec(conn).await?;
                Self::insert_many(conn, questions).await
            })
        })
        .await
        .flatten_res()
    }
}
