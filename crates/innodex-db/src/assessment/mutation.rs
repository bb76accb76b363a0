use crate::answer;
use crate::answer::NewAnswer;
use crate::user;
use crate::user::NewUser;
use crate::util::FlattenTransactionResultExt;
use innodex_entity::assessment::{ActiveModel as ActiveAssessment, MaturityLevel, Model as Assessment};
use innodex_entity::user::Model as User;
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::Json;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, TransactionTrait};
use std::error::Error;
use uuid::Uuid;

/// Computed scores of a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssessment {
    pub total_score: i64,
    pub average_score: f64,
    pub category: MaturityLevel,
    pub category_scores: Json,
}

pub struct Mutation;

impl Mutation {
    pub async fn create_assessment<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        assessment: NewAssessment,
    ) -> Result<Assessment, DbErr> {
        let assessment = ActiveAssessment {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            total_score: Set(assessment.total_score),
            average_score: Set(assessment.average_score),
            category: Set(assessment.category),
            category_scores: Set(assessment.category_scores),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        assessment.insert(conn).await.inspect_err(
            |error| tracing::error!(error = error as &dyn Error, %user_id, "failed to create assessment"),
        )
    }

    /// Persists a whole submission atomically: the user is looked up by email (or created), then the
    /// assessment and one answer per response are inserted. Nothing is written if any step fails.
    pub async fn submit<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        user: NewUser,
        assessment: NewAssessment,
        answers: Vec<NewAnswer>,
    ) -> Result<(User, Assessment), DbErr> {
        conn.transaction(|conn| {
            Box::pin(async move {
                let user = user::Mutation::find_or_create(conn, user).await?;
                let assessment = Self::create_assessment(conn, user.id, assessment).await?;
                answer::Mutation::insert_many(conn, assessment.id, answers).await?;
                tracing::debug!(user_id = %user.id, assessment_id = %assessment.id, "stored submission");
                Ok((user, assessment))
            })
        })
        .await
        .flatten_res()
    }
}
