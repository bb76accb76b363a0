use innodex_entity::answer;
use innodex_entity::answer::{Entity as AnswerEntity, Model as Answer};
use innodex_entity::question::{Entity as QuestionEntity, Model as Question};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct Query;

impl Query {
    /// Loads the answers of an assessment, each joined with the question it answers.
    pub async fn load_answers<C: ConnectionTrait>(
        conn: &C,
        assessment_id: Uuid,
    ) -> Result<Vec<(Answer, Question)>, DbErr> {
        let rows = AnswerEntity::find()
            .filter(answer::Column::AssessmentId.eq(assessment_id))
            .order_by_asc(answer::Column::QuestionId)
            .find_also_related(QuestionEntity)
            .all(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn std::error::Error, %assessment_id, "failed to load answers"),
            )?;

        rows.into_iter()
            .map(|(answer, question)| {
                let question = question.ok_or_else(|| {
                    tracing::error!(%assessment_id, question_id = answer.question_id, "answered question is missing");
                    DbErr::RecordNotFound(format!("question {} not found", answer.question_id))
                })?;
                Ok((answer, question))
            })
            .collect()
    }
}
