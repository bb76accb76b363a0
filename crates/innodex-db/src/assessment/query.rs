use innodex_entity::assessment::{Entity as AssessmentEntity, Model as Assessment};
use innodex_entity::user::{Entity as UserEntity, Model as User};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    /// Loads an assessment together with the user who submitted it.
    pub async fn load_with_user<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<(Assessment, User)>, DbErr> {
        let Some((assessment, user)) = AssessmentEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %id, "failed to load assessment"))?
        else {
            return Ok(None);
        };
        let user = user.ok_or_else(|| {
            tracing::error!(%id, user_id = %assessment.user_id, "assessment without user");
            DbErr::RecordNotFound(format!("user {} not found", assessment.user_id))
        })?;
        Ok(Some((assessment, user)))
    }
}
