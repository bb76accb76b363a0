use crate::user::Query;
use crate::util::RequireRecord;
use innodex_entity::user;
use innodex_entity::user::{ActiveModel, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, TryInsertResult};
use std::error::Error;
use uuid::Uuid;

/// Profile of a user as submitted with an assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
}

pub struct Mutation;

impl Mutation {
    /// Returns the user registered under `new_user.email`, creating it when there is none.
    ///
    /// The profile of an already registered user is never overwritten.
    pub async fn find_or_create<C: ConnectionTrait>(conn: &C, new_user: NewUser) -> Result<Model, DbErr> {
        let NewUser {
            name,
            email,
            company,
            industry,
            company_size,
        } = new_user;

        let user = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            email: Set(email.clone()),
            company: Set(company),
            industry: Set(industry),
            company_size: Set(company_size),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        let mut on_conflict = OnConflict::column(user::Column::Email);
        on_conflict.do_nothing();
        let res = Entity::insert(user)
            .on_conflict(on_conflict)
            .do_nothing()
            .exec(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to insert user"))?;

        let user = Query::find_by_email(conn, &email).await.require()?;
        match res {
            TryInsertResult::Inserted(_) => tracing::debug!(user_id = %user.id, "created user"),
            TryInsertResult::Conflicted | TryInsertResult::Empty => {
                tracing::debug!(user_id = %user.id, "found existing user");
            }
        }
        Ok(user)
    }
}
