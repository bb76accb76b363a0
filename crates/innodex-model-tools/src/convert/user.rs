use crate::convert::FromDbModel;
use innodex_entity::user::Model as UserModel;
use innodex_model::user::User;

impl FromDbModel<UserModel> for User {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            company: model.company,
            industry: model.industry,
            company_size: model.company_size,
            created_at: model.created_at.and_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::IntoModel;
    use uuid::Uuid;

    #[test]
    fn test_user_from_db_model() {
        let created_at = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let model = UserModel {
            id: Uuid::new_v4(),
            name: "Robin".to_owned(),
            email: "robin@example.com".to_owned(),
            company: None,
            industry: Some("Retail".to_owned()),
            company_size: None,
            created_at: created_at.naive_utc(),
        };
        let user: User = model.clone().into_model();
        assert_eq!(user.id, model.id);
        assert_eq!(user.industry.as_deref(), Some("Retail"));
        assert_eq!(user.created_at, created_at);
    }
}
