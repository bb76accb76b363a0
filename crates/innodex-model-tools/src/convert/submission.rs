use crate::convert::FromModel;
use innodex_db::user::NewUser;
use innodex_model::submission::UserData;

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

impl FromModel<UserData> for NewUser {
    /// Trims every field; blank optional fields are stored as absent.
    fn from_model(data: UserData) -> Self {
        Self {
            name: data.name.trim().to_owned(),
            email: data.email.trim().to_owned(),
            company: non_blank(data.company),
            industry: non_blank(data.industry),
            company_size: non_blank(data.company_size),
        }
    }
}
