use crate::assessment::Assessment;
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Profile data sent along with a submission.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    #[schema(example = "1-10")]
    pub company_size: Option<String>,
}

/// Body of `POST /api/v0/assessments`.
///
/// `responses` maps the question id (an integer encoded as string, since it is a JSON object key) to the
/// selected value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "userData": {"name": "Ada Lovelace", "email": "ada@example.com", "company": "Engines Ltd", "industry": "healthcare", "companySize": "1-10"},
    "responses": {"1": 4, "2": 5, "3": 5, "4": 4}
}))]
pub struct SubmissionRequest {
    #[serde(default)]
    pub user_data: UserData,
    #[serde(default)]
    pub responses: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmissionResponse {
    pub user: User,
    pub assessment: Assessment,
}
