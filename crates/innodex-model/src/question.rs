use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "How effectively does your organization identify and articulate key business challenges?")]
    pub text: String,
    #[schema(example = "Problem Identification")]
    pub category: String,
    #[schema(example = 5)]
    pub max_score: u32,
}
