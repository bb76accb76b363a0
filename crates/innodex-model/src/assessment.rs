use crate::question::Question;
use crate::score::{CategoryScore, MaturityLevel};
use crate::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub total_score: u64,
    pub average_score: f64,
    pub category: MaturityLevel,
    pub category_scores: BTreeMap<String, CategoryScore>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: i32,
    pub value: u32,
    pub question: Question,
}

/// An assessment together with the user who submitted it and every answer joined with its question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDetails {
    #[serde(flatten)]
    pub assessment: Assessment,
    pub user: User,
    pub answers: Vec<Answer>,
}
