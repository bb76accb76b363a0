use axum::extract::Path;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::response::IntoResponse;
use axum::routing::{Router, get, post};
use axum::{Extension, Json};
use error::Error;
use http::StatusCode;
use innodex_core::report::build_report;
use innodex_core::score::aggregate;
use innodex_db::answer::NewAnswer;
use innodex_db::assessment::NewAssessment;
use innodex_db::{answer, assessment, question};
use innodex_model::assessment::AssessmentDetails;
use innodex_model::question::Question;
use innodex_model::report::Report;
use innodex_model::submission::{SubmissionRequest, SubmissionResponse};
use innodex_model_tools::convert::{IntoModel, TryIntoDbModel, TryIntoModel};
use sea_orm::DatabaseConnection;
use tracing::instrument;
use uuid::Uuid;

pub(crate) mod error;
pub(crate) mod intake;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(submit))
        .route("/{id}", get(get_assessment))
        .route("/{id}/report", get(get_report))
        .with_state(())
}

fn assessment_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, Error> {
    path.map(|Path(id)| id)
        .map_err(|rejection| Error::Validation(rejection.body_text()))
}

async fn load_details(conn: &DatabaseConnection, id: Uuid) -> Result<AssessmentDetails, Error> {
    let (assessment, user) = assessment::Query::load_with_user(conn, id)
        .await?
        .ok_or(Error::NotFound)?;
    let answers = answer::Query::load_answers(conn, id).await?;
    let details: AssessmentDetails = (assessment, user, answers).try_into_model()?;
    Ok(details)
}

#[utoipa::path(
    post,
    path = "/api/v0/assessments",
    request_body = SubmissionRequest,
    responses(
        (status = CREATED, body = SubmissionResponse, description = "The user (created or found by email) and the scored assessment"),
        (status = BAD_REQUEST, body = error::ErrorType, description = "The submission is invalid or references unknown questions"),
    ),
    tag = "v0/assessment"
)]
#[instrument(skip_all)]
pub(crate) async fn submit(
    Extension(conn): Extension<DatabaseConnection>,
    payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload.map_err(|rejection| Error::Validation(rejection.body_text()))?;
    let submission = intake::validate(request)?;

    let questions = question::Query::find_by_ids(&conn, &submission.question_ids())
        .await?
        .into_iter()
        .map(TryIntoModel::try_into_model)
        .collect::<Result<Vec<Question>, innodex_model_tools::error::Error>>()?;
    intake::check_questions(&submission.responses, &questions)?;

    let result = aggregate(&submission.responses, &questions)?;
    tracing::debug!(total_score = result.total_score, category = %result.category, "scored submission");

    let new_assessment: NewAssessment = result.try_into_db_model()?;
    let answers = submission
        .responses
        .into_iter()
        .map(TryIntoDbModel::try_into_db_model)
        .collect::<Result<Vec<NewAnswer>, innodex_model_tools::error::Error>>()?;
    let (user, assessment) = assessment::Mutation::submit(&conn, submission.user, new_assessment, answers).await?;
    tracing::info!(user_id = %user.id, assessment_id = %assessment.id, "stored assessment");

    let response = SubmissionResponse {
        user: user.into_model(),
        assessment: assessment.try_into_model()?,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v0/assessments/{id}",
    params(("id" = Uuid, Path, description = "Assessment id")),
    responses(
        (status = OK, body = AssessmentDetails, description = "The assessment with its user and answers"),
        (status = NOT_FOUND, body = error::ErrorType, description = "There is no such assessment"),
    ),
    tag = "v0/assessment"
)]
#[instrument(skip_all)]
pub(crate) async fn get_assessment(
    Extension(conn): Extension<DatabaseConnection>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = assessment_id(path)?;
    Ok(Json(load_details(&conn, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/v0/assessments/{id}/report",
    params(("id" = Uuid, Path, description = "Assessment id")),
    responses(
        (status = OK, body = Report, description = "Overall score, category percentages and recommendations"),
        (status = NOT_FOUND, body = error::ErrorType, description = "There is no such assessment"),
    ),
    tag = "v0/assessment"
)]
#[instrument(skip_all)]
pub(crate) async fn get_report(
    Extension(conn): Extension<DatabaseConnection>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let id = assessment_id(path)?;
    let details = load_details(&conn, id).await?;
    let report: Report = build_report(&details)?;
    Ok(Json(report))
}
