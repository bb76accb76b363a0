use crate::routes::api::v0::assessment::error::Error;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use innodex_db::question;
use innodex_model::question::Question;
use innodex_model_tools::convert::TryIntoModel;
use sea_orm::DatabaseConnection;
use tracing::instrument;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(list_questions)).with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/questions",
    responses(
        (status = OK, body = [Question], description = "All questions ordered by id"),
    ),
    tag = "v0/question"
)]
#[instrument(skip_all)]
pub(crate) async fn list_questions(Extension(conn): Extension<DatabaseConnection>) -> Result<impl IntoResponse, Error> {
    let questions = question::Query::all(&conn)
        .await?
        .into_iter()
        .map(TryIntoModel::try_into_model)
        .collect::<Result<Vec<Question>, innodex_model_tools::error::Error>>()?;
    Ok(Json(questions))
}
