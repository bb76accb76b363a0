use super::api;
use super::global;

use axum::Router;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::v0::status::get_status,
        api::v0::question::list_questions,
        api::v0::assessment::submit,
        api::v0::assessment::get_assessment,
        api::v0::assessment::get_report,
        global::health,
    ),
    tags(
        (name = "v0/assessment", description = "Submitting and reading assessments"),
        (name = "v0/question", description = "The questionnaire"),
        (name = "util", description = "Health and status"),
    )
)]
pub(crate) struct ApiDoc;

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        // Rapidoc reads the document served by the swagger ui
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
}
