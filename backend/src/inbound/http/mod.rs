//! HTTP inbound adapter exposing REST endpoints.

use actix_web::{HttpRequest, HttpResponse, get, web};
use utoipa::OpenApi;

use crate::doc::ApiDoc;
use crate::domain::Error;

pub mod error;
pub mod health;
pub mod mannah;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod testdata;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register every REST endpoint and the extractor configs on a scope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use mannah::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::path_config())
        .service(users::list_users)
        .service(users::get_user)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(mannah::list_mannah)
        .service(mannah::send_mannah)
        .service(testdata::test_data)
        .service(openapi_document);
}

/// Serve the OpenAPI document as JSON.
#[get("/api-docs/openapi.json")]
pub async fn openapi_document() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Fallback for unmatched paths and methods.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}
