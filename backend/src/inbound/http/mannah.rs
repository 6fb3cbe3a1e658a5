//! Mannah API handlers.
//!
//! ```text
//! GET  /mannah/{userId}
//! POST /mannah/{userId} {"description":"thanks","fromUser":1,"toUser":2}
//! ```
//!
//! The path id names the recipient when listing. When sending, it only
//! stands in for a `toUser` the body omits.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Mannah, MannahDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for sending a mannah.
///
/// `from_user`/`to_user` are accepted as aliases of the camelCase fields.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MannahRequest {
    #[schema(example = "thanks")]
    pub description: String,
    #[serde(alias = "from_user")]
    #[schema(example = 1)]
    pub from_user: i32,
    /// Defaults to the recipient in the path.
    #[serde(default, alias = "to_user", skip_serializing_if = "Option::is_none")]
    #[schema(example = 2)]
    pub to_user: Option<i32>,
}

/// List every mannah addressed to a user, in id order.
#[utoipa::path(
    get,
    path = "/mannah/{userId}",
    params(("userId" = i32, Path, description = "Recipient identifier")),
    responses(
        (status = 200, description = "Mannah received by the user", body = [Mannah]),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["mannah"],
    operation_id = "listMannah"
)]
#[get("/mannah/{userId}")]
pub async fn list_mannah(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<Mannah>>> {
    let recipient = UserId::new(path.into_inner());
    let received = state.mannah.list_for_recipient(recipient).await?;
    Ok(web::Json(received))
}

/// Send a mannah; the body's `toUser` names the recipient, falling back to
/// the path id when absent.
#[utoipa::path(
    post,
    path = "/mannah/{userId}",
    params(("userId" = i32, Path, description = "Recipient identifier")),
    request_body = MannahRequest,
    responses(
        (status = 201, description = "Created mannah", body = Mannah),
        (status = 400, description = "Malformed body", body = Error),
        (status = 409, description = "Sender or recipient does not exist", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["mannah"],
    operation_id = "sendMannah"
)]
#[post("/mannah/{userId}")]
pub async fn send_mannah(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<MannahRequest>,
) -> ApiResult<HttpResponse> {
    let MannahRequest {
        description,
        from_user,
        to_user,
    } = payload.into_inner();
    let to_user = to_user.map_or_else(|| UserId::new(path.into_inner()), UserId::new);

    let created = state
        .mannah_command
        .send_mannah(MannahDraft {
            description,
            from_user: UserId::new(from_user),
            to_user,
        })
        .await?;
    Ok(HttpResponse::Created().json(created))
}
