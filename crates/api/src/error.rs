//! Mapping from access-control outcomes to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use storekeep_auth::AccessRejection;

/// Translate a rejection into its externally visible response.
///
/// `Passthrough` never reaches here: it is not a rejection and the middleware
/// simply continues without a bound store.
pub fn rejection_response(rejection: AccessRejection) -> Response {
    let (status, code) = match rejection {
        AccessRejection::Unauthenticated => (StatusCode::UNAUTHORIZED, "unauthenticated"),
        AccessRejection::AccountInactive => (StatusCode::FORBIDDEN, "account_inactive"),
        AccessRejection::StoreNotFound => (StatusCode::NOT_FOUND, "store_not_found"),
        AccessRejection::StoreInactive => (StatusCode::FORBIDDEN, "store_inactive"),
        AccessRejection::Forbidden => (StatusCode::FORBIDDEN, "forbidden"),
    };

    json_error(status, code, rejection.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
