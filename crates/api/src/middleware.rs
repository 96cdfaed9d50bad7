//! Request pipeline: authentication gate, then store resolution.
//!
//! The gate must run first: the resolver assumes an already-authenticated,
//! active principal (or none, for open wiring) and only decides tenancy.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use storekeep_auth::{AccessRejection, Principal, PrincipalStore, Resolution, resolve};
use storekeep_core::StoreId;

use crate::app::AppState;
use crate::context::PrincipalContext;
use crate::error::{json_error, rejection_response};

/// Header carrying the caller's explicit store hint.
pub const STORE_ID_HEADER: &str = "x-store-id";

/// Authentication gate: bearer token → verified claims → active principal.
pub async fn auth_gate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let Some(token) = extract_bearer(req.headers()) else {
        return rejection_response(AccessRejection::Unauthenticated);
    };

    let claims = match state.verifier.verify(token, Utc::now()) {
        Ok(claims) => claims,
        Err(_) => return rejection_response(AccessRejection::Unauthenticated),
    };

    let Some(principal) = state.principals.find_by_id(claims.sub) else {
        // A token for a principal we no longer know is indistinguishable from
        // no credentials at all.
        return rejection_response(AccessRejection::Unauthenticated);
    };

    if !principal.is_active {
        return rejection_response(AccessRejection::AccountInactive);
    }

    req.extensions_mut()
        .insert(PrincipalContext::new(principal.id, principal.role));
    req.extensions_mut().insert(principal);

    next.run(req).await
}

/// Store resolution: explicit `X-Store-Id` hint → last-used store → none.
///
/// On `Bound`, the pending `last_store_id` write is applied here and the
/// [`storekeep_auth::StoreContext`] is attached for downstream handlers. On
/// `Passthrough` the request continues with no store bound.
pub async fn store_resolution(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let principal = req.extensions().get::<Principal>().cloned();

    let hint = match store_hint(req.headers()) {
        Ok(hint) => hint,
        Err(response) => return response,
    };

    match resolve(principal.as_ref(), hint, &state.stores, &state.memberships) {
        Ok(Resolution::Bound { context, pending }) => {
            if let Some(update) = pending {
                state
                    .principals
                    .update_last_store(update.principal_id, update.store_id);
                tracing::debug!(
                    principal = %update.principal_id,
                    store = %update.store_id,
                    "updated last-used store"
                );
            }
            req.extensions_mut().insert(context);
            next.run(req).await
        }
        Ok(Resolution::Passthrough) => next.run(req).await,
        Err(rejection) => rejection_response(rejection),
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }

    Some(token)
}

/// Parse the optional hint header. The core treats the hint as opaque; an
/// unparseable id is a malformed request, rejected before the resolver runs.
fn store_hint(headers: &HeaderMap) -> Result<Option<StoreId>, Response> {
    let Some(raw) = headers.get(STORE_ID_HEADER) else {
        return Ok(None);
    };

    let raw = raw
        .to_str()
        .map_err(|_| json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid store id"))?;

    let id = raw
        .trim()
        .parse::<StoreId>()
        .map_err(|_| json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid store id"))?;

    Ok(Some(id))
}
