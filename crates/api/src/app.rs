use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use serde::Deserialize;
use tower::ServiceBuilder;

use storekeep_auth::{Action, Module, PermissionMatrix, StoreContext, TokenVerifier};
use storekeep_infra::{
    InMemoryMembershipRegistry, InMemoryPrincipalDirectory, InMemoryStoreDirectory,
};

use crate::context::PrincipalContext;
use crate::error::json_error;

/// Shared state for the access-control pipeline: directories, token verifier,
/// and the immutable permission matrix built at startup.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn TokenVerifier>,
    pub principals: Arc<InMemoryPrincipalDirectory>,
    pub stores: Arc<InMemoryStoreDirectory>,
    pub memberships: Arc<InMemoryMembershipRegistry>,
    pub matrix: Arc<PermissionMatrix>,
}

impl AppState {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            verifier,
            principals: Arc::new(InMemoryPrincipalDirectory::new()),
            stores: Arc::new(InMemoryStoreDirectory::new()),
            memberships: Arc::new(InMemoryMembershipRegistry::new()),
            matrix: Arc::new(PermissionMatrix::standard()),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    // Protected routes: authentication gate first, then store resolution.
    let protected = Router::new()
        .route("/whoami", get(whoami))
        .nest("/inventory", inventory_router())
        .nest("/reports", reports_router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    crate::middleware::auth_gate,
                ))
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    crate::middleware::store_resolution,
                )),
        )
        .with_state(state);

    Router::new().route("/health", get(health)).merge(protected)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Tolerates passthrough: reports `store_id: null` when no store is bound.
async fn whoami(
    Extension(principal): Extension<PrincipalContext>,
    store: Option<Extension<StoreContext>>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "principal_id": principal.principal_id().to_string(),
        "role": principal.role().as_str(),
        "store_id": store.map(|Extension(ctx)| ctx.store_id_str().to_string()),
    }))
}

fn inventory_router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/:id", delete(delete_item))
}

fn reports_router() -> Router<AppState> {
    Router::new().route("/export", get(export_report))
}

/// Module routes read/write store data, so passthrough is not enough here.
fn bound_store(store: Option<Extension<StoreContext>>) -> Result<StoreContext, axum::response::Response> {
    match store {
        Some(Extension(ctx)) => Ok(ctx),
        None => Err(json_error(
            StatusCode::BAD_REQUEST,
            "store_required",
            "this endpoint requires a store; supply X-Store-Id or select a store first",
        )),
    }
}

async fn list_items(
    State(state): State<AppState>,
    Extension(principal): Extension<PrincipalContext>,
    store: Option<Extension<StoreContext>>,
) -> axum::response::Response {
    let ctx = match bound_store(store) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };

    if let Err(e) = crate::authz::require(&state.matrix, principal.role(), Module::Inventory, Action::View) {
        return json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string());
    }

    // Inventory read models live outside this slice; the envelope is what the
    // access-control layer guarantees.
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "store_id": ctx.store_id_str(),
            "items": [],
        })),
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
struct CreateItemRequest {
    name: String,
}

async fn create_item(
    State(state): State<AppState>,
    Extension(principal): Extension<PrincipalContext>,
    store: Option<Extension<StoreContext>>,
    Json(body): Json<CreateItemRequest>,
) -> axum::response::Response {
    let ctx = match bound_store(store) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };

    if let Err(e) = crate::authz::require(&state.matrix, principal.role(), Module::Inventory, Action::Create) {
        return json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string());
    }

    (
        StatusCode::ACCEPTED,
        Json(serde_json::json!({
            "store_id": ctx.store_id_str(),
            "name": body.name,
            "status": "accepted",
        })),
    )
        .into_response()
}

async fn delete_item(
    State(state): State<AppState>,
    Extension(principal): Extension<PrincipalContext>,
    store: Option<Extension<StoreContext>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(response) = bound_store(store) {
        return response;
    }

    if let Err(e) = crate::authz::require(&state.matrix, principal.role(), Module::Inventory, Action::Delete) {
        return json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string());
    }

    tracing::debug!(item = %id, "delete accepted");
    StatusCode::NO_CONTENT.into_response()
}

async fn export_report(
    State(state): State<AppState>,
    Extension(principal): Extension<PrincipalContext>,
    store: Option<Extension<StoreContext>>,
) -> axum::response::Response {
    let ctx = match bound_store(store) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };

    if let Err(e) = crate::authz::require(&state.matrix, principal.role(), Module::Reports, Action::Export) {
        return json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string());
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "store_id": ctx.store_id_str(),
            "status": "scheduled",
        })),
    )
        .into_response()
}
