use std::sync::Arc;

use storekeep_api::app::{AppState, build_app};
use storekeep_api::jwt::Hs256TokenVerifier;
use storekeep_auth::{Principal, PrincipalId, Role, Store};
use storekeep_core::StoreId;

#[tokio::main]
async fn main() {
    storekeep_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let state = AppState::new(Arc::new(Hs256TokenVerifier::new(jwt_secret.as_bytes())));
    seed_demo_directory(&state);

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

/// Dev-only seed: one store with its owning admin and a manager member.
fn seed_demo_directory(state: &AppState) {
    let owner = Principal::new(PrincipalId::new(), Role::Admin);
    let manager = Principal::new(PrincipalId::new(), Role::Manager);
    let store = Store::new(StoreId::new(), owner.id);

    state.principals.upsert(owner.clone());
    state.principals.upsert(manager.clone());
    state.stores.upsert(store);
    state.memberships.grant(manager.id, store.id);

    tracing::info!(
        store = %store.id,
        owner = %owner.id,
        manager = %manager.id,
        "seeded demo directory"
    );
}
