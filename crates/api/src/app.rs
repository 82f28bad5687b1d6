use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use domain::services::{InviteService, InviteStore, WishService, WishStore};
use persistence::repositories::{InviteRepository, WishRepository};
use shared::session::SessionSigner;
use sqlx::MySqlPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;
use crate::middleware::trace_id;
use crate::routes::{auth, guestbook, invites};
use crate::services::{session_signer, AdminCredentials, CookieHelper};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub wishes: WishService,
    pub invites: InviteService,
    pub sessions: SessionSigner,
    pub credentials: AdminCredentials,
    pub cookies: CookieHelper,
}

impl AppState {
    pub fn new(
        config: Config,
        wish_store: Arc<dyn WishStore>,
        invite_store: Arc<dyn InviteStore>,
    ) -> Self {
        Self {
            wishes: WishService::new(wish_store),
            invites: InviteService::new(invite_store),
            sessions: session_signer(&config.admin),
            credentials: AdminCredentials::new(&config.admin),
            cookies: CookieHelper::new(&config.cookies),
            config: Arc::new(config),
        }
    }

    /// State backed by the MySQL repositories.
    pub fn with_pool(config: Config, pool: MySqlPool) -> Self {
        Self::new(
            config,
            Arc::new(WishRepository::new(pool.clone())),
            Arc::new(InviteRepository::new(pool)),
        )
    }
}

pub fn create_app(state: AppState) -> Router {
    let config = state.config.clone();

    let public_routes = Router::new()
        .route("/", get(guestbook::view).post(guestbook::submit))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout));

    // Each handler takes an AdminSession, which redirects to /login when absent.
    let admin_routes = Router::new()
        .route("/admin/invites", get(invites::list).post(invites::create))
        .route("/admin/invites/export.csv", get(invites::export_csv))
        .route("/admin/invites/:id/delete", get(invites::delete))
        .route("/admin/invites/:id/edit", post(invites::edit));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .nest_service("/static", ServeDir::new(&config.site.static_dir))
        // Global middleware (order matters: bottom layers run first)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .with_state(state)
}
