// Biblioteca do middleware Teams
// Expõe módulos e o router para uso em testes e no binário

pub mod auth;
pub mod config;
pub mod handlers;
pub mod session;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use teams_graph::GraphClient;
use tower_http::trace::TraceLayer;

use auth::{OAuth2Client, OAuth2Config};
use config::Settings;
use session::SessionStore;
use utils::{AppError, AppResult};

// AppState é definido aqui para ser compartilhado
pub struct AppState {
    pub settings: Settings,
    pub oauth: OAuth2Client,
    pub graph: GraphClient,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    /// Monta os clientes a partir da configuração já validada
    pub fn new(settings: Settings, sessions: Arc<dyn SessionStore>) -> AppResult<Self> {
        let oauth = OAuth2Client::new(OAuth2Config::from_settings(&settings))?;

        let graph = GraphClient::new(settings.graph.base_url.clone())
            .map_err(|e| AppError::Config(format!("Failed to create Graph client: {}", e)))?;

        Ok(Self {
            settings,
            oauth,
            graph,
            sessions,
        })
    }
}

/// Rotas da aplicação
///
/// `/health` fica fora da camada de sessão e não toca no store.
pub fn router(state: Arc<AppState>) -> Router {
    let session_routes = Router::new()
        .route("/", get(auth::login_page))
        .route("/auth/callback", get(auth::handle_oauth_callback))
        .route("/select-team/:team_id", get(handlers::select_team))
        .route("/send-message/:team_id/:channel_id", get(handlers::send_message))
        .route("/send-message", get(handlers::send_message_legacy))
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            session::session_layer,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(session_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
