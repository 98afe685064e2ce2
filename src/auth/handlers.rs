//! OAuth2 HTTP Handlers
//!
//! Página de login e callback do authorization code flow

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Extension,
};
use serde::Deserialize;
use std::sync::Arc;
use teams_graph::Team;

use crate::handlers::{render_page, AUTH_FAILED};
use crate::session::Session;
use crate::utils::logging::*;
use crate::utils::{escape_html, truncate_safe, AppError};
use crate::AppState;

/// Parâmetros do callback OAuth2
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackParams {
    /// Authorization code retornado pelo identity provider
    code: Option<String>,
    /// Erro retornado pelo identity provider (consentimento negado etc.)
    error: Option<String>,
    error_description: Option<String>,
}

/// GET /
///
/// Página com o link de autorização
pub async fn login_page(State(state): State<Arc<AppState>>) -> Html<String> {
    log_request_received("/", "GET");

    let auth_url = state.oauth.authorization_url();

    render_page(
        "Conectar ao Microsoft Teams",
        &format!(
            r#"<h2>Conectar ao Microsoft Teams</h2>
    <a href="{}">Clique aqui para conectar</a>"#,
            escape_html(&auth_url)
        ),
    )
}

/// GET /auth/callback?code=XXX
///
/// Troca o code por access token, grava o token na sessão e lista os times do usuário
///
/// # Retorno
/// - `Ok(Html)`: lista de times com links para `/select-team/{id}`
/// - `Err(500)`: callback sem code, falha na troca do code ou na Graph
pub async fn handle_oauth_callback(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(params): Query<OAuthCallbackParams>,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    log_request_received("/auth/callback", "GET");

    if let Some(error) = params.error {
        log_oauth_error(
            "authorize",
            &format!(
                "{} - {}",
                error,
                params.error_description.as_deref().unwrap_or("sem descrição")
            ),
        );
        return Err((StatusCode::INTERNAL_SERVER_ERROR, AUTH_FAILED));
    }

    let code = params.code.filter(|c| !c.is_empty()).ok_or_else(|| {
        log_error("❌ [OAuth2] Code não recebido no callback");
        (StatusCode::INTERNAL_SERVER_ERROR, AUTH_FAILED)
    })?;

    log_info(&format!("🔑 [OAuth2] Code recebido: {}...", truncate_safe(&code, 10)));

    let access_token = state
        .oauth
        .exchange_code_for_token(&code)
        .await
        .map_err(|e| {
            log_oauth_error("token exchange", &e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, AUTH_FAILED)
        })?;

    session.set_access_token(&access_token).await.map_err(|e| {
        log_error(&format!("❌ [OAuth2] Erro ao salvar token na sessão: {}", e));
        (StatusCode::INTERNAL_SERVER_ERROR, AUTH_FAILED)
    })?;

    log_info(&format!("💾 [OAuth2] Token salvo na sessão {}", session.id()));

    let teams = state
        .graph
        .list_joined_teams(&access_token)
        .await
        .map_err(|e| {
            let e = AppError::from(e);
            log_graph_api_error("list_joined_teams", e.upstream_status(), &e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, AUTH_FAILED)
        })?;

    log_info(&format!("✅ [OAuth2] {} times encontrados", teams.len()));

    Ok(render_teams_page(&teams))
}

/// Lista de times, cada um apontando para a seleção de canal
fn render_teams_page(teams: &[Team]) -> Html<String> {
    let items = if teams.is_empty() {
        "<li>Nenhum time encontrado.</li>".to_string()
    } else {
        teams
            .iter()
            .map(|t| {
                format!(
                    r#"<li><a href="/select-team/{}">{}</a></li>"#,
                    urlencoding::encode(&t.id),
                    escape_html(&t.display_name)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    render_page(
        "Autenticado com sucesso",
        &format!(
            r#"<h3>Autenticado com sucesso!</h3>
    <p>Escolha um time:</p>
    <ul>
{}
    </ul>"#,
            items
        ),
    )
}
