use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension,
};
use std::sync::Arc;
use teams_graph::Channel;

use super::{render_page, LIST_CHANNELS_FAILED};
use crate::session::Session;
use crate::utils::logging::*;
use crate::utils::{escape_html, AppError};
use crate::AppState;

/// GET /select-team/:team_id
///
/// Lista os canais do time escolhido. Sem token na sessão, volta para `/`.
pub async fn select_team(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(team_id): Path<String>,
) -> Result<Response, (StatusCode, &'static str)> {
    log_request_received("/select-team/:team_id", "GET");

    let access_token = match session.access_token().await {
        Ok(Some(token)) => token,
        Ok(None) => {
            log_missing_session_token("/select-team/:team_id");
            return Ok(Redirect::to("/").into_response());
        }
        Err(e) => {
            log_error(&format!("❌ [Session] Falha ao ler token: {}", e));
            return Err((StatusCode::INTERNAL_SERVER_ERROR, LIST_CHANNELS_FAILED));
        }
    };

    let channels = state
        .graph
        .list_channels(&access_token, &team_id)
        .await
        .map_err(|e| {
            let e = AppError::from(e);
            log_graph_api_error("list_channels", e.upstream_status(), &e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, LIST_CHANNELS_FAILED)
        })?;

    log_info(&format!("📋 {} canais no time {}", channels.len(), team_id));

    Ok(render_channels_page(&team_id, &channels).into_response())
}

/// Lista de canais, cada um apontando para o envio de mensagem
fn render_channels_page(team_id: &str, channels: &[Channel]) -> Html<String> {
    let team_segment = urlencoding::encode(team_id);

    let items = if channels.is_empty() {
        "<li>Nenhum canal encontrado.</li>".to_string()
    } else {
        channels
            .iter()
            .map(|c| {
                format!(
                    r#"<li><a href="/send-message/{}/{}">{}</a></li>"#,
                    team_segment,
                    urlencoding::encode(&c.id),
                    escape_html(&c.display_name)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    render_page(
        "Canais",
        &format!(
            r#"<h3>Escolha um canal</h3>
    <ul>
{}
    </ul>
    <p><a href="/">Voltar</a></p>"#,
            items
        ),
    )
}
