use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Extension,
};
use std::sync::Arc;

use super::{SEND_FAILED, SEND_OK};
use crate::session::Session;
use crate::utils::logging::*;
use crate::utils::AppError;
use crate::AppState;

/// GET /send-message/:team_id/:channel_id
///
/// Publica a mensagem fixa no canal usando o token da sessão.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path((team_id, channel_id)): Path<(String, String)>,
) -> Result<Response, (StatusCode, &'static str)> {
    log_request_received("/send-message/:team_id/:channel_id", "GET");

    let access_token = match session.access_token().await {
        Ok(Some(token)) => token,
        Ok(None) => {
            log_missing_session_token("/send-message/:team_id/:channel_id");
            return Ok(Redirect::to("/").into_response());
        }
        Err(e) => {
            log_error(&format!("❌ [Session] Falha ao ler token: {}", e));
            return Err((StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED));
        }
    };

    post_message(&state, &access_token, &team_id, &channel_id).await?;

    Ok(SEND_OK.into_response())
}

/// GET /send-message
///
/// Envio manual: token, time e canal vêm da configuração, não da sessão.
pub async fn send_message_legacy(
    State(state): State<Arc<AppState>>,
) -> Result<&'static str, (StatusCode, &'static str)> {
    log_request_received("/send-message", "GET");

    let target = state.settings.legacy.target().ok_or_else(|| {
        log_error(
            "❌ Erro ao enviar mensagem: LEGACY_ACCESS_TOKEN, LEGACY_TEAM_ID e LEGACY_CHANNEL_ID precisam estar configurados",
        );
        (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED)
    })?;

    post_message(&state, target.access_token, target.team_id, target.channel_id).await?;

    Ok(SEND_OK)
}

async fn post_message(
    state: &AppState,
    access_token: &str,
    team_id: &str,
    channel_id: &str,
) -> Result<(), (StatusCode, &'static str)> {
    let message = state
        .graph
        .send_channel_message(access_token, team_id, channel_id, &state.settings.graph.message_text)
        .await
        .map_err(|e| {
            let e = AppError::from(e);
            log_graph_api_error("send_channel_message", e.upstream_status(), &e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED)
        })?;

    log_info(&format!(
        "✅ Mensagem {} enviada para {}/{}",
        message.id, team_id, channel_id
    ));

    Ok(())
}
