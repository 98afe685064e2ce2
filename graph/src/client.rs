//! Cliente HTTP para a Microsoft Graph API

use crate::error::{GraphError, Result};
use crate::types::{Channel, ChatMessage, Collection, ItemBody, NewChatMessage, Team};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// URL base padrão da Graph API
pub const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// Cliente para a Graph API
///
/// Não guarda token: cada chamada recebe o bearer token da sessão que a originou.
#[derive(Clone)]
pub struct GraphClient {
    http_client: HttpClient,
    base_url: String,
}

impl GraphClient {
    /// Cria um novo cliente Graph
    ///
    /// Sem timeouts próprios: vale o comportamento padrão do `reqwest`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(GraphError::ConfigError("Graph base URL is empty".to_string()));
        }

        let http_client = HttpClient::builder()
            .build()
            .map_err(|e| GraphError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client, base_url })
    }

    /// Lista os times dos quais o usuário autenticado participa
    ///
    /// `GET /me/joinedTeams`
    pub async fn list_joined_teams(&self, access_token: &str) -> Result<Vec<Team>> {
        let teams: Collection<Team> = self.get_json("/me/joinedTeams", access_token).await?;
        tracing::debug!("Graph: {} joined teams", teams.value.len());
        Ok(teams.value)
    }

    /// Lista os canais de um time
    ///
    /// `GET /teams/{team_id}/channels`
    pub async fn list_channels(&self, access_token: &str, team_id: &str) -> Result<Vec<Channel>> {
        let endpoint = format!("/teams/{}/channels", urlencoding::encode(team_id));
        let channels: Collection<Channel> = self.get_json(&endpoint, access_token).await?;
        tracing::debug!("Graph: {} channels in team {}", channels.value.len(), team_id);
        Ok(channels.value)
    }

    /// Publica uma mensagem de texto em um canal
    ///
    /// `POST /teams/{team_id}/channels/{channel_id}/messages`
    pub async fn send_channel_message(
        &self,
        access_token: &str,
        team_id: &str,
        channel_id: &str,
        content: &str,
    ) -> Result<ChatMessage> {
        let endpoint = format!(
            "/teams/{}/channels/{}/messages",
            urlencoding::encode(team_id),
            urlencoding::encode(channel_id)
        );
        let body = serde_json::to_value(NewChatMessage {
            body: ItemBody { content },
        })?;

        let response = self.post(&endpoint, access_token, &body).await?;

        // Qualquer 2xx é sucesso; o corpo só serve para log
        let text = response.text().await?;
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }

    /// Executa uma requisição GET e parseia JSON
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, access_token: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .send()
            .await?;

        let json = self.handle_response(response).await?.json().await?;
        Ok(json)
    }

    /// Executa uma requisição POST com corpo JSON
    async fn post(&self, endpoint: &str, access_token: &str, body: &Value) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let error_body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        tracing::error!("Graph API error ({}): {}", status_code, error_body);

        // Formato Graph: {"error": {"code": "...", "message": "..."}}
        let message = serde_json::from_str::<Value>(&error_body)
            .ok()
            .and_then(|json| {
                json.get("error")
                    .and_then(|e| e.get("message").or(Some(e)))
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(error_body);

        Err(GraphError::ApiError {
            status: status_code,
            message,
        })
    }

    /// Obtém a URL base
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = GraphClient::new("https://graph.microsoft.com/v1.0/").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(matches!(GraphClient::new("/"), Err(GraphError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_list_joined_teams_sends_bearer_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/me/joinedTeams")
                    .header("Authorization", "Bearer token-123");
                then.status(200).json_body(json!({
                    "value": [{"id": "team-1", "displayName": "Engenharia"}]
                }));
            })
            .await;

        let client = GraphClient::new(server.base_url()).unwrap();
        let teams = client.list_joined_teams("token-123").await.unwrap();

        mock.assert_async().await;
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].id, "team-1");
        assert_eq!(teams[0].display_name, "Engenharia");
    }

    #[tokio::test]
    async fn test_list_channels_uses_team_path() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/teams/team-1/channels");
                then.status(200).json_body(json!({
                    "value": [
                        {"id": "chan-a", "displayName": "General"},
                        {"id": "chan-b", "displayName": "Random", "description": "off-topic"}
                    ]
                }));
            })
            .await;

        let client = GraphClient::new(server.base_url()).unwrap();
        let channels = client.list_channels("tok", "team-1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[1].description.as_deref(), Some("off-topic"));
    }

    #[tokio::test]
    async fn test_send_channel_message_posts_content() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/teams/team-1/channels/chan-a/messages")
                    .header("Authorization", "Bearer tok")
                    .json_body(json!({"body": {"content": "Olá canal"}}));
                then.status(201).json_body(json!({"id": "msg-1"}));
            })
            .await;

        let client = GraphClient::new(server.base_url()).unwrap();
        let message = client
            .send_channel_message("tok", "team-1", "chan-a", "Olá canal")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(message.id, "msg-1");
    }

    #[tokio::test]
    async fn test_send_channel_message_accepts_empty_2xx_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/teams/t/channels/c/messages");
                then.status(202);
            })
            .await;

        let client = GraphClient::new(server.base_url()).unwrap();
        let message = client.send_channel_message("tok", "t", "c", "x").await.unwrap();
        assert_eq!(message, ChatMessage::default());
    }

    #[tokio::test]
    async fn test_api_error_carries_graph_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/me/joinedTeams");
                then.status(401).json_body(json!({
                    "error": {"code": "InvalidAuthenticationToken", "message": "Access token is empty."}
                }));
            })
            .await;

        let client = GraphClient::new(server.base_url()).unwrap();
        let err = client.list_joined_teams("").await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        match err {
            GraphError::ApiError { message, .. } => assert_eq!(message, "Access token is empty."),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_api_error_with_plain_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/teams/t/channels/c/messages");
                then.status(503).body("upstream unavailable");
            })
            .await;

        let client = GraphClient::new(server.base_url()).unwrap();
        let err = client.send_channel_message("tok", "t", "c", "x").await.unwrap_err();

        match err {
            GraphError::ApiError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream unavailable");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
