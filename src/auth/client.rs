//! OAuth2 Client
//!
//! Authorization code flow sobre o crate `oauth2`

use oauth2::{
    basic::{BasicClient, BasicErrorResponse},
    reqwest::async_http_client,
    AuthType, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, RedirectUrl,
    RequestTokenError, Scope, TokenResponse, TokenUrl,
};

use super::config::{OAuth2Config, SCOPE, SCOPES};
use crate::utils::logging::*;
use crate::utils::{token_preview, truncate_safe, AppError, AppResult};

/// Cliente OAuth2 para o Microsoft identity platform
pub struct OAuth2Client {
    config: OAuth2Config,
    client: BasicClient,
}

impl OAuth2Client {
    /// Criar novo cliente OAuth2
    ///
    /// Falha se alguma das URLs configuradas for inválida.
    pub fn new(config: OAuth2Config) -> AppResult<Self> {
        let auth_url = AuthUrl::new(config.authorize_endpoint())
            .map_err(|e| AppError::Config(format!("URL de autorização inválida: {}", e)))?;
        let token_url = TokenUrl::new(config.token_endpoint())
            .map_err(|e| AppError::Config(format!("URL de token inválida: {}", e)))?;
        let redirect_url = RedirectUrl::new(config.redirect_uri.clone())
            .map_err(|e| AppError::Config(format!("URL de redirecionamento inválida: {}", e)))?;

        let client = BasicClient::new(
            ClientId::new(config.client_id.clone()),
            Some(ClientSecret::new(config.client_secret.clone())),
            auth_url,
            Some(token_url),
        )
        .set_auth_type(AuthType::RequestBody)
        .set_redirect_uri(redirect_url);

        Ok(Self { config, client })
    }

    /// Gerar URL de autorização (client_id, redirect_uri, scope, state)
    pub fn authorization_url(&self) -> String {
        let (url, _state) = SCOPES
            .iter()
            .fold(
                self.client.authorize_url(CsrfToken::new_random),
                |request, scope| request.add_scope(Scope::new(scope.to_string())),
            )
            .url();

        url.to_string()
    }

    /// Trocar authorization code por access token
    ///
    /// # Retorno
    /// - `Ok(String)`: access token não-vazio
    /// - `Err(AppError::OAuth)`: code rejeitado, redirect divergente, resposta malformada ou falha de rede
    /// - `Err(AppError::EmptyToken)`: resposta sem token utilizável
    pub async fn exchange_code_for_token(&self, code: &str) -> AppResult<String> {
        log_info(&format!(
            "🔐 [OAuth2] POST {} - client_id: {}, code: {}...",
            self.config.token_endpoint(),
            self.config.client_id,
            truncate_safe(code, 10)
        ));

        let token_response = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .add_extra_param("scope", SCOPE)
            .request_async(async_http_client)
            .await
            .map_err(|e| AppError::OAuth(describe_token_error(&e)))?;

        let access_token = token_response.access_token().secret().trim();

        if access_token.is_empty() {
            return Err(AppError::EmptyToken);
        }

        log_info(&format!("✅ [OAuth2] Access token obtido: {}", token_preview(access_token)));

        Ok(access_token.to_string())
    }
}

/// Extrai o máximo de diagnóstico do erro do token endpoint
fn describe_token_error<RE>(error: &RequestTokenError<RE, BasicErrorResponse>) -> String
where
    RE: std::error::Error + 'static,
{
    match error {
        RequestTokenError::ServerResponse(response) => format!(
            "{} ({})",
            response.error(),
            response
                .error_description()
                .map(String::as_str)
                .unwrap_or("sem descrição")
        ),
        RequestTokenError::Request(e) => format!("falha de rede no token endpoint: {}", e),
        RequestTokenError::Parse(e, body) => format!(
            "resposta malformada do token endpoint: {} - body: {}",
            e,
            String::from_utf8_lossy(body)
        ),
        RequestTokenError::Other(message) => message.clone(),
    }
}
