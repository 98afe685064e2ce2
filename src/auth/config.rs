//! OAuth2 Configuration
//!
//! Endpoints e credenciais do app registrado no Microsoft identity platform (v2.0, por tenant)

use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// Permissões pedidas no login: perfil, chats e envio em canais
pub const SCOPES: [&str; 3] = ["User.Read", "Chat.ReadWrite", "ChannelMessage.Send"];

/// `SCOPES` em formato de parâmetro (separado por espaço)
pub const SCOPE: &str = "User.Read Chat.ReadWrite ChannelMessage.Send";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Config {
    /// Application (client) ID
    pub client_id: String,

    /// Client secret do app
    pub client_secret: String,

    /// Directory (tenant) ID
    pub tenant_id: String,

    /// Redirect URI registrada no app; precisa ser idêntica no authorize e no token
    pub redirect_uri: String,

    /// Host do identity provider
    pub authority: String,
}

impl OAuth2Config {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            client_id: settings.oauth.client_id.clone(),
            client_secret: settings.oauth.client_secret.clone(),
            tenant_id: settings.oauth.tenant_id.clone(),
            redirect_uri: settings.oauth.redirect_uri.clone(),
            authority: settings.oauth.authority.trim_end_matches('/').to_string(),
        }
    }

    pub fn authorize_endpoint(&self) -> String {
        format!("{}/{}/oauth2/v2.0/authorize", self.authority, self.tenant_id)
    }

    pub fn token_endpoint(&self) -> String {
        format!("{}/{}/oauth2/v2.0/token", self.authority, self.tenant_id)
    }
}
