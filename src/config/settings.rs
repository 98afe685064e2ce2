use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::utils::{AppError, AppResult};

/// Variáveis de ambiente "planas" aceitas além do prefixo `TEAMS_MIDDLEWARE__`
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("CLIENT_ID", "oauth.client_id"),
    ("CLIENT_SECRET", "oauth.client_secret"),
    ("TENANT_ID", "oauth.tenant_id"),
    ("REDIRECT_URI", "oauth.redirect_uri"),
    ("LEGACY_ACCESS_TOKEN", "legacy.access_token"),
    ("LEGACY_TEAM_ID", "legacy.team_id"),
    ("LEGACY_CHANNEL_ID", "legacy.channel_id"),
];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub oauth: OAuthSettings,
    pub graph: GraphSettings,
    #[serde(default)]
    pub legacy: LegacySettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OAuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub redirect_uri: String,
    /// Host do identity provider (`https://login.microsoftonline.com`)
    pub authority: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GraphSettings {
    pub base_url: String,
    /// Texto fixo enviado pelas rotas de envio
    pub message_text: String,
}

/// Rota manual `/send-message`: token, time e canal vêm da configuração
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LegacySettings {
    pub access_token: Option<String>,
    pub team_id: Option<String>,
    pub channel_id: Option<String>,
}

/// Destino completo da rota legada
#[derive(Debug, PartialEq)]
pub struct LegacyTarget<'a> {
    pub access_token: &'a str,
    pub team_id: &'a str,
    pub channel_id: &'a str,
}

impl LegacySettings {
    /// Só devolve destino se os três valores estiverem preenchidos
    pub fn target(&self) -> Option<LegacyTarget<'_>> {
        fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().map(str::trim).filter(|v| !v.is_empty())
        }

        Some(LegacyTarget {
            access_token: non_empty(&self.access_token)?,
            team_id: non_empty(&self.team_id)?,
            channel_id: non_empty(&self.channel_id)?,
        })
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Self::defaults()?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("TEAMS_MIDDLEWARE").separator("__"));

        for (var, key) in ENV_OVERRIDES {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_override(*key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("oauth.client_id", "")?
            .set_default("oauth.client_secret", "")?
            .set_default("oauth.tenant_id", "")?
            .set_default("oauth.redirect_uri", "")?
            .set_default("oauth.authority", "https://login.microsoftonline.com")?
            .set_default("graph.base_url", teams_graph::DEFAULT_BASE_URL)?
            .set_default("graph.message_text", "Mensagem enviada via Teams Channel Middleware 🎯")
    }

    /// Falha cedo se faltar alguma credencial do app registrado
    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("CLIENT_ID", &self.oauth.client_id),
            ("CLIENT_SECRET", &self.oauth.client_secret),
            ("TENANT_ID", &self.oauth.tenant_id),
            ("REDIRECT_URI", &self.oauth.redirect_uri),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "{} não configurado(s)",
                missing.join(", ")
            )));
        }

        if self.graph.message_text.trim().is_empty() {
            return Err(AppError::Config("graph.message_text vazio".to_string()));
        }

        Ok(())
    }
}
