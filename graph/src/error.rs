//! Tipos de erro para o crate teams-graph

use thiserror::Error;

/// Erros do cliente Microsoft Graph
#[derive(Debug, Error)]
pub enum GraphError {
    /// Erro de transporte (conexão, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Resposta não-2xx da Graph API
    #[error("Graph API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl GraphError {
    /// Status HTTP retornado pela Graph, quando houve resposta
    pub fn status(&self) -> Option<u16> {
        match self {
            GraphError::ApiError { status, .. } => Some(*status),
            GraphError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, GraphError>;
