use teams_graph::GraphError;
use thiserror::Error;

/// Erros da aplicação
///
/// Nenhuma variante chega ao usuário final: os handlers registram a causa
/// e respondem com uma mensagem estática (ver `handlers`).
#[derive(Debug, Error)]
pub enum AppError {
    /// Falha na troca do authorization code (code inválido/expirado, redirect divergente, resposta malformada)
    #[error("OAuth2 error: {0}")]
    OAuth(String),

    /// Token endpoint respondeu sem um access token utilizável
    #[error("OAuth2 error: token endpoint returned an empty access token")]
    EmptyToken,

    /// Falha na Graph API (status não-2xx ou transporte)
    #[error("Graph API error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),
}

impl AppError {
    /// Status HTTP devolvido pelo serviço remoto, quando houve resposta
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::Graph(e) => e.status(),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
