//! Cliente mínimo da Microsoft Graph API
//!
//! Cobre apenas a navegação usada pelo middleware:
//!
//! - **Times**: `/me/joinedTeams`
//! - **Canais**: `/teams/{team_id}/channels`
//! - **Mensagens**: `/teams/{team_id}/channels/{channel_id}/messages`
//!
//! Todas as chamadas são autenticadas com `Authorization: Bearer <token>`.
//! Respostas não-2xx viram [`GraphError::ApiError`] com a mensagem devolvida pela Graph.
//!
//! # Exemplo
//!
//! ```rust,ignore
//! use teams_graph::GraphClient;
//!
//! let client = GraphClient::new(teams_graph::DEFAULT_BASE_URL)?;
//! let teams = client.list_joined_teams(&access_token).await?;
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{GraphClient, DEFAULT_BASE_URL};
pub use error::{GraphError, Result};
pub use types::{Channel, ChatMessage, Team};
