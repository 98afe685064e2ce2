//! # OAuth2 Authentication Module
//!
//! Authorization code flow contra o Microsoft identity platform.
//!
//! ## Estrutura:
//! - `config.rs`: endpoints, credenciais e scopes
//! - `client.rs`: URL de autorização e troca de code por token (crate `oauth2`)
//! - `handlers.rs`: Handlers HTTP (`/`, `/auth/callback`)

pub mod client;
pub mod config;
pub mod handlers;

pub use client::OAuth2Client;
pub use config::{OAuth2Config, SCOPE};
pub use handlers::{handle_oauth_callback, login_page};
