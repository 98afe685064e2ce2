//! Helpers compartilhados pelos testes

use std::sync::Arc;

use crate::config::{LegacySettings, Settings};
use crate::config::settings::{GraphSettings, OAuthSettings, ServerSettings};
use crate::session::MemorySessionStore;
use crate::AppState;

pub(crate) const TEST_REDIRECT_URI: &str = "http://localhost:3000/auth/callback";
pub(crate) const TEST_MESSAGE: &str = "Mensagem de teste 🎯";

pub(crate) fn test_settings(authority: &str, graph_base_url: &str) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        oauth: OAuthSettings {
            client_id: "client-1".to_string(),
            client_secret: "secret-1".to_string(),
            tenant_id: "tenant-1".to_string(),
            redirect_uri: TEST_REDIRECT_URI.to_string(),
            authority: authority.to_string(),
        },
        graph: GraphSettings {
            base_url: graph_base_url.to_string(),
            message_text: TEST_MESSAGE.to_string(),
        },
        legacy: LegacySettings::default(),
    }
}

/// Estado da aplicação com store em memória exposto para inspeção
pub(crate) fn test_state(settings: Settings) -> (Arc<AppState>, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let state = AppState::new(settings, store.clone()).unwrap();
    (Arc::new(state), store)
}
