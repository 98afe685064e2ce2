//! Armazenamento de sessões
//!
//! Cada sessão guarda apenas o access token obtido no callback. Sem expiração.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::utils::AppResult;

/// Dados associados a um session id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub access_token: Option<String>,
}

/// Key-value store de sessões, indexado pelo id entregue no cookie
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<SessionData>>;

    async fn set(&self, key: &str, data: SessionData) -> AppResult<()>;
}

/// Backing em memória (perde tudo ao reiniciar o processo)
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, SessionData>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> AppResult<Option<SessionData>> {
        Ok(self.sessions.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, data: SessionData) -> AppResult<()> {
        self.sessions.write().await.insert(key.to_string(), data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_unknown_key() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_and_scopes_by_key() {
        let store = MemorySessionStore::new();
        store.set("a", SessionData::default()).await.unwrap();
        store
            .set("a", SessionData { access_token: Some("tok-a".to_string()) })
            .await
            .unwrap();
        store.set("b", SessionData::default()).await.unwrap();

        assert_eq!(store.session_count().await, 2);
        assert_eq!(
            store.get("a").await.unwrap().and_then(|s| s.access_token),
            Some("tok-a".to_string())
        );
        assert_eq!(store.get("b").await.unwrap(), Some(SessionData::default()));
    }
}
