//! Camada de sessão por cookie
//!
//! Resolve o cookie `teams_sid` em um [`Session`] disponível como extension da request.
//! Cookie ausente ou desconhecido gera uma sessão provisória (UUID v4): ela só entra no
//! store, e só recebe `Set-Cookie`, quando um token é gravado.

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use uuid::Uuid;

use super::store::SessionStore;
use crate::utils::logging::*;
use crate::utils::AppResult;

pub const SESSION_COOKIE: &str = "teams_sid";

/// Handle da sessão da request corrente
#[derive(Clone)]
pub struct Session {
    id: String,
    store: Arc<dyn SessionStore>,
    /// Sessão sem entrada no store e sem cookie no cliente
    provisional: bool,
    persisted: Arc<AtomicBool>,
}

impl Session {
    /// Sessão já registrada no store
    pub fn new(id: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            id: id.into(),
            store,
            provisional: false,
            persisted: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Sessão com id novo, materializada no primeiro `set_access_token`
    pub fn provisional(store: Arc<dyn SessionStore>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            store,
            provisional: true,
            persisted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Token da sessão; string vazia conta como ausente
    pub async fn access_token(&self) -> AppResult<Option<String>> {
        if !self.persisted.load(Ordering::Acquire) {
            return Ok(None);
        }

        let data = self.store.get(&self.id).await?;
        Ok(data
            .and_then(|d| d.access_token)
            .filter(|token| !token.trim().is_empty()))
    }

    pub async fn set_access_token(&self, token: &str) -> AppResult<()> {
        let mut data = self.store.get(&self.id).await?.unwrap_or_default();
        data.access_token = Some(token.to_string());
        self.store.set(&self.id, data).await?;

        if !self.persisted.swap(true, Ordering::AcqRel) {
            tracing::debug!("New session created: {}", self.id);
        }
        Ok(())
    }

    /// O cliente ainda não conhece este id, mas o store já conhece
    fn needs_cookie(&self) -> bool {
        self.provisional && self.persisted.load(Ordering::Acquire)
    }
}

pub async fn session_layer(
    State(store): State<Arc<dyn SessionStore>>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = match cookie_value(request.headers(), SESSION_COOKIE) {
        Some(id) => match store.get(&id).await {
            Ok(Some(_)) => Session::new(id, store.clone()),
            Ok(None) => Session::provisional(store.clone()),
            Err(e) => {
                log_error(&format!("❌ [Session] Falha ao resolver sessão: {}", e));
                return (StatusCode::INTERNAL_SERVER_ERROR, "Erro de sessão").into_response();
            }
        },
        None => Session::provisional(store.clone()),
    };

    request.extensions_mut().insert(session.clone());

    let mut response = next.run(request).await;

    if session.needs_cookie() {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, session.id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }

    response
}

/// Valor de um cookie em qualquer um dos headers `Cookie`
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySessionStore, SessionData};

    #[test]
    fn test_cookie_value_parsing() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark; teams_sid=abc-123"));
        headers.append(COOKIE, HeaderValue::from_static("other=1"));

        assert_eq!(cookie_value(&headers, SESSION_COOKIE), Some("abc-123".to_string()));
        assert_eq!(cookie_value(&headers, "other"), Some("1".to_string()));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn test_empty_cookie_value_ignored() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("teams_sid="));
        assert_eq!(cookie_value(&headers, SESSION_COOKIE), None);
    }

    #[tokio::test]
    async fn test_session_token_roundtrip_through_store() {
        let store = Arc::new(MemorySessionStore::new());
        let session = Session::new("sid-1", store.clone());

        assert_eq!(session.access_token().await.unwrap(), None);

        session.set_access_token("tok-1").await.unwrap();
        assert_eq!(session.access_token().await.unwrap(), Some("tok-1".to_string()));
        assert_eq!(
            store.get("sid-1").await.unwrap(),
            Some(SessionData { access_token: Some("tok-1".to_string()) })
        );
    }

    #[tokio::test]
    async fn test_blank_token_counts_as_absent() {
        let store = Arc::new(MemorySessionStore::new());
        store
            .set("sid-2", SessionData { access_token: Some(String::new()) })
            .await
            .unwrap();

        let session = Session::new("sid-2", store);
        assert_eq!(session.access_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_provisional_session_touches_store_only_on_write() {
        let store = Arc::new(MemorySessionStore::new());
        let session = Session::provisional(store.clone());

        assert_eq!(session.access_token().await.unwrap(), None);
        assert!(!session.needs_cookie());
        assert_eq!(store.session_count().await, 0);

        session.set_access_token("tok-new").await.unwrap();
        assert!(session.needs_cookie());
        assert_eq!(store.session_count().await, 1);
        assert_eq!(session.access_token().await.unwrap(), Some("tok-new".to_string()));
    }

    #[tokio::test]
    async fn test_known_session_never_needs_cookie() {
        let store = Arc::new(MemorySessionStore::new());
        store.set("sid-3", SessionData::default()).await.unwrap();

        let session = Session::new("sid-3", store);
        session.set_access_token("tok-3").await.unwrap();
        assert!(!session.needs_cookie());
    }
}
