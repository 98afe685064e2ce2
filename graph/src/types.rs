//! Projeções das respostas JSON da Graph API
//!
//! Apenas os campos usados na navegação são mapeados; o resto é ignorado.

use serde::{Deserialize, Serialize};

/// Envelope de coleção da Graph (`{"value": [...]}`)
#[derive(Debug, Deserialize)]
pub(crate) struct Collection<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

/// Time (grupo) do qual o usuário participa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Canal de um time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Mensagem criada em um canal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub web_url: Option<String>,
}

/// Corpo do POST de mensagem: `{"body": {"content": "..."}}`
#[derive(Debug, Serialize)]
pub(crate) struct NewChatMessage<'a> {
    pub body: ItemBody<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ItemBody<'a> {
    pub content: &'a str,
}
