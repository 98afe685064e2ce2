// Handlers das rotas de navegação (times → canais → mensagem)
pub mod health;
pub mod messages;
pub mod teams;


pub use health::*;
pub use messages::*;
pub use teams::*;

use axum::response::Html;

// Mensagens estáticas para o usuário; a causa real vai só para o log
pub const AUTH_FAILED: &str = "Erro ao autenticar";
pub const LIST_CHANNELS_FAILED: &str = "Erro ao listar canais";
pub const SEND_FAILED: &str = "Erro ao enviar mensagem.";
pub const SEND_OK: &str = "Mensagem enviada com sucesso!";

/// Documento HTML mínimo em volta de um fragmento
pub fn render_page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{}</title>
    <meta charset="UTF-8">
</head>
<body>
    {}
</body>
</html>
"#,
        title, body
    ))
}
