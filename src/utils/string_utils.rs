/// Utilitários de string para logs e HTML inline

/// Trunca uma string sem cortar um caractere UTF-8 no meio
///
/// # Exemplo
/// ```
/// use teams_channel_middleware::utils::string_utils::truncate_safe;
///
/// assert_eq!(truncate_safe("Olá, mundo!", 3), "Ol");
/// ```
pub fn truncate_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }

    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }

    &s[..end]
}

/// Prefixo de um token para log, nunca o valor completo
pub fn token_preview(token: &str) -> String {
    format!("{}... ({} chars)", truncate_safe(token, 8), token.chars().count())
}

/// Escapa texto vindo de APIs remotas antes de interpolar em HTML
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_safe_utf8() {
        let text = "Olá, mundo!";
        // "Olá" = 4 bytes (á ocupa 2)
        assert_eq!(truncate_safe(text, 3), "Ol");
        assert_eq!(truncate_safe(text, 4), "Olá");
        assert_eq!(truncate_safe(text, 100), text);
    }

    #[test]
    fn test_token_preview_hides_secret() {
        let preview = token_preview("eyJ0eXAiOiJKV1QiLCJhbGciOi");
        assert!(preview.starts_with("eyJ0eXAi..."));
        assert!(!preview.contains("LCJhbGciOi"));
        assert!(preview.ends_with("(26 chars)"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"R&D"</b> 'x'"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; &#39;x&#39;"
        );
        assert_eq!(escape_html("Engenharia"), "Engenharia");
    }
}
