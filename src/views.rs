//! Minimal server-rendered views.
//!
//! Pages are assembled from plain strings; there is no template engine.
//! Callers must pass already-escaped fragments or use [`escape`] on any
//! user-supplied value. Password values are never rendered back into a form.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::validation::FieldError;

/// Escape a value for embedding in HTML text or attribute position.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | Poseidon Trading</title>\n\
         <link rel=\"stylesheet\" href=\"/css/main.css\">\n</head>\n<body>\n\
         {body}\n</body>\n</html>\n",
        title = escape(title),
    ))
}

pub fn error_page(title: &str, message: &str) -> Html<String> {
    page(
        title,
        &format!("<h1>{}</h1>\n<p>{}</p>", escape(title), escape(message)),
    )
}

/// Render field-level errors above a redisplayed form.
pub fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"errors\">\n");
    for e in errors {
        out.push_str(&format!("<li>{}</li>\n", escape(&e.message)));
    }
    out.push_str("</ul>\n");
    out
}

/// 302 redirect; all redirect targets in this application are fixed paths.
pub fn redirect_to(location: &'static str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, HeaderValue::from_static(location))],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape("<script>\"a\" & 'b'</script>"),
            "&lt;script&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn error_list_renders_each_message() {
        let errors = vec![
            FieldError::new("a", "first"),
            FieldError::new("b", "<second>"),
        ];
        let html = error_list(&errors);
        assert!(html.contains("<li>first</li>"));
        assert!(html.contains("<li>&lt;second&gt;</li>"));
        assert!(error_list(&[]).is_empty());
    }

    #[test]
    fn redirect_is_a_302_with_location() {
        let res = redirect_to("/login");
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(res.headers()[header::LOCATION], "/login");
    }
}
