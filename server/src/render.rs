use actix_web::{
    http::header::{self, ContentType},
    HttpRequest, HttpResponse,
};
use serde::Serialize;

use errors::Error;

/// A view context that can be rendered as an HTML page. Clients asking for
/// `application/json` get the context itself instead.
pub trait Page: Serialize {
    fn title(&self) -> String;

    fn render_body(&self, req: &HttpRequest) -> Result<String, Error>;
}

pub fn wants_json(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}

pub fn respond<P: Page>(req: &HttpRequest, page: &P) -> Result<HttpResponse, Error> {
    if wants_json(req) {
        return Ok(HttpResponse::Ok().json(page));
    }

    let body = page.render_body(req)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(layout(&page.title(), &body)))
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
