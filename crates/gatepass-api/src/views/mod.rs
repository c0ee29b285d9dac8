//! Server-rendered HTML views.
//!
//! Pages are assembled as strings around a shared [`layout`]. All
//! user-provided text goes through [`escape`] before interpolation.

pub mod logs;
pub mod passes;
pub mod reports;
pub mod users;

use axum::http::StatusCode;

/// Escapes text for safe interpolation into HTML.
pub fn escape(input: &str) -> String {
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

/// Wraps page content in the shared HTML chrome.
///
/// `body` is trusted markup; callers escape any user text themselves.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} | GatePass</title>\n\
         </head>\n\
         <body>\n\
         <nav>\
         <a href=\"/\">Home</a> | \
         <a href=\"/users\">Users</a> | \
         <a href=\"/passes\">Passes</a> | \
         <a href=\"/logs\">Logs</a> | \
         <a href=\"/reports\">Reports</a>\
         </nav>\n\
         <h1>{title}</h1>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        body = body,
    )
}

/// Landing page.
pub fn home_page() -> String {
    layout(
        "GatePass",
        "<p>Building access pass administration.</p>\n\
         <ul>\n\
         <li><a href=\"/users\">Manage users</a></li>\n\
         <li><a href=\"/passes\">Manage passes</a></li>\n\
         <li><a href=\"/logs\">Review access logs</a></li>\n\
         <li><a href=\"/reports\">Reports</a></li>\n\
         </ul>",
    )
}

/// Error page shown for failed requests.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<p>{}</p>\n<p><a href=\"/\">Back to home</a></p>",
        escape(message)
    );
    layout(&format!("Error {}", status.as_u16()), &body)
}
