//! Home page rendering and its handler.
//!
//! Rendering is plain string substitution into a page shell; it cannot
//! fail, so the handler has no error branch.

use axum::{extract::State, response::Html};

use homecount_core::page::visit_message;

use crate::app_state::AppState;

/// Page shell; `{{message}}` is replaced at render time.
const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>homecount</title>
</head>
<body>
  <h1>{{message}}</h1>
</body>
</html>
"#;

pub fn render_home(message: &str) -> String {
    HOME_PAGE.replace("{{message}}", message)
}

/// `GET /` — record the visit and render the counter message.
pub async fn home(State(app): State<AppState>) -> Html<String> {
    let n = app.visits().record();
    Html(render_home(&visit_message(n)))
}
