//! Swagger/OpenAPI documentation surface
//!
//! The OpenAPI document is derived from the handler annotations with
//! `utoipa` and served at `/swagger/openapi.json`. The interactive UI at
//! `/swagger/index.html` is a small HTML page that loads Swagger UI from
//! CDN and points it at the served spec.

use axum::{
    response::{Html, Json, Redirect},
    routing::get,
    Router,
};
use utoipa::OpenApi;

use crate::api::responses::{HealthResponse, Message};

/// OpenAPI document for the greeting API
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::hello_handler,
        crate::api::handlers::goodbye_handler,
        crate::api::handlers::health_handler,
    ),
    components(schemas(Message, HealthResponse)),
    info(
        title = "Greet API",
        version = "1.0.0",
        description = "A minimal greeting API"
    )
)]
pub struct ApiDoc;

/// Swagger UI version loaded from CDN
const SWAGGER_UI_VERSION: &str = "5.17.14";

/// Create the documentation router
pub fn router() -> Router {
    Router::new()
        .route("/swagger", get(|| async { Redirect::permanent("/swagger/index.html") }))
        .route("/swagger/index.html", get(swagger_ui))
        .route("/swagger/openapi.json", get(openapi_spec))
}

async fn swagger_ui() -> Html<String> {
    Html(swagger_html("/swagger/openapi.json", "Greet API"))
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Generate the Swagger UI HTML page for a given spec URL
fn swagger_html(spec_url: &str, title: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {{
      SwaggerUIBundle({{
        url: "{spec_url}",
        dom_id: "#swagger-ui",
        deepLinking: true,
        docExpansion: "list",
      }});
    }};
  </script>
</body>
</html>
"##,
        title = title,
        version = SWAGGER_UI_VERSION,
        spec_url = spec_url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_all_endpoints() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/hello"));
        assert!(spec.paths.paths.contains_key("/goodbye"));
        assert!(spec.paths.paths.contains_key("/health"));
    }

    #[test]
    fn html_references_spec_url() {
        let html = swagger_html("/swagger/openapi.json", "Greet API");
        assert!(html.contains(r#"url: "/swagger/openapi.json""#));
        assert!(html.contains(SWAGGER_UI_VERSION));
    }
}
