//! OpenAPI specification and Swagger UI

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{health, traders};
use crate::domain::types::{
    LastTrade, RealizedPnl, TokenInfo, TokenSummary, Trade, TradeSide, TradeStats, Trader,
    TraderProfile,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Traderboard API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Crypto trader leaderboard with min/max range filters"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "traders", description = "Leaderboard, profiles and trade history")
    ),
    paths(
        health::health,
        traders::list_traders,
        traders::get_trader_profile,
        traders::list_trader_trades,
    ),
    components(schemas(
        health::HealthResponse,
        Trader,
        TradeStats,
        TraderProfile,
        LastTrade,
        TradeSide,
        TokenSummary,
        RealizedPnl,
        Trade,
        TokenInfo,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}

/// Serve Swagger UI from CDN
pub async fn swagger_ui_html() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Traderboard API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        html { box-sizing: border-box; overflow-y: scroll; }
        *, *:before, *:after { box-sizing: inherit; }
        body { margin: 0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: "/api/openapi.json",
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout",
                deepLinking: true,
                showExtensions: true,
                showCommonExtensions: true
            });
        };
    </script>
</body>
</html>"#;
