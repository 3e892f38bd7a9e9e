use crate::{
    modules,
    types::{AppEnvironment, Config, Context, ToContext},
    utils::database,
};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

fn cors_layer(
    environment: &AppEnvironment,
    allowed_origins: Option<&Vec<String>>,
) -> cors::CorsLayer {
    let layer = cors::CorsLayer::new()
        .allow_methods([
            Method::OPTIONS,
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    match allowed_origins {
        Some(origins) => layer.allow_origin(
            origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(err) => {
                        tracing::warn!("Ignoring invalid CORS origin {}: {}", origin, err);
                        None
                    }
                })
                .collect::<Vec<_>>(),
        ),
        None => match environment {
            AppEnvironment::Development => layer.allow_origin(cors::Any),
            AppEnvironment::Production => {
                tracing::warn!("CORS_ALLOWED_ORIGINS is not set, cross-origin requests are refused");
                layer
            }
        },
    }
}

impl App {
    pub async fn new(config: Config) -> Result<Self, database::Error> {
        let ctx: Arc<Context> = Arc::new(config.to_context().await?);

        Ok(Self::from_context(ctx))
    }

    pub fn from_context(ctx: Arc<Context>) -> Self {
        let router = Router::new()
            .nest("/api", modules::get_router())
            .with_state(ctx.clone())
            .layer(
                ServiceBuilder::new()
                    .layer(trace::TraceLayer::new_for_http())
                    .layer(cors_layer(
                        &ctx.app.environment,
                        ctx.app.cors_allowed_origins.as_ref(),
                    ))
                    .layer(DefaultBodyLimit::max(1024 * 1024 * 10)),
            );

        Self { ctx, router }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address).await?;

        tracing::info!("App is running on {}", address);

        axum::serve(listener, self.router).await
    }
}
