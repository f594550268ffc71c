mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::{Config, NotificationConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::tickets::{routes as tickets_routes, TicketService, TicketServiceConfig};
use crate::modules::audit::FileAuditSink;
use crate::modules::directory::InMemoryUserDirectory;
use crate::modules::notification::{
    LogNotificationChannel, NotificationChannel, WebhookNotificationChannel,
};
use crate::modules::storage::InMemoryTicketStore;
use crate::shared::clock::SystemClock;
use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    // Initialize collaborators
    let directory = Arc::new(InMemoryUserDirectory::from_config(&config.directory));
    tracing::info!(
        "User directory initialized with {} users (account manager: {})",
        directory.len().await,
        config.directory.account_manager_username
    );

    let store = Arc::new(InMemoryTicketStore::new());
    tracing::info!("Ticket store initialized");

    let notifier = notification_channel(&config.notification)?;

    tokio::fs::create_dir_all(&config.audit.dir)
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to create audit directory {}: {}",
                config.audit.dir.display(),
                e
            )
        })?;
    let audit = Arc::new(FileAuditSink::new(config.audit.dir.clone()));
    tracing::info!(
        "Audit snapshots written to {} (failure policy: {:?})",
        audit.dir().display(),
        config.audit.failure_policy
    );

    // Initialize Ticket Service
    let ticket_service = Arc::new(TicketService::new(
        TicketServiceConfig {
            notification_policy: config.notification.failure_policy,
            audit_policy: config.audit.failure_policy,
        },
        directory,
        store,
        notifier,
        audit,
        Arc::new(SystemClock),
    ));
    tracing::info!("Ticket service initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let app = Router::new()
        .merge(swagger)
        .merge(tickets_routes::routes(ticket_service))
        .merge(health_route)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;
    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}

/// Webhook delivery when configured, log-only otherwise
fn notification_channel(config: &NotificationConfig) -> anyhow::Result<Arc<dyn NotificationChannel>> {
    let channel: Arc<dyn NotificationChannel> = match &config.webhook_url {
        Some(url) => {
            tracing::info!("Administrator alerts delivered to webhook {}", url);
            Arc::new(
                WebhookNotificationChannel::new(url.clone(), &config.admin_email, config.timeout)
                    .map_err(|e| anyhow::anyhow!("Failed to initialize notifier: {}", e))?,
            )
        }
        None => {
            tracing::info!(
                "No notification webhook configured; administrator alerts for {} go to the log",
                config.admin_email
            );
            Arc::new(LogNotificationChannel::new(config.admin_email.clone()))
        }
    };
    tracing::info!(
        "Notification failure policy: {:?}",
        config.failure_policy
    );

    Ok(channel)
}
