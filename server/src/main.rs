use std::net::SocketAddr;

use error_stack::ResultExt;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use driver::clock::SystemClock;
use kernel::KernelError;

use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::route::{AuthorRouter, BookRouter, CatalogRouter, LoanRouter, RenewalRouter};

mod access;
mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;
mod session;

const DEFAULT_LOG_FILTER: &str =
    "driver=debug,application=debug,server=debug,tower_http=debug,sqlx=info";

fn bind_address() -> error_stack::Result<SocketAddr, KernelError> {
    let host = dotenvy::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port = dotenvy::var("SERVER_PORT").unwrap_or_else(|_| "8080".into());
    format!("{host}:{port}")
        .parse::<SocketAddr>()
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("Invalid bind address {host}:{port}"))
}

fn main() -> Result<(), StackTrace> {
    // Read while the process is still single-threaded.
    let clock = SystemClock::local();
    let _ = dotenvy::dotenv();

    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
            )),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();
    tracing::info!("local offset is {}", clock.offset());

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to start tokio runtime")?
        .block_on(serve(clock))?;
    Ok(())
}

async fn serve(clock: SystemClock) -> error_stack::Result<(), KernelError> {
    let app = AppModule::new(clock).await?;

    let router = axum::Router::new()
        .route_catalog()
        .route_book()
        .route_author()
        .route_loan()
        .route_renewal()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new())
        .with_state(app);

    let bind = bind_address()?;
    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!("listening on {bind}");

    axum::serve(tcp, router.into_make_service())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}
