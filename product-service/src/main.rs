use std::{net::SocketAddr, sync::Arc};

use tokio::signal;
use tracing::info;

use product_service::{app_router, config, db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load_config()?;
    catalog_core::config::init_tracing("product_service", cfg.log_level());

    let pool = db::establish_connection(&cfg).await?;
    if cfg.auto_migrate {
        db::run_migrations(&pool).await?;
    }

    let state = AppState::new(Arc::new(pool), cfg.clone())?;
    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        category_service_url = %cfg.category_service_url,
        "product-service listening on http://{}", addr
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install signal handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
