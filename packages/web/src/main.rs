use dioxus::prelude::*;

use ui::AppProviders;
use views::{Home, Login, TailwindCheckPage};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/tailwind-check")]
    TailwindCheckPage {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Failed to start tokio runtime: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server exited with error: {:#}", e);
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> anyhow::Result<()> {
    use anyhow::Context;
    use backend::{AppState, Database, PgStore, Settings};
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    // 7 days
    const SESSION_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 7);

    let settings = Settings::new().context("Failed to load configuration")?;
    backend::telemetry::init_tracing(&settings.log.filter);

    let db = Database::connect(&settings.database)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await.context("Failed to run migrations")?;

    let session_store = PostgresStore::new(db.pool().clone());
    session_store
        .migrate()
        .await
        .context("Failed to create session table")?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            SESSION_TTL.try_into().context("Session TTL out of range")?,
        ));

    let state = AppState::from_store(PgStore::new(&db), settings.site.clone());

    // JSON API first, then the Dioxus app and its server functions
    let router = axum::Router::new()
        .merge(backend::app::router(state.clone()))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(axum::Extension(state))
        .layer(session_layer);

    // Under `dx serve` the CLI picks the port; otherwise use configuration
    let addr = settings.server.listen_address(
        dioxus::cli_config::server_ip(),
        dioxus::cli_config::server_port(),
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    let served = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db.close().await;
    tracing::info!("Server stopped");
    served.context("Server error")
}

#[cfg(feature = "server")]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        AppProviders {
            Router::<Route> {}
        }
    }
}
