use axum::{
    Router,
    extract::Path,
    middleware,
    response::Html,
    routing::get,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cookie_session_axum::{AuthUser, refresh_session, session_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Only the protected pages carry the refresh guard; the login and
    // landing routes must stay reachable without a session.
    let protected = Router::new()
        .route("/home/{name}", get(home))
        .layer(middleware::from_fn(refresh_session));

    let app = session_router().merge(protected);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn home(user: AuthUser, Path(name): Path<String>) -> Html<String> {
    let admin_note = if user.is_admin { " (admin)" } else { "" };
    Html(format!(
        "<h1>Home of {name}</h1><p>Signed in as {}{admin_note}</p>",
        user.name
    ))
}
