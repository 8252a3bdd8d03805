use chrono::Local;
use spark_app::{router, AppState, SparkState};
use std::{env, net::SocketAddr};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let user1 = env::var("SPARK_USER1").unwrap_or_else(|_| "Alice".to_string());
    let user2 = env::var("SPARK_USER2").unwrap_or_else(|_| "Bob".to_string());
    let state = AppState::new(SparkState::new(user1, user2, Local::now()));

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
