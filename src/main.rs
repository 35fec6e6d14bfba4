use dotenvy::dotenv;
use jobly::jobly_config::ServerConfig;
use jobly::logging::init_tracing;
use jobly::router::init_router;
use jobly::state::init_app_state;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state();
    let app = init_router(state);

    let bind_addr = server_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Server running on http://{}", bind_addr);
    info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
