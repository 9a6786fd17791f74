use std::net::SocketAddr;
use std::sync::Arc;

use fruits::{
    build_app,
    infrastructure::{database::DatabaseManager, logger::Logger},
    Config, FruitService,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    Logger::init();

    let database = DatabaseManager::new(&config.database_url).await?;
    database.ensure_schema().await?;

    let fruit_service = FruitService::new(Arc::new(database.fruit_store()));
    let app = build_app(fruit_service, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("🚀 服务器运行在 http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("无法监听 Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭服务器");
}
