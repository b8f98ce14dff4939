use catalog_mock::server::{self, MockServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = MockServerConfig::from_env()?;
    if config.require_auth {
        tracing::warn!("product routes require the mock bearer token");
    }

    server::serve(config).await
}
