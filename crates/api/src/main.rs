use prodapi_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    prodapi_observability::init(config.log_format);

    prodapi_api::server::run(config).await
}
