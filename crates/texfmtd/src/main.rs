use texfmtd::{DEFAULT_ADDR, start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let addr = std::env::var("TEXFMTD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    start_server(&addr).await
}
