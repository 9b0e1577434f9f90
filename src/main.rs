use talentscout::cli::CliRunner;
use talentscout::config::AppConfig;
use talentscout::credentials::CredentialStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();

    eprintln!("🗂️  TalentScout AI Assistant v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Initial Candidate Screening");
    eprintln!("   Model: {}", config.model);
    eprintln!("   Type your answers and press Enter. Say 'exit' to stop.\n");

    let credentials = match CredentialStore::load(&config.secrets_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!("Could not load secrets file: {e}");
            CredentialStore::env_only()
        }
    };

    CliRunner::new(config, credentials).run().await?;
    Ok(())
}
