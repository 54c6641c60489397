use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    medimate::config::load_dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

    dioxus::launch(medimate::ui::App);
    Ok(())
}
