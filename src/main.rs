use anyhow::{Context, Result};
use parceiros::Config;
use tracing::warn;

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level())),
        )
        .init();

    config.validate().context("Invalid configuration")?;

    let provider = config.provider()?;

    let site = parceiros::generate_site(
        provider.as_ref(),
        |content| config.apply_overrides(content),
        &config.output,
        config.logo_mode(),
    )
    .context("Failed to generate partners page")?;

    println!(
        "Generated: {} ({} partners, {} logos)",
        site.index_path.display(),
        site.partner_count,
        site.logo_count
    );

    if !config.no_open
        && let Err(e) = open::that(&site.index_path)
    {
        warn!("Failed to open {}: {:#}", site.index_path.display(), e);
    }

    Ok(())
}
