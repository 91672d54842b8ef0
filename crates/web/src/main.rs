//! Renders the card browser once and prints it as a standalone HTML page.
//!
//! Usage: `cardcompare-snapshot [CONFIG]` (defaults to `cardcompare.toml`).

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::path::PathBuf;

    use anyhow::Context;
    use cardcompare_view::{MemorySurface, Orchestrator, Presenter};
    use cardcompare_web::config::CONFIG_FILE;
    use cardcompare_web::{AppConfig, FileSource, HttpSource, load_catalog};

    cardcompare_observability::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    let config = AppConfig::load(Some(&path))
        .map_err(|e| anyhow::anyhow!("loading configuration from {}: {e}", path.display()))?;
    config.validate().context("validating configuration")?;

    let mut app = Orchestrator::new(Presenter::new(config.view_config()), MemorySurface::new());

    let outcome = if config.is_remote() {
        load_catalog(&HttpSource::new(config.data_source.clone())).await
    } else {
        load_catalog(&FileSource::new(&config.data_source)).await
    };
    app.finish_loading(outcome);

    print!("{}", app.into_surface().to_document("Card Compare"));
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
