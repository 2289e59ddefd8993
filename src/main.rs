use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use remindme::backend::LocalBackend;
use remindme::config::Config;
use remindme::service::MutationService;
use remindme::storage::LocalStorage;
use remindme::theme::ThemeService;
use remindme::ui;

/// File logging, set up before the terminal enters raw mode.
fn setup_logging(config: &Config) -> Result<()> {
    if !config.logging.enabled {
        return Ok(());
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(&config.logging.file)?)
        .apply()?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    setup_logging(&config)?;
    log::info!("Starting remindme");

    let storage = LocalStorage::new().await?;
    let backend = Arc::new(LocalBackend::new(Arc::new(Mutex::new(storage))));
    let service = MutationService::new(backend);
    let theme_service = ThemeService::new(config.ui.theme);

    ui::run(service, theme_service, &config).await
}
