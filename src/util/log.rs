use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logs go to a file under the data dir; stdout belongs to the terminal UI.
/// Running without a resolvable data dir just means running without logs.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let Some(dirs) = ProjectDirs::from("", "", "musicstream") else {
        return Ok(());
    };

    let dir = dirs.data_local_dir();
    std::fs::create_dir_all(dir)?;
    let log_file = std::fs::File::create(dir.join("musicstream.log"))?;

    let filter =
        EnvFilter::try_from_env("MUSICSTREAM_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(log_file).with_ansi(false))
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
