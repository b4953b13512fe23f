//! Terminal client entry point.
mod app;
mod ui;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use corridor_core::GameConfig;
use corridor_runtime::GameSession;

use app::App;

fn main() -> Result<()> {
    // The TUI owns stdout, so logs go to a file in the working directory.
    let appender = tracing_appender::rolling::never(".", "corridor.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0);
    tracing::info!(seed, "starting session");
    let session = GameSession::new(GameConfig::default(), seed)?;

    let mut terminal = ratatui::init();
    let result = App::new(session).run(&mut terminal);
    ratatui::restore();
    result
}
