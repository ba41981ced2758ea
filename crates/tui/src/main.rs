mod app;
mod config;
mod error;
mod logging;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    logging::init(&config)?;

    tracing::info!("starting expense calculator");
    let mut app = app::App::new(config);
    let result = app.run();
    match &result {
        Ok(()) => tracing::info!("session closed"),
        Err(err) => tracing::error!("session aborted: {err}"),
    }
    result
}
