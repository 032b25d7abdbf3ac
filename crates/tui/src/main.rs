mod app;
mod config;
mod error;
mod form;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    let mut app = app::App::new(config)?;
    app.run()?;
    Ok(())
}
