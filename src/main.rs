mod app;
mod catalog;
mod config;
mod error;
mod runtime;
mod ticker;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()?;
    Ok(())
}
