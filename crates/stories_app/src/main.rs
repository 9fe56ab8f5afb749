mod app;
mod command;
mod config;
mod logging;
mod render;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = config::Settings::parse();
    logging::initialize(settings.log, settings.level(), &settings.log_file);
    app::run(settings).await
}
