use anyhow::Result;
use clap::{App as ClapApp, Arg};
use portfolio_tui::{app::App, config::Config};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("content")
                .long("content")
                .value_name("FILE")
                .help("Loads portfolio content from a YAML file")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(path) = matches.value_of("content") {
        config.content_file = Some(PathBuf::from(path));
    }

    App::start(config).await?;
    Ok(())
}
