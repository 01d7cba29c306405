mod app;
mod config;
mod error;
mod events;
mod foods;
mod logger;
mod state;
mod ui;
mod utils;

use anyhow::Result;
use app::App;
use clap::{crate_version, App as ClapApp, Arg};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new("foods-tui")
        .version(crate_version!())
        .about("A terminal dashboard for managing food items against a REST backend")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml (defaults to ~/.config/foods-tui)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("api-url")
                .short("u")
                .long("api-url")
                .value_name("URL")
                .help("Base URL of the food API, overriding the configuration file")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(api_url) = matches.value_of("api-url") {
        config.set_api_url(api_url);
    }

    App::start(config).await
}
