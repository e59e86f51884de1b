//! shopdash: a terminal admin dashboard for the Platzi Fake Store API.

mod app;
mod config;
mod error;
mod events;
mod platzi;
mod state;
mod ui;

use crate::app::App;
use crate::config::Config;
use anyhow::Result;
use clap::{App as ClapApp, Arg};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new("shopdash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A terminal admin dashboard for the Platzi Fake Store API")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    App::start(config).await
}
