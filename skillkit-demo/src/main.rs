mod app;
mod config;
mod error;
mod paths;
mod terminal;

use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::DemoApp;
use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::terminal::TerminalGuard;

fn init_logging() -> Result<(), DemoError> {
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("skillkit-demo.log"));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = File::create(&path)?;
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    Ok(())
}

async fn run() -> Result<Vec<(String, Vec<skillkit::SelectOption>)>, DemoError> {
    init_logging()?;

    let config = DemoConfig::load(std::env::args().nth(1).map(PathBuf::from))?;
    let mut demo = DemoApp::new(config)?;

    let mut terminal = TerminalGuard::new()?;
    app::run(&mut demo, &mut terminal).await?;
    drop(terminal);

    Ok(demo.selections())
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(selections) => {
            for (caption, selected) in selections {
                let labels: Vec<&str> = selected.iter().map(|o| o.value.as_str()).collect();
                println!("{}: {}", caption, labels.join(", "));
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
