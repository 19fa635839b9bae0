// File: services/planetwatcher_app/src/main.rs
use planetwatcher_app::{App, Screen};
use planetwatcher_common::{logging, PlanetwatcherError};
use planetwatcher_config::load_config;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(screen) => {
            println!("Now on the {} screen", screen);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to start: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<Screen, PlanetwatcherError> {
    let config = load_config()?;
    logging::init_from_config(&config.logging);

    let mut app = App::from_config(&config)?;
    println!("{}", app.main_page.connection_text());
    Ok(app.login().await)
}
