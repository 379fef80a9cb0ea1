use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use nimbus_core::{Config, LocationQuery, QueryInput, Session, provider_from_config};

use crate::render::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nimbus", version, about = "Current weather and 5-day forecast lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Look up one location and print the result.
    Search {
        /// Location name, sent as typed.
        location: String,
    },

    /// Prompt for locations until cancelled (default).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Search { location } => {
                let session = session()?;
                let shown = session.search(LocationQuery::new(location)).await;
                print!("{}", render(shown.as_deref()));
                Ok(())
            }
            Command::Interactive => interactive(session()?).await,
        }
    }
}

fn session() -> anyhow::Result<Session> {
    let config = Config::load()?;
    tracing::debug!(base_url = config.base_url(), "Loaded configuration");
    Ok(Session::new(provider_from_config(&config)))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

async fn interactive(session: Session) -> anyhow::Result<()> {
    let mut input = QueryInput::new();
    print!("{}", render(None));

    loop {
        let line = Text::new("location:")
            .with_placeholder("search for location...")
            .with_initial_value(input.text())
            .prompt();

        match line {
            Ok(text) => input.set(text),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read location"),
        }

        let shown = session.search(input.activate()).await;
        println!();
        print!("{}", render(shown.as_deref()));
    }
}
