use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use forecast_player::{cli, config, error, types::SessionState};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Run the web server
    Serve,

    /// Show the forecast for a place
    Forecast(PlaceOptions),

    /// Show your top artists and their popularity
    Artists,

    /// List your playlists
    Playlists,

    #[clap(about = "Create a playlist for the weather at a place")]
    Playlist(PlaceOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaceOptions {
    /// Place name, e.g. "Seattle, WA"
    #[clap(long)]
    place: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let session: SessionState = Arc::new(Mutex::new(None));
            cli::auth(session).await;
        }
        Command::Serve => {
            let session: SessionState = Arc::new(Mutex::new(None));
            cli::serve(session).await;
        }
        Command::Forecast(opt) => cli::forecast(opt.place).await,
        Command::Artists => cli::artists().await,
        Command::Playlists => cli::playlists().await,
        Command::Playlist(opt) => cli::playlist(opt.place).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
