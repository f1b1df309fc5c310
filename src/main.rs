use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use likesync::{
    cli::{self, Service, SyncFlags},
    config, error,
    sync::Direction,
};

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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify or Last.fm
    Auth(AuthOptions),

    /// Sync liked tracks in one direction
    Sync(SyncOptions),

    /// Show tracks the last sync could not match
    Missed(DirectionOption),

    /// Show processed and missed counts per direction
    Info,

    /// Forget which tracks were already synced
    Reset(DirectionOption),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    #[clap(value_enum)]
    service: Service,
}

#[derive(Parser, Debug, Clone)]
pub struct SyncOptions {
    #[clap(value_enum)]
    direction: Direction,

    /// Never ask; only near-exact matches are synced
    #[clap(long)]
    non_interactive: bool,

    /// Report every match and miss
    #[clap(long, short)]
    verbose: bool,

    /// Like matches instead of adding them to a playlist
    #[clap(long, conflicts_with = "playlist")]
    like: bool,

    /// Collect matches in this Spotify playlist
    #[clap(long)]
    playlist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DirectionOption {
    #[clap(value_enum)]
    direction: Direction,
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
        Command::Auth(opt) => cli::auth(opt.service).await,
        Command::Sync(opt) => {
            cli::sync(
                opt.direction,
                SyncFlags {
                    non_interactive: opt.non_interactive,
                    verbose: opt.verbose,
                    like: opt.like,
                    playlist: opt.playlist,
                },
            )
            .await
        }
        Command::Missed(opt) => cli::missed(opt.direction).await,
        Command::Info => cli::info().await,
        Command::Reset(opt) => cli::reset(opt.direction).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
