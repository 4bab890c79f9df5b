use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotop::{
    cli, config, error,
    spotify::MAX_ITEMS,
    types::{Category, TimeRange},
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
    /// Log in and rank your top tracks
    Tracks(TopArgs),

    /// Log in and rank your top artists
    Artists(TopArgs),

    /// Run the token exchange backend (holds the client secret)
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TopArgs {
    /// Time range to rank over
    #[clap(long, value_enum, default_value = "medium")]
    pub range: TimeRange,

    /// Number of ranked items to show
    #[clap(long, default_value_t = MAX_ITEMS)]
    pub limit: u32,

    /// Show one list per time range (last 4 weeks, last 6 months, all time)
    #[clap(long, conflicts_with = "range")]
    pub all_ranges: bool,

    /// Fetch ranges one after the other instead of all at once
    #[clap(long, requires = "all_ranges")]
    pub sequential: bool,
}

impl From<TopArgs> for cli::TopOptions {
    fn from(args: TopArgs) -> Self {
        cli::TopOptions {
            range: args.range,
            limit: args.limit,
            all_ranges: args.all_ranges,
            sequential: args.sequential,
        }
    }
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
        Command::Tracks(opt) => cli::top(Category::Tracks, opt.into()).await,
        Command::Artists(opt) => cli::top(Category::Artists, opt.into()).await,
        Command::Serve => cli::serve().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
