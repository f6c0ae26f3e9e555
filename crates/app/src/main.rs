use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use settings::{Overflow, Settings};
use ticket::{LinePolicy, TicketEntry};

mod commands;
mod error;
mod settings;
mod ticket;
mod views;

#[derive(Parser, Debug)]
#[command(name = "lottery_pos")]
#[command(about = "Classify and expand lottery bet notation (123+, 45., 12d34, 778q, 3-1, ...)")]
struct Cli {
    /// Settings file (TOML); the extension may be omitted.
    #[arg(long, global = true, env = "LOTTERY_POS_CONFIG")]
    config: Option<String>,
    /// Maximum lines a single entry may expand to.
    #[arg(long, global = true)]
    max_lines: Option<usize>,
    /// Keep the first lines instead of refusing entries over the limit.
    #[arg(long, global = true)]
    truncate: bool,
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show how each notation is read.
    Classify(InputArgs),
    /// Expand each notation into ticket lines.
    Expand(ExpandArgs),
    /// List every bet type.
    Catalogue,
}

#[derive(Args, Debug)]
struct InputArgs {
    #[arg(required = true, allow_hyphen_values = true)]
    inputs: Vec<String>,
}

#[derive(Args, Debug)]
struct ExpandArgs {
    /// Only accept bet types sold on this draw.
    #[arg(long)]
    draw: Option<String>,
    #[arg(required = true, allow_hyphen_values = true)]
    inputs: Vec<String>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let mut settings = Settings::new(cli.config.as_deref())?;
    if let Some(max_lines) = cli.max_lines {
        settings.ticket.max_lines = max_lines;
    }
    if cli.truncate {
        settings.ticket.overflow = Overflow::Truncate;
    }

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "lottery_pos={level},lottery_engine={level},api_types={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let policy = LinePolicy::from(settings.ticket);
    tracing::info!(
        "line cap {} ({:?} on overflow)",
        policy.max_lines(),
        settings.ticket.overflow
    );

    let mut stdout = std::io::stdout().lock();
    let all_ok = match &cli.command {
        Command::Classify(args) => {
            commands::classify_inputs(&args.inputs, cli.json, &mut stdout)?;
            true
        }
        Command::Expand(args) => commands::expand_inputs(
            &TicketEntry::new(policy),
            &args.inputs,
            args.draw.as_deref(),
            cli.json,
            &mut stdout,
        )?,
        Command::Catalogue => {
            commands::list_catalogue(cli.json, &mut stdout)?;
            true
        }
    };

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
