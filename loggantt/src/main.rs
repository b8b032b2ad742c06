use clap::Parser;
use loggantt_core::cli::{self, Command};
use loggantt_core::logging::{LogFormat, default_log_format, init_logging};
use owo_colors::OwoColorize;

#[derive(Parser, Debug)]
#[command(
    name = "loggantt",
    version,
    about = "loggantt: Gantt timelines from pipeline execution logs"
)]
struct Cli {
    /// Log format for diagnostics on stderr (pretty on a terminal, JSON otherwise)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = cli::run(cli.command) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
