mod dump;
mod render;

pub use dump::*;
pub use render::*;

use clap::Subcommand;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "gantt.html";
pub const DEFAULT_TITLE: &str = "Pluck Log Chunk Timeline";

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an interactive HTML timeline from a log file
    Render {
        /// Path to the log file (e.g. pluck.log)
        input: PathBuf,

        /// Output HTML path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Chart title
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,

        /// Optional HCL file overriding chart geometry and colors
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the parsed timeline and stream summaries
    Dump {
        /// Path to the log file
        input: PathBuf,

        /// Output as YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },
}

pub fn run(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Render {
            input,
            output,
            title,
            config,
        } => {
            let outcome = render(&input, &output, &title, config.as_deref())?;
            println!(
                "Wrote {} with {} chunk bars.",
                outcome.output.display(),
                outcome.chunk_bars
            );
            Ok(())
        }
        Command::Dump { input, yaml } => {
            let format = if yaml {
                DumpFormat::Yaml
            } else {
                DumpFormat::Json
            };
            dump(&input, format, &mut std::io::stdout().lock())
        }
    }
}
