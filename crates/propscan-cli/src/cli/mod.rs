use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `propscan` binary.
#[derive(Debug, Parser)]
#[command(
    name = "propscan",
    version,
    about = "Print the props of exported React components as JSON"
)]
pub struct Cli {
    /// Source files to analyze (.tsx, .jsx, .ts, .js)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Base tracing level before config directives are added.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
