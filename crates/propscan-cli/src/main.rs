use anyhow::Context;
use clap::Parser;
use propscan_config::PropscanConfig;

mod analyze;
mod cli;

fn main() {
    if let Err(error) = run() {
        eprintln!("propscan error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = PropscanConfig::load_with_dotenv().context("failed to load configuration")?;
    init_tracing(cli.log_level(), &config)?;

    let results = analyze::analyze_paths(&cli.files);
    let total = results.len();
    let mut files = Vec::with_capacity(total);
    let mut failed = 0usize;
    for result in results {
        match result {
            Ok(file) => files.push(file),
            Err(error) => {
                failed += 1;
                eprintln!("propscan error: {error:#}");
            }
        }
    }

    let json = analyze::render(&files, cli.pretty || config.output.pretty)
        .context("failed to serialize output")?;
    println!("{json}");

    if failed > 0 {
        anyhow::bail!("{failed} of {total} files failed");
    }
    Ok(())
}

/// `PROPSCAN_LOG` wins; otherwise the base level plus the configured
/// subsystem directives. Events go to stderr.
fn init_tracing(level: &str, config: &PropscanConfig) -> anyhow::Result<()> {
    let filter = match tracing_subscriber::EnvFilter::try_from_env("PROPSCAN_LOG") {
        Ok(filter) => filter,
        Err(_) => {
            let directives = config
                .log_directives()
                .map_or_else(|| level.to_string(), |extra| format!("{level},{extra}"));
            tracing_subscriber::EnvFilter::try_new(&directives)
                .with_context(|| format!("invalid log directives '{directives}'"))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
