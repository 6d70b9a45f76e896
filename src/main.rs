use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = config_swap::cli::Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = config_swap::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

// `RUST_LOG` overrides the level picked by `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
