use clap::Parser;
use probe_export::{
    app,
    cli::Args,
    runner::{CommandRunner, exit_code},
};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Start CLI application with params: {:?}", args);
    let mut runner = CommandRunner::new();
    runner.set_do_call(move || app::run_cli(&args));
    std::process::exit(exit_code(runner.run()));
}
