use std::process::ExitCode;

use clap::Parser;

use mapplot::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    mapplot::report(mapplot::run(&cli), &mut std::io::stderr())
}
