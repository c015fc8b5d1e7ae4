use anyhow::Result;
use clap::Parser;
use ib_tweaker::cli::{self, Cli, CliResult};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config (applied later).
    ib_tweaker::debug::init_log_bridge(cli.log_level.map(|level| level.to_level_filter()));

    log::info!("Starting ib-tweaker {}", ib_tweaker::VERSION);

    match cli::process_cli(cli) {
        CliResult::Done => Ok(()),
        CliResult::Exit(code) => {
            // Nothing needs dropping beyond the logger; flush it and leave with the code.
            log::logger().flush();
            std::process::exit(code);
        }
    }
}
