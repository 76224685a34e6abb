use anyhow::Result;
use clap::Parser;
use termconf::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI --log-level flag takes precedence over DEBUG_LEVEL
    termconf::debug::init_log_bridge(cli.log_level);
    log::info!("termconf {}", termconf::VERSION);

    let code = cli::execute(&cli, &mut std::io::stdout().lock())?;
    if code != 0 {
        // Nothing to clean up; let the shell see the exit code
        std::process::exit(code);
    }
    Ok(())
}
