use writer::commands;
use writer::config::WriterConfig;
use writer::error::{Result, WriterError};
use writer::syslog::SysLogger;

mod args;
use args::{Cli, USAGE};

fn main() {
    if let Err(e) = run() {
        if let WriterError::InvalidArgumentCount { .. } = e {
            eprint!("{}", USAGE);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = WriterConfig::from_env();
    // Only fails if a logger is already installed, which cannot happen this early.
    SysLogger::init(config.log_level).ok();

    let cli = Cli::from_argv(std::env::args_os());
    commands::run(cli.args)?;
    Ok(())
}
