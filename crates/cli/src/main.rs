use std::io;

use clap::Parser;

use ledger_balance_cli::{Cli, config::LOG_JSON_ENV, run};
use ledger_balance_observability::LogFormat;

fn main() -> anyhow::Result<()> {
    let log_format = LogFormat::from_env_value(std::env::var(LOG_JSON_ENV).ok().as_deref());
    ledger_balance_observability::init_with(log_format);

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run(&cli, stdin.lock(), &mut stdout)
}
