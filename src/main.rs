// src/main.rs

use tscrelay::errors::RelayError;
use tscrelay::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!("tscrelay error: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run_main() -> Result<(), RelayError> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await?;
    Ok(())
}
