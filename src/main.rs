//! speech2text CLI entry point

use std::process::ExitCode;

use clap::Parser;

use speech2text::cli::{app::run, args::Cli};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    run(cli).await
}
