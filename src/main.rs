//! CLI entry point for running tile plane command scripts

use clap::Parser;
use tileplane::io::cli::{Cli, ScriptRunner};
use tileplane::io::logging::init_logging;

fn main() -> tileplane::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut runner = ScriptRunner::new(cli);
    runner.process()
}
