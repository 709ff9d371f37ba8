use std::io;

use clap::Parser;

mod cli;
mod commands;
mod logging;
mod output;

use cli::Cli;

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = io::stdout();
    let stderr = io::stderr();
    commands::run(cli, &mut stdout.lock(), &mut stderr.lock())
}
