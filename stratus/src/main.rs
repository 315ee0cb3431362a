mod commands;
mod handlers;
mod output;

use clap::Parser;
use commands::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    handlers::handle_command(cli.command)
}
