use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod rename;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stderr().is_terminal();

    if !cli.path_name.is_file() && !cli.path_name.is_dir() {
        eprintln!("Please provide a valid file name or folder name.");
        process::exit(1);
    }

    let result = rename::handle_rename(
        &cli.path_name,
        &cli.output_folder,
        &cli.prefix,
        &cli.log_file,
        cli.log_level,
        cli.strict,
        cli.output.map(Into::into),
        use_color,
    );

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        },
    }
}
