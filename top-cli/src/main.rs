//! A command line interface to *Team Orienteering Problem* solver.

#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use clap::Command;
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, commands::create_write_buffer),
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("Team Orienteering Problem Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to Team Orienteering Problem solver")
        .subcommand(get_solve_app())
}
