//! # Stockroom binary
//!
//! The binary is intentionally thin: everything lives in the `stockroom`
//! library, and `cli/` only parses arguments, loads configuration, installs
//! logging and then either serves HTTP or runs a maintenance command.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
