//! Print an Argon2 hash for a password, for inserting users by hand.
//!
//! Usage: `hash-password <password>`, or pipe the password on stdin.

use std::io::{self, BufRead};
use std::process::ExitCode;

use server::auth::password::hash_password;

fn main() -> ExitCode {
    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line).is_err() {
                eprintln!("could not read password from stdin");
                return ExitCode::FAILURE;
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        eprintln!("usage: hash-password <password>");
        return ExitCode::FAILURE;
    }

    match hash_password(&password) {
        Ok(hash) => {
            println!("{hash}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("hashing failed: {e}");
            ExitCode::FAILURE
        }
    }
}
