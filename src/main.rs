// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Each handler runs one fetch flow and renders the result
// 4. Exit with proper code (0 = success, 1 = API-reported failure,
//    2 = unexpected error)
//
// Rust concepts used:
// - async/await: Because the fetch flows are network calls
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod github;        // src/github/ - GitHub API client, models, fetch flows
mod view;          // src/view/ - terminal rendering for each view

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method
use serde::Serialize;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

use github::ApiFailure;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = the view rendered successfully
//   Ok(1) = the API reported a user-facing failure (e.g. user not found)
//   Ok(2) = internal error
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // One reqwest client for whichever command runs; it holds the
    // timeout, the User-Agent, and the connection pool
    let client = github::build_client();

    // Match on which subcommand was used
    // Each branch handles a different view (user, repos, followers, summary)
    match cli.command {
        Commands::User { username, json } => {
            handle_user(&client, &username, json).await
        }
        Commands::Repos { username, json } => {
            handle_repos(&client, &username, json).await
        }
        Commands::Followers { username, json } => {
            handle_followers(&client, &username, json).await
        }
        Commands::Summary { username, json } => {
            handle_summary(&client, &username, json).await
        }
    }
}

// Handles the 'user' subcommand: one GET, then the profile view
async fn handle_user(client: &reqwest::Client, username: &str, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Looking up user: {}\n", username);
    }

    match github::fetch_user(client, github::GITHUB_API, username).await {
        Ok(profile) => {
            if json {
                print_json(&profile)?;
            } else {
                print!("{}", view::render_profile(&profile));
            }
            Ok(0)
        }
        Err(failure) => Ok(report_failure(&failure)),
    }
}

// Handles the 'repos' subcommand: one GET, sort by stars, then the list view
async fn handle_repos(client: &reqwest::Client, username: &str, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Fetching repositories for: {}\n", username);
    }

    match github::fetch_repos(client, github::GITHUB_API, username).await {
        Ok(repos) => {
            if json {
                // The JSON output is the sorted list, same order as the view
                print_json(&repos)?;
            } else {
                print!("{}", view::render_repos(&repos));
            }
            Ok(0)
        }
        Err(failure) => Ok(report_failure(&failure)),
    }
}

// Handles the 'followers' subcommand: one GET, then the list view
async fn handle_followers(client: &reqwest::Client, username: &str, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Fetching followers of: {}\n", username);
    }

    match github::fetch_followers(client, github::GITHUB_API, username).await {
        Ok(followers) => {
            if json {
                print_json(&followers)?;
            } else {
                print!("{}", view::render_followers(&followers));
            }
            Ok(0)
        }
        Err(failure) => Ok(report_failure(&failure)),
    }
}

// Handles the 'summary' subcommand: three concurrent GETs, all views stacked
async fn handle_summary(client: &reqwest::Client, username: &str, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Summarizing user: {}\n", username);
    }

    match github::fetch_summary(client, github::GITHUB_API, username).await {
        Ok(summary) => {
            if json {
                print_json(&summary)?;
            } else {
                print!("{}", view::render_profile(&summary.profile));
                println!();
                print!("{}", view::render_repos(&summary.repos));
                println!();
                print!("{}", view::render_followers(&summary.followers));
            }
            Ok(0)
        }
        Err(failure) => Ok(report_failure(&failure)),
    }
}

// Prints any serializable value as pretty JSON to stdout
//
// In --json mode this is the only thing that touches stdout, so the
// output can be piped straight into jq or a file
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value)?;
    println!("{}", json_output);
    Ok(())
}

// Prints the user-facing failure message and returns the exit code for it
//
// All failures the API can report funnel through here, so every command
// shows errors the same way
fn report_failure(failure: &ApiFailure) -> i32 {
    eprintln!("❌ {}", failure);
    1
}
