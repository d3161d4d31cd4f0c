// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The subcommands mirror the screens of a GitHub user viewer: a profile
// view, a repository list, a follower list, and a combined summary.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "github-user-viewer",
    version = "0.1.0",
    about = "A CLI tool to view GitHub user profiles, repositories, and followers",
    long_about = "github-user-viewer looks up a GitHub account through the public REST API \
                  and shows its profile, its repositories sorted by stars, or its followers. \
                  Every command issues a single request and renders the result or an error."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (user, repos, followers, summary)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a user's profile (name, bio, location, counters)
    ///
    /// Example: github-user-viewer user octocat
    User {
        /// GitHub username to look up (e.g., octocat)
        ///
        /// This is a positional argument (required, no flag needed)
        username: String,

        /// Output the raw profile as JSON instead of the rendered view
        ///
        /// This is an optional flag: --json
        /// #[arg(long)] creates a flag from the field name
        #[arg(long)]
        json: bool,
    },

    /// List a user's public repositories, sorted by stars (descending)
    ///
    /// Example: github-user-viewer repos octocat
    Repos {
        /// GitHub username whose repositories to list
        ///
        /// This is a positional argument (required)
        username: String,

        /// Output the sorted repository list as JSON instead of the rendered view
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,
    },

    /// List the accounts following a user
    ///
    /// Example: github-user-viewer followers octocat
    Followers {
        /// GitHub username whose followers to list
        ///
        /// This is a positional argument (required)
        username: String,

        /// Output the follower list as JSON instead of the rendered view
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,
    },

    /// Show profile, top repositories, and followers in one view
    ///
    /// Fetches all three endpoints concurrently.
    ///
    /// Example: github-user-viewer summary octocat
    Summary {
        /// GitHub username to summarize
        username: String,

        /// Output everything as one JSON object instead of the rendered view
        #[arg(long)]
        json: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why use structs and enums?
//    - Structs group related data (like the CLI arguments)
//    - Enums represent choices (like "user OR repos OR followers")
//    - Both are core Rust types for organizing data
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. What does 'pub' mean?
//    - pub = public, meaning other modules can use this
//    - Without pub, items are private to this module
//
// 4. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
//
// 5. Why does every subcommand repeat the username field?
//    - Each variant's fields become that subcommand's own arguments
//    - Repeating the field keeps each command self-contained - you can
//      read one variant and know everything that command accepts
// -----------------------------------------------------------------------------
