// src/github/mod.rs
// =============================================================================
// This module handles all communication with the GitHub REST API.
//
// Submodules:
// - client: HTTP client construction, endpoint URLs, failure taxonomy
// - models: serde structs for the user / repo / follower payloads
// - fetch: the per-view fetch flows (and the combined summary fetch)
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod client;
mod fetch;
mod models;

// Re-export public items from submodules
// This lets users write `github::fetch_user()` instead of
// `github::fetch::fetch_user()`
pub use client::{build_client, ApiFailure, GITHUB_API};
pub use fetch::{fetch_followers, fetch_repos, fetch_summary, fetch_user, UserSummary};
pub use models::{Follower, Repo, UserProfile};
