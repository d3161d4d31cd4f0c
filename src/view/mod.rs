// src/view/mod.rs
// =============================================================================
// This module contains the terminal rendering for each view.
//
// Submodules:
// - profile: renders a user's profile fields
// - repos: renders the repository list (already sorted by stars)
// - followers: renders the follower list
//
// Renderers are plain functions from data to String - they never print and
// never touch the network. main.rs decides where the text goes. That split
// keeps them trivially unit-testable.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod followers;
mod profile;
mod repos;

// Re-export public items from submodules
// This lets users write `view::render_profile()` instead of
// `view::profile::render_profile()`
pub use followers::render_followers;
pub use profile::render_profile;
pub use repos::render_repos;
