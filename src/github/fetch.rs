// src/github/fetch.rs
// =============================================================================
// This module implements the three fetch flows of the viewer, plus the
// combined summary fetch.
//
// Each flow is the same shape, just a different endpoint and result type:
// 1. Build the endpoint URL for the username
// 2. Issue one GET, check the status, parse the JSON (get_json does this)
// 3. For repositories only: sort by star count, descending
//
// There is deliberately no caching, paging, or retrying here - every
// command maps to exactly one request per endpoint, and whatever page the
// API returns is what gets shown.
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling
// - try_join!: Run several futures concurrently, fail on the first error
// =============================================================================

use futures::try_join;
use reqwest::Client;
use serde::Serialize;

use super::client::{get_json, user_endpoint, ApiFailure};
use super::models::{sort_repos_by_stars, Follower, Repo, UserProfile};

// Fetches a user's profile
//
// Parameters:
//   client: shared reqwest client
//   api_base: API base URL (GITHUB_API in production, mock URL in tests)
//   username: the account to look up
pub async fn fetch_user(
    client: &Client,
    api_base: &str,
    username: &str,
) -> Result<UserProfile, ApiFailure> {
    let url = user_endpoint(api_base, username, None)?;
    get_json(client, url).await
}

// Fetches a user's public repositories, sorted by stars (descending)
//
// The sort happens here rather than in the renderer so that --json output
// and the rendered view agree on the order
pub async fn fetch_repos(
    client: &Client,
    api_base: &str,
    username: &str,
) -> Result<Vec<Repo>, ApiFailure> {
    let url = user_endpoint(api_base, username, Some("repos"))?;
    let mut repos: Vec<Repo> = get_json(client, url).await?;
    sort_repos_by_stars(&mut repos);
    Ok(repos)
}

// Fetches the accounts following a user (API order, no sorting)
pub async fn fetch_followers(
    client: &Client,
    api_base: &str,
    username: &str,
) -> Result<Vec<Follower>, ApiFailure> {
    let url = user_endpoint(api_base, username, Some("followers"))?;
    get_json(client, url).await
}

// Everything the summary view shows, bundled into one struct
//
// Serialize is derived so `summary --json` can print the whole thing as
// a single JSON object
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub profile: UserProfile,
    pub repos: Vec<Repo>,
    pub followers: Vec<Follower>,
}

// Fetches profile, repositories, and followers concurrently
//
// try_join! starts all three futures at once and waits for all of them.
// If any one fails, the whole summary fails with that error - the same
// mapping a single-view command would have shown.
pub async fn fetch_summary(
    client: &Client,
    api_base: &str,
    username: &str,
) -> Result<UserSummary, ApiFailure> {
    let (profile, repos, followers) = try_join!(
        fetch_user(client, api_base, username),
        fetch_repos(client, api_base, username),
        fetch_followers(client, api_base, username),
    )?;

    Ok(UserSummary {
        profile,
        repos,
        followers,
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is try_join!?
//    - A macro from the futures crate
//    - Takes several futures, runs them concurrently, returns a tuple of
//      all their Ok values - or the first Err
//    - Like Promise.all() in JavaScript, but typed
//
// 2. Why do the fetch functions take &Client?
//    - The client holds a connection pool; building one per request
//      would throw the pool away
//    - Borrowing (&) is enough - we only need to call methods on it
//
// 3. Why sort in fetch_repos instead of the renderer?
//    - The sorted list IS the result of the repos flow
//    - Both output modes (rendered view and --json) then share it
//
// 4. Why does every function take api_base?
//    - The tests below point these exact functions at a wiremock server
//    - No conditional compilation, no test-only seams in the logic
// -----------------------------------------------------------------------------
