// src/github/client.rs
// =============================================================================
// This module owns the HTTP plumbing for talking to the GitHub API.
//
// Key functionality:
// - Builds one reqwest Client with sane defaults (timeout, User-Agent)
// - Builds endpoint URLs by joining onto a base URL
// - A generic get_json() that performs GET -> status check -> JSON parse
//   and maps every way that can fail into the ApiFailure enum
//
// GitHub rejects requests without a User-Agent header, so the client
// always sends one derived from the crate name and version.
//
// The API base is a parameter rather than a hard-coded constant so tests
// can point the same code at a local mock server.
//
// Rust concepts:
// - Generics with trait bounds: get_json works for any Deserialize type
// - Enums with Display: One failure taxonomy, one user-facing string each
// - match over fallible calls: every reqwest/serde error is categorized
//   by hand into a variant instead of being propagated as-is
// =============================================================================

use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Base URL of the real GitHub REST API
pub const GITHUB_API: &str = "https://api.github.com";

// Everything that can go wrong with one API request
//
// Each variant renders (via Display) as the exact string shown to the
// user, so all three fetch flows share one error mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// The endpoint returned 404 - the account does not exist
    NotFound,
    /// Any other non-2xx status code
    HttpStatus(u16),
    /// The request never completed (DNS, refused connection, ...)
    Network(String),
    /// The request timed out
    Timeout,
    /// Got a 2xx response but the body was not the JSON we expected
    Decode(String),
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::NotFound => write!(f, "User not found"),
            ApiFailure::HttpStatus(code) => write!(f, "GitHub API error: HTTP {}", code),
            ApiFailure::Network(cause) => write!(f, "Network error: {}", cause),
            ApiFailure::Timeout => write!(f, "Request timed out"),
            ApiFailure::Decode(cause) => write!(f, "Unexpected response from GitHub: {}", cause),
        }
    }
}

// ApiFailure is a real error type, so it can ride inside anyhow::Error too
impl std::error::Error for ApiFailure {}

// Builds the HTTP client used for every request
//
// Settings:
// - 10 second timeout per request
// - User-Agent from the crate name/version (GitHub requires one)
// - Accept header asking for GitHub's JSON media type
//
// expect() is fine here: the builder only fails on invalid TLS or header
// configuration, which would be a programming mistake, not a runtime
// condition
pub fn build_client() -> Client {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github+json"),
    );

    Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .default_headers(headers)
        .build()
        .expect("Failed to create HTTP client")
}

// Builds the URL for one of the per-user endpoints
//
// Parameters:
//   api_base: base URL of the API ("https://api.github.com" in production,
//             the mock server's URL in tests)
//   username: the account to query (percent-encoded by Url, never pasted
//             raw into the path)
//   resource: None for the profile itself, Some("repos") / Some("followers")
//             for the sub-resources
//
// Example:
//   user_endpoint("https://api.github.com", "octocat", Some("repos"))
//     -> https://api.github.com/users/octocat/repos
pub fn user_endpoint(api_base: &str, username: &str, resource: Option<&str>) -> Result<Url, ApiFailure> {
    let base = Url::parse(api_base)
        .map_err(|e| ApiFailure::Network(format!("invalid API base URL: {}", e)))?;

    let mut url = base;
    {
        // path_segments_mut() pushes segments one at a time and
        // percent-encodes anything unusual in them
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ApiFailure::Network("API base URL cannot have paths".to_string()))?;
        segments.push("users");
        segments.push(username);
        if let Some(resource) = resource {
            segments.push(resource);
        }
    }

    Ok(url)
}

// Performs one GET request and parses the JSON response
//
// This is the single fetch-check-parse pattern all three views share:
// 1. Issue the GET
// 2. Non-2xx status -> categorized ApiFailure
// 3. 2xx -> deserialize the body into T
//
// The generic parameter T is whatever shape the caller expects:
// UserProfile, Vec<Repo>, or Vec<Follower>.
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> Result<T, ApiFailure> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return Err(categorize_transport_error(e)),
    };

    let status = response.status();
    if !status.is_success() {
        return Err(categorize_status(status));
    }

    // Read the body as text first so a parse failure can report what
    // actually went wrong instead of a bare reqwest error
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return Err(categorize_transport_error(e)),
    };

    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(e) => Err(ApiFailure::Decode(e.to_string())),
    }
}

// Maps a non-2xx status code to a failure variant
//
// 404 gets its own variant because "the user does not exist" is the one
// failure the viewer has a dedicated message for; everything else just
// reports the code
fn categorize_status(status: StatusCode) -> ApiFailure {
    if status == StatusCode::NOT_FOUND {
        ApiFailure::NotFound
    } else {
        ApiFailure::HttpStatus(status.as_u16())
    }
}

// Maps a reqwest transport error to a failure variant
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure / connection refused
// - Reading the body failed midway
fn categorize_transport_error(error: reqwest::Error) -> ApiFailure {
    if error.is_timeout() {
        ApiFailure::Timeout
    } else if error.is_connect() {
        ApiFailure::Network("could not reach api.github.com".to_string())
    } else {
        ApiFailure::Network(error.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is DeserializeOwned?
//    - A serde trait bound meaning "can be deserialized without borrowing
//      from the input"
//    - We parse from a temporary String, so the result must own its data
//
// 2. Why match instead of the ? operator here?
//    - ? would propagate reqwest's own error type
//    - We want every failure converted into our ApiFailure taxonomy so
//      the rest of the program only ever sees one error shape
//
// 3. What is concat!/env! doing in user_agent()?
//    - env!("CARGO_PKG_NAME") reads the crate name at compile time
//    - concat! glues the pieces into one &'static str
//    - Result: a User-Agent like "github-user-viewer/0.1.0"
//
// 4. Why path_segments_mut() instead of format!()?
//    - Url percent-encodes each pushed segment
//    - format!("{}/users/{}", base, name) would happily build a broken
//      URL from a name containing '/' or '?'
//
// 5. Why is the API base a parameter?
//    - Production passes GITHUB_API
//    - Tests pass the URL of a wiremock server running on localhost
//    - Same code path either way, which is what makes the tests honest
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_endpoint() {
        let url = user_endpoint(GITHUB_API, "octocat", None).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat");
    }

    #[test]
    fn test_repos_endpoint() {
        let url = user_endpoint(GITHUB_API, "octocat", Some("repos")).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat/repos");
    }

    #[test]
    fn test_followers_endpoint() {
        let url = user_endpoint(GITHUB_API, "octocat", Some("followers")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/octocat/followers"
        );
    }

    #[test]
    fn test_endpoint_percent_encodes_username() {
        // Not a legal GitHub name, but the URL must still be well-formed
        let url = user_endpoint(GITHUB_API, "odd name", None).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/odd%20name");
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(ApiFailure::NotFound.to_string(), "User not found");
        assert_eq!(
            ApiFailure::HttpStatus(500).to_string(),
            "GitHub API error: HTTP 500"
        );
        assert_eq!(ApiFailure::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn test_categorize_status() {
        assert_eq!(categorize_status(StatusCode::NOT_FOUND), ApiFailure::NotFound);
        assert_eq!(
            categorize_status(StatusCode::INTERNAL_SERVER_ERROR),
            ApiFailure::HttpStatus(500)
        );
        assert_eq!(
            categorize_status(StatusCode::FORBIDDEN),
            ApiFailure::HttpStatus(403)
        );
    }
}
