// src/github/models.rs
// =============================================================================
// This module defines the data structures for GitHub API responses.
//
// The API returns enormous JSON objects; serde lets us define structs with
// only the fields our views display and it simply ignores the rest. If a
// view ever needs another field, we add it to the struct and serde picks
// it up.
//
// Three payload shapes, one per view:
// - UserProfile: GET /users/{username}
// - Vec<Repo>: GET /users/{username}/repos
// - Vec<Follower>: GET /users/{username}/followers
//
// Rust concepts:
// - Derive macros: Serialize/Deserialize generate the JSON conversion code
// - Option<T>: For fields the API may return as null
// - Sorting with sort_by_key: Stable sort, so ties keep their API order
// =============================================================================

use serde::{Deserialize, Deserializer, Serialize};

// A user's profile from GET /users/{username}
//
// We derive Serialize as well as Deserialize so the --json flag can print
// back exactly the data the renderer sees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// The account's login handle (always present)
    pub login: String,
    /// The display name - null for accounts that never set one
    pub name: Option<String>,
    /// URL of the account's avatar image
    pub avatar_url: String,
    /// Free-form biography text, often null
    pub bio: Option<String>,
    /// Self-reported location, often null
    pub location: Option<String>,
    /// How many accounts follow this user
    pub followers: u64,
    /// How many accounts this user follows
    pub following: u64,
    /// Number of public repositories
    pub public_repos: u64,
}

// One repository from GET /users/{username}/repos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    /// Numeric repository id (stable across renames)
    pub id: u64,
    /// Repository name (without the owner prefix)
    pub name: String,
    /// Star count - treated as 0 when the field is missing or null
    ///
    /// #[serde(default)] fills in 0 when the field is absent; the custom
    /// deserializer turns an explicit null into 0 as well
    #[serde(default, deserialize_with = "null_as_zero")]
    pub stargazers_count: u64,
    /// Repository description, null when the owner never wrote one
    pub description: Option<String>,
}

// One follower from GET /users/{username}/followers
//
// Follower entries are abbreviated user objects - they carry the login and
// avatar but none of the profile fields like name or bio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follower {
    /// Numeric account id
    pub id: u64,
    /// The follower's login handle
    pub login: String,
    /// URL of the follower's avatar image
    pub avatar_url: String,
}

// Deserializes a number that may be JSON null, mapping null to 0
//
// Deserializing into Option<u64> first accepts both a number and null;
// unwrap_or(0) then collapses the null case
fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let maybe_count = Option::<u64>::deserialize(deserializer)?;
    Ok(maybe_count.unwrap_or(0))
}

// Sorts repositories by star count, most-starred first
//
// sort_by_key is a stable sort: repositories with the same star count
// keep the order the API returned them in. Reverse flips the comparison
// so the largest counts come first.
pub fn sort_repos_by_stars(repos: &mut [Repo]) {
    repos.sort_by_key(|repo| std::cmp::Reverse(repo.stargazers_count));
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<String> for some fields?
//    - The API returns null for profile fields the user never filled in
//    - Option<T> is Rust's type-safe "maybe a value" - Some(text) or None
//    - Deserializing null into a plain String would be an error;
//      into Option<String> it becomes None
//
// 2. What does #[serde(default)] do?
//    - If the field is missing from the JSON, use the type's default
//      value instead of failing
//    - For u64 the default is 0, so an unstarred repo still sorts and
//      renders sensibly
//
// 3. Why only these fields?
//    - serde ignores JSON fields that our struct doesn't mention
//    - The real payloads have dozens of fields; we keep just what the
//      views render
//
// 4. What is std::cmp::Reverse?
//    - A tiny wrapper that inverts an ordering
//    - sort_by_key(|r| Reverse(r.stargazers_count)) sorts descending
//    - Cleaner than sorting ascending and reversing the Vec afterwards
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_profile() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "bio": "GitHub's mascot",
            "location": "San Francisco",
            "followers": 9999,
            "following": 9,
            "public_repos": 8,
            "company": "GitHub"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.followers, 9999);
        assert_eq!(profile.public_repos, 8);
    }

    #[test]
    fn test_deserialize_profile_with_nulls() {
        // Accounts that never filled in their profile return null for
        // name, bio, and location
        let json = r#"{
            "login": "ghost",
            "name": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/10137",
            "bio": null,
            "location": null,
            "followers": 0,
            "following": 0,
            "public_repos": 0
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.login, "ghost");
        assert!(profile.name.is_none());
        assert!(profile.bio.is_none());
        assert!(profile.location.is_none());
    }

    #[test]
    fn test_deserialize_repo_without_star_count() {
        let json = r#"{"id": 1, "name": "hello-world", "description": null}"#;
        let repo: Repo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.stargazers_count, 0);
        assert!(repo.description.is_none());
    }

    #[test]
    fn test_deserialize_repo_with_null_star_count() {
        let json = r#"{"id": 1, "name": "hello-world", "stargazers_count": null, "description": null}"#;
        let repo: Repo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.stargazers_count, 0);
    }

    #[test]
    fn test_deserialize_follower_list() {
        let json = r#"[
            {"id": 1, "login": "alice", "avatar_url": "https://example.com/a.png"},
            {"id": 2, "login": "bob", "avatar_url": "https://example.com/b.png"}
        ]"#;

        let followers: Vec<Follower> = serde_json::from_str(json).unwrap();
        assert_eq!(followers.len(), 2);
        assert_eq!(followers[0].login, "alice");
        assert_eq!(followers[1].login, "bob");
    }

    fn repo(id: u64, name: &str, stars: u64) -> Repo {
        Repo {
            id,
            name: name.to_string(),
            stargazers_count: stars,
            description: None,
        }
    }

    #[test]
    fn test_sort_repos_descending() {
        let mut repos = vec![repo(1, "few", 3), repo(2, "many", 120), repo(3, "some", 42)];
        sort_repos_by_stars(&mut repos);

        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["many", "some", "few"]);
    }

    #[test]
    fn test_sort_repos_ties_keep_api_order() {
        // Stable sort: equal star counts stay in the order the API sent
        let mut repos = vec![
            repo(1, "first", 5),
            repo(2, "second", 5),
            repo(3, "third", 5),
        ];
        sort_repos_by_stars(&mut repos);

        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
