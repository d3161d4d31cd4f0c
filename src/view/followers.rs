// src/view/followers.rs
// =============================================================================
// Renders the follower list for the terminal.
//
// Follower entries are abbreviated user objects, so the view is just the
// login and the avatar URL per follower, in the order the API returned
// them. An account nobody follows gets a friendly line, not an error.
// =============================================================================

use crate::github::Follower;

// Builds the follower list view as a String
//
// Example output:
//   👥 Followers (2):
//
//   @alice
//      https://example.com/a.png
//   @bob
//      https://example.com/b.png
pub fn render_followers(followers: &[Follower]) -> String {
    if followers.is_empty() {
        return "👥 No followers\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("👥 Followers ({}):\n\n", followers.len()));

    for follower in followers {
        out.push_str(&format!("@{}\n", follower.login));
        out.push_str(&format!("   {}\n", follower.avatar_url));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn follower(login: &str) -> Follower {
        Follower {
            id: 1,
            login: login.to_string(),
            avatar_url: format!("https://example.com/{}.png", login),
        }
    }

    #[test]
    fn test_render_follower_list() {
        let out = render_followers(&[follower("alice"), follower("bob")]);

        assert!(out.contains("Followers (2)"));
        assert!(out.contains("@alice"));
        assert!(out.contains("https://example.com/alice.png"));
        assert!(out.contains("@bob"));
    }

    #[test]
    fn test_followers_keep_api_order() {
        let out = render_followers(&[follower("zoe"), follower("adam")]);
        let zoe = out.find("@zoe").unwrap();
        let adam = out.find("@adam").unwrap();
        assert!(zoe < adam);
    }

    #[test]
    fn test_render_empty_follower_list() {
        let out = render_followers(&[]);
        assert!(out.contains("No followers"));
    }
}
