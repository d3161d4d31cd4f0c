// src/view/profile.rs
// =============================================================================
// Renders a user's profile for the terminal.
//
// The view shows the display name (falling back to the login when the
// account never set one), the avatar URL, then bio, location, and the
// three counters. Fields the API returned as null are simply left out -
// no "null", no empty placeholder lines.
// =============================================================================

use crate::github::UserProfile;

// Builds the profile view as a String
//
// Example output:
//   👤 The Octocat (@octocat)
//   🖼  Avatar: https://avatars.githubusercontent.com/u/583231
//   📝 GitHub's mascot
//   📍 San Francisco
//   👥 Followers: 9999 | Following: 9
//   📦 Public repos: 8
pub fn render_profile(profile: &UserProfile) -> String {
    let mut out = String::new();

    // Headline: display name when present, otherwise just the login
    match &profile.name {
        Some(name) => out.push_str(&format!("👤 {} (@{})\n", name, profile.login)),
        None => out.push_str(&format!("👤 @{}\n", profile.login)),
    }

    // A terminal can't show the image, so we show where it lives
    out.push_str(&format!("🖼  Avatar: {}\n", profile.avatar_url));

    // Optional fields: only rendered when the user filled them in
    if let Some(bio) = &profile.bio {
        out.push_str(&format!("📝 {}\n", bio));
    }
    if let Some(location) = &profile.location {
        out.push_str(&format!("📍 {}\n", location));
    }

    out.push_str(&format!(
        "👥 Followers: {} | Following: {}\n",
        profile.followers, profile.following
    ));
    out.push_str(&format!("📦 Public repos: {}\n", profile.public_repos));

    out
}
