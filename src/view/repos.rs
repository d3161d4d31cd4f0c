// src/view/repos.rs
// =============================================================================
// Renders the repository list for the terminal.
//
// The list arrives already sorted by stars (descending) from the fetch
// flow. One entry per repository: name, star count, and the description
// indented underneath when there is one. An account with no public
// repositories is a success case and gets a friendly line instead of an
// error.
// =============================================================================

use crate::github::Repo;

// Builds the repository list view as a String
//
// Example output:
//   📦 Repositories (2):
//
//   linguist                                 ⭐ 500
//      Language savant
//   hello-world                              ⭐ 2
pub fn render_repos(repos: &[Repo]) -> String {
    if repos.is_empty() {
        return "📦 No public repositories\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("📦 Repositories ({}):\n\n", repos.len()));

    for repo in repos {
        // {:<40} pads the name so the star counts line up in a column
        out.push_str(&format!(
            "{:<40} ⭐ {}\n",
            repo.name, repo.stargazers_count
        ));
        if let Some(description) = &repo.description {
            out.push_str(&format!("   {}\n", description));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u64, description: Option<&str>) -> Repo {
        Repo {
            id: 1,
            name: name.to_string(),
            stargazers_count: stars,
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_render_repo_list() {
        let repos = vec![
            repo("linguist", 500, Some("Language savant")),
            repo("hello-world", 2, None),
        ];
        let out = render_repos(&repos);

        assert!(out.contains("Repositories (2)"));
        assert!(out.contains("linguist"));
        assert!(out.contains("⭐ 500"));
        assert!(out.contains("Language savant"));
        assert!(out.contains("hello-world"));
    }

    #[test]
    fn test_render_repo_without_description_has_no_blank_detail_line() {
        let out = render_repos(&[repo("hello-world", 2, None)]);
        // Name line plus nothing indented underneath
        assert!(out.contains("hello-world"));
        assert!(!out.contains("\n   \n"));
    }

    #[test]
    fn test_render_empty_repo_list() {
        let out = render_repos(&[]);
        assert!(out.contains("No public repositories"));
    }
}
