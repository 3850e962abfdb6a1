//! Resource path construction for the GitHub REST API.
use urlencoding::encode;

/// Path of the forks collection for a repository addressed by owner and name.
pub fn repository_forks(owner: &str, name: &str) -> String {
    format!("repos/{}/{}/forks", encode(owner), encode(name))
}

/// Path of the forks collection for a repository addressed by id.
pub fn repository_forks_by_id(id: u64) -> String {
    format!("repositories/{id}/forks")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forks_path_by_owner_and_name() {
        assert_eq!(
            repository_forks("octocat", "Hello-World"),
            "repos/octocat/Hello-World/forks"
        );
    }

    #[test]
    fn forks_path_by_id() {
        assert_eq!(repository_forks_by_id(1296269), "repositories/1296269/forks");
    }

    #[test]
    fn forks_path_encodes_segments() {
        assert_eq!(
            repository_forks("some org", "a#b"),
            "repos/some%20org/a%23b/forks"
        );
    }
}
