//! Request options and filters for list operations.
use serde::{Deserialize, Serialize};

/// Pagination controls for list requests.
///
/// The default means "fetch all pages with server defaults".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApiOptions {
    /// Number of items requested per page.
    pub page_size: Option<u32>,

    /// Page to start fetching from.
    pub start_page: Option<u32>,

    /// Maximum number of pages to fetch.
    pub page_count: Option<u32>,
}

/// Sort order of a fork listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ForkSort {
    /// Most recently created forks first.
    Newest,
    /// Oldest forks first.
    Oldest,
    /// Forks with the most stargazers first.
    Stargazers,
    /// Forks with the most watchers first.
    Watchers,
}

impl ForkSort {
    /// Query-parameter value of this sort order.
    fn as_str(self) -> &'static str {
        match self {
            ForkSort::Newest => "newest",
            ForkSort::Oldest => "oldest",
            ForkSort::Stargazers => "stargazers",
            ForkSort::Watchers => "watchers",
        }
    }
}

impl std::fmt::Display for ForkSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ForkSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(ForkSort::Newest),
            "oldest" => Ok(ForkSort::Oldest),
            "stargazers" => Ok(ForkSort::Stargazers),
            "watchers" => Ok(ForkSort::Watchers),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

/// Filter narrowing a fork listing.
///
/// Absence of a filter means no extra query parameters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ForkListFilter {
    /// Sort order applied by the server.
    pub sort: Option<ForkSort>,
}

impl ForkListFilter {
    /// Convert the filter to query parameters.
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(sort) = self.sort {
            params.push(("sort".to_string(), sort.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_round_trips_through_str() {
        for sort in [
            ForkSort::Newest,
            ForkSort::Oldest,
            ForkSort::Stargazers,
            ForkSort::Watchers,
        ] {
            assert_eq!(sort.to_string().parse::<ForkSort>(), Ok(sort));
        }
    }

    #[test]
    fn sort_rejects_unknown_value() {
        assert!("starcounts".parse::<ForkSort>().is_err());
    }

    #[test]
    fn filter_with_sort_becomes_query_pair() {
        let filter = ForkListFilter {
            sort: Some(ForkSort::Stargazers),
        };
        assert_eq!(
            filter.to_query(),
            vec![("sort".to_string(), "stargazers".to_string())]
        );
    }

    #[test]
    fn default_filter_adds_nothing() {
        assert!(ForkListFilter::default().to_query().is_empty());
    }
}
