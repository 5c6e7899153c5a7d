//! Search and paging query parameters for the link list.

use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::domain::entities::LinkQuery;

/// Query parameters for `GET /api/links`.
///
/// Paging values are parsed leniently: anything that is not an integer is
/// treated as absent, and [`LinkQuery::new`] applies defaults and clamping.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListLinksParams {
    #[serde(default)]
    pub q: Option<String>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<i64>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub offset: Option<i64>,
}

impl ListLinksParams {
    /// Converts the raw parameters into a repository query.
    pub fn into_query(self) -> LinkQuery {
        LinkQuery::new(self.q, self.limit, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(qs: &str) -> ListLinksParams {
        let uri: axum::http::Uri = format!("http://localhost/api/links?{qs}").parse().unwrap();
        axum::extract::Query::<ListLinksParams>::try_from_uri(&uri)
            .unwrap()
            .0
    }

    #[test]
    fn test_defaults() {
        let q = parse("").into_query();
        assert_eq!(q.limit, 50);
        assert_eq!(q.offset, 0);
        assert!(q.search.is_none());
    }

    #[test]
    fn test_explicit_values() {
        let q = parse("q=abc&limit=10&offset=20").into_query();
        assert_eq!(q.search.as_deref(), Some("abc"));
        assert_eq!(q.limit, 10);
        assert_eq!(q.offset, 20);
    }

    #[test]
    fn test_limit_clamped_to_max() {
        assert_eq!(parse("limit=1000").into_query().limit, 100);
    }

    #[test]
    fn test_unparsable_values_use_defaults() {
        let q = parse("limit=abc&offset=xyz").into_query();
        assert_eq!(q.limit, 50);
        assert_eq!(q.offset, 0);
    }

    #[test]
    fn test_zero_limit_uses_default() {
        assert_eq!(parse("limit=0").into_query().limit, 50);
    }

    #[test]
    fn test_empty_search_is_ignored() {
        assert!(parse("q=").into_query().search.is_none());
    }
}
