use crate::SearchQuery;

#[derive(Debug)]
pub struct GitHubURL(String);

impl AsRef<str> for GitHubURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl GitHubURL {
    pub fn new(base_url: &str) -> Self {
        Self(base_url.to_string())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// Append a query parameter. `value` must already be percent-encoded.
    pub fn with_param(&self, key: &str, value: impl AsRef<str>) -> Self {
        let separator = if self.0.contains('?') { '&' } else { '?' };
        Self(format!("{}{}{}={}", self.0, separator, key, value.as_ref()))
    }

    /// Add the search parameters. Filter clauses are encoded one by one and
    /// joined with a literal `+`, which GitHub reads as the clause separator.
    pub fn with_search_query(&self, query: &SearchQuery) -> Self {
        let clauses = query.filter_clauses();
        let url = if clauses.is_empty() {
            Self(self.0.clone())
        } else {
            let encoded = clauses
                .iter()
                .map(|clause| urlencoding::encode(clause).into_owned())
                .collect::<Vec<_>>()
                .join("+");
            self.with_param("q", encoded)
        };

        url.with_param("sort", urlencoding::encode(&query.sort))
            .with_param("order", urlencoding::encode(&query.order))
            .with_param("page", (query.page + 1).to_string())
            .with_param("per_page", query.per_page.to_string())
    }
}
