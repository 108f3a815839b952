use anyhow::{Context, Result};
use tracing::debug;

/// Site root prepended to relative gem links.
pub const RUBYGEMS_ROOT: &str = "http://rubygems.org";

const RUBYGEMS_SEARCH: &str = "http://rubygems.org/search?utf8=%E2%9C%93&query=";

/// Fetch the search results page for an already-joined query string.
///
/// One blocking GET, transport errors only; HTTP error statuses still
/// return their body. The response is consumed into a `String`, so the
/// connection is released on every exit path.
pub fn search_page(query: &str) -> Result<String> {
    let url = format!("{}{}", RUBYGEMS_SEARCH, query);
    debug!("GET {}", url);

    // No request timeout: a hung fetch blocks the command.
    let client = reqwest::blocking::Client::builder()
        .timeout(None)
        .build()
        .context("failed to build HTTP client")?;

    let body = client
        .get(&url)
        .send()?
        .text()
        .context("failed to fetch RubyGems search page")?;

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_shape() {
        let url = format!("{}{}", RUBYGEMS_SEARCH, "http+client");
        assert_eq!(url, "http://rubygems.org/search?utf8=%E2%9C%93&query=http+client");
    }

    #[test]
    fn root_has_no_trailing_slash() {
        assert!(!RUBYGEMS_ROOT.ends_with('/'));
    }
}
