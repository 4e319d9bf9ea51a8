use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use url::Url;

use crate::error::CliError;
use crate::error::Result;

/// Schemes written without `//` that are passed through untouched
const OPAQUE_SCHEMES: &[&str] = &["about:", "data:"];

pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();

    let lower = trimmed.to_lowercase();
    if trimmed.contains("://") || OPAQUE_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return trimmed.to_string();
    }

    // Add https:// if missing
    format!("https://{}", trimmed)
}

/// Only empty input is rejected; anything else goes to the browser as-is
pub fn validate_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(CliError::InvalidArguments(
            "URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Turn a link's href into an absolute URL relative to the current page.
///
/// Hrefs starting with "http" are taken as-is. If the current URL cannot be
/// parsed, the href is appended to its `scheme://host` prefix.
pub fn resolve_link(current_url: &str, href: &str) -> String {
    let href = href.trim();
    if href.starts_with("http") {
        return href.to_string();
    }

    if let Ok(joined) = Url::parse(current_url).and_then(|base| base.join(href)) {
        return joined.to_string();
    }

    let origin = current_url.split('/').take(3).collect::<Vec<_>>().join("/");
    format!("{}{}", origin, href)
}

pub fn current_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .expect("format timestamp")
}
