//! Tutorial Section Source
//!
//! Loads and renders a tutorial section by slug. Rendering includes code
//! highlighting, which is the expensive part the deferred-loading demo
//! keeps off the first paint.

use crate::content;
use crate::error::{AppError, AppResult};
use crate::markdown::parse_markdown;
use super::latency;

/// Rendered HTML of the section `slug`
pub fn render_section(slug: &str) -> AppResult<String> {
    let section = content::find_section(slug).ok_or_else(|| AppError::UnknownSection(slug.to_string()))?;
    Ok(parse_markdown(section.body))
}

/// `render_section` after `delay_ms` of simulated latency
pub async fn load_section(slug: String, delay_ms: u32) -> AppResult<String> {
    latency(delay_ms).await;
    let html = render_section(&slug)?;
    log::debug!("[SECTIONS] Loaded '{}' ({} bytes)", slug, html.len());
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_known_section() {
        let html = render_section(content::DEFERRED_SECTION).unwrap();
        assert!(html.contains("<h2>"));
    }

    #[test]
    fn test_render_unknown_section() {
        let err = render_section("no-such-section").unwrap_err();
        assert!(matches!(err, AppError::UnknownSection(ref s) if s == "no-such-section"));
    }
}
