//! Localized not-found page.

use market_core::Language;

use crate::page::{site_footer, site_header};
use crate::shell::{HeadContent, Shell};
use crate::styles::MARKET_STYLES;

/// Message shown when a listing cannot be resolved.
pub fn not_found_message(language: Language) -> &'static str {
    language.pick("Объявление не найдено", "Хабарландыру табылмады")
}

/// Complete not-found document, served with status 404.
pub fn render_not_found_page(language: Language) -> String {
    let message = not_found_message(language);
    let shell = Shell::new(
        language,
        HeadContent::new(message)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta("robots", "noindex")
            .with_style(MARKET_STYLES),
    )
    .with_body_start(site_header(language, "/"))
    .with_body_end(site_footer(language));

    format!(
        "{}<div class=\"not-found\" data-section=\"not-found\">{}</div>\n{}",
        shell.render_opening(),
        message,
        shell.render_closing()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(not_found_message(Language::Ru), "Объявление не найдено");
        assert_eq!(not_found_message(Language::Kk), "Хабарландыру табылмады");
    }

    #[test]
    fn test_not_found_page_is_complete_document() {
        let html = render_not_found_page(Language::Kk);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="kk">"#));
        assert!(html.contains("Хабарландыру табылмады"));
        assert!(html.contains(r#"content="noindex""#));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(!html.contains("data-section=\"gallery\""));
    }
}
