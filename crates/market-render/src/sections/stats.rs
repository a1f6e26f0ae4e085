//! Listing statistics.

use market_catalog::format::format_number;

use crate::detail::DetailPage;
use crate::escape::escape_html;
use crate::sections::render_actions;

/// Render publication date, id and view count.
pub fn render_stats(page: &DetailPage) -> String {
    let language = page.language;
    format!(
        r#"<section class="listing-stats" data-section="stats">
    <dl>
        <dt>{published_label}</dt><dd>{date}</dd>
        <dt>{id_label}</dt><dd>{id}</dd>
        <dt>{views_label}</dt><dd>{views}</dd>
    </dl>
    {actions}
</section>"#,
        published_label = language.pick("Опубликовано", "Жарияланды"),
        date = page.date,
        id_label = language.pick("Номер объявления", "Хабарландыру нөмірі"),
        id = escape_html(page.listing.id.as_str()),
        views_label = language.pick("Просмотры", "Қаралымдар"),
        views = format_number(page.listing.views as i64, language),
        actions = render_actions(page),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::tests::page;
    use market_core::Language;

    #[test]
    fn test_stats_kazakh() {
        let html = render_stats(&page("8", Language::Kk));
        assert!(html.contains("<dd>2024 ж. 18 ақп.</dd>"));
        assert!(html.contains("<dd>5\u{a0}230</dd>"));
        assert!(html.contains("Жарияланды"));
    }

    #[test]
    fn test_stats_russian_date() {
        let html = render_stats(&page("8", Language::Ru));
        assert!(html.contains("<dd>18 февр. 2024 г.</dd>"));
    }
}
