//! Listing header: title, meta line, price and actions.

use market_catalog::format::format_number;

use crate::detail::DetailPage;
use crate::escape::escape_html;

/// Favorite and share buttons. The share button carries its payload.
pub fn render_actions(page: &DetailPage) -> String {
    let language = page.language;
    let (class, label) = if page.view.is_favorite {
        (
            "action-favorite action-favorite--active",
            language.pick("В избранном", "Таңдаулыларда"),
        )
    } else {
        ("action-favorite", language.pick("В избранное", "Таңдаулыларға"))
    };

    format!(
        r#"<div class="listing-actions">
        <button type="button" class="{class}" data-action="toggle-favorite" aria-pressed="{pressed}">&#9829; {label}</button>
        <button type="button" class="action-share" data-action="share" data-share="{share}">{share_label}</button>
    </div>"#,
        class = class,
        pressed = page.view.is_favorite,
        label = label,
        share = escape_html(&page.share.to_json()),
        share_label = language.pick("Поделиться", "Бөлісу"),
    )
}

/// Render the header section.
pub fn render_header(page: &DetailPage) -> String {
    let language = page.language;
    let featured = if page.listing.is_featured {
        format!(
            r#"<span class="badge badge-featured">{}</span>"#,
            language.pick("Топ", "Топ")
        )
    } else {
        String::new()
    };

    let original = page
        .original_price
        .as_ref()
        .map(|p| format!(r#"<span class="price-original">{}</span>"#, escape_html(p)))
        .unwrap_or_default();

    format!(
        r#"<section class="listing-header" data-section="header">
    {featured}
    <h1 class="listing-title">{title}</h1>
    <p class="listing-meta">
        <span class="listing-city">{city}</span>
        <span class="listing-date">{date}</span>
        <span class="listing-views">{views} {views_label}</span>
        <span class="listing-id">ID: {id}</span>
    </p>
    <div class="listing-header-price">
        <span class="price-current">{price}</span>
        {original}
    </div>
    {actions}
</section>"#,
        featured = featured,
        title = escape_html(&page.title),
        city = escape_html(&page.city),
        date = page.date,
        views = format_number(page.listing.views as i64, language),
        views_label = language.pick("просмотров", "қаралым"),
        id = escape_html(page.listing.id.as_str()),
        price = escape_html(&page.price),
        original = original,
        actions = render_actions(page),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::tests::page;
    use market_core::Language;

    #[test]
    fn test_header_featured_listing() {
        let html = render_header(&page("1", Language::Ru));
        assert!(html.contains("badge-featured"));
        assert!(html.contains(r#"<h1 class="listing-title">iPhone 13 Pro 256 ГБ</h1>"#));
        assert!(html.contains("1\u{a0}284 просмотров"));
        assert!(html.contains("ID: 1"));
        assert!(html.contains("395 000 ₸"));
        assert!(html.contains("420 000 ₸"));
    }

    #[test]
    fn test_header_plain_listing() {
        let html = render_header(&page("3", Language::Kk));
        assert!(!html.contains("badge-featured"));
        assert!(!html.contains("price-original"));
        assert!(html.contains("Шымкент"));
        assert!(html.contains("Бөлісу"));
    }

    #[test]
    fn test_actions_reflect_favorite_state() {
        let mut page = page("3", Language::Ru);
        assert!(render_actions(&page).contains(r#"aria-pressed="false""#));
        page.view.toggle_favorite();
        let html = render_actions(&page);
        assert!(html.contains("action-favorite--active"));
        assert!(html.contains("В избранном"));
    }

    #[test]
    fn test_share_payload_escaped_in_attribute() {
        let html = render_actions(&page("3", Language::Ru));
        assert!(html.contains("data-share=\"{&quot;title&quot;:"));
    }
}
