//! Similar listings strip.

use crate::card::NO_IMAGE;
use crate::detail::{DetailPage, SimilarItem};
use crate::escape::escape_html;

fn render_similar_card(item: &SimilarItem) -> String {
    format!(
        r#"<article class="similar-card">
        <a href="{href}" class="similar-link">
            <img src="{image}" alt="{title}" class="similar-image" loading="lazy">
            <div class="similar-info">
                <h3 class="similar-title">{title}</h3>
                <p class="similar-price">{price}</p>
                <p class="similar-city">{city}</p>
            </div>
        </a>
    </article>"#,
        href = escape_html(&item.href),
        image = escape_html(item.image.as_deref().unwrap_or(NO_IMAGE)),
        title = escape_html(&item.title),
        price = escape_html(&item.price),
        city = escape_html(&item.city),
    )
}

/// Render the similar listings section; empty when there are none.
pub fn render_similar(page: &DetailPage) -> String {
    if page.similar.is_empty() {
        return r#"<section class="similar-listings similar-listings--empty" data-section="similar"></section>"#
            .to_string();
    }

    let cards: String = page.similar.iter().map(render_similar_card).collect();

    format!(
        r#"<section class="similar-listings" data-section="similar">
    <h2>{heading}</h2>
    <div class="similar-grid">
        {cards}
    </div>
</section>"#,
        heading = page.language.pick("Похожие объявления", "Ұқсас хабарландырулар"),
        cards = cards
    )
}
