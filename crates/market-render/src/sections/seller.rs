//! Seller card.

use market_catalog::format::ru_plural;
use market_core::Language;

use crate::detail::{DetailPage, MEMBER_SINCE};
use crate::escape::escape_html;

fn deals_label(deals: u32, language: Language) -> &'static str {
    match language {
        Language::Ru => ru_plural(i64::from(deals), "сделка", "сделки", "сделок"),
        Language::Kk => "мәміле",
    }
}

/// Render the seller section. The phone stays masked until revealed;
/// sellers without a phone get no phone block.
pub fn render_seller(page: &DetailPage) -> String {
    let language = page.language;
    let seller = &page.listing.seller;

    let phone = if seller.phone.trim().is_empty() {
        String::new()
    } else {
        let show_phone = if page.view.is_phone_visible {
            String::new()
        } else {
            format!(
                r#"<button type="button" class="seller-show-phone" data-action="show-phone">{}</button>"#,
                language.pick("Показать телефон", "Телефонды көрсету")
            )
        };
        format!(
            r#"<div class="seller-phone">
        <span class="phone-number">{}</span>
        {}
    </div>"#,
            escape_html(&page.displayed_phone()),
            show_phone
        )
    };

    format!(
        r#"<section class="seller-info" data-section="seller">
    <h2 class="seller-name">{name}</h2>
    <p class="seller-rating">&#9733; {rating:.1} · {deals} {deals_label}</p>
    <p class="seller-member">{member_label} {member_since}</p>
    <p class="seller-response">{response}</p>
    <p class="seller-online">{online}</p>
    {phone}
</section>"#,
        name = escape_html(&seller.name),
        rating = seller.rating,
        deals = seller.deals(),
        deals_label = deals_label(seller.deals(), language),
        member_label = language.pick("На сайте с", "Сайтта"),
        member_since = MEMBER_SINCE,
        response = language.pick(
            "Отвечает обычно в течении часа",
            "Әдетте бір сағат ішінде жауап береді"
        ),
        online = language.pick("Был онлайн сегодня", "Бүгін онлайн болды"),
        phone = phone,
    )
}
