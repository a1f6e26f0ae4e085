//! Price block.

use crate::detail::DetailPage;
use crate::escape::escape_html;
use crate::sections::render_actions;

/// Render the price section: current price, struck original, discount.
pub fn render_price(page: &DetailPage) -> String {
    let sale_info = match (&page.original_price, page.discount) {
        (Some(original), Some(discount)) => format!(
            r#"<span class="price-original">{}</span>
        <span class="price-discount">-{}%</span>"#,
            escape_html(original),
            discount
        ),
        (Some(original), None) => format!(
            r#"<span class="price-original">{}</span>"#,
            escape_html(original)
        ),
        (None, _) => String::new(),
    };

    format!(
        r#"<section class="listing-price" data-section="price">
    <div class="price-main">
        <span class="price-current">{price}</span>
        {sale_info}
    </div>
    {actions}
</section>"#,
        price = escape_html(&page.price),
        sale_info = sale_info,
        actions = render_actions(page),
    )
}
