//! Image gallery.

use crate::card::NO_IMAGE;
use crate::detail::DetailPage;
use crate::escape::escape_html;

/// Render the gallery: the main image plus thumbnails when there are several.
pub fn render_gallery(page: &DetailPage) -> String {
    let alt = escape_html(&page.title);
    let main = page.images.first().map(String::as_str).unwrap_or(NO_IMAGE);

    let thumbnails = if page.images.len() > 1 {
        let thumbs: String = page
            .images
            .iter()
            .enumerate()
            .map(|(i, src)| {
                format!(
                    r#"<img src="{}" alt="{} {}" class="gallery-thumb" data-index="{}" loading="lazy">"#,
                    escape_html(src),
                    alt,
                    i + 1,
                    i
                )
            })
            .collect();
        format!(r#"<div class="gallery-thumbs">{}</div>"#, thumbs)
    } else {
        String::new()
    };

    format!(
        r#"<section class="listing-gallery" data-section="gallery">
    <img src="{main}" alt="{alt}" class="gallery-main">
    <span class="gallery-counter">1 / {count}</span>
    {thumbnails}
</section>"#,
        main = escape_html(main),
        alt = alt,
        count = page.images.len().max(1),
        thumbnails = thumbnails
    )
}
