//! Description block.

use crate::detail::DetailPage;
use crate::escape::escape_html;

/// Render the description, one paragraph per line.
pub fn render_description(page: &DetailPage) -> String {
    let language = page.language;
    let body = if page.description.trim().is_empty() {
        format!(
            r#"<p class="description-empty">{}</p>"#,
            language.pick("Описание отсутствует", "Сипаттама жоқ")
        )
    } else {
        page.description
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!("<p>{}</p>", escape_html(line)))
            .collect()
    };

    format!(
        r#"<section class="listing-description" data-section="description">
    <h2>{heading}</h2>
    {body}
</section>"#,
        heading = language.pick("Описание", "Сипаттама"),
        body = body
    )
}
