//! Breadcrumb navigation.

use market_catalog::Breadcrumb;

use crate::escape::escape_html;

/// Render the breadcrumb trail.
pub fn render_breadcrumb(breadcrumb: &Breadcrumb) -> String {
    let items: String = breadcrumb
        .items
        .iter()
        .map(|item| match &item.link {
            Some(link) => format!(
                r#"<li class="breadcrumb-item"><a href="{}">{}</a></li>"#,
                escape_html(link),
                escape_html(&item.label)
            ),
            None => format!(
                r#"<li class="breadcrumb-item">{}</li>"#,
                escape_html(&item.label)
            ),
        })
        .collect();

    format!(
        r#"<nav class="breadcrumb" aria-label="breadcrumb" data-section="breadcrumb">
    <ol>{items}<li class="breadcrumb-item breadcrumb-current" aria-current="page">{current}</li></ol>
</nav>"#,
        items = items,
        current = escape_html(&breadcrumb.current)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_catalog::BreadcrumbItem;

    #[test]
    fn test_render_breadcrumb() {
        let crumbs = Breadcrumb {
            items: vec![
                BreadcrumbItem::linked("Главная", "/"),
                BreadcrumbItem { label: "Без ссылки".into(), link: None },
            ],
            current: "Стол & стулья".into(),
        };
        let html = render_breadcrumb(&crumbs);
        assert!(html.contains(r#"<a href="/">Главная</a>"#));
        assert!(html.contains(r#"<li class="breadcrumb-item">Без ссылки</li>"#));
        assert!(html.contains("Стол &amp; стулья"));
    }
}
