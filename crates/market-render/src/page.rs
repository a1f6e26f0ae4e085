//! Whole-page assembly and shell-first streaming of the detail page.

use std::fmt::Display;

use futures::Sink;
use market_core::{Language, WorkloadError};
use market_observability::StructuredLogger;

use crate::detail::DetailPage;
use crate::escape::escape_html;
use crate::layout::Layout;
use crate::sections::{render_breadcrumb, render_similar};
use crate::shell::{HeadContent, Shell};
use crate::sink::StreamingSink;
use crate::styles::MARKET_STYLES;

const META_DESCRIPTION_CHARS: usize = 160;

/// Opening body markup: site header with the language switch for `path`.
pub fn site_header(language: Language, path: &str) -> String {
    let switch: String = Language::ALL
        .iter()
        .map(|lang| {
            let class = if *lang == language { " class=\"active\"" } else { "" };
            format!(
                r#"<a href="{}?lang={}"{}>{}</a>"#,
                escape_html(path),
                lang.code(),
                class,
                lang.code().to_uppercase()
            )
        })
        .collect();

    format!(
        r#"<body>
<header class="site-header">
    <a href="/" class="site-logo">{home}</a>
    <nav class="lang-switch">{switch}</nav>
</header>
<main class="page-container">
"#,
        home = language.pick("Главная", "Басты бет"),
        switch = switch
    )
}

/// Closing body markup.
pub fn site_footer(language: Language) -> String {
    format!(
        r#"</main>
<footer class="site-footer">{}</footer>
</body>
</html>"#,
        language.pick("Объявления по всему Казахстану", "Бүкіл Қазақстан бойынша хабарландырулар")
    )
}

fn meta_description(page: &DetailPage) -> String {
    let source = if page.description.trim().is_empty() {
        format!("{}, {}", page.title, page.city)
    } else {
        page.description.clone()
    };
    source.chars().take(META_DESCRIPTION_CHARS).collect()
}

/// Shell for a detail page, with SEO and Open Graph head tags.
pub fn detail_shell(page: &DetailPage) -> Shell {
    let mut head = HeadContent::new(page.page_title())
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", &meta_description(page))
        .with_property("og:title", &page.share.title)
        .with_property("og:url", &page.share.url)
        .with_canonical(page.share.url.clone())
        .with_style(MARKET_STYLES);
    if let Some(image) = page.images.first() {
        head = head.with_property("og:image", image);
    }

    Shell::new(page.language, head)
        .with_body_start(site_header(page.language, &page.path))
        .with_body_end(site_footer(page.language))
}

/// Stream the detail page: shell, breadcrumb, both layouts, similar listings.
pub async fn stream_detail_page<S, E>(
    sink: &mut StreamingSink<S, E>,
    page: &DetailPage,
    logger: &StructuredLogger,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let shell = detail_shell(page);
    sink.send_shell(&shell.render_opening()).await?;
    logger.debug("Shell sent");

    sink.send_section("breadcrumb", &render_breadcrumb(&page.breadcrumb))
        .await?;

    for layout in Layout::ALL {
        let html = layout.render(page);
        sink.send_section(layout.name(), &html).await?;
        logger
            .debug_builder("Layout sent")
            .field("layout", layout.name())
            .field_i64("bytes", html.len() as i64)
            .emit();
    }

    sink.send_section("similar", &render_similar(page)).await?;
    sink.finish(&shell.render_closing()).await?;

    let mut entry = logger
        .info_builder("Detail page streamed")
        .field("listing_id", page.listing.id.as_str())
        .field("source", page.source.as_str())
        .field_i64("similar", page.similar.len() as i64)
        .field_i64("bytes", sink.bytes_sent() as i64);
    if let Some(ttfb) = sink.timing().time_to_shell() {
        entry = entry.duration_ms("time_to_shell_ms", ttfb);
    }
    entry.emit();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::tests::page;
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::StreamExt;
    use market_core::{RequestId, TimingContext};
    use market_observability::LogSink;

    #[test]
    fn test_detail_shell_head() {
        let page = page("1", Language::Ru);
        let opening = detail_shell(&page).render_opening();
        assert!(opening.contains("<title>iPhone 13 Pro 256 ГБ | 395 000 ₸</title>"));
        assert!(opening.contains(r#"<meta property="og:image" content="/images/listings/1-a.jpg">"#));
        assert!(opening.contains(
            r#"<link rel="canonical" href="https://market.kz/electronics/iphone-13-pro-256-gb">"#
        ));
        assert!(opening.contains(r#"href="/electronics/iphone-13-pro-256-gb?lang=kk""#));
    }

    #[test]
    fn test_meta_description_truncated() {
        let mut page = page("3", Language::Ru);
        assert_eq!(meta_description(&page), "Телевизор Samsung 55 дюймов, Шымкент");
        page.description = "я".repeat(500);
        assert_eq!(meta_description(&page).chars().count(), META_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_stream_order() {
        let page = page("6", Language::Kk);
        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());
        let logs = LogSink::memory();
        let logger = StructuredLogger::new(RequestId::from_string("s")).with_sink(logs.clone());

        block_on(stream_detail_page(&mut sink, &page, &logger)).unwrap();
        assert_eq!(
            sink.sections_sent(),
            &["breadcrumb", "mobile", "desktop", "similar"].map(String::from)
        );
        drop(sink);

        let chunks: Vec<Vec<u8>> = block_on(rx.collect());
        let html = String::from_utf8(chunks.concat()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        let crumb = html.find(r#"data-section="breadcrumb""#).unwrap();
        let mobile = html.find(r#"data-layout="mobile""#).unwrap();
        let desktop = html.find(r#"data-layout="desktop""#).unwrap();
        let similar = html.find(r#"data-section="similar""#).unwrap();
        assert!(crumb < mobile && mobile < desktop && desktop < similar);
        assert!(html.trim_end().ends_with("</html>"));

        assert!(logs.lines().iter().any(|l| l.contains("Detail page streamed")));
    }
}
