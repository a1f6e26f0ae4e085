//! Page shell: everything sent before the first section.

use market_core::Language;

use crate::escape::escape_html;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// `<meta name=..>` tags.
    pub meta: Vec<(String, String)>,
    /// `<meta property=..>` tags (Open Graph).
    pub properties: Vec<(String, String)>,
    /// Canonical URL.
    pub canonical: Option<String>,
    /// Link and style tags, already rendered.
    pub links: Vec<String>,
}

impl HeadContent {
    /// Create head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add an Open Graph property.
    pub fn with_property(mut self, property: &str, content: &str) -> Self {
        self.properties
            .push((property.to_string(), content.to_string()));
        self
    }

    /// Set the canonical URL.
    pub fn with_canonical(mut self, href: impl Into<String>) -> Self {
        self.canonical = Some(href.into());
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        html.push_str("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                "<meta name=\"{}\" content=\"{}\">\n",
                escape_html(name),
                escape_html(content)
            ));
        }

        for (property, content) in &self.properties {
            html.push_str(&format!(
                "<meta property=\"{}\" content=\"{}\">\n",
                escape_html(property),
                escape_html(content)
            ));
        }

        if let Some(href) = &self.canonical {
            html.push_str(&format!(
                "<link rel=\"canonical\" href=\"{}\">\n",
                escape_html(href)
            ));
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Shell template wrapping the streamed sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Document language (`<html lang>`).
    pub language: Language,
    pub head: HeadContent,
    /// HTML before sections (opening body, wrapper divs, etc.).
    pub body_start: String,
    /// HTML after sections (closing tags).
    pub body_end: String,
}

impl Shell {
    /// Create a shell with basic structure.
    pub fn new(language: Language, head: HeadContent) -> Self {
        Self {
            language,
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the shell (before sections).
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", self.language.code()));
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Render the closing part of the shell (after sections).
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_escapes_title() {
        let head = HeadContent::new("Стол <дуб>")
            .with_meta("viewport", "width=device-width")
            .with_property("og:title", "Стол")
            .with_canonical("/home/stol");
        let html = head.render();
        assert!(html.contains("<title>Стол &lt;дуб&gt;</title>"));
        assert!(html.contains(r#"<meta property="og:title" content="Стол">"#));
        assert!(html.contains(r#"<link rel="canonical" href="/home/stol">"#));
    }

    #[test]
    fn test_shell_language_and_parts() {
        let shell = Shell::new(Language::Kk, HeadContent::new("t")).with_body_end("</body></html>");
        let opening = shell.render_opening();
        assert!(opening.starts_with("<!DOCTYPE html>\n<html lang=\"kk\">"));
        assert!(opening.ends_with("<body>\n<main>\n"));
        assert_eq!(shell.render_closing(), "</body></html>");
    }
}
