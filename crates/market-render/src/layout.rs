//! Section arrangements for narrow and wide screens.
//!
//! Both layouts are rendered; the stylesheet shows one per breakpoint.

use crate::detail::DetailPage;
use crate::sections::SectionKind;

const MOBILE: &[SectionKind] = &[
    SectionKind::Gallery,
    SectionKind::Header,
    SectionKind::Price,
    SectionKind::Seller,
    SectionKind::Description,
    SectionKind::Stats,
    SectionKind::Map,
    SectionKind::SafetyTips,
];

const DESKTOP_MAIN: &[SectionKind] = &[
    SectionKind::Gallery,
    SectionKind::Header,
    SectionKind::Description,
];

const DESKTOP_SIDE: &[SectionKind] = &[
    SectionKind::Seller,
    SectionKind::SafetyTips,
    SectionKind::Map,
    SectionKind::Stats,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Single stacked column.
    Mobile,
    /// Main column plus side column.
    Desktop,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Mobile, Layout::Desktop];

    pub fn name(&self) -> &'static str {
        match self {
            Layout::Mobile => "mobile",
            Layout::Desktop => "desktop",
        }
    }

    /// Sections of the main (or only) column, in order.
    pub fn main_sections(&self) -> &'static [SectionKind] {
        match self {
            Layout::Mobile => MOBILE,
            Layout::Desktop => DESKTOP_MAIN,
        }
    }

    /// Sections of the side column, in order.
    pub fn side_sections(&self) -> &'static [SectionKind] {
        match self {
            Layout::Mobile => &[],
            Layout::Desktop => DESKTOP_SIDE,
        }
    }

    pub fn render(&self, page: &DetailPage) -> String {
        let render_all = |kinds: &[SectionKind]| -> String {
            kinds.iter().map(|kind| kind.render(page)).collect::<Vec<_>>().join("\n")
        };

        match self {
            Layout::Mobile => format!(
                r#"<div class="detail-mobile" data-layout="mobile">
{}
</div>"#,
                render_all(self.main_sections())
            ),
            Layout::Desktop => format!(
                r#"<div class="detail-desktop" data-layout="desktop">
<div class="detail-main">
{}
</div>
<aside class="detail-side">
{}
</aside>
</div>"#,
                render_all(self.main_sections()),
                render_all(self.side_sections())
            ),
        }
    }
}
