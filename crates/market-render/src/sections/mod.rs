//! Section renderers for the listing detail page.

mod breadcrumb;
mod description;
mod gallery;
mod header;
mod map;
mod price;
mod safety;
mod seller;
mod similar;
mod stats;

pub use breadcrumb::*;
pub use description::*;
pub use gallery::*;
pub use header::*;
pub use map::*;
pub use price::*;
pub use safety::*;
pub use seller::*;
pub use similar::*;
pub use stats::*;

use crate::detail::DetailPage;

/// A detail page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Gallery,
    Header,
    Price,
    Seller,
    Description,
    Stats,
    Map,
    SafetyTips,
    Similar,
}

impl SectionKind {
    /// Name used for `data-section` and stream timing.
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Gallery => "gallery",
            SectionKind::Header => "header",
            SectionKind::Price => "price",
            SectionKind::Seller => "seller",
            SectionKind::Description => "description",
            SectionKind::Stats => "stats",
            SectionKind::Map => "map",
            SectionKind::SafetyTips => "safety-tips",
            SectionKind::Similar => "similar",
        }
    }

    pub fn render(&self, page: &DetailPage) -> String {
        match self {
            SectionKind::Gallery => render_gallery(page),
            SectionKind::Header => render_header(page),
            SectionKind::Price => render_price(page),
            SectionKind::Seller => render_seller(page),
            SectionKind::Description => render_description(page),
            SectionKind::Stats => render_stats(page),
            SectionKind::Map => render_map(page),
            SectionKind::SafetyTips => render_safety_tips(page.language),
            SectionKind::Similar => render_similar(page),
        }
    }
}
