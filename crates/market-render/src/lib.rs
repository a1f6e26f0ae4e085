//! Shell-first HTML rendering for the marketplace pages.
//!
//! This crate provides:
//! - `Shell` / `StreamingSink` - Shell template and a sink that enforces
//!   shell-before-sections ordering
//! - `TransportCard` - Vehicle listing card with click dispatch
//! - `DetailPage` - Localized view-model of the listing detail page
//! - `sections` / `Layout` - Detail sections and their mobile/desktop arrangement
//! - `render_not_found_page` - The localized 404 document

mod card;
mod detail;
mod escape;
mod layout;
mod not_found;
mod page;
pub mod sections;
mod shell;
mod sink;
mod styles;
mod view;

pub use card::*;
pub use detail::*;
pub use escape::escape_html;
pub use layout::*;
pub use not_found::*;
pub use page::*;
pub use shell::*;
pub use sink::*;
pub use styles::MARKET_STYLES;
pub use view::*;
