//! Transport listing card for result grids.

use chrono::{DateTime, Utc};
use market_catalog::format::{group_thousands, relative_time, NBSP};
use market_catalog::{Condition, Currency, ListingId, TransportListing};
use market_core::Language;

use crate::escape::escape_html;

/// Image shown when a listing has none.
pub const NO_IMAGE: &str = "/images/no-image.png";

/// Card price: ru-RU grouping followed by the currency symbol.
pub fn format_card_price(price: i64, currency: Currency) -> String {
    format!("{} {}", group_thousands(price, NBSP), currency.symbol())
}

/// Part of the card a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    FavoriteButton,
    Body,
}

/// Whether a click continues to the card link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The click is consumed; the card does not navigate.
    Stop,
    Continue,
}

/// Optional handlers for card interactions. Missing handlers are no-ops.
#[derive(Default)]
pub struct CardCallbacks<'a> {
    on_favorite_toggle: Option<Box<dyn FnMut(&ListingId) + 'a>>,
    on_click: Option<Box<dyn FnMut(&TransportListing) + 'a>>,
}

impl<'a> CardCallbacks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_favorite_toggle(mut self, f: impl FnMut(&ListingId) + 'a) -> Self {
        self.on_favorite_toggle = Some(Box::new(f));
        self
    }

    pub fn on_click(mut self, f: impl FnMut(&TransportListing) + 'a) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }
}

/// Summary card of one vehicle listing.
#[derive(Debug, Clone, Copy)]
pub struct TransportCard<'a> {
    listing: &'a TransportListing,
    favorited: bool,
    show_contact_button: bool,
}

impl<'a> TransportCard<'a> {
    pub fn new(listing: &'a TransportListing) -> Self {
        Self {
            listing,
            favorited: false,
            show_contact_button: true,
        }
    }

    pub fn favorited(mut self, favorited: bool) -> Self {
        self.favorited = favorited;
        self
    }

    pub fn show_contact_button(mut self, show: bool) -> Self {
        self.show_contact_button = show;
        self
    }

    pub fn listing(&self) -> &TransportListing {
        self.listing
    }

    /// Dispatch a click. A favorite click toggles and stops propagation so
    /// the card click never fires for it.
    pub fn handle_click(&self, target: CardTarget, callbacks: &mut CardCallbacks<'_>) -> Propagation {
        match target {
            CardTarget::FavoriteButton => {
                if let Some(toggle) = callbacks.on_favorite_toggle.as_mut() {
                    toggle(&self.listing.id);
                }
                Propagation::Stop
            }
            CardTarget::Body => {
                if let Some(click) = callbacks.on_click.as_mut() {
                    click(self.listing);
                }
                Propagation::Continue
            }
        }
    }

    /// Render the card. `now` anchors the relative post time.
    pub fn render(&self, language: Language, now: &DateTime<Utc>) -> String {
        let listing = self.listing;
        let brand_model = format!("{} {}", listing.brand, listing.model);
        let image = listing.images.first().map(String::as_str).unwrap_or(NO_IMAGE);

        let photo_count = if listing.images.len() > 1 {
            format!(
                r#"<span class="card-photo-count">{} {}</span>"#,
                listing.images.len(),
                language.pick("фото", "фото")
            )
        } else {
            String::new()
        };

        let (favorite_class, favorite_label) = if self.favorited {
            ("card-favorite card-favorite--active", language.pick("Убрать из избранного", "Таңдаулылардан алып тастау"))
        } else {
            ("card-favorite", language.pick("В избранное", "Таңдаулыларға"))
        };

        let mut badges = String::new();
        if listing.seller.verified {
            badges.push_str(&format!(
                r#"<span class="badge badge-verified">{}</span>"#,
                language.pick("Проверенный продавец", "Тексерілген сатушы")
            ));
        }
        if listing.is_dealer() {
            badges.push_str(&format!(
                r#"<span class="badge badge-dealer">{}</span>"#,
                language.pick("Дилер", "Дилер")
            ));
        }

        let new_badge = if listing.condition == Condition::New {
            format!(
                r#"<span class="badge badge-new">{}</span>"#,
                language.pick("Новый", "Жаңа")
            )
        } else {
            String::new()
        };

        let specs = self.render_specs(language);

        let contact = if self.show_contact_button {
            format!(
                r#"<button type="button" class="card-contact" data-card-action="contact">{}</button>"#,
                language.pick("Связаться с продавцом", "Сатушымен байланысу")
            )
        } else {
            String::new()
        };

        format!(
            r#"<a href="{link}" class="transport-card-link" data-card-target="body" data-listing-id="{id}">
<article class="transport-card">
    <div class="card-media">
        <img src="{image}" alt="{alt}" class="card-image" loading="lazy">
        {photo_count}
        <button type="button" class="{favorite_class}" data-card-target="favorite" aria-pressed="{favorited}" aria-label="{favorite_label}">&#9829;</button>
        <div class="card-badges">{badges}</div>
    </div>
    <div class="card-content">
        <div class="card-heading">
            <div>
                <h2 class="card-title">{title}</h2>
                <p class="card-price">{price}</p>
            </div>
            {new_badge}
        </div>
        <ul class="card-specs">{specs}</ul>
        <div class="card-footer">
            <span class="card-location">{location}</span>
            <span class="card-posted">{posted}</span>
            {contact}
        </div>
    </div>
</article>
</a>"#,
            link = escape_html(&listing.link()),
            id = escape_html(listing.id.as_str()),
            image = escape_html(image),
            alt = escape_html(&brand_model),
            photo_count = photo_count,
            favorite_class = favorite_class,
            favorited = self.favorited,
            favorite_label = favorite_label,
            badges = badges,
            title = escape_html(&listing.display_title()),
            price = format_card_price(listing.price, listing.currency),
            new_badge = new_badge,
            specs = specs,
            location = escape_html(&listing.location),
            posted = relative_time(&listing.created_at, now, language),
            contact = contact,
        )
    }

    fn render_specs(&self, language: Language) -> String {
        let listing = self.listing;
        let mut specs = vec![format!(r#"<li class="spec-year">{}</li>"#, listing.year)];

        if let Some(mileage) = listing.mileage {
            specs.push(format!(
                r#"<li class="spec-mileage">{} {}</li>"#,
                group_thousands(mileage as i64, NBSP),
                language.pick("км", "км")
            ));
        }
        if let Some(body_type) = &listing.body_type {
            specs.push(format!(r#"<li class="spec-body">{}</li>"#, escape_html(body_type)));
        }
        if let Some(engine) = listing.engine.as_ref().filter(|e| !e.engine_type.is_empty()) {
            let mut text = escape_html(&engine.engine_type);
            if let Some(volume) = engine.volume {
                text.push_str(&format!(" {} {}", volume, language.pick("л", "л")));
            }
            if let Some(power) = engine.power {
                text.push_str(&format!(" ({} {})", power, language.pick("л.с.", "а.к.")));
            }
            specs.push(format!(r#"<li class="spec-engine">{}</li>"#, text));
        }
        if let Some(transmission) = &listing.transmission {
            specs.push(format!(
                r#"<li class="spec-transmission">{}</li>"#,
                escape_html(transmission)
            ));
        }

        specs.concat()
    }
}

/// Render a grid of cards; `is_favorite` marks favorited listings.
pub fn render_card_grid<F>(
    listings: &[&TransportListing],
    language: Language,
    now: &DateTime<Utc>,
    is_favorite: F,
) -> String
where
    F: Fn(&ListingId) -> bool,
{
    if listings.is_empty() {
        return format!(
            r#"<p class="cards-empty">{}</p>"#,
            language.pick("Объявлений не найдено", "Хабарландырулар табылмады")
        );
    }

    let cards: String = listings
        .iter()
        .map(|listing| {
            TransportCard::new(listing)
                .favorited(is_favorite(&listing.id))
                .render(language, now)
        })
        .collect();

    format!(r#"<div class="cards-grid">{}</div>"#, cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_catalog::TransportCatalog;
    use std::cell::RefCell;

    fn now() -> DateTime<Utc> {
        "2024-03-03T12:00:00Z".parse().unwrap()
    }

    fn catalog() -> TransportCatalog {
        TransportCatalog::load().unwrap()
    }

    #[test]
    fn test_favorite_click_does_not_navigate() {
        let catalog = catalog();
        let card = TransportCard::new(&catalog.all()[0]);
        let toggled = RefCell::new(Vec::new());
        let clicked = RefCell::new(0);
        let mut callbacks = CardCallbacks::new()
            .on_favorite_toggle(|id| toggled.borrow_mut().push(id.clone()))
            .on_click(|_| *clicked.borrow_mut() += 1);

        let propagation = card.handle_click(CardTarget::FavoriteButton, &mut callbacks);
        drop(callbacks);

        assert_eq!(propagation, Propagation::Stop);
        assert_eq!(toggled.borrow().as_slice(), &[catalog.all()[0].id.clone()]);
        assert_eq!(*clicked.borrow(), 0);
    }

    #[test]
    fn test_body_click_invokes_on_click() {
        let catalog = catalog();
        let card = TransportCard::new(&catalog.all()[1]);
        let mut seen = None;
        {
            let mut callbacks = CardCallbacks::new().on_click(|l| seen = Some(l.id.clone()));
            assert_eq!(card.handle_click(CardTarget::Body, &mut callbacks), Propagation::Continue);
        }
        assert_eq!(seen, Some(catalog.all()[1].id.clone()));
    }

    #[test]
    fn test_missing_callbacks_are_noops() {
        let catalog = catalog();
        let card = TransportCard::new(&catalog.all()[0]);
        let mut callbacks = CardCallbacks::new();
        assert_eq!(card.handle_click(CardTarget::FavoriteButton, &mut callbacks), Propagation::Stop);
        assert_eq!(card.handle_click(CardTarget::Body, &mut callbacks), Propagation::Continue);
    }

    #[test]
    fn test_format_card_price() {
        assert_eq!(format_card_price(14_500_000, Currency::Kzt), "14\u{a0}500\u{a0}000 ₸");
        assert_eq!(format_card_price(42_000, Currency::Usd), "42\u{a0}000 $");
        assert_eq!(format_card_price(6_500, Currency::Eur), "6\u{a0}500 €");
        assert_eq!(format_card_price(100, Currency::Other), "100 ₸");
    }

    #[test]
    fn test_render_used_car() {
        let catalog = catalog();
        let html = TransportCard::new(catalog.find_by_id("t-1").unwrap()).render(Language::Ru, &now());
        assert!(html.contains(r#"href="/transport/cars/t-1""#));
        assert!(html.contains("Toyota Camry 70"));
        assert!(html.contains("2 фото"));
        assert!(html.contains("85\u{a0}000 км"));
        assert!(html.contains("бензин 2.5 л (181 л.с.)"));
        assert!(html.contains("Проверенный продавец"));
        assert!(!html.contains("badge-dealer"));
        assert!(!html.contains("badge-new"));
        assert!(html.contains("Связаться с продавцом"));
        assert!(html.contains("2 дня назад"));
    }

    #[test]
    fn test_render_new_dealer_car_with_fallback_title() {
        let catalog = catalog();
        let html = TransportCard::new(catalog.find_by_id("t-2").unwrap())
            .favorited(true)
            .show_contact_button(false)
            .render(Language::Kk, &now());
        assert!(html.contains(r#"<h2 class="card-title">Hyundai Tucson</h2>"#));
        assert!(html.contains("42\u{a0}000 $"));
        assert!(html.contains("Жаңа"));
        assert!(html.contains("badge-dealer"));
        assert!(html.contains("card-favorite--active"));
        assert!(!html.contains("data-card-action=\"contact\""));
        assert!(!html.contains("фото"));
    }

    #[test]
    fn test_render_without_images_uses_placeholder() {
        let catalog = catalog();
        let html = TransportCard::new(catalog.find_by_id("t-3").unwrap()).render(Language::Ru, &now());
        assert!(html.contains(NO_IMAGE));
        assert!(!html.contains("spec-body"));
    }

    #[test]
    fn test_grid() {
        let catalog = catalog();
        let moto = catalog.in_category(Some("moto"));
        let html = render_card_grid(&moto, Language::Ru, &now(), |_| false);
        assert_eq!(html.matches("transport-card-link").count(), moto.len());
        let empty = render_card_grid(&[], Language::Kk, &now(), |_| false);
        assert!(empty.contains("Хабарландырулар табылмады"));
    }
}
