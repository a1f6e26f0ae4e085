//! Transport listings shown as cards in search and category grids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, ListingId};
use crate::listing::{Listing, Seller};
use crate::text::LocalizedText;

/// Listing category every vehicle belongs to on the detail page.
pub const TRANSPORT_CATEGORY: &str = "transport";

/// Currency a transport listing is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    #[serde(rename = "KZT")]
    Kzt,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    /// Any other code; displayed as tenge.
    #[serde(other)]
    Other,
}

impl Currency {
    /// Symbol shown after the amount. Unknown currencies display as tenge.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Kzt | Currency::Other => crate::format::TENGE,
        }
    }
}

/// Vehicle condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
}

/// Who sells the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SellerType {
    Dealer,
    Private,
}

/// Engine details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    /// Fuel/engine type ("бензин", "дизель", "электро").
    #[serde(rename = "type")]
    pub engine_type: String,
    /// Power in horsepower.
    #[serde(default)]
    pub power: Option<u32>,
    /// Displacement in litres.
    #[serde(default)]
    pub volume: Option<f32>,
}

/// Seller of a transport listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportSeller {
    pub name: String,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub verified: bool,
    #[serde(rename = "type")]
    pub seller_type: SellerType,
}

/// A vehicle listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportListing {
    pub id: ListingId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i64,
    #[serde(default)]
    pub currency: Currency,
    pub location: String,
    pub year: u16,
    #[serde(default)]
    pub mileage: Option<u64>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Transport category slug ("cars", "moto", "trucks").
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub body_type: Option<String>,
    #[serde(default)]
    pub engine: Option<Engine>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub drive_type: Option<String>,
    pub condition: Condition,
    pub created_at: DateTime<Utc>,
    pub seller: TransportSeller,
    #[serde(default)]
    pub features: Vec<String>,
}

impl TransportListing {
    /// Title to display; `"{brand} {model}"` when the title is empty.
    pub fn display_title(&self) -> String {
        if self.title.trim().is_empty() {
            format!("{} {}", self.brand, self.model)
        } else {
            self.title.clone()
        }
    }

    /// Path of the listing's own page.
    pub fn link(&self) -> String {
        format!("/transport/{}/{}", self.category, self.id)
    }

    /// Whether the vehicle is sold by a dealer.
    pub fn is_dealer(&self) -> bool {
        self.seller.seller_type == SellerType::Dealer
    }

    /// The vehicle as a listing of the transport category, for the detail page.
    ///
    /// Vehicle sellers carry no phone number.
    pub fn to_listing(&self) -> Listing {
        Listing {
            id: self.id.clone(),
            title: LocalizedText::from(self.display_title()),
            description: self.description.clone().map(LocalizedText::from),
            city: LocalizedText::from(self.location.as_str()),
            price: self.price,
            currency: self.currency,
            discount_price: None,
            original_price: None,
            discount: None,
            images: Some(self.images.clone()),
            image_url: None,
            category_id: CategoryId::new(TRANSPORT_CATEGORY),
            seller: Seller {
                name: self.seller.name.clone(),
                phone: String::new(),
                rating: self.seller.rating.unwrap_or(0.0),
                reviews: None,
            },
            views: 0,
            created_at: self.created_at,
            coordinates: None,
            is_featured: false,
        }
    }
}
