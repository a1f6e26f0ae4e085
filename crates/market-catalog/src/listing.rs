//! Listing and seller types.

use chrono::{DateTime, Utc};
use market_core::Language;
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, ListingId};
use crate::text::LocalizedText;
use crate::transport::Currency;

/// Geographic position of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Seller embedded in a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub rating: f32,
    /// Number of reviews, shown as completed deals.
    #[serde(default)]
    pub reviews: Option<u32>,
}

impl Seller {
    /// Review count, zero when unknown.
    pub fn deals(&self) -> u32 {
        self.reviews.unwrap_or(0)
    }

    /// Phone with everything after the operator code hidden (`+7 777 *** ** **`).
    pub fn masked_phone(&self) -> String {
        let digits: Vec<char> = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() < 4 {
            return "*** ** **".to_string();
        }
        let country: String = digits[..digits.len().saturating_sub(10).max(1)].iter().collect();
        let operator: String = digits
            .iter()
            .skip(country.len())
            .take(3)
            .collect();
        format!("+{} {} *** ** **", country, operator)
    }
}

/// A classifieds listing as stored in the mock collection or the remote store.
///
/// Read-only from the browsing layer's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    pub city: LocalizedText,
    /// Asking price.
    pub price: i64,
    /// Currency of every price field; tenge when absent.
    #[serde(default)]
    pub currency: Currency,
    /// Price after discount, shown as the current price when present.
    #[serde(default)]
    pub discount_price: Option<i64>,
    /// Price before discount.
    #[serde(default)]
    pub original_price: Option<i64>,
    /// Discount percentage.
    #[serde(default)]
    pub discount: Option<u8>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category_id: CategoryId,
    pub seller: Seller,
    #[serde(default)]
    pub views: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Listing {
    /// Price to display as current.
    pub fn current_price(&self) -> i64 {
        self.discount_price.unwrap_or(self.price)
    }

    /// Whether an original price above the current one is known.
    pub fn is_discounted(&self) -> bool {
        self.original_price
            .map(|original| original > self.current_price())
            .unwrap_or(false)
    }

    /// Gallery images: the image list, or the single image URL.
    pub fn gallery(&self) -> Vec<&str> {
        match &self.images {
            Some(images) if !images.is_empty() => images.iter().map(String::as_str).collect(),
            _ => self.image_url.as_deref().into_iter().collect(),
        }
    }

    /// Title in `language`.
    pub fn title_text(&self, language: Language) -> &str {
        self.title.get(language)
    }

    /// City in `language`.
    pub fn city_text(&self, language: Language) -> &str {
        self.city.get(language)
    }

    /// Description in `language`, empty when absent.
    pub fn description_text(&self, language: Language) -> &str {
        self.description
            .as_ref()
            .map(|d| d.get(language))
            .unwrap_or("")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn listing(id: &str, category: &str) -> Listing {
        Listing {
            id: ListingId::new(id),
            title: LocalizedText::bilingual(format!("Объявление {}", id), format!("Хабарландыру {}", id)),
            description: None,
            city: LocalizedText::from("Алматы"),
            price: 10_000,
            currency: Currency::Kzt,
            discount_price: None,
            original_price: None,
            discount: None,
            images: None,
            image_url: None,
            category_id: CategoryId::new(category),
            seller: Seller {
                name: "Айгерим".into(),
                phone: "+7 701 123 45 67".into(),
                rating: 4.8,
                reviews: None,
            },
            views: 0,
            created_at: "2024-03-01T09:00:00Z".parse().unwrap(),
            coordinates: None,
            is_featured: false,
        }
    }

    #[test]
    fn test_current_price_prefers_discount() {
        let mut l = listing("1", "electronics");
        assert_eq!(l.current_price(), 10_000);
        l.discount_price = Some(8_000);
        l.original_price = Some(10_000);
        assert_eq!(l.current_price(), 8_000);
        assert!(l.is_discounted());
    }

    #[test]
    fn test_gallery_falls_back_to_image_url() {
        let mut l = listing("1", "electronics");
        assert!(l.gallery().is_empty());
        l.image_url = Some("/img/a.jpg".into());
        assert_eq!(l.gallery(), vec!["/img/a.jpg"]);
        l.images = Some(vec!["/img/b.jpg".into(), "/img/c.jpg".into()]);
        assert_eq!(l.gallery(), vec!["/img/b.jpg", "/img/c.jpg"]);
    }

    #[test]
    fn test_description_absent_is_empty() {
        let l = listing("1", "electronics");
        assert_eq!(l.description_text(Language::Ru), "");
    }

    #[test]
    fn test_masked_phone() {
        let l = listing("1", "electronics");
        assert_eq!(l.seller.masked_phone(), "+7 701 *** ** **");
        assert_eq!(l.seller.deals(), 0);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "99",
            "title": "Диван",
            "city": {"ru": "Шымкент", "kk": "Шымкент"},
            "price": 0,
            "imageUrl": "/img/sofa.jpg",
            "categoryId": "home",
            "seller": {"name": "Ержан", "phone": "+77011112233", "rating": 4.5, "reviews": 12},
            "views": 5,
            "createdAt": "2024-02-10T12:00:00Z",
            "isFeatured": true
        }"#;
        let l: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(l.title_text(Language::Kk), "Диван");
        assert_eq!(l.city_text(Language::Ru), "Шымкент");
        assert_eq!(l.seller.deals(), 12);
        assert!(l.is_featured);
        assert_eq!(l.gallery(), vec!["/img/sofa.jpg"]);
    }
}
