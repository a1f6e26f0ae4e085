//! SEO slugs and slug-based lookup.

use market_core::Language;

use crate::category::CategoryRegistry;
use crate::listing::Listing;

/// Turn a title into a URL slug.
///
/// Russian and Kazakh Cyrillic is transliterated to Latin, everything else
/// that is not an ASCII letter or digit becomes a single `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if let Some(latin) = transliterate(ch) {
            slug.push_str(latin);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn transliterate(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'а' | 'ә' => "a",
        'б' => "b",
        'в' => "v",
        'г' | 'ғ' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' | 'і' => "i",
        'й' | 'ы' => "y",
        'к' | 'қ' => "k",
        'л' => "l",
        'м' => "m",
        'н' | 'ң' => "n",
        'о' | 'ө' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' | 'ұ' | 'ү' => "u",
        'ф' => "f",
        'х' | 'һ' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

/// Canonical title slug of a listing: the Russian title, else the first
/// non-empty variant, else the listing id.
pub fn title_slug(listing: &Listing) -> String {
    let preferred = listing
        .title
        .try_get(Language::Ru)
        .filter(|t| !t.trim().is_empty())
        .or_else(|| listing.title.variants().into_iter().find(|t| !t.trim().is_empty()));

    match preferred.map(slugify) {
        Some(slug) if !slug.is_empty() => slug,
        _ => listing.id.as_str().to_string(),
    }
}

/// SEO path of a listing (`/{category-slug}/{title-slug}`).
pub fn listing_path(listing: &Listing, registry: &CategoryRegistry) -> String {
    format!(
        "/{}/{}",
        registry.slug_for(&listing.category_id),
        title_slug(listing)
    )
}

/// Whether a listing is addressed by the given slug pair.
pub fn matches_slug(
    listing: &Listing,
    registry: &CategoryRegistry,
    category_slug: &str,
    title: &str,
) -> bool {
    let category_matches = registry.slug_for(&listing.category_id) == category_slug
        || listing.category_id.as_str() == category_slug;

    category_matches
        && (title_slug(listing) == title
            || listing.title.variants().into_iter().any(|t| slugify(t) == title))
}

/// First listing addressed by the slug pair.
pub fn find_by_slug<'a>(
    listings: &'a [Listing],
    registry: &CategoryRegistry,
    category_slug: &str,
    title: &str,
) -> Option<&'a Listing> {
    listings
        .iter()
        .find(|l| matches_slug(l, registry, category_slug, title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::tests::listing;
    use crate::text::LocalizedText;

    #[test]
    fn test_slugify_latin() {
        assert_eq!(slugify("iPhone 13 Pro, 256GB!"), "iphone-13-pro-256gb");
        assert_eq!(slugify("  --Hello--  "), "hello");
    }

    #[test]
    fn test_slugify_cyrillic() {
        assert_eq!(slugify("Продам велосипед"), "prodam-velosiped");
        assert_eq!(slugify("Щенок хаски"), "schenok-haski");
        assert_eq!(slugify("Қызмет көрсету"), "kyzmet-korsetu");
        assert_eq!(slugify("Объявление"), "obyavlenie");
    }

    #[test]
    fn test_title_slug_falls_back_to_id() {
        let mut l = listing("77", "electronics");
        l.title = LocalizedText::from("!!!");
        assert_eq!(title_slug(&l), "77");
    }

    #[test]
    fn test_listing_path_uses_category_slug() {
        let registry = CategoryRegistry::builtin();
        let mut l = listing("5", "home");
        l.title = LocalizedText::bilingual("Кресло", "Кресло");
        assert_eq!(listing_path(&l, &registry), "/dom-i-sad/kreslo");
    }

    #[test]
    fn test_find_by_slug_matches_either_language() {
        let registry = CategoryRegistry::builtin();
        let mut a = listing("1", "electronics");
        a.title = LocalizedText::bilingual("Ноутбук", "Ноутбук жаңа");
        let b = listing("2", "electronics");
        let listings = vec![a, b];

        let found = find_by_slug(&listings, &registry, "electronics", "noutbuk-zhana").unwrap();
        assert_eq!(found.id.as_str(), "1");
        assert!(find_by_slug(&listings, &registry, "home", "noutbuk").is_none());
    }

    #[test]
    fn test_find_by_slug_accepts_category_id() {
        let registry = CategoryRegistry::builtin();
        let mut l = listing("3", "home");
        l.title = LocalizedText::from("Стол");
        let listings = vec![l];
        assert!(find_by_slug(&listings, &registry, "home", "stol").is_some());
        assert!(find_by_slug(&listings, &registry, "dom-i-sad", "stol").is_some());
    }
}
