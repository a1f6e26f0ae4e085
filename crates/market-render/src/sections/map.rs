//! Location block.

use market_catalog::Coordinates;

use crate::detail::DetailPage;
use crate::escape::escape_html;

/// OpenStreetMap link centred on `coordinates`.
pub fn osm_link(coordinates: &Coordinates) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=15/{lat}/{lng}",
        lat = coordinates.lat,
        lng = coordinates.lng
    )
}

/// Render the city and, when known, a link to the map.
pub fn render_map(page: &DetailPage) -> String {
    let language = page.language;
    let map = match &page.listing.coordinates {
        Some(coordinates) => format!(
            r#"<a class="map-link" href="{href}" target="_blank" rel="noopener" data-lat="{lat}" data-lng="{lng}">{label}</a>"#,
            href = escape_html(&osm_link(coordinates)),
            lat = coordinates.lat,
            lng = coordinates.lng,
            label = language.pick("Показать на карте", "Картадан көрсету"),
        ),
        None => format!(
            r#"<p class="map-unavailable">{}</p>"#,
            language.pick("Точное местоположение не указано", "Нақты орналасқан жері көрсетілмеген")
        ),
    };

    format!(
        r#"<section class="listing-map" data-section="map">
    <h2>{heading}</h2>
    <p class="map-city">{city}</p>
    {map}
</section>"#,
        heading = language.pick("Местоположение", "Орналасқан жері"),
        city = escape_html(&page.city),
        map = map
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::tests::page;
    use market_core::Language;

    #[test]
    fn test_map_with_coordinates() {
        let html = render_map(&page("8", Language::Ru));
        assert!(html.contains("mlat=51.1605&amp;mlon=71.4704"));
        assert!(html.contains("Астана"));
    }

    #[test]
    fn test_map_without_coordinates() {
        let html = render_map(&page("3", Language::Kk));
        assert!(!html.contains("map-link"));
        assert!(html.contains("Нақты орналасқан жері көрсетілмеген"));
    }
}
