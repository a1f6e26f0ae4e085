//! Inline stylesheet shared by the marketplace pages.

pub const MARKET_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f5f6f8; color: #1f2328; }
a { color: inherit; }
.site-header { background: #fff; border-bottom: 1px solid #e4e6ea; padding: 0.75rem 1.5rem; display: flex; justify-content: space-between; }
.site-header .lang-switch a { margin-left: 0.5rem; text-decoration: none; color: #666; }
.site-header .lang-switch a.active { color: #0b7a3e; font-weight: 600; }
.site-footer { text-align: center; color: #888; padding: 2rem; font-size: 0.85rem; }
.page-container { max-width: 1200px; margin: 0 auto; padding: 1rem; }

/* Breadcrumb */
.breadcrumb ol { list-style: none; display: flex; flex-wrap: wrap; gap: 0.25rem; padding: 0; margin: 0 0 1rem; font-size: 0.85rem; color: #666; }
.breadcrumb-item + .breadcrumb-item::before { content: "/"; margin-right: 0.25rem; }
.breadcrumb-current { color: #1f2328; }

/* Layouts */
.detail-mobile > section, .detail-main > section, .detail-side > section { background: #fff; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.detail-desktop { display: none; }
@media (min-width: 1024px) {
    .detail-mobile { display: none; }
    .detail-desktop { display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem; }
}

/* Gallery */
.gallery-main { width: 100%; max-height: 480px; object-fit: cover; border-radius: 8px; }
.gallery-thumbs { display: flex; gap: 0.5rem; margin-top: 0.5rem; overflow-x: auto; }
.gallery-thumb { width: 72px; height: 72px; object-fit: cover; border-radius: 4px; cursor: pointer; }
.gallery-counter { font-size: 0.75rem; color: #666; }

/* Header and price */
.listing-title { font-size: 1.5rem; margin: 0.5rem 0; }
.listing-meta { display: flex; flex-wrap: wrap; gap: 0.75rem; color: #666; font-size: 0.85rem; }
.price-current { font-size: 1.75rem; font-weight: 700; }
.price-original { text-decoration: line-through; color: #888; margin-left: 0.75rem; }
.price-discount { background: #d93025; color: #fff; padding: 0.1rem 0.4rem; border-radius: 4px; margin-left: 0.5rem; }
.listing-actions { display: flex; gap: 0.5rem; margin-top: 0.75rem; }
.listing-actions button, .seller-show-phone, .card-contact { border: 1px solid #d0d4da; background: #fff; border-radius: 6px; padding: 0.4rem 0.8rem; cursor: pointer; }
.action-favorite--active { color: #d93025; border-color: #d93025; }
.badge { display: inline-block; font-size: 0.75rem; padding: 0.15rem 0.5rem; border-radius: 4px; color: #fff; }
.badge-featured { background: #f29900; }
.badge-verified { background: #1a73e8; }
.badge-dealer, .badge-new { background: #0b7a3e; }

/* Seller, stats, map */
.seller-name { margin: 0 0 0.25rem; font-size: 1.1rem; }
.seller-info p { margin: 0.25rem 0; color: #555; font-size: 0.9rem; }
.seller-phone { display: flex; align-items: center; gap: 0.75rem; margin-top: 0.75rem; }
.phone-number { font-weight: 600; }
.listing-stats dl { display: grid; grid-template-columns: auto 1fr; gap: 0.25rem 1rem; margin: 0; }
.listing-stats dt { color: #666; }
.safety-tips ul { padding-left: 1.25rem; margin: 0; }

/* Similar listings */
.similar-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.similar-card { background: #fff; border-radius: 8px; overflow: hidden; }
.similar-link { text-decoration: none; }
.similar-image { width: 100%; aspect-ratio: 4 / 3; object-fit: cover; }
.similar-info { padding: 0.75rem; }
.similar-title { font-size: 0.95rem; margin: 0 0 0.25rem; }
.similar-price { font-weight: 700; margin: 0; }
.similar-city { color: #666; font-size: 0.8rem; margin: 0.25rem 0 0; }

/* Transport cards */
.cards-grid { display: grid; gap: 1rem; }
.results-title { font-size: 1.5rem; margin: 1rem 0 0.25rem; }
.results-count { color: #666; margin-bottom: 1rem; }
.transport-card-link { text-decoration: none; }
.transport-card { display: flex; flex-direction: column; background: #fff; border-radius: 8px; overflow: hidden; }
@media (min-width: 768px) { .transport-card { flex-direction: row; } .card-media { width: 33%; } }
.card-media { position: relative; min-height: 200px; }
.card-image { width: 100%; height: 100%; object-fit: cover; }
.card-photo-count { position: absolute; bottom: 0.5rem; left: 0.5rem; background: rgba(0,0,0,0.6); color: #fff; font-size: 0.75rem; padding: 0.15rem 0.5rem; border-radius: 4px; }
.card-favorite { position: absolute; top: 0.5rem; right: 0.5rem; border: none; border-radius: 50%; width: 2.25rem; height: 2.25rem; background: rgba(0,0,0,0.4); color: #fff; cursor: pointer; }
.card-favorite--active { color: #d93025; }
.card-badges { position: absolute; top: 0.5rem; left: 0.5rem; display: flex; gap: 0.25rem; }
.card-content { flex: 1; padding: 1rem; display: flex; flex-direction: column; }
.card-heading { display: flex; justify-content: space-between; align-items: flex-start; }
.card-title { font-size: 1.2rem; margin: 0 0 0.25rem; }
.card-price { font-size: 1.4rem; font-weight: 700; margin: 0 0 0.75rem; }
.card-specs { list-style: none; padding: 0; margin: 0 0 0.75rem; display: grid; grid-template-columns: 1fr 1fr; gap: 0.25rem 1rem; color: #555; font-size: 0.9rem; }
.card-footer { margin-top: auto; display: flex; align-items: center; gap: 1rem; color: #777; font-size: 0.85rem; }
.card-contact { margin-left: auto; background: #0b7a3e; color: #fff; border: none; }

/* Not found */
.not-found { text-align: center; padding: 4rem 1rem; font-size: 1.25rem; }
"#;
