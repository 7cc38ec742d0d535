use storefront_web::i18n;
use storefront_web::paths::asset_path;
use storefront_web::store::{CatalogLoader, WebCatalogLoader};

#[test]
fn i18n_bundle_switches_and_falls_back() {
    i18n::set_lang("hi");
    assert_eq!(i18n::current_lang(), "hi");
    assert_eq!(i18n::t("nav.cart"), "कार्ट");

    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "hi");

    i18n::set_lang("en");
    assert_eq!(i18n::t("missing.key"), "missing.key");
    assert_eq!(
        i18n::tr1("track.resolved", "id", "ORD7"),
        "Order ORD7 — Out for delivery 🚚 (ETA: 30-60 min)"
    );
}

#[test]
fn i18n_locales_metadata_is_accessible() {
    let metas = i18n::locales();
    assert!(metas.iter().any(|m| m.code == "en"));
    assert!(metas.iter().any(|m| m.code == "hi"));
}

#[test]
fn asset_paths_are_root_anchored() {
    assert_eq!(asset_path("static/img/tee.jpg"), "/static/img/tee.jpg");
}

#[test]
fn web_loader_reads_bundled_data() {
    let catalog = WebCatalogLoader.load_catalog().unwrap();
    assert!(catalog.find("Canvas Backpack").is_some());
    let cfg = WebCatalogLoader.load_config().unwrap();
    assert_eq!(cfg.order_prefix, "ORD");
}
