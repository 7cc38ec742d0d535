use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Event, EventInit, HtmlElement, HtmlInputElement, HtmlSelectElement, KeyboardEvent,
    KeyboardEventInit,
};
use yew::Renderer;

use storefront_web::app::App;
use storefront_web::app::indicator;
use storefront_web::dom;
use storefront_web::store::{Slide, is_order_id_valid, load_config};

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    storefront_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

async fn settle(ms: u32) {
    dom::sleep_ms(ms).await.expect("timer");
}

fn query(selector: &str) -> HtmlElement {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("{selector} should exist"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

fn text(selector: &str) -> String {
    query(selector).text_content().unwrap_or_default()
}

fn set_input(selector: &str, value: &str, event: &str) {
    let input = query(selector)
        .dyn_into::<HtmlInputElement>()
        .expect("input element");
    input.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    let ev = Event::new_with_event_init_dict(event, &init).expect("event");
    input.dispatch_event(&ev).expect("dispatch");
}

fn exists(selector: &str) -> bool {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
        .is_some()
}

fn input_value(selector: &str) -> String {
    query(selector)
        .dyn_into::<HtmlInputElement>()
        .expect("input element")
        .value()
}

fn press_escape(selector: &str) {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let ev = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
    query(selector).dispatch_event(&ev).expect("dispatch");
}

/// Add the first product once and open the cart slide.
async fn one_line_in_cart() {
    render_app();
    settle(0).await;
    query("#products-grid .product-card .add-cart").click();
    settle(0).await;
    query("#tab-3").click();
    settle(0).await;
    assert_eq!(text("#cart-items-count"), "1");
}

#[wasm_bindgen_test]
async fn tabs_switch_slides() {
    render_app();
    settle(0).await;
    query("#tab-2").click();
    settle(0).await;
    assert!(query("#slide-products").class_list().contains("active"));
    assert!(!query("#slide-home").class_list().contains("active"));
    assert!(query("#tab-2").class_list().contains("active"));
}

#[wasm_bindgen_test]
async fn adding_twice_aggregates_and_shows_feedback() {
    render_app();
    settle(0).await;
    query("#products-grid .product-card .add-cart").click();
    settle(0).await;
    assert_eq!(text("#products-grid .product-card .add-cart"), "Added ✓");
    assert_eq!(text("#badge-cart"), "1");

    settle(800).await;
    assert_eq!(text("#products-grid .product-card .add-cart"), "Add");
    set_input("#products-grid .product-card .qty-input", "2", "input");
    settle(0).await;
    query("#products-grid .product-card .add-cart").click();
    settle(0).await;

    assert_eq!(text("#badge-cart"), "1");
    assert_eq!(text("#cart-items-count"), "3");
}

#[wasm_bindgen_test]
async fn empty_checkout_shows_inline_alert() {
    render_app();
    settle(0).await;
    query("#btn-checkout").click();
    settle(0).await;
    assert_eq!(text(".inline-alert"), "Your cart is empty.");
    assert!(
        dom::document()
            .expect("document")
            .query_selector(".modal-backdrop")
            .expect("selector")
            .is_none()
    );
}

#[wasm_bindgen_test]
async fn tracking_shows_interim_then_final_status() {
    render_app();
    settle(0).await;
    query("#btn-track").click();
    settle(0).await;
    assert_eq!(text("#track-status"), "Please enter a valid Order ID.");

    set_input("#trackId", "  ORD555111 ", "input");
    settle(0).await;
    query("#btn-track").click();
    settle(0).await;
    assert_eq!(text("#track-status"), "Checking order status...");

    settle(1_000).await;
    assert_eq!(
        text("#track-status"),
        "Order ORD555111 — Out for delivery 🚚 (ETA: 30-60 min)"
    );
}

#[wasm_bindgen_test]
async fn cart_quantity_box_shows_the_clamped_value() {
    one_line_in_cart().await;

    set_input(".cart-qty", "-3", "change");
    settle(0).await;
    assert_eq!(input_value(".cart-qty"), "1");
    assert_eq!(text("#cart-items-count"), "1");

    set_input(".cart-qty", "2", "change");
    settle(0).await;
    assert_eq!(input_value(".cart-qty"), "2");
    assert_eq!(text("#cart-items-count"), "2");

    set_input(".cart-qty", "2.7", "change");
    settle(0).await;
    assert_eq!(input_value(".cart-qty"), "2");
    assert_eq!(text("#cart-items-count"), "2");
}

#[wasm_bindgen_test]
async fn clear_dialog_only_empties_on_confirm() {
    one_line_in_cart().await;

    query("#btn-clear").click();
    settle(0).await;
    assert!(exists(".modal-backdrop"));
    query("#clear-cancel").click();
    settle(0).await;
    assert!(!exists(".modal-backdrop"));
    assert_eq!(text("#cart-items-count"), "1");

    query("#btn-clear").click();
    settle(0).await;
    press_escape(".modal");
    settle(0).await;
    assert!(!exists(".modal-backdrop"));
    assert_eq!(text("#cart-items-count"), "1");

    query("#btn-clear").click();
    settle(0).await;
    query("#clear-confirm").click();
    settle(0).await;
    assert!(!exists(".modal-backdrop"));
    assert_eq!(text("#cart-items-count"), "0");
    assert!(exists("#cart-items .cart-empty"));
}

#[wasm_bindgen_test]
async fn checkout_shows_receipt_and_empties_cart() {
    one_line_in_cart().await;

    query("#btn-checkout").click();
    settle(0).await;
    let body = text(".modal__description");
    let order_id = body
        .strip_prefix("Your Order ID: ")
        .and_then(|rest| rest.lines().next())
        .unwrap_or_default();
    assert!(is_order_id_valid(order_id), "unexpected receipt: {body}");
    assert!(!exists("#cart-items .cart-row"));
    assert!(exists("#cart-items .cart-empty"));
    assert_eq!(text("#badge-cart"), "0");

    query("#modal-ok").click();
    settle(0).await;
    assert!(!exists(".modal-backdrop"));
}

#[wasm_bindgen_test]
async fn indicator_follows_badge_growth() {
    let doc = dom::document().expect("document");
    let style = doc.create_element("style").expect("style element");
    style.set_id("wide-cart-badge");
    style.set_text_content(Some(r#"#badge-cart[aria-label^="1 "] { padding-left: 80px; }"#));
    doc.body()
        .expect("document body")
        .append_child(&style)
        .expect("append style");

    render_app();
    settle(0).await;
    query("#products-grid .product-card .wish-toggle").click();
    settle(0).await;
    query("#tab-4").click();
    settle(50).await;
    let before = query(".tab-indicator").get_attribute("style");

    query("#wishlist-items .wish-add-to-cart").click();
    settle(50).await;
    let expected = indicator::measure(Slide::Wishlist, &load_config().indicator)
        .map(|placed| placed.style());
    let after = query(".tab-indicator").get_attribute("style");
    style.remove();

    assert_eq!(text("#badge-cart"), "1");
    assert_eq!(after, expected);
    assert_ne!(after, before);
}

#[wasm_bindgen_test]
async fn language_select_switches_labels() {
    render_app();
    settle(0).await;
    let select = query("#lang-select")
        .dyn_into::<HtmlSelectElement>()
        .expect("select element");
    select.set_value("hi");
    let init = EventInit::new();
    init.set_bubbles(true);
    let ev = Event::new_with_event_init_dict("change", &init).expect("event");
    select.dispatch_event(&ev).expect("dispatch");
    settle(0).await;

    let lang = storefront_web::i18n::current_lang();
    let home_label = text("#tab-1");
    storefront_web::i18n::set_lang("en");

    assert_eq!(lang, "hi");
    assert!(home_label.starts_with("होम"), "{home_label}");
}
