use crate::i18n::{t, tr1};
use crate::paths::product_image;
use crate::store::{CartItem, CartSummary, format_price};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lines: Vec<CartItem>,
    pub summary: CartSummary,
    pub currency_symbol: AttrValue,
    /// Inline alert shown above the actions, e.g. after an empty checkout.
    #[prop_or_default]
    pub alert: Option<AttrValue>,
    /// Line index and the raw text of its quantity input. Yields the stored
    /// quantity, or `None` if the line is gone.
    pub on_quantity: Callback<(usize, String), Option<u32>>,
    pub on_remove: Callback<usize>,
    pub on_clear: Callback<()>,
    pub on_checkout: Callback<()>,
}

/// Put the stored quantity back in the box when the typed text was clamped.
/// A clamp that leaves the cart unchanged does not re-render the row.
fn sync_quantity_input(input: &web_sys::HtmlInputElement, typed: &str, stored: u32) {
    let shown = stored.to_string();
    if typed != shown {
        input.set_value(&shown);
    }
}

fn render_row(idx: usize, line: &CartItem, p: &Props) -> Html {
    let on_change = {
        let cb = p.on_quantity.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                let typed = input.value();
                if let Some(stored) = cb.emit((idx, typed.clone())) {
                    sync_quantity_input(&input, &typed, stored);
                }
            }
        })
    };
    let on_remove = {
        let cb = p.on_remove.clone();
        Callback::from(move |_| cb.emit(idx))
    };
    let price = format_price(line.price_paise, &p.currency_symbol);

    html! {
        <li class="cart-row" key={line.name.clone()}>
            <img src={product_image(&line.image)} alt={line.name.clone()} />
            <div class="info">
                <div><strong>{ line.name.clone() }</strong></div>
                <div class="muted">{ tr1("cart.each", "price", &price) }</div>
            </div>
            <div class="controls">
                <input
                    type="number"
                    min="1"
                    class="cart-qty"
                    data-idx={idx.to_string()}
                    aria-label={tr1("cart.quantity_for", "name", &line.name)}
                    value={line.quantity.to_string()}
                    onchange={on_change}
                />
                <strong class="line-subtotal">{ format_price(line.subtotal_paise(), &p.currency_symbol) }</strong>
                <button type="button" class="btn ghost remove-item" data-idx={idx.to_string()} onclick={on_remove}>
                    { t("cart.remove") }
                </button>
            </div>
        </li>
    }
}

#[function_component(CartPanel)]
pub fn cart_panel(p: &Props) -> Html {
    let on_clear = {
        let cb = p.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_checkout = {
        let cb = p.on_checkout.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let rows = if p.lines.is_empty() {
        html! { <li class="cart-empty">{ t("cart.empty") }</li> }
    } else {
        p.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| render_row(idx, line, p))
            .collect::<Html>()
    };

    html! {
        <div class="cart-panel">
            <ul id="cart-items" class="cart-list">{ rows }</ul>
            <div class="cart-summary" role="status" aria-live="polite">
                <span>{ t("cart.items") }{ ": " }<span id="cart-items-count">{ p.summary.item_count.to_string() }</span></span>
                <span>{ t("cart.total") }{ ": " }<strong id="cart-total">{ format_price(p.summary.total_paise, &p.currency_symbol) }</strong></span>
            </div>
            { p.alert.as_ref().map(|msg| html! {
                <p class="inline-alert" role="alert">{ msg.clone() }</p>
            }).unwrap_or_default() }
            <div class="cart-actions">
                <button id="btn-clear" type="button" class="btn ghost" onclick={on_clear}>{ t("cart.clear") }</button>
                <button id="btn-checkout" type="button" class="btn primary" onclick={on_checkout}>{ t("cart.checkout") }</button>
            </div>
        </div>
    }
}
