//! Product card with quantity input, add button and wishlist heart.
use crate::i18n::{t, tr1};
use crate::paths::product_image;
use crate::store::{HeartState, Product, format_price};
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A request to add `quantity` (raw input text) of the named product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    pub name: String,
    pub quantity: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub product: Product,
    pub heart: HeartState,
    pub currency_symbol: AttrValue,
    /// How long the add button stays disabled with its "added" label.
    pub feedback_ms: u32,
    pub on_add: Callback<AddRequest>,
    pub on_toggle_wish: Callback<String>,
}

#[function_component(ProductCard)]
pub fn product_card(p: &Props) -> Html {
    let quantity = use_state(|| String::from("1"));
    let added = use_state(|| false);

    let on_input = {
        let quantity = quantity.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                quantity.set(input.value());
            }
        })
    };

    let on_add = {
        let cb = p.on_add.clone();
        let name = p.product.name.clone();
        let quantity = quantity.clone();
        let added = added.clone();
        let feedback_ms = p.feedback_ms;
        Callback::from(move |_| {
            if *added {
                return;
            }
            cb.emit(AddRequest {
                name: name.clone(),
                quantity: (*quantity).clone(),
            });
            added.set(true);
            let added = added.clone();
            crate::dom::after_ms(feedback_ms, move || added.set(false));
        })
    };

    let on_wish = {
        let cb = p.on_toggle_wish.clone();
        let name = p.product.name.clone();
        Callback::from(move |_| cb.emit(name.clone()))
    };

    let name = &p.product.name;
    let input_id = format!("qty-{}", slug(name));
    let wish_label = if p.heart.active {
        tr1("products.wish_remove", "name", name)
    } else {
        tr1("products.wish_add", "name", name)
    };

    html! {
        <article class="product-card" data-name={name.clone()} data-price={p.product.price_paise.to_string()}>
            <img src={product_image(&p.product.image)} alt={name.clone()} loading="lazy" />
            <button
                type="button"
                class={classes!("wish-toggle", p.heart.active.then_some("active"))}
                aria-pressed={p.heart.active.to_string()}
                aria-label={wish_label}
                onclick={on_wish}
            >
                { p.heart.glyph() }
            </button>
            <h3>{ name.clone() }</h3>
            { (!p.product.description.is_empty()).then(|| html! {
                <p class="muted">{ p.product.description.clone() }</p>
            }).unwrap_or_default() }
            <div class="price">{ format_price(p.product.price_paise, &p.currency_symbol) }</div>
            <div class="card-actions">
                <label for={input_id.clone()} class="sr-only">{ tr1("products.quantity_for", "name", name) }</label>
                <input
                    id={input_id}
                    class="qty-input"
                    type="number"
                    min="1"
                    value={(*quantity).clone()}
                    oninput={on_input}
                />
                <button type="button" class="btn primary add-cart" disabled={*added} onclick={on_add}>
                    { if *added { t("products.added") } else { t("products.add") } }
                </button>
            </div>
        </article>
    }
}

/// Lowercase, dash-separated form of a product name for element ids.
#[must_use]
pub fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
