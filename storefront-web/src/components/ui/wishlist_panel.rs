//! Wishlist views: the compact preview on the products slide and the full list.
//! Both render from the same wishlist entries.
use crate::i18n::t;
use crate::paths::product_image;
use crate::store::{WishlistItem, format_price};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PreviewProps {
    pub items: Vec<WishlistItem>,
    /// Clicking any preview thumbnail opens the wishlist slide.
    pub on_open: Callback<()>,
}

#[function_component(WishlistPreview)]
pub fn wishlist_preview(p: &PreviewProps) -> Html {
    let body = if p.items.is_empty() {
        html! { <div class="wish-empty">{ t("products.preview_empty") }</div> }
    } else {
        p.items
            .iter()
            .map(|item| {
                let cb = p.on_open.clone();
                html! {
                    <button
                        type="button"
                        class="wish-preview-item"
                        key={item.name.clone()}
                        title={item.name.clone()}
                        aria-label={t("products.preview_open")}
                        onclick={Callback::from(move |_| cb.emit(()))}
                    >
                        <img src={product_image(&item.image)} alt={item.name.clone()} />
                    </button>
                }
            })
            .collect::<Html>()
    };

    html! {
        <aside class="wish-preview" aria-labelledby="wish-preview-title">
            <h3 id="wish-preview-title">{ t("products.preview_heading") }</h3>
            <div id="wish-preview-items" class="wish-preview-items">{ body }</div>
        </aside>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ListProps {
    pub items: Vec<WishlistItem>,
    pub currency_symbol: AttrValue,
    pub on_add_to_cart: Callback<usize>,
    pub on_remove: Callback<usize>,
}

#[function_component(WishlistList)]
pub fn wishlist_list(p: &ListProps) -> Html {
    if p.items.is_empty() {
        return html! {
            <ul id="wishlist-items" class="wish-list">
                <li class="wish-empty">{ t("wishlist.empty") }</li>
            </ul>
        };
    }

    let rows = p.items.iter().enumerate().map(|(idx, item)| {
        let on_add = {
            let cb = p.on_add_to_cart.clone();
            Callback::from(move |_| cb.emit(idx))
        };
        let on_remove = {
            let cb = p.on_remove.clone();
            Callback::from(move |_| cb.emit(idx))
        };
        html! {
            <li class="wish-item" key={item.name.clone()}>
                <img src={product_image(&item.image)} alt={item.name.clone()} />
                <div><strong>{ item.name.clone() }</strong></div>
                <div class="muted">{ format_price(item.price_paise, &p.currency_symbol) }</div>
                <div class="wish-actions">
                    <button type="button" class="btn primary wish-add-to-cart" onclick={on_add}>{ t("wishlist.add_to_cart") }</button>
                    <button type="button" class="btn ghost wish-remove" onclick={on_remove}>{ t("wishlist.remove") }</button>
                </div>
            </li>
        }
    });

    html! {
        <ul id="wishlist-items" class="wish-list">{ for rows }</ul>
    }
}
