use crate::app::state::AppState;
use yew::prelude::*;

pub fn build_wish_toggle(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |name: String| {
        let Some(product) = state.boot.catalog.find(&name) else {
            log::warn!("wishlist toggle for unknown product {name}");
            return;
        };
        let item = product.wishlist_item();
        state.update(|session| session.toggle_wishlist(item));
    })
}

pub fn build_wish_add_to_cart(state: &AppState) -> Callback<usize> {
    let state = state.clone();
    let cart_alert = state.cart_alert.clone();
    Callback::from(move |index: usize| {
        if let Err(err) = state.update(|session| session.add_to_cart_from_wishlist(index)) {
            log::warn!("{err}");
            return;
        }
        cart_alert.set(false);
    })
}

pub fn build_wish_remove(state: &AppState) -> Callback<usize> {
    let state = state.clone();
    Callback::from(move |index: usize| {
        if let Err(err) = state.update(|session| session.remove_from_wishlist(index)) {
            log::warn!("{err}");
        }
    })
}
