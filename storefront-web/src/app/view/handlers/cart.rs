use crate::app::state::AppState;
use crate::components::ui::product_card::AddRequest;
use crate::i18n::t;
use yew::prelude::*;

pub fn build_add_product(state: &AppState) -> Callback<AddRequest> {
    let state = state.clone();
    let cart_alert = state.cart_alert.clone();
    Callback::from(move |req: AddRequest| {
        let Some(product) = state.boot.catalog.find(&req.name) else {
            log::warn!("add to cart for unknown product {}", req.name);
            return;
        };
        let quantity = state.update(|session| session.add_product(product, &req.quantity));
        crate::a11y::set_status(&format!("{} × {quantity}", req.name));
        cart_alert.set(false);
    })
}

/// Yields the quantity the line now holds.
pub fn build_quantity_change(state: &AppState) -> Callback<(usize, String), Option<u32>> {
    let state = state.clone();
    Callback::from(move |(index, raw): (usize, String)| {
        state
            .update(|session| session.update_quantity(index, &raw))
            .map_err(|err| log::warn!("{err}"))
            .ok()
    })
}

pub fn build_remove_line(state: &AppState) -> Callback<usize> {
    let state = state.clone();
    Callback::from(move |index: usize| {
        if let Err(err) = state.update(|session| session.remove_cart_line(index)) {
            log::warn!("{err}");
        }
    })
}

/// Ask before clearing; an empty cart is left alone without asking.
pub fn build_request_clear(state: &AppState) -> Callback<()> {
    let session = state.session.clone();
    let confirm_clear = state.confirm_clear.clone();
    Callback::from(move |()| {
        if session.borrow().clear_needs_confirmation() {
            confirm_clear.set(true);
        }
    })
}

pub fn build_confirm_clear(state: &AppState) -> Callback<()> {
    let state = state.clone();
    let confirm_clear = state.confirm_clear.clone();
    Callback::from(move |()| {
        confirm_clear.set(false);
        state.update(|session| session.clear_cart(true));
    })
}

pub fn build_cancel_clear(state: &AppState) -> Callback<()> {
    let confirm_clear = state.confirm_clear.clone();
    Callback::from(move |()| confirm_clear.set(false))
}

pub fn build_checkout(state: &AppState) -> Callback<()> {
    let state = state.clone();
    let cart_alert = state.cart_alert.clone();
    let receipt = state.receipt.clone();
    Callback::from(move |()| {
        let now = crate::dom::now_ms();
        match state.update(|session| session.checkout(now)) {
            Ok(placed) => {
                cart_alert.set(false);
                receipt.set(Some(placed));
            }
            Err(err) => {
                log::warn!("checkout rejected: {err}");
                crate::a11y::set_status(&t("cart.empty_alert"));
                cart_alert.set(true);
            }
        }
    })
}

pub fn build_close_receipt(state: &AppState) -> Callback<()> {
    let receipt = state.receipt.clone();
    Callback::from(move |()| receipt.set(None))
}
