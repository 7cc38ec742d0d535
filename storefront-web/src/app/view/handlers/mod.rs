mod cart;
mod navigation;
mod prefs;
mod tracking;
mod wishlist;

use crate::app::state::AppState;
use crate::components::ui::product_card::AddRequest;
use crate::store::Slide;
use yew::prelude::*;

pub use cart::{
    build_add_product, build_cancel_clear, build_checkout, build_close_receipt,
    build_confirm_clear, build_quantity_change, build_remove_line, build_request_clear,
};
pub use navigation::build_select_slide;
pub use prefs::build_lang_change;
pub use tracking::build_track;
pub use wishlist::{build_wish_add_to_cart, build_wish_remove, build_wish_toggle};

#[derive(Clone)]
pub struct AppHandlers {
    pub select_slide: Callback<Slide>,
    pub add_product: Callback<AddRequest>,
    pub quantity_change: Callback<(usize, String), Option<u32>>,
    pub remove_line: Callback<usize>,
    pub request_clear: Callback<()>,
    pub confirm_clear: Callback<()>,
    pub cancel_clear: Callback<()>,
    pub checkout: Callback<()>,
    pub close_receipt: Callback<()>,
    pub wish_toggle: Callback<String>,
    pub wish_add_to_cart: Callback<usize>,
    pub wish_remove: Callback<usize>,
    pub track: Callback<String>,
    pub lang_change: Callback<String>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            select_slide: build_select_slide(state),
            add_product: build_add_product(state),
            quantity_change: build_quantity_change(state),
            remove_line: build_remove_line(state),
            request_clear: build_request_clear(state),
            confirm_clear: build_confirm_clear(state),
            cancel_clear: build_cancel_clear(state),
            checkout: build_checkout(state),
            close_receipt: build_close_receipt(state),
            wish_toggle: build_wish_toggle(state),
            wish_add_to_cart: build_wish_add_to_cart(state),
            wish_remove: build_wish_remove(state),
            track: build_track(state),
            lang_change: build_lang_change(state),
        }
    }
}
