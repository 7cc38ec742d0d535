use crate::app::bootstrap::BootData;
use crate::store::{IndicatorBox, OrderReceipt, StoreSession, TrackingState};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Everything the root component owns for one page view.
///
/// The store session lives behind `Rc<RefCell<..>>`; handlers mutate it in
/// place and then call `refresh` so the whole tree re-renders from it.
#[derive(Clone)]
pub struct AppState {
    pub boot: Rc<BootData>,
    pub session: Rc<RefCell<StoreSession>>,
    pub refresh: UseForceUpdateHandle,
    pub tracking: UseStateHandle<TrackingState>,
    pub cart_alert: UseStateHandle<bool>,
    pub receipt: UseStateHandle<Option<OrderReceipt>>,
    pub confirm_clear: UseStateHandle<bool>,
    pub indicator: UseStateHandle<Option<IndicatorBox>>,
    pub current_language: UseStateHandle<String>,
    pub year: i32,
}

#[hook]
pub fn use_app_state() -> AppState {
    let boot = crate::app::bootstrap::use_boot_data();
    let config = boot.config.clone();
    let year = use_state(crate::dom::current_year);
    AppState {
        session: use_mut_ref(move || StoreSession::new(config)),
        refresh: use_force_update(),
        tracking: use_state(TrackingState::default),
        cart_alert: use_state(|| false),
        receipt: use_state(|| None::<OrderReceipt>),
        confirm_clear: use_state(|| false),
        indicator: use_state(|| None::<IndicatorBox>),
        current_language: use_state(crate::i18n::current_lang),
        year: *year,
        boot,
    }
}

impl AppState {
    /// Run `f` against the session, then re-render.
    pub fn update<R>(&self, f: impl FnOnce(&mut StoreSession) -> R) -> R {
        let out = {
            let mut session = self.session.borrow_mut();
            f(&mut session)
        };
        self.refresh.force_update();
        out
    }
}
