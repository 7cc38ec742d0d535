use crate::app::state::AppState;
use crate::i18n::t;
use crate::store::TrackingState;
use yew::prelude::*;

/// Validate the order id, show the interim status, and resolve it after the
/// configured delay. Every submission schedules its own resolution.
pub fn build_track(state: &AppState) -> Callback<String> {
    let tracking = state.tracking.clone();
    let delay_ms = state.boot.config.tracking_delay_ms;
    Callback::from(move |raw: String| match TrackingState::begin(&raw) {
        Err(err) => {
            log::warn!("tracking rejected: {err}");
            tracking.set(TrackingState::Invalid);
        }
        Ok(checking) => {
            crate::a11y::set_status(&t("track.checking"));
            tracking.set(checking.clone());
            let tracking = tracking.clone();
            crate::dom::after_ms(delay_ms, move || tracking.set(checking.resolve()));
        }
    })
}
