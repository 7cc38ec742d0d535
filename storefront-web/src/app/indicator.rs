//! Keeps the tab indicator under the active tab button.
use crate::app::state::AppState;
use crate::components::header::{TAB_STRIP_ID, tab_id};
use crate::store::{IndicatorBox, IndicatorConfig, Slide, indicator_geometry};
use yew::prelude::*;

/// Measure the tab strip and the button for `slide`. `None` when either
/// element is not in the document.
#[must_use]
pub fn measure(slide: Slide, cfg: &IndicatorConfig) -> Option<IndicatorBox> {
    let tabs = crate::dom::layout_box(TAB_STRIP_ID)?;
    let button = crate::dom::layout_box(&tab_id(slide))?;
    Some(indicator_geometry(tabs, button, cfg))
}

/// Re-measure after every slide, language or badge change, and on window
/// resize.
#[hook]
pub fn use_indicator(state: &AppState, active: Slide) {
    let cfg = state.boot.config.indicator;
    {
        let indicator = state.indicator.clone();
        let lang = (*state.current_language).clone();
        let badges = state.session.borrow().badges();
        use_effect_with((active, lang, badges), move |(slide, _, _)| {
            indicator.set(measure(*slide, &cfg));
            || {}
        });
    }
    {
        let indicator = state.indicator.clone();
        let session = state.session.clone();
        use_effect_with((), move |()| {
            crate::dom::on_resize(move || {
                let slide = session.borrow().active_slide();
                indicator.set(measure(slide, &cfg));
            });
            || {}
        });
    }
}
