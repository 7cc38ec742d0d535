use yew::prelude::*;

pub mod bootstrap;
pub mod indicator;
pub mod state;
pub mod view;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    let active = app_state.session.borrow().active_slide();
    indicator::use_indicator(&app_state, active);
    view::render_app(&app_state)
}
