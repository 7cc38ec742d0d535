use crate::app::state::AppState;
use crate::store::Slide;
use yew::prelude::*;

pub fn build_select_slide(state: &AppState) -> Callback<Slide> {
    let state = state.clone();
    Callback::from(move |slide: Slide| {
        state.update(|session| session.show(slide));
    })
}
