use crate::i18n::{t, tr1};
use crate::store::TrackingState;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: TrackingState,
    /// Raw, untrimmed contents of the order id field.
    pub on_track: Callback<String>,
}

/// Localized status line for a tracking state, `None` while idle.
#[must_use]
pub fn status_text(state: &TrackingState) -> Option<String> {
    let key = state.message_key()?;
    Some(match state.order_id() {
        Some(id) => tr1(key, "id", id),
        None => t(key),
    })
}

#[function_component(TrackPanel)]
pub fn track_panel(p: &Props) -> Html {
    let order_id = use_state(String::new);

    let on_input = {
        let order_id = order_id.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                order_id.set(input.value());
            }
        })
    };
    let on_submit = {
        let cb = p.on_track.clone();
        let order_id = order_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit((*order_id).clone());
        })
    };

    let status_class = classes!(
        "track-status",
        p.state.is_error().then_some("error"),
        p.state.is_pending().then_some("pending"),
    );

    html! {
        <form class="track-form" onsubmit={on_submit}>
            <label for="trackId">{ t("track.label") }</label>
            <input
                id="trackId"
                type="text"
                placeholder={t("track.placeholder")}
                value={(*order_id).clone()}
                aria-invalid={p.state.is_error().to_string()}
                aria-describedby="track-status"
                oninput={on_input}
            />
            <button id="btn-track" type="submit" class="btn primary">{ t("track.submit") }</button>
            <p id="track-status" class={status_class} role="status" aria-live="polite">
                { status_text(&p.state).unwrap_or_default() }
            </p>
        </form>
    }
}
