mod handlers;
mod slides;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::button::Button;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modal::Modal;
use crate::i18n::{t, tr1};
use yew::prelude::*;

fn render_receipt_dialog(state: &AppState, handlers: &AppHandlers) -> Html {
    let Some(receipt) = (*state.receipt).as_ref() else {
        return Html::default();
    };
    let on_ok = {
        let cb = handlers.close_receipt.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let body = tr1("order.placed_body", "id", receipt.order_id.as_str());
    html! {
        <Modal
            open={true}
            title={t("order.placed_title")}
            description={Some(AttrValue::from(body))}
            on_close={handlers.close_receipt.clone()}
            return_focus_id={Some(AttrValue::from("btn-checkout"))}
        >
            <Button id={Some(AttrValue::from("modal-ok"))} label={t("order.ok")} onclick={on_ok} />
        </Modal>
    }
}

fn render_clear_dialog(state: &AppState, handlers: &AppHandlers) -> Html {
    let on_confirm = {
        let cb = handlers.confirm_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_cancel = {
        let cb = handlers.cancel_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <Modal
            open={*state.confirm_clear}
            title={t("cart.clear_title")}
            description={Some(AttrValue::from(t("cart.clear_confirm")))}
            on_close={handlers.cancel_clear.clone()}
            return_focus_id={Some(AttrValue::from("btn-clear"))}
        >
            <Button id={Some(AttrValue::from("clear-confirm"))} label={t("cart.confirm")} onclick={on_confirm} />
            <Button id={Some(AttrValue::from("clear-cancel"))} variant="ghost" label={t("cart.cancel")} onclick={on_cancel} />
        </Modal>
    }
}

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let session = state.session.borrow();
    let indicator_style: AttrValue = (*state.indicator)
        .map(|placed| placed.style())
        .unwrap_or_default()
        .into();

    html! {
        <>
            <Header
                active={session.active_slide()}
                badges={session.badges()}
                {indicator_style}
                on_select={handlers.select_slide.clone()}
                on_lang_change={handlers.lang_change.clone()}
                current_lang={(*state.current_language).clone()}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                { slides::render_slides(state, &session, &handlers) }
                { render_clear_dialog(state, &handlers) }
                { render_receipt_dialog(state, &handlers) }
                <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite" aria-atomic="true"></div>
            </main>
            <Footer year={state.year} />
        </>
    }
}
