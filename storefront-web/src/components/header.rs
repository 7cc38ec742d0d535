use crate::i18n::{locales, t, tr1};
use crate::store::{Badges, Slide};
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub const TAB_STRIP_ID: &str = "tab-strip";

/// DOM id of the tab button for `slide`.
#[must_use]
pub fn tab_id(slide: Slide) -> String {
    format!("tab-{}", slide.index())
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: Slide,
    pub badges: Badges,
    /// Inline style positioning the tab indicator; empty until measured.
    #[prop_or_default]
    pub indicator_style: AttrValue,
    pub on_select: Callback<Slide>,
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };

    let tabs = Slide::ALL.iter().map(|&slide| {
        let is_active = slide == p.active;
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |_| cb.emit(slide))
        };
        let badge = match slide {
            Slide::Cart => Some(("badge-cart", p.badges.cart_lines, "nav.cart_badge")),
            Slide::Wishlist => Some(("badge-wish", p.badges.wishlist_entries, "nav.wishlist_badge")),
            _ => None,
        };
        html! {
            <button
                id={tab_id(slide)}
                class={classes!("tab-btn", is_active.then_some("active"))}
                role="tab"
                aria-selected={is_active.to_string()}
                aria-controls={slide.dom_id()}
                data-slide={slide.index().to_string()}
                {onclick}
            >
                { t(slide.label_key()) }
                { badge.map(|(id, count, label_key)| html! {
                    <span id={id} class="badge" aria-label={tr1(label_key, "count", &count.to_string())}>
                        { count.to_string() }
                    </span>
                }).unwrap_or_default() }
            </button>
        }
    });

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="brand">
                    <strong>{ t("app.title") }</strong>
                    <span class="muted">{ t("app.tagline") }</span>
                </div>
                <nav aria-label={t("nav.language")} class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                        }) }
                    </select>
                </nav>
            </div>
            <nav id={TAB_STRIP_ID} class="tabs" role="tablist" aria-label={t("nav.tabs")}>
                { for tabs }
                <span class="tab-indicator" aria-hidden="true" style={p.indicator_style.clone()}></span>
            </nav>
        </header>
    }
}
