use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::ui::cart_panel::CartPanel;
use crate::components::ui::product_card::ProductCard;
use crate::components::ui::track_panel::TrackPanel;
use crate::components::ui::wishlist_panel::{WishlistList, WishlistPreview};
use crate::i18n::t;
use crate::store::{Slide, StoreSession};
use yew::prelude::*;

/// Wrap slide content in its section. Inactive slides stay in the DOM.
fn slide_section(slide: Slide, active: Slide, heading: &str, content: Html) -> Html {
    let is_active = slide == active;
    html! {
        <section
            id={slide.dom_id()}
            class={classes!("slide", is_active.then_some("active"))}
            data-index={slide.index().to_string()}
            role="tabpanel"
            aria-hidden={(!is_active).to_string()}
        >
            <h2>{ heading.to_string() }</h2>
            { content }
        </section>
    }
}

fn goto_button(target: Slide, label: String, class: &'static str, handlers: &AppHandlers) -> Html {
    let cb = handlers.select_slide.clone();
    html! {
        <button
            type="button"
            class={classes!("btn", class)}
            data-goto={target.index().to_string()}
            onclick={Callback::from(move |_| cb.emit(target))}
        >
            { label }
        </button>
    }
}

fn render_home(handlers: &AppHandlers) -> Html {
    html! {
        <div class="hero">
            <p class="lead">{ t("home.lead") }</p>
            <div class="hero-actions">
                { goto_button(Slide::Products, t("home.shop_now"), "primary", handlers) }
                { goto_button(Slide::Cart, t("home.view_cart"), "ghost", handlers) }
            </div>
        </div>
    }
}

fn render_products(state: &AppState, session: &StoreSession, handlers: &AppHandlers) -> Html {
    let catalog = &state.boot.catalog;
    let symbol = AttrValue::from(session.config().currency_symbol.clone());
    let feedback_ms = session.config().added_feedback_ms;
    let hearts = session.hearts(catalog);
    let on_open_wishlist = {
        let cb = handlers.select_slide.clone();
        Callback::from(move |()| cb.emit(Slide::Wishlist))
    };

    html! {
        <>
            <WishlistPreview items={session.wishlist().items().to_vec()} on_open={on_open_wishlist} />
            <div id="products-grid" class="products-grid">
                { for catalog.iter().zip(hearts).map(|(product, heart)| html! {
                    <ProductCard
                        key={product.name.clone()}
                        product={product.clone()}
                        {heart}
                        currency_symbol={symbol.clone()}
                        {feedback_ms}
                        on_add={handlers.add_product.clone()}
                        on_toggle_wish={handlers.wish_toggle.clone()}
                    />
                }) }
            </div>
        </>
    }
}

fn render_cart(state: &AppState, session: &StoreSession, handlers: &AppHandlers) -> Html {
    let alert = (*state.cart_alert).then(|| AttrValue::from(t("cart.empty_alert")));
    html! {
        <CartPanel
            lines={session.cart().lines().to_vec()}
            summary={session.cart_summary()}
            currency_symbol={session.config().currency_symbol.clone()}
            {alert}
            on_quantity={handlers.quantity_change.clone()}
            on_remove={handlers.remove_line.clone()}
            on_clear={handlers.request_clear.clone()}
            on_checkout={handlers.checkout.clone()}
        />
    }
}

fn render_wishlist(session: &StoreSession, handlers: &AppHandlers) -> Html {
    html! {
        <WishlistList
            items={session.wishlist().items().to_vec()}
            currency_symbol={session.config().currency_symbol.clone()}
            on_add_to_cart={handlers.wish_add_to_cart.clone()}
            on_remove={handlers.wish_remove.clone()}
        />
    }
}

fn render_track(state: &AppState, handlers: &AppHandlers) -> Html {
    html! {
        <TrackPanel state={(*state.tracking).clone()} on_track={handlers.track.clone()} />
    }
}

pub fn render_slides(state: &AppState, session: &StoreSession, handlers: &AppHandlers) -> Html {
    let active = session.active_slide();
    html! {
        <>
            { slide_section(Slide::Home, active, &t("home.heading"), render_home(handlers)) }
            { slide_section(Slide::Products, active, &t("products.heading"), render_products(state, session, handlers)) }
            { slide_section(Slide::Cart, active, &t("cart.heading"), render_cart(state, session, handlers)) }
            { slide_section(Slide::Wishlist, active, &t("wishlist.heading"), render_wishlist(session, handlers)) }
            { slide_section(Slide::Track, active, &t("track.heading"), render_track(state, handlers)) }
        </>
    }
}
