use js_sys::{Function, Promise};
use storefront_core::LayoutBox;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if no window is available, the timer cannot be scheduled,
/// or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: u32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let timeout = i32::try_from(duration_ms).unwrap_or(i32::MAX);

    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Run `task` once after `duration_ms`. Timer failures are logged and the
/// task is dropped.
pub fn after_ms(duration_ms: u32, task: impl FnOnce() + 'static) {
    wasm_bindgen_futures::spawn_local(async move {
        match sleep_ms(duration_ms).await {
            Ok(()) => task(),
            Err(err) => console_error(&js_error_message(&err)),
        }
    });
}

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now().max(0.0) as u64;
        now
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
    }
}

/// Calendar year in local time, for the footer.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use chrono::Datelike;
        chrono::Local::now().year()
    }
}

/// Horizontal bounding box of the element with `id`.
#[must_use]
pub fn layout_box(id: &str) -> Option<LayoutBox> {
    let el = document()?.get_element_by_id(id)?;
    let rect = el.get_bounding_client_rect();
    Some(LayoutBox {
        left: rect.left(),
        width: rect.width(),
    })
}

/// Register `handler` for window `resize` events for the lifetime of the page.
pub fn on_resize(handler: impl FnMut() + 'static) {
    let Some(win) = window() else {
        return;
    };
    let closure = Closure::<dyn FnMut()>::new(handler);
    if let Err(err) =
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        console_error(&js_error_message(&err));
    }
    closure.forget();
}
