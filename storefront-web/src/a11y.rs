// Accessibility helpers
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const FOCUSABLE: &str = "button:not([disabled]), [href], input:not([disabled]), select, [tabindex]:not([tabindex='-1'])";

/// Id of the polite live region announcing cart and tracking updates.
pub const STATUS_REGION_ID: &str = "store-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #2563eb;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
pub fn set_status(msg: &str) {
    if let Some(node) =
        crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Focusable descendants of the element with `container_id`, in document order.
#[must_use]
pub fn focusable_in(container_id: &str) -> Vec<HtmlElement> {
    let Some(container) = crate::dom::document().and_then(|doc| doc.get_element_by_id(container_id))
    else {
        return Vec::new();
    };
    let Ok(nodes) = container.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Move focus to the first focusable element inside a dialog.
pub fn trap_focus_in(container_id: &str) {
    if let Some(first) = focusable_in(container_id).first() {
        let _ = first.focus();
    }
}

/// Keep Tab navigation inside the container by wrapping at either end.
///
/// Returns `true` when focus was moved and the key event should be suppressed.
#[must_use]
pub fn wrap_focus(container_id: &str, backwards: bool) -> bool {
    let items = focusable_in(container_id);
    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        return false;
    };
    let active = crate::dom::document().and_then(|doc| doc.active_element());
    let at_edge = |edge: &HtmlElement| {
        let edge: &web_sys::Node = edge.as_ref();
        active.as_ref().is_some_and(|el| el.is_same_node(Some(edge)))
    };
    if backwards && at_edge(first) {
        let _ = last.focus();
        true
    } else if !backwards && at_edge(last) {
        let _ = first.focus();
        true
    } else {
        false
    }
}

/// Return focus to the control that opened a dialog.
pub fn restore_focus(id: &str) {
    if let Some(el) = crate::dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}
