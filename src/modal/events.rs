//! Document-level click and Escape handling for overlays.
//!
//! The browser listeners only translate DOM events into a `ClickTarget` or an
//! Escape press; which overlay closes is decided by plain functions here and
//! in `ModalController`.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

/// What the click handler needs to know about a clicked element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub id: Option<String>,
    /// The element itself is an overlay (`.modal`), i.e. its backdrop area.
    pub is_overlay: bool,
    /// Value of the element's `data-bs-dismiss` attribute.
    pub dismiss: Option<String>,
    /// Id of the closest enclosing `.modal`, the element itself included.
    pub enclosing_overlay: Option<String>,
}

/// Overlays a click should close, in the order they should be closed.
pub fn dismiss_targets(target: &ClickTarget) -> Vec<String> {
    let mut ids = Vec::new();
    if target.dismiss.as_deref() == Some("modal") {
        if let Some(id) = target.enclosing_overlay.as_deref().filter(|id| !id.is_empty()) {
            ids.push(id.to_owned());
        }
    }
    if target.is_overlay {
        if let Some(id) = target.id.as_deref().filter(|id| !id.is_empty()) {
            if !ids.iter().any(|existing| existing == id) {
                ids.push(id.to_owned());
            }
        }
    }
    ids
}

pub fn is_escape(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Register document `click` and `keydown` listeners driving `controller`.
#[cfg(feature = "csr")]
pub fn install(controller: std::rc::Rc<super::ModalController<super::dom::WebModalDom>>) {
    use wasm_bindgen::{JsCast, closure::Closure};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let clicks = std::rc::Rc::clone(&controller);
    let on_click = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
        let Some(element) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let target = ClickTarget {
            id: Some(element.id()),
            is_overlay: element.class_list().contains("modal"),
            dismiss: element.get_attribute("data-bs-dismiss"),
            enclosing_overlay: element.closest(".modal").ok().flatten().map(|m| m.id()),
        };
        clicks.handle_click(&target);
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let on_keydown = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
        if is_escape(&ev.key()) {
            controller.handle_escape();
        }
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
    let _ = document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}
