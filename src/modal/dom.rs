//! `ModalDom` over the live document via `web-sys`.

use wasm_bindgen::{JsCast, JsValue};

use super::ModalError;
use super::manual::ModalDom;

fn dom_error(err: JsValue) -> ModalError {
    ModalError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn document() -> Result<web_sys::Document, ModalError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ModalError::Dom("no document".to_owned()))
}

fn body() -> Result<web_sys::HtmlElement, ModalError> {
    document()?.body().ok_or_else(|| ModalError::Dom("no body".to_owned()))
}

fn overlay(id: &str) -> Result<web_sys::HtmlElement, ModalError> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| ModalError::NotFound(id.to_owned()))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WebModalDom;

impl ModalDom for WebModalDom {
    fn has_overlay(&self, id: &str) -> bool {
        !id.is_empty() && overlay(id).is_ok()
    }

    fn overlay_shown(&self, id: &str) -> bool {
        overlay(id).is_ok_and(|el| el.class_list().contains("show"))
    }

    fn set_overlay_shown(&self, id: &str, shown: bool) -> Result<(), ModalError> {
        let el = overlay(id)?;
        let display = if shown { "block" } else { "none" };
        el.style().set_property("display", display).map_err(dom_error)?;
        if shown {
            el.class_list().add_1("show").map_err(dom_error)
        } else {
            el.class_list().remove_1("show").map_err(dom_error)
        }
    }

    fn set_body_modal_open(&self, open: bool) -> Result<(), ModalError> {
        let classes = body()?.class_list();
        let result = if open { classes.add_1("modal-open") } else { classes.remove_1("modal-open") };
        result.map_err(dom_error)
    }

    fn append_backdrop(&self, backdrop_id: &str) -> Result<(), ModalError> {
        let document = document()?;
        if document.get_element_by_id(backdrop_id).is_some() {
            return Ok(());
        }
        let backdrop = document.create_element("div").map_err(dom_error)?;
        backdrop.set_class_name("modal-backdrop fade show");
        backdrop.set_id(backdrop_id);
        body()?.append_child(&backdrop).map_err(dom_error)?;
        Ok(())
    }

    fn remove_backdrop(&self, backdrop_id: &str) -> Result<(), ModalError> {
        if let Some(backdrop) = document()?.get_element_by_id(backdrop_id) {
            backdrop.remove();
        }
        Ok(())
    }

    fn visible_overlays(&self) -> Vec<String> {
        let Ok(Some(nodes)) = document().map(|d| d.query_selector_all(".modal.show").ok()) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.id())
            .filter(|id| !id.is_empty())
            .collect()
    }
}
