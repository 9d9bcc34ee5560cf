//! Overlay backend delegating to the page's `bootstrap.Modal`.
//!
//! The toolkit is reached dynamically through `js_sys::Reflect`; there are no
//! static bindings, so pages that never load it only pay for `detect`.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use super::{ModalBackend, ModalError};

fn toolkit_error(err: JsValue) -> ModalError {
    ModalError::Toolkit(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn method(target: &JsValue, name: &str) -> Result<Function, ModalError> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(toolkit_error)?
        .dyn_into::<Function>()
        .map_err(|_| ModalError::Toolkit(format!("{name} is not a function")))
}

fn present(value: &JsValue) -> bool {
    !value.is_undefined() && !value.is_null()
}

pub struct ToolkitModals {
    modal_class: Function,
}

impl ToolkitModals {
    /// The toolkit backend if `window.bootstrap.Modal` is loaded.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap")).ok()?;
        if !present(&bootstrap) {
            return None;
        }
        let modal_class = Reflect::get(&bootstrap, &JsValue::from_str("Modal")).ok()?;
        modal_class.dyn_into::<Function>().ok().map(|modal_class| Self { modal_class })
    }

    fn element(id: &str) -> Result<web_sys::Element, ModalError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .ok_or_else(|| ModalError::NotFound(id.to_owned()))
    }

    fn construct(&self, element: &web_sys::Element) -> Result<JsValue, ModalError> {
        Reflect::construct(&self.modal_class, &Array::of1(element)).map_err(toolkit_error)
    }

    /// The instance the toolkit already tracks for `element`, if any.
    fn tracked_instance(&self, element: &web_sys::Element) -> Result<Option<JsValue>, ModalError> {
        let get_instance = method(&self.modal_class, "getInstance")?;
        let instance = get_instance.call1(&self.modal_class, element).map_err(toolkit_error)?;
        Ok(present(&instance).then_some(instance))
    }

    fn invoke(instance: &JsValue, name: &str) -> Result<(), ModalError> {
        method(instance, name)?.call0(instance).map_err(toolkit_error)?;
        Ok(())
    }
}

impl ModalBackend for ToolkitModals {
    fn name(&self) -> &'static str {
        "bootstrap"
    }

    fn show(&self, id: &str) -> Result<(), ModalError> {
        let element = Self::element(id)?;
        let instance = match self.tracked_instance(&element)? {
            Some(instance) => instance,
            None => self.construct(&element)?,
        };
        Self::invoke(&instance, "show")
    }

    fn hide(&self, id: &str) -> Result<(), ModalError> {
        let element = Self::element(id)?;
        let instance = match self.tracked_instance(&element)? {
            Some(instance) => instance,
            None => self.construct(&element)?,
        };
        Self::invoke(&instance, "hide")
    }

    fn is_visible(&self, id: &str) -> bool {
        Self::element(id).is_ok_and(|el| el.class_list().contains("show"))
    }
}
