// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Mostrar/ocultar elemento vía style.display
pub fn set_display(element: &Element, display: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property("display", display)
}

/// Leer el value de un input por ID ("" si no existe)
pub fn input_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Establecer el value de un input por ID
pub fn set_input_value(id: &str, value: &str) {
    if let Some(input) = get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) {
        input.set_value(value);
    }
}

/// Marcar/desmarcar un checkbox por ID
pub fn set_checkbox_checked(id: &str, checked: bool) {
    if let Some(input) = get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) {
        input.set_checked(checked);
    }
}

/// Habilitar/deshabilitar un control por ID
pub fn set_disabled(id: &str, disabled: bool) {
    if let Some(el) = get_element_by_id(id) {
        if disabled {
            let _ = el.set_attribute("disabled", "disabled");
        } else {
            let _ = el.remove_attribute("disabled");
        }
    }
}

/// alert() nativo del navegador
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// confirm() nativo del navegador (false si no hay window)
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
