// ============================================================================
// EVENT HANDLING - Listeners sobre elementos del DOM
// ============================================================================
// Los listeners se registran con Closure + forget(). Cuando el elemento se
// destruye (p.ej. con set_inner_html("")), el navegador limpia los listeners
// asociados, por lo que forget() es seguro para listeners locales. Listeners
// globales (window/document) solo deben registrarse UNA VEZ al inicio.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // forget() mantiene el closure vivo mientras el elemento exista
    closure.forget();
    Ok(())
}

/// Helper para crear change handler (checkboxes, selects)
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para disparar el handler al presionar Enter en un input
pub fn on_enter<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        if event.key() == "Enter" {
            handler();
        }
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
    element.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
