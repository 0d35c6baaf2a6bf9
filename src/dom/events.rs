// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// Cuando un elemento se destruye del DOM (p.ej. con set_inner_html("")), el
// navegador limpia sus listeners, por lo que closure.forget() es seguro para
// listeners locales. Los listeners globales solo se registran una vez en init.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}
