// ============================================================================
// NOTIFICATIONS - Toasts de error apilables y descartables
// ============================================================================
// Un fallo de una operación produce exactamente una notificación y no toca
// el resto del estado de la página.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{append_child, get_element_by_id, on_click, ElementBuilder};
use crate::services::ApiError;

/// Notifica el error de una operación contra el backend
pub fn show_api_error(title: &str, error: &ApiError) {
    log::error!("❌ {}: {:?}", title, error);
    if let Err(e) = show_error(&error.message(title), &error.stack_trace()) {
        log::error!("❌ No se pudo mostrar la notificación: {:?}", e);
    }
}

/// Apila un toast de error no bloqueante en el panel de notificaciones
pub fn show_error(message: &str, stack_trace: &str) -> Result<(), JsValue> {
    let Some(panel) = get_element_by_id("notificationPanel") else {
        // Sin panel no hay dónde pintar; el log de arriba ya dejó constancia
        return Ok(());
    };

    let close_button = ElementBuilder::new("button")?
        .class("ml-2 mb-1 close")
        .attr("type", "button")?
        .html("<span>&times;</span>")
        .build();

    let header = ElementBuilder::new("div")?
        .class("toast-header bg-danger")
        .child(
            ElementBuilder::new("strong")?
                .class("mr-auto text-dark")
                .text("Error")
                .build(),
        )?
        .child(close_button.clone())?
        .build();

    let body = ElementBuilder::new("div")?
        .class("toast-body")
        .child(ElementBuilder::new("p")?.text(message).build())?
        .child(
            ElementBuilder::new("pre")?
                .child(ElementBuilder::new("code")?.text(stack_trace).build())?
                .build(),
        )?
        .build();

    let toast = ElementBuilder::new("div")?
        .class("toast shadow rounded-lg show")
        .attr("role", "alert")?
        .attr("style", "min-width: 30rem")?
        .child(header)?
        .child(body)?
        .build();

    // Descartar el toast al pulsar su botón de cierre
    {
        let toast = toast.clone();
        on_click(&close_button, move |_| {
            toast.remove();
        })?;
    }

    append_child(&panel, &toast)
}
