// ============================================================================
// VRP DASHBOARD - Cliente de visualización del optimizador de rutas (RUST PURO)
// ============================================================================
// Arquitectura:
// - Views: Funciones que renderizan DOM (sin lógica)
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Map: Reconciliación del mapa (lógica pura + FFI Leaflet)
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod config;
mod dom;
mod map;
mod models;
mod services;
mod state;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::default());
    log::info!("🚀 VRP Dashboard - Rust Puro + WASM");

    let app = App::new()?;
    app.render()?;
    app.bootstrap();

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}
