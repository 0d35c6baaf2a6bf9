// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Orquesta el ciclo request/respuesta contra el solver y la reconciliación
// del dashboard. Las operaciones nunca dejan escapar errores: un fallo
// produce una notificación y termina ahí.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, on_click, set_inner_html};
use crate::models::StatusResponse;
use crate::services::SolverApi;
use crate::state::AppState;
use crate::views::{render_dashboard, show_api_error, update_dashboard, update_solving_buttons};

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        Ok(Self {
            state: AppState::new(),
            root,
        })
    }

    /// Renderizar el esqueleto del dashboard y cablear los botones
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let dashboard = render_dashboard()?;
        append_child(&self.root, &dashboard)?;

        self.wire_solve_button()?;
        self.wire_stop_button()?;
        Ok(())
    }

    /// Inicializar el mapa y lanzar el primer fetch de estado
    pub fn bootstrap(&self) {
        self.state.map.borrow().init("map");
        fetch_status(self.state.clone());
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn wire_solve_button(&self) -> Result<(), JsValue> {
        let Some(button) = get_element_by_id("solveButton") else {
            return Ok(());
        };
        let state = self.state.clone();
        on_click(&button, move |_| {
            start_solve(state.clone());
        })
    }

    fn wire_stop_button(&self) -> Result<(), JsValue> {
        let Some(button) = get_element_by_id("stopSolvingButton") else {
            return Ok(());
        };
        let state = self.state.clone();
        on_click(&button, move |_| {
            stop_solve(state.clone());
        })
    }
}

/// Pide el estado al solver y reconcilia la página con el snapshot.
/// Los fetches pueden solaparse; pinta el último en resolverse.
pub fn fetch_status(state: AppState) {
    wasm_bindgen_futures::spawn_local(async move {
        match SolverApi::new().get_status().await {
            Ok(status) => apply_status(&state, &status),
            Err(e) => show_api_error("Get status failed", &e),
        }
    });
}

/// Arranca el solver; si acepta, entra en modo "resolviendo" y arma el
/// timer de polling con su presupuesto de iteraciones
pub fn start_solve(state: AppState) {
    wasm_bindgen_futures::spawn_local(async move {
        match SolverApi::new().solve().await {
            Ok(()) => {
                set_solving_mode(&state, true);
                let tick_state = state.clone();
                state.start_auto_refresh(
                    CONFIG.auto_refresh_budget,
                    CONFIG.poll_interval_ms,
                    move || fetch_status(tick_state.clone()),
                );
            }
            Err(e) => show_api_error("Start solving failed", &e),
        }
    });
}

/// Detiene el solver; si acepta, cancela el polling y hace un último fetch
pub fn stop_solve(state: AppState) {
    wasm_bindgen_futures::spawn_local(async move {
        match SolverApi::new().stop_solving().await {
            Ok(()) => {
                // Salir del modo "resolviendo" cancela el polling; queda solo
                // el fetch final
                set_solving_mode(&state, false);
                fetch_status(state.clone());
            }
            Err(e) => show_api_error("Stop solving failed", &e),
        }
    });
}

fn set_solving_mode(state: &AppState, solving: bool) {
    state.sync_solving(solving);
    update_solving_buttons(solving);
}

fn apply_status(state: &AppState, status: &StatusResponse) {
    update_dashboard(&status.solution);
    state.map.borrow_mut().render(&status.solution);
    set_solving_mode(state, status.is_solving);
}
