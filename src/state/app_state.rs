// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Único dueño del estado mutable del cliente: los handlers reciben clones
// de este estado (Rc<RefCell>), no variables de módulo.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::map::MapView;
use crate::state::{AutoRefresh, PollSlot};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    /// Modo "resolviendo": controla qué botón se muestra
    pub solving: Rc<RefCell<bool>>,
    /// Vista del mapa con sus registros de marcadores
    pub map: Rc<RefCell<MapView>>,
    /// Slot del timer de polling activo, si lo hay
    pub auto_refresh: Rc<RefCell<PollSlot<AutoRefresh>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            solving: Rc::new(RefCell::new(false)),
            map: Rc::new(RefCell::new(MapView::new())),
            auto_refresh: Rc::new(RefCell::new(PollSlot::new())),
        }
    }

    pub fn is_solving(&self) -> bool {
        *self.solving.borrow()
    }

    /// Sincroniza el modo "resolviendo" con el flag del backend. Cuando el
    /// solver ya no resuelve, el polling se cancela aunque quede presupuesto.
    pub fn sync_solving(&self, solving: bool) {
        *self.solving.borrow_mut() = solving;
        self.auto_refresh.borrow_mut().sync_with_solver(solving);
    }

    /// Arranca el polling, o recarga el presupuesto si ya hay un timer vivo
    pub fn start_auto_refresh<F>(&self, budget: u32, period_ms: u32, tick_fn: F)
    where
        F: Fn() + 'static,
    {
        self.auto_refresh
            .borrow_mut()
            .start_or_rearm(budget, || AutoRefresh::start(budget, period_ms, tick_fn));
    }

    /// Cancela el polling si está activo
    pub fn cancel_auto_refresh(&self) {
        self.auto_refresh.borrow_mut().cancel();
    }

    pub fn auto_refresh_active(&self) -> bool {
        self.auto_refresh.borrow().is_active()
    }
}
