// ============================================================================
// AUTO REFRESH - Timer de polling con presupuesto de iteraciones
// ============================================================================
// Tarea programada cancelable: un Interval que ejecuta el callback en cada
// tick y se auto-cancela cuando agota su presupuesto. El presupuesto es una
// cota de seguridad contra polling infinito, no una garantía de que el solver
// haya terminado.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;

/// Presupuesto de ticks restantes (lógica pura, separada del timer)
#[derive(Debug, Clone)]
pub struct RefreshBudget {
    remaining: u32,
}

impl RefreshBudget {
    pub fn new(budget: u32) -> Self {
        Self { remaining: budget }
    }

    /// Consume un tick. Devuelve `true` si el timer debe seguir vivo.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }

    pub fn rearm(&mut self, budget: u32) {
        self.remaining = budget;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// Handle desechable del timer de auto-refresh.
/// Dropearlo cancela el Interval subyacente.
pub struct AutoRefresh {
    interval: Rc<RefCell<Option<Interval>>>,
    budget: Rc<RefCell<RefreshBudget>>,
}

impl AutoRefresh {
    /// Arranca un timer que llama a `tick_fn` cada `period_ms` hasta agotar
    /// `budget` iteraciones.
    pub fn start<F>(budget: u32, period_ms: u32, tick_fn: F) -> Self
    where
        F: Fn() + 'static,
    {
        let interval = Rc::new(RefCell::new(None));
        let shared_budget = Rc::new(RefCell::new(RefreshBudget::new(budget)));

        let interval_clone = interval.clone();
        let budget_clone = shared_budget.clone();
        let handle = Interval::new(period_ms, move || {
            tick_fn();
            if !budget_clone.borrow_mut().tick() {
                log::info!("⏰ Auto-refresh: presupuesto agotado, cancelando timer");
                // Dropear el Interval dentro de su propio callback lo cancela
                interval_clone.borrow_mut().take();
            }
        });
        *interval.borrow_mut() = Some(handle);

        log::info!(
            "⏰ Auto-refresh armado: {} ticks cada {} ms",
            budget,
            period_ms
        );

        Self {
            interval,
            budget: shared_budget,
        }
    }

    /// Recarga el presupuesto de un timer vivo (solve repetido)
    pub fn rearm(&self, budget: u32) {
        self.budget.borrow_mut().rearm(budget);
    }

    /// Cancela el timer inmediatamente
    pub fn cancel(&self) {
        if self.interval.borrow_mut().take().is_some() {
            log::info!("⏰ Auto-refresh cancelado");
        }
    }

    pub fn is_active(&self) -> bool {
        self.interval.borrow().is_some()
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Operaciones del timer que necesita el slot de polling.
/// Abstraído para poder testear la lógica del slot sin un Interval real.
pub trait PollTimer {
    fn is_active(&self) -> bool;
    fn rearm(&self, budget: u32);
    fn cancel(&self);
}

impl PollTimer for AutoRefresh {
    fn is_active(&self) -> bool {
        AutoRefresh::is_active(self)
    }

    fn rearm(&self, budget: u32) {
        AutoRefresh::rearm(self, budget);
    }

    fn cancel(&self) {
        AutoRefresh::cancel(self);
    }
}

/// Slot dueño del timer de polling activo, si lo hay
pub struct PollSlot<T: PollTimer> {
    timer: Option<T>,
}

impl<T: PollTimer> PollSlot<T> {
    pub fn new() -> Self {
        Self { timer: None }
    }

    /// Arranca un timer nuevo, o recarga el presupuesto si ya hay uno vivo
    /// (solve repetido no apila intervalos)
    pub fn start_or_rearm(&mut self, budget: u32, start: impl FnOnce() -> T) {
        if let Some(timer) = &self.timer {
            if timer.is_active() {
                timer.rearm(budget);
                return;
            }
        }
        self.timer = Some(start());
    }

    /// Cancela y suelta el timer inmediatamente
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    /// El polling solo tiene sentido mientras el solver resuelve: un snapshot
    /// con isSolving=false cancela el timer aunque quede presupuesto
    pub fn sync_with_solver(&mut self, is_solving: bool) {
        if !is_solving && self.timer.is_some() {
            log::info!("⏰ El solver ya no resuelve, cancelando auto-refresh");
            self.cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.as_ref().map(T::is_active).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presupuesto_se_agota_en_n_ticks() {
        let mut budget = RefreshBudget::new(3);
        assert!(budget.tick());
        assert!(budget.tick());
        assert!(!budget.tick());
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn presupuesto_agotado_no_revive_solo() {
        let mut budget = RefreshBudget::new(1);
        assert!(!budget.tick());
        assert!(!budget.tick());
    }

    #[test]
    fn rearm_recarga_el_presupuesto() {
        let mut budget = RefreshBudget::new(2);
        budget.tick();
        budget.rearm(300);
        assert_eq!(budget.remaining(), 300);
    }

    #[test]
    fn presupuesto_cero_cancela_en_el_primer_tick() {
        let mut budget = RefreshBudget::new(0);
        assert!(!budget.tick());
    }

    #[derive(Clone, Default)]
    struct FakeTimer {
        active: Rc<std::cell::Cell<bool>>,
        rearmed_to: Rc<std::cell::Cell<Option<u32>>>,
    }

    impl FakeTimer {
        fn armed() -> Self {
            let timer = Self::default();
            timer.active.set(true);
            timer
        }
    }

    impl PollTimer for FakeTimer {
        fn is_active(&self) -> bool {
            self.active.get()
        }

        fn rearm(&self, budget: u32) {
            self.rearmed_to.set(Some(budget));
        }

        fn cancel(&self) {
            self.active.set(false);
        }
    }

    #[test]
    fn stop_inmediato_tras_solve_cancela_el_timer() {
        // solve arma el timer; stop llega antes del primer tick
        let mut slot = PollSlot::new();
        let timer = FakeTimer::armed();
        let handle = timer.clone();
        slot.start_or_rearm(300, move || handle);
        assert!(slot.is_active());

        slot.cancel();
        assert!(!slot.is_active());
        assert!(!timer.is_active());
    }

    #[test]
    fn solve_repetido_recarga_en_vez_de_apilar() {
        let mut slot = PollSlot::new();
        let timer = FakeTimer::armed();
        let handle = timer.clone();
        slot.start_or_rearm(300, move || handle);

        // Segundo solve con el timer vivo: rearm, el closure no se invoca
        slot.start_or_rearm(150, || panic!("no debe arrancar otro timer"));
        assert_eq!(timer.rearmed_to.get(), Some(150));
    }

    #[test]
    fn timer_autocancelado_se_reemplaza() {
        let mut slot = PollSlot::new();
        let dead = FakeTimer::default(); // presupuesto agotado: inactivo
        let handle = dead.clone();
        slot.start_or_rearm(300, move || handle);
        assert!(!slot.is_active());

        let fresh = FakeTimer::armed();
        let handle = fresh.clone();
        slot.start_or_rearm(300, move || handle);
        assert!(slot.is_active());
    }

    #[test]
    fn snapshot_con_solver_parado_cancela_el_polling() {
        let mut slot = PollSlot::new();
        let timer = FakeTimer::armed();
        let handle = timer.clone();
        slot.start_or_rearm(300, move || handle);

        // Mientras el solver resuelve, el timer sigue
        slot.sync_with_solver(true);
        assert!(slot.is_active());

        // El solver terminó por su cuenta: no se agota el presupuesto a vacío
        slot.sync_with_solver(false);
        assert!(!slot.is_active());
        assert!(!timer.is_active());
    }

    #[test]
    fn sync_sin_timer_es_inofensivo() {
        let mut slot: PollSlot<FakeTimer> = PollSlot::new();
        slot.sync_with_solver(false);
        assert!(!slot.is_active());
    }
}
