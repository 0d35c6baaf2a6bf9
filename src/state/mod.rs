pub mod app_state;
pub mod auto_refresh;

pub use app_state::AppState;
pub use auto_refresh::{AutoRefresh, PollSlot, PollTimer, RefreshBudget};
