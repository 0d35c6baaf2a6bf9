pub mod solver_api;

pub use solver_api::{ApiError, SolverApi};
