pub mod error;
pub mod solution;

pub use error::ErrorBody;
pub use solution::{
    Depot, LocationPair, Point, Ride, RideVehicle, RoutingSolution, StatusResponse, Vehicle,
};
