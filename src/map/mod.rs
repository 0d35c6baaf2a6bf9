// ============================================================================
// MAP MODULE - Reconciliación del mapa
// ============================================================================
// La lógica de reconciliación es pura (plan.rs, colors.rs); la vista aplica
// el plan sobre Leaflet a través del FFI sin estado (leaflet_ffi.rs).
// ============================================================================

pub mod colors;
pub mod leaflet_ffi;
pub mod plan;
pub mod view;

pub use colors::{color_for, color_for_vehicle};
pub use plan::{route_plan, ArrowSpec, PolylineSpec, RoutePlan, StopSpec};
pub use view::MapView;
