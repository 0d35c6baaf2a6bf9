// ============================================================================
// LEAFLET FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS del glue de Leaflet - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Crea el mapa Leaflet en el contenedor con capas de tiles y grupos
    /// (rutas, vehículos, depósitos)
    #[wasm_bindgen(js_name = initLeafletMap)]
    pub fn init_leaflet_map(container_id: &str, center_lat: f64, center_lng: f64, zoom: f64);

    /// Ajusta el viewport a los bounds del snapshot (JSON tal cual del backend)
    #[wasm_bindgen(js_name = fitMapBounds)]
    pub fn fit_map_bounds(bounds_json: &str);

    /// Vacía la capa de rutas (clear-and-redraw completo)
    #[wasm_bindgen(js_name = clearRouteLayer)]
    pub fn clear_route_layer();

    /// Añade una polilínea a la capa de rutas (JSON de PolylineSpec)
    #[wasm_bindgen(js_name = addRoutePolyline)]
    pub fn add_route_polyline(spec_json: &str);

    /// Añade un decorador de flechas a la capa de rutas (JSON de ArrowSpec)
    #[wasm_bindgen(js_name = addRouteArrows)]
    pub fn add_route_arrows(spec_json: &str);

    /// Añade un punto de recogida/entrega a la capa de rutas
    #[wasm_bindgen(js_name = addStopDot)]
    pub fn add_stop_dot(lat: f64, lng: f64, color: &str);

    /// Crea o mueve el marcador de un depósito y actualiza su popup
    #[wasm_bindgen(js_name = upsertDepotMarker)]
    pub fn upsert_depot_marker(id: i64, lat: f64, lng: f64, popup_html: &str);

    /// Crea o mueve el marcador de un vehículo y actualiza su popup
    #[wasm_bindgen(js_name = upsertVehicleMarker)]
    pub fn upsert_vehicle_marker(id: i64, lat: f64, lng: f64, popup_html: &str);
}
