// ============================================================================
// MAP VIEW - Aplica el plan de render sobre Leaflet
// ============================================================================
// Dueño de los registros de marcadores (id de depósito/vehículo → registro).
// Los registros se pueblan la primera vez que se ve un id y nunca se vacían:
// los marcadores se mutan en cada poll, no se recrean. El viewport se ajusta
// a los bounds SOLO con el primer snapshot, para no pisar el pan/zoom del
// usuario.
// ============================================================================

use std::collections::HashMap;

use crate::config::CONFIG;
use crate::map::colors::color_for;
use crate::map::leaflet_ffi;
use crate::map::plan::route_plan;
use crate::models::{Depot, Point, RoutingSolution, Vehicle};

/// Última posición aplicada a un marcador
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRecord {
    pub point: Point,
}

/// Mutación a aplicar sobre el marcador de un id (crear o mover + popup)
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerUpsert {
    pub id: i64,
    pub point: Point,
    pub popup_html: String,
}

pub struct MapView {
    depot_markers: HashMap<i64, MarkerRecord>,
    vehicle_markers: HashMap<i64, MarkerRecord>,
    fitted: bool,
}

impl MapView {
    pub fn new() -> Self {
        Self {
            depot_markers: HashMap::new(),
            vehicle_markers: HashMap::new(),
            fitted: false,
        }
    }

    /// Crea el mapa Leaflet en su contenedor
    pub fn init(&self, container_id: &str) {
        let map_config = &CONFIG.map_config;
        leaflet_ffi::init_leaflet_map(
            container_id,
            map_config.default_center_lat,
            map_config.default_center_lng,
            map_config.default_zoom,
        );
        log::info!("🗺️ Mapa Leaflet inicializado en #{}", container_id);
    }

    /// Reconcilia el estado visual del mapa contra un snapshot
    pub fn render(&mut self, solution: &RoutingSolution) {
        if self.take_first_fit(solution) {
            if let Ok(bounds_json) = serde_json::to_string(&solution.bounds) {
                leaflet_ffi::fit_map_bounds(&bounds_json);
            }
        }

        for upsert in self.plan_depot_upserts(&solution.depot_list) {
            leaflet_ffi::upsert_depot_marker(
                upsert.id,
                upsert.point[0],
                upsert.point[1],
                &upsert.popup_html,
            );
        }
        for upsert in self.plan_vehicle_upserts(&solution.vehicle_list) {
            leaflet_ffi::upsert_vehicle_marker(
                upsert.id,
                upsert.point[0],
                upsert.point[1],
                &upsert.popup_html,
            );
        }

        self.redraw_route_layer(solution);
    }

    /// Devuelve `true` solo en el primer snapshot con bounds: después de eso
    /// el viewport pertenece al usuario
    fn take_first_fit(&mut self, solution: &RoutingSolution) -> bool {
        if self.fitted || solution.bounds.is_null() {
            return false;
        }
        self.fitted = true;
        true
    }

    /// Actualiza el registro de depósitos y devuelve las mutaciones a aplicar
    fn plan_depot_upserts(&mut self, depots: &[Depot]) -> Vec<MarkerUpsert> {
        depots
            .iter()
            .filter_map(|depot| {
                let point = *depot.location.first()?;
                self.depot_markers.insert(depot.id, MarkerRecord { point });
                Some(MarkerUpsert {
                    id: depot.id,
                    point,
                    popup_html: depot_popup_content(depot.id, color_for(depot.id)),
                })
            })
            .collect()
    }

    /// Actualiza el registro de vehículos y devuelve las mutaciones a aplicar
    fn plan_vehicle_upserts(&mut self, vehicles: &[Vehicle]) -> Vec<MarkerUpsert> {
        vehicles
            .iter()
            .filter_map(|vehicle| {
                let point = *vehicle.location.first()?;
                self.vehicle_markers
                    .insert(vehicle.id, MarkerRecord { point });
                Some(MarkerUpsert {
                    id: vehicle.id,
                    point,
                    popup_html: vehicle_popup_content(vehicle.id, color_for(vehicle.id)),
                })
            })
            .collect()
    }

    fn redraw_route_layer(&self, solution: &RoutingSolution) {
        let plan = route_plan(solution);
        leaflet_ffi::clear_route_layer();

        for stop in &plan.stops {
            leaflet_ffi::add_stop_dot(stop.point[0], stop.point[1], stop.color);
        }
        for line in &plan.lines {
            if let Ok(json) = serde_json::to_string(line) {
                leaflet_ffi::add_route_polyline(&json);
            }
        }
        for arrow in &plan.arrows {
            if let Ok(json) = serde_json::to_string(arrow) {
                leaflet_ffi::add_route_arrows(&json);
            }
        }
    }

    pub fn depot_marker_count(&self) -> usize {
        self.depot_markers.len()
    }

    pub fn vehicle_marker_count(&self) -> usize {
        self.vehicle_markers.len()
    }
}

/// HTML del popup de un depósito, con su chip de color
pub fn depot_popup_content(id: i64, color: &str) -> String {
    format!(
        "<h5>Depot {id}</h5>\
         <ul class=\"list-unstyled\">\
         <li><span style=\"background-color: {color}; display: inline-block; \
         width: 12px; height: 12px; text-align: center\"></span> {color}</li>\
         </ul>"
    )
}

/// HTML del popup de un vehículo
pub fn vehicle_popup_content(id: i64, color: &str) -> String {
    format!(
        "<h5>Vehicle {id}</h5>\
         <ul class=\"list-unstyled\">\
         <li><span style=\"background-color: {color}; display: inline-block; \
         width: 12px; height: 12px; text-align: center\"></span> {color}</li>\
         </ul>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depots(ids: &[i64]) -> Vec<Depot> {
        ids.iter()
            .map(|&id| Depot {
                id,
                location: vec![[1.0, 2.0], [1.0, 2.0]],
            })
            .collect()
    }

    #[test]
    fn el_registro_de_marcadores_solo_crece() {
        let mut view = MapView::new();

        view.plan_depot_upserts(&depots(&[0, 1]));
        assert_eq!(view.depot_marker_count(), 2);

        // Un snapshot con menos depósitos no encoge el registro
        view.plan_depot_upserts(&depots(&[0]));
        assert_eq!(view.depot_marker_count(), 2);

        // Un id nuevo lo amplía
        view.plan_depot_upserts(&depots(&[0, 1, 2]));
        assert_eq!(view.depot_marker_count(), 3);
    }

    #[test]
    fn ids_repetidos_mutan_sin_duplicar() {
        let mut view = MapView::new();
        let ds = depots(&[7]);
        let first = view.plan_depot_upserts(&ds);
        let second = view.plan_depot_upserts(&ds);
        assert_eq!(view.depot_marker_count(), 1);
        // El upsert se reaplica idéntico: mutar, no recrear
        assert_eq!(first, second);
    }

    #[test]
    fn deposito_sin_location_se_ignora() {
        let mut view = MapView::new();
        let upserts = view.plan_depot_upserts(&[Depot {
            id: 0,
            location: vec![],
        }]);
        assert!(upserts.is_empty());
        assert_eq!(view.depot_marker_count(), 0);
    }

    #[test]
    fn el_viewport_se_ajusta_solo_una_vez() {
        let mut view = MapView::new();
        let mut sol = RoutingSolution {
            vehicle_list: vec![],
            depot_list: vec![],
            ride_list: vec![],
            bounds: serde_json::Value::Null,
            score: None,
            distance_km: None,
        };

        // Sin bounds todavía: no consume el primer ajuste
        assert!(!view.take_first_fit(&sol));

        sol.bounds = serde_json::json!([[51.4, -0.4], [51.8, 0.1]]);
        assert!(view.take_first_fit(&sol));
        // Los snapshots siguientes nunca recentran
        assert!(!view.take_first_fit(&sol));
    }

    #[test]
    fn popup_de_deposito_lleva_id_y_color() {
        let html = depot_popup_content(3, "cornflowerblue");
        assert!(html.contains("Depot 3"));
        assert!(html.contains("background-color: cornflowerblue"));
    }
}
