// ============================================================================
// DASHBOARD VIEW - Esqueleto de la página y tablas de resumen
// ============================================================================
// Las tablas se reemplazan enteras en cada snapshot (no son incrementales),
// así que renderizar dos veces el mismo snapshot deja el mismo contenido.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, set_inner_html, set_text_content, ElementBuilder};
use crate::map::color_for;
use crate::models::{RoutingSolution, Vehicle};

/// Fracción de rides asignados a un vehículo.
/// `vehicle_rides = (route.len() - 2) / 2`; el porcentaje se acota a 0 cuando
/// no hay rides para no pintar NaN en la barra de progreso.
pub fn ride_progress(route_len: usize, total_rides: usize) -> (f64, f64) {
    let vehicle_rides = (route_len as f64 - 2.0) / 2.0;
    if total_rides == 0 {
        return (vehicle_rides, 0.0);
    }
    let percentage = vehicle_rides / total_rides as f64 * 100.0;
    (vehicle_rides, percentage)
}

/// Construye el esqueleto completo del dashboard
pub fn render_dashboard() -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("dashboard-header")
        .child(
            ElementBuilder::new("button")?
                .id("solveButton")?
                .class("btn btn-success")
                .text("Solve")
                .build(),
        )?
        .child(
            ElementBuilder::new("button")?
                .id("stopSolvingButton")?
                .class("btn btn-danger")
                .attr("hidden", "hidden")?
                .text("Stop solving")
                .build(),
        )?
        .child(
            ElementBuilder::new("span")?
                .class("dashboard-summary")
                .html(
                    "Score: <span id=\"score\"></span> \
                     Distance: <span id=\"distance\"></span>",
                )
                .build(),
        )?
        .build();

    let map = ElementBuilder::new("div")?.id("map")?.class("map-container").build();

    let vehicles = ElementBuilder::new("table")?
        .class("table")
        .child(
            ElementBuilder::new("tbody")?
                .id("vehicles")?
                .build(),
        )?
        .build();
    let depots = ElementBuilder::new("table")?
        .class("table")
        .child(ElementBuilder::new("tbody")?.id("depots")?.build())?
        .build();

    let side_panel = ElementBuilder::new("div")?
        .class("side-panel")
        .child(ElementBuilder::new("h6")?.text("Vehicles").build())?
        .child(vehicles)?
        .child(ElementBuilder::new("h6")?.text("Depots").build())?
        .child(depots)?
        .build();

    let notifications = ElementBuilder::new("div")?
        .id("notificationPanel")?
        .class("notification-panel")
        .build();

    Ok(ElementBuilder::new("div")?
        .class("dashboard")
        .child(header)?
        .child(map)?
        .child(side_panel)?
        .child(notifications)?
        .build())
}

/// Reemplaza tablas y resumen con el contenido del snapshot
pub fn update_dashboard(solution: &RoutingSolution) {
    update_vehicles_table(solution);
    update_depots_table(solution);
    update_summary(solution);
}

fn update_vehicles_table(solution: &RoutingSolution) {
    let Some(table) = get_element_by_id("vehicles") else {
        return;
    };
    let total_rides = solution.ride_list.len();
    let rows: String = solution
        .vehicle_list
        .iter()
        .map(|vehicle| vehicle_row_html(vehicle, total_rides))
        .collect();
    set_inner_html(&table, &rows);
}

fn vehicle_row_html(vehicle: &Vehicle, total_rides: usize) -> String {
    let color = color_for(vehicle.id);
    let (vehicle_rides, percentage) = ride_progress(vehicle.route.len(), total_rides);
    let distance = vehicle.total_distance_km.as_deref().unwrap_or("");
    format!(
        "<tr class=\"table-active\">\
         <td><i class=\"fas fa-crosshairs\" id=\"crosshairs-{id}\" \
         style=\"background-color: {color}; display: inline-block; \
         width: 1rem; height: 1rem; text-align: center\"></i></td>\
         <td>Vehicle {id}</td>\
         <td><div class=\"progress\">\
         <div class=\"progress-bar\" role=\"progressbar\" style=\"width: {percentage}%\">\
         {vehicle_rides}/{total_rides}</div></div></td>\
         <td>{distance}</td>\
         </tr>",
        id = vehicle.id,
    )
}

fn update_depots_table(solution: &RoutingSolution) {
    let Some(table) = get_element_by_id("depots") else {
        return;
    };
    let rows: String = solution
        .depot_list
        .iter()
        .map(|depot| {
            let color = color_for(depot.id);
            format!(
                "<tr class=\"table-active\">\
                 <td><i class=\"fas fa-crosshairs\" id=\"crosshairs-{id}\" \
                 style=\"background-color: {color}; display: inline-block; \
                 width: 1rem; height: 1rem; text-align: center\"></i></td>\
                 <td>Depot {id}</td>\
                 </tr>",
                id = depot.id,
            )
        })
        .collect();
    set_inner_html(&table, &rows);
}

fn update_summary(solution: &RoutingSolution) {
    if let Some(score) = get_element_by_id("score") {
        set_text_content(&score, solution.score.as_deref().unwrap_or(""));
    }
    if let Some(distance) = get_element_by_id("distance") {
        set_text_content(&distance, solution.distance_km.as_deref().unwrap_or(""));
    }
}

/// Alterna la visibilidad de los botones solve/stop según el modo
pub fn update_solving_buttons(solving: bool) {
    if let Some(solve) = get_element_by_id("solveButton") {
        let _ = toggle_hidden(&solve, solving);
    }
    if let Some(stop) = get_element_by_id("stopSolvingButton") {
        let _ = toggle_hidden(&stop, !solving);
    }
}

fn toggle_hidden(element: &Element, hidden: bool) -> Result<(), JsValue> {
    if hidden {
        element.set_attribute("hidden", "hidden")
    } else {
        element.remove_attribute("hidden")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Depot;

    fn vehicle_with_route(id: i64, route_len: usize) -> Vehicle {
        Vehicle {
            id,
            location: vec![[0.0, 0.0], [0.0, 0.0]],
            route: (0..route_len).map(|i| [i as f64, 0.0]).collect(),
            depot: Depot {
                id: 0,
                location: vec![[0.0, 0.0], [0.0, 0.0]],
            },
            total_distance_km: Some("3km 200m".to_string()),
        }
    }

    #[test]
    fn progreso_como_fraccion_de_rides() {
        // Ruta de 6 puntos => (6 - 2) / 2 = 2 rides, de 4 totales => 50%
        let (vehicle_rides, percentage) = ride_progress(6, 4);
        assert_eq!(vehicle_rides, 2.0);
        assert_eq!(percentage, 50.0);
    }

    #[test]
    fn progreso_sin_rides_no_produce_nan() {
        let (_, percentage) = ride_progress(2, 0);
        assert_eq!(percentage, 0.0);
        assert!(!percentage.is_nan());
    }

    #[test]
    fn fila_de_vehiculo_lleva_color_progreso_y_distancia() {
        let html = vehicle_row_html(&vehicle_with_route(2, 6), 4);
        assert!(html.contains("Vehicle 2"));
        assert!(html.contains("background-color: blue"));
        assert!(html.contains("width: 50%"));
        assert!(html.contains("2/4"));
        assert!(html.contains("3km 200m"));
    }

    #[test]
    fn misma_fila_para_el_mismo_snapshot() {
        let vehicle = vehicle_with_route(1, 4);
        assert_eq!(vehicle_row_html(&vehicle, 3), vehicle_row_html(&vehicle, 3));
    }
}
