// ============================================================================
// ROUTE PLAN - Planificación pura de la capa de rutas
// ============================================================================
// Dado un snapshot, produce la lista completa de primitivas a dibujar.
// La capa de rutas se limpia y redibuja entera en cada render (no es
// incremental), así que el plan de un mismo snapshot es siempre idéntico.
// ============================================================================

use serde::Serialize;

use crate::map::colors::{color_for, color_for_vehicle};
use crate::models::{Point, RoutingSolution};

/// Polilínea de un tramo de ruta o de un ride sin asignar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolylineSpec {
    pub points: Vec<Point>,
    pub color: &'static str,
    pub dashed: bool,
}

/// Decorador de flechas direccionales sobre una secuencia de puntos
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrowSpec {
    pub points: Vec<Point>,
    /// `None` = color por defecto del decorador
    pub color: Option<&'static str>,
}

/// Punto de recogida (verde) o entrega (rojo) de un ride
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopSpec {
    pub point: Point,
    pub color: &'static str,
}

/// Contenido completo de la capa de rutas para un snapshot
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoutePlan {
    pub stops: Vec<StopSpec>,
    pub lines: Vec<PolylineSpec>,
    pub arrows: Vec<ArrowSpec>,
}

/// Calcula la capa de rutas de un snapshot. Determinista: el mismo snapshot
/// produce el mismo plan.
pub fn route_plan(solution: &RoutingSolution) -> RoutePlan {
    let mut plan = RoutePlan::default();

    // Rides: puntos de recogida/entrega, y línea discontinua si no hay vehículo
    for ride in &solution.ride_list {
        let (Some(pickup), Some(delivery)) = (ride.location.first(), ride.location.get(1)) else {
            continue;
        };
        plan.stops.push(StopSpec {
            point: *pickup,
            color: "green",
        });
        plan.stops.push(StopSpec {
            point: *delivery,
            color: "red",
        });

        if color_for_vehicle(ride.vehicle.as_ref()).is_none() {
            let points = vec![*pickup, *delivery];
            plan.lines.push(PolylineSpec {
                points: points.clone(),
                color: "blue",
                dashed: true,
            });
            plan.arrows.push(ArrowSpec {
                points,
                color: None,
            });
        }
    }

    // Rutas de vehículos: tramos alternando discontinuo/continuo desde el
    // punto de recogida del depósito, empezando en discontinuo
    for vehicle in &solution.vehicle_list {
        let color = color_for(vehicle.id);
        let Some(depot_start) = vehicle.depot.location.first() else {
            continue;
        };

        let mut from = *depot_start;
        let mut is_internal = true;
        for to in &vehicle.route {
            plan.lines.push(PolylineSpec {
                points: vec![from, *to],
                color,
                dashed: is_internal,
            });
            is_internal = !is_internal;
            from = *to;
        }

        if !vehicle.route.is_empty() {
            plan.arrows.push(ArrowSpec {
                points: vehicle.route.clone(),
                color: Some(color),
            });
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Depot, Ride, RideVehicle, Vehicle};

    fn depot(id: i64, p: Point) -> Depot {
        Depot {
            id,
            location: vec![p, p],
        }
    }

    fn vehicle(id: i64, depot_point: Point, route: Vec<Point>) -> Vehicle {
        Vehicle {
            id,
            location: vec![depot_point, depot_point],
            route,
            depot: depot(0, depot_point),
            total_distance_km: None,
        }
    }

    fn solution(vehicles: Vec<Vehicle>, rides: Vec<Ride>) -> RoutingSolution {
        RoutingSolution {
            vehicle_list: vehicles,
            depot_list: vec![depot(0, [0.0, 0.0])],
            ride_list: rides,
            bounds: serde_json::Value::Null,
            score: None,
            distance_km: None,
        }
    }

    #[test]
    fn ride_sin_asignar_dibuja_linea_discontinua_con_flecha() {
        let sol = solution(
            vec![],
            vec![Ride {
                location: vec![[0.0, 0.0], [1.0, 1.0]],
                vehicle: None,
            }],
        );
        let plan = route_plan(&sol);

        assert_eq!(plan.stops.len(), 2);
        assert_eq!(plan.stops[0].color, "green");
        assert_eq!(plan.stops[1].color, "red");
        assert_eq!(plan.lines.len(), 1);
        assert!(plan.lines[0].dashed);
        assert_eq!(plan.lines[0].color, "blue");
        assert_eq!(plan.lines[0].points, vec![[0.0, 0.0], [1.0, 1.0]]);
        assert_eq!(plan.arrows.len(), 1);
        assert_eq!(plan.arrows[0].color, None);
    }

    #[test]
    fn ride_asignado_no_dibuja_linea_propia() {
        let sol = solution(
            vec![],
            vec![Ride {
                location: vec![[0.0, 0.0], [1.0, 1.0]],
                vehicle: Some(RideVehicle { id: 0 }),
            }],
        );
        let plan = route_plan(&sol);

        // Solo quedan los puntos de recogida/entrega
        assert_eq!(plan.stops.len(), 2);
        assert!(plan.lines.is_empty());
        assert!(plan.arrows.is_empty());
    }

    #[test]
    fn tramos_alternan_empezando_en_discontinuo() {
        // Ruta de 2k puntos => 2k tramos (el primero sale del depósito)
        let route: Vec<Point> = (0..6).map(|i| [i as f64, i as f64]).collect();
        let sol = solution(vec![vehicle(0, [9.0, 9.0], route)], vec![]);
        let plan = route_plan(&sol);

        assert_eq!(plan.lines.len(), 6);
        for (i, line) in plan.lines.iter().enumerate() {
            assert_eq!(line.dashed, i % 2 == 0, "tramo {} con patrón incorrecto", i);
        }
        // El primer tramo sale del punto de recogida del depósito
        assert_eq!(plan.lines[0].points[0], [9.0, 9.0]);
        // Los tramos son contiguos
        for pair in plan.lines.windows(2) {
            assert_eq!(pair[0].points[1], pair[1].points[0]);
        }
    }

    #[test]
    fn ruta_con_color_estable_por_id_de_vehiculo() {
        let route = vec![[0.0, 0.0], [1.0, 1.0]];
        let sol = solution(vec![vehicle(17, [0.0, 0.0], route)], vec![]);
        let plan = route_plan(&sol);

        // 17 % 15 == 2 -> "blue"
        assert!(plan.lines.iter().all(|l| l.color == "blue"));
        assert_eq!(plan.arrows[0].color, Some("blue"));
    }

    #[test]
    fn plan_idempotente_para_el_mismo_snapshot() {
        let sol = solution(
            vec![vehicle(1, [5.0, 5.0], vec![[0.0, 0.0], [1.0, 1.0]])],
            vec![Ride {
                location: vec![[0.0, 0.0], [1.0, 1.0]],
                vehicle: None,
            }],
        );
        assert_eq!(route_plan(&sol), route_plan(&sol));
    }

    #[test]
    fn vehiculo_sin_ruta_no_dibuja_nada() {
        let sol = solution(vec![vehicle(0, [0.0, 0.0], vec![])], vec![]);
        let plan = route_plan(&sol);
        assert!(plan.lines.is_empty());
        assert!(plan.arrows.is_empty());
    }
}
