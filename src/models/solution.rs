// ============================================================================
// SOLUTION MODELS - Snapshot de la solución recibido del backend
// ============================================================================
// El snapshot se reemplaza entero en cada poll, nunca se parchea parcialmente.
// ============================================================================

use serde::Deserialize;

/// Punto geográfico `[lat, lng]`
pub type Point = [f64; 2];

/// Una Location del backend serializa como par de puntos `[pickup, delivery]`.
/// Para un depósito ambos puntos coinciden.
pub type LocationPair = Vec<Point>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Depot {
    pub id: i64,
    pub location: LocationPair,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    #[serde(default)]
    pub location: LocationPair,
    /// Paradas que visita el vehículo, en orden
    #[serde(default)]
    pub route: Vec<Point>,
    pub depot: Depot,
    #[serde(default)]
    pub total_distance_km: Option<String>,
}

/// Referencia mínima al vehículo asignado a un ride (solo necesitamos el id
/// para el color; el resto del objeto se ignora al deserializar).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideVehicle {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    /// `location[0]` = recogida, `location[1]` = entrega
    pub location: LocationPair,
    /// `None` = ride sin asignar
    #[serde(default)]
    pub vehicle: Option<RideVehicle>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingSolution {
    #[serde(default)]
    pub vehicle_list: Vec<Vehicle>,
    #[serde(default)]
    pub depot_list: Vec<Depot>,
    #[serde(default)]
    pub ride_list: Vec<Ride>,
    /// Esquinas sur-oeste / nor-este; se reenvían tal cual a fitBounds
    #[serde(default)]
    pub bounds: serde_json::Value,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub distance_km: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub solution: RoutingSolution,
    #[serde(default)]
    pub score_explanation: Option<String>,
    pub is_solving: bool,
}
