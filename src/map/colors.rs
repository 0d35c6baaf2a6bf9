// ============================================================================
// COLORS - Paleta estable por id
// ============================================================================

use crate::models::RideVehicle;

/// Paleta cíclica: el color de un id es estable entre snapshots
pub const COLORS: [&str; 15] = [
    "aqua",
    "aquamarine",
    "blue",
    "cornflowerblue",
    "forestgreen",
    "gold",
    "limegreen",
    "maroon",
    "mediumvioletred",
    "orange",
    "crimson",
    "blueviolet",
    "slateblue",
    "tomato",
    "chocolate",
];

/// Color estable para un id (módulo el tamaño de la paleta)
pub fn color_for(id: i64) -> &'static str {
    COLORS[id.rem_euclid(COLORS.len() as i64) as usize]
}

/// Color del vehículo asignado; `None` si el ride no tiene vehículo
pub fn color_for_vehicle(vehicle: Option<&RideVehicle>) -> Option<&'static str> {
    vehicle.map(|v| color_for(v.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_estable_por_id() {
        assert_eq!(color_for(0), "aqua");
        assert_eq!(color_for(2), "blue");
        assert_eq!(color_for(14), "chocolate");
    }

    #[test]
    fn la_paleta_es_ciclica() {
        assert_eq!(color_for(15), color_for(0));
        assert_eq!(color_for(31), color_for(1));
    }

    #[test]
    fn id_negativo_no_paniquea() {
        // rem_euclid mantiene el índice dentro de la paleta
        let _ = color_for(-1);
        assert_eq!(color_for(-15), color_for(0));
    }

    #[test]
    fn ride_sin_vehiculo_no_tiene_color() {
        assert_eq!(color_for_vehicle(None), None);
        let v = RideVehicle { id: 3 };
        assert_eq!(color_for_vehicle(Some(&v)), Some("cornflowerblue"));
    }
}
