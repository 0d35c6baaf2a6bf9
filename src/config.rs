use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub poll_interval_ms: u32,
    pub auto_refresh_budget: u32,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            poll_interval_ms: 500,
            auto_refresh_budget: 300,
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 51.505,
            default_center_lng: -0.09,
            default_zoom: 13.0,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación.
    /// Por defecto el backend es same-origin (URL base vacía).
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL").unwrap_or("").to_string(),
            poll_interval_ms: option_env!("POLL_INTERVAL_MS")
                .unwrap_or("500").parse().unwrap_or(500),
            auto_refresh_budget: option_env!("AUTO_REFRESH_BUDGET")
                .unwrap_or("300").parse().unwrap_or(300),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("51.505").parse().unwrap_or(51.505),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("-0.09").parse().unwrap_or(-0.09),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("13.0").parse().unwrap_or(13.0),
            },
        }
    }

    /// Obtiene la URL base del backend
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_poll_parameters() {
        let config = AppConfig::default();
        assert_eq!(config.poll_interval_ms, 500);
        assert_eq!(config.auto_refresh_budget, 300);
        assert!(config.backend_url().is_empty());
    }
}
