use serde::{Deserialize, Serialize};

/// Configuración global de la app (resuelta en tiempo de compilación vía .env)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base del backend de wishlist ("" = mismo origen, rutas /api/wishlist)
    pub wishlist_api_base: String,
    /// Base del servicio de zonas/edificios (polígonos, checkImpossible, nearby)
    pub zone_service_url: String,
    pub environment: String,
    pub map_config: MapConfig,
    pub nearby_config: NearbyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    /// Zoom al seleccionar una dirección buscada o guardada
    pub select_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 37.3595704,
            default_center_lng: 127.105399,
            default_zoom: 15.0,
            select_zoom: 17.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyConfig {
    /// Radio fijo del indicador visual (el servidor decide el radio real de búsqueda)
    pub radius_m: f64,
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self { radius_m: 50.0 }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wishlist_api_base: String::new(),
            zone_service_url: "http://localhost:8000".to_string(),
            environment: "development".to_string(),
            map_config: MapConfig::default(),
            nearby_config: NearbyConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            wishlist_api_base: option_env!("WISHLIST_API_BASE")
                .unwrap_or("").to_string(),
            zone_service_url: option_env!("ZONE_SERVICE_URL")
                .unwrap_or("http://localhost:8000").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("37.3595704").parse().unwrap_or(37.3595704),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("127.105399").parse().unwrap_or(127.105399),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("15.0").parse().unwrap_or(15.0),
                select_zoom: option_env!("SELECT_MAP_ZOOM")
                    .unwrap_or("17.0").parse().unwrap_or(17.0),
            },
            nearby_config: NearbyConfig {
                radius_m: option_env!("NEARBY_RADIUS_M")
                    .unwrap_or("50.0").parse().unwrap_or(50.0),
            },
        }
    }

    /// URL completa de un endpoint del backend de wishlist
    pub fn wishlist_url(&self, path: &str) -> String {
        format!("{}{}", self.wishlist_api_base, path)
    }

    /// URL completa de un endpoint del servicio de zonas
    pub fn zone_url(&self, path: &str) -> String {
        format!("{}{}", self.zone_service_url, path)
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
    fn default_map_centered_on_expected_coords() {
        let config = AppConfig::default();
        assert_eq!(config.map_config.default_center_lat, 37.3595704);
        assert_eq!(config.map_config.default_center_lng, 127.105399);
        assert_eq!(config.map_config.default_zoom, 15.0);
        assert_eq!(config.map_config.select_zoom, 17.0);
    }

    #[test]
    fn default_nearby_radius_is_50() {
        assert_eq!(AppConfig::default().nearby_config.radius_m, 50.0);
    }

    #[test]
    fn url_helpers_join_base_and_path() {
        let mut config = AppConfig::default();
        config.zone_service_url = "http://zones:8000".to_string();
        assert_eq!(config.wishlist_url("/api/wishlist"), "/api/wishlist");
        assert_eq!(
            config.zone_url("/checkImpossible?x=127.0&y=37.0"),
            "http://zones:8000/checkImpossible?x=127.0&y=37.0"
        );
    }
}
