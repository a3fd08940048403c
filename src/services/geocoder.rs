// ============================================================================
// GEOCODER - Geocoding/reverse-geocoding vía el SDK del mapa (bridge JS)
// ============================================================================
// El SDK trabaja con callbacks; el bridge los envuelve en Promises que acá
// consumimos con JsFuture. Un fallo de geocoding nunca es fatal: el caller
// degrada a "주소 없음" o muestra un alert de "no encontrado".
// ============================================================================

use serde::Deserialize;
use wasm_bindgen_futures::JsFuture;

use crate::models::Coordinate;
use crate::utils::naver_ffi::{naver_geocode, naver_reverse_geocode};

/// Placeholder cuando el reverse-geocode no resuelve dirección
pub const UNKNOWN_ADDRESS: &str = "주소 없음";

/// Resultado de geocoding del SDK (JSON que arma el bridge)
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub road_address: Option<String>,
    #[serde(default)]
    pub jibun_address: Option<String>,
}

impl GeocodeResult {
    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// Dirección para mostrar: vial, si no catastral, si no el placeholder
    pub fn display_address(&self) -> String {
        self.road_address
            .as_deref()
            .filter(|a| !a.is_empty())
            .or_else(|| self.jibun_address.as_deref().filter(|a| !a.is_empty()))
            .unwrap_or(UNKNOWN_ADDRESS)
            .to_string()
    }
}

pub struct Geocoder;

impl Geocoder {
    /// Dirección de texto libre → coordenada. Err cuando no hay resultados.
    pub async fn geocode(query: &str) -> Result<GeocodeResult, String> {
        let value = JsFuture::from(naver_geocode(query))
            .await
            .map_err(|e| format!("Geocode error: {:?}", e))?;
        let json = value
            .as_string()
            .ok_or_else(|| "Geocode error: respuesta no es string".to_string())?;
        serde_json::from_str(&json).map_err(|e| format!("Parse error: {}", e))
    }

    /// Coordenada → dirección legible. Err cuando el SDK no resuelve.
    pub async fn reverse_geocode(coord: Coordinate) -> Result<String, String> {
        let value = JsFuture::from(naver_reverse_geocode(coord.lat, coord.lng))
            .await
            .map_err(|e| format!("Reverse geocode error: {:?}", e))?;
        value
            .as_string()
            .filter(|address| !address.is_empty())
            .ok_or_else(|| "Reverse geocode: sin dirección".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(road: Option<&str>, jibun: Option<&str>) -> GeocodeResult {
        GeocodeResult {
            lat: 37.0,
            lng: 127.0,
            road_address: road.map(|s| s.to_string()),
            jibun_address: jibun.map(|s| s.to_string()),
        }
    }

    #[test]
    fn road_address_wins_over_jibun() {
        let r = result(Some("세종대로 110"), Some("태평로1가 31"));
        assert_eq!(r.display_address(), "세종대로 110");
    }

    #[test]
    fn falls_back_to_jibun_then_placeholder() {
        assert_eq!(result(None, Some("태평로1가 31")).display_address(), "태평로1가 31");
        assert_eq!(result(Some(""), None).display_address(), UNKNOWN_ADDRESS);
    }
}
