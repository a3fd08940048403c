// ============================================================================
// ZONE SERVICE - Chequeo de zona restringida + polígonos (Stateless)
// ============================================================================
// Pure request/response: sin retry, sin caché. Cada nueva selección vuelve a
// preguntar al servidor.
// ============================================================================

use gloo_net::http::Request;
use serde_json::Value;

use crate::config::CONFIG;
use crate::models::Coordinate;

/// Cliente del servicio de zonas - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ZoneService;

impl ZoneService {
    pub fn new() -> Self {
        Self
    }

    /// ¿La coordenada cae dentro de una zona restringida?
    /// El backend habla en x=lng / y=lat.
    pub async fn check_impossible(&self, coord: Coordinate) -> Result<bool, String> {
        let url = CONFIG.zone_url(&format!(
            "/checkImpossible?x={}&y={}",
            coord.lng, coord.lat
        ));
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        let data = response
            .json::<CheckImpossibleResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;
        Ok(data.is_inside)
    }

    /// Anillos de polígonos restringidos, ya validados y listos para dibujar
    pub async fn fetch_polygons(&self) -> Result<Vec<Vec<[f64; 2]>>, String> {
        let url = CONFIG.zone_url("/getcoordinates/getPolygon");
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        let data = response
            .json::<PolygonResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;
        Ok(parse_polygon_rings(&data.polygons))
    }
}

#[derive(serde::Deserialize)]
struct CheckImpossibleResponse {
    is_inside: bool,
}

#[derive(serde::Deserialize)]
struct PolygonResponse {
    #[serde(default)]
    polygons: Vec<Value>,
}

/// Parsear los anillos crudos del backend. Cada anillo llega como array
/// literal de pares [lng, lat] o como string con ese array JSON-encoded.
/// Anillos malformados o con menos de 3 puntos válidos se descartan.
pub fn parse_polygon_rings(raw_rings: &[Value]) -> Vec<Vec<[f64; 2]>> {
    raw_rings.iter().filter_map(parse_ring).collect()
}

fn parse_ring(raw: &Value) -> Option<Vec<[f64; 2]>> {
    let decoded;
    let ring = match raw {
        Value::String(encoded) => {
            decoded = serde_json::from_str::<Value>(encoded).ok()?;
            &decoded
        }
        other => other,
    };

    let points: Vec<[f64; 2]> = ring
        .as_array()?
        .iter()
        .filter_map(|pair| {
            let pair = pair.as_array()?;
            if pair.len() != 2 {
                return None;
            }
            Some([pair[0].as_f64()?, pair[1].as_f64()?])
        })
        .collect();

    if points.len() >= 3 {
        Some(points)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_ring_is_parsed() {
        let raw = vec![json!([[127.0, 37.0], [127.1, 37.0], [127.1, 37.1]])];
        let rings = parse_polygon_rings(&raw);
        assert_eq!(rings, vec![vec![[127.0, 37.0], [127.1, 37.0], [127.1, 37.1]]]);
    }

    #[test]
    fn string_encoded_ring_is_parsed() {
        let raw = vec![json!("[[127.0, 37.0], [127.1, 37.0], [127.1, 37.1], [127.0, 37.1]]")];
        let rings = parse_polygon_rings(&raw);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);
    }

    #[test]
    fn short_or_malformed_rings_are_dropped() {
        let raw = vec![
            json!([[127.0, 37.0], [127.1, 37.0]]),          // < 3 puntos
            json!("not json"),                              // string roto
            json!(42),                                      // ni array ni string
            json!([[127.0, 37.0], [127.1], [127.1, 37.1]]), // par incompleto
        ];
        assert!(parse_polygon_rings(&raw).is_empty());
    }

    #[test]
    fn invalid_pairs_are_skipped_but_ring_survives() {
        let raw = vec![json!([[127.0, 37.0], ["x", "y"], [127.1, 37.0], [127.1, 37.1]])];
        let rings = parse_polygon_rings(&raw);
        assert_eq!(rings[0].len(), 3);
    }
}
