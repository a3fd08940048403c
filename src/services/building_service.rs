// ============================================================================
// BUILDING SERVICE - Edificios cercanos a una coordenada (Stateless)
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{Coordinate, NearbyBuilding};

/// Cliente de edificios cercanos - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct BuildingService;

impl BuildingService {
    pub fn new() -> Self {
        Self
    }

    /// Edificios alrededor de la coordenada (el radio real lo decide el server)
    pub async fn fetch_nearby(&self, coord: Coordinate) -> Result<Vec<NearbyBuilding>, String> {
        let url = CONFIG.zone_url(&format!(
            "/building/nearby-buildings?latitude={}&longitude={}",
            coord.lat, coord.lng
        ));

        log::info!("🏢 Buscando edificios cercanos a ({}, {})", coord.lat, coord.lng);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        let data = response
            .json::<NearbyBuildingsResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("✅ {} edificios cercanos recibidos", data.buildings.len());
        Ok(data.buildings)
    }
}

#[derive(serde::Deserialize)]
struct NearbyBuildingsResponse {
    #[serde(default)]
    buildings: Vec<NearbyBuilding>,
}
