// ============================================================================
// MAP VIEWMODEL - Preparación de datos para el mapa
// ============================================================================
// Convierte modelos en specs de marcador y se las pasa al renderer; acá nunca
// se construye HTML a mano.
// ============================================================================

use std::rc::Rc;

use crate::config::CONFIG;
use crate::maps::{MapRenderer, NearbyMarkerSpec};
use crate::models::{Coordinate, NearbyBuilding};
use crate::services::ZoneService;

/// ViewModel del mapa - SOLO preparación de datos, sin estado
pub struct MapViewModel;

impl MapViewModel {
    /// Inicializar el mapa en su centro por defecto
    pub fn initialize_map(renderer: &dyn MapRenderer) {
        let map = &CONFIG.map_config;
        log::info!(
            "🗺️ Inicializando mapa en ({}, {}) zoom {}",
            map.default_center_lat,
            map.default_center_lng,
            map.default_zoom
        );
        renderer.initialize(
            "map",
            Coordinate::new(map.default_center_lat, map.default_center_lng),
            map.default_zoom,
        );
    }

    /// Cargar y dibujar los polígonos de zona restringida (una vez, al montar).
    /// Un fallo solo se loguea: el mapa sigue siendo usable sin los polígonos.
    pub fn load_restricted_polygons(renderer: Rc<dyn MapRenderer>) {
        wasm_bindgen_futures::spawn_local(async move {
            match ZoneService::new().fetch_polygons().await {
                Ok(rings) => {
                    log::info!("🔺 {} polígonos restringidos recibidos", rings.len());
                    renderer.draw_restricted_polygons(&rings);
                }
                Err(e) => log::error!("❌ Error cargando polígonos: {}", e),
            }
        });
    }

    /// Convertir edificios cercanos en specs de marcador
    pub fn prepare_nearby_markers(buildings: &[NearbyBuilding]) -> Vec<NearbyMarkerSpec> {
        buildings
            .iter()
            .map(|building| {
                let labels = if building.stores.is_empty() {
                    vec!["정보 없음".to_string()]
                } else {
                    building.stores.iter().map(|s| s.name.clone()).collect()
                };
                NearbyMarkerSpec {
                    lat: building.location.lat,
                    lng: building.location.lon,
                    labels,
                }
            })
            .collect()
    }

    /// Dibujar círculo de radio fijo + marcadores de edificios
    pub fn draw_nearby(renderer: &dyn MapRenderer, center: Coordinate, buildings: &[NearbyBuilding]) {
        renderer.draw_nearby_radius(center, CONFIG.nearby_config.radius_m);
        renderer.add_nearby_markers(&Self::prepare_nearby_markers(buildings));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::RecordingRenderer;
    use crate::models::{BuildingLocation, Store};

    fn building(stores: Vec<&str>) -> NearbyBuilding {
        NearbyBuilding {
            location: BuildingLocation { lat: 37.0, lon: 127.0 },
            stores: stores
                .into_iter()
                .map(|name| Store { name: name.to_string() })
                .collect(),
        }
    }

    #[test]
    fn building_without_stores_gets_placeholder_label() {
        let markers = MapViewModel::prepare_nearby_markers(&[building(vec![])]);
        assert_eq!(markers[0].labels, vec!["정보 없음".to_string()]);
    }

    #[test]
    fn store_names_become_labels() {
        let markers = MapViewModel::prepare_nearby_markers(&[building(vec!["GS25", "파리바게뜨"])]);
        assert_eq!(
            markers[0].labels,
            vec!["GS25".to_string(), "파리바게뜨".to_string()]
        );
        assert_eq!(markers[0].lat, 37.0);
        assert_eq!(markers[0].lng, 127.0);
    }

    #[test]
    fn draw_nearby_paints_radius_then_markers() {
        let renderer = RecordingRenderer::default();
        MapViewModel::draw_nearby(
            &renderer,
            Coordinate::new(37.0, 127.0),
            &[building(vec!["GS25"])],
        );
        assert_eq!(
            renderer.calls.borrow().clone(),
            vec!["radius 50", "nearby_markers 1"]
        );
    }
}
