// ============================================================================
// WEB MAP RENDERER - Impl del trait sobre el bridge JS del SDK de Naver
// ============================================================================
// El bridge es dueño del objeto naver.maps.Map y de todos los overlays;
// acá solo se serializan specs (JSON) y se delega en los externs.
// ============================================================================

use gloo_timers::callback::Timeout;

use super::{MapRenderer, NearbyMarkerSpec, SavedMarkerSpec};
use crate::models::Coordinate;
use crate::utils::naver_ffi;

/// Renderizador de mapa para web (SDK de Naver vía FFI)
pub struct WebMapRenderer;

impl WebMapRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl MapRenderer for WebMapRenderer {
    fn initialize(&self, container_id: &str, center: Coordinate, zoom: f64) {
        naver_ffi::init_naver_map(container_id, center.lat, center.lng, zoom);
    }

    fn set_selection_marker(&self, coord: Coordinate) {
        naver_ffi::set_selection_marker(coord.lat, coord.lng);
    }

    fn pan_to(&self, coord: Coordinate, zoom: f64) {
        naver_ffi::pan_map_to(coord.lat, coord.lng, zoom);
    }

    fn draw_restricted_polygons(&self, rings: &[Vec<[f64; 2]>]) {
        if let Ok(json) = serde_json::to_string(rings) {
            naver_ffi::draw_restricted_polygons(&json);
        }
    }

    fn draw_nearby_radius(&self, center: Coordinate, radius_m: f64) {
        naver_ffi::draw_nearby_radius(center.lat, center.lng, radius_m);
    }

    fn add_nearby_markers(&self, markers: &[NearbyMarkerSpec]) {
        if let Ok(json) = serde_json::to_string(markers) {
            naver_ffi::add_nearby_markers(&json);
        }
    }

    fn clear_nearby_overlays(&self) {
        naver_ffi::clear_nearby_overlays();
    }

    /// El dibujo se difiere un tick para que el mapa termine de asentar sus
    /// overlays después de un re-render.
    fn replace_saved_markers(&self, specs: &[SavedMarkerSpec]) {
        naver_ffi::clear_saved_markers();
        log::info!("📍 Dibujando {} marcadores guardados", specs.len());
        if let Ok(json) = serde_json::to_string(specs) {
            Timeout::new(100, move || {
                naver_ffi::add_saved_markers(&json);
            })
            .forget();
        }
    }
}
