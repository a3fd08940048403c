// ============================================================================
// MAPS - Renderizado de mapa detrás de un trait común
// ============================================================================

pub mod traits;
pub mod web;

pub use traits::{MapRenderer, NearbyMarkerSpec, SavedMarkerSpec};
pub use web::WebMapRenderer;

/// Renderer de prueba: registra cada llamada en orden en vez de dibujar
#[cfg(test)]
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl MapRenderer for RecordingRenderer {
    fn initialize(&self, container_id: &str, center: crate::models::Coordinate, zoom: f64) {
        self.calls
            .borrow_mut()
            .push(format!("initialize {} {} {} {}", container_id, center.lat, center.lng, zoom));
    }

    fn set_selection_marker(&self, coord: crate::models::Coordinate) {
        self.calls
            .borrow_mut()
            .push(format!("selection_marker {} {}", coord.lat, coord.lng));
    }

    fn pan_to(&self, coord: crate::models::Coordinate, zoom: f64) {
        self.calls
            .borrow_mut()
            .push(format!("pan_to {} {} {}", coord.lat, coord.lng, zoom));
    }

    fn draw_restricted_polygons(&self, rings: &[Vec<[f64; 2]>]) {
        self.calls.borrow_mut().push(format!("polygons {}", rings.len()));
    }

    fn draw_nearby_radius(&self, _center: crate::models::Coordinate, radius_m: f64) {
        self.calls.borrow_mut().push(format!("radius {}", radius_m));
    }

    fn add_nearby_markers(&self, markers: &[NearbyMarkerSpec]) {
        self.calls
            .borrow_mut()
            .push(format!("nearby_markers {}", markers.len()));
    }

    fn clear_nearby_overlays(&self) {
        self.calls.borrow_mut().push("clear_nearby".to_string());
    }

    fn replace_saved_markers(&self, specs: &[SavedMarkerSpec]) {
        self.calls
            .borrow_mut()
            .push(format!("saved_markers {}", specs.len()));
    }
}
