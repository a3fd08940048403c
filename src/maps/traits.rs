// ============================================================================
// MAPS TRAITS - Contrato del renderizador de mapa
// ============================================================================
// Los viewmodels hablan con el mapa solo a través de este trait. La impl web
// delega en el bridge JS del SDK; los tests enchufan un renderer de registro.
// ============================================================================

use serde::Serialize;

use crate::models::Coordinate;

/// Marcador de dirección guardada (una por entrada del wishlist)
#[derive(Serialize, Clone, Debug)]
pub struct SavedMarkerSpec {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub color: String,
    pub group_name: String,
}

/// Marcador-etiqueta de edificio cercano
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NearbyMarkerSpec {
    pub lat: f64,
    pub lng: f64,
    pub labels: Vec<String>,
}

/// Trait común para renderizadores de mapa
pub trait MapRenderer {
    /// Montar el mapa en su contenedor
    fn initialize(&self, container_id: &str, center: Coordinate, zoom: f64);

    /// Reemplazar el marcador de selección (el anterior se destruye)
    fn set_selection_marker(&self, coord: Coordinate);

    /// Centrar el mapa en una coordenada con el zoom dado
    fn pan_to(&self, coord: Coordinate, zoom: f64);

    /// Dibujar los polígonos de zona restringida (anillos de pares [lng, lat])
    fn draw_restricted_polygons(&self, rings: &[Vec<[f64; 2]>]);

    /// Círculo indicador de radio fijo alrededor de la selección
    fn draw_nearby_radius(&self, center: Coordinate, radius_m: f64);

    /// Marcadores de edificios cercanos
    fn add_nearby_markers(&self, markers: &[NearbyMarkerSpec]);

    /// Destruir círculo + marcadores de cercanos
    fn clear_nearby_overlays(&self);

    /// Reemplazar todos los marcadores guardados (sin diffs)
    fn replace_saved_markers(&self, specs: &[SavedMarkerSpec]);
}
