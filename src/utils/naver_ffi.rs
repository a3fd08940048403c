// ============================================================================
// NAVER FFI - Foreign Function Interface para el bridge JS del mapa
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// El bridge es dueño del objeto naver.maps.Map y de todos los overlays;
// Rust le pasa specs serializadas (JSON) y nunca HTML construido a mano.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initNaverMap)]
    pub fn init_naver_map(container_id: &str, lat: f64, lng: f64, zoom: f64);

    /// Reemplaza el marcador de selección (el bridge destruye el anterior)
    #[wasm_bindgen(js_name = setSelectionMarker)]
    pub fn set_selection_marker(lat: f64, lng: f64);

    #[wasm_bindgen(js_name = panMapTo)]
    pub fn pan_map_to(lat: f64, lng: f64, zoom: f64);

    /// Dibuja los polígonos de zona restringida (JSON: array de anillos [lng, lat])
    #[wasm_bindgen(js_name = drawRestrictedPolygons)]
    pub fn draw_restricted_polygons(rings_json: &str);

    /// Círculo indicador de radio fijo alrededor de la selección
    #[wasm_bindgen(js_name = drawNearbyRadius)]
    pub fn draw_nearby_radius(lat: f64, lng: f64, radius_m: f64);

    /// Marcadores de edificios cercanos (JSON de NearbyMarkerSpec)
    #[wasm_bindgen(js_name = addNearbyMarkers)]
    pub fn add_nearby_markers(markers_json: &str);

    /// Destruye círculo + marcadores de cercanos en una sola llamada
    #[wasm_bindgen(js_name = clearNearbyOverlays)]
    pub fn clear_nearby_overlays();

    /// Marcadores de direcciones guardadas con su info window (JSON de SavedMarkerSpec)
    #[wasm_bindgen(js_name = addSavedMarkers)]
    pub fn add_saved_markers(markers_json: &str);

    #[wasm_bindgen(js_name = clearSavedMarkers)]
    pub fn clear_saved_markers();

    /// Geocoding del SDK: query → Promise<JSON {lat, lng, road_address, jibun_address}>
    /// La promise rechaza cuando no hay resultados.
    #[wasm_bindgen(js_name = naverGeocode)]
    pub fn naver_geocode(query: &str) -> js_sys::Promise;

    /// Reverse geocoding del SDK: coord → Promise<string dirección>
    #[wasm_bindgen(js_name = naverReverseGeocode)]
    pub fn naver_reverse_geocode(lat: f64, lng: f64) -> js_sys::Promise;
}

/// Helper: abrir la vista panorama en una ventana nueva
pub fn open_panorama_window(lat: f64, lng: f64, address: &str) {
    let encoded: String = js_sys::encode_uri_component(address).into();
    let url = format!("/panorama?lat={}&lng={}&addr={}", lat, lng, encoded);
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(&url, "_blank", "width=1000,height=800");
    }
}
