// ============================================================================
// SELECTION VIEWMODEL - Contrato único de selección de ubicación
// ============================================================================
// Las dos vías de entrada (click en mapa → reverse geocode, búsqueda →
// geocode) convergen en select_location(), así el comportamiento aguas abajo
// (marcador, chequeo de zona, refresh de cercanos, footer) es idéntico.
//
// Las respuestas async se etiquetan con la generación de selección vigente al
// momento de emitirlas; un resultado de una generación vieja se descarta en
// vez de pisar la selección más nueva.
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::dom::{alert, set_checkbox_checked};
use crate::models::{Coordinate, ZoneStatus};
use crate::services::{BuildingService, Geocoder, ZoneService, UNKNOWN_ADDRESS};
use crate::state::{AppState, IncrementalUpdate, UpdateType};
use crate::utils::naver_ffi::open_panorama_window;
use crate::viewmodels::MapViewModel;

/// Transición de estado que produce un cambio del toggle de cercanos
#[derive(Debug, PartialEq)]
enum NearbyToggle {
    /// Modo activado: refrescar para la selección y generación dadas
    Enabled(Coordinate, u64),
    /// Modo desactivado: destruir los visuales
    Disabled,
    /// Activación sin selección: error de input, el modo queda apagado
    Rejected,
}

/// Decidir la transición y dejar el flag de modo ya consistente.
/// No emite requests ni toca el DOM: eso lo hace el caller por variante.
fn plan_nearby_toggle(state: &AppState, enabled: bool) -> NearbyToggle {
    if !enabled {
        state.set_nearby_mode(false);
        return NearbyToggle::Disabled;
    }
    match state.selection() {
        Some(selection) => {
            state.set_nearby_mode(true);
            NearbyToggle::Enabled(selection.coord, state.current_generation())
        }
        None => {
            state.set_nearby_mode(false);
            NearbyToggle::Rejected
        }
    }
}

pub struct SelectionViewModel;

impl SelectionViewModel {
    /// Reemplaza la selección activa: marcador nuevo, chequeo de zona, y si el
    /// modo cercanos está activo, refresh de edificios alrededor.
    pub fn select_location(state: &AppState, coord: Coordinate, address: String) {
        let generation = state.begin_selection(coord, address);
        state.renderer().set_selection_marker(coord);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::SaveButton));
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Footer));

        // Chequeo de zona: sin retry ni caché, una consulta por selección
        let zone_state = state.clone();
        spawn_local(async move {
            let status = match ZoneService::new().check_impossible(coord).await {
                Ok(is_inside) => ZoneStatus::from_is_inside(is_inside),
                Err(e) => {
                    log::warn!("⚠️ Chequeo de zona falló: {}", e);
                    ZoneStatus::ConnectionFailed
                }
            };
            if zone_state.apply_zone_status(generation, status) {
                crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Footer));
            } else {
                log::info!("🕑 Resultado de zona stale (gen {}), descartado", generation);
            }
        });

        // Los visuales de cercanos de la selección anterior se destruyen
        // siempre; solo se vuelve a dibujar si el modo está activo
        Self::clear_nearby_visuals(state);
        if state.nearby_mode() {
            Self::refresh_nearby(state, coord, generation);
        }
    }

    /// Click en el mapa: reverse geocode y seleccionar. Un fallo de geocoding
    /// degrada al placeholder, nunca es fatal.
    pub fn handle_map_click(state: &AppState, coord: Coordinate) {
        let state = state.clone();
        spawn_local(async move {
            let address = match Geocoder::reverse_geocode(coord).await {
                Ok(address) => address,
                Err(e) => {
                    log::warn!("⚠️ Reverse geocode falló: {}", e);
                    UNKNOWN_ADDRESS.to_string()
                }
            };
            Self::select_location(&state, coord, address);
        });
    }

    /// Búsqueda por texto libre desde el input del sidebar
    pub fn search_address(state: &AppState, query: &str) {
        let query = query.trim().to_string();
        if query.is_empty() {
            alert("주소를 입력해주세요.");
            return;
        }

        let state = state.clone();
        spawn_local(async move {
            match Geocoder::geocode(&query).await {
                Ok(result) => {
                    state
                        .renderer()
                        .pan_to(result.coord(), CONFIG.map_config.select_zoom);
                    let address = result.display_address();
                    Self::select_location(&state, result.coord(), address);
                }
                Err(e) => {
                    log::info!("🔍 Sin resultados para '{}': {}", query, e);
                    alert("주소를 찾을 수 없습니다.");
                }
            }
        });
    }

    /// Toggle del modo cercanos. Activarlo sin selección es un error de input:
    /// alert y el toggle vuelve a off sin emitir ningún request.
    pub fn toggle_nearby_mode(state: &AppState, enabled: bool) {
        match plan_nearby_toggle(state, enabled) {
            NearbyToggle::Enabled(coord, generation) => {
                Self::refresh_nearby(state, coord, generation)
            }
            NearbyToggle::Disabled => Self::clear_nearby_visuals(state),
            NearbyToggle::Rejected => {
                alert("위치를 선택해주세요.");
                set_checkbox_checked("nearby-toggle", false);
            }
        }
    }

    /// Fetch + dibujo de cercanos para la generación dada. El indicador de
    /// carga se muestra durante el request y se oculta al terminar; un fallo
    /// se loguea sin romper nada.
    fn refresh_nearby(state: &AppState, coord: Coordinate, generation: u64) {
        state.set_nearby_loading(true);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::NearbyLoading));

        let state = state.clone();
        spawn_local(async move {
            let result = BuildingService::new().fetch_nearby(coord).await;

            if !state.nearby_result_applies(generation) {
                // Llegó tarde: la selección nueva o el toggle apagado ya
                // gestionaron sus visuales
                log::info!("🕑 Cercanos stale (gen {}), descartado", generation);
                return;
            }

            state.set_nearby_loading(false);
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::NearbyLoading));

            match result {
                Ok(buildings) => {
                    MapViewModel::draw_nearby(&*state.renderer(), coord, &buildings)
                }
                Err(e) => log::error!("❌ Error buscando edificios cercanos: {}", e),
            }
        });
    }

    /// Destruir círculo + marcadores de cercanos y apagar el loading
    fn clear_nearby_visuals(state: &AppState) {
        state.renderer().clear_nearby_overlays();
        state.set_nearby_loading(false);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::NearbyLoading));
    }

    /// Abrir la vista panorama para la selección activa
    pub fn open_panorama(state: &AppState) {
        if let Some(selection) = state.selection() {
            open_panorama_window(selection.coord.lat, selection.coord.lng, &selection.address);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::maps::RecordingRenderer;

    fn state_with_renderer() -> (AppState, Rc<RecordingRenderer>) {
        let renderer = Rc::new(RecordingRenderer::default());
        (AppState::new(renderer.clone()), renderer)
    }

    #[test]
    fn toggle_without_selection_is_rejected_and_stays_off() {
        let (state, renderer) = state_with_renderer();
        assert_eq!(plan_nearby_toggle(&state, true), NearbyToggle::Rejected);
        assert!(!state.nearby_mode());
        assert!(renderer.calls.borrow().is_empty());
    }

    #[test]
    fn toggle_with_selection_enables_mode_for_current_generation() {
        let (state, _renderer) = state_with_renderer();
        let coord = Coordinate::new(37.0, 127.0);
        let generation = state.begin_selection(coord, "서울시청".to_string());

        assert_eq!(
            plan_nearby_toggle(&state, true),
            NearbyToggle::Enabled(coord, generation)
        );
        assert!(state.nearby_mode());
    }

    #[test]
    fn toggle_off_disables_mode() {
        let (state, _renderer) = state_with_renderer();
        state.set_nearby_mode(true);
        assert_eq!(plan_nearby_toggle(&state, false), NearbyToggle::Disabled);
        assert!(!state.nearby_mode());
    }

    #[test]
    fn nearby_result_after_toggle_off_is_dropped() {
        let (state, _renderer) = state_with_renderer();
        let generation = state.begin_selection(Coordinate::new(37.0, 127.0), "a".to_string());
        state.set_nearby_mode(true);
        assert!(state.nearby_result_applies(generation));

        state.set_nearby_mode(false);
        assert!(!state.nearby_result_applies(generation));
    }

    #[test]
    fn nearby_result_of_an_old_selection_is_dropped() {
        let (state, _renderer) = state_with_renderer();
        let old = state.begin_selection(Coordinate::new(37.0, 127.0), "a".to_string());
        state.set_nearby_mode(true);
        state.begin_selection(Coordinate::new(37.1, 127.1), "b".to_string());
        assert!(!state.nearby_result_applies(old));
    }
}
