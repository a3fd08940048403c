// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Todo el estado que antes sería variables globales del script (marcador
// actual, coordenada seleccionada, modo cercanos, caché de wishlist) vive
// aquí, con ciclo de vida explícito: se crea al montar la vista y se descarta
// completo al desmontarla. Sin persistencia local: la sesión es en memoria.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::maps::MapRenderer;
use crate::models::{Coordinate, SelectedLocation, WishlistEntry, ZoneStatus};

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (montaje inicial / reset de la vista)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug)]
pub enum IncrementalUpdate {
    /// Footer de selección (dirección + estado de zona)
    Footer,
    /// Sidebar de wishlist (grupos + sugerencias de grupo)
    Sidebar,
    /// Indicador de carga de edificios cercanos
    NearbyLoading,
    /// Habilitación del botón de guardar
    SaveButton,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    /// Selección activa (a lo sumo una; se reemplaza completa)
    selection: Rc<RefCell<Option<SelectedLocation>>>,
    /// Generación de selección: cada nueva selección la incrementa y las
    /// respuestas async etiquetadas con una generación vieja se descartan
    selection_generation: Rc<RefCell<u64>>,
    nearby_mode: Rc<RefCell<bool>>,
    nearby_loading: Rc<RefCell<bool>>,
    /// Caché read-through del wishlist; se reconstruye completa en cada load()
    wishlist: Rc<RefCell<HashMap<String, WishlistEntry>>>,
    /// Renderizador de mapa inyectado al montar (web en producción)
    renderer: Rc<dyn MapRenderer>,
}

impl AppState {
    pub fn new(renderer: Rc<dyn MapRenderer>) -> Self {
        Self {
            selection: Rc::new(RefCell::new(None)),
            selection_generation: Rc::new(RefCell::new(0)),
            nearby_mode: Rc::new(RefCell::new(false)),
            nearby_loading: Rc::new(RefCell::new(false)),
            wishlist: Rc::new(RefCell::new(HashMap::new())),
            renderer,
        }
    }

    pub fn renderer(&self) -> Rc<dyn MapRenderer> {
        Rc::clone(&self.renderer)
    }

    /// Registrar una nueva selección y devolver su generación.
    /// El estado de zona arranca en Unknown hasta que responda el chequeo.
    pub fn begin_selection(&self, coord: Coordinate, address: String) -> u64 {
        let mut generation = self.selection_generation.borrow_mut();
        *generation += 1;
        *self.selection.borrow_mut() = Some(SelectedLocation::new(coord, address));
        *generation
    }

    pub fn current_generation(&self) -> u64 {
        *self.selection_generation.borrow()
    }

    pub fn is_current_generation(&self, generation: u64) -> bool {
        *self.selection_generation.borrow() == generation
    }

    /// ¿Un resultado de cercanos de esta generación todavía se aplica?
    /// No, si hubo una selección más nueva o si el toggle ya se apagó.
    pub fn nearby_result_applies(&self, generation: u64) -> bool {
        self.is_current_generation(generation) && self.nearby_mode()
    }

    /// Aplicar el resultado del chequeo de zona solo si la selección que lo
    /// originó sigue siendo la actual. Devuelve false si el resultado es stale.
    pub fn apply_zone_status(&self, generation: u64, status: ZoneStatus) -> bool {
        if !self.is_current_generation(generation) {
            return false;
        }
        if let Some(selection) = self.selection.borrow_mut().as_mut() {
            selection.zone_status = status;
            return true;
        }
        false
    }

    pub fn selection(&self) -> Option<SelectedLocation> {
        self.selection.borrow().clone()
    }

    pub fn has_selection(&self) -> bool {
        self.selection.borrow().is_some()
    }

    pub fn nearby_mode(&self) -> bool {
        *self.nearby_mode.borrow()
    }

    pub fn set_nearby_mode(&self, enabled: bool) {
        *self.nearby_mode.borrow_mut() = enabled;
    }

    pub fn nearby_loading(&self) -> bool {
        *self.nearby_loading.borrow()
    }

    pub fn set_nearby_loading(&self, loading: bool) {
        *self.nearby_loading.borrow_mut() = loading;
    }

    /// Reemplazo total de la caché de wishlist (sin diffs incrementales)
    pub fn replace_wishlist(&self, entries: HashMap<String, WishlistEntry>) {
        *self.wishlist.borrow_mut() = entries;
    }

    pub fn wishlist(&self) -> HashMap<String, WishlistEntry> {
        self.wishlist.borrow().clone()
    }

    pub fn wishlist_is_empty(&self) -> bool {
        self.wishlist.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::RecordingRenderer;

    fn coord() -> Coordinate {
        Coordinate::new(37.0, 127.0)
    }

    fn state() -> AppState {
        AppState::new(Rc::new(RecordingRenderer::default()))
    }

    #[test]
    fn each_selection_bumps_the_generation() {
        let state = state();
        let g1 = state.begin_selection(coord(), "서울시청".to_string());
        let g2 = state.begin_selection(coord(), "강남역".to_string());
        assert!(g2 > g1);
        assert!(state.is_current_generation(g2));
        assert!(!state.is_current_generation(g1));
        assert_eq!(state.selection().unwrap().address, "강남역");
    }

    #[test]
    fn stale_zone_result_is_discarded() {
        let state = state();
        let stale = state.begin_selection(coord(), "a".to_string());
        let current = state.begin_selection(coord(), "b".to_string());

        assert!(!state.apply_zone_status(stale, ZoneStatus::Blocked));
        assert_eq!(state.selection().unwrap().zone_status, ZoneStatus::Unknown);

        assert!(state.apply_zone_status(current, ZoneStatus::Allowed));
        assert_eq!(state.selection().unwrap().zone_status, ZoneStatus::Allowed);
    }

    #[test]
    fn replace_wishlist_is_wholesale() {
        let state = state();
        let mut first = HashMap::new();
        first.insert(
            "서울 중구 세종대로 110".to_string(),
            WishlistEntry {
                group_name: None,
                color: "#ff0000".to_string(),
                note: None,
            },
        );
        state.replace_wishlist(first);
        assert!(!state.wishlist_is_empty());

        state.replace_wishlist(HashMap::new());
        assert!(state.wishlist_is_empty());
    }
}
