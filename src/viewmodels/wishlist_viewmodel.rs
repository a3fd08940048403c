// ============================================================================
// WISHLIST VIEWMODEL - Sincronización del wishlist con el backend
// ============================================================================
// Sin updates optimistas: todo save/delete exitoso dispara load(), que
// reemplaza la caché en memoria, el sidebar y los marcadores guardados
// completos. El backend es el dueño de los datos.
// ============================================================================

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::dom::{alert, confirm, input_value, set_input_value, window};
use crate::maps::{MapRenderer, SavedMarkerSpec};
use crate::models::{WishlistEntry, WishlistGroup, DEFAULT_GROUP};
use crate::services::{ApiClient, Geocoder};
use crate::state::{AppState, IncrementalUpdate, UpdateType};

pub struct WishlistViewModel;

impl WishlistViewModel {
    /// Particionar la caché por grupo (orden alfabético de grupos, direcciones
    /// ordenadas dentro de cada grupo). Entradas sin grupo → "기본".
    pub fn group_entries(entries: &HashMap<String, WishlistEntry>) -> Vec<WishlistGroup> {
        let mut by_group: BTreeMap<String, Vec<(String, WishlistEntry)>> = BTreeMap::new();
        for (address, entry) in entries {
            by_group
                .entry(entry.group().to_string())
                .or_default()
                .push((address.clone(), entry.clone()));
        }
        by_group
            .into_iter()
            .map(|(name, mut entries)| {
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                WishlistGroup { name, entries }
            })
            .collect()
    }

    /// Nombres de grupo distintos, para las sugerencias del form de guardado
    pub fn group_suggestions(entries: &HashMap<String, WishlistEntry>) -> Vec<String> {
        entries
            .values()
            .map(|entry| entry.group().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Recargar todo desde el backend: caché, sidebar y marcadores guardados
    /// se reemplazan completos (sin diff incremental).
    pub fn load(state: &AppState) {
        let state = state.clone();
        spawn_local(async move {
            match ApiClient::new().list().await {
                Ok(entries) => {
                    log::info!("📋 Wishlist cargado: {} direcciones", entries.len());
                    state.replace_wishlist(entries.clone());
                    crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::Sidebar));
                    Self::redraw_saved_markers(state.renderer(), entries).await;
                }
                Err(e) => log::error!("❌ Error cargando wishlist: {}", e),
            }
        });
    }

    /// Geocodificar cada dirección guardada y redibujar sus marcadores.
    /// Direcciones que no resuelven se saltean (quedan solo en el sidebar).
    async fn redraw_saved_markers(
        renderer: Rc<dyn MapRenderer>,
        entries: HashMap<String, WishlistEntry>,
    ) {
        let mut specs = Vec::with_capacity(entries.len());
        for (address, entry) in &entries {
            match Geocoder::geocode(address).await {
                Ok(result) => specs.push(SavedMarkerSpec {
                    address: address.clone(),
                    lat: result.lat,
                    lng: result.lng,
                    color: entry.color.clone(),
                    group_name: entry.group().to_string(),
                }),
                Err(e) => log::warn!("⚠️ No se pudo geocodificar '{}': {}", address, e),
            }
        }
        renderer.replace_saved_markers(&specs);
    }

    /// Guardar la selección activa con los campos del form. Guardar sin
    /// selección es un error de input bloqueado antes de cualquier request.
    pub fn save_current(state: &AppState) {
        let selection = match state.selection() {
            Some(selection) => selection,
            None => {
                alert("저장할 위치를 선택해주세요.");
                return;
            }
        };

        let group_input = input_value("wishlist-group");
        let group = if group_input.trim().is_empty() {
            DEFAULT_GROUP.to_string()
        } else {
            group_input.trim().to_string()
        };
        let color = input_value("wishlist-color");
        let note = input_value("wishlist-note");

        let state = state.clone();
        spawn_local(async move {
            match ApiClient::new()
                .save(&selection.address, &group, &color, &note)
                .await
            {
                Ok(()) => {
                    set_input_value("wishlist-note", "");
                    alert("저장되었습니다.");
                    Self::load(&state);
                }
                Err(e) => alert(&format!("저장 실패: {}", e)),
            }
        });
    }

    /// Eliminar una entrada, con confirmación explícita antes del request
    pub fn delete(state: &AppState, address: String) {
        if !confirm("정말 삭제하시겠습니까?") {
            return;
        }

        let state = state.clone();
        spawn_local(async move {
            match ApiClient::new().delete(&address).await {
                Ok(()) => Self::load(&state),
                Err(e) => {
                    log::error!("❌ Error eliminando '{}': {}", address, e);
                    alert("삭제 오류");
                }
            }
        });
    }

    /// URL de export, o None con el wishlist vacío (no hay nada que navegar)
    fn export_target(state: &AppState) -> Option<String> {
        if state.wishlist_is_empty() {
            None
        } else {
            Some(ApiClient::new().export_url())
        }
    }

    /// Exportar a archivo: navegación del browser a la URL de export.
    /// Con el wishlist vacío no se navega, solo mensaje.
    pub fn export(state: &AppState) {
        match Self::export_target(state) {
            Some(url) => {
                if let Some(window) = window() {
                    let _ = window.location().set_href(&url);
                }
            }
            None => alert("저장된 위시리스트가 없습니다."),
        }
    }

    /// Click en un ítem del sidebar: re-geocodificar y centrar el mapa
    pub fn move_to(state: &AppState, address: String) {
        let renderer = state.renderer();
        spawn_local(async move {
            match Geocoder::geocode(&address).await {
                Ok(result) => renderer.pan_to(result.coord(), CONFIG.map_config.select_zoom),
                Err(e) => log::warn!("⚠️ No se pudo centrar en '{}': {}", address, e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(group: Option<&str>, color: &str) -> WishlistEntry {
        WishlistEntry {
            group_name: group.map(|g| g.to_string()),
            color: color.to_string(),
            note: None,
        }
    }

    fn sample() -> HashMap<String, WishlistEntry> {
        let mut entries = HashMap::new();
        entries.insert("서울 중구 세종대로 110".to_string(), entry(None, "#ff0000"));
        entries.insert("강남대로 396".to_string(), entry(Some("맛집"), "#00ff00"));
        entries.insert("테헤란로 152".to_string(), entry(Some("맛집"), "#0000ff"));
        entries.insert("한강대로 405".to_string(), entry(Some("여행"), "#ffff00"));
        entries
    }

    #[test]
    fn entries_without_group_land_in_default_group() {
        let groups = WishlistViewModel::group_entries(&sample());
        let default = groups.iter().find(|g| g.name == DEFAULT_GROUP).unwrap();
        assert_eq!(default.count(), 1);
        assert_eq!(default.entries[0].0, "서울 중구 세종대로 110");
    }

    #[test]
    fn groups_are_sorted_alphabetically_with_counts() {
        let groups = WishlistViewModel::group_entries(&sample());
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(
            groups.iter().find(|g| g.name == "맛집").unwrap().count(),
            2
        );
    }

    #[test]
    fn entries_within_a_group_are_sorted_by_address() {
        let groups = WishlistViewModel::group_entries(&sample());
        let food = groups.iter().find(|g| g.name == "맛집").unwrap();
        assert_eq!(food.entries[0].0, "강남대로 396");
        assert_eq!(food.entries[1].0, "테헤란로 152");
    }

    #[test]
    fn suggestions_are_distinct_group_names() {
        let suggestions = WishlistViewModel::group_suggestions(&sample());
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions.contains(&DEFAULT_GROUP.to_string()));
        assert!(suggestions.contains(&"맛집".to_string()));
        assert!(suggestions.contains(&"여행".to_string()));
    }

    #[test]
    fn empty_wishlist_yields_no_groups() {
        assert!(WishlistViewModel::group_entries(&HashMap::new()).is_empty());
        assert!(WishlistViewModel::group_suggestions(&HashMap::new()).is_empty());
    }

    #[test]
    fn export_with_empty_cache_has_no_target() {
        let state = AppState::new(Rc::new(crate::maps::RecordingRenderer::default()));
        assert_eq!(WishlistViewModel::export_target(&state), None);
    }

    #[test]
    fn export_with_entries_targets_the_export_endpoint() {
        let state = AppState::new(Rc::new(crate::maps::RecordingRenderer::default()));
        state.replace_wishlist(sample());
        let url = WishlistViewModel::export_target(&state).unwrap();
        assert!(url.ends_with("/api/wishlist/export"));
    }
}
