// ============================================================================
// INCREMENTAL - Actualizaciones puntuales del DOM (sin re-render completo)
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{
    append_child, create_element, get_element_by_id, set_attribute, set_disabled, set_display,
    set_text_content,
};
use crate::state::AppState;
use crate::viewmodels::WishlistViewModel;
use crate::views::render_wishlist_sidebar;

/// Footer de selección: dirección + "유효성: {estado}". Mientras el chequeo de
/// zona está en vuelo solo se muestra la dirección.
pub fn update_footer(state: &AppState) -> Result<(), JsValue> {
    let footer = match get_element_by_id("location-footer") {
        Some(footer) => footer,
        None => return Ok(()),
    };

    match state.selection() {
        Some(selection) => {
            if let Some(address) = get_element_by_id("footer-address") {
                set_text_content(&address, &selection.address);
            }
            if let Some(status) = get_element_by_id("footer-status") {
                let text = selection
                    .zone_status
                    .label()
                    .map(|label| format!("유효성: {}", label))
                    .unwrap_or_default();
                set_text_content(&status, &text);
            }
            set_display(&footer, "flex")?;
        }
        None => set_display(&footer, "none")?,
    }
    Ok(())
}

/// Indicador "로딩중..." durante el fetch de edificios cercanos
pub fn update_nearby_loading(state: &AppState) -> Result<(), JsValue> {
    if let Some(loading) = get_element_by_id("nearby-loading") {
        set_display(&loading, if state.nearby_loading() { "block" } else { "none" })?;
    }
    Ok(())
}

/// El botón de guardar solo se habilita con una selección activa
pub fn update_save_button(state: &AppState) {
    set_disabled("add-wish-button", !state.has_selection());
}

/// Reconstruir el sidebar completo + las sugerencias de grupo del datalist
pub fn update_sidebar(state: &AppState) -> Result<(), JsValue> {
    if let Some(container) = get_element_by_id("wishlist-container") {
        container.set_inner_html("");
        let content = render_wishlist_sidebar(state)?;
        append_child(&container, &content)?;
    }

    if let Some(datalist) = get_element_by_id("group-list") {
        datalist.set_inner_html("");
        for group in WishlistViewModel::group_suggestions(&state.wishlist()) {
            let option = create_element("option")?;
            set_attribute(&option, "value", &group)?;
            append_child(&datalist, &option)?;
        }
    }
    Ok(())
}
