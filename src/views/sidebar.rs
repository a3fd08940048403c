// ============================================================================
// SIDEBAR VIEW - Lista de wishlist agrupada por grupo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::models::WishlistGroup;
use crate::state::AppState;
use crate::viewmodels::WishlistViewModel;

/// Renderizar el contenido del sidebar a partir de la caché de wishlist.
/// Se reconstruye completo en cada load(), sin diffs.
pub fn render_wishlist_sidebar(state: &AppState) -> Result<Element, JsValue> {
    let entries = state.wishlist();
    let groups = WishlistViewModel::group_entries(&entries);

    let container = ElementBuilder::new("div")?.class("wishlist-groups").build();

    if groups.is_empty() {
        let empty = ElementBuilder::new("div")?
            .class("wishlist-empty")
            .text("저장된 장소가 없습니다.")
            .build();
        crate::dom::append_child(&container, &empty)?;
        return Ok(container);
    }

    for group in &groups {
        crate::dom::append_child(&container, &render_group(state, group)?)?;
    }
    Ok(container)
}

fn render_group(state: &AppState, group: &WishlistGroup) -> Result<Element, JsValue> {
    let name = ElementBuilder::new("span")?
        .class("group-name")
        .text(&group.name)
        .build();
    let count = ElementBuilder::new("span")?
        .class("group-count")
        .text(&group.count().to_string())
        .build();
    let summary = ElementBuilder::new("summary")?
        .class("group-summary")
        .child(name)?
        .child(count)?
        .build();

    let list = ElementBuilder::new("div")?.class("group-entries").build();
    for (address, entry) in &group.entries {
        crate::dom::append_child(&list, &render_entry(state, address, entry)?)?;
    }

    let details = ElementBuilder::new("details")?
        .class("group-item")
        .attr("open", "open")?
        .child(summary)?
        .child(list)?
        .build();
    Ok(details)
}

fn render_entry(
    state: &AppState,
    address: &str,
    entry: &crate::models::WishlistEntry,
) -> Result<Element, JsValue> {
    let color_dot = ElementBuilder::new("span")?
        .class("color-dot")
        .attr("style", &format!("background-color: {};", entry.color))?
        .build();

    let address_div = ElementBuilder::new("div")?
        .class("wish-address")
        .text(address)
        .build();

    let text_block = ElementBuilder::new("div")?
        .class("wish-text")
        .child(address_div)?
        .build();
    if let Some(note) = entry.note.as_deref().filter(|n| !n.is_empty()) {
        let note_div = ElementBuilder::new("div")?
            .class("wish-note")
            .text(note)
            .build();
        crate::dom::append_child(&text_block, &note_div)?;
    }

    // Click en el ítem: centrar el mapa en la dirección guardada
    let header = ElementBuilder::new("div")?
        .class("wish-item-header")
        .child(color_dot)?
        .child(text_block)?
        .build();
    let move_state = state.clone();
    let move_address = address.to_string();
    on_click(&header, move |_| {
        WishlistViewModel::move_to(&move_state, move_address.clone());
    })?;

    let delete_button = ElementBuilder::new("button")?
        .class("action-btn del")
        .attr("title", "삭제")?
        .text("삭제")
        .build();
    let delete_state = state.clone();
    let delete_address = address.to_string();
    on_click(&delete_button, move |_| {
        WishlistViewModel::delete(&delete_state, delete_address.clone());
    })?;
    let actions = ElementBuilder::new("div")?
        .class("item-actions")
        .child(delete_button)?
        .build();

    let item = ElementBuilder::new("div")?
        .class("wish-item")
        .child(header)?
        .child(actions)?
        .build();
    Ok(item)
}
