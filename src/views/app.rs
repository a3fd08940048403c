// ============================================================================
// APP VIEW - Layout principal: sidebar + mapa + footer
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{input_value, on_change, on_click, on_enter, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::{SelectionViewModel, WishlistViewModel};
use crate::views::footer::render_location_footer;

/// Renderizar la aplicación completa (scaffold estático; el contenido dinámico
/// lo llenan las actualizaciones incrementales)
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("app-container")
        .child(render_sidebar(state)?)?
        .child(render_map_area(state)?)?
        .child(render_location_footer(state)?)?
        .build();
    Ok(container)
}

fn render_sidebar(state: &AppState) -> Result<Element, JsValue> {
    let sidebar = ElementBuilder::new("aside")?
        .class("sidebar")
        .id("sidebar")?
        .child(render_sidebar_toggle()?)?
        .child(render_search_box(state)?)?
        .child(render_wishlist_form(state)?)?
        .child(
            // Contenedor de grupos; update_sidebar() lo reconstruye en cada load
            ElementBuilder::new("div")?
                .class("wishlist-container")
                .id("wishlist-container")?
                .build(),
        )?
        .build();
    Ok(sidebar)
}

fn render_sidebar_toggle() -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("sidebar-toggle")
        .id("sidebar-toggle-btn")?
        .text("≡")
        .build();
    on_click(&button, move |_| {
        if let Some(sidebar) = crate::dom::get_element_by_id("sidebar") {
            let _ = sidebar.class_list().toggle("collapsed");
        }
    })?;
    Ok(button)
}

fn render_search_box(state: &AppState) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("search-input")
        .id("search-address")?
        .attr("type", "text")?
        .attr("placeholder", "주소 검색")?
        .build();

    let search_state = state.clone();
    on_enter(&input, move || {
        SelectionViewModel::search_address(&search_state, &input_value("search-address"));
    })?;

    let button = ElementBuilder::new("button")?
        .class("search-btn")
        .text("검색")
        .build();
    let button_state = state.clone();
    on_click(&button, move |_| {
        SelectionViewModel::search_address(&button_state, &input_value("search-address"));
    })?;

    let search_box = ElementBuilder::new("div")?
        .class("search-box")
        .child(input)?
        .child(button)?
        .build();
    Ok(search_box)
}

fn render_wishlist_form(state: &AppState) -> Result<Element, JsValue> {
    let group_input = ElementBuilder::new("input")?
        .class("wishlist-group")
        .id("wishlist-group")?
        .attr("type", "text")?
        .attr("placeholder", "그룹 (기본)")?
        .attr("list", "group-list")?
        .build();

    // Sugerencias de grupo; update_sidebar() las regenera con cada load
    let group_datalist = ElementBuilder::new("datalist")?.id("group-list")?.build();

    let color_input = ElementBuilder::new("input")?
        .class("wishlist-color")
        .id("wishlist-color")?
        .attr("type", "color")?
        .attr("value", "#ff0000")?
        .build();

    let note_input = ElementBuilder::new("input")?
        .class("wishlist-note")
        .id("wishlist-note")?
        .attr("type", "text")?
        .attr("placeholder", "메모")?
        .build();

    // Deshabilitado hasta la primera selección (update_save_button)
    let save_button = ElementBuilder::new("button")?
        .class("add-wish-btn")
        .id("add-wish-button")?
        .attr("disabled", "disabled")?
        .text("위시리스트에 저장")
        .build();
    let save_state = state.clone();
    on_click(&save_button, move |_| {
        WishlistViewModel::save_current(&save_state);
    })?;

    let export_button = ElementBuilder::new("button")?
        .class("export-btn")
        .id("export-csv-button")?
        .text("CSV 내보내기")
        .build();
    let export_state = state.clone();
    on_click(&export_button, move |_| {
        WishlistViewModel::export(&export_state);
    })?;

    let form = ElementBuilder::new("div")?
        .class("wishlist-form")
        .child(group_input)?
        .child(group_datalist)?
        .child(color_input)?
        .child(note_input)?
        .child(save_button)?
        .child(export_button)?
        .build();
    Ok(form)
}

fn render_map_area(state: &AppState) -> Result<Element, JsValue> {
    let map = ElementBuilder::new("div")?
        .class("map-container")
        .id("map")?
        .build();

    let toggle = ElementBuilder::new("input")?
        .id("nearby-toggle")?
        .attr("type", "checkbox")?
        .build();
    let toggle_state = state.clone();
    on_change(&toggle, move |event| {
        let enabled = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.checked())
            .unwrap_or(false);
        SelectionViewModel::toggle_nearby_mode(&toggle_state, enabled);
    })?;

    let nearby_control = ElementBuilder::new("label")?
        .class("nearby-control")
        .child(toggle)?
        .child(ElementBuilder::new("span")?.text("주변 상권 보기").build())?
        .build();

    // Oculto por defecto; update_nearby_loading lo muestra durante el fetch
    let loading = ElementBuilder::new("div")?
        .class("nearby-loading")
        .id("nearby-loading")?
        .attr("style", "display: none;")?
        .text("로딩중...")
        .build();

    let map_area = ElementBuilder::new("div")?
        .class("map-area")
        .child(map)?
        .child(nearby_control)?
        .child(loading)?
        .build();
    Ok(map_area)
}
