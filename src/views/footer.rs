// ============================================================================
// FOOTER VIEW - Overlay de selección (dirección + validez de zona)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::SelectionViewModel;

/// Scaffold del footer. Arranca oculto; update_footer() lo muestra y le
/// escribe dirección y estado en cada selección.
pub fn render_location_footer(state: &AppState) -> Result<Element, JsValue> {
    let address = ElementBuilder::new("span")?
        .class("footer-address")
        .id("footer-address")?
        .build();

    let status = ElementBuilder::new("span")?
        .class("footer-status")
        .id("footer-status")?
        .build();

    let panorama_button = ElementBuilder::new("button")?
        .class("panorama-btn")
        .id("footer-panorama-btn")?
        .text("로드뷰 보기")
        .build();
    let panorama_state = state.clone();
    on_click(&panorama_button, move |_| {
        SelectionViewModel::open_panorama(&panorama_state);
    })?;

    let footer = ElementBuilder::new("div")?
        .class("location-footer")
        .id("location-footer")?
        .attr("style", "display: none;")?
        .child(address)?
        .child(status)?
        .child(panorama_button)?
        .build();
    Ok(footer)
}
