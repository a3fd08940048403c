// ============================================================================
// APP - Controlador de la vista (montaje + actualizaciones)
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::incremental::{update_footer, update_nearby_loading, update_save_button, update_sidebar};
use crate::dom::{append_child, get_element_by_id};
use crate::maps::WebMapRenderer;
use crate::state::{AppState, IncrementalUpdate};
use crate::views::render_app;

/// Aplicación principal: estado + raíz del DOM
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación (requiere un nodo #app en el documento)
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        Ok(Self {
            state: AppState::new(Rc::new(WebMapRenderer::new())),
            root: Some(root),
        })
    }

    /// Render completo: scaffold estático + primer pase de actualizaciones.
    /// Ojo: destruye el contenedor del mapa, el caller debe re-inicializarlo.
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            root.set_inner_html("");
            let view = render_app(&self.state)?;
            append_child(root, &view)?;

            update_sidebar(&self.state)?;
            update_footer(&self.state)?;
            update_save_button(&self.state);
            update_nearby_loading(&self.state)?;
        }
        Ok(())
    }

    /// Referencia al estado compartido
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::Footer => update_footer(&self.state),
            IncrementalUpdate::Sidebar => update_sidebar(&self.state),
            IncrementalUpdate::NearbyLoading => update_nearby_loading(&self.state),
            IncrementalUpdate::SaveButton => {
                update_save_button(&self.state);
                Ok(())
            }
        }
    }
}
