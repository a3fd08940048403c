// ============================================================================
// WISHMAP APP - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica UI + orquestación de servicios
// - Services: SOLO comunicación con backends y SDK del mapa
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con los backends
// ============================================================================

mod app;
mod config;
mod dom;
mod maps;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::models::Coordinate;
use crate::state::UpdateType;
use crate::viewmodels::{MapViewModel, SelectionViewModel, WishlistViewModel};

// Instancia global de App (un solo hilo: el event loop del navegador)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook primero para poder debuggear fallos de arranque
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("🚀 Wishmap App - Rust puro + MVVM");

    let mut app = App::new()?;
    app.render()?;
    let state = app.state().clone();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Montaje del mapa y cargas iniciales (polígonos + wishlist)
    MapViewModel::initialize_map(&*state.renderer());
    MapViewModel::load_restricted_polygons(state.renderer());
    WishlistViewModel::load(&state);

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con un tipo específico de update
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| match update_type {
        UpdateType::Incremental(inc_type) => {
            if let Some(ref app) = *app_cell.borrow() {
                if let Err(e) = app.update_incremental(inc_type) {
                    log::error!("❌ Error en actualización incremental {:?}: {:?}", inc_type, e);
                }
            }
        }
        UpdateType::FullRender => {
            if let Some(ref mut app) = *app_cell.borrow_mut() {
                if let Err(e) = app.render() {
                    log::error!("❌ Error re-renderizando: {:?}", e);
                } else {
                    // El render completo destruye el contenedor del mapa y sus
                    // overlays: remontar mapa, polígonos y marcadores guardados
                    let state = app.state();
                    MapViewModel::initialize_map(&*state.renderer());
                    MapViewModel::load_restricted_polygons(state.renderer());
                    WishlistViewModel::load(state);
                }
            }
        }
    });
}

/// JS→Rust: reset completo de la vista (llamable desde el bridge)
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

/// JS→Rust: click en el mapa (lo invoca el bridge del SDK)
#[wasm_bindgen]
pub fn handle_map_click(lat: f64, lng: f64) {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            SelectionViewModel::handle_map_click(app.state(), Coordinate::new(lat, lng));
        } else {
            log::warn!("⚠️ Click de mapa antes de inicializar la app");
        }
    });
}

/// JS→Rust: botón de panorama en el info window de un marcador guardado
#[wasm_bindgen]
pub fn open_panorama_view(lat: f64, lng: f64, address: String) {
    crate::utils::naver_ffi::open_panorama_window(lat, lng, &address);
}
