// ============================================================================
// API CLIENT - CRUD del wishlist contra el backend (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;
use std::collections::HashMap;

use crate::config::CONFIG;
use crate::models::WishlistEntry;

/// Cliente del backend de wishlist - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient;

impl ApiClient {
    pub fn new() -> Self {
        Self
    }

    /// Listar el wishlist completo (dirección → entrada)
    pub async fn list(&self) -> Result<HashMap<String, WishlistEntry>, String> {
        let url = CONFIG.wishlist_url("/api/wishlist");
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<HashMap<String, WishlistEntry>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Crear/reemplazar una entrada (no existe edición parcial)
    pub async fn save(
        &self,
        address: &str,
        group_name: &str,
        color: &str,
        note: &str,
    ) -> Result<(), String> {
        let url = CONFIG.wishlist_url("/api/wishlist");
        let request = SaveWishlistRequest {
            address: address.to_string(),
            group_name: group_name.to_string(),
            color: color.to_string(),
            note: if note.trim().is_empty() {
                None
            } else {
                Some(note.to_string())
            },
        };

        log::info!("💾 Guardando en wishlist: {} (grupo: {})", address, group_name);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Eliminar una entrada por dirección
    pub async fn delete(&self, address: &str) -> Result<(), String> {
        let url = CONFIG.wishlist_url("/api/wishlist");
        let request = DeleteWishlistRequest {
            address: address.to_string(),
        };

        log::info!("🗑️ Eliminando de wishlist: {}", address);

        let response = Request::delete(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// URL de exportación (descarga vía navegación del browser, no XHR)
    pub fn export_url(&self) -> String {
        CONFIG.wishlist_url("/api/wishlist/export")
    }
}

#[derive(serde::Serialize)]
struct SaveWishlistRequest {
    address: String,
    group_name: String,
    color: String,
    note: Option<String>,
}

#[derive(serde::Serialize)]
struct DeleteWishlistRequest {
    address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_url_hangs_off_the_wishlist_base() {
        let url = ApiClient::new().export_url();
        assert!(url.ends_with("/api/wishlist/export"));
        assert!(url.starts_with(&CONFIG.wishlist_api_base));
    }
}
