use serde::{Deserialize, Serialize};

/// Grupo por defecto cuando la entrada no trae group_name
pub const DEFAULT_GROUP: &str = "기본";

/// Entrada de wishlist tal como la persiste el backend, indexada por dirección.
/// La dirección es la clave del mapa y no se repite dentro de la entrada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    #[serde(default)]
    pub group_name: Option<String>,
    pub color: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl WishlistEntry {
    /// Nombre de grupo efectivo (vacío o ausente → grupo por defecto)
    pub fn group(&self) -> &str {
        self.group_name
            .as_deref()
            .filter(|g| !g.trim().is_empty())
            .unwrap_or(DEFAULT_GROUP)
    }
}

/// Vista derivada para el sidebar: un grupo con sus entradas (dirección, entrada)
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistGroup {
    pub name: String,
    pub entries: Vec<(String, WishlistEntry)>,
}

impl WishlistGroup {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(group: Option<&str>) -> WishlistEntry {
        WishlistEntry {
            group_name: group.map(|g| g.to_string()),
            color: "#ff0000".to_string(),
            note: None,
        }
    }

    #[test]
    fn missing_or_blank_group_falls_back_to_default() {
        assert_eq!(entry(None).group(), DEFAULT_GROUP);
        assert_eq!(entry(Some("")).group(), DEFAULT_GROUP);
        assert_eq!(entry(Some("   ")).group(), DEFAULT_GROUP);
        assert_eq!(entry(Some("맛집")).group(), "맛집");
    }
}
