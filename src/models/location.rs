use serde::{Deserialize, Serialize};

/// Coordenada geográfica (lat/lng, igual que el SDK del mapa)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Resultado del chequeo de zona restringida ("impossible zone")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneStatus {
    /// Chequeo todavía en vuelo
    Unknown,
    Allowed,
    Blocked,
    /// El servicio de zonas no respondió
    ConnectionFailed,
}

impl ZoneStatus {
    /// Mapear la respuesta `is_inside` del backend
    pub fn from_is_inside(is_inside: bool) -> Self {
        if is_inside {
            ZoneStatus::Blocked
        } else {
            ZoneStatus::Allowed
        }
    }

    /// Texto de estado para el footer (None mientras el chequeo está en vuelo)
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ZoneStatus::Unknown => None,
            ZoneStatus::Blocked => Some("불가능 구역 (TRUE)"),
            ZoneStatus::Allowed => Some("가능 구역 (FALSE)"),
            ZoneStatus::ConnectionFailed => Some("서버 연결 실패"),
        }
    }
}

/// Selección activa (única por sesión, se reemplaza completa en cada selección)
#[derive(Debug, Clone)]
pub struct SelectedLocation {
    pub coord: Coordinate,
    pub address: String,
    pub zone_status: ZoneStatus,
}

impl SelectedLocation {
    pub fn new(coord: Coordinate, address: String) -> Self {
        Self {
            coord,
            address,
            zone_status: ZoneStatus::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_inside_true_means_blocked() {
        assert_eq!(ZoneStatus::from_is_inside(true), ZoneStatus::Blocked);
        assert_eq!(ZoneStatus::from_is_inside(false), ZoneStatus::Allowed);
    }

    #[test]
    fn footer_labels_match_backend_contract() {
        assert_eq!(ZoneStatus::Blocked.label(), Some("불가능 구역 (TRUE)"));
        assert_eq!(ZoneStatus::Allowed.label(), Some("가능 구역 (FALSE)"));
        assert_eq!(ZoneStatus::ConnectionFailed.label(), Some("서버 연결 실패"));
        assert_eq!(ZoneStatus::Unknown.label(), None);
    }
}
