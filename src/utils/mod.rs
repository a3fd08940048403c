// ============================================================================
// UTILS - FFI del mapa y helpers varios
// ============================================================================

pub mod naver_ffi;

pub use naver_ffi::*;
