//! Modelos de datos
//!
//! Este módulo contiene los once tipos de publicación del catálogo, el
//! usuario autenticado y los roles del sistema. Cada colección es
//! independiente: no hay referencias entre recursos.

pub mod recursos;
pub mod usuario;

pub use recursos::*;
pub use usuario::*;
