//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y validación
//! compartidas por los servicios y controladores.

pub mod errors;
pub mod validation;

pub use errors::*;
