//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de entorno del cliente:
//! URL base del API y datos del canal de WhatsApp.

pub mod environment;

pub use environment::*;
