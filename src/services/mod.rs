//! Services module
//!
//! Este módulo contiene la lógica de aplicación: autenticación, CRUD
//! genérico por recurso, búsqueda global y el hand-off de reservas por
//! WhatsApp.

pub mod auth_service;
pub mod busqueda_service;
pub mod recurso_service;
pub mod whatsapp_service;

pub use auth_service::*;
pub use busqueda_service::*;
pub use recurso_service::*;
pub use whatsapp_service::*;
