//! Controladores de pantalla
//!
//! La lógica de las pantallas sin el renderizado: el ciclo CRUD genérico de
//! los listados del panel y la búsqueda global con debounce del sitio
//! público.

pub mod busqueda_controller;
pub mod listado_controller;

pub use busqueda_controller::*;
pub use listado_controller::*;
