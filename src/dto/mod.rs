//! DTOs de la aplicación
//!
//! Shapes de request/response del API de autenticación y de la búsqueda
//! global.

pub mod auth_dto;
pub mod busqueda_dto;

pub use auth_dto::*;
pub use busqueda_dto::*;
