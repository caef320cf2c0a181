//! Sesión y almacenamiento del cliente
//!
//! Este módulo reemplaza las lecturas ad-hoc de storage por un store de
//! sesión con ciclo de vida tipado: anónima, autenticada o expirada.

pub mod almacen;
pub mod sesion;

pub use almacen::*;
pub use sesion::*;
