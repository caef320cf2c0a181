//! Núcleo de aplicación del marketplace mayorista de turismo
//!
//! Esta librería implementa la capa de aplicación que comparten el sitio
//! público y el panel de mayoristas: cliente REST autenticado, sesión y
//! roles, búsqueda global sobre los diez catálogos y el ciclo CRUD genérico
//! por recurso. El renderizado y la navegación quedan a cargo del host.

pub mod client;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;

pub use client::ApiClient;
pub use config::environment::EnvironmentConfig;
pub use session::sesion::{EstadoSesion, Navegador, SesionStore};
pub use utils::errors::{ApiError, ApiResult};
