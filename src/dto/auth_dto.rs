//! DTOs de autenticación

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::models::usuario::Usuario;
use crate::utils::validation::{agregar_error, validate_email, validate_min_length, validate_phone};

/// Request de login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request de registro
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub telefono: Option<String>,
}

impl RegisterRequest {
    /// Reglas locales previas al submit (el servidor valida en serio)
    pub fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errores = ValidationErrors::new();
        agregar_error(&mut errores, "nombre", validate_min_length(&self.nombre, 3));
        agregar_error(&mut errores, "email", validate_email(&self.email));
        agregar_error(&mut errores, "password", validate_min_length(&self.password, 6));
        if let Some(telefono) = &self.telefono {
            agregar_error(&mut errores, "telefono", validate_phone(telefono));
        }
        if errores.is_empty() {
            Ok(())
        } else {
            Err(errores)
        }
    }
}

/// Response de login/register: token + usuario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub usuario: Usuario,
}

/// Response de `GET /auth/verify-admin`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyAdminResponse {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}
