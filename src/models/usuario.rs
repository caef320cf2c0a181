//! Usuario y roles del sistema
//!
//! El rol solo decide qué se renderiza (atribución de vendedor, pantallas
//! del panel). La frontera de autorización real vive del lado del servidor.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Roles aceptados al validar una sesión guardada
    pub static ref ROLES_PERMITIDOS: Vec<&'static str> =
        vec!["admin", "sysadmin", "agencia", "operador", "user"];
}

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rol {
    Admin,
    Sysadmin,
    Agencia,
    Operador,
    User,
}

impl Rol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Admin => "admin",
            Rol::Sysadmin => "sysadmin",
            Rol::Agencia => "agencia",
            Rol::Operador => "operador",
            Rol::User => "user",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Rol::Admin),
            "sysadmin" => Some(Rol::Sysadmin),
            "agencia" => Some(Rol::Agencia),
            "operador" => Some(Rol::Operador),
            "user" => Some(Rol::User),
            _ => None,
        }
    }
}

/// Usuario autenticado, tal como viene en `currentUser`.
///
/// `rol` queda como string crudo: la validación contra el allow-list se hace
/// en `SesionStore::cargar`, no en la deserialización, para poder rechazar
/// con mensaje claro un rol desconocido en lugar de fallar el parseo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: String,
    pub email: String,
    #[serde(rename = "role")]
    pub rol: String,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub agencia: Option<String>,
}

impl Usuario {
    /// Chequeo puro de pertenencia, usado solo para decidir renderizado
    pub fn tiene_rol(&self, roles: &[&str]) -> bool {
        roles.contains(&self.rol.as_str())
    }

    /// Viewers con atribución de vendedor y pantallas de administración
    pub fn es_admin(&self) -> bool {
        matches!(self.rol_tipado(), Some(Rol::Admin | Rol::Sysadmin))
    }

    /// Rol tipado, `None` si el string guardado no es un rol conocido
    pub fn rol_tipado(&self) -> Option<Rol> {
        Rol::from_str(&self.rol)
    }
}
