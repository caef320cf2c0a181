//! Abstracción de storage clave/valor
//!
//! Equivalente a `localStorage`/`sessionStorage` del navegador. El host web
//! provee su propia implementación; `AlmacenMemoria` cubre tests y hosts
//! embebidos.

use std::collections::HashMap;
use std::sync::RwLock;

/// Clave del bearer token (storage persistente)
pub const CLAVE_TOKEN: &str = "token";
/// Clave del usuario serializado como JSON (storage persistente)
pub const CLAVE_USUARIO: &str = "currentUser";
/// Clave del flag de verificación de admin (storage de sesión)
pub const CLAVE_ADMIN_VERIFICADO: &str = "adminVerified";

/// Storage clave/valor de strings, sin cifrado
pub trait Almacen: Send + Sync {
    fn obtener(&self, clave: &str) -> Option<String>;
    fn guardar(&self, clave: &str, valor: &str);
    fn eliminar(&self, clave: &str);
}

/// Implementación en memoria
#[derive(Default)]
pub struct AlmacenMemoria {
    datos: RwLock<HashMap<String, String>>,
}

impl AlmacenMemoria {
    pub fn nuevo() -> Self {
        Self::default()
    }
}

impl Almacen for AlmacenMemoria {
    fn obtener(&self, clave: &str) -> Option<String> {
        self.datos.read().expect("lock de almacén").get(clave).cloned()
    }

    fn guardar(&self, clave: &str, valor: &str) {
        self.datos
            .write()
            .expect("lock de almacén")
            .insert(clave.to_string(), valor.to_string());
    }

    fn eliminar(&self, clave: &str) {
        self.datos.write().expect("lock de almacén").remove(clave);
    }
}
