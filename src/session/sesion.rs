//! Store de sesión con ciclo de vida tipado
//!
//! Estado compartido entre el cliente REST y los controladores. El 401 del
//! servidor es la única invalidación real; acá solo se valida la forma de lo
//! guardado (campos presentes y rol dentro del allow-list).

use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::models::usuario::{Usuario, ROLES_PERMITIDOS};
use crate::session::almacen::{
    Almacen, CLAVE_ADMIN_VERIFICADO, CLAVE_TOKEN, CLAVE_USUARIO,
};
use crate::utils::errors::{ApiError, ApiResult};

/// Ruta a la que se fuerza la navegación al invalidar la sesión
pub const RUTA_LOGIN: &str = "/login";

/// Seam de navegación forzada (redirect del host)
pub trait Navegador: Send + Sync {
    fn navegar(&self, ruta: &str);
}

/// Navegador que no hace nada (hosts sin routing)
pub struct NavegadorNulo;

impl Navegador for NavegadorNulo {
    fn navegar(&self, _ruta: &str) {}
}

/// Navegador que registra las rutas visitadas (tests y hosts embebidos)
#[derive(Default)]
pub struct NavegadorMemoria {
    rutas: RwLock<Vec<String>>,
}

impl NavegadorMemoria {
    pub fn nuevo() -> Self {
        Self::default()
    }

    pub fn rutas(&self) -> Vec<String> {
        self.rutas.read().expect("lock de navegador").clone()
    }
}

impl Navegador for NavegadorMemoria {
    fn navegar(&self, ruta: &str) {
        self.rutas.write().expect("lock de navegador").push(ruta.to_string());
    }
}

/// Ciclo de vida de la sesión
#[derive(Debug, Clone, PartialEq)]
pub enum EstadoSesion {
    Anonima,
    Autenticada { usuario: Usuario, token: String },
    Expirada,
}

/// Store de sesión: storage persistente + storage de sesión + estado tipado
pub struct SesionStore {
    local: Arc<dyn Almacen>,
    temporal: Arc<dyn Almacen>,
    navegador: Arc<dyn Navegador>,
    estado: RwLock<EstadoSesion>,
}

impl SesionStore {
    pub fn nuevo(
        local: Arc<dyn Almacen>,
        temporal: Arc<dyn Almacen>,
        navegador: Arc<dyn Navegador>,
    ) -> Self {
        Self {
            local,
            temporal,
            navegador,
            estado: RwLock::new(EstadoSesion::Anonima),
        }
    }

    /// Cargar la sesión guardada al iniciar el host.
    ///
    /// Sin token ni usuario guardados la sesión queda anónima. Con datos
    /// presentes pero inválidos (JSON roto, campos faltantes, rol fuera del
    /// allow-list) se limpia todo y se fuerza la navegación a login.
    pub fn cargar(&self) -> ApiResult<EstadoSesion> {
        let token = self.local.obtener(CLAVE_TOKEN);
        let usuario_json = self.local.obtener(CLAVE_USUARIO);

        let (token, usuario_json) = match (token, usuario_json) {
            (Some(t), Some(u)) => (t, u),
            (None, None) => {
                *self.estado.write().expect("lock de sesión") = EstadoSesion::Anonima;
                return Ok(EstadoSesion::Anonima);
            }
            _ => return Err(self.invalidar("sesión guardada incompleta")),
        };

        let usuario: Usuario = match serde_json::from_str(&usuario_json) {
            Ok(u) => u,
            Err(e) => {
                warn!("currentUser guardado no parsea: {}", e);
                return Err(self.invalidar("usuario guardado ilegible"));
            }
        };

        if usuario.id.trim().is_empty() || usuario.email.trim().is_empty() {
            return Err(self.invalidar("usuario guardado sin id o email"));
        }
        if !ROLES_PERMITIDOS.contains(&usuario.rol.as_str()) {
            return Err(self.invalidar("rol fuera del allow-list"));
        }

        let estado = EstadoSesion::Autenticada { usuario, token };
        *self.estado.write().expect("lock de sesión") = estado.clone();
        Ok(estado)
    }

    /// Persistir una sesión nueva tras login/register exitoso
    pub fn iniciar(&self, usuario: Usuario, token: String) {
        info!("sesión iniciada para {}", usuario.email);
        self.local.guardar(CLAVE_TOKEN, &token);
        if let Ok(json) = serde_json::to_string(&usuario) {
            self.local.guardar(CLAVE_USUARIO, &json);
        }
        *self.estado.write().expect("lock de sesión") =
            EstadoSesion::Autenticada { usuario, token };
    }

    /// Logout explícito del usuario
    pub fn cerrar(&self) {
        self.limpiar();
        *self.estado.write().expect("lock de sesión") = EstadoSesion::Anonima;
    }

    /// Logout forzado por un 401: limpia credenciales y navega a login.
    /// Pisa cualquier manejo de error que tuviera la pantalla que llamó.
    pub fn expirar(&self) {
        warn!("401 recibido: sesión expirada, redirigiendo a {}", RUTA_LOGIN);
        self.limpiar();
        *self.estado.write().expect("lock de sesión") = EstadoSesion::Expirada;
        self.navegador.navegar(RUTA_LOGIN);
    }

    fn invalidar(&self, motivo: &str) -> ApiError {
        warn!("sesión inválida ({}), forzando logout", motivo);
        self.limpiar();
        *self.estado.write().expect("lock de sesión") = EstadoSesion::Expirada;
        self.navegador.navegar(RUTA_LOGIN);
        ApiError::SesionInvalida(motivo.to_string())
    }

    fn limpiar(&self) {
        self.local.eliminar(CLAVE_TOKEN);
        self.local.eliminar(CLAVE_USUARIO);
        self.temporal.eliminar(CLAVE_ADMIN_VERIFICADO);
    }

    pub fn estado(&self) -> EstadoSesion {
        self.estado.read().expect("lock de sesión").clone()
    }

    pub fn token(&self) -> Option<String> {
        match &*self.estado.read().expect("lock de sesión") {
            EstadoSesion::Autenticada { token, .. } => Some(token.clone()),
            _ => None,
        }
    }

    pub fn usuario(&self) -> Option<Usuario> {
        match &*self.estado.read().expect("lock de sesión") {
            EstadoSesion::Autenticada { usuario, .. } => Some(usuario.clone()),
            _ => None,
        }
    }

    /// Chequeo de rol solo para renderizado condicional
    pub fn tiene_rol(&self, roles: &[&str]) -> bool {
        self.usuario().map(|u| u.tiene_rol(roles)).unwrap_or(false)
    }

    /// Decide si corresponde mostrar la atribución de vendedor
    pub fn es_admin(&self) -> bool {
        self.usuario().map(|u| u.es_admin()).unwrap_or(false)
    }

    /// Flag de verificación de admin (storage de sesión, no persistente)
    pub fn marcar_admin_verificado(&self) {
        self.temporal.guardar(CLAVE_ADMIN_VERIFICADO, "true");
    }

    pub fn admin_verificado(&self) -> bool {
        self.temporal
            .obtener(CLAVE_ADMIN_VERIFICADO)
            .map(|v| v == "true")
            .unwrap_or(false)
    }
}
