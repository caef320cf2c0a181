//! Sistema de manejo de errores
//!
//! Este módulo define la taxonomía de errores del cliente y el mensaje
//! que corresponde mostrar al usuario en cada caso. Todos los errores son
//! terminales en el borde de UI: se muestran y no se reintentan.

use thiserror::Error;

/// Errores del cliente REST y de los servicios
#[derive(Error, Debug)]
pub enum ApiError {
    /// El fetch falló antes de obtener respuesta (DNS, conexión caída, etc.)
    #[error("Network error: {0}")]
    Red(#[from] reqwest::Error),

    /// Respuesta no-2xx; `mensaje` sale del campo `message` del body JSON
    /// o es un genérico derivado del status cuando el body no es JSON
    #[error("HTTP {estado}: {mensaje}")]
    Http { estado: u16, mensaje: String },

    /// 401 del servidor; el logout forzado ya se ejecutó antes de devolver esto
    #[error("Session expired")]
    SesionExpirada,

    /// La sesión guardada no pasó la validación de carga
    #[error("Invalid session: {0}")]
    SesionInvalida(String),

    /// Los datos del formulario no pasaron las reglas del recurso
    #[error("Validation error: {0}")]
    Validacion(#[from] validator::ValidationErrors),

    /// El body 2xx no se pudo decodificar al tipo esperado
    #[error("Invalid response body: {0}")]
    Respuesta(#[from] serde_json::Error),
}

impl ApiError {
    /// Mensaje para mostrar al usuario (modal de alerta o texto inline)
    pub fn mensaje_usuario(&self) -> String {
        match self {
            ApiError::Red(_) => "No se pudo conectar. Verificá tu conexión e intentá de nuevo.".to_string(),
            ApiError::Http { mensaje, .. } => mensaje.clone(),
            ApiError::SesionExpirada => "Tu sesión expiró. Iniciá sesión nuevamente.".to_string(),
            ApiError::SesionInvalida(_) => "Tu sesión no es válida. Iniciá sesión nuevamente.".to_string(),
            ApiError::Validacion(_) => "Revisá los datos ingresados.".to_string(),
            ApiError::Respuesta(_) => "El servidor devolvió una respuesta inesperada.".to_string(),
        }
    }

    /// Indica si el error corresponde a una sesión vencida o inválida
    pub fn es_de_sesion(&self) -> bool {
        matches!(self, ApiError::SesionExpirada | ApiError::SesionInvalida(_))
    }
}

/// Mensaje genérico derivado del status cuando el body no trae `message`
pub fn mensaje_http_generico(estado: u16) -> String {
    match estado {
        400 => "Solicitud inválida (400)".to_string(),
        403 => "No tenés permisos para esta operación (403)".to_string(),
        404 => "El recurso solicitado no existe (404)".to_string(),
        500..=599 => format!("Error del servidor ({})", estado),
        _ => format!("Error HTTP ({})", estado),
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mensaje_http_verbatim() {
        let err = ApiError::Http {
            estado: 409,
            mensaje: "El alojamiento ya existe".to_string(),
        };
        assert_eq!(err.mensaje_usuario(), "El alojamiento ya existe");
    }

    #[test]
    fn test_mensaje_generico_por_status() {
        assert_eq!(mensaje_http_generico(404), "El recurso solicitado no existe (404)");
        assert_eq!(mensaje_http_generico(503), "Error del servidor (503)");
        assert_eq!(mensaje_http_generico(418), "Error HTTP (418)");
    }

    #[test]
    fn test_errores_de_sesion() {
        assert!(ApiError::SesionExpirada.es_de_sesion());
        assert!(ApiError::SesionInvalida("rol".into()).es_de_sesion());
        let http = ApiError::Http { estado: 500, mensaje: "x".into() };
        assert!(!http.es_de_sesion());
    }
}
