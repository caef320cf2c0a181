//! Hand-off de reservas por WhatsApp
//!
//! No hay checkout: reservar es abrir un deep link `wa.me` con un mensaje
//! pre-cargado. El armado del texto es responsabilidad del caller; acá solo
//! se normaliza el número y se codifica el mensaje en la URL.

use crate::config::environment::EnvironmentConfig;

/// Constructor de deep links `https://wa.me/<numero>?text=<mensaje>`
pub struct WhatsappService {
    numero: String,
}

impl WhatsappService {
    /// `None` si el entorno no configuró número de WhatsApp, o si el
    /// configurado no sirve
    pub fn desde_config(config: &EnvironmentConfig) -> Option<Self> {
        config
            .whatsapp_numero
            .as_deref()
            .and_then(Self::nuevo)
    }

    /// `None` si el número no trae ningún dígito: un `wa.me/` sin número
    /// es un link roto, no un fallback
    pub fn nuevo(numero: &str) -> Option<Self> {
        // wa.me exige solo dígitos, sin "+" ni separadores
        let numero: String = numero.chars().filter(|c| c.is_ascii_digit()).collect();
        if numero.is_empty() {
            return None;
        }
        Some(Self { numero })
    }

    /// Link de reserva con el mensaje ya codificado
    pub fn link(&self, texto: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.numero,
            urlencoding::encode(texto)
        )
    }
}
