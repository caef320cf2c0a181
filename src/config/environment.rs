//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: URL base del API REST
//! y el número del canal de reservas por WhatsApp.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub api_base_url: String,
    pub whatsapp_numero: Option<String>,
}

impl EnvironmentConfig {
    /// Cargar configuración desde variables de entorno (lee `.env` si existe)
    pub fn cargar() -> Self {
        dotenvy::dotenv().ok();

        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            api_base_url: env::var("API_BASE_URL").expect("API_BASE_URL must be set"),
            whatsapp_numero: env::var("WHATSAPP_NUMERO").ok(),
        }
    }

    /// Construir configuración explícita (tests y hosts embebidos)
    pub fn nueva(api_base_url: impl Into<String>) -> Self {
        Self {
            environment: "test".to_string(),
            api_base_url: api_base_url.into(),
            whatsapp_numero: None,
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
