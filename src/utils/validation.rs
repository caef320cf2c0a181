//! Utilidades de validación
//!
//! Funciones helper para las reglas que comparten los formularios del panel:
//! presencia, longitud mínima, precio positivo y cupo no negativo. Cada
//! recurso arma su propia combinación en `Recurso::validar`.

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// Validar que un string no esté vacío (ignorando espacios)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima (en caracteres, no bytes)
pub fn validate_min_length(value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        let mut error = ValidationError::new("min_length");
        error.add_param("min".into(), &min);
        error.add_param("actual".into(), &value.chars().count());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor numérico sea estrictamente positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor numérico no sea negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email (chequeo mínimo, el servidor valida en serio)
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let partes: Vec<&str> = value.split('@').collect();
    if partes.len() != 2 || partes[0].is_empty() || !partes[1].contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (solo cantidad de dígitos)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digitos = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digitos < 8 || digitos > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Acumulador para armar `ValidationErrors` campo por campo
pub fn agregar_error(
    errores: &mut ValidationErrors,
    campo: &'static str,
    resultado: Result<(), ValidationError>,
) {
    if let Err(e) = resultado {
        errores.add(campo, e);
    }
}
