//! Servicio de autenticación
//!
//! Login, registro y verificación de admin contra `/auth/*`. Tras un login
//! exitoso el token y el usuario quedan persistidos y la sesión pasa a
//! `Autenticada`; el server invalida con 401, acá no se trackea expiración.

use tracing::info;

use crate::client::ApiClient;
use crate::dto::auth_dto::{AuthResponse, LoginRequest, RegisterRequest, VerifyAdminResponse};
use crate::models::usuario::Usuario;
use crate::utils::errors::ApiResult;

pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn nuevo(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login`; persiste `token` y `currentUser` si sale bien
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<Usuario> {
        let respuesta: AuthResponse = self.client.post("auth/login", request).await?;
        self.client
            .sesion()
            .iniciar(respuesta.usuario.clone(), respuesta.token);
        info!("login exitoso para {}", respuesta.usuario.email);
        Ok(respuesta.usuario)
    }

    /// `POST /auth/register`; valida localmente antes de enviar
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<Usuario> {
        request.validar()?;
        let respuesta: AuthResponse = self.client.post("auth/register", request).await?;
        self.client
            .sesion()
            .iniciar(respuesta.usuario.clone(), respuesta.token);
        Ok(respuesta.usuario)
    }

    /// `GET /auth/verify-admin`; cachea el resultado positivo en el storage
    /// de sesión bajo `adminVerified`
    pub async fn verificar_admin(&self) -> ApiResult<bool> {
        if self.client.sesion().admin_verificado() {
            return Ok(true);
        }
        let respuesta: VerifyAdminResponse = self.client.get("auth/verify-admin").await?;
        if respuesta.is_admin {
            self.client.sesion().marcar_admin_verificado();
        }
        Ok(respuesta.is_admin)
    }

    /// Logout explícito: limpia storage y vuelve a sesión anónima
    pub fn logout(&self) {
        self.client.sesion().cerrar();
    }
}
