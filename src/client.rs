//! Cliente HTTP autenticado contra el API REST del marketplace
//!
//! Envoltorio único de `reqwest` que usan todos los servicios: inyecta el
//! bearer token cuando hay sesión, procesa las respuestas según la taxonomía
//! de errores y fuerza el logout ante cualquier 401. Sin reintentos, sin
//! backoff y sin timeout: un request colgado deja la pantalla en "cargando".

use reqwest::multipart::Form;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::config::environment::EnvironmentConfig;
use crate::session::sesion::SesionStore;
use crate::utils::errors::{mensaje_http_generico, ApiError, ApiResult};

/// Cliente REST compartido por servicios y controladores
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    sesion: Arc<SesionStore>,
}

impl ApiClient {
    pub fn nuevo(config: &EnvironmentConfig, sesion: Arc<SesionStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            sesion,
        }
    }

    pub fn sesion(&self) -> &Arc<SesionStore> {
        &self.sesion
    }

    fn url(&self, ruta: &str) -> String {
        format!("{}/{}", self.base_url, ruta.trim_start_matches('/'))
    }

    /// GET con respuesta JSON tipada
    pub async fn get<T: DeserializeOwned>(&self, ruta: &str) -> ApiResult<T> {
        let respuesta = self.ejecutar(self.http.get(self.url(ruta))).await?;
        Self::procesar(respuesta).await
    }

    /// POST con body JSON y respuesta JSON tipada
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        ruta: &str,
        body: &B,
    ) -> ApiResult<T> {
        let respuesta = self
            .ejecutar(self.http.post(self.url(ruta)).json(body))
            .await?;
        Self::procesar(respuesta).await
    }

    /// PUT con body JSON y respuesta JSON tipada
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        ruta: &str,
        body: &B,
    ) -> ApiResult<T> {
        let respuesta = self
            .ejecutar(self.http.put(self.url(ruta)).json(body))
            .await?;
        Self::procesar(respuesta).await
    }

    /// DELETE; el body de éxito se descarta
    pub async fn delete(&self, ruta: &str) -> ApiResult<()> {
        let respuesta = self.ejecutar(self.http.delete(self.url(ruta))).await?;
        Self::procesar_sin_cuerpo(respuesta).await
    }

    /// POST multipart (subida de imágenes). No se fija `Content-Type`
    /// explícito: reqwest arma el boundary del multipart.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        ruta: &str,
        form: Form,
    ) -> ApiResult<T> {
        let respuesta = self
            .ejecutar(self.http.post(self.url(ruta)).multipart(form))
            .await?;
        Self::procesar(respuesta).await
    }

    /// Adjunta el bearer si hay token y dispara el request. El 401 se
    /// intercepta acá, antes de cualquier manejo del caller: limpia la
    /// sesión y fuerza la navegación a login.
    async fn ejecutar(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let builder = match self.sesion.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let respuesta = builder.send().await?;
        debug!("respuesta {} recibida", respuesta.status());

        if respuesta.status() == StatusCode::UNAUTHORIZED {
            self.sesion.expirar();
            return Err(ApiError::SesionExpirada);
        }
        Ok(respuesta)
    }

    /// 2xx → JSON tipado; no-2xx → `message` del body verbatim si el body es
    /// JSON, mensaje genérico por status si no lo es.
    async fn procesar<T: DeserializeOwned>(respuesta: Response) -> ApiResult<T> {
        let estado = respuesta.status();
        let cuerpo = respuesta.text().await?;

        if estado.is_success() {
            return Ok(serde_json::from_str(&cuerpo)?);
        }
        Err(Self::error_http(estado, &cuerpo))
    }

    async fn procesar_sin_cuerpo(respuesta: Response) -> ApiResult<()> {
        let estado = respuesta.status();
        if estado.is_success() {
            return Ok(());
        }
        let cuerpo = respuesta.text().await?;
        Err(Self::error_http(estado, &cuerpo))
    }

    fn error_http(estado: StatusCode, cuerpo: &str) -> ApiError {
        let mensaje = serde_json::from_str::<serde_json::Value>(cuerpo)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or_else(|| mensaje_http_generico(estado.as_u16()));
        ApiError::Http {
            estado: estado.as_u16(),
            mensaje,
        }
    }
}
