//! Acceso REST genérico por recurso
//!
//! Un único servicio parametrizado por el esquema del recurso reemplaza los
//! once wrappers casi idénticos (`GET/POST /{recurso}`,
//! `GET/PUT/DELETE /{recurso}/:id`).

use async_trait::async_trait;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::models::recursos::Recurso;
use crate::utils::errors::ApiResult;

/// Operaciones CRUD de una colección. Trait aparte del servicio concreto
/// para poder testear los controladores sin red.
#[async_trait]
pub trait CrudApi<R: Recurso>: Send + Sync {
    async fn listar(&self) -> ApiResult<Vec<R>>;
    async fn obtener(&self, id: Uuid) -> ApiResult<R>;
    async fn crear(&self, recurso: &R) -> ApiResult<R>;
    async fn actualizar(&self, recurso: &R) -> ApiResult<R>;
    async fn eliminar(&self, id: Uuid) -> ApiResult<()>;
}

/// Implementación REST sobre `ApiClient`
pub struct RecursoService<R: Recurso> {
    client: ApiClient,
    _recurso: PhantomData<R>,
}

impl<R: Recurso> RecursoService<R> {
    pub fn nuevo(client: ApiClient) -> Self {
        Self {
            client,
            _recurso: PhantomData,
        }
    }

    fn ruta_coleccion() -> String {
        R::TIPO.endpoint().to_string()
    }

    fn ruta_item(id: Uuid) -> String {
        format!("{}/{}", R::TIPO.endpoint(), id)
    }
}

#[async_trait]
impl<R: Recurso> CrudApi<R> for RecursoService<R> {
    async fn listar(&self) -> ApiResult<Vec<R>> {
        self.client.get(&Self::ruta_coleccion()).await
    }

    async fn obtener(&self, id: Uuid) -> ApiResult<R> {
        self.client.get(&Self::ruta_item(id)).await
    }

    async fn crear(&self, recurso: &R) -> ApiResult<R> {
        self.client.post(&Self::ruta_coleccion(), recurso).await
    }

    async fn actualizar(&self, recurso: &R) -> ApiResult<R> {
        self.client.put(&Self::ruta_item(recurso.id()), recurso).await
    }

    async fn eliminar(&self, id: Uuid) -> ApiResult<()> {
        self.client.delete(&Self::ruta_item(id)).await
    }
}
