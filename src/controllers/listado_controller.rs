//! Controlador genérico de pantalla CRUD
//!
//! Una sola máquina de estados para los once listados del panel:
//! `Cargando → Exito(lista) | Error`. Toda mutación valida en sincrónico
//! antes del submit, y al resolver recarga la lista completa con un fetch
//! fresco (no hay parcheo local ni protocolo de consistencia).

use std::sync::Arc;
use uuid::Uuid;

use crate::models::recursos::{Recurso, Vendedor};
use crate::services::recurso_service::CrudApi;
use crate::session::sesion::SesionStore;
use crate::utils::errors::{ApiError, ApiResult};

/// Estado del listado
#[derive(Debug, Clone, PartialEq)]
pub enum EstadoListado<T> {
    Cargando,
    Exito(Vec<T>),
    Error(String),
}

/// Modal activo de la pantalla
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Ninguno,
    /// Alta (`None`) o edición (`Some(id)`)
    Formulario(Option<Uuid>),
    /// Paso de confirmación previo al DELETE
    ConfirmarEliminar(Uuid),
    /// Fallo de mutación; sin botón de reintento
    Alerta(String),
}

pub struct ListadoController<R: Recurso> {
    api: Arc<dyn CrudApi<R>>,
    sesion: Arc<SesionStore>,
    estado: EstadoListado<R>,
    modal: Modal,
}

impl<R: Recurso> ListadoController<R> {
    pub fn nuevo(api: Arc<dyn CrudApi<R>>, sesion: Arc<SesionStore>) -> Self {
        Self {
            api,
            sesion,
            estado: EstadoListado::Cargando,
            modal: Modal::Ninguno,
        }
    }

    pub fn estado(&self) -> &EstadoListado<R> {
        &self.estado
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn items(&self) -> &[R] {
        match &self.estado {
            EstadoListado::Exito(items) => items,
            _ => &[],
        }
    }

    /// Atribución de vendedor, visible solo para viewers admin
    pub fn vendedor_visible<'a>(&self, recurso: &'a R) -> Option<&'a Vendedor> {
        if self.sesion.es_admin() {
            recurso.vendedor()
        } else {
            None
        }
    }

    /// Fetch completo de la lista; también es el "reload" tras mutaciones
    pub async fn cargar(&mut self) {
        self.estado = EstadoListado::Cargando;
        match self.api.listar().await {
            Ok(items) => self.estado = EstadoListado::Exito(items),
            Err(e) => self.estado = EstadoListado::Error(e.mensaje_usuario()),
        }
    }

    pub fn abrir_alta(&mut self) {
        self.modal = Modal::Formulario(None);
    }

    pub fn abrir_edicion(&mut self, id: Uuid) {
        self.modal = Modal::Formulario(Some(id));
    }

    pub fn cerrar_modal(&mut self) {
        self.modal = Modal::Ninguno;
    }

    /// Fallo de mutación: abre la alerta, salvo que la sesión haya caído.
    /// En ese caso el cliente ya limpió el storage y redirigió a login; la
    /// pantalla se desmonta y ningún modal tiene sentido.
    fn fallo_mutacion(&mut self, e: &ApiError) {
        if e.es_de_sesion() {
            self.modal = Modal::Ninguno;
        } else {
            self.modal = Modal::Alerta(e.mensaje_usuario());
        }
    }

    /// Alta: valida, envía y recarga. El error de validación vuelve al form
    /// como texto inline (el modal queda abierto); el fallo del API abre la
    /// alerta genérica.
    pub async fn crear(&mut self, recurso: R) -> ApiResult<()> {
        recurso.validar().map_err(ApiError::Validacion)?;
        match self.api.crear(&recurso).await {
            Ok(_) => {
                self.modal = Modal::Ninguno;
                self.cargar().await;
                Ok(())
            }
            Err(e) => {
                self.fallo_mutacion(&e);
                Err(e)
            }
        }
    }

    /// Edición: mismo ciclo que el alta
    pub async fn actualizar(&mut self, recurso: R) -> ApiResult<()> {
        recurso.validar().map_err(ApiError::Validacion)?;
        match self.api.actualizar(&recurso).await {
            Ok(_) => {
                self.modal = Modal::Ninguno;
                self.cargar().await;
                Ok(())
            }
            Err(e) => {
                self.fallo_mutacion(&e);
                Err(e)
            }
        }
    }

    /// Abre el paso de confirmación; el DELETE recién se dispara en
    /// `confirmar_eliminar`
    pub fn solicitar_eliminar(&mut self, id: Uuid) {
        self.modal = Modal::ConfirmarEliminar(id);
    }

    /// Ejecuta el DELETE confirmado. Éxito recarga en silencio; fallo abre
    /// la alerta genérica.
    pub async fn confirmar_eliminar(&mut self) -> ApiResult<()> {
        let id = match self.modal {
            Modal::ConfirmarEliminar(id) => id,
            _ => return Ok(()),
        };
        match self.api.eliminar(id).await {
            Ok(()) => {
                self.modal = Modal::Ninguno;
                self.cargar().await;
                Ok(())
            }
            Err(e) => {
                self.fallo_mutacion(&e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recursos::Alojamiento;
    use crate::session::almacen::{AlmacenMemoria, CLAVE_TOKEN, CLAVE_USUARIO};
    use crate::session::sesion::NavegadorNulo;
    use crate::session::Almacen;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// CrudApi en memoria con fallo configurable
    struct ApiMemoria {
        items: Mutex<Vec<Alojamiento>>,
        fallar: Mutex<bool>,
        sesion_caida: Mutex<bool>,
    }

    impl ApiMemoria {
        fn nueva(items: Vec<Alojamiento>) -> Arc<Self> {
            Arc::new(Self {
                items: Mutex::new(items),
                fallar: Mutex::new(false),
                sesion_caida: Mutex::new(false),
            })
        }

        fn fallar(&self) {
            *self.fallar.lock().unwrap() = true;
        }

        fn caer_sesion(&self) {
            *self.sesion_caida.lock().unwrap() = true;
        }

        fn chequear(&self) -> ApiResult<()> {
            if *self.sesion_caida.lock().unwrap() {
                return Err(ApiError::SesionExpirada);
            }
            if *self.fallar.lock().unwrap() {
                Err(ApiError::Http {
                    estado: 500,
                    mensaje: "error del servidor".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl CrudApi<Alojamiento> for ApiMemoria {
        async fn listar(&self) -> ApiResult<Vec<Alojamiento>> {
            self.chequear()?;
            Ok(self.items.lock().unwrap().clone())
        }

        async fn obtener(&self, id: Uuid) -> ApiResult<Alojamiento> {
            self.chequear()?;
            self.items
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == id)
                .cloned()
                .ok_or(ApiError::Http {
                    estado: 404,
                    mensaje: "no existe".to_string(),
                })
        }

        async fn crear(&self, recurso: &Alojamiento) -> ApiResult<Alojamiento> {
            self.chequear()?;
            self.items.lock().unwrap().push(recurso.clone());
            Ok(recurso.clone())
        }

        async fn actualizar(&self, recurso: &Alojamiento) -> ApiResult<Alojamiento> {
            self.chequear()?;
            let mut items = self.items.lock().unwrap();
            if let Some(existente) = items.iter_mut().find(|a| a.id == recurso.id) {
                *existente = recurso.clone();
            }
            Ok(recurso.clone())
        }

        async fn eliminar(&self, id: Uuid) -> ApiResult<()> {
            self.chequear()?;
            self.items.lock().unwrap().retain(|a| a.id != id);
            Ok(())
        }
    }

    fn alojamiento(nombre: &str) -> Alojamiento {
        Alojamiento {
            id: Uuid::new_v4(),
            nombre: nombre.to_string(),
            ubicacion: "Bariloche".to_string(),
            descripcion: None,
            precio: 20000.0,
            cupo_disponible: 3,
            imagenes: vec![],
            vendedor: None,
        }
    }

    fn sesion_con_rol(rol: &str) -> Arc<SesionStore> {
        let local = Arc::new(AlmacenMemoria::nuevo());
        local.guardar(CLAVE_TOKEN, "tok-1");
        local.guardar(
            CLAVE_USUARIO,
            &format!(r#"{{"id":"u-1","email":"a@b.com","role":"{}"}}"#, rol),
        );
        let store = Arc::new(SesionStore::nuevo(
            local,
            Arc::new(AlmacenMemoria::nuevo()),
            Arc::new(NavegadorNulo),
        ));
        store.cargar().unwrap();
        store
    }

    #[tokio::test]
    async fn test_cargar_exito() {
        let api = ApiMemoria::nueva(vec![alojamiento("Hotel Centro")]);
        let mut controller = ListadoController::nuevo(api, sesion_con_rol("agencia"));
        controller.cargar().await;
        assert_eq!(controller.items().len(), 1);
    }

    #[tokio::test]
    async fn test_cargar_error() {
        let api = ApiMemoria::nueva(vec![]);
        api.fallar();
        let mut controller = ListadoController::nuevo(api, sesion_con_rol("agencia"));
        controller.cargar().await;
        assert!(matches!(controller.estado(), EstadoListado::Error(_)));
    }

    #[tokio::test]
    async fn test_crear_recarga_y_cierra_modal() {
        let api = ApiMemoria::nueva(vec![]);
        let mut controller = ListadoController::nuevo(api, sesion_con_rol("agencia"));
        controller.cargar().await;
        controller.abrir_alta();

        controller.crear(alojamiento("Hotel Nuevo")).await.unwrap();

        assert_eq!(*controller.modal(), Modal::Ninguno);
        assert_eq!(controller.items().len(), 1);
    }

    #[tokio::test]
    async fn test_crear_invalido_no_llega_al_api() {
        let api = ApiMemoria::nueva(vec![]);
        let mut controller = ListadoController::nuevo(api.clone(), sesion_con_rol("agencia"));
        controller.cargar().await;
        controller.abrir_alta();

        let mut invalido = alojamiento("Ho");
        invalido.precio = 0.0;
        let resultado = controller.crear(invalido).await;

        assert!(matches!(resultado, Err(ApiError::Validacion(_))));
        // el form sigue abierto con el error inline, nada viajó al API
        assert_eq!(*controller.modal(), Modal::Formulario(None));
        assert!(api.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fallo_de_api_abre_alerta() {
        let api = ApiMemoria::nueva(vec![]);
        let mut controller = ListadoController::nuevo(api.clone(), sesion_con_rol("agencia"));
        controller.cargar().await;
        api.fallar();

        let resultado = controller.crear(alojamiento("Hotel Nuevo")).await;
        assert!(resultado.is_err());
        assert!(matches!(controller.modal(), Modal::Alerta(_)));
    }

    #[tokio::test]
    async fn test_sesion_expirada_no_abre_alerta() {
        let api = ApiMemoria::nueva(vec![]);
        let mut controller = ListadoController::nuevo(api.clone(), sesion_con_rol("agencia"));
        controller.cargar().await;
        controller.abrir_alta();
        api.caer_sesion();

        let resultado = controller.crear(alojamiento("Hotel Nuevo")).await;

        // la pantalla se desmonta rumbo a login: sin alerta encima
        assert!(matches!(resultado, Err(ApiError::SesionExpirada)));
        assert_eq!(*controller.modal(), Modal::Ninguno);
    }

    #[tokio::test]
    async fn test_eliminar_requiere_confirmacion() {
        let item = alojamiento("Hotel Centro");
        let id = item.id;
        let api = ApiMemoria::nueva(vec![item]);
        let mut controller = ListadoController::nuevo(api.clone(), sesion_con_rol("agencia"));
        controller.cargar().await;

        controller.solicitar_eliminar(id);
        // todavía no se disparó el DELETE
        assert_eq!(api.items.lock().unwrap().len(), 1);

        controller.confirmar_eliminar().await.unwrap();
        assert_eq!(*controller.modal(), Modal::Ninguno);
        assert!(controller.items().is_empty());
    }

    #[tokio::test]
    async fn test_actualizar_refleja_cambio_tras_recarga() {
        let mut item = alojamiento("Hotel Centro");
        let api = ApiMemoria::nueva(vec![item.clone()]);
        let mut controller = ListadoController::nuevo(api, sesion_con_rol("agencia"));
        controller.cargar().await;

        item.nombre = "Hotel Centro Renovado".to_string();
        controller.actualizar(item).await.unwrap();

        assert_eq!(controller.items()[0].nombre, "Hotel Centro Renovado");
    }

    #[tokio::test]
    async fn test_vendedor_solo_visible_para_admin() {
        let mut item = alojamiento("Hotel Centro");
        item.vendedor = Some(Vendedor {
            id: Uuid::new_v4(),
            nombre: "Mayorista Andes".to_string(),
            email: None,
        });
        let api = ApiMemoria::nueva(vec![item.clone()]);

        let controller_admin =
            ListadoController::nuevo(api.clone(), sesion_con_rol("admin"));
        assert!(controller_admin.vendedor_visible(&item).is_some());

        let controller_agencia = ListadoController::nuevo(api, sesion_con_rol("agencia"));
        assert!(controller_agencia.vendedor_visible(&item).is_none());
    }
}
