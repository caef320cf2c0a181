//! Búsqueda global sobre las diez colecciones
//!
//! Trae las diez colecciones en paralelo (cada endpoint caído degrada esa
//! colección a vacía, nunca bloquea al resto) y filtra en memoria por
//! substring case-insensitive sobre los campos configurados de cada recurso.
//! Sin tokenización, sin ranking, sin paginación.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::warn;

use crate::client::ApiClient;
use crate::dto::busqueda_dto::ResultadosBusqueda;
use crate::models::recursos::Recurso;

/// Espera tras la última tecla antes de filtrar
pub const DEBOUNCE_MS: u64 = 300;

/// Filtrar una colección: quedan los registros donde algún campo de texto
/// configurado contiene la consulta en minúsculas. Consulta vacía o de puros
/// espacios devuelve vacío, no la colección completa.
pub fn filtrar<R: Recurso>(items: &[R], consulta: &str) -> Vec<R> {
    let consulta = consulta.trim().to_lowercase();
    if consulta.is_empty() {
        return Vec::new();
    }
    items
        .iter()
        .filter(|item| {
            item.texto_busqueda()
                .iter()
                .any(|campo| campo.to_lowercase().contains(&consulta))
        })
        .cloned()
        .collect()
}

/// Filtrar las diez colecciones ya traídas. Sincrónico, O(registros × campos).
pub fn filtrar_colecciones(
    colecciones: &ResultadosBusqueda,
    consulta: &str,
) -> ResultadosBusqueda {
    if consulta.trim().is_empty() {
        return ResultadosBusqueda::vacio();
    }
    ResultadosBusqueda {
        alojamientos: filtrar(&colecciones.alojamientos, consulta),
        paquetes: filtrar(&colecciones.paquetes, consulta),
        autos: filtrar(&colecciones.autos, consulta),
        pasajes: filtrar(&colecciones.pasajes, consulta),
        transfers: filtrar(&colecciones.transfers, consulta),
        trenes: filtrar(&colecciones.trenes, consulta),
        circuitos: filtrar(&colecciones.circuitos, consulta),
        excursiones: filtrar(&colecciones.excursiones, consulta),
        salidas_grupales: filtrar(&colecciones.salidas_grupales, consulta),
        cruceros: filtrar(&colecciones.cruceros, consulta),
    }
}

/// Servicio de búsqueda global
pub struct BusquedaService {
    client: ApiClient,
}

impl BusquedaService {
    pub fn nuevo(client: ApiClient) -> Self {
        Self { client }
    }

    /// Traer las diez colecciones en paralelo. Cada fallo se captura por
    /// endpoint y degrada esa colección a vacía.
    pub async fn cargar_colecciones(&self) -> ResultadosBusqueda {
        use crate::models::recursos::*;

        let (
            alojamientos,
            paquetes,
            autos,
            pasajes,
            transfers,
            trenes,
            circuitos,
            excursiones,
            salidas_grupales,
            cruceros,
        ) = futures::join!(
            self.coleccion_o_vacia::<Alojamiento>(),
            self.coleccion_o_vacia::<Paquete>(),
            self.coleccion_o_vacia::<Auto>(),
            self.coleccion_o_vacia::<Pasaje>(),
            self.coleccion_o_vacia::<Transfer>(),
            self.coleccion_o_vacia::<Tren>(),
            self.coleccion_o_vacia::<Circuito>(),
            self.coleccion_o_vacia::<Excursion>(),
            self.coleccion_o_vacia::<SalidaGrupal>(),
            self.coleccion_o_vacia::<Crucero>(),
        );

        ResultadosBusqueda {
            alojamientos,
            paquetes,
            autos,
            pasajes,
            transfers,
            trenes,
            circuitos,
            excursiones,
            salidas_grupales,
            cruceros,
        }
    }

    async fn coleccion_o_vacia<R: Recurso>(&self) -> Vec<R> {
        match self.client.get::<Vec<R>>(R::TIPO.endpoint()).await {
            Ok(items) => items,
            Err(e) => {
                warn!("búsqueda: {} degradado a vacío ({})", R::TIPO.endpoint(), e);
                Vec::new()
            }
        }
    }
}

/// Debounce por generaciones: cada tecla registra una generación nueva y
/// espera el retardo; solo la última sobrevive.
pub struct Debouncer {
    generacion: AtomicU64,
    retardo: Duration,
}

impl Debouncer {
    pub fn nuevo() -> Self {
        Self::con_retardo(Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn con_retardo(retardo: Duration) -> Self {
        Self {
            generacion: AtomicU64::new(0),
            retardo,
        }
    }

    /// Devuelve `true` si esta invocación sigue siendo la última tecla
    /// después del retardo; `false` si otra la pisó mientras esperaba.
    pub async fn esperar(&self) -> bool {
        let mia = self.generacion.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.retardo).await;
        self.generacion.load(Ordering::SeqCst) == mia
    }
}
