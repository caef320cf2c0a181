//! Controlador de la búsqueda global
//!
//! La pantalla trae las diez colecciones una vez al montarse y después
//! filtra en memoria por cada tecla, con debounce de 300 ms. El host lanza
//! cada tecla como tarea propia sobre `&self`: todas registran su generación,
//! pero solo la última sobrevive al retardo y filtra; las pisadas vuelven sin
//! tocar los resultados. Borrar la consulta deja todos los resultados vacíos,
//! no muestra el catálogo entero.

use std::sync::RwLock;

use crate::dto::busqueda_dto::ResultadosBusqueda;
use crate::services::busqueda_service::{filtrar_colecciones, BusquedaService, Debouncer};

pub struct BusquedaController {
    servicio: BusquedaService,
    debouncer: Debouncer,
    colecciones: RwLock<ResultadosBusqueda>,
    resultados: RwLock<ResultadosBusqueda>,
    consulta: RwLock<String>,
}

impl BusquedaController {
    pub fn nuevo(servicio: BusquedaService) -> Self {
        Self {
            servicio,
            debouncer: Debouncer::nuevo(),
            colecciones: RwLock::new(ResultadosBusqueda::vacio()),
            resultados: RwLock::new(ResultadosBusqueda::vacio()),
            consulta: RwLock::new(String::new()),
        }
    }

    /// Fetch paralelo inicial de las diez colecciones (al montar la pantalla)
    pub async fn inicializar(&self) {
        let colecciones = self.servicio.cargar_colecciones().await;
        *self.colecciones.write().expect("lock de búsqueda") = colecciones;
    }

    /// Una tecla en el input de búsqueda. Registra la consulta, espera el
    /// debounce y filtra solo si ninguna tecla posterior la pisó mientras
    /// dormía. Devuelve si esta tecla llegó a filtrar.
    pub async fn tecla(&self, consulta: &str) -> bool {
        *self.consulta.write().expect("lock de búsqueda") = consulta.to_string();
        if !self.debouncer.esperar().await {
            return false;
        }
        // filtra con la consulta vigente, no con la que traía esta tecla
        let consulta = self.consulta.read().expect("lock de búsqueda").clone();
        let filtrado = {
            let colecciones = self.colecciones.read().expect("lock de búsqueda");
            filtrar_colecciones(&colecciones, &consulta)
        };
        *self.resultados.write().expect("lock de búsqueda") = filtrado;
        true
    }

    pub fn consulta(&self) -> String {
        self.consulta.read().expect("lock de búsqueda").clone()
    }

    pub fn resultados(&self) -> ResultadosBusqueda {
        self.resultados.read().expect("lock de búsqueda").clone()
    }

    pub fn total(&self) -> usize {
        self.resultados.read().expect("lock de búsqueda").total()
    }
}
