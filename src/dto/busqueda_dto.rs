//! DTOs de la búsqueda global

use serde::Serialize;

use crate::models::recursos::{
    Alojamiento, Auto, Circuito, Crucero, Excursion, Paquete, Pasaje, SalidaGrupal, TipoRecurso,
    Transfer, Tren,
};

/// Resultado de la búsqueda global: el subconjunto filtrado de cada una de
/// las diez colecciones participantes más el total. Un set vacío puede
/// significar "sin coincidencias" o "ese endpoint falló y degradó a vacío".
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultadosBusqueda {
    pub alojamientos: Vec<Alojamiento>,
    pub paquetes: Vec<Paquete>,
    pub autos: Vec<Auto>,
    pub pasajes: Vec<Pasaje>,
    pub transfers: Vec<Transfer>,
    pub trenes: Vec<Tren>,
    pub circuitos: Vec<Circuito>,
    pub excursiones: Vec<Excursion>,
    pub salidas_grupales: Vec<SalidaGrupal>,
    pub cruceros: Vec<Crucero>,
}

impl ResultadosBusqueda {
    /// Resultado con todas las listas vacías (consulta vacía o borrada)
    pub fn vacio() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.conteos().iter().map(|(_, n)| n).sum()
    }

    pub fn esta_vacio(&self) -> bool {
        self.total() == 0
    }

    /// Conteo por colección, en el orden en que se renderizan las secciones
    pub fn conteos(&self) -> Vec<(TipoRecurso, usize)> {
        vec![
            (TipoRecurso::Alojamientos, self.alojamientos.len()),
            (TipoRecurso::Paquetes, self.paquetes.len()),
            (TipoRecurso::Autos, self.autos.len()),
            (TipoRecurso::Pasajes, self.pasajes.len()),
            (TipoRecurso::Transfers, self.transfers.len()),
            (TipoRecurso::Trenes, self.trenes.len()),
            (TipoRecurso::Circuitos, self.circuitos.len()),
            (TipoRecurso::Excursiones, self.excursiones.len()),
            (TipoRecurso::SalidasGrupales, self.salidas_grupales.len()),
            (TipoRecurso::Cruceros, self.cruceros.len()),
        ]
    }
}
