//! Tipos de publicación del catálogo
//!
//! Cada recurso es un registro plano: identificador, campos descriptivos,
//! precio, un contador de disponibilidad, lista de imágenes y el vendedor
//! propietario (visible solo para viewers con rol admin).
//!
//! Esquema canónico: el contador de disponibilidad es `cupoDisponible` en
//! todos los recursos salvo pasajes y trenes (`asientosDisponibles`) y autos
//! (`disponible`). Las grafías viejas (`cuposDisponibles`, `año`) se aceptan
//! como alias de entrada pero nunca se emiten.

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidationErrors;

use crate::utils::validation::{
    agregar_error, validate_min_length, validate_non_negative, validate_not_empty,
    validate_positive,
};

/// Vendedor/agencia propietaria de una publicación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendedor {
    pub id: Uuid,
    pub nombre: String,
    pub email: Option<String>,
}

/// Nombres de las once colecciones del catálogo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TipoRecurso {
    Alojamientos,
    Paquetes,
    Autos,
    Pasajes,
    Transfers,
    Trenes,
    Circuitos,
    Excursiones,
    SalidasGrupales,
    Cruceros,
    Seguros,
}

impl TipoRecurso {
    /// Segmento de URL de la colección (`GET /{recurso}`)
    pub fn endpoint(&self) -> &'static str {
        match self {
            TipoRecurso::Alojamientos => "alojamientos",
            TipoRecurso::Paquetes => "paquetes",
            TipoRecurso::Autos => "autos",
            TipoRecurso::Pasajes => "pasajes",
            TipoRecurso::Transfers => "transfers",
            TipoRecurso::Trenes => "trenes",
            TipoRecurso::Circuitos => "circuitos",
            TipoRecurso::Excursiones => "excursiones",
            TipoRecurso::SalidasGrupales => "salidas-grupales",
            TipoRecurso::Cruceros => "cruceros",
            TipoRecurso::Seguros => "seguros",
        }
    }
}

/// Esquema de recurso: endpoint, campos buscables y reglas de validación.
///
/// Este trait es lo que permite tener UNA pantalla CRUD y UN servicio REST
/// genéricos en lugar de once implementaciones casi idénticas.
pub trait Recurso: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const TIPO: TipoRecurso;

    fn id(&self) -> Uuid;

    /// Vendedor propietario; el controlador lo expone solo a viewers admin
    fn vendedor(&self) -> Option<&Vendedor>;

    /// Campos de texto sobre los que corre la búsqueda global (2 a 5)
    fn texto_busqueda(&self) -> Vec<&str>;

    /// Reglas sincrónicas previas al submit del formulario
    fn validar(&self) -> Result<(), ValidationErrors>;
}

/// Reglas comunes a toda publicación: nombre de al menos 3 caracteres, el
/// campo de lugar/cobertura presente, precio estrictamente positivo y
/// disponibilidad no negativa.
fn validar_publicacion(
    nombre: &str,
    lugar_campo: &'static str,
    lugar: &str,
    precio: f64,
    cupo: i32,
) -> Result<(), ValidationErrors> {
    let mut errores = ValidationErrors::new();
    agregar_error(&mut errores, "nombre", validate_min_length(nombre, 3));
    agregar_error(&mut errores, lugar_campo, validate_not_empty(lugar));
    agregar_error(&mut errores, "precio", validate_positive(precio));
    agregar_error(&mut errores, "cupo", validate_non_negative(cupo));
    if errores.is_empty() {
        Ok(())
    } else {
        Err(errores)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alojamiento {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub nombre: String,
    pub ubicacion: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(alias = "cuposDisponibles")]
    pub cupo_disponible: i32,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub vendedor: Option<Vendedor>,
}

impl Recurso for Alojamiento {
    const TIPO: TipoRecurso = TipoRecurso::Alojamientos;

    fn id(&self) -> Uuid {
        self.id
    }

    fn vendedor(&self) -> Option<&Vendedor> {
        self.vendedor.as_ref()
    }

    fn texto_busqueda(&self) -> Vec<&str> {
        let mut campos = vec![self.nombre.as_str(), self.ubicacion.as_str()];
        if let Some(d) = self.descripcion.as_deref() {
            campos.push(d);
        }
        campos
    }

    fn validar(&self) -> Result<(), ValidationErrors> {
        validar_publicacion(
            &self.nombre,
            "ubicacion",
            &self.ubicacion,
            self.precio,
            self.cupo_disponible,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paquete {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub nombre: String,
    pub destino: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(default)]
    pub duracion_dias: Option<u32>,
    #[serde(alias = "cuposDisponibles")]
    pub cupo_disponible: i32,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub vendedor: Option<Vendedor>,
}

impl Recurso for Paquete {
    const TIPO: TipoRecurso = TipoRecurso::Paquetes;

    fn id(&self) -> Uuid {
        self.id
    }

    fn vendedor(&self) -> Option<&Vendedor> {
        self.vendedor.as_ref()
    }

    fn texto_busqueda(&self) -> Vec<&str> {
        let mut campos = vec![self.nombre.as_str(), self.destino.as_str()];
        if let Some(d) = self.descripcion.as_deref() {
            campos.push(d);
        }
        campos
    }

    fn validar(&self) -> Result<(), ValidationErrors> {
        validar_publicacion(
            &self.nombre,
            "destino",
            &self.destino,
            self.precio,
            self.cupo_disponible,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auto {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub marca: String,
    pub modelo: String,
    #[serde(default, alias = "año")]
    pub anio: Option<u16>,
    pub ubicacion: String,
    pub precio: f64,
    pub disponible: i32,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub vendedor: Option<Vendedor>,
}

impl Recurso for Auto {
    const TIPO: TipoRecurso = TipoRecurso::Autos;

    fn id(&self) -> Uuid {
        self.id
    }

    fn vendedor(&self) -> Option<&Vendedor> {
        self.vendedor.as_ref()
    }

    fn texto_busqueda(&self) -> Vec<&str> {
        vec![
            self.marca.as_str(),
            self.modelo.as_str(),
            self.ubicacion.as_str(),
        ]
    }

    fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errores = ValidationErrors::new();
        agregar_error(&mut errores, "marca", validate_min_length(&self.marca, 2));
        agregar_error(&mut errores, "modelo", validate_min_length(&self.modelo, 1));
        agregar_error(&mut errores, "precio", validate_positive(self.precio));
        agregar_error(&mut errores, "disponible", validate_non_negative(self.disponible));
        if errores.is_empty() {
            Ok(())
        } else {
            Err(errores)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pasaje {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub origen: String,
    pub destino: String,
    pub empresa: String,
    #[serde(default)]
    pub fecha_salida: Option<NaiveDate>,
    pub precio: f64,
    pub asientos_disponibles: i32,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub vendedor: Option<Vendedor>,
}

impl Recurso for Pasaje {
    const TIPO: TipoRecurso = TipoRecurso::Pasajes;

    fn id(&self) -> Uuid {
        self.id
    }

    fn vendedor(&self) -> Option<&Vendedor> {
        self.vendedor.as_ref()
    }

    fn texto_busqueda(&self) -> Vec<&str> {
        vec![
            self.origen.as_str(),
            self.destino.as_str(),
            self.empresa.as_str(),
        ]
    }

    fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errores = ValidationErrors::new();
        agregar_error(&mut errores, "origen", validate_min_length(&self.origen, 3));
        agregar_error(&mut errores, "destino", validate_min_length(&self.destino, 3));
        agregar_error(&mut errores, "precio", validate_positive(self.precio));
        agregar_error(
            &mut errores,
            "asientosDisponibles",
            validate_non_negative(self.asientos_disponibles),
        );
        if errores.is_empty() {
            Ok(())
        } else {
            Err(errores)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub origen: String,
    pub destino: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(alias = "cuposDisponibles")]
    pub cupo_disponible: i32,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub vendedor: Option<Vendedor>,
}

impl Recurso for Transfer {
    const TIPO: TipoRecurso = TipoRecurso::Transfers;

    fn id(&self) -> Uuid {
        self.id
    }

    fn vendedor(&self) -> Option<&Vendedor> {
        self.vendedor.as_ref()
    }

    fn texto_busqueda(&self) -> Vec<&str> {
        vec![self.origen.as_str(), self.destino.as_str()]
    }

    fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errores = ValidationErrors::new();
        agregar_error(&mut errores, "origen", validate_min_length(&self.origen, 3));
        agregar_error(&mut errores, "destino", validate_min_length(&self.destino, 3));
        agregar_error(&mut errores, "precio", validate_positive(self.precio));
        agregar_error(&mut errores, "cupo", validate_non_negative(self.cupo_disponible));
        if errores.is_empty() {
            Ok(())
        } else {
            Err(errores)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tren {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub origen: String,
    pub destino: String,
    pub empresa: String,
    pub precio: f64,
    pub asientos_disponibles: i32,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub vendedor: Option<Vendedor>,
}

impl Recurso for Tren {
    const TIPO: TipoRecurso = TipoRecurso::Trenes;

    fn id(&self) -> Uuid {
        self.id
    }

    fn vendedor(&self) -> Option<&Vendedor> {
        self.vendedor.as_ref()
    }

    fn texto_busqueda(&self) -> Vec<&str> {
        vec![
            self.origen.as_str(),
            self.destino.as_str(),
            self.empresa.as_str(),
        ]
    }

    fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errores = ValidationErrors::new();
        agregar_error(&mut errores, "origen", validate_min_length(&self.origen, 3));
        agregar_error(&mut errores, "destino", validate_min_length(&self.destino, 3));
        agregar_error(&mut errores, "precio", validate_positive(self.precio));
        agregar_error(
            &mut errores,
            "asientosDisponibles",
            validate_non_negative(self.asientos_disponibles),
        );
        if errores.is_empty() {
            Ok(())
        } else {
            Err(errores)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuito {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub nombre: String,
    /// Destinos del recorrido como texto libre ("Madrid - París - Roma")
    pub destinos: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(default)]
    pub duracion_dias: Option<u32>,
    #[serde(alias = "cuposDisponibles")]
    pub cupo_disponible: i32,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub vendedor: Option<Vendedor>,
}

impl Recurso for Circuito {
    const TIPO: TipoRecurso = TipoRecurso::Circuitos;

    fn id(&self) -> Uuid {
        self.id
    }

    fn vendedor(&self) -> Option<&Vendedor> {
        self.vendedor.as_ref()
    }

    fn texto_busqueda(&self) -> Vec<&str> {
        let mut campos = vec![self.nombre.as_str(), self.destinos.as_str()];
        if let Some(d) = self.descripcion.as_deref() {
            campos.push(d);
        }
        campos
    }

    fn validar(&self) -> Result<(), ValidationErrors> {
        validar_publicacion(
            &self.nombre,
            "destinos",
            &self.destinos,
            self.precio,
            self.cupo_disponible,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Excursion {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub nombre: String,
    pub ubicacion: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(alias = "cuposDisponibles")]
    pub cupo_disponible: i32,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub vendedor: Option<Vendedor>,
}

impl Recurso for Excursion {
    const TIPO: TipoRecurso = TipoRecurso::Excursiones;

    fn id(&self) -> Uuid {
        self.id
    }

    fn vendedor(&self) -> Option<&Vendedor> {
        self.vendedor.as_ref()
    }

    fn texto_busqueda(&self) -> Vec<&str> {
        let mut campos = vec![self.nombre.as_str(), self.ubicacion.as_str()];
        if let Some(d) = self.descripcion.as_deref() {
            campos.push(d);
        }
        campos
    }

    fn validar(&self) -> Result<(), ValidationErrors> {
        validar_publicacion(
            &self.nombre,
            "ubicacion",
            &self.ubicacion,
            self.precio,
            self.cupo_disponible,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalidaGrupal {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub nombre: String,
    pub destino: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub fecha_salida: Option<NaiveDate>,
    pub precio: f64,
    #[serde(alias = "cuposDisponibles")]
    pub cupo_disponible: i32,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub vendedor: Option<Vendedor>,
}

impl Recurso for SalidaGrupal {
    const TIPO: TipoRecurso = TipoRecurso::SalidasGrupales;

    fn id(&self) -> Uuid {
        self.id
    }

    fn vendedor(&self) -> Option<&Vendedor> {
        self.vendedor.as_ref()
    }

    fn texto_busqueda(&self) -> Vec<&str> {
        let mut campos = vec![self.nombre.as_str(), self.destino.as_str()];
        if let Some(d) = self.descripcion.as_deref() {
            campos.push(d);
        }
        campos
    }

    fn validar(&self) -> Result<(), ValidationErrors> {
        validar_publicacion(
            &self.nombre,
            "destino",
            &self.destino,
            self.precio,
            self.cupo_disponible,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crucero {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub nombre: String,
    pub naviera: String,
    /// Puertos del itinerario como texto libre
    pub recorrido: String,
    pub precio: f64,
    #[serde(alias = "cuposDisponibles")]
    pub cupo_disponible: i32,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub vendedor: Option<Vendedor>,
}

impl Recurso for Crucero {
    const TIPO: TipoRecurso = TipoRecurso::Cruceros;

    fn id(&self) -> Uuid {
        self.id
    }

    fn vendedor(&self) -> Option<&Vendedor> {
        self.vendedor.as_ref()
    }

    fn texto_busqueda(&self) -> Vec<&str> {
        vec![
            self.nombre.as_str(),
            self.naviera.as_str(),
            self.recorrido.as_str(),
        ]
    }

    fn validar(&self) -> Result<(), ValidationErrors> {
        validar_publicacion(
            &self.nombre,
            "recorrido",
            &self.recorrido,
            self.precio,
            self.cupo_disponible,
        )
    }
}

/// Seguro de viaje. Tiene CRUD completo pero no participa de la búsqueda
/// global: no es un recurso con destino.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seguro {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub nombre: String,
    pub cobertura: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(alias = "cuposDisponibles")]
    pub cupo_disponible: i32,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub vendedor: Option<Vendedor>,
}

impl Recurso for Seguro {
    const TIPO: TipoRecurso = TipoRecurso::Seguros;

    fn id(&self) -> Uuid {
        self.id
    }

    fn vendedor(&self) -> Option<&Vendedor> {
        self.vendedor.as_ref()
    }

    fn texto_busqueda(&self) -> Vec<&str> {
        vec![self.nombre.as_str(), self.cobertura.as_str()]
    }

    fn validar(&self) -> Result<(), ValidationErrors> {
        validar_publicacion(
            &self.nombre,
            "cobertura",
            &self.cobertura,
            self.precio,
            self.cupo_disponible,
        )
    }
}
