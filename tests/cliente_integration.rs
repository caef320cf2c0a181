//! Tests de integración del cliente REST autenticado
//!
//! Levantan un stub del API con axum en un puerto efímero y apuntan el
//! `ApiClient` ahí. Cubren la inyección del bearer, la taxonomía de errores
//! y el logout forzado ante un 401.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use turismo_marketplace::session::almacen::{
    Almacen, AlmacenMemoria, CLAVE_TOKEN, CLAVE_USUARIO,
};
use turismo_marketplace::session::sesion::{
    EstadoSesion, NavegadorMemoria, SesionStore, RUTA_LOGIN,
};
use turismo_marketplace::utils::errors::ApiError;
use turismo_marketplace::{ApiClient, EnvironmentConfig};

async fn iniciar_stub(app: Router) -> SocketAddr {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("puerto efímero");
    let addr = listener.local_addr().expect("addr del stub");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub caído");
    });
    addr
}

struct Entorno {
    client: ApiClient,
    local: Arc<AlmacenMemoria>,
    navegador: Arc<NavegadorMemoria>,
    sesion: Arc<SesionStore>,
}

fn entorno_autenticado(addr: SocketAddr) -> Entorno {
    let local = Arc::new(AlmacenMemoria::nuevo());
    local.guardar(CLAVE_TOKEN, "tok-1");
    local.guardar(
        CLAVE_USUARIO,
        r#"{"id":"u-1","email":"agencia@viajes.com","role":"agencia"}"#,
    );
    let navegador = Arc::new(NavegadorMemoria::nuevo());
    let sesion = Arc::new(SesionStore::nuevo(
        local.clone(),
        Arc::new(AlmacenMemoria::nuevo()),
        navegador.clone(),
    ));
    sesion.cargar().expect("sesión sembrada válida");

    let config = EnvironmentConfig::nueva(format!("http://{}", addr));
    let client = ApiClient::nuevo(&config, sesion.clone());
    Entorno {
        client,
        local,
        navegador,
        sesion,
    }
}

#[tokio::test]
async fn test_inyecta_bearer_cuando_hay_token() {
    async fn eco(headers: HeaderMap) -> Json<serde_json::Value> {
        let auth = headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("");
        Json(json!({ "auth": auth }))
    }

    let addr = iniciar_stub(Router::new().route("/eco", get(eco))).await;
    let entorno = entorno_autenticado(addr);

    let cuerpo: serde_json::Value = entorno.client.get("eco").await.unwrap();
    assert_eq!(cuerpo["auth"], "Bearer tok-1");
}

#[tokio::test]
async fn test_401_fuerza_logout_y_redirige_a_login() {
    let app = Router::new().route("/paquetes", get(|| async { StatusCode::UNAUTHORIZED }));
    let addr = iniciar_stub(app).await;
    let entorno = entorno_autenticado(addr);

    let resultado = entorno.client.get::<serde_json::Value>("paquetes").await;

    assert!(matches!(resultado, Err(ApiError::SesionExpirada)));
    // credenciales fuera del storage, venga de la pantalla que venga
    assert_eq!(entorno.local.obtener(CLAVE_TOKEN), None);
    assert_eq!(entorno.local.obtener(CLAVE_USUARIO), None);
    assert_eq!(entorno.sesion.estado(), EstadoSesion::Expirada);
    assert_eq!(entorno.navegador.rutas(), vec![RUTA_LOGIN.to_string()]);
}

#[tokio::test]
async fn test_message_del_body_se_muestra_verbatim() {
    let app = Router::new().route(
        "/alojamientos",
        post(|| async {
            (
                StatusCode::CONFLICT,
                Json(json!({ "message": "El cupo ya fue tomado" })),
            )
        }),
    );
    let addr = iniciar_stub(app).await;
    let entorno = entorno_autenticado(addr);

    let resultado = entorno
        .client
        .post::<_, serde_json::Value>("alojamientos", &json!({}))
        .await;

    match resultado {
        Err(ApiError::Http { estado, mensaje }) => {
            assert_eq!(estado, 409);
            assert_eq!(mensaje, "El cupo ya fue tomado");
        }
        otro => panic!("se esperaba Http 409, vino {:?}", otro),
    }
}

#[tokio::test]
async fn test_body_no_json_cae_al_mensaje_generico() {
    let app = Router::new().route(
        "/alojamientos",
        get(|| async { (StatusCode::BAD_GATEWAY, "<html>boom</html>") }),
    );
    let addr = iniciar_stub(app).await;
    let entorno = entorno_autenticado(addr);

    let resultado = entorno.client.get::<serde_json::Value>("alojamientos").await;
    match resultado {
        Err(e @ ApiError::Http { .. }) => {
            assert_eq!(e.mensaje_usuario(), "Error del servidor (502)");
        }
        otro => panic!("se esperaba Http 502, vino {:?}", otro),
    }
}

#[tokio::test]
async fn test_fallo_de_red_pide_revisar_conexion() {
    // puerto 1: nada escucha ahí
    let local = Arc::new(AlmacenMemoria::nuevo());
    let sesion = Arc::new(SesionStore::nuevo(
        local,
        Arc::new(AlmacenMemoria::nuevo()),
        Arc::new(NavegadorMemoria::nuevo()),
    ));
    let client = ApiClient::nuevo(&EnvironmentConfig::nueva("http://127.0.0.1:1"), sesion);

    let resultado = client.get::<serde_json::Value>("paquetes").await;
    match resultado {
        Err(e @ ApiError::Red(_)) => {
            assert!(e.mensaje_usuario().contains("conexión"));
        }
        otro => panic!("se esperaba error de red, vino {:?}", otro),
    }
}

#[tokio::test]
async fn test_login_persiste_token_y_usuario() -> anyhow::Result<()> {
    use turismo_marketplace::dto::auth_dto::LoginRequest;
    use turismo_marketplace::services::auth_service::AuthService;

    let app = Router::new().route(
        "/auth/login",
        post(|| async {
            Json(json!({
                "token": "tok-nuevo",
                "usuario": { "id": "u-7", "email": "agencia@viajes.com", "role": "agencia" }
            }))
        }),
    );
    let addr = iniciar_stub(app).await;

    let local = Arc::new(AlmacenMemoria::nuevo());
    let sesion = Arc::new(SesionStore::nuevo(
        local.clone(),
        Arc::new(AlmacenMemoria::nuevo()),
        Arc::new(NavegadorMemoria::nuevo()),
    ));
    let client = ApiClient::nuevo(
        &EnvironmentConfig::nueva(format!("http://{}", addr)),
        sesion.clone(),
    );

    let servicio = AuthService::nuevo(client);
    let usuario = servicio
        .login(&LoginRequest {
            email: "agencia@viajes.com".to_string(),
            password: "secreto1".to_string(),
        })
        .await?;

    assert_eq!(usuario.rol, "agencia");
    assert_eq!(local.obtener(CLAVE_TOKEN), Some("tok-nuevo".to_string()));
    assert!(local.obtener(CLAVE_USUARIO).is_some());
    assert!(matches!(sesion.estado(), EstadoSesion::Autenticada { .. }));
    Ok(())
}

#[tokio::test]
async fn test_verificar_admin_cachea_en_storage_de_sesion() -> anyhow::Result<()> {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use turismo_marketplace::services::auth_service::AuthService;

    static LLAMADAS: AtomicUsize = AtomicUsize::new(0);

    let app = Router::new().route(
        "/auth/verify-admin",
        get(|| async {
            LLAMADAS.fetch_add(1, Ordering::SeqCst);
            Json(json!({ "isAdmin": true }))
        }),
    );
    let addr = iniciar_stub(app).await;
    let entorno = entorno_autenticado(addr);

    let servicio = AuthService::nuevo(entorno.client.clone());
    assert!(servicio.verificar_admin().await?);
    // la segunda consulta sale del flag adminVerified, sin red
    assert!(servicio.verificar_admin().await?);
    assert_eq!(LLAMADAS.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_multipart_lleva_boundary_de_reqwest() -> anyhow::Result<()> {
    async fn subir(headers: HeaderMap) -> Json<serde_json::Value> {
        let content_type = headers
            .get("content-type")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("")
            .to_string();
        Json(json!({ "contentType": content_type }))
    }

    let app = Router::new()
        .route("/alojamientos/imagenes", post(subir))
        .layer(DefaultBodyLimit::max(1024 * 1024));
    let addr = iniciar_stub(app).await;
    let entorno = entorno_autenticado(addr);

    let form = reqwest::multipart::Form::new().text("nombre", "fachada.jpg");
    let cuerpo: serde_json::Value = entorno
        .client
        .post_multipart("alojamientos/imagenes", form)
        .await?;

    // el Content-Type lo arma reqwest con su boundary, el cliente no lo pisa
    let content_type = cuerpo["contentType"].as_str().unwrap_or("");
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    Ok(())
}
