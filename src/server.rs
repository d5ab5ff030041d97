use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;
use tracing::{info, warn};

use crate::config::Config;
use crate::server_handlers::*;

/// Registra todas las rutas. Separado de `run_server` para poder montar la
/// app en pruebas con `actix_web::test::init_service`.
pub fn rutas(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/salario/calcular", web::post().to(calcular_handler))
        .route("/salario/calcular", web::get().to(calcular_get_handler))
        .route("/salario/evolucion", web::post().to(evolucion_handler))
        .route("/salario/evolucion", web::get().to(evolucion_get_handler))
        .route("/graficos/proyeccion.svg", web::get().to(grafico_proyeccion_handler))
        .route("/graficos/evolucion.svg", web::get().to(grafico_evolucion_handler))
        .route("/tablas", web::get().to(tablas_handler))
        .route("/ejemplo", web::get().to(ejemplo_handler))
        .route("/health", web::get().to(health_handler))
        .route("/help", web::get().to(help_handler));
}

/// Un cuerpo que no es JSON válido responde 400 con `{"error": ...}` en vez
/// del texto plano por defecto de actix.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let msg = format!("invalid JSON body: {}", err);
    warn!(error = %err, "cuerpo JSON rechazado");
    InternalError::from_response(err, HttpResponse::BadRequest().json(json!({"error": msg}))).into()
}

pub(crate) fn cors(origin: Option<&str>) -> Cors {
    match origin {
        Some(o) => Cors::default()
            .allowed_origin(o)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600),
        None => Cors::permissive(),
    }
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(config.max_horizonte));
    let origin = config.cors_origin.clone();
    info!(bind = %config.bind, max_horizonte = config.max_horizonte, "iniciando servidor");

    HttpServer::new(move || {
        App::new()
            .wrap(cors(origin.as_deref()))
            .app_data(state.clone())
            .configure(rutas)
    })
    .bind(config.bind.as_str())?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, Method};
    use actix_web::test;

    #[actix_web::test]
    async fn test_cors_preflight_origen_configurado() {
        let origen = "http://localhost:8501";
        let app = test::init_service(
            App::new()
                .wrap(cors(Some(origen)))
                .app_data(web::Data::new(AppState::new(50)))
                .configure(rutas),
        )
        .await;
        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/salario/calcular")
            .insert_header((header::ORIGIN, origen))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let permitido = resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok());
        assert_eq!(permitido, Some(origen));
    }

    #[actix_web::test]
    async fn test_cors_permisivo_refleja_origen() {
        let app = test::init_service(
            App::new()
                .wrap(cors(None))
                .app_data(web::Data::new(AppState::new(50)))
                .configure(rutas),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header((header::ORIGIN, "http://otro.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
