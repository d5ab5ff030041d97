use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use tracing::warn;

use super::AppState;
use crate::api_json::EvolutionRequest;
use crate::graficos::{grafico_evolucion, grafico_proyeccion, GraficoError};
use crate::models::SalaryInput;

fn svg_o_error(res: Result<String, GraficoError>) -> HttpResponse {
    match res {
        Ok(svg) => HttpResponse::Ok().content_type("image/svg+xml; charset=utf-8").body(svg),
        Err(e) => {
            warn!(error = %e, "no se pudo generar el grafico");
            HttpResponse::InternalServerError().json(json!({"error": format!("chart error: {}", e)}))
        }
    }
}

/// GET /graficos/proyeccion.svg?... (mismos parámetros que /salario/calcular,
/// más `title` opcional)
pub async fn grafico_proyeccion_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let qm = query.into_inner();
    let input = state.recortar_input(SalaryInput::from_query(&qm));
    let resultado = state.calculadora.calculate_salary(&input);
    let titulo = qm.get("title").map(|s| s.trim()).filter(|s| !s.is_empty());
    svg_o_error(grafico_proyeccion(&resultado, titulo))
}

/// GET /graficos/evolucion.svg?...
pub async fn grafico_evolucion_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let req = state.recortar_evolucion(EvolutionRequest::from_query(&query.into_inner()));
    let filas = state.calculadora.simulate_faculty_evolution(&req.input, req.years);
    svg_o_error(grafico_evolucion(&filas))
}
