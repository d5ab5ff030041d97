use actix_web::{web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

use super::AppState;
use crate::api_json::EvolutionRequest;
use crate::models::{EvolutionRow, SalaryInput, SalaryResult};
use crate::presentacion::{tabla_desglose, tabla_evolucion, tabla_proyeccion, FilaEvolucion, FilaProyeccion, FilaTabla};

#[derive(Serialize)]
pub struct CalculoResponse {
    #[serde(flatten)]
    pub resultado: SalaryResult,
    pub desglose: Vec<FilaTabla>,
    pub proyeccion_tabla: Vec<FilaProyeccion>,
    pub generado_en: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct EvolucionResponse {
    pub years: u32,
    pub evolucion: Vec<EvolutionRow>,
    pub evolucion_tabla: Vec<FilaEvolucion>,
    pub generado_en: DateTime<Utc>,
}

fn responder_calculo(state: &AppState, input: SalaryInput) -> HttpResponse {
    let input = state.recortar_input(input);
    info!(
        titulo = %input.highest_degree,
        dedicacion = %input.dedication_type,
        experiencia = input.experience_years,
        proyeccion = input.projection_years,
        "calculo de salario"
    );
    let resultado = state.calculadora.calculate_salary(&input);
    let resp = CalculoResponse {
        desglose: tabla_desglose(&resultado.salary_breakdown),
        proyeccion_tabla: tabla_proyeccion(&resultado.salary_projection),
        resultado,
        generado_en: Utc::now(),
    };
    HttpResponse::Ok().json(resp)
}

fn responder_evolucion(state: &AppState, req: EvolutionRequest) -> HttpResponse {
    let req = state.recortar_evolucion(req);
    info!(titulo = %req.input.highest_degree, years = req.years, "simulacion de evolucion");
    let evolucion = state.calculadora.simulate_faculty_evolution(&req.input, req.years);
    let resp = EvolucionResponse {
        years: req.years,
        evolucion_tabla: tabla_evolucion(&evolucion),
        evolucion,
        generado_en: Utc::now(),
    };
    HttpResponse::Ok().json(resp)
}

/// POST /salario/calcular
/// Acepta un JSON con la forma de `SalaryInput`; cualquier campo puede faltar.
pub async fn calcular_handler(state: web::Data<AppState>, body: web::Json<serde_json::Value>) -> impl Responder {
    let input = SalaryInput::from_value(&body.into_inner());
    responder_calculo(&state, input)
}

/// GET /salario/calcular?highest_degree=Maestría&experience_years=3
pub async fn calcular_get_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let input = SalaryInput::from_query(&query.into_inner());
    responder_calculo(&state, input)
}

/// POST /salario/evolucion
pub async fn evolucion_handler(state: web::Data<AppState>, body: web::Json<serde_json::Value>) -> impl Responder {
    let req = EvolutionRequest::from_value(&body.into_inner());
    responder_evolucion(&state, req)
}

/// GET /salario/evolucion?years=10&...
pub async fn evolucion_get_handler(state: web::Data<AppState>, query: web::Query<HashMap<String, String>>) -> impl Responder {
    let req = EvolutionRequest::from_query(&query.into_inner());
    responder_evolucion(&state, req)
}
