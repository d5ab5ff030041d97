use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use super::AppState;
use crate::calculadora::ejemplo_evolucion;
use crate::models::{Dedicacion, SalaryInput, Titulo, DEFAULT_EVOLUTION_YEARS};

/// GET /tablas
/// Tablas vigentes del Acuerdo 006 (solo lectura).
pub async fn tablas_handler(state: web::Data<AppState>) -> impl Responder {
    let t = state.calculadora.tablas();
    let tarifas: Vec<serde_json::Value> = Titulo::TODOS
        .iter()
        .map(|d| json!({"highest_degree": d, "hourly_rate": t.tarifa_hora(*d)}))
        .collect();
    let dedicaciones: Vec<serde_json::Value> = Dedicacion::TODAS
        .iter()
        .map(|d| json!({"dedication_type": d, "weekly_hours": t.weekly_hours.get(d).copied().flatten()}))
        .collect();

    HttpResponse::Ok().json(json!({
        "hourly_rates": tarifas,
        "dedication_types": dedicaciones,
        "experience_bonus": t.tramos(),
        "weeks_per_semester": t.weeks_per_semester,
        "weeks_per_month": t.weeks_per_month,
        "semesters_per_year": t.semesters_per_year,
        "inflation_rate": t.inflation_rate
    }))
}

/// GET /ejemplo
/// Serie de ejemplo de la página de inicio (2022-2031).
pub async fn ejemplo_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({"ejemplo": ejemplo_evolucion()}))
}

pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "ok", "ts": Utc::now().to_rfc3339()}))
}

pub async fn help_handler(state: web::Data<AppState>) -> impl Responder {
    let example = SalaryInput {
        highest_degree: Titulo::Maestria,
        dedication_type: Dedicacion::HoraCatedra,
        weekly_hours: Some(8),
        experience_years: 3,
        base_year: 2024,
        projection_years: 10,
    };

    let help = json!({
        "description": "Simulador de salarios para profesores ocasionales (Acuerdo 006 de 2018). POST /salario/calcular acepta un JSON (ver 'post_example'); todos los campos son opcionales y los valores no reconocidos toman su valor por defecto en lugar de producir un error.",
        "post_example": example,
        "get_example_query": "/salario/calcular?highest_degree=Maestr%C3%ADa&dedication_type=Hora%20C%C3%A1tedra&weekly_hours=8&experience_years=3&base_year=2024&projection_years=10",
        "evolucion_example": {"highest_degree": "Pregrado", "experience_years": 0, "base_year": 2024, "years": DEFAULT_EVOLUTION_YEARS},
        "graficos": ["/graficos/proyeccion.svg", "/graficos/evolucion.svg"],
        "degree_choices": Titulo::TODOS,
        "dedication_choices": Dedicacion::TODAS,
        "max_horizonte": state.max_horizonte,
        "note": "weekly_hours solo se usa con 'Hora Cátedra'. projection_years y years mayores a max_horizonte se recortan."
    });

    HttpResponse::Ok().json(help)
}
