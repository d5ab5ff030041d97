use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::models::{DEFAULT_BASE_YEAR, DEFAULT_EVOLUTION_YEARS, DEFAULT_PROJECTION_YEARS, Dedicacion, SalaryInput, Titulo};

/// Parámetros de entrada para el cálculo de salario
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "highest_degree": "Maestría",
///   "dedication_type": "Hora Cátedra",
///   "weekly_hours": 8,
///   "experience_years": 3,
///   "base_year": 2024,
///   "projection_years": 10
/// }
/// ```
///
/// Todos los campos son opcionales. No hay validación: cada campo ausente,
/// nulo, de tipo incorrecto o no reconocido toma su valor por defecto
/// (Pregrado, Tiempo Completo, 8 horas, 0 años, 2024, 5 años de proyección).
/// Los números fraccionarios se truncan y los negativos se tratan como
/// ausentes.
pub fn parse_json_input(json_str: &str) -> Result<SalaryInput, serde_json::Error> {
    let value: Value = serde_json::from_str(json_str)?;
    Ok(SalaryInput::from_value(&value))
}

/// Cuerpo de `POST /salario/evolucion`: los mismos campos de `SalaryInput`
/// más `years` (años a simular, 10 por defecto).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRequest {
    pub input: SalaryInput,
    pub years: u32,
}

impl EvolutionRequest {
    pub fn from_value(v: &Value) -> Self {
        EvolutionRequest {
            input: SalaryInput::from_value(v),
            years: entero_no_negativo(v.get("years")).unwrap_or(DEFAULT_EVOLUTION_YEARS),
        }
    }

    pub fn from_query(q: &HashMap<String, String>) -> Self {
        EvolutionRequest {
            input: SalaryInput::from_query(q),
            years: q.get("years").and_then(|s| texto_a_entero(s)).unwrap_or(DEFAULT_EVOLUTION_YEARS),
        }
    }
}

pub fn parse_evolution_input(json_str: &str) -> Result<EvolutionRequest, serde_json::Error> {
    let value: Value = serde_json::from_str(json_str)?;
    Ok(EvolutionRequest::from_value(&value))
}

impl SalaryInput {
    /// Resuelve cada campo por separado con su respaldo. Un valor que no es
    /// objeto produce la entrada por defecto.
    pub fn from_value(v: &Value) -> Self {
        SalaryInput {
            highest_degree: Titulo::resolver(v.get("highest_degree").and_then(Value::as_str)),
            dedication_type: Dedicacion::resolver(v.get("dedication_type").and_then(Value::as_str)),
            weekly_hours: entero_no_negativo(v.get("weekly_hours")),
            experience_years: entero_no_negativo(v.get("experience_years")).unwrap_or(0),
            base_year: anio(v.get("base_year")).unwrap_or(DEFAULT_BASE_YEAR),
            projection_years: entero_no_negativo(v.get("projection_years")).unwrap_or(DEFAULT_PROJECTION_YEARS),
        }
    }

    /// Variante para query string (`GET`): mismos nombres y mismas reglas.
    pub fn from_query(q: &HashMap<String, String>) -> Self {
        let get = |k: &str| q.get(k).map(|s| s.trim()).filter(|s| !s.is_empty());
        SalaryInput {
            highest_degree: Titulo::resolver(get("highest_degree")),
            dedication_type: Dedicacion::resolver(get("dedication_type")),
            weekly_hours: get("weekly_hours").and_then(texto_a_entero),
            experience_years: get("experience_years").and_then(texto_a_entero).unwrap_or(0),
            base_year: get("base_year")
                .and_then(|s| s.parse::<f64>().ok())
                .and_then(f64_a_anio)
                .unwrap_or(DEFAULT_BASE_YEAR),
            projection_years: get("projection_years").and_then(texto_a_entero).unwrap_or(DEFAULT_PROJECTION_YEARS),
        }
    }
}

fn f64_a_entero(f: f64) -> Option<u32> {
    if f.is_finite() && f >= 0.0 {
        // `as` satura en u32::MAX
        Some(f.trunc() as u32)
    } else {
        None
    }
}

fn texto_a_entero(s: &str) -> Option<u32> {
    s.trim().parse::<f64>().ok().and_then(f64_a_entero)
}

fn entero_no_negativo(v: Option<&Value>) -> Option<u32> {
    match v? {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Some(u32::try_from(u).unwrap_or(u32::MAX))
            } else {
                n.as_f64().and_then(f64_a_entero)
            }
        }
        Value::String(s) => texto_a_entero(s),
        _ => None,
    }
}

fn f64_a_anio(f: f64) -> Option<i32> {
    if f.is_finite() && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) {
        Some(f.trunc() as i32)
    } else {
        None
    }
}

fn anio(v: Option<&Value>) -> Option<i32> {
    match v? {
        Value::Number(n) => n.as_f64().and_then(f64_a_anio),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(f64_a_anio),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_completo() {
        let json_data = r#"
        {
            "highest_degree": "Doctorado",
            "dedication_type": "Hora Cátedra",
            "weekly_hours": 12,
            "experience_years": 7,
            "base_year": 2025,
            "projection_years": 3
        }
        "#;
        let input = parse_json_input(json_data).expect("Debe parsear JSON completo");
        assert_eq!(input.highest_degree, Titulo::Doctorado);
        assert_eq!(input.dedication_type, Dedicacion::HoraCatedra);
        assert_eq!(input.weekly_hours, Some(12));
        assert_eq!(input.experience_years, 7);
        assert_eq!(input.base_year, 2025);
        assert_eq!(input.projection_years, 3);
    }

    #[test]
    fn test_objeto_vacio_usa_defaults() {
        let input = parse_json_input("{}").unwrap();
        assert_eq!(input, SalaryInput::default());
    }

    #[test]
    fn test_valores_raros_no_fallan() {
        // weekly_hours null como lo envía la UI fuera de Hora Cátedra
        let json_data = r#"
        {
            "highest_degree": "PhD",
            "dedication_type": 3,
            "weekly_hours": null,
            "experience_years": -4,
            "base_year": "2026",
            "projection_years": 2.9
        }
        "#;
        let input = parse_json_input(json_data).unwrap();
        assert_eq!(input.highest_degree, Titulo::Pregrado);
        assert_eq!(input.dedication_type, Dedicacion::TiempoCompleto);
        assert_eq!(input.weekly_hours, None);
        assert_eq!(input.experience_years, 0);
        assert_eq!(input.base_year, 2026);
        assert_eq!(input.projection_years, 2);
    }

    #[test]
    fn test_no_objeto_es_default() {
        assert_eq!(parse_json_input("[1, 2]").unwrap(), SalaryInput::default());
        assert!(parse_json_input("{ no es json").is_err());
    }

    #[test]
    fn test_query_string() {
        let mut q = HashMap::new();
        q.insert("highest_degree".to_string(), "Maestría".to_string());
        q.insert("experience_years".to_string(), " 11 ".to_string());
        q.insert("projection_years".to_string(), "abc".to_string());
        q.insert("years".to_string(), "6".to_string());
        let req = EvolutionRequest::from_query(&q);
        assert_eq!(req.input.highest_degree, Titulo::Maestria);
        assert_eq!(req.input.experience_years, 11);
        assert_eq!(req.input.projection_years, DEFAULT_PROJECTION_YEARS);
        assert_eq!(req.years, 6);
    }

    #[test]
    fn test_evolucion_years_por_defecto() {
        let req = parse_evolution_input(r#"{"highest_degree": "Pregrado"}"#).unwrap();
        assert_eq!(req.years, DEFAULT_EVOLUTION_YEARS);
    }
}
