// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Título académico más alto del profesor. El orden de las variantes es el
/// orden de la tarifa por hora (Pregrado la más baja).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Titulo {
    #[default]
    #[serde(rename = "Pregrado")]
    Pregrado,
    #[serde(rename = "Especialización")]
    Especializacion,
    #[serde(rename = "Maestría")]
    Maestria,
    #[serde(rename = "Doctorado")]
    Doctorado,
}

impl Titulo {
    pub const TODOS: [Titulo; 4] = [
        Titulo::Pregrado,
        Titulo::Especializacion,
        Titulo::Maestria,
        Titulo::Doctorado,
    ];

    pub fn nombre(&self) -> &'static str {
        match self {
            Titulo::Pregrado => "Pregrado",
            Titulo::Especializacion => "Especialización",
            Titulo::Maestria => "Maestría",
            Titulo::Doctorado => "Doctorado",
        }
    }

    /// Coincidencia exacta con el nombre; cualquier otro texto es `None`.
    pub fn from_nombre(s: &str) -> Option<Titulo> {
        Titulo::TODOS.into_iter().find(|t| t.nombre() == s)
    }

    /// Igual que `from_nombre` pero nunca falla: lo no reconocido es Pregrado.
    pub fn resolver(s: Option<&str>) -> Titulo {
        s.and_then(Titulo::from_nombre).unwrap_or_default()
    }
}

impl std::fmt::Display for Titulo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.nombre())
    }
}

/// Tipo de dedicación contractual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dedicacion {
    #[default]
    #[serde(rename = "Tiempo Completo")]
    TiempoCompleto,
    #[serde(rename = "Medio Tiempo")]
    MedioTiempo,
    #[serde(rename = "Hora Cátedra")]
    HoraCatedra,
}

impl Dedicacion {
    pub const TODAS: [Dedicacion; 3] = [
        Dedicacion::TiempoCompleto,
        Dedicacion::MedioTiempo,
        Dedicacion::HoraCatedra,
    ];

    pub fn nombre(&self) -> &'static str {
        match self {
            Dedicacion::TiempoCompleto => "Tiempo Completo",
            Dedicacion::MedioTiempo => "Medio Tiempo",
            Dedicacion::HoraCatedra => "Hora Cátedra",
        }
    }

    pub fn from_nombre(s: &str) -> Option<Dedicacion> {
        Dedicacion::TODAS.into_iter().find(|d| d.nombre() == s)
    }

    /// Lo no reconocido se trata como Tiempo Completo.
    pub fn resolver(s: Option<&str>) -> Dedicacion {
        s.and_then(Dedicacion::from_nombre).unwrap_or_default()
    }
}

impl std::fmt::Display for Dedicacion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.nombre())
    }
}

pub const DEFAULT_HORAS_CATEDRA: u32 = 8;
pub const DEFAULT_BASE_YEAR: i32 = 2024;
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;
pub const DEFAULT_EVOLUTION_YEARS: u32 = 10;

/// Parámetros de una solicitud de cálculo, ya resueltos con sus valores por
/// defecto (ver `api_json` para la resolución desde JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryInput {
    pub highest_degree: Titulo,
    pub dedication_type: Dedicacion,
    /// Solo se usa con Hora Cátedra.
    pub weekly_hours: Option<u32>,
    pub experience_years: u32,
    pub base_year: i32,
    pub projection_years: u32,
}

impl Default for SalaryInput {
    fn default() -> Self {
        SalaryInput {
            highest_degree: Titulo::Pregrado,
            dedication_type: Dedicacion::TiempoCompleto,
            weekly_hours: None,
            experience_years: 0,
            base_year: DEFAULT_BASE_YEAR,
            projection_years: DEFAULT_PROJECTION_YEARS,
        }
    }
}

/// Desglose puntual del salario. Los nombres de campo son parte del contrato
/// con la capa de presentación.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub hourly_rate: f64,
    pub weekly_hours: u32,
    pub base_monthly: f64,
    pub experience_bonus_rate: f64,
    pub experience_bonus_amount: f64,
    pub monthly_salary: f64,
    pub semester_salary: f64,
    pub annual_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: i32,
    pub hourly_rate: f64,
    pub monthly_salary: f64,
    pub semester_salary: f64,
    pub annual_salary: f64,
}

/// Resultado completo de `calculate_salary`: resumen, desglose y proyección.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryResult {
    pub hourly_rate: f64,
    pub weekly_hours: u32,
    pub monthly_salary: f64,
    pub semester_salary: f64,
    pub annual_salary: f64,
    pub salary_breakdown: SalaryBreakdown,
    pub salary_projection: Vec<ProjectionPoint>,
}

impl SalaryResult {
    pub fn new(breakdown: SalaryBreakdown, projection: Vec<ProjectionPoint>) -> Self {
        SalaryResult {
            hourly_rate: breakdown.hourly_rate,
            weekly_hours: breakdown.weekly_hours,
            monthly_salary: breakdown.monthly_salary,
            semester_salary: breakdown.semester_salary,
            annual_salary: breakdown.annual_salary,
            salary_breakdown: breakdown,
            salary_projection: projection,
        }
    }
}

/// Una fila de la simulación de carrera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRow {
    pub year: i32,
    pub experience_years: u32,
    pub highest_degree: Titulo,
    pub dedication_type: Dedicacion,
    pub hourly_rate: f64,
    pub monthly_salary: f64,
    pub annual_salary: f64,
}

/// Punto de la serie de ejemplo de la página de inicio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EjemploPunto {
    #[serde(rename = "Año")]
    pub anio: i32,
    #[serde(rename = "Salario Base")]
    pub salario_base: f64,
    #[serde(rename = "Con Bonificación por Productividad")]
    pub con_bonificacion: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titulo_orden_y_nombres() {
        assert!(Titulo::Pregrado < Titulo::Especializacion);
        assert!(Titulo::Maestria < Titulo::Doctorado);
        assert_eq!(Titulo::from_nombre("Maestría"), Some(Titulo::Maestria));
        assert_eq!(Titulo::from_nombre("maestria"), None);
        assert_eq!(Titulo::resolver(Some("PhD")), Titulo::Pregrado);
        assert_eq!(Titulo::resolver(None), Titulo::Pregrado);
    }

    #[test]
    fn test_dedicacion_fallback() {
        assert_eq!(Dedicacion::resolver(Some("Hora Cátedra")), Dedicacion::HoraCatedra);
        assert_eq!(Dedicacion::resolver(Some("Parcial")), Dedicacion::TiempoCompleto);
    }

    #[test]
    fn test_serde_usa_nombres_con_tilde() {
        let s = serde_json::to_string(&Titulo::Especializacion).unwrap();
        assert_eq!(s, "\"Especialización\"");
        let d: Dedicacion = serde_json::from_str("\"Medio Tiempo\"").unwrap();
        assert_eq!(d, Dedicacion::MedioTiempo);
    }
}
