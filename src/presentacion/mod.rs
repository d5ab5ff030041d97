// Formateo de resultados para la capa de presentación (tablas de la página)

use serde::Serialize;

use crate::models::{EvolutionRow, ProjectionPoint, SalaryBreakdown};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilaTabla {
    #[serde(rename = "Componente")]
    pub componente: String,
    #[serde(rename = "Valor")]
    pub valor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilaProyeccion {
    #[serde(rename = "Año")]
    pub anio: i32,
    #[serde(rename = "Tarifa por Hora")]
    pub tarifa_hora: String,
    #[serde(rename = "Salario Mensual")]
    pub salario_mensual: String,
    #[serde(rename = "Salario Semestral")]
    pub salario_semestral: String,
    #[serde(rename = "Salario Anual")]
    pub salario_anual: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilaEvolucion {
    #[serde(rename = "Año")]
    pub anio: i32,
    #[serde(rename = "Experiencia")]
    pub experiencia: u32,
    #[serde(rename = "Título más Alto")]
    pub titulo: String,
    #[serde(rename = "Tarifa por Hora")]
    pub tarifa_hora: String,
    #[serde(rename = "Salario Mensual")]
    pub salario_mensual: String,
    #[serde(rename = "Salario Anual")]
    pub salario_anual: String,
}

/// `4480000.4` -> `"$4,480,000"`. Redondea a pesos enteros.
pub fn formatear_monto(valor: f64) -> String {
    if !valor.is_finite() {
        return format!("${}", valor);
    }
    let redondeado = valor.round();
    let signo = if redondeado < 0.0 { "-" } else { "" };
    let digitos = format!("{:.0}", redondeado.abs());

    let mut con_comas = String::with_capacity(digitos.len() + digitos.len() / 3);
    for (i, c) in digitos.chars().enumerate() {
        if i > 0 && (digitos.len() - i) % 3 == 0 {
            con_comas.push(',');
        }
        con_comas.push(c);
    }
    format!("{}${}", signo, con_comas)
}

pub fn formatear_cop(valor: f64) -> String {
    format!("{} COP", formatear_monto(valor))
}

/// `0.05` -> `"5.0%"`
pub fn formatear_porcentaje(tasa: f64) -> String {
    format!("{:.1}%", tasa * 100.0)
}

fn fila(componente: &str, valor: String) -> FilaTabla {
    FilaTabla { componente: componente.to_string(), valor }
}

/// Las ocho filas "Desglose del Salario", en el orden de la página.
pub fn tabla_desglose(b: &SalaryBreakdown) -> Vec<FilaTabla> {
    vec![
        fila("Tarifa por Hora", formatear_cop(b.hourly_rate)),
        fila("Horas Semanales", format!("{} horas", b.weekly_hours)),
        fila("Base Mensual", formatear_cop(b.base_monthly)),
        fila("Tasa de Bonificación por Experiencia", formatear_porcentaje(b.experience_bonus_rate)),
        fila("Monto de Bonificación por Experiencia", formatear_cop(b.experience_bonus_amount)),
        fila("Total Mensual", formatear_cop(b.monthly_salary)),
        fila("Total Semestral", formatear_cop(b.semester_salary)),
        fila("Total Anual", formatear_cop(b.annual_salary)),
    ]
}

pub fn tabla_proyeccion(proyeccion: &[ProjectionPoint]) -> Vec<FilaProyeccion> {
    proyeccion
        .iter()
        .map(|p| FilaProyeccion {
            anio: p.year,
            tarifa_hora: formatear_monto(p.hourly_rate),
            salario_mensual: formatear_monto(p.monthly_salary),
            salario_semestral: formatear_monto(p.semester_salary),
            salario_anual: formatear_monto(p.annual_salary),
        })
        .collect()
}

pub fn tabla_evolucion(filas: &[EvolutionRow]) -> Vec<FilaEvolucion> {
    filas
        .iter()
        .map(|r| FilaEvolucion {
            anio: r.year,
            experiencia: r.experience_years,
            titulo: r.highest_degree.to_string(),
            tarifa_hora: formatear_monto(r.hourly_rate),
            salario_mensual: formatear_monto(r.monthly_salary),
            salario_anual: formatear_monto(r.annual_salary),
        })
        .collect()
}
