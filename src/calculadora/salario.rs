use tracing::debug;

use crate::models::{ProjectionPoint, SalaryBreakdown, SalaryInput, SalaryResult};
use crate::tablas::{RateTables, TramoExperiencia};

/// Montos derivados de una tarifa por hora. Se usa tanto para el año base
/// como para cada año proyectado, con la misma tasa de bonificación.
struct Montos {
    base_monthly: f64,
    bonus_amount: f64,
    monthly: f64,
    semester: f64,
    annual: f64,
}

fn montos(tablas: &RateTables, hourly_rate: f64, weekly_hours: u32, bonus_rate: f64) -> Montos {
    let horas = f64::from(weekly_hours);
    let base_monthly = hourly_rate * horas * f64::from(tablas.weeks_per_month);
    let bonus_amount = base_monthly * bonus_rate;
    // El semestre sale directo de tarifa x horas x semanas: no lleva bonificación
    // ni reutiliza base_monthly.
    let semester = hourly_rate * horas * f64::from(tablas.weeks_per_semester);
    Montos {
        base_monthly,
        bonus_amount,
        monthly: base_monthly + bonus_amount,
        semester,
        annual: semester * f64::from(tablas.semesters_per_year),
    }
}

pub(super) fn calcular(tablas: &RateTables, input: &SalaryInput) -> SalaryResult {
    let hourly_rate = tablas.tarifa_hora(input.highest_degree);
    let weekly_hours = tablas.horas_semanales(input.dedication_type, input.weekly_hours);

    let tramo = TramoExperiencia::from_years(input.experience_years);
    let bonus_rate = tablas.tasa_bonificacion(tramo);

    let base = montos(tablas, hourly_rate, weekly_hours, bonus_rate);
    let breakdown = SalaryBreakdown {
        hourly_rate,
        weekly_hours,
        base_monthly: base.base_monthly,
        experience_bonus_rate: bonus_rate,
        experience_bonus_amount: base.bonus_amount,
        monthly_salary: base.monthly,
        semester_salary: base.semester,
        annual_salary: base.annual,
    };

    debug!(
        titulo = %input.highest_degree,
        dedicacion = %input.dedication_type,
        tramo = tramo.etiqueta(),
        hourly_rate,
        weekly_hours,
        "salario calculado"
    );

    let projection = proyectar(tablas, input, hourly_rate, weekly_hours, bonus_rate);
    SalaryResult::new(breakdown, projection)
}

/// El tramo de experiencia queda fijo en el valor de entrada durante todo el
/// horizonte; solo la tarifa por hora crece con la inflación.
fn proyectar(
    tablas: &RateTables,
    input: &SalaryInput,
    hourly_rate: f64,
    weekly_hours: u32,
    bonus_rate: f64,
) -> Vec<ProjectionPoint> {
    let factor_base = 1.0 + tablas.inflation_rate;
    (0..=input.projection_years)
        .map(|i| {
            let periodos = i32::try_from(i).unwrap_or(i32::MAX);
            let tarifa = hourly_rate * factor_base.powi(periodos);
            let m = montos(tablas, tarifa, weekly_hours, bonus_rate);
            ProjectionPoint {
                year: input.base_year.saturating_add(periodos),
                hourly_rate: tarifa,
                monthly_salary: m.monthly,
                semester_salary: m.semester,
                annual_salary: m.annual,
            }
        })
        .collect()
}
