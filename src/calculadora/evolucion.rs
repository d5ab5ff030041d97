use tracing::debug;

use super::SalaryCalculator;
use crate::models::{EvolutionRow, SalaryInput, Titulo};

/// Regla de ascenso fija: en el año 2 Pregrado pasa a Especialización y en el
/// año 4 Especialización pasa a Maestría. Se evalúa sobre el título actual,
/// así que la segunda regla solo aplica si la primera ya se cumplió (o si se
/// partió de Especialización). No hay otros ascensos.
fn ascenso(anio: u32, actual: Titulo) -> Titulo {
    if anio == 2 && actual == Titulo::Pregrado {
        Titulo::Especializacion
    } else if anio == 4 && actual == Titulo::Especializacion {
        Titulo::Maestria
    } else {
        actual
    }
}

pub(super) fn simular(calc: &SalaryCalculator, inicial: &SalaryInput, years: u32) -> Vec<EvolutionRow> {
    let mut actual = inicial.clone();
    // La proyección anidada se descarta; basta con el punto del propio año.
    actual.projection_years = 0;

    let mut filas = Vec::with_capacity(years as usize);
    for y in 0..years {
        let offset = i32::try_from(y).unwrap_or(i32::MAX);
        actual.experience_years = inicial.experience_years.saturating_add(y);
        let previo = actual.highest_degree;
        actual.highest_degree = ascenso(y, previo);
        if actual.highest_degree != previo {
            debug!(anio = y, desde = %previo, hacia = %actual.highest_degree, "ascenso de título");
        }
        actual.base_year = inicial.base_year.saturating_add(offset);

        let calculo = calc.calculate_salary(&actual);
        filas.push(EvolutionRow {
            year: actual.base_year,
            experience_years: actual.experience_years,
            highest_degree: actual.highest_degree,
            dedication_type: actual.dedication_type,
            hourly_rate: calculo.hourly_rate,
            monthly_salary: calculo.monthly_salary,
            annual_salary: calculo.annual_salary,
        });
    }
    filas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascenso_solo_en_anios_fijos() {
        assert_eq!(ascenso(2, Titulo::Pregrado), Titulo::Especializacion);
        assert_eq!(ascenso(3, Titulo::Pregrado), Titulo::Pregrado);
        assert_eq!(ascenso(4, Titulo::Especializacion), Titulo::Maestria);
        assert_eq!(ascenso(4, Titulo::Pregrado), Titulo::Pregrado);
        assert_eq!(ascenso(2, Titulo::Maestria), Titulo::Maestria);
        assert_eq!(ascenso(4, Titulo::Maestria), Titulo::Maestria);
    }

    #[test]
    fn test_partiendo_de_especializacion_llega_a_maestria() {
        let calc = SalaryCalculator::default();
        let input = SalaryInput { highest_degree: Titulo::Especializacion, ..SalaryInput::default() };
        let filas = calc.simulate_faculty_evolution(&input, 5);
        assert_eq!(filas[3].highest_degree, Titulo::Especializacion);
        assert_eq!(filas[4].highest_degree, Titulo::Maestria);
    }

    #[test]
    fn test_cero_anios_sin_filas() {
        let calc = SalaryCalculator::default();
        assert!(calc.simulate_faculty_evolution(&SalaryInput::default(), 0).is_empty());
    }
}
