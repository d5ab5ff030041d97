// Calculadora de salarios del Acuerdo 006
mod salario;
mod evolucion;
mod ejemplo;

pub use ejemplo::ejemplo_evolucion;

use crate::models::{EvolutionRow, SalaryInput, SalaryResult};
use crate::tablas::RateTables;

/// Calculador sin estado propio más allá de las tablas que recibe.
/// Ninguna operación escribe en `tablas`, por lo que puede compartirse entre
/// hilos sin sincronización.
#[derive(Debug, Clone, Default)]
pub struct SalaryCalculator {
    tablas: RateTables,
}

impl SalaryCalculator {
    pub fn new(tablas: RateTables) -> Self {
        SalaryCalculator { tablas }
    }

    pub fn tablas(&self) -> &RateTables {
        &self.tablas
    }

    /// Desglose puntual más una proyección de `projection_years + 1` puntos.
    /// Nunca falla.
    pub fn calculate_salary(&self, input: &SalaryInput) -> SalaryResult {
        salario::calcular(&self.tablas, input)
    }

    /// Trayectoria año a año con los ascensos de título fijos (años 2 y 4).
    pub fn simulate_faculty_evolution(&self, input: &SalaryInput, years: u32) -> Vec<EvolutionRow> {
        evolucion::simular(self, input, years)
    }
}
