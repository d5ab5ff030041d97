pub mod salario;
pub mod graficos;
pub mod docs;

pub use salario::*;
pub use graficos::*;
pub use docs::*;

use tracing::warn;

use crate::api_json::EvolutionRequest;
use crate::calculadora::SalaryCalculator;
use crate::models::SalaryInput;

/// Estado compartido por los handlers. Solo lectura.
#[derive(Debug, Clone)]
pub struct AppState {
    pub calculadora: SalaryCalculator,
    pub max_horizonte: u32,
}

impl AppState {
    pub fn new(max_horizonte: u32) -> Self {
        AppState { calculadora: SalaryCalculator::default(), max_horizonte }
    }

    /// Recorta `projection_years` al tope del servicio. No es validación: la
    /// petición sigue adelante con el valor recortado.
    pub fn recortar_input(&self, mut input: SalaryInput) -> SalaryInput {
        if input.projection_years > self.max_horizonte {
            warn!(solicitado = input.projection_years, tope = self.max_horizonte, "projection_years recortado");
            input.projection_years = self.max_horizonte;
        }
        input
    }

    pub fn recortar_evolucion(&self, mut req: EvolutionRequest) -> EvolutionRequest {
        req.input = self.recortar_input(req.input);
        if req.years > self.max_horizonte {
            warn!(solicitado = req.years, tope = self.max_horizonte, "years recortado");
            req.years = self.max_horizonte;
        }
        req
    }
}
