// Biblioteca raíz del crate `acuerdo006`.
// Motor de cálculo de salarios para profesores ocasionales (Acuerdo 006 de
// 2018) y el servicio HTTP que lo expone.
pub mod models;
pub mod tablas;
pub mod calculadora;
pub mod api_json;
pub mod presentacion;
pub mod graficos;
pub mod config;
pub mod server_handlers;
pub mod server;

pub use calculadora::SalaryCalculator;
pub use models::{Dedicacion, EvolutionRow, ProjectionPoint, SalaryBreakdown, SalaryInput, SalaryResult, Titulo};
pub use tablas::{RateTables, TramoExperiencia};

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
