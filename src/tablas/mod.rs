//! Tablas fijas del Acuerdo 006 de 2018.
//!
//! `RateTables` se construye una vez y se entrega al calculador; no existe API
//! para modificarla. Cualquier cambio de política implica desplegar tablas
//! nuevas.
//!
//! Todas las búsquedas son permisivas: una entrada ausente devuelve un valor
//! de respaldo en lugar de un error. Es una decisión de usabilidad de la
//! herramienta (siempre hay una respuesta), aunque oculte errores de digitación.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{DEFAULT_HORAS_CATEDRA, Dedicacion, Titulo};

/// Tramo de experiencia. Los cuatro tramos cubren todos los enteros no negativos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TramoExperiencia {
    CeroADos,
    TresACinco,
    SeisADiez,
    OnceOMas,
}

impl TramoExperiencia {
    pub const TODOS: [TramoExperiencia; 4] = [
        TramoExperiencia::CeroADos,
        TramoExperiencia::TresACinco,
        TramoExperiencia::SeisADiez,
        TramoExperiencia::OnceOMas,
    ];

    /// Clasifica por cotas superiores inclusivas {2, 5, 10, ∞}.
    pub fn from_years(years: u32) -> TramoExperiencia {
        if years <= 2 {
            TramoExperiencia::CeroADos
        } else if years <= 5 {
            TramoExperiencia::TresACinco
        } else if years <= 10 {
            TramoExperiencia::SeisADiez
        } else {
            TramoExperiencia::OnceOMas
        }
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            TramoExperiencia::CeroADos => "0-2 años",
            TramoExperiencia::TresACinco => "3-5 años",
            TramoExperiencia::SeisADiez => "6-10 años",
            TramoExperiencia::OnceOMas => "11+ años",
        }
    }

    /// (desde, hasta) en años; `hasta = None` para el tramo abierto.
    pub fn limites(&self) -> (u32, Option<u32>) {
        match self {
            TramoExperiencia::CeroADos => (0, Some(2)),
            TramoExperiencia::TresACinco => (3, Some(5)),
            TramoExperiencia::SeisADiez => (6, Some(10)),
            TramoExperiencia::OnceOMas => (11, None),
        }
    }
}

/// Fila descriptiva de un tramo, pensada para mostrar la tabla.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TramoInfo {
    pub etiqueta: &'static str,
    pub desde: u32,
    pub hasta: Option<u32>,
    pub tasa: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateTables {
    pub hourly_rates: HashMap<Titulo, f64>,
    /// `None` = horas variables (Hora Cátedra).
    pub weekly_hours: HashMap<Dedicacion, Option<u32>>,
    pub experience_bonus: HashMap<TramoExperiencia, f64>,
    pub weeks_per_semester: u32,
    pub weeks_per_month: u32,
    pub semesters_per_year: u32,
    pub inflation_rate: f64,
}

impl RateTables {
    /// Valores vigentes del Acuerdo 006 de 2018.
    pub fn acuerdo_006() -> Self {
        let hourly_rates = HashMap::from([
            (Titulo::Pregrado, 28000.0),
            (Titulo::Especializacion, 32000.0),
            (Titulo::Maestria, 38000.0),
            (Titulo::Doctorado, 48000.0),
        ]);

        let weekly_hours = HashMap::from([
            (Dedicacion::TiempoCompleto, Some(40)),
            (Dedicacion::MedioTiempo, Some(20)),
            (Dedicacion::HoraCatedra, None),
        ]);

        let experience_bonus = HashMap::from([
            (TramoExperiencia::CeroADos, 0.00),
            (TramoExperiencia::TresACinco, 0.05),
            (TramoExperiencia::SeisADiez, 0.10),
            (TramoExperiencia::OnceOMas, 0.15),
        ]);

        RateTables {
            hourly_rates,
            weekly_hours,
            experience_bonus,
            weeks_per_semester: 16,
            weeks_per_month: 4,
            semesters_per_year: 2,
            inflation_rate: 0.04,
        }
    }

    /// Tarifa por hora del título; si falta, la de Pregrado; si también falta, 0.
    pub fn tarifa_hora(&self, titulo: Titulo) -> f64 {
        self.hourly_rates
            .get(&titulo)
            .or_else(|| self.hourly_rates.get(&Titulo::Pregrado))
            .copied()
            .unwrap_or(0.0)
    }

    /// Horas semanales efectivas. Para Hora Cátedra se usan las horas
    /// solicitadas (8 si no vienen); para el resto se ignoran y manda la tabla.
    pub fn horas_semanales(&self, dedicacion: Dedicacion, solicitadas: Option<u32>) -> u32 {
        if dedicacion == Dedicacion::HoraCatedra {
            return solicitadas.unwrap_or(DEFAULT_HORAS_CATEDRA);
        }
        self.weekly_hours
            .get(&dedicacion)
            .copied()
            .flatten()
            .unwrap_or(40)
    }

    pub fn tasa_bonificacion(&self, tramo: TramoExperiencia) -> f64 {
        self.experience_bonus.get(&tramo).copied().unwrap_or(0.0)
    }

    pub fn tasa_por_experiencia(&self, years: u32) -> f64 {
        self.tasa_bonificacion(TramoExperiencia::from_years(years))
    }

    pub fn tramos(&self) -> Vec<TramoInfo> {
        TramoExperiencia::TODOS
            .iter()
            .map(|t| {
                let (desde, hasta) = t.limites();
                TramoInfo { etiqueta: t.etiqueta(), desde, hasta, tasa: self.tasa_bonificacion(*t) }
            })
            .collect()
    }
}

impl Default for RateTables {
    fn default() -> Self {
        RateTables::acuerdo_006()
    }
}
