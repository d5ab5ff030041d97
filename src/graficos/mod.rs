//! Gráficos SVG de la proyección y de la evolución de carrera.
//!
//! Se dibuja en memoria con el backend SVG de `plotters`; el servidor devuelve
//! el texto tal cual con `image/svg+xml`.

use plotters::prelude::*;
use thiserror::Error;

use crate::models::{EvolutionRow, ProjectionPoint, SalaryResult};
use crate::presentacion::formatear_monto;

const ANCHO: u32 = 900;
const ALTO: u32 = 520;

#[derive(Debug, Error)]
pub enum GraficoError {
    #[error("no hay puntos para graficar")]
    SinDatos,
    #[error("error de dibujo: {0}")]
    Dibujo(String),
}

fn dibujo<E: std::fmt::Display>(e: E) -> GraficoError {
    GraficoError::Dibujo(e.to_string())
}

/// Serie con nombre para la leyenda.
#[derive(Debug, Clone)]
pub struct Serie {
    pub nombre: &'static str,
    pub puntos: Vec<(i32, f64)>,
    pub color: RGBColor,
}

pub fn serie_proyeccion(proyeccion: &[ProjectionPoint]) -> Serie {
    Serie {
        nombre: "monthly_salary",
        puntos: proyeccion.iter().map(|p| (p.year, p.monthly_salary)).collect(),
        color: RGBColor(65, 105, 225),
    }
}

/// Series mensual y anual, en ese orden.
pub fn serie_evolucion(filas: &[EvolutionRow]) -> Vec<Serie> {
    vec![
        Serie {
            nombre: "monthly_salary",
            puntos: filas.iter().map(|r| (r.year, r.monthly_salary)).collect(),
            color: RGBColor(65, 105, 225),
        },
        Serie {
            nombre: "annual_salary",
            puntos: filas.iter().map(|r| (r.year, r.annual_salary)).collect(),
            color: RGBColor(178, 34, 34),
        },
    ]
}

pub fn titulo_proyeccion(resultado: &SalaryResult) -> String {
    let anios: Vec<i32> = resultado.salary_projection.iter().map(|p| p.year).collect();
    match (anios.first(), anios.last()) {
        (Some(a), Some(b)) => format!("Proyección de Evolución Salarial ({} - {})", a, b),
        _ => "Proyección de Evolución Salarial".to_string(),
    }
}

pub fn grafico_proyeccion(resultado: &SalaryResult, titulo: Option<&str>) -> Result<String, GraficoError> {
    let titulo = titulo.map(str::to_string).unwrap_or_else(|| titulo_proyeccion(resultado));
    dibujar_lineas(&titulo, &[serie_proyeccion(&resultado.salary_projection)])
}

pub fn grafico_evolucion(filas: &[EvolutionRow]) -> Result<String, GraficoError> {
    dibujar_lineas("Simulación de Evolución de Carrera", &serie_evolucion(filas))
}

/// Rango (x_min, x_max, y_max) que cubre todas las series. Un solo año se
/// abre a dos para que el eje tenga ancho.
fn rango(series: &[Serie]) -> Option<(i32, i32, f64)> {
    let mut puntos = series.iter().flat_map(|s| s.puntos.iter());
    let &(x0, y0) = puntos.next()?;
    let (mut x_min, mut x_max, mut y_max) = (x0, x0, y0);
    for &(x, y) in puntos {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_max = y_max.max(y);
    }
    if x_max == x_min {
        x_max = x_min.saturating_add(1);
    }
    let y_max = if y_max.is_finite() && y_max > 0.0 { y_max * 1.1 } else { 1.0 };
    Some((x_min, x_max, y_max))
}

fn dibujar_lineas(titulo: &str, series: &[Serie]) -> Result<String, GraficoError> {
    let (x_min, x_max, y_max) = rango(series).ok_or(GraficoError::SinDatos)?;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (ANCHO, ALTO)).into_drawing_area();
        root.fill(&WHITE).map_err(dibujo)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(titulo, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(110)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)
            .map_err(dibujo)?;

        chart
            .configure_mesh()
            .x_desc("Año")
            .y_desc("Salario (COP)")
            .y_label_formatter(&|v: &f64| formatear_monto(*v))
            .draw()
            .map_err(dibujo)?;

        for s in series {
            let color = s.color;
            chart
                .draw_series(LineSeries::new(s.puntos.iter().copied(), color.stroke_width(3)))
                .map_err(dibujo)?
                .label(s.nombre)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            chart
                .draw_series(s.puntos.iter().map(|&(x, y)| Circle::new((x, y), 3, color.filled())))
                .map_err(dibujo)?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(dibujo)?;

        root.present().map_err(dibujo)?;
    }
    Ok(svg)
}
