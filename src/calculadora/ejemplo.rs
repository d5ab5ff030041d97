use crate::models::EjemploPunto;

const EJEMPLO_ANIO_INICIAL: i32 = 2022;
const EJEMPLO_ANIOS: i32 = 10;
const EJEMPLO_SALARIO_BASE: f64 = 4_000_000.0;
const EJEMPLO_CRECIMIENTO: f64 = 1.04;
const EJEMPLO_BONIFICACION_PRODUCTIVIDAD: f64 = 1.15;

/// Serie ilustrativa de la página de inicio (2022-2031). No depende de las
/// tablas del acuerdo.
pub fn ejemplo_evolucion() -> Vec<EjemploPunto> {
    (0..EJEMPLO_ANIOS)
        .map(|i| {
            let base = EJEMPLO_SALARIO_BASE * EJEMPLO_CRECIMIENTO.powi(i);
            EjemploPunto {
                anio: EJEMPLO_ANIO_INICIAL + i,
                salario_base: base,
                con_bonificacion: base * EJEMPLO_BONIFICACION_PRODUCTIVIDAD,
            }
        })
        .collect()
}
