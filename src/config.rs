use std::env;

use thiserror::Error;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_HORIZONTE: u32 = 50;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} inválido: '{valor}'")]
    ValorInvalido { var: &'static str, valor: String },
}

/// Configuración del servicio HTTP. Las tablas del acuerdo no se configuran
/// aquí: son fijas en el binario.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: String,
    /// Tope para `projection_years` y `years` en las peticiones HTTP. Los
    /// valores mayores se recortan, no se rechazan.
    pub max_horizonte: u32,
    /// Origen permitido por CORS; `None` permite cualquiera.
    pub cors_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: DEFAULT_BIND.to_string(),
            max_horizonte: DEFAULT_MAX_HORIZONTE,
            cors_origin: None,
        }
    }
}

// load .env at module init if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl Config {
    /// Lee `ACUERDO006_BIND`, `ACUERDO006_MAX_HORIZONTE` y
    /// `ACUERDO006_CORS_ORIGIN` (también desde `.env`).
    pub fn from_env() -> Result<Config, ConfigError> {
        load_dotenv();
        Config::from_lookup(|k| env::var(k).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectable para pruebas.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        let no_vacio = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(bind) = no_vacio("ACUERDO006_BIND") {
            cfg.bind = bind;
        }
        if let Some(max) = no_vacio("ACUERDO006_MAX_HORIZONTE") {
            cfg.max_horizonte = max.parse::<u32>().map_err(|_| ConfigError::ValorInvalido {
                var: "ACUERDO006_MAX_HORIZONTE",
                valor: max.clone(),
            })?;
        }
        cfg.cors_origin = no_vacio("ACUERDO006_CORS_ORIGIN").filter(|o| o != "*");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn fuente(pares: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let m: HashMap<String, String> = pares.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k: &str| m.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(fuente(&[])).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_valores_de_entorno() {
        let cfg = Config::from_lookup(fuente(&[
            ("ACUERDO006_BIND", "0.0.0.0:9000"),
            ("ACUERDO006_MAX_HORIZONTE", " 20 "),
            ("ACUERDO006_CORS_ORIGIN", "http://localhost:8501"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind, "0.0.0.0:9000");
        assert_eq!(cfg.max_horizonte, 20);
        assert_eq!(cfg.cors_origin.as_deref(), Some("http://localhost:8501"));
    }

    #[test]
    fn test_horizonte_invalido() {
        let err = Config::from_lookup(fuente(&[("ACUERDO006_MAX_HORIZONTE", "muchos")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ValorInvalido { var: "ACUERDO006_MAX_HORIZONTE", valor: "muchos".to_string() }
        );
    }

    #[test]
    fn test_cors_comodin() {
        let cfg = Config::from_lookup(fuente(&[("ACUERDO006_CORS_ORIGIN", "*")])).unwrap();
        assert_eq!(cfg.cors_origin, None);
    }
}
