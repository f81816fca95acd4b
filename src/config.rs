use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub default_language: String,
    pub dialog_config: DialogConfig,
    pub panel_config: PanelConfig,
    pub date_config: DateConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            default_language: "ES".to_string(),
            dialog_config: DialogConfig::default(),
            panel_config: PanelConfig::default(),
            date_config: DateConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Valor que el servidor deja en las plantillas de URL en lugar del id
    pub sentinel: String,
    /// Atributo del diálogo que guarda la plantilla
    pub url_attribute: String,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            sentinel: "31415926535".to_string(),
            url_attribute: "url".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    pub transition_duration_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: 400,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateConfig {
    /// Formato chrono que acepta el servidor (encuestas/forms.py)
    pub server_format: String,
    /// Formato del plugin datetimepicker
    pub widget_format: String,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            server_format: "%d/%m/%Y %H:%M".to_string(),
            widget_format: "d/m/Y H:i".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
            default_language: option_env!("DEFAULT_LANGUAGE")
                .unwrap_or("ES").to_string(),
            dialog_config: DialogConfig {
                sentinel: option_env!("URL_SENTINEL")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.dialog_config.sentinel),
                url_attribute: option_env!("URL_ATTRIBUTE")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.dialog_config.url_attribute),
            },
            panel_config: PanelConfig {
                transition_duration_ms: option_env!("TRANSITION_DURATION_MS")
                    .unwrap_or("400").parse().unwrap_or(400),
            },
            date_config: DateConfig {
                server_format: option_env!("DATE_SERVER_FORMAT")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.date_config.server_format),
                widget_format: option_env!("DATE_WIDGET_FORMAT")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.date_config.widget_format),
            },
        }
    }

    /// Nivel de log para wasm_logger; `Off` si el logging está deshabilitado
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
