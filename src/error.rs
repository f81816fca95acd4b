// ============================================================================
// ERRORES - Desajustes entre el markup del servidor y lo que espera la UI
// ============================================================================
// Ningún handler propaga estos errores a la página: se loguean y se sigue.
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    #[error("el disparador no tiene el atributo '{attribute}' o está vacío")]
    MissingIdentifier { attribute: String },

    #[error("identificador inválido en '{attribute}': '{value}'")]
    InvalidIdentifier { attribute: String, value: String },

    #[error("el diálogo no tiene plantilla de URL en el atributo '{attribute}'")]
    MissingTemplate { attribute: String },

    #[error("el centinela está vacío")]
    EmptySentinel,

    #[error("la plantilla '{template}' no contiene el centinela '{sentinel}'")]
    SentinelNotFound { template: String, sentinel: String },

    #[error("la plantilla '{template}' contiene el centinela '{sentinel}' {count} veces")]
    AmbiguousSentinel {
        template: String,
        sentinel: String,
        count: usize,
    },

    #[error("ningún elemento coincide con '{selector}'")]
    MissingElement { selector: String },

    #[error("no existe el formulario '#{form_id}'")]
    MissingForm { form_id: String },

    #[error("fecha '{value}' no respeta el formato '{format}'")]
    InvalidDate { value: String, format: String },

    #[error("configuración inválida: {0}")]
    InvalidConfig(String),

    #[error("error de JavaScript: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<UiError> for JsValue {
    fn from(error: UiError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<serde_json::Error> for UiError {
    fn from(error: serde_json::Error) -> Self {
        UiError::InvalidConfig(error.to_string())
    }
}

pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_markup() {
        let err = UiError::MissingIdentifier { attribute: "data-turno".to_string() };
        assert!(err.to_string().contains("data-turno"));

        let err = UiError::AmbiguousSentinel {
            template: "/a/1/1/".to_string(),
            sentinel: "1".to_string(),
            count: 2,
        };
        assert!(err.to_string().contains("2 veces"));
    }

    #[test]
    fn config_errors_come_from_serde() {
        let err: UiError = serde_json::from_str::<u32>("no es json").unwrap_err().into();
        assert!(matches!(err, UiError::InvalidConfig(_)));
    }
}
