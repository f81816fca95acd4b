// ============================================================================
// DATETIME FIELD VIEWMODEL - Validación de campos .datepicker
// ============================================================================

use chrono::NaiveDateTime;
use crate::error::{UiError, UiResult};
use crate::models::DateTimeFieldSpec;

pub struct DateTimeFieldViewModel {
    server_format: String,
    widget_format: String,
}

impl DateTimeFieldViewModel {
    pub fn new(spec: &DateTimeFieldSpec) -> Self {
        Self {
            server_format: spec.server_format.clone(),
            widget_format: spec.widget_format.clone(),
        }
    }

    pub fn widget_format(&self) -> &str {
        &self.widget_format
    }

    /// Vacío es válido: el campo puede ser opcional en el formulario
    pub fn validate(&self, raw: &str) -> UiResult<Option<NaiveDateTime>> {
        let value = raw.trim();
        if value.is_empty() {
            return Ok(None);
        }
        NaiveDateTime::parse_from_str(value, &self.server_format)
            .map(Some)
            .map_err(|_| UiError::InvalidDate {
                value: value.to_string(),
                format: self.server_format.clone(),
            })
    }

    /// Reescribir el valor tal como lo espera el servidor
    pub fn normalize(&self, date: &NaiveDateTime) -> String {
        date.format(&self.server_format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn vm() -> DateTimeFieldViewModel {
        DateTimeFieldViewModel::new(&DateTimeFieldSpec {
            selector: ".datepicker".to_string(),
            server_format: "%d/%m/%Y %H:%M".to_string(),
            widget_format: "d/m/Y H:i".to_string(),
        })
    }

    #[test]
    fn accepts_server_format() {
        let date = vm().validate("17/07/2019 00:21").unwrap().unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2019, 7, 17).unwrap());
        assert_eq!(date.minute(), 21);
    }

    #[test]
    fn empty_is_valid() {
        assert_eq!(vm().validate("  ").unwrap(), None);
    }

    #[test]
    fn rejects_other_formats() {
        assert!(matches!(vm().validate("2019-07-17"), Err(UiError::InvalidDate { .. })));
        assert!(matches!(vm().validate("31/02/2019 10:00"), Err(UiError::InvalidDate { .. })));
    }

    #[test]
    fn normalizes_single_digit_fields() {
        let vm = vm();
        let date = vm.validate("5/3/2020 9:05").unwrap().unwrap();
        assert_eq!(vm.normalize(&date), "05/03/2020 09:05");
    }
}
