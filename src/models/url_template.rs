// ============================================================================
// URL TEMPLATE - Construcción de URLs de confirmación
// ============================================================================
// El servidor renderiza plantillas tipo "/materias/turno/borrar/31415926535/"
// donde el centinela ocupa el lugar del id. Aquí se parte la plantilla en
// prefijo + sufijo una sola vez y el id se inserta de forma tipada.
// ============================================================================

use crate::error::{UiError, UiResult};

/// Identificador de una entidad (turno, horario, habilitación).
/// Guarda el texto tal como vino del atributo: solo dígitos ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId(String);

impl EntityId {
    /// Leer id desde el valor crudo de un atributo data-*
    pub fn from_attribute(attribute: &str, raw: Option<&str>) -> UiResult<Self> {
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(UiError::MissingIdentifier {
                attribute: attribute.to_string(),
            });
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UiError::InvalidIdentifier {
                attribute: attribute.to_string(),
                value: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plantilla de URL con un único hueco para el id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    prefix: String,
    suffix: String,
}

impl UrlTemplate {
    /// Plantilla estructurada: `prefix` + id + `suffix`
    pub fn from_parts(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Parsear una plantilla renderizada por el servidor.
    /// El centinela debe aparecer exactamente una vez.
    pub fn parse(raw: &str, sentinel: &str) -> UiResult<Self> {
        if sentinel.is_empty() {
            return Err(UiError::EmptySentinel);
        }

        let count = raw.matches(sentinel).count();
        match count {
            0 => Err(UiError::SentinelNotFound {
                template: raw.to_string(),
                sentinel: sentinel.to_string(),
            }),
            1 => {
                // matches() garantiza que split_once encuentra el centinela
                let (prefix, suffix) = raw.split_once(sentinel).unwrap_or((raw, ""));
                Ok(Self::from_parts(prefix, suffix))
            }
            _ => Err(UiError::AmbiguousSentinel {
                template: raw.to_string(),
                sentinel: sentinel.to_string(),
                count,
            }),
        }
    }

    pub fn build(&self, id: &EntityId) -> String {
        format!("{}{}{}", self.prefix, id.as_str(), self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTINEL: &str = "31415926535";

    fn id(raw: &str) -> EntityId {
        EntityId::from_attribute("data-turno", Some(raw)).unwrap()
    }

    #[test]
    fn substitutes_identifier_for_sentinel() {
        let template = UrlTemplate::parse("/materias/turno/borrar/31415926535/", SENTINEL).unwrap();
        assert_eq!(template.build(&id("42")), "/materias/turno/borrar/42/");
    }

    #[test]
    fn identifier_text_is_kept_verbatim() {
        let template = UrlTemplate::parse("/materias/turno/borrar/31415926535/", SENTINEL).unwrap();
        assert_eq!(template.build(&id("007")), "/materias/turno/borrar/007/");
        assert_eq!(
            template.build(&id("123456789012345678901234567890")),
            "/materias/turno/borrar/123456789012345678901234567890/"
        );
    }

    #[test]
    fn rebuilding_from_same_inputs_is_stable() {
        let template = UrlTemplate::parse("/encuestas/habilitacion/31415926535/borrar?next=/x", SENTINEL).unwrap();
        let first = template.build(&id("7"));
        let second = template.build(&id("7"));
        assert_eq!(first, second);
        assert_eq!(first, "/encuestas/habilitacion/7/borrar?next=/x");
    }

    #[test]
    fn sentinel_at_edges() {
        let template = UrlTemplate::parse("31415926535", SENTINEL).unwrap();
        assert_eq!(template, UrlTemplate::from_parts("", ""));
        assert_eq!(template.build(&id("3")), "3");
    }

    #[test]
    fn template_without_sentinel_is_rejected() {
        let err = UrlTemplate::parse("/materias/turno/borrar/", SENTINEL).unwrap_err();
        assert!(matches!(err, UiError::SentinelNotFound { .. }));
    }

    #[test]
    fn repeated_sentinel_is_rejected() {
        let err = UrlTemplate::parse("/a/31415926535/b/31415926535", SENTINEL).unwrap_err();
        assert_eq!(
            err,
            UiError::AmbiguousSentinel {
                template: "/a/31415926535/b/31415926535".to_string(),
                sentinel: SENTINEL.to_string(),
                count: 2,
            }
        );
    }

    #[test]
    fn empty_sentinel_is_rejected() {
        assert_eq!(UrlTemplate::parse("/a/", "").unwrap_err(), UiError::EmptySentinel);
    }

    #[test]
    fn identifier_must_be_present() {
        assert!(matches!(
            EntityId::from_attribute("data-turno", None),
            Err(UiError::MissingIdentifier { .. })
        ));
        assert!(matches!(
            EntityId::from_attribute("data-turno", Some("   ")),
            Err(UiError::MissingIdentifier { .. })
        ));
        assert_eq!(id(" 15 ").as_str(), "15");
    }

    #[test]
    fn identifier_must_be_plain_digits() {
        for raw in ["12a", "+5", "-5", "1 2", "١٢"] {
            assert!(
                matches!(
                    EntityId::from_attribute("data-turno", Some(raw)),
                    Err(UiError::InvalidIdentifier { .. })
                ),
                "'{}' debería rechazarse",
                raw
            );
        }
    }
}
