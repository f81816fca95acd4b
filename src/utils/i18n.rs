// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;
use crate::config::CONFIG;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            translations.insert("si", "Yes");
            translations.insert("cerrar", "Close");
            translations.insert("fecha_invalida", "Use the format dd/mm/yyyy hh:mm");
        }
        _ => {
            translations.insert("si", "Sí");
            translations.insert("cerrar", "Cerrar");
            translations.insert("fecha_invalida", "Usar el formato dd/mm/aaaa hh:mm");
        }
    }

    translations
}

/// Traducir una clave
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("ES" o "EN")
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    // Fallback: devolver la clave si no hay traducción
    key.to_string()
}

/// Idioma de la página: atributo `lang` de <html> ("es-AR" -> "ES")
pub fn page_language() -> String {
    crate::dom::document()
        .and_then(|doc| doc.document_element())
        .and_then(|html| html.get_attribute("lang"))
        .map(|lang| language_code(&lang))
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| CONFIG.default_language.clone())
}

fn language_code(lang: &str) -> String {
    lang.split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_uppercase()
}
