// ============================================================================
// DATETIME FIELD VIEW - Campos .datepicker de encuestas
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use crate::dom::{add_class, is_registered, mark_registered, on_event, query_selector_all, remove_class};
use crate::models::DateTimeFieldSpec;
use crate::utils::constants::{DATE_MARKER, INVALID_DATE_CLASS};
use crate::utils::i18n::{page_language, t};
use crate::utils::js_interop::{has_jquery_plugin, init_datetimepicker};
use crate::viewmodels::DateTimeFieldViewModel;

/// Registrar los campos de fecha. Devuelve cuántos inputs se enlazaron.
pub fn register_datetime_fields(spec: &DateTimeFieldSpec) -> Result<usize, JsValue> {
    let vm = Rc::new(DateTimeFieldViewModel::new(spec));
    let with_plugin = has_jquery_plugin("datetimepicker");
    if !with_plugin {
        log::debug!("[FECHA] datetimepicker no disponible, solo validación");
    }

    let mut bound = 0;
    for element in query_selector_all(&spec.selector)? {
        let input = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => input,
            Err(_) => {
                log::warn!("⚠️ [FECHA] '{}' coincide con algo que no es un <input>", spec.selector);
                continue;
            }
        };
        if is_registered(&input, DATE_MARKER, DATE_MARKER) {
            continue;
        }

        if with_plugin {
            if let Err(e) = init_datetimepicker(&input, vm.widget_format()) {
                log::warn!("⚠️ [FECHA] datetimepicker falló: {:?}", e);
            }
        }

        let vm = vm.clone();
        let field = input.clone();
        on_event(&input, "change", move |_e: web_sys::Event| {
            validate_field(&field, &vm);
        })?;
        mark_registered(&input, DATE_MARKER, DATE_MARKER)?;
        bound += 1;
    }

    if bound > 0 {
        log::info!("✅ [FECHA] {} campo(s) '{}' registrados", bound, spec.selector);
    }
    Ok(bound)
}

fn validate_field(input: &HtmlInputElement, vm: &DateTimeFieldViewModel) {
    match vm.validate(&input.value()) {
        Ok(date) => {
            if let Some(date) = date {
                input.set_value(&vm.normalize(&date));
            }
            input.set_custom_validity("");
            if let Err(e) = remove_class(input, INVALID_DATE_CLASS) {
                log::warn!("⚠️ [FECHA] No se pudo quitar '{}': {:?}", INVALID_DATE_CLASS, e);
            }
        }
        Err(err) => {
            log::debug!("[FECHA] {}", err);
            input.set_custom_validity(&t("fecha_invalida", &page_language()));
            if let Err(e) = add_class(input, INVALID_DATE_CLASS) {
                log::warn!("⚠️ [FECHA] No se pudo marcar '{}': {:?}", INVALID_DATE_CLASS, e);
            }
        }
    }
}
