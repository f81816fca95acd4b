// ============================================================================
// APP - Punto único de inicialización de la página
// ============================================================================
// Orden fijo: diálogos, paneles, campos de fecha. Un registro que falla se
// loguea y no impide los siguientes.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::dom::get_element_by_id;
use crate::error::UiResult;
use crate::models::PageSetup;
use crate::utils::constants::PAGE_SETUP_SCRIPT_ID;
use crate::views::{register_confirm_dialog, register_datetime_fields, register_panel_toggle};

/// Resultado de inicializar una página
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub dialogs: usize,
    pub panels: usize,
    pub datetime_fields: usize,
    pub failures: usize,
}

impl InitReport {
    fn record(&mut self, what: &str, selector: &str, result: Result<usize, JsValue>) -> usize {
        match result {
            Ok(bound) => bound,
            Err(e) => {
                log::error!("❌ [APP] Error registrando {} '{}': {:?}", what, selector, e);
                self.failures += 1;
                0
            }
        }
    }
}

pub struct App {
    setup: PageSetup,
}

impl App {
    pub fn new(setup: PageSetup) -> Self {
        Self { setup }
    }

    /// Configuración embebida en la página o, si no hay, la incorporada
    pub fn from_page() -> Self {
        match read_page_setup() {
            Some(Ok(setup)) if setup.is_empty() => {
                log::warn!("⚠️ [APP] #{} no declara ningún componente", PAGE_SETUP_SCRIPT_ID);
                Self::new(setup)
            }
            Some(Ok(setup)) => {
                log::info!("📄 [APP] Usando configuración de #{}", PAGE_SETUP_SCRIPT_ID);
                Self::new(setup)
            }
            Some(Err(e)) => {
                log::warn!("⚠️ [APP] #{} inválido ({}), usando configuración incorporada", PAGE_SETUP_SCRIPT_ID, e);
                Self::new(PageSetup::builtin())
            }
            None => Self::new(PageSetup::builtin()),
        }
    }

    pub fn init(&self) -> InitReport {
        let mut report = InitReport::default();

        for spec in &self.setup.dialogs {
            let bound = report.record("diálogo", &spec.dialog_selector, register_confirm_dialog(spec));
            report.dialogs += bound;
        }
        for spec in &self.setup.panels {
            let bound = report.record("panel", &spec.panel_selector, register_panel_toggle(spec));
            report.panels += bound;
        }
        for spec in &self.setup.datetime_fields {
            let bound = report.record("campo de fecha", &spec.selector, register_datetime_fields(spec));
            report.datetime_fields += bound;
        }

        log::info!("✅ [APP] Página inicializada: {:?}", report);
        report
    }
}

fn read_page_setup() -> Option<UiResult<PageSetup>> {
    let script = get_element_by_id(PAGE_SETUP_SCRIPT_ID)?;
    let json = script.text_content().unwrap_or_default();
    Some(PageSetup::from_json(&json))
}

/// Ejecutar `f` cuando el DOM esté listo (como $(document).ready)
pub fn on_dom_ready<F>(f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let document = crate::dom::document().ok_or_else(|| JsValue::from_str("No document"))?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let closure = Closure::once(f);
    document.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    // Nota: se registra una sola vez por carga de página
    closure.forget();
    Ok(())
}
