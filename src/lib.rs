// ============================================================================
// DISTRIBUCION UI - Diálogos de confirmación y paneles (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: enlazan el markup renderizado por el servidor
// - ViewModels: estado + lógica UI (sin DOM, testeables)
// - Services: SOLO ejecución de la acción confirmada
// - State: Rc<RefCell> con notificaciones
// - Models: registros declarativos y plantillas de URL
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;
use crate::models::PageSetup;

thread_local! {
    static INITIALIZED: Cell<bool> = Cell::new(false);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Distribución UI ({})", CONFIG.environment);

    app::on_dom_ready(|| {
        // Registrar una sola vez por carga de página
        if INITIALIZED.with(|flag| flag.replace(true)) {
            log::warn!("⚠️ [MAIN] La página ya fue inicializada");
            return;
        }
        App::from_page().init();
    })
}

/// Inicializar con una configuración armada desde JavaScript.
/// Los elementos ya registrados se ignoran.
#[wasm_bindgen]
pub fn init_page_with_config(json: &str) -> Result<(), JsValue> {
    let setup = PageSetup::from_json(json)?;
    let report = App::new(setup).init();
    if report.failures > 0 {
        log::warn!("⚠️ [MAIN] {} registro(s) fallaron", report.failures);
    }
    Ok(())
}
