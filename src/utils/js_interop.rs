// ============================================================================
// JS INTEROP - Plugins jQuery opcionales
// ============================================================================
// Los plugins pueden no estar cargados en la página: se buscan con
// js_sys::Reflect en lugar de un extern "C" que fallaría al importar.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use js_sys::{Function, Object, Reflect};

/// Función global `jQuery` si existe
fn jquery() -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str("jQuery"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// `jQuery.fn.<plugin>` está definido
pub fn has_jquery_plugin(plugin: &str) -> bool {
    jquery()
        .and_then(|jq| Reflect::get(&jq, &JsValue::from_str("fn")).ok())
        .and_then(|proto| Reflect::get(&proto, &JsValue::from_str(plugin)).ok())
        .map(|f| f.is_function())
        .unwrap_or(false)
}

/// `jQuery(element).datetimepicker({ format })`
pub fn init_datetimepicker(element: &Element, format: &str) -> Result<(), JsValue> {
    let jq = jquery().ok_or_else(|| JsValue::from_str("jQuery no está cargado"))?;
    let wrapped = jq.call1(&JsValue::NULL, element)?;
    let plugin = Reflect::get(&wrapped, &JsValue::from_str("datetimepicker"))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str("datetimepicker no es una función"))?;

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("format"), &JsValue::from_str(format))?;
    plugin.call1(&wrapped, &options)?;
    Ok(())
}
