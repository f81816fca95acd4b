// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener formulario por ID (None si el id existe pero no es un <form>)
pub fn get_form_by_id(id: &str) -> Option<HtmlFormElement> {
    get_element_by_id(id)?.dyn_into::<HtmlFormElement>().ok()
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Query selector (primer elemento que coincide)
pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

/// Query selector all (todos los elementos que coinciden, en orden de documento)
pub fn query_selector_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Acceso a `style` para elementos HTML
pub fn as_html_element(element: &Element) -> Result<&HtmlElement, JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))
}

/// Oculto si tiene `hidden` o si el CSS calculado deja `display: none`
pub fn is_hidden(element: &Element) -> bool {
    if element.has_attribute("hidden") {
        return true;
    }
    window()
        .and_then(|w| w.get_computed_style(element).ok().flatten())
        .and_then(|style| style.get_property_value("display").ok())
        .map(|display| display == "none")
        .unwrap_or(false)
}

/// Mostrar elemento aunque una hoja de estilos lo oculte
pub fn show_element(element: &Element) -> Result<(), JsValue> {
    element.remove_attribute("hidden")?;
    let style = as_html_element(element)?.style();
    style.remove_property("display")?;
    if is_hidden(element) {
        style.set_property("display", "block")?;
    }
    Ok(())
}

/// Ocultar elemento
pub fn hide_element(element: &Element) -> Result<(), JsValue> {
    as_html_element(element)?.style().remove_property("display")?;
    element.set_attribute("hidden", "")
}
