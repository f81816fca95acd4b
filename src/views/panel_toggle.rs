// ============================================================================
// PANEL TOGGLE VIEW - Paneles que se muestran/ocultan con transición
// ============================================================================
// Equivalente a toggle("blind"): se anima max-height (blind) u opacity
// (fade) con una transición CSS y un Timeout limpia los estilos al final.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{
    as_html_element, hide_element, is_hidden, is_registered, mark_registered, on_click,
    query_selector, query_selector_all, register_target, set_attribute, show_element,
    trigger_key, window, Registration,
};
use crate::models::PanelToggleSpec;
use crate::state::Visibility;
use crate::utils::constants::{PANEL_MARKER, TRIGGER_MARKER};
use crate::viewmodels::PanelViewModel;

/// Animación en curso de un panel
#[derive(Default)]
struct PanelAnimation {
    timeout: RefCell<Option<Timeout>>,
    running: Rc<Cell<bool>>,
}

/// Registrar un toggle de panel. Devuelve cuántos disparadores se enlazaron.
pub fn register_panel_toggle(spec: &PanelToggleSpec) -> Result<usize, JsValue> {
    let registration = register_target(
        query_selector(&spec.panel_selector)?,
        |panel| is_registered(panel, PANEL_MARKER, PANEL_MARKER),
        |panel| setup_panel(spec, panel),
        |panel| mark_registered(panel, PANEL_MARKER, PANEL_MARKER),
    )?;

    match registration {
        Registration::Absent => {
            log::debug!("[PANEL] '{}' no está en esta página", spec.panel_selector);
        }
        Registration::AlreadyRegistered => {
            log::warn!("⚠️ [PANEL] '{}' ya estaba registrado, ignorando", spec.panel_selector);
        }
        Registration::Bound(bound) => {
            log::info!(
                "✅ [PANEL] '{}' listo ({:?}, {} disparador(es))",
                spec.panel_selector,
                spec.transition,
                bound
            );
        }
    }
    Ok(registration.bound())
}

fn setup_panel(spec: &PanelToggleSpec, panel: &Element) -> Result<usize, JsValue> {
    let initial = if is_hidden(panel) { Visibility::Closed } else { Visibility::Open };
    let vm = PanelViewModel::new(spec, initial);

    let key = trigger_key(PANEL_MARKER, &spec.panel_selector);
    let mut triggers: Vec<Element> = Vec::new();
    for trigger in query_selector_all(&spec.trigger_selector)? {
        if is_registered(&trigger, TRIGGER_MARKER, &key) {
            log::warn!(
                "⚠️ [PANEL] disparador '{}' ya enlazado a '{}'",
                spec.trigger_selector,
                spec.panel_selector
            );
            continue;
        }
        triggers.push(trigger);
    }

    set_expanded(&triggers, initial);

    {
        let panel = panel.clone();
        let triggers = triggers.clone();
        let vm_view = vm.clone();
        let animation = Rc::new(PanelAnimation::default());
        vm.on_visibility_change(move |visibility| {
            set_expanded(&triggers, *visibility);
            if let Err(e) = animate(&panel, *visibility, &vm_view, &animation) {
                log::error!("❌ [PANEL] Error animando panel: {:?}", e);
            }
        });
    }

    for trigger in &triggers {
        let vm = vm.clone();
        on_click(trigger, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let visibility = vm.toggle();
            log::debug!("[PANEL] toggle -> {:?}", visibility);
        })?;
        mark_registered(trigger, TRIGGER_MARKER, &key)?;
    }

    Ok(triggers.len())
}

fn set_expanded(triggers: &[Element], visibility: Visibility) {
    let value = if visibility.is_open() { "true" } else { "false" };
    for trigger in triggers {
        if let Err(e) = set_attribute(trigger, "aria-expanded", value) {
            log::warn!("⚠️ [PANEL] No se pudo actualizar aria-expanded: {:?}", e);
        }
    }
}

fn animate(
    panel: &Element,
    target: Visibility,
    vm: &PanelViewModel,
    animation: &PanelAnimation,
) -> Result<(), JsValue> {
    // Cancelar la finalización pendiente: el nuevo toggle parte de donde quedó
    animation.timeout.borrow_mut().take();
    let was_running = animation.running.replace(false);

    let in_flight = match vm.transition().css_property() {
        Some(property) if was_running => computed_value(panel, property),
        _ => None,
    };

    let html = as_html_element(panel)?;
    if target.is_open() {
        show_element(panel)?;
    }

    let plan = match vm.plan(target, html.scroll_height(), in_flight.as_deref()) {
        Some(plan) => plan,
        None => {
            clear_transition_styles(panel)?;
            return match target {
                Visibility::Open => show_element(panel),
                Visibility::Closed => hide_element(panel),
            };
        }
    };

    let style = html.style();
    style.set_property("transition", "none")?;
    style.set_property("overflow", "hidden")?;
    style.set_property(plan.property, &plan.start)?;
    // Forzar reflow para que el navegador registre el valor inicial
    let _ = html.offset_height();
    style.set_property(
        "transition",
        &format!("{} {}ms ease", plan.property, vm.duration_ms()),
    )?;
    style.set_property(plan.property, &plan.end)?;

    animation.running.set(true);
    let running = animation.running.clone();
    let panel = panel.clone();
    let hide_on_finish = plan.hide_on_finish;
    let timeout = Timeout::new(vm.duration_ms(), move || {
        running.set(false);
        let result = clear_transition_styles(&panel).and_then(|_| {
            if hide_on_finish {
                hide_element(&panel)
            } else {
                Ok(())
            }
        });
        if let Err(e) = result {
            log::error!("❌ [PANEL] Error finalizando transición: {:?}", e);
        }
    });
    *animation.timeout.borrow_mut() = Some(timeout);
    Ok(())
}

fn computed_value(panel: &Element, property: &str) -> Option<String> {
    window()?
        .get_computed_style(panel)
        .ok()??
        .get_property_value(property)
        .ok()
}

fn clear_transition_styles(panel: &Element) -> Result<(), JsValue> {
    let style = as_html_element(panel)?.style();
    for property in ["transition", "overflow", "max-height", "opacity"] {
        style.remove_property(property)?;
    }
    Ok(())
}
