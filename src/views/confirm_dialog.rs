// ============================================================================
// CONFIRM DIALOG VIEW - Conecta disparadores y diálogo del servidor (Rust puro)
// ============================================================================
// El diálogo es un elemento ya renderizado por el servidor. Aquí se oculta,
// se le agrega la barra de botones y se enlazan los clicks al ViewModel.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use crate::dom::{
    add_class, append_child, get_attribute, get_form_by_id, hide_element, is_registered,
    mark_registered, on_click, on_keydown, query_selector, query_selector_all, register_target,
    remove_class, set_attribute, show_element, trigger_key, ElementBuilder, Registration,
};
use crate::models::ConfirmDialogSpec;
use crate::services::NavigationService;
use crate::state::Visibility;
use crate::utils::constants::*;
use crate::utils::i18n::{page_language, t};
use crate::viewmodels::{ActivationContext, ConfirmDialogViewModel};

/// Registrar un diálogo de confirmación.
/// Devuelve cuántos disparadores quedaron enlazados; 0 si la página no
/// tiene el diálogo (no es un error).
pub fn register_confirm_dialog(spec: &ConfirmDialogSpec) -> Result<usize, JsValue> {
    let registration = register_target(
        query_selector(&spec.dialog_selector)?,
        |dialog| is_registered(dialog, DIALOG_MARKER, DIALOG_MARKER),
        |dialog| -> Result<usize, JsValue> {
            let vm = ConfirmDialogViewModel::new(spec.action.clone());
            setup_dialog(dialog, &vm)?;
            bind_triggers(spec, dialog, &vm)
        },
        |dialog| mark_registered(dialog, DIALOG_MARKER, DIALOG_MARKER),
    )?;

    match registration {
        Registration::Absent => {
            log::debug!("[DIALOGO] '{}' no está en esta página", spec.dialog_selector);
        }
        Registration::AlreadyRegistered => {
            log::warn!("⚠️ [DIALOGO] '{}' ya estaba registrado, ignorando", spec.dialog_selector);
        }
        Registration::Bound(bound) => {
            log::info!(
                "✅ [DIALOGO] '{}' listo con {} disparador(es) '{}'",
                spec.dialog_selector,
                bound,
                spec.trigger_selector
            );
        }
    }
    Ok(registration.bound())
}

fn bind_triggers(spec: &ConfirmDialogSpec, dialog: &Element, vm: &ConfirmDialogViewModel) -> Result<usize, JsValue> {
    let key = trigger_key(DIALOG_MARKER, &spec.dialog_selector);
    let mut bound = 0;
    for trigger in query_selector_all(&spec.trigger_selector)? {
        if is_registered(&trigger, TRIGGER_MARKER, &key) {
            log::warn!(
                "⚠️ [DIALOGO] disparador '{}' ya enlazado a '{}'",
                spec.trigger_selector,
                spec.dialog_selector
            );
            continue;
        }
        bind_trigger(&trigger, dialog, vm)?;
        mark_registered(&trigger, TRIGGER_MARKER, &key)?;
        bound += 1;
    }
    Ok(bound)
}

/// Estado inicial cerrado + botones + reacción a cambios de visibilidad
fn setup_dialog(dialog: &Element, vm: &ConfirmDialogViewModel) -> Result<(), JsValue> {
    add_class(dialog, DIALOG_CLASS)?;
    set_attribute(dialog, "role", "dialog")?;
    set_attribute(dialog, "tabindex", "-1")?;
    apply_visibility(dialog, Visibility::Closed)?;

    let lang = page_language();
    let buttons = ElementBuilder::new("div")?
        .class(DIALOG_BUTTONS_CLASS)
        .build();

    if vm.action().has_confirm_button() {
        let confirm_btn = ElementBuilder::new("button")?
            .class(DIALOG_CONFIRM_CLASS)
            .attr("type", "button")?
            .text(&t("si", &lang))
            .build();
        {
            let vm = vm.clone();
            on_click(&confirm_btn, move |e: web_sys::MouseEvent| {
                e.prevent_default();
                if let Some(outcome) = vm.confirm() {
                    if let Err(err) = NavigationService::execute(&outcome) {
                        log::error!("❌ [DIALOGO] No se pudo ejecutar {:?}: {}", outcome, err);
                    }
                }
            })?;
        }
        append_child(&buttons, &confirm_btn)?;
    }

    let close_btn = ElementBuilder::new("button")?
        .class(DIALOG_CLOSE_CLASS)
        .attr("type", "button")?
        .attr("aria-label", &t("cerrar", &lang))?
        .text("✕")
        .build();
    {
        let vm = vm.clone();
        on_click(&close_btn, move |_e: web_sys::MouseEvent| {
            vm.dismiss();
        })?;
    }
    append_child(&buttons, &close_btn)?;
    append_child(dialog, &buttons)?;

    {
        let vm = vm.clone();
        on_keydown(dialog, move |e: web_sys::KeyboardEvent| {
            if e.key() == "Escape" {
                vm.dismiss();
            }
        })?;
    }

    {
        let dialog = dialog.clone();
        vm.on_visibility_change(move |visibility| {
            if let Err(e) = apply_visibility(&dialog, *visibility) {
                log::error!("❌ [DIALOGO] Error actualizando visibilidad: {:?}", e);
            }
        });
    }

    Ok(())
}

fn bind_trigger(trigger: &Element, dialog: &Element, vm: &ConfirmDialogViewModel) -> Result<(), JsValue> {
    let trigger_el = trigger.clone();
    let dialog = dialog.clone();
    let vm = vm.clone();
    on_click(trigger, move |e: web_sys::MouseEvent| {
        e.prevent_default();
        let ctx = ActivationContext::read(
            vm.action(),
            |name| get_attribute(&trigger_el, name),
            |name| get_attribute(&dialog, name),
            |form_id| get_form_by_id(form_id).is_some(),
        );
        if let Err(err) = vm.activate(&ctx) {
            log::warn!("⚠️ [DIALOGO] No se abre el diálogo: {}", err);
        }
    })
}

fn apply_visibility(dialog: &Element, visibility: Visibility) -> Result<(), JsValue> {
    match visibility {
        Visibility::Open => {
            show_element(dialog)?;
            add_class(dialog, DIALOG_OPEN_CLASS)?;
            set_attribute(dialog, "aria-hidden", "false")?;
            if let Some(html) = dialog.dyn_ref::<web_sys::HtmlElement>() {
                if let Err(e) = html.focus() {
                    log::warn!("⚠️ [DIALOGO] No se pudo enfocar el diálogo: {:?}", e);
                }
            }
        }
        Visibility::Closed => {
            remove_class(dialog, DIALOG_OPEN_CLASS)?;
            set_attribute(dialog, "aria-hidden", "true")?;
            hide_element(dialog)?;
        }
    }
    Ok(())
}
