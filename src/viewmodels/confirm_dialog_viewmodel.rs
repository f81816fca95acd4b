// ============================================================================
// CONFIRM DIALOG VIEWMODEL - Estado y lógica de un diálogo de confirmación
// ============================================================================
// Sin DOM: la vista lee atributos, arma el ActivationContext y ejecuta el
// Outcome que devuelve confirm().
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::error::{UiError, UiResult};
use crate::models::{DialogAction, EntityId, UrlTemplate};
use crate::state::{ReactiveState, Visibility};

/// Lo que se leyó del DOM al activar un disparador
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivationContext {
    /// Valor del atributo de id en el disparador
    pub identifier: Option<String>,
    /// Plantilla de URL guardada en el diálogo
    pub template: Option<String>,
    /// Si el formulario a enviar existe en la página
    pub form_present: bool,
}

impl ActivationContext {
    /// Armar el contexto a partir de lecturas del DOM.
    /// `trigger_attr` y `dialog_attr` leen atributos del disparador y del
    /// diálogo; `form_exists` busca un formulario por id.
    pub fn read<T, D, F>(action: &DialogAction, trigger_attr: T, dialog_attr: D, form_exists: F) -> Self
    where
        T: Fn(&str) -> Option<String>,
        D: Fn(&str) -> Option<String>,
        F: Fn(&str) -> bool,
    {
        match action {
            DialogAction::Navigate { id_attribute, url_attribute, .. } => Self {
                identifier: trigger_attr(id_attribute),
                template: dialog_attr(url_attribute),
                form_present: false,
            },
            DialogAction::SubmitForm { form_id } => Self {
                form_present: form_exists(form_id),
                ..Default::default()
            },
            DialogAction::OpenOnly => Self::default(),
        }
    }
}

/// Acción final tras confirmar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Navigate(String),
    SubmitForm(String),
}

#[derive(Clone)]
pub struct ConfirmDialogViewModel {
    action: DialogAction,
    visibility: ReactiveState<Visibility>,
    pending: Rc<RefCell<Option<Outcome>>>,
}

impl ConfirmDialogViewModel {
    pub fn new(action: DialogAction) -> Self {
        Self {
            action,
            visibility: ReactiveState::new(Visibility::Closed),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn action(&self) -> &DialogAction {
        &self.action
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.get()
    }

    /// La vista se suscribe para mostrar/ocultar el elemento
    pub fn on_visibility_change<F>(&self, callback: F)
    where
        F: Fn(&Visibility) + 'static,
    {
        self.visibility.subscribe(callback);
    }

    /// Calcular el Outcome para esta activación sin tocar el estado
    pub fn prepare(&self, ctx: &ActivationContext) -> UiResult<Option<Outcome>> {
        match &self.action {
            DialogAction::Navigate { id_attribute, url_attribute, sentinel } => {
                let id = EntityId::from_attribute(id_attribute, ctx.identifier.as_deref())?;
                let raw = ctx
                    .template
                    .as_deref()
                    .filter(|t| !t.trim().is_empty())
                    .ok_or_else(|| UiError::MissingTemplate {
                        attribute: url_attribute.clone(),
                    })?;
                let template = UrlTemplate::parse(raw, sentinel)?;
                Ok(Some(Outcome::Navigate(template.build(&id))))
            }
            DialogAction::SubmitForm { form_id } => {
                if !ctx.form_present {
                    return Err(UiError::MissingForm {
                        form_id: form_id.clone(),
                    });
                }
                Ok(Some(Outcome::SubmitForm(form_id.clone())))
            }
            DialogAction::OpenOnly => Ok(None),
        }
    }

    /// Abrir el diálogo y reconfigurar su acción.
    /// Si el markup no permite construir la acción, el diálogo sigue cerrado.
    pub fn activate(&self, ctx: &ActivationContext) -> UiResult<()> {
        let outcome = self.prepare(ctx)?;
        *self.pending.borrow_mut() = outcome;
        self.visibility.set(Visibility::Open);
        Ok(())
    }

    /// Cerrar y devolver la acción a ejecutar
    pub fn confirm(&self) -> Option<Outcome> {
        if !self.visibility().is_open() {
            return None;
        }
        let outcome = self.pending.borrow_mut().take();
        self.visibility.set(Visibility::Closed);
        outcome
    }

    pub fn dismiss(&self) {
        self.pending.borrow_mut().take();
        if self.visibility().is_open() {
            self.visibility.set(Visibility::Closed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn turno_ctx(id: Option<&str>) -> ActivationContext {
        ActivationContext {
            identifier: id.map(str::to_string),
            template: Some("/materias/turno/borrar/31415926535/".to_string()),
            form_present: false,
        }
    }

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: std::collections::HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn new_dialog_starts_closed() {
        for action in [
            DialogAction::navigate("data-turno"),
            DialogAction::submit_form("cambio_de_carga"),
            DialogAction::OpenOnly,
        ] {
            let vm = ConfirmDialogViewModel::new(action);
            assert_eq!(vm.visibility(), Visibility::Closed);
            assert_eq!(vm.confirm(), None);
        }
    }

    #[test]
    fn context_reads_attributes_named_by_action() {
        let trigger = attrs(&[("data-horario", "31"), ("data-turno", "99")]);
        let dialog = attrs(&[("url", "/materias/horario/borrar/31415926535/")]);
        let ctx = ActivationContext::read(&DialogAction::navigate("data-horario"), &trigger, &dialog, |_| {
            panic!("navegar no busca formularios")
        });
        assert_eq!(ctx.identifier.as_deref(), Some("31"));
        assert_eq!(ctx.template.as_deref(), Some("/materias/horario/borrar/31415926535/"));
        assert!(!ctx.form_present);

        let ctx = ActivationContext::read(
            &DialogAction::submit_form("cambio_de_carga"),
            &trigger,
            &dialog,
            |id| id == "cambio_de_carga",
        );
        assert_eq!(ctx, ActivationContext { form_present: true, ..Default::default() });

        let ctx = ActivationContext::read(&DialogAction::OpenOnly, &trigger, &dialog, |_| true);
        assert_eq!(ctx, ActivationContext::default());
    }

    #[test]
    fn context_with_custom_url_attribute() {
        let action = DialogAction::Navigate {
            id_attribute: "data-habilitacion".to_string(),
            url_attribute: "data-url".to_string(),
            sentinel: "0000".to_string(),
        };
        let trigger = attrs(&[("data-habilitacion", "12")]);
        let dialog = attrs(&[("url", "/ignorada/"), ("data-url", "/encuestas/0000/borrar")]);
        let ctx = ActivationContext::read(&action, &trigger, &dialog, |_| false);
        let vm = ConfirmDialogViewModel::new(action);
        vm.activate(&ctx).unwrap();
        assert_eq!(vm.confirm(), Some(Outcome::Navigate("/encuestas/12/borrar".to_string())));
    }

    #[test]
    fn activation_opens_and_confirm_navigates() {
        let vm = ConfirmDialogViewModel::new(DialogAction::navigate("data-turno"));
        assert_eq!(vm.visibility(), Visibility::Closed);

        vm.activate(&turno_ctx(Some("42"))).unwrap();
        assert_eq!(vm.visibility(), Visibility::Open);

        let outcome = vm.confirm();
        assert_eq!(outcome, Some(Outcome::Navigate("/materias/turno/borrar/42/".to_string())));
        assert_eq!(vm.visibility(), Visibility::Closed);
        assert_eq!(vm.confirm(), None);
    }

    #[test]
    fn missing_identifier_keeps_dialog_closed() {
        let vm = ConfirmDialogViewModel::new(DialogAction::navigate("data-turno"));
        let err = vm.activate(&turno_ctx(None)).unwrap_err();
        assert!(matches!(err, UiError::MissingIdentifier { .. }));
        assert_eq!(vm.visibility(), Visibility::Closed);
        assert_eq!(vm.confirm(), None);
    }

    #[test]
    fn template_without_sentinel_keeps_dialog_closed() {
        let vm = ConfirmDialogViewModel::new(DialogAction::navigate("data-horario"));
        let ctx = ActivationContext {
            identifier: Some("9".to_string()),
            template: Some("/materias/horario/borrar/".to_string()),
            form_present: false,
        };
        assert!(matches!(vm.activate(&ctx), Err(UiError::SentinelNotFound { .. })));
        assert!(!vm.visibility().is_open());

        let ctx = ActivationContext { template: None, ..ctx };
        assert!(matches!(vm.activate(&ctx), Err(UiError::MissingTemplate { .. })));
    }

    #[test]
    fn reactivation_reapplies_latest_identifier() {
        let vm = ConfirmDialogViewModel::new(DialogAction::navigate("data-turno"));
        vm.activate(&turno_ctx(Some("1"))).unwrap();
        vm.activate(&turno_ctx(Some("2"))).unwrap();
        assert_eq!(vm.confirm(), Some(Outcome::Navigate("/materias/turno/borrar/2/".to_string())));
    }

    #[test]
    fn each_activation_opens_once() {
        let vm = ConfirmDialogViewModel::new(DialogAction::navigate("data-turno"));
        let opens = Rc::new(Cell::new(0));
        {
            let opens = opens.clone();
            vm.on_visibility_change(move |v| {
                if v.is_open() {
                    opens.set(opens.get() + 1);
                }
            });
        }
        vm.activate(&turno_ctx(Some("5"))).unwrap();
        assert_eq!(opens.get(), 1);
        vm.dismiss();
        vm.activate(&turno_ctx(Some("6"))).unwrap();
        assert_eq!(opens.get(), 2);
    }

    #[test]
    fn submit_form_requires_form() {
        let vm = ConfirmDialogViewModel::new(DialogAction::submit_form("cambio_de_carga"));
        let err = vm.activate(&ActivationContext::default()).unwrap_err();
        assert_eq!(err, UiError::MissingForm { form_id: "cambio_de_carga".to_string() });

        let ctx = ActivationContext { form_present: true, ..Default::default() };
        vm.activate(&ctx).unwrap();
        assert_eq!(vm.confirm(), Some(Outcome::SubmitForm("cambio_de_carga".to_string())));
    }

    #[test]
    fn open_only_has_nothing_to_confirm() {
        let vm = ConfirmDialogViewModel::new(DialogAction::OpenOnly);
        vm.activate(&ActivationContext::default()).unwrap();
        assert!(vm.visibility().is_open());
        assert_eq!(vm.confirm(), None);
        assert_eq!(vm.visibility(), Visibility::Closed);
        vm.activate(&ActivationContext::default()).unwrap();
        vm.dismiss();
        assert_eq!(vm.visibility(), Visibility::Closed);
    }

    #[test]
    fn dismiss_discards_pending_action() {
        let vm = ConfirmDialogViewModel::new(DialogAction::navigate("data-turno"));
        vm.activate(&turno_ctx(Some("8"))).unwrap();
        vm.dismiss();
        assert_eq!(vm.confirm(), None);
        // Reabrir sin id válido no recupera la acción descartada
        assert!(vm.activate(&turno_ctx(Some(""))).is_err());
        assert_eq!(vm.confirm(), None);
    }
}
