// ============================================================================
// NAVIGATION SERVICE - Ejecuta la acción confirmada
// ============================================================================
// Navegar termina el contexto de la página; enviar un formulario también.
// ============================================================================

use crate::dom::{get_form_by_id, window};
use crate::error::{UiError, UiResult};
use crate::viewmodels::Outcome;

pub struct NavigationService;

impl NavigationService {
    pub fn execute(outcome: &Outcome) -> UiResult<()> {
        match outcome {
            Outcome::Navigate(url) => Self::navigate(url),
            Outcome::SubmitForm(form_id) => Self::submit_form(form_id),
        }
    }

    /// Navegación completa de la página
    pub fn navigate(url: &str) -> UiResult<()> {
        log::info!("➡️ [NAVEGACION] Navegando a {}", url);
        let window = window().ok_or_else(|| UiError::Js("No window".to_string()))?;
        window.location().assign(url)?;
        Ok(())
    }

    pub fn submit_form(form_id: &str) -> UiResult<()> {
        let form = get_form_by_id(form_id).ok_or_else(|| UiError::MissingForm {
            form_id: form_id.to_string(),
        })?;
        log::info!("📤 [NAVEGACION] Enviando formulario #{}", form_id);
        form.submit()?;
        Ok(())
    }
}
