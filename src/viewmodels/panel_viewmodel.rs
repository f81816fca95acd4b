// ============================================================================
// PANEL VIEWMODEL - Mostrar/ocultar paneles auxiliares
// ============================================================================

use crate::models::{PanelToggleSpec, Transition};
use crate::state::{ReactiveState, Visibility};

/// Valores CSS de una transición: la vista los aplica y al terminar limpia
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPlan {
    pub property: &'static str,
    pub start: String,
    pub end: String,
    /// Ocultar el panel cuando termine la transición
    pub hide_on_finish: bool,
}

impl TransitionPlan {
    /// `full_height` es el scrollHeight del panel ya visible.
    /// `in_flight` es el valor calculado de la propiedad si se interrumpió
    /// una transición anterior: la nueva parte de ahí.
    /// None si no hay nada que animar.
    pub fn compute(
        transition: Transition,
        duration_ms: u32,
        target: Visibility,
        full_height: i32,
        in_flight: Option<&str>,
    ) -> Option<Self> {
        let property = transition.css_property()?;
        if duration_ms == 0 {
            return None;
        }

        let (closed_value, open_value) = match transition {
            Transition::Blind => ("0px".to_string(), format!("{}px", full_height.max(0))),
            _ => ("0".to_string(), "1".to_string()),
        };

        let (default_start, end) = match target {
            Visibility::Open => (closed_value, open_value),
            Visibility::Closed => (open_value, closed_value),
        };
        let start = in_flight
            .map(str::trim)
            .filter(|v| !v.is_empty() && *v != "none")
            .map(str::to_string)
            .unwrap_or(default_start);

        Some(Self {
            property,
            start,
            end,
            hide_on_finish: !target.is_open(),
        })
    }
}

#[derive(Clone)]
pub struct PanelViewModel {
    visibility: ReactiveState<Visibility>,
    transition: Transition,
    duration_ms: u32,
}

impl PanelViewModel {
    /// `initial` sale del DOM: un panel puede arrancar visible
    pub fn new(spec: &PanelToggleSpec, initial: Visibility) -> Self {
        Self {
            visibility: ReactiveState::new(initial),
            transition: spec.transition,
            duration_ms: spec.duration_ms,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.get()
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Duración efectiva; una transición instantánea no espera
    pub fn duration_ms(&self) -> u32 {
        match self.transition {
            Transition::Instant => 0,
            _ => self.duration_ms,
        }
    }

    pub fn on_visibility_change<F>(&self, callback: F)
    where
        F: Fn(&Visibility) + 'static,
    {
        self.visibility.subscribe(callback);
    }

    pub fn toggle(&self) -> Visibility {
        self.visibility.update(|v| *v = v.toggled());
        self.visibility()
    }

    pub fn plan(&self, target: Visibility, full_height: i32, in_flight: Option<&str>) -> Option<TransitionPlan> {
        TransitionPlan::compute(self.transition, self.duration_ms(), target, full_height, in_flight)
    }
}
