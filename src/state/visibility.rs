// ============================================================================
// VISIBILITY - Máquina de dos estados compartida por diálogos y paneles
// ============================================================================

/// Cerrado es el estado inicial en cada carga de página
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Closed => Visibility::Open,
            Visibility::Open => Visibility::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }
}
