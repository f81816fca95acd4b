// ============================================================================
// REGISTRATION - Evitar registrar dos veces el mismo elemento
// ============================================================================
// Cada elemento guarda en data-registrado-<marca> la lista de claves con las
// que ya fue registrado (una por línea). Un disparador puede servir a dos
// destinos distintos; lo que no puede es enlazarse dos veces al mismo.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

const KEY_SEPARATOR: char = '\n';

/// Resultado de intentar registrar un destino (diálogo o panel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// La página no tiene el elemento: no es un error
    Absent,
    AlreadyRegistered,
    /// Registrado con n disparadores
    Bound(usize),
}

impl Registration {
    pub fn bound(self) -> usize {
        match self {
            Registration::Bound(n) => n,
            _ => 0,
        }
    }
}

/// Clave de un disparador para un destino concreto
pub fn trigger_key(kind: &str, target_selector: &str) -> String {
    format!("{}:{}", kind, target_selector)
}

pub fn has_key(list: &str, key: &str) -> bool {
    list.split(KEY_SEPARATOR).any(|k| k == key)
}

pub fn with_key(list: Option<&str>, key: &str) -> String {
    match list {
        Some(list) if !list.is_empty() => {
            if has_key(list, key) {
                list.to_string()
            } else {
                format!("{}{}{}", list, KEY_SEPARATOR, key)
            }
        }
        _ => key.to_string(),
    }
}

fn attribute_name(marker: &str) -> String {
    format!("data-registrado-{}", marker)
}

pub fn is_registered(element: &Element, marker: &str, key: &str) -> bool {
    element
        .get_attribute(&attribute_name(marker))
        .map(|list| has_key(&list, key))
        .unwrap_or(false)
}

pub fn mark_registered(element: &Element, marker: &str, key: &str) -> Result<(), JsValue> {
    let attribute = attribute_name(marker);
    let current = element.get_attribute(&attribute);
    element.set_attribute(&attribute, &with_key(current.as_deref(), key))
}

/// Registrar un destino que puede no existir.
/// La marca se pone solo si `setup` terminó bien, así un registro fallido
/// puede reintentarse.
pub fn register_target<T, E, R, S, M>(
    target: Option<T>,
    is_registered: R,
    setup: S,
    mark: M,
) -> Result<Registration, E>
where
    R: FnOnce(&T) -> bool,
    S: FnOnce(&T) -> Result<usize, E>,
    M: FnOnce(&T) -> Result<(), E>,
{
    let target = match target {
        Some(target) => target,
        None => return Ok(Registration::Absent),
    };
    if is_registered(&target) {
        return Ok(Registration::AlreadyRegistered);
    }
    let bound = setup(&target)?;
    mark(&target)?;
    Ok(Registration::Bound(bound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Elemento de prueba: solo guarda su lista de marcas
    struct FakeTarget {
        marks: RefCell<Option<String>>,
        setups: Cell<usize>,
    }

    impl FakeTarget {
        fn new() -> Self {
            Self { marks: RefCell::new(None), setups: Cell::new(0) }
        }

        fn register(&self, fail: bool) -> Result<Registration, String> {
            register_target(
                Some(self),
                |t| t.marks.borrow().as_deref().map(|l| has_key(l, "dialogo")).unwrap_or(false),
                |t| {
                    t.setups.set(t.setups.get() + 1);
                    if fail { Err("falló".to_string()) } else { Ok(2) }
                },
                |t| {
                    let next = with_key(t.marks.borrow().as_deref(), "dialogo");
                    *t.marks.borrow_mut() = Some(next);
                    Ok(())
                },
            )
        }
    }

    #[test]
    fn absent_target_is_a_silent_no_op() {
        let setups = Cell::new(0);
        let result: Result<Registration, String> = register_target(
            None::<&str>,
            |_| false,
            |_| {
                setups.set(setups.get() + 1);
                Ok(1)
            },
            |_| Ok(()),
        );
        assert_eq!(result, Ok(Registration::Absent));
        assert_eq!(result.unwrap().bound(), 0);
        assert_eq!(setups.get(), 0);
    }

    #[test]
    fn second_registration_is_skipped() {
        let target = FakeTarget::new();
        assert_eq!(target.register(false), Ok(Registration::Bound(2)));
        assert_eq!(target.register(false), Ok(Registration::AlreadyRegistered));
        assert_eq!(target.setups.get(), 1);
    }

    #[test]
    fn failed_setup_leaves_target_unmarked() {
        let target = FakeTarget::new();
        assert_eq!(target.register(true), Err("falló".to_string()));
        assert!(target.marks.borrow().is_none());
        assert_eq!(target.register(false), Ok(Registration::Bound(2)));
        assert_eq!(target.setups.get(), 2);
    }

    #[test]
    fn trigger_keys_are_scoped_per_target() {
        let dialog = trigger_key("dialogo", ".borrar_turno_dialogo");
        let panel = trigger_key("panel", "#escondible");

        let list = with_key(None, &dialog);
        assert!(has_key(&list, &dialog));
        assert!(!has_key(&list, &panel));

        let list = with_key(Some(&list), &panel);
        assert!(has_key(&list, &dialog));
        assert!(has_key(&list, &panel));
        assert_eq!(with_key(Some(&list), &panel), list);
    }

    #[test]
    fn selectors_with_spaces_do_not_collide() {
        let a = trigger_key("dialogo", "#administrar_materia .dialogo");
        let b = trigger_key("dialogo", ".dialogo");
        let list = with_key(None, &a);
        assert!(!has_key(&list, &b));
    }
}
