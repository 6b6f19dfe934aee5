//! Position event observer

use super::positioned::Positioned;

/// Event name used when a marker completes
pub const POSITION_EVENT: &str = "position";

/// Observer injected into a cursor
///
/// Any `Fn(&str, &dyn Positioned)` closure is an emitter.
pub trait Emitter {
    fn emit(&self, event: &str, item: &dyn Positioned);
}

impl<F> Emitter for F
where
    F: Fn(&str, &dyn Positioned),
{
    fn emit(&self, event: &str, item: &dyn Positioned) {
        self(event, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Positions;
    use std::cell::RefCell;

    #[test]
    fn test_closure_is_emitter() {
        let seen = RefCell::new(Vec::new());
        let emitter = |event: &str, item: &dyn Positioned| {
            seen.borrow_mut()
                .push((event.to_string(), item.get_position("position").is_some()));
        };

        emitter.emit(POSITION_EVENT, &Positions::new());
        assert_eq!(seen.into_inner(), vec![("position".to_string(), false)]);
    }
}
