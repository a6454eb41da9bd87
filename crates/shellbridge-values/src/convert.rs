//! Bidirectional conversion between script values and typed lists.
//!
//! Both directions are depth-first and size-preserving, and neither mutates
//! or retains its source. Unsupported script kinds are dropped to an unset
//! (null) slot instead of failing; unrecognized or absent slots read back as
//! script null.

use tracing::trace;

use crate::list::{ListEntry, ListValue};
use crate::script::ScriptValue;

/// Convert a script array into a typed list of the same length.
///
/// A zero-length source produces an empty list without touching any slot.
#[must_use]
pub fn to_list(values: &[ScriptValue]) -> ListValue {
    let mut list = ListValue::with_len(values.len());
    for (index, value) in values.iter().enumerate() {
        set_slot(&mut list, index, value);
    }
    list
}

/// Transfer one script value into a list slot.
///
/// Scalars map tag-for-tag, arrays recurse, and anything else (null, a
/// function, an unknown engine kind) leaves the slot unset.
pub fn set_slot(list: &mut ListValue, index: usize, value: &ScriptValue) {
    match value {
        ScriptValue::Array(items) => list.set(index, ListEntry::List(to_list(items))),
        ScriptValue::String(s) => list.set(index, ListEntry::String(s.clone())),
        ScriptValue::Bool(b) => list.set(index, ListEntry::Bool(*b)),
        ScriptValue::Int(i) => list.set(index, ListEntry::Int(*i)),
        ScriptValue::Double(d) => list.set(index, ListEntry::Double(*d)),
        ScriptValue::Null | ScriptValue::Function(_) => {
            trace!(index, "script value has no portable representation, slot left unset");
        },
    }
}

/// Convert the list slot at `index` back into a script value.
///
/// A nested list becomes an array of the nested length, filled recursively;
/// an absent or out-of-range slot becomes null.
#[must_use]
pub fn to_script(list: &ListValue, index: usize) -> ScriptValue {
    match list.get(index) {
        ListEntry::List(nested) => {
            let items = (0..nested.len()).map(|i| to_script(nested, i)).collect();
            ScriptValue::Array(items)
        },
        ListEntry::Bool(b) => ScriptValue::Bool(*b),
        ListEntry::Int(i) => ScriptValue::Int(*i),
        ListEntry::Double(d) => ScriptValue::Double(*d),
        ListEntry::String(s) => ScriptValue::String(s.clone()),
        ListEntry::Null => ScriptValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::script::ScriptFunction;

    struct Noop;

    impl ScriptFunction for Noop {
        fn invoke(&self, _args: &[ScriptValue]) {}
    }

    fn round_trip(values: &[ScriptValue]) -> Vec<ScriptValue> {
        let list = to_list(values);
        (0..list.len()).map(|i| to_script(&list, i)).collect()
    }

    #[test]
    fn scalars_round_trip() {
        let source = vec![
            ScriptValue::Bool(true),
            ScriptValue::Int(-7),
            ScriptValue::Double(2.5),
            ScriptValue::String("hello".into()),
            ScriptValue::Null,
        ];
        assert_eq!(round_trip(&source), source);
    }

    #[test]
    fn nested_arrays_round_trip() {
        let source = vec![
            ScriptValue::Array(vec![
                ScriptValue::Int(1),
                ScriptValue::Array(vec![ScriptValue::String("deep".into()), ScriptValue::Null]),
            ]),
            ScriptValue::Array(vec![]),
        ];
        assert_eq!(round_trip(&source), source);
    }

    #[test]
    fn empty_array_converts_to_empty_list() {
        let list = to_list(&[]);
        assert!(list.is_empty());
        assert_eq!(to_script(&list, 0), ScriptValue::Null);
    }

    #[test]
    fn empty_nested_list_converts_to_empty_array() {
        let mut list = ListValue::new();
        list.set(0, ListEntry::List(ListValue::new()));
        assert_eq!(to_script(&list, 0), ScriptValue::Array(vec![]));
    }

    #[test]
    fn functions_are_dropped_to_null() {
        let f: Rc<dyn ScriptFunction> = Rc::new(Noop);
        let source = vec![ScriptValue::Function(f), ScriptValue::Int(9)];
        let list = to_list(&source);
        assert_eq!(list.len(), 2);
        assert_eq!(*list.get(0), ListEntry::Null);
        assert_eq!(*list.get(1), ListEntry::Int(9));
    }

    #[test]
    fn size_is_preserved_per_level() {
        let source = vec![
            ScriptValue::Null,
            ScriptValue::Array(vec![ScriptValue::Null, ScriptValue::Null, ScriptValue::Null]),
        ];
        let list = to_list(&source);
        assert_eq!(list.len(), 2);
        let ListEntry::List(nested) = list.get(1) else {
            panic!("expected a nested list");
        };
        assert_eq!(nested.len(), 3);
    }

    #[test]
    fn out_of_range_slot_reads_as_null() {
        let list = to_list(&[ScriptValue::Int(1)]);
        assert_eq!(to_script(&list, 10), ScriptValue::Null);
    }
}
