//! Component prop plumbing.
//!
//! Picker components take most of their configuration as loosely-shaped
//! bags of props forwarded from the host. [`PropValue`] is the typed shape
//! of one entry, [`Prop`] the literal-or-derived form most inputs accept,
//! and [`mixin_optional_props`] the declared copy from a source bag onto a
//! component's own state.

use indexmap::IndexMap;
use std::fmt::{Debug, Formatter};

/// A prop that is either a literal or derived on demand.
///
/// The explicit variants replace an "is this callable" check at the call
/// site: resolution is a match, not a capability test.
pub enum Prop<A, T> {
    Value(T),
    Derive(Box<dyn Fn(&A) -> T>),
}

impl<A, T> Prop<A, T> {
    pub fn derive(f: impl Fn(&A) -> T + 'static) -> Prop<A, T> {
        Prop::Derive(Box::new(f))
    }
}

impl<A, T: Clone> Prop<A, T> {
    /// Resolves the prop against `arg`.
    pub fn get(&self, arg: &A) -> T {
        match self {
            Prop::Value(value) => value.clone(),
            Prop::Derive(derive) => derive(arg),
        }
    }
}

impl<A, T> From<T> for Prop<A, T> {
    fn from(value: T) -> Self {
        Prop::Value(value)
    }
}

impl<A, T: Debug> Debug for Prop<A, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Prop::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Prop::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

/// An ordered string-keyed bag of props.
pub type PropMap = IndexMap<String, PropValue>;

/// One loosely-shaped component prop.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(String),
    Map(PropMap),
}

impl PropValue {
    pub fn as_map(&self) -> Option<&PropMap> {
        match self {
            PropValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Double(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<PropMap> for PropValue {
    fn from(value: PropMap) -> Self {
        PropValue::Map(value)
    }
}

/// Declares one optional prop to carry from a source bag onto a target.
pub struct PropDescriptor {
    /// Key looked up in the source and written to the target.
    pub name: &'static str,
    /// Defaults merged under the value when both are maps.
    pub mixin: Option<PropMap>,
    /// Applied to the source value before assignment.
    pub validate: Option<fn(PropValue) -> PropValue>,
}

/// Copies the declared props present in `source` onto `target`.
///
/// A value is validated first; when the descriptor carries `mixin` defaults
/// and the validated value is a map, the defaults sit under the value's own
/// keys (the value wins, default keys keep first position). Returns the
/// assigned names in declaration order, or `None` when `source` had none of
/// them.
pub fn mixin_optional_props(
    source: &PropMap,
    target: &mut PropMap,
    props: &[PropDescriptor],
) -> Option<Vec<&'static str>> {
    let mut assigned = Vec::new();
    for prop in props {
        let Some(value) = source.get(prop.name) else {
            continue;
        };
        let mut value = value.clone();
        if let Some(validate) = prop.validate {
            value = validate(value);
        }
        if let (Some(mixin), PropValue::Map(map)) = (&prop.mixin, &value) {
            let mut merged = mixin.clone();
            merged.extend(map.clone());
            value = PropValue::Map(merged);
        }
        debug_log!(PROPS: "mixin `{}`", prop.name);
        target.insert(prop.name.to_string(), value);
        assigned.push(prop.name);
    }
    if assigned.is_empty() { None } else { Some(assigned) }
}

#[test]
fn test_prop_resolution() {
    let literal = Prop::<u8, String>::from("title".to_string());
    assert_eq!(literal.get(&7), "title");

    let derived = Prop::derive(|day: &u8| format!("day {day}"));
    assert_eq!(derived.get(&7), "day 7");
}

#[test]
fn test_mixin_assigns_declared_props_only() {
    let source = prop_map! {
        "color" => "blue",
        "rows" => 2i64,
        "unrelated" => true,
    };
    let mut target = PropMap::new();
    let assigned = mixin_optional_props(
        &source,
        &mut target,
        &[
            PropDescriptor {
                name: "color",
                mixin: None,
                validate: None,
            },
            PropDescriptor {
                name: "rows",
                mixin: None,
                validate: None,
            },
            PropDescriptor {
                name: "missing",
                mixin: None,
                validate: None,
            },
        ],
    );
    assert_eq!(assigned, Some(vec!["color", "rows"]));
    assert_eq!(target, prop_map! { "color" => "blue", "rows" => 2i64 });
}

#[test]
fn test_mixin_merges_defaults_under_map_values() {
    let source = prop_map! {
        "popover" => prop_map! { "visibility" => "click" },
    };
    let mut target = PropMap::new();
    mixin_optional_props(
        &source,
        &mut target,
        &[PropDescriptor {
            name: "popover",
            mixin: Some(prop_map! { "placement" => "bottom", "visibility" => "hover" }),
            validate: None,
        }],
    );
    let popover = target["popover"].as_map().unwrap();
    // the value wins over the default, default keys keep first position
    assert_eq!(popover["visibility"], PropValue::from("click"));
    assert_eq!(popover["placement"], PropValue::from("bottom"));
    assert_eq!(
        popover.keys().collect::<Vec<_>>(),
        ["placement", "visibility"]
    );
}

#[test]
fn test_mixin_defaults_ignored_for_non_map_values() {
    let source = prop_map! { "popover" => true };
    let mut target = PropMap::new();
    mixin_optional_props(
        &source,
        &mut target,
        &[PropDescriptor {
            name: "popover",
            mixin: Some(prop_map! { "placement" => "bottom" }),
            validate: None,
        }],
    );
    assert_eq!(target["popover"], PropValue::Bool(true));
}

#[test]
fn test_validate_runs_before_assignment() {
    fn clamp_rows(value: PropValue) -> PropValue {
        match value {
            PropValue::Int(rows) => PropValue::Int(rows.min(6)),
            other => other,
        }
    }

    let source = prop_map! { "rows" => 12i64 };
    let mut target = PropMap::new();
    mixin_optional_props(
        &source,
        &mut target,
        &[PropDescriptor {
            name: "rows",
            mixin: None,
            validate: Some(clamp_rows),
        }],
    );
    assert_eq!(target["rows"], PropValue::Int(6));
}

#[test]
fn test_mixin_reports_nothing_for_untouched_source() {
    let source = prop_map! { "unrelated" => true };
    let mut target = PropMap::new();
    let assigned = mixin_optional_props(
        &source,
        &mut target,
        &[PropDescriptor {
            name: "rows",
            mixin: None,
            validate: None,
        }],
    );
    assert_eq!(assigned, None);
    assert!(target.is_empty());
}
