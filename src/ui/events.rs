use super::keyboard::Key;
use either::Either;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// A host event as delivered to listeners.
///
/// Carries exactly what the helpers inspect: the event name, the pressed
/// key for keyboard events, and the default-action flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: String,
    key: Option<Key>,
    default_prevented: bool,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Event {
        Event {
            name: name.into(),
            key: None,
            default_prevented: false,
        }
    }

    pub fn keyboard(name: impl Into<String>, key: Key) -> Event {
        Event {
            name: name.into(),
            key: Some(key),
            default_prevented: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    /// Asks the host to skip the default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A shared event callback.
///
/// Clones share one underlying function; [`Listener::same`] compares that
/// identity, which is what detach matches on.
#[derive(Clone)]
pub struct Listener(Rc<dyn Fn(&mut Event)>);

impl Listener {
    pub fn new(f: impl Fn(&mut Event) + 'static) -> Listener {
        Listener(Rc::new(f))
    }

    /// Fires the listener.
    pub fn call(&self, event: &mut Event) {
        (self.0)(event);
    }

    /// Whether `self` and `other` share one underlying callback.
    pub fn same(&self, other: &Listener) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Listener {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Listener(..)")
    }
}

/// The host surface listeners attach to.
pub trait EventTarget {
    fn add_listener(&mut self, event: &str, listener: Listener);
    fn remove_listener(&mut self, event: &str, listener: &Listener);
}

/// Attaches `listener` to `target` when every part is present.
///
/// A missing target or listener, or an empty event name, is a no-op rather
/// than an error.
pub fn on<T: EventTarget>(target: Option<&mut T>, event: &str, listener: Option<&Listener>) {
    if let (Some(target), Some(listener)) = (target, listener) {
        if !event.is_empty() {
            debug_log!(EVENTS: "attach `{event}`");
            target.add_listener(event, listener.clone());
        }
    }
}

/// Detaches `listener` from `target`; absent parts make this a no-op.
pub fn off<T: EventTarget>(target: Option<&mut T>, event: &str, listener: Option<&Listener>) {
    if let (Some(target), Some(listener)) = (target, listener) {
        if !event.is_empty() {
            debug_log!(EVENTS: "detach `{event}`");
            target.remove_listener(event, listener);
        }
    }
}

/// Listener maps keyed by event name.
///
/// A slot holds one listener, or the ordered list that collisions
/// accumulated.
pub type EventMap = IndexMap<String, Either<Listener, Vec<Listener>>>;

/// Merges per-component listener maps into one.
///
/// The first listener for an event keeps the slot to itself; the first
/// collision turns the slot into a two-element list and later ones append.
/// Event order is first appearance across `maps`.
pub fn merge_events(maps: impl IntoIterator<Item = IndexMap<String, Listener>>) -> EventMap {
    let mut merged = EventMap::new();
    for map in maps {
        for (name, listener) in map {
            match merged.entry(name) {
                Entry::Vacant(slot) => {
                    slot.insert(Either::Left(listener));
                }
                Entry::Occupied(mut slot) => {
                    let slot = slot.get_mut();
                    match slot {
                        Either::Left(first) => {
                            let first = first.clone();
                            *slot = Either::Right(vec![first, listener]);
                        }
                        Either::Right(list) => list.push(listener),
                    }
                }
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Shell {
        listeners: Vec<(String, Listener)>,
    }

    impl EventTarget for Shell {
        fn add_listener(&mut self, event: &str, listener: Listener) {
            self.listeners.push((event.to_string(), listener));
        }

        fn remove_listener(&mut self, event: &str, listener: &Listener) {
            self.listeners
                .retain(|(name, held)| name != event || !held.same(listener));
        }
    }

    fn counting(calls: &Rc<RefCell<Vec<i32>>>, tag: i32) -> Listener {
        let calls = calls.clone();
        Listener::new(move |_| calls.borrow_mut().push(tag))
    }

    #[test]
    fn merge_keeps_single_listeners() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let merged = merge_events([
            IndexMap::from([("select".to_string(), counting(&calls, 1))]),
            IndexMap::from([("hover".to_string(), counting(&calls, 2))]),
        ]);
        assert_eq!(merged.len(), 2);
        assert!(matches!(merged["select"], Either::Left(_)));
        assert!(matches!(merged["hover"], Either::Left(_)));
        assert_eq!(merged.keys().collect::<Vec<_>>(), ["select", "hover"]);
    }

    #[test]
    fn merge_accumulates_collisions_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let merged = merge_events([
            IndexMap::from([("select".to_string(), counting(&calls, 1))]),
            IndexMap::from([("select".to_string(), counting(&calls, 2))]),
            IndexMap::from([("select".to_string(), counting(&calls, 3))]),
        ]);
        let Either::Right(list) = &merged["select"] else {
            panic!("expected an accumulated slot");
        };
        assert_eq!(list.len(), 3);

        let mut event = Event::new("select");
        for listener in list {
            listener.call(&mut event);
        }
        assert_eq!(*calls.borrow(), [1, 2, 3]);
    }

    #[test]
    fn attach_requires_every_part() {
        let mut shell = Shell::default();
        let listener = Listener::new(|_| {});

        on(None::<&mut Shell>, "click", Some(&listener));
        on(Some(&mut shell), "", Some(&listener));
        on(Some(&mut shell), "click", None);
        assert!(shell.listeners.is_empty());

        on(Some(&mut shell), "click", Some(&listener));
        assert_eq!(shell.listeners.len(), 1);
    }

    #[test]
    fn detach_matches_listener_identity() {
        let mut shell = Shell::default();
        let first = Listener::new(|_| {});
        let second = Listener::new(|_| {});
        on(Some(&mut shell), "click", Some(&first));
        on(Some(&mut shell), "click", Some(&second));

        off(Some(&mut shell), "click", Some(&first));
        assert_eq!(shell.listeners.len(), 1);
        assert!(shell.listeners[0].1.same(&second));

        // clones share identity with the original
        let clone = second.clone();
        off(Some(&mut shell), "click", Some(&clone));
        assert!(shell.listeners.is_empty());
    }

    #[test]
    fn detach_without_listener_is_a_no_op() {
        let mut shell = Shell::default();
        let listener = Listener::new(|_| {});
        on(Some(&mut shell), "click", Some(&listener));
        off(Some(&mut shell), "click", None);
        off(None::<&mut Shell>, "click", Some(&listener));
        assert_eq!(shell.listeners.len(), 1);
    }
}
