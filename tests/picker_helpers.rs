use calpick_core::page::{self, Page};
use calpick_core::ui::{Event, EventTarget, Key, Listener, merge_events, off, on, on_space_or_enter};
use calpick_core::utils::hash;
use calpick_core::{
    DateTime, Guid, Prop, PropDescriptor, PropMap, dates_are_equal, prop_map,
};
use either::Either;
use indexmap::IndexMap;
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

impl Shell {
    fn dispatch(&self, event: &mut Event) {
        for (name, listener) in &self.listeners {
            if name == event.name() {
                listener.call(event);
            }
        }
    }
}

#[test]
fn month_surface_setup() {
    // the quarter the picker is displaying
    let visible = Page::month_of(2024, 1);
    let from = Page::month_of(2024, 1);
    let to = Page::month_of(2024, 3);

    assert!(visible.is_between(&from, &to));
    assert!(Page::month_of(2024, 3).is_between(&from, &to));
    assert!(!Page::month_of(2023, 12).is_between(&from, &to));

    // moving the day cursor keeps the page identity, so the surface is not
    // rebuilt, but ordering still advances
    let cursor = Page::day_of(2024, 1, 5);
    let moved = Page::day_of(2024, 1, 9);
    assert!(cursor.same_page(&moved));
    assert!(cursor.is_before(&moved));

    // memo key for the rendered month
    assert_eq!(visible.key(), "2024-01");
    assert_eq!(Page::parse(&visible.key()), Some(visible));
    assert_eq!(hash(&visible.key()), hash("2024-01"));
    assert_ne!(hash(&visible.key()), hash(&to.key()));

    let mut sorted = vec![to, visible, Page::month_of(2024, 2)];
    sorted.sort_by(Page::ordinal_cmp);
    assert_eq!(
        sorted,
        [visible, Page::month_of(2024, 2), to],
    );
}

#[test]
fn listener_wiring() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let tag = |n: i32| {
        let calls = calls.clone();
        Listener::new(move |_| calls.borrow_mut().push(n))
    };

    // two components both listen for day selection; the shell sees a single
    // merged map
    let merged = merge_events([
        IndexMap::from([
            ("dayclick".to_string(), tag(1)),
            ("dayhover".to_string(), tag(2)),
        ]),
        IndexMap::from([("dayclick".to_string(), tag(3))]),
    ]);
    assert_eq!(merged.keys().collect::<Vec<_>>(), ["dayclick", "dayhover"]);

    let mut shell = Shell::default();
    for (name, slot) in &merged {
        match slot {
            Either::Left(listener) => on(Some(&mut shell), name, Some(listener)),
            Either::Right(list) => {
                for listener in list {
                    on(Some(&mut shell), name, Some(listener));
                }
            }
        }
    }
    assert_eq!(shell.listeners.len(), 3);

    shell.dispatch(&mut Event::new("dayclick"));
    assert_eq!(*calls.borrow(), [1, 3]);

    // detach one collided listener; the other keeps firing
    let Either::Right(list) = &merged["dayclick"] else {
        panic!("expected an accumulated slot");
    };
    off(Some(&mut shell), "dayclick", Some(&list[0]));
    calls.borrow_mut().clear();
    shell.dispatch(&mut Event::new("dayclick"));
    assert_eq!(*calls.borrow(), [3]);
}

#[test]
fn keyboard_activation() {
    let selected = Rc::new(RefCell::new(None::<Page>));
    let mut event = Event::keyboard("keydown", Key::Enter);
    {
        let selected = selected.clone();
        on_space_or_enter(&mut event, move |_| {
            *selected.borrow_mut() = Some(Page::day_of(2024, 1, 5));
        });
    }
    assert!(event.default_prevented());
    assert_eq!(*selected.borrow(), Some(Page::day_of(2024, 1, 5)));
}

#[test]
fn popover_props() {
    let source = prop_map! {
        "popover" => prop_map! { "visibility" => "focus" },
        "rows" => 2i64,
    };
    let mut state = PropMap::new();
    let assigned = calpick_core::props::mixin_optional_props(
        &source,
        &mut state,
        &[
            PropDescriptor {
                name: "popover",
                mixin: Some(prop_map! { "placement" => "bottom", "visibility" => "hover" }),
                validate: None,
            },
            PropDescriptor {
                name: "rows",
                mixin: None,
                validate: None,
            },
        ],
    );
    assert_eq!(assigned, Some(vec!["popover", "rows"]));
    let popover = state["popover"].as_map().unwrap();
    assert_eq!(popover["visibility"], "focus".into());
    assert_eq!(popover["placement"], "bottom".into());

    // a derived prop resolves against the page it renders for
    let label = Prop::derive(|page: &Page| format!("month {}", page.key()));
    assert_eq!(label.get(&Page::month_of(2024, 3)), "month 2024-03");
}

#[test]
fn ids_and_dates() {
    let id = Guid::new();
    assert_eq!(Guid::parse(&id.to_string()), Some(id));
    assert_ne!(id, Guid::new());

    let highlight = DateTime::from_unix_milliseconds(1709641800000);
    assert!(dates_are_equal(None, None));
    assert!(!dates_are_equal(Some(highlight), None));
    assert!(dates_are_equal(Some(highlight), Some(highlight)));

    assert!(!page::page_is_valid(None));
    assert!(page::pages_equal(None, None));
}
