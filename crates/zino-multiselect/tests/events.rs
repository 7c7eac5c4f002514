use dioxus::prelude::*;
use dioxus_core::{AttributeValue, ElementId, Mutation, Mutations};
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedKeyboardData,
    SerializedMouseData,
};
use std::{
    any::Any,
    cell::{Cell, RefCell},
    rc::Rc,
};
use zino_multiselect::{
    multiselect::{Dataset, MenuEvent, Multiselect, MultiselectOption, SelectEvent},
    state::Interaction,
};

thread_local! {
    static LOG: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static DISABLED: Cell<bool> = const { Cell::new(false) };
}

fn log(entry: String) {
    LOG.with(|log| log.borrow_mut().push(entry));
}

fn logged() -> Vec<String> {
    LOG.with(|log| log.borrow().clone())
}

fn genres() -> Vec<MultiselectOption> {
    vec![
        MultiselectOption::new("action").with_label("Action"),
        MultiselectOption::new("comedy"),
        MultiselectOption::new("drama").with_label("Drama"),
    ]
}

fn menu_event(event: &MenuEvent) -> String {
    format!("{}:{}", event.kind, event.dataset.get("id").unwrap_or_default())
}

fn select_event(event: &SelectEvent) -> String {
    format!(
        "select:{}:{}",
        event.value,
        event.dataset.get("id").unwrap_or_default()
    )
}

/// A headless renderer which dispatches events to elements found by their attributes.
struct Harness {
    dom: VirtualDom,
    attributes: Vec<(ElementId, &'static str, String)>,
}

impl Harness {
    fn new(app: fn() -> Element) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(app);
        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);

        let mut harness = Self {
            dom,
            attributes: Vec::new(),
        };
        harness.record(mutations);
        harness
    }

    fn record(&mut self, mutations: Mutations) {
        for edit in mutations.edits {
            if let Mutation::SetAttribute {
                name,
                value: AttributeValue::Text(value),
                id,
                ..
            } = edit
            {
                self.attributes.push((id, name, value));
            }
        }
    }

    fn find(&self, name: &str, value: &str) -> ElementId {
        self.attributes
            .iter()
            .rev()
            .find(|(_, attr, text)| *attr == name && text == value)
            .map(|(id, ..)| *id)
            .unwrap_or_else(|| panic!("no element with {name}=\"{value}\""))
    }

    fn dispatch(&mut self, name: &str, data: Box<dyn Any>, element: ElementId) {
        let event = Event::new(Rc::new(PlatformEventData::new(data)) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event(name, event, element);
        self.render();
    }

    fn render(&mut self) {
        let mutations = self.dom.render_immediate_to_vec();
        self.record(mutations);
    }

    fn rerender_app(&mut self) {
        self.dom.mark_dirty(ScopeId::APP);
        self.render();
    }

    fn click(&mut self, title: &str) {
        let element = self.find("title", title);
        self.dispatch("click", Box::<SerializedMouseData>::default(), element);
    }

    fn click_by(&mut self, name: &str, value: &str) {
        let element = self.find(name, value);
        self.dispatch("click", Box::<SerializedMouseData>::default(), element);
    }

    fn press(&mut self, title: &str, key: Key, code: Code) {
        let element = self.find("title", title);
        let data = SerializedKeyboardData::new(
            key,
            code,
            Location::Standard,
            false,
            Modifiers::empty(),
            false,
        );
        self.dispatch("keydown", Box::new(data), element);
    }

    fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

#[test]
fn it_selects_and_closes_menu() {
    fn app() -> Element {
        rsx! {
            Multiselect {
                title: "Genres",
                options: genres(),
                dataset: Dataset::from([("id", "genre-filter")]),
                on_open: move |event: MenuEvent| log(menu_event(&event)),
                on_close: move |event: MenuEvent| log(menu_event(&event)),
                on_select: move |event: SelectEvent| {
                    log(select_event(&event));
                    Interaction::default()
                },
            }
        }
    }

    let mut harness = Harness::new(app);
    harness.click("Genres");
    assert!(harness.html().contains("multiselect-menu"));

    harness.click("Drama");
    assert_eq!(
        logged(),
        [
            "open:genre-filter",
            "select:drama:genre-filter",
            "close:genre-filter",
        ]
    );
    assert!(!harness.html().contains("multiselect-menu"));

    harness.click("Genres");
    harness.click_by("data-value", "comedy");
    assert_eq!(
        logged()[3..],
        [
            "open:genre-filter",
            "select:comedy:genre-filter",
            "close:genre-filter",
        ]
    );
}

#[test]
fn it_keeps_menu_open_on_request() {
    fn app() -> Element {
        rsx! {
            Multiselect {
                title: "Genres",
                options: genres(),
                on_open: move |event: MenuEvent| log(event.kind.to_string()),
                on_close: move |event: MenuEvent| log(event.kind.to_string()),
                on_select: move |event: SelectEvent| {
                    log(format!("select:{}", event.value));
                    Interaction::keep_open()
                },
            }
        }
    }

    let mut harness = Harness::new(app);
    harness.click("Genres");
    harness.click("Drama");
    harness.click("Action");
    assert_eq!(logged(), ["open", "select:drama", "select:action"]);
    assert!(harness.html().contains("multiselect-menu"));

    harness.click("Genres");
    assert_eq!(
        logged(),
        ["open", "select:drama", "select:action", "close"]
    );
    assert!(!harness.html().contains("multiselect-menu"));
}

#[test]
fn it_selects_with_keyboard_without_toggling() {
    fn app() -> Element {
        rsx! {
            Multiselect {
                title: "Genres",
                options: genres(),
                on_open: move |event: MenuEvent| log(event.kind.to_string()),
                on_close: move |event: MenuEvent| log(event.kind.to_string()),
                on_select: move |event: SelectEvent| {
                    log(format!("select:{}", event.value));
                    Interaction::keep_open()
                },
            }
        }
    }

    let mut harness = Harness::new(app);
    harness.press("Genres", Key::Enter, Code::Enter);
    harness.press("Drama", Key::Enter, Code::Enter);
    assert_eq!(logged(), ["open", "select:drama"]);
    assert!(harness.html().contains("multiselect-menu"));

    harness.press("comedy", Key::Character(" ".to_owned()), Code::Space);
    harness.press("Genres", Key::Enter, Code::Enter);
    assert_eq!(logged(), ["open", "select:drama", "select:comedy", "close"]);
}

#[test]
fn it_closes_on_escape_and_outside_click() {
    fn app() -> Element {
        rsx! {
            Multiselect {
                title: "Genres",
                options: genres(),
                on_open: move |event: MenuEvent| log(event.kind.to_string()),
                on_close: move |event: MenuEvent| log(event.kind.to_string()),
            }
        }
    }

    let mut harness = Harness::new(app);
    harness.click("Genres");
    harness.press("Genres", Key::Escape, Code::Escape);
    assert_eq!(logged(), ["open", "close"]);

    harness.click("Genres");
    harness.click_by("class", "popup-backdrop");
    assert_eq!(logged(), ["open", "close", "open", "close"]);
    assert!(!harness.html().contains("is-active"));
}

#[test]
fn it_discards_menu_clicks_while_disabled() {
    fn app() -> Element {
        rsx! {
            Multiselect {
                title: "Genres",
                options: genres(),
                disabled: DISABLED.get(),
                on_open: move |event: MenuEvent| log(event.kind.to_string()),
                on_close: move |event: MenuEvent| log(event.kind.to_string()),
                on_select: move |event: SelectEvent| {
                    log(format!("select:{}", event.value));
                    Interaction::keep_open()
                },
            }
        }
    }

    let mut harness = Harness::new(app);
    harness.click("Genres");

    DISABLED.set(true);
    harness.rerender_app();
    harness.click("Drama");

    DISABLED.set(false);
    harness.rerender_app();
    harness.click("Genres");
    assert_eq!(logged(), ["open", "select:drama", "close"]);
}
