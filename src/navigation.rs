use std::rc::Rc;
use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// In-page anchors. The anchor string doubles as the element id of the section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Home,
    Story,
    Gallery,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Story,
        SectionId::Gallery,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Story => "story",
            SectionId::Gallery => "gallery",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Story => "Story",
            SectionId::Gallery => "Gallery",
            SectionId::Testimonials => "Testimonials",
            SectionId::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(MenuState { open })
        }
    }
}

/// Smooth-scrolls to the element with id `anchor`. Returns false, without
/// touching anything, when there is no such element. The scroll itself runs
/// asynchronously in the browser and is not awaited.
pub fn scroll_to_section(anchor: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor))
    else {
        debug!("No scroll target with id {:?}", anchor);
        return false;
    };

    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    debug!("Scrolling to #{}", anchor);
    true
}

/// Builds a click handler that scrolls to `section`.
pub fn scroll_callback<E: 'static>(section: SectionId) -> Callback<E> {
    Callback::from(move |_: E| {
        scroll_to_section(section.anchor());
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_match_labels() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "story", "gallery", "testimonials", "contact"]);
        for section in SectionId::ALL {
            assert_eq!(section.label().to_lowercase(), section.anchor());
        }
    }

    #[test]
    fn menu_starts_closed_and_toggles() {
        let menu = Rc::new(MenuState::default());
        assert!(!menu.open);

        let menu = menu.reduce(MenuAction::Toggle);
        assert!(menu.open);
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(!menu.open);
    }

    #[test]
    fn close_is_idempotent() {
        let open = Rc::new(MenuState { open: true });
        let closed = open.reduce(MenuAction::Close);
        assert!(!closed.open);

        let still_closed = closed.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&closed, &still_closed));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn finds_existing_section() {
        let document = web_sys::window().unwrap().document().unwrap();
        let section = document.create_element("section").unwrap();
        section.set_id("gallery");
        document.body().unwrap().append_child(&section).unwrap();

        assert!(scroll_to_section("gallery"));
        section.remove();
    }

    #[wasm_bindgen_test]
    fn missing_section_is_a_no_op() {
        assert!(!scroll_to_section("nonexistent"));
    }
}
