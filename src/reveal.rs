//! One-shot entrance animations. An element starts offset and transparent and
//! transitions to rest the first time it scrolls into view. It never replays.

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Alternating layout: even positions come in from the left.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Where an element starts before it is revealed, in px relative to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    Up,
    FromSide(Side),
    /// Timeline entries: horizontal slide plus a vertical settle.
    Diagonal(Side),
    Grow,
}

impl Offset {
    fn transform(&self) -> &'static str {
        match self {
            Offset::Up => "translate(0px, 50px)",
            Offset::FromSide(Side::Left) => "translate(-50px, 0px)",
            Offset::FromSide(Side::Right) => "translate(50px, 0px)",
            Offset::Diagonal(Side::Left) => "translate(-100px, 50px)",
            Offset::Diagonal(Side::Right) => "translate(100px, 50px)",
            Offset::Grow => "translate(0px, 50px) scale(0.9)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPlan {
    pub offset: Offset,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl RevealPlan {
    pub fn new(offset: Offset) -> Self {
        Self {
            offset,
            delay_ms: 0,
            duration_ms: config::REVEAL_DURATION_MS,
        }
    }

    pub fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn lasting(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Timeline entry `index` (0-based): alternating sides, staggered by
    /// `index * REVEAL_STAGGER_MS` after its own trigger.
    pub fn timeline(index: usize) -> Self {
        Self::new(Offset::Diagonal(Side::for_index(index))).delayed(stagger_delay(index))
    }

    /// Inline style for the hidden or revealed state. The delay is part of the
    /// transition, so it counts from the moment the element is revealed.
    pub fn style(&self, revealed: bool) -> String {
        let (opacity, transform) = if revealed {
            ("1", "none")
        } else {
            ("0", self.offset.transform())
        };
        format!(
            "opacity: {}; transform: {}; transition: opacity {}ms ease-out {}ms, transform {}ms ease-out {}ms;",
            opacity, transform, self.duration_ms, self.delay_ms, self.duration_ms, self.delay_ms
        )
    }
}

/// Delay for the `index`-th item of a staggered group.
pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(config::REVEAL_STAGGER_MS)
}

/// Flips once, on the first intersecting observation.
#[derive(Debug, Default)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    /// Returns true exactly once: for the first observation that intersects.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    #[cfg(test)]
    pub fn fired(&self) -> bool {
        self.fired
    }
}

/// Keeps the observer and its callback alive; disconnects on drop.
struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    fn start<F>(element: &Element, on_visible: F) -> Result<Self, JsValue>
    where
        F: Fn() + 'static,
    {
        let mut latch = RevealLatch::default();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if latch.observe(intersecting) {
                    observer.disconnect();
                    on_visible();
                }
            },
        );

        let mut options = IntersectionObserverInit::new();
        options.root_margin(config::REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// True once the referenced element has entered the viewport.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = node.cast::<Element>().and_then(|element| {
                    let on_visible = {
                        let revealed = revealed.clone();
                        move || revealed.set(true)
                    };
                    match VisibilityWatch::start(&element, on_visible) {
                        Ok(watch) => Some(watch),
                        Err(e) => {
                            // No observer support: show the element right away
                            debug!("IntersectionObserver unavailable: {:?}", e);
                            revealed.set(true);
                            None
                        }
                    }
                });
                move || drop(watch)
            },
            node,
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub plan: RevealPlan,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in a block that animates in once when first visible.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class={props.class.clone()} style={props.plan.style(revealed)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_indices_enter_from_the_left() {
        for index in 0..14 {
            let expected = if index % 2 == 0 { Side::Left } else { Side::Right };
            assert_eq!(Side::for_index(index), expected);
            assert_eq!(RevealPlan::timeline(index).offset, Offset::Diagonal(expected));
        }
    }

    #[test]
    fn timeline_stagger_is_per_index() {
        assert_eq!(RevealPlan::timeline(0).delay_ms, 0);
        assert_eq!(RevealPlan::timeline(1).delay_ms, 100);
        assert_eq!(RevealPlan::timeline(13).delay_ms, 1300);
        assert_eq!(RevealPlan::timeline(13).duration_ms, 800);
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.fired());
        assert!(latch.observe(true));
        // scrolled out and back in
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.fired());
    }

    #[test]
    fn hidden_style_starts_offset() {
        let plan = RevealPlan::timeline(1);
        let hidden = plan.style(false);
        assert!(hidden.contains("opacity: 0"));
        assert!(hidden.contains("translate(100px, 50px)"));
        assert!(hidden.contains("800ms ease-out 100ms"));

        let shown = plan.style(true);
        assert!(shown.contains("opacity: 1"));
        assert!(shown.contains("transform: none"));
    }
}
