use std::rc::Rc;
use log::info;
use yew::prelude::*;

/// Top-level phase of the mounted app. Starts in `Loading` and moves to `Ready`
/// once; nothing moves it back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Loading,
    Ready,
}

pub enum LifecycleAction {
    SplashElapsed,
}

impl Reducible for AppPhase {
    type Action = LifecycleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match (*self, action) {
            (AppPhase::Loading, LifecycleAction::SplashElapsed) => {
                info!("Splash finished, showing page");
                Rc::new(AppPhase::Ready)
            }
            (AppPhase::Ready, LifecycleAction::SplashElapsed) => self,
        }
    }
}

impl AppPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, AppPhase::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        assert!(AppPhase::default().is_loading());
    }

    #[test]
    fn splash_elapsed_moves_to_ready_once() {
        let phase = Rc::new(AppPhase::Loading);
        let ready = phase.reduce(LifecycleAction::SplashElapsed);
        assert_eq!(*ready, AppPhase::Ready);

        let again = ready.clone().reduce(LifecycleAction::SplashElapsed);
        assert_eq!(*again, AppPhase::Ready);
        assert!(Rc::ptr_eq(&ready, &again));
    }
}
