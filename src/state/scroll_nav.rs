// Scroll-direction show/hide for the top navigation bar.
use std::rc::Rc;
use yew::Reducible;

use crate::config::NavConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub visible: bool,
    pub last_scroll_y: f64,
    pub menu_open: bool,
    pub reveal_threshold: f64,
}

impl NavState {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            visible: true,
            last_scroll_y: 0.0,
            menu_open: false,
            reveal_threshold: config.reveal_threshold,
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(&NavConfig::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use NavAction::*;
        let mut new = (*self).clone();
        match action {
            Scrolled(y) => {
                if !y.is_finite() {
                    return self;
                }
                if y < new.last_scroll_y || y < new.reveal_threshold {
                    new.visible = true;
                } else if y > new.last_scroll_y && y > new.reveal_threshold {
                    new.visible = false;
                    new.menu_open = false;
                }
                new.last_scroll_y = y;
            }
            ToggleMenu => new.menu_open = !new.menu_open,
            CloseMenu => new.menu_open = false,
        }
        if new == *self { self } else { Rc::new(new) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[NavAction]) -> Rc<NavState> {
        actions
            .iter()
            .fold(Rc::new(NavState::default()), |s, a| s.reduce(*a))
    }

    #[test]
    fn stays_visible_near_top() {
        let s = run(&[NavAction::Scrolled(40.0), NavAction::Scrolled(90.0)]);
        assert!(s.visible);
        assert_eq!(s.last_scroll_y, 90.0);
    }

    #[test]
    fn hides_when_scrolling_down_past_threshold() {
        let s = run(&[NavAction::Scrolled(50.0), NavAction::Scrolled(300.0)]);
        assert!(!s.visible);
    }

    #[test]
    fn reappears_when_scrolling_up() {
        let s = run(&[
            NavAction::Scrolled(300.0),
            NavAction::Scrolled(600.0),
            NavAction::Scrolled(580.0),
        ]);
        assert!(s.visible);
    }

    #[test]
    fn hiding_closes_mobile_menu() {
        let s = run(&[
            NavAction::ToggleMenu,
            NavAction::Scrolled(150.0),
            NavAction::Scrolled(400.0),
        ]);
        assert!(!s.menu_open);
        assert!(!s.visible);
    }

    #[test]
    fn same_offset_keeps_state() {
        let s = run(&[NavAction::Scrolled(500.0), NavAction::Scrolled(600.0)]);
        let again = s.clone().reduce(NavAction::Scrolled(600.0));
        assert!(Rc::ptr_eq(&s, &again));
    }

    #[test]
    fn menu_toggle_and_close() {
        let s = run(&[NavAction::ToggleMenu]);
        assert!(s.menu_open);
        let s = s.reduce(NavAction::ToggleMenu);
        assert!(!s.menu_open);
        let s = s.reduce(NavAction::ToggleMenu).reduce(NavAction::CloseMenu);
        assert!(!s.menu_open);
    }

    #[test]
    fn non_finite_scroll_is_ignored() {
        let s = run(&[NavAction::Scrolled(300.0), NavAction::Scrolled(f64::NAN)]);
        assert_eq!(s.last_scroll_y, 300.0);
    }

    #[test]
    fn custom_threshold() {
        let s = Rc::new(NavState::new(&NavConfig {
            reveal_threshold: 1000.0,
        }))
        .reduce(NavAction::Scrolled(800.0));
        assert!(s.visible);
    }
}
