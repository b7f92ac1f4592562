//! Scoped access to browser globals: event subscriptions that detach on drop
//! and a body scroll lock that releases on drop.

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, Event, EventTarget, HtmlElement, Window};

use crate::error::DomError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Passive {
    Yes,
    /// Needed when the handler calls `prevent_default` (e.g. `wheel`).
    No,
}

pub type Handler = Box<dyn FnMut(&Event)>;

/// An event source whose subscriptions stay attached until the handle is dropped.
pub trait Subscribe {
    type Handle;

    fn subscribe(&self, event: &'static str, passive: Passive, handler: Handler) -> Self::Handle;
}

impl Subscribe for EventTarget {
    type Handle = EventListener;

    fn subscribe(
        &self,
        event: &'static str,
        passive: Passive,
        mut handler: Handler,
    ) -> EventListener {
        let options = match passive {
            Passive::Yes => EventListenerOptions::default(),
            Passive::No => EventListenerOptions::enable_prevent_default(),
        };
        EventListener::new_with_options(self, event, options, move |e| handler(e))
    }
}

pub trait ScrollContainer {
    fn lock_scroll(&self);
    fn unlock_scroll(&self);
}

impl ScrollContainer for HtmlElement {
    fn lock_scroll(&self) {
        let _ = self.style().set_property("overflow", "hidden");
    }

    fn unlock_scroll(&self) {
        let _ = self.style().set_property("overflow", "unset");
    }
}

/// Holds the page scroll locked for as long as it lives.
pub struct ScrollLock<T: ScrollContainer> {
    container: T,
}

impl<T: ScrollContainer> ScrollLock<T> {
    pub fn acquire(container: T) -> Self {
        container.lock_scroll();
        Self { container }
    }
}

impl<T: ScrollContainer> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.container.unlock_scroll();
    }
}

/// Everything a modal holds on the page while it is open.
pub struct ModalSession<H, T: ScrollContainer> {
    listeners: Vec<H>,
    scroll_lock: Option<ScrollLock<T>>,
}

impl<H, T: ScrollContainer> ModalSession<H, T> {
    pub fn new(listeners: Vec<H>, scroll_lock: ScrollLock<T>) -> Self {
        log::debug!("modal session acquired ({} listeners)", listeners.len());
        Self {
            listeners,
            scroll_lock: Some(scroll_lock),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// A live session with its concrete handle types erased.
pub trait ActiveSession {
    /// Unlocks page scroll now; listeners stay until the session is dropped.
    fn release_scroll(&mut self);
}

impl<H, T: ScrollContainer> ActiveSession for ModalSession<H, T> {
    fn release_scroll(&mut self) {
        self.scroll_lock.take();
    }
}

impl<H, T: ScrollContainer> Drop for ModalSession<H, T> {
    fn drop(&mut self) {
        log::debug!("modal session released ({} listeners)", self.listeners.len());
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn document_body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

pub fn document_target() -> Result<EventTarget, DomError> {
    Ok(document()?.into())
}

pub fn window_target() -> Result<EventTarget, DomError> {
    Ok(window()?.into())
}


#[cfg(test)]
mod tests {
    use super::fake::*;
    use super::*;

    #[test]
    fn scroll_lock_releases_on_drop() {
        let body = FakeBody::default();
        let lock = ScrollLock::acquire(body.clone());
        assert!(body.locked.get());
        drop(lock);
        assert!(!body.locked.get());
    }

    #[test]
    fn session_drop_detaches_everything() {
        let target = FakeTarget::default();
        let body = FakeBody::default();
        let handles = ["keydown", "mouseup"]
            .into_iter()
            .map(|ev| target.subscribe(ev, Passive::Yes, Box::new(|_: &Event| ())))
            .collect();
        let session = ModalSession::new(handles, ScrollLock::acquire(body.clone()));
        assert_eq!(session.listener_count(), 2);
        assert_eq!(target.live(), 2);
        assert!(body.locked.get());
        drop(session);
        assert_eq!(target.live(), 0);
        assert!(!body.locked.get());
    }

    #[test]
    fn scroll_can_be_released_before_listeners() {
        let target = FakeTarget::default();
        let body = FakeBody::default();
        let handles = vec![target.subscribe("wheel", Passive::No, Box::new(|_: &Event| ()))];
        let mut session = ModalSession::new(handles, ScrollLock::acquire(body.clone()));
        session.release_scroll();
        assert!(!body.locked.get());
        assert_eq!(target.live(), 1);
        session.release_scroll();
        drop(session);
        assert_eq!(target.live(), 0);
        assert!(!body.locked.get());
    }
}
