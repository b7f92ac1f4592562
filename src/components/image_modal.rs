use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent, MouseEvent, Node, WheelEvent};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{self, ActiveSession, ModalSession, Passive, ScrollLock, Subscribe};
use crate::error::DomError;
use crate::state::{Point, ViewportController, ViewportView};

#[derive(Properties, PartialEq)]
pub struct ImageModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Identity of the shown content; changing it while open resets the view.
    #[prop_or_default]
    pub content_key: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

pub type SessionSlot = Rc<RefCell<Option<Box<dyn ActiveSession>>>>;

/// Shared handles the global listeners work through. Handlers always go
/// through `controller`, never a captured copy of the transform.
#[derive(Clone)]
pub struct ModalInput {
    pub controller: Rc<RefCell<ViewportController>>,
    pub content: NodeRef,
    pub on_change: Callback<ViewportView>,
    pub on_close: Rc<RefCell<Callback<()>>>,
    pub session: SessionSlot,
    /// Disposes a session whose listener may be running right now.
    pub dispose: fn(Box<dyn ActiveSession>),
}

impl ModalInput {
    fn refresh(&self) {
        let view = self.controller.borrow().view();
        self.on_change.emit(view);
    }

    pub fn install_session(&self, session: Box<dyn ActiveSession>) {
        let previous = self.session.borrow_mut().replace(session);
        drop(previous);
    }

    /// Drops the session outright. Only call outside of its own listeners.
    pub fn drop_session(&self) {
        let held = self.session.borrow_mut().take();
        drop(held);
    }

    /// Effect cleanup: the host closed the modal or swapped its content.
    pub fn deactivate(&self) {
        self.drop_session();
        let closed = self.controller.borrow_mut().close();
        if closed {
            self.refresh();
        }
    }

    fn release_session(&self) {
        let held = self.session.borrow_mut().take();
        if let Some(mut held) = held {
            held.release_scroll();
            (self.dispose)(held);
        }
    }

    fn finish_close(&self, reason: &str) {
        log::debug!("image modal closed ({reason})");
        self.release_session();
        self.refresh();
        let on_close = self.on_close.borrow().clone();
        on_close.emit(());
    }

    pub fn request_close(&self, reason: &str) {
        let closed = self.controller.borrow_mut().close();
        if closed {
            self.finish_close(reason);
        }
    }

    pub fn key(&self, key: &str) {
        let closed = self.controller.borrow_mut().key_down(key);
        if closed {
            self.finish_close("escape");
        }
    }

    /// Returns whether the page scroll must be suppressed.
    pub fn wheel(&self, delta_y: f64) -> bool {
        let suppress = self.controller.borrow_mut().wheel(delta_y);
        if suppress {
            self.refresh();
        }
        suppress
    }

    /// Returns whether a drag started.
    pub fn press(&self, pos: Point, inside_content: bool) -> bool {
        let started = self.controller.borrow_mut().pointer_down(pos, inside_content);
        if started {
            self.refresh();
        }
        started
    }

    pub fn drag(&self, pos: Point) {
        let moved = self.controller.borrow_mut().pointer_move(pos);
        if moved {
            self.refresh();
        }
    }

    pub fn pointer_up(&self) {
        let ended = self.controller.borrow_mut().pointer_up();
        if ended {
            self.refresh();
        }
    }

    /// Clicks that bubbled up from the content frame do not close.
    pub fn backdrop_click(&self, on_backdrop: bool) {
        if on_backdrop {
            self.request_close("backdrop");
        }
    }

    fn hits_content(&self, target: Option<web_sys::EventTarget>) -> bool {
        let Some(content) = self.content.get() else {
            return false;
        };
        target
            .and_then(|t| t.dyn_into::<Node>().ok())
            .is_some_and(|node| content.contains(Some(&node)))
    }
}

fn client_pos(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

/// Attaches the five document-level listeners the modal needs while open.
pub fn subscribe_viewport_input<S: Subscribe>(target: &S, input: &ModalInput) -> Vec<S::Handle> {
    let keydown = {
        let input = input.clone();
        target.subscribe(
            "keydown",
            Passive::Yes,
            Box::new(move |e: &Event| {
                if let Some(e) = e.dyn_ref::<KeyboardEvent>() {
                    input.key(&e.key());
                }
            }),
        )
    };
    // Non-passive so the page underneath does not scroll.
    let wheel = {
        let input = input.clone();
        target.subscribe(
            "wheel",
            Passive::No,
            Box::new(move |e: &Event| {
                let Some(e) = e.dyn_ref::<WheelEvent>() else {
                    return;
                };
                if input.wheel(e.delta_y()) {
                    e.prevent_default();
                }
            }),
        )
    };
    let mousedown = {
        let input = input.clone();
        target.subscribe(
            "mousedown",
            Passive::No,
            Box::new(move |e: &Event| {
                let Some(me) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let inside = input.hits_content(e.target());
                if input.press(client_pos(me), inside) {
                    me.prevent_default();
                }
            }),
        )
    };
    let mousemove = {
        let input = input.clone();
        target.subscribe(
            "mousemove",
            Passive::Yes,
            Box::new(move |e: &Event| {
                if let Some(me) = e.dyn_ref::<MouseEvent>() {
                    input.drag(client_pos(me));
                }
            }),
        )
    };
    // Document-wide so a drag released outside the content still ends.
    let mouseup = {
        let input = input.clone();
        target.subscribe(
            "mouseup",
            Passive::Yes,
            Box::new(move |_e: &Event| input.pointer_up()),
        )
    };
    vec![keydown, wheel, mousedown, mousemove, mouseup]
}

fn acquire_session(
    input: &ModalInput,
) -> Result<ModalSession<EventListener, HtmlElement>, DomError> {
    let target = dom::document_target()?;
    let body = dom::document_body()?;
    let listeners = subscribe_viewport_input(&target, input);
    Ok(ModalSession::new(listeners, ScrollLock::acquire(body)))
}

/// Drops the listeners once the running handler has returned.
fn dispose_after_handler(session: Box<dyn ActiveSession>) {
    let _ = Timeout::new(0, move || drop(session)).forget();
}

#[function_component(ImageModal)]
pub fn image_modal(props: &ImageModalProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default().viewport;
    let controller = {
        let config = config.clone();
        use_mut_ref(move || ViewportController::new(config))
    };
    let view = {
        let controller = controller.clone();
        use_state_eq(move || controller.borrow().view())
    };
    let content_ref = use_node_ref();
    // Latest on_close, read at event time.
    let on_close = use_mut_ref(|| props.on_close.clone());
    *on_close.borrow_mut() = props.on_close.clone();
    let session: SessionSlot = use_mut_ref(|| None);

    let input = ModalInput {
        controller: controller.clone(),
        content: content_ref.clone(),
        on_change: {
            let view = view.clone();
            Callback::from(move |v| view.set(v))
        },
        on_close,
        session,
        dispose: dispose_after_handler,
    };

    {
        let input = input.clone();
        let deps = (props.is_open, props.content_key.clone());
        use_effect_with(deps, move |(is_open, _)| {
            if *is_open {
                input.controller.borrow_mut().open(());
                input.refresh();
                match acquire_session(&input) {
                    Ok(session) => input.install_session(Box::new(session)),
                    Err(err) => {
                        log::error!("image modal opened without input listeners: {err}");
                    }
                }
            }
            move || input.deactivate()
        });
    }

    if !props.is_open || !view.open {
        return html! {};
    }

    let backdrop_click = {
        let input = input.clone();
        Callback::from(move |e: MouseEvent| {
            input.backdrop_click(e.target() == e.current_target());
        })
    };
    let close_btn = {
        let input = input.clone();
        Callback::from(move |_: MouseEvent| input.request_close("button"))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let frame_style = format!(
        "transform:{}; transform-origin:center; transition:{}; cursor:{};",
        view.transform_css(),
        view.transition_css(&config.transition),
        view.cursor()
    );

    html! {
        <div onclick={backdrop_click} style="position:fixed; inset:0; z-index:100; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.85);">
            <div onclick={stop} style="position:relative; width:90vw; height:90vh; background:#161b22; border:1px solid #30363d; border-radius:12px; overflow:hidden;">
                <button onclick={close_btn} aria-label="Close" style="position:absolute; top:12px; right:12px; z-index:2; padding:4px 10px;">{"✕"}</button>
                <div style="position:absolute; top:12px; left:12px; z-index:2; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:4px 10px; font-size:12px;">
                    { format!("Scroll to zoom {}% | Drag to move", view.zoom_percent()) }
                </div>
                <div ref={content_ref} style="width:100%; height:100%; display:flex; align-items:center; justify-content:center; user-select:none;">
                    <div style={frame_style}>
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::dom::fake::{FakeBody, FakeTarget};

    struct Harness {
        input: ModalInput,
        closes: Rc<Cell<u32>>,
        last_view: Rc<Cell<Option<ViewportView>>>,
    }

    fn harness(dispose: fn(Box<dyn ActiveSession>)) -> Harness {
        let closes = Rc::new(Cell::new(0));
        let last_view = Rc::new(Cell::new(None));
        let input = ModalInput {
            controller: Rc::new(RefCell::new(ViewportController::default())),
            content: NodeRef::default(),
            on_change: {
                let last_view = last_view.clone();
                Callback::from(move |v| last_view.set(Some(v)))
            },
            on_close: {
                let closes = closes.clone();
                Rc::new(RefCell::new(Callback::from(move |_| closes.set(closes.get() + 1))))
            },
            session: Rc::new(RefCell::new(None)),
            dispose,
        };
        Harness {
            input,
            closes,
            last_view,
        }
    }

    /// Opens the controller and installs listeners plus scroll lock, as the effect does.
    fn open_session(h: &Harness, target: &FakeTarget, body: &FakeBody) {
        h.input.controller.borrow_mut().open(());
        let listeners = subscribe_viewport_input(target, &h.input);
        let session = ModalSession::new(listeners, ScrollLock::acquire(body.clone()));
        h.input.install_session(Box::new(session));
    }

    fn last_view(h: &Harness) -> ViewportView {
        h.last_view.get().unwrap()
    }

    #[test]
    fn subscribes_all_global_listeners_and_releases_them() {
        let target = FakeTarget::default();
        let h = harness(drop);
        let handles = subscribe_viewport_input(&target, &h.input);
        assert_eq!(target.live(), 5);
        let events: Vec<_> = target.subscribed().into_iter().map(|(ev, _)| ev).collect();
        assert_eq!(events, ["keydown", "wheel", "mousedown", "mousemove", "mouseup"]);
        assert!(target.subscribed().contains(&("wheel", Passive::No)));
        drop(handles);
        assert_eq!(target.live(), 0);
    }

    #[test]
    fn escape_releases_session_even_if_host_keeps_it_open() {
        let (target, body) = (FakeTarget::default(), FakeBody::default());
        let h = harness(drop);
        open_session(&h, &target, &body);
        assert_eq!(target.live(), 5);
        assert!(body.locked.get());

        h.input.key("Escape");
        assert_eq!(h.closes.get(), 1);
        assert_eq!(target.live(), 0);
        assert!(!body.locked.get());
        assert!(!last_view(&h).open);
    }

    #[test]
    fn button_and_backdrop_release_session() {
        for reason in ["button", "backdrop"] {
            let (target, body) = (FakeTarget::default(), FakeBody::default());
            let h = harness(drop);
            open_session(&h, &target, &body);
            if reason == "button" {
                h.input.request_close(reason);
            } else {
                h.input.backdrop_click(true);
            }
            assert_eq!(h.closes.get(), 1, "{reason}");
            assert_eq!(target.live(), 0, "{reason}");
            assert!(!body.locked.get(), "{reason}");
        }
    }

    #[test]
    fn scroll_unlocks_before_deferred_listener_disposal() {
        let (target, body) = (FakeTarget::default(), FakeBody::default());
        // keep the listeners alive, as a not-yet-fired timeout would
        let h = harness(|held| std::mem::forget(held));
        open_session(&h, &target, &body);
        h.input.key("Escape");
        assert!(!body.locked.get());
        assert!(h.input.session.borrow().is_none());
    }

    #[test]
    fn host_close_drops_session_without_on_close() {
        let (target, body) = (FakeTarget::default(), FakeBody::default());
        let h = harness(drop);
        open_session(&h, &target, &body);
        h.input.drop_session();
        assert_eq!(target.live(), 0);
        assert!(!body.locked.get());
        assert_eq!(h.closes.get(), 0);
    }

    #[test]
    fn content_swap_while_open_resets_view() {
        let (target, body) = (FakeTarget::default(), FakeBody::default());
        let h = harness(drop);
        open_session(&h, &target, &body);
        h.input.wheel(-1000.0);
        h.input.press(Point::new(0.0, 0.0), true);
        h.input.drag(Point::new(40.0, 40.0));
        assert!(last_view(&h).scale > 2.5);

        // new content_key: cleanup of the old effect, then a fresh open
        h.input.deactivate();
        open_session(&h, &target, &body);
        h.input.refresh();
        let view = last_view(&h);
        assert!(view.open);
        assert_eq!(view.scale, 2.5);
        assert_eq!(view.offset, Point::ORIGIN);
        assert!(!view.drag_active);
        assert_eq!(target.live(), 5);
        assert!(body.locked.get());
        assert_eq!(h.closes.get(), 0);
    }

    #[test]
    fn repeated_sessions_do_not_leak() {
        let (target, body) = (FakeTarget::default(), FakeBody::default());
        let h = harness(drop);
        for i in 0..10 {
            open_session(&h, &target, &body);
            assert_eq!(target.live(), 5);
            if i % 2 == 0 {
                h.input.key("Escape");
            } else {
                h.input.deactivate();
            }
            assert_eq!(target.live(), 0);
        }
        assert_eq!(h.closes.get(), 5);
    }

    #[test]
    fn escape_while_closed_does_nothing() {
        let h = harness(drop);
        h.input.key("Escape");
        assert_eq!(h.closes.get(), 0);
        assert!(h.last_view.get().is_none());
    }

    #[test]
    fn other_keys_keep_modal_open() {
        let (target, body) = (FakeTarget::default(), FakeBody::default());
        let h = harness(drop);
        open_session(&h, &target, &body);
        h.input.key("Enter");
        h.input.key(" ");
        assert_eq!(h.closes.get(), 0);
        assert_eq!(target.live(), 5);
    }

    #[test]
    fn on_close_fires_once_per_close() {
        let h = harness(drop);
        h.input.request_close("button");
        assert_eq!(h.closes.get(), 0);

        h.input.controller.borrow_mut().open(());
        h.input.wheel(-500.0);
        h.input.request_close("backdrop");
        h.input.request_close("backdrop");
        h.input.key("Escape");
        assert_eq!(h.closes.get(), 1);
        let view = last_view(&h);
        assert!(!view.open);
        assert_eq!(view.scale, 2.5);
    }

    #[test]
    fn latest_on_close_is_used() {
        let h = harness(drop);
        let second = Rc::new(Cell::new(0));
        {
            let second = second.clone();
            *h.input.on_close.borrow_mut() = Callback::from(move |_| second.set(second.get() + 1));
        }
        h.input.controller.borrow_mut().open(());
        h.input.request_close("button");
        assert_eq!(h.closes.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn wheel_suppresses_scroll_only_while_open() {
        let h = harness(drop);
        assert!(!h.input.wheel(-500.0));
        h.input.controller.borrow_mut().open(());
        assert!(h.input.wheel(-500.0));
        assert!((last_view(&h).scale - 3.5).abs() < 1e-9);
        assert!(h.input.wheel(10_000.0));
        assert_eq!(last_view(&h).scale, 1.0);
    }

    #[test]
    fn press_outside_content_does_not_start_drag() {
        let h = harness(drop);
        h.input.controller.borrow_mut().open(());
        assert!(!h.input.press(Point::new(5.0, 5.0), false));
        h.input.drag(Point::new(60.0, 60.0));
        assert!(h.last_view.get().is_none());
        // no content mounted: hit test fails closed
        assert!(!h.input.hits_content(None));
    }

    #[test]
    fn drag_then_release_anywhere() {
        let h = harness(drop);
        h.input.controller.borrow_mut().open(());
        assert!(h.input.press(Point::new(100.0, 100.0), true));
        assert!(last_view(&h).drag_active);
        h.input.drag(Point::new(150.0, 130.0));
        assert_eq!(last_view(&h).offset, Point::new(50.0, 30.0));
        // released far outside the content bounds
        h.input.drag(Point::new(-900.0, 4000.0));
        h.input.pointer_up();
        assert!(!last_view(&h).drag_active);
        h.input.drag(Point::new(200.0, 200.0));
        assert_eq!(last_view(&h).offset, Point::new(-1000.0, 3900.0));
    }

    #[test]
    fn content_clicks_do_not_close() {
        let h = harness(drop);
        h.input.controller.borrow_mut().open(());
        h.input.backdrop_click(false);
        assert_eq!(h.closes.get(), 0);
        assert!(h.input.controller.borrow().is_open());
        h.input.backdrop_click(true);
        assert_eq!(h.closes.get(), 1);
    }
}
