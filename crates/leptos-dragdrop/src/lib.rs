//! Leptos DragDrop Utilities
//!
//! Pointer-driven drag-and-drop for Leptos using mouse events.
//! Uses a movement threshold to distinguish click from drag.
//!
//! Elements register themselves with `make_on_mousedown` (draggable) and
//! `make_on_mouseover` (droppable). The document-level handlers installed by
//! `bind_global_handlers` report drag start, drag end and drag cancel; the
//! element under the pointer is exposed as the `over` signal so callers can
//! react to it continuously while the pointer moves.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Type discriminator attached to every registered element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragKind {
    Column,
    Task,
}

/// A registered draggable/droppable element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DragItem {
    pub kind: DragKind,
    pub id: u32,
}

impl DragItem {
    pub fn column(id: u32) -> Self {
        Self { kind: DragKind::Column, id }
    }

    pub fn task(id: u32) -> Self {
        Self { kind: DragKind::Task, id }
    }
}

/// Default movement threshold in pixels to start dragging
pub const DEFAULT_DRAG_THRESHOLD_PX: i32 = 3;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Item currently being dragged
    pub active_read: ReadSignal<Option<DragItem>>,
    pub active_write: WriteSignal<Option<DragItem>>,
    /// Item currently under the pointer while dragging
    pub over_read: ReadSignal<Option<DragItem>>,
    pub over_write: WriteSignal<Option<DragItem>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragItem>>,
    pub pending_write: WriteSignal<Option<DragItem>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
    /// Last known pointer position, for overlay rendering
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
    threshold_px: i32,
}

impl DndSignals {
    /// Whether `item` is the one being dragged, memoized per item
    ///
    /// Subscribers are notified only when `item` itself starts or stops
    /// dragging, not when some other item does.
    pub fn dragging(&self, item: DragItem) -> Memo<bool> {
        let active = self.active_read;
        Memo::new(move |_| active.get() == Some(item))
    }

    /// Whether `item` is the current drop target (tracked)
    pub fn is_over(&self, item: DragItem) -> bool {
        self.active_read.get().is_some() && self.over_read.get() == Some(item)
    }

    pub fn threshold_px(&self) -> i32 {
        self.threshold_px
    }
}

pub fn create_dnd_signals(threshold_px: i32) -> DndSignals {
    let (active_read, active_write) = signal(None::<DragItem>);
    let (over_read, over_write) = signal(None::<DragItem>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragItem>);
    let (start_read, start_write) = signal((0i32, 0i32));
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    DndSignals {
        active_read,
        active_write,
        over_read,
        over_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
        pointer_read,
        pointer_write,
        threshold_px: threshold_px.max(0),
    }
}

/// True once the pointer has moved further than `threshold_px` on either axis
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32), threshold_px: i32) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > threshold_px || dy > threshold_px
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.active_write.set(None);
    dnd.over_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    // Swallow the click that follows the mouseup
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

fn is_form_control(target: &web_sys::EventTarget) -> bool {
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item: DragItem) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if is_form_control(&target) {
                return;
            }
        }
        // Nested draggables: innermost wins
        ev.stop_propagation();
        let pos = (ev.client_x(), ev.client_y());
        dnd.pending_write.set(Some(item));
        dnd.start_write.set(pos);
        dnd.pointer_write.set(pos);
    }
}

/// Create mouseover handler for droppable elements
///
/// `mouseover` bubbles, so nested targets stop propagation and the innermost
/// element under the pointer becomes the drop target.
pub fn make_on_mouseover(dnd: DndSignals, item: DragItem) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if dnd.active_read.get_untracked().is_none() {
            return;
        }
        ev.stop_propagation();
        if dnd.over_read.get_untracked() != Some(item) {
            dnd.over_write.set(Some(item));
        }
    }
}

/// Create mouseleave handler for the drop area as a whole
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.active_read.get_untracked().is_some() {
            dnd.over_write.set(None);
        }
    }
}

fn add_document_listener(event: &str, listener: &Closure<dyn FnMut(web_sys::Event)>) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
    }
}

/// Bind document-level handlers that drive the gesture lifecycle
///
/// * `on_start` fires once the pointer leaves the threshold around a pending item.
/// * `on_end` fires on mouseup with the dragged item and the item under the pointer.
/// * `on_cancel` fires when Escape is pressed mid-drag; `on_end` is not called.
pub fn bind_global_handlers<S, E, C>(dnd: DndSignals, on_start: S, on_end: E, on_cancel: C)
where
    S: Fn(DragItem) + 'static,
    E: Fn(DragItem, Option<DragItem>) + 'static,
    C: Fn(DragItem) + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() else { return };
        let pos = (ev.client_x(), ev.client_y());

        if dnd.active_read.get_untracked().is_some() {
            dnd.pointer_write.set(pos);
            return;
        }

        // Pending drag that hasn't started yet
        if let Some(pending) = dnd.pending_read.get_untracked() {
            if exceeds_threshold(dnd.start_read.get_untracked(), pos, dnd.threshold_px) {
                dnd.pointer_write.set(pos);
                dnd.active_write.set(Some(pending));
                on_start(pending);
            }
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let active = dnd.active_read.get_untracked();
        let over = dnd.over_read.get_untracked();

        match active {
            Some(dragged) => {
                end_drag(&dnd);
                on_end(dragged, over);
            }
            // Plain click; the click event fires naturally on the element
            None => dnd.pending_write.set(None),
        }
    });

    let on_keydown = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(ev) = ev.dyn_ref::<web_sys::KeyboardEvent>() else { return };
        if ev.key() != "Escape" {
            return;
        }
        if let Some(dragged) = dnd.active_read.get_untracked() {
            end_drag(&dnd);
            on_cancel(dragged);
        }
    });

    add_document_listener("mousemove", &on_mousemove);
    add_document_listener("mouseup", &on_mouseup);
    add_document_listener("keydown", &on_keydown);
    on_mousemove.forget();
    on_mouseup.forget();
    on_keydown.forget();
}
