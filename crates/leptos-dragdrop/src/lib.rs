//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for reordering cards in Leptos.
//! Uses a movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Identifier of a draggable card
pub type CardId = u32;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<CardId>>,
    pub dragging_id_write: WriteSignal<Option<CardId>>,
    /// Card currently under the pointer while dragging
    pub over_id_read: ReadSignal<Option<CardId>>,
    pub over_id_write: WriteSignal<Option<CardId>>,
    /// Pending card id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<CardId>>,
    pub pending_id_write: WriteSignal<Option<CardId>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Class put on `<body>` while a drag is in progress
const GRABBING_CLASS: &str = "grabbing";

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<CardId>);
    let (over_id_read, over_id_write) = signal(None::<CardId>);
    let (pending_id_read, pending_id_write) = signal(None::<CardId>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// True once the pointer has moved far enough from where the button went down
pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

fn set_body_grabbing(on: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = if on {
        classes.add_1(GRABBING_CLASS)
    } else {
        classes.remove_1(GRABBING_CLASS)
    };
}

/// Dragged and target card for a finished drag, if it ended over another card
pub fn drop_pair(dragging: Option<CardId>, over: Option<CardId>) -> Option<(CardId, CardId)> {
    match (dragging, over) {
        (Some(dragged), Some(target)) if dragged != target => Some((dragged, target)),
        _ => None,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
    dnd.pending_id_write.set(None);
    set_body_grabbing(false);
}

/// Create mousedown handler for a draggable card.
/// Form controls inside the card keep their normal behaviour.
pub fn make_on_mousedown(dnd: DndSignals, card_id: CardId) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlOptionElement>().is_some()
            {
                return;
            }
        }
        dnd.pending_id_write.set(Some(card_id));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Bind document mousemove - starts the drag once the threshold is crossed
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        if pending.is_none() || dnd.dragging_id_read.get_untracked().is_some() {
            return;
        }
        let dx = ev.client_x() - dnd.start_x_read.get_untracked();
        let dy = ev.client_y() - dnd.start_y_read.get_untracked();
        if exceeds_threshold(dx, dy) {
            dnd.dragging_id_write.set(pending);
            set_body_grabbing(true);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a card (becomes the drop target)
pub fn make_on_card_mouseenter(dnd: DndSignals, card_id: CardId) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            if dragging != card_id {
                dnd.over_id_write.set(Some(card_id));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.over_id_write.set(None);
        }
    }
}

/// Bind document mouseup for drop detection.
///
/// `on_drop(dragged, target)` fires only for a real drag that ended over
/// another card. Also binds the global mousemove handler.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(CardId, CardId) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let pair = drop_pair(dnd.dragging_id_read.get_untracked(), dnd.over_id_read.get_untracked());

        end_drag(&dnd);
        if let Some((dragged, target)) = pair {
            on_drop(dragged, target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_moves_do_not_start_a_drag() {
        assert!(!exceeds_threshold(0, 0));
        assert!(!exceeds_threshold(5, -5));
        assert!(exceeds_threshold(6, 0));
        assert!(exceeds_threshold(0, -6));
    }

    #[test]
    fn drop_needs_a_dragged_card_over_a_different_card() {
        assert_eq!(drop_pair(Some(1), Some(2)), Some((1, 2)));
        assert_eq!(drop_pair(Some(1), None), None);
        assert_eq!(drop_pair(None, Some(2)), None);
        assert_eq!(drop_pair(Some(3), Some(3)), None);
    }
}
