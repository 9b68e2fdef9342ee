use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

/// Near blob follows the pointer at 1/50th of its travel.
pub const NEAR_LAYER_DIVISOR: f64 = 50.0;
/// Far blob drifts against the pointer at 1/80th of its travel.
pub const FAR_LAYER_DIVISOR: f64 = -80.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Parallax {
    pub near: (f64, f64),
    pub far: (f64, f64),
}

impl Parallax {
    pub fn from_position(pos: PointerPosition) -> Self {
        Self {
            near: (pos.x / NEAR_LAYER_DIVISOR, pos.y / NEAR_LAYER_DIVISOR),
            far: (pos.x / FAR_LAYER_DIVISOR, pos.y / FAR_LAYER_DIVISOR),
        }
    }
}

pub fn translate_css((x, y): (f64, f64)) -> String {
    // `+ 0.0` turns -0.0 into 0.0 so the origin prints as `0px`
    format!("translate({}px, {}px)", x + 0.0, y + 0.0)
}

type Listener = Rc<RefCell<dyn FnMut(PointerPosition)>>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    last: PointerPosition,
}

/// Fan-out for pointer-move events coming from the host.
///
/// Listeners hold a [`PointerSubscription`]; dropping it removes the
/// listener, so nothing is called after its owner is torn down.
#[derive(Clone, Default)]
pub struct PointerBus {
    inner: Rc<RefCell<BusInner>>,
}

impl PartialEq for PointerBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PointerBus {
    pub fn subscribe<F>(&self, listener: F) -> PointerSubscription
    where
        F: FnMut(PointerPosition) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner
            .listeners
            .push((id, Rc::new(RefCell::new(listener)) as Listener));
        debug!(id, listeners = inner.listeners.len(), "pointer listener added");
        PointerSubscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    pub fn dispatch(&self, pos: PointerPosition) {
        let snapshot: Vec<(u64, Listener)> = {
            let mut inner = self.inner.borrow_mut();
            inner.last = pos;
            inner.listeners.clone()
        };
        for (id, listener) in snapshot {
            // an earlier listener may have dropped this one
            if !self.is_registered(id) {
                continue;
            }
            if let Ok(mut call) = listener.try_borrow_mut() {
                (&mut *call)(pos);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn last_position(&self) -> PointerPosition {
        self.inner.borrow().last
    }

    fn is_registered(&self, id: u64) -> bool {
        self.inner
            .borrow()
            .listeners
            .iter()
            .any(|(existing, _)| *existing == id)
    }
}

/// Guard for a registered pointer listener.
pub struct PointerSubscription {
    id: u64,
    bus: Weak<RefCell<BusInner>>,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            let mut inner = bus.borrow_mut();
            inner.listeners.retain(|(id, _)| *id != self.id);
            debug!(id = self.id, listeners = inner.listeners.len(), "pointer listener released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_parallax_divisors() {
        let p = Parallax::from_position(PointerPosition::new(400.0, 160.0));
        assert_eq!(p.near, (8.0, 3.2));
        assert_eq!(p.far, (-5.0, -2.0));
    }

    #[test]
    fn test_translate_css_at_origin() {
        let p = Parallax::from_position(PointerPosition::default());
        assert_eq!(translate_css(p.near), "translate(0px, 0px)");
        assert_eq!(translate_css(p.far), "translate(0px, 0px)");
        assert_eq!(translate_css((8.0, -2.5)), "translate(8px, -2.5px)");
    }

    #[test]
    fn test_dispatch_reaches_subscribers() {
        let bus = PointerBus::default();
        let seen = Rc::new(Cell::new(PointerPosition::default()));
        let sink = seen.clone();
        let _sub = bus.subscribe(move |pos| sink.set(pos));

        bus.dispatch(PointerPosition::new(10.0, 20.0));
        assert_eq!(seen.get(), PointerPosition::new(10.0, 20.0));
        assert_eq!(bus.last_position(), PointerPosition::new(10.0, 20.0));
    }

    #[test]
    fn test_dropping_subscription_stops_delivery() {
        let bus = PointerBus::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let sub = bus.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(bus.listener_count(), 1);

        bus.dispatch(PointerPosition::new(1.0, 1.0));
        drop(sub);
        bus.dispatch(PointerPosition::new(2.0, 2.0));

        assert_eq!(calls.get(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_subscription_released_on_early_exit() {
        fn mount(bus: &PointerBus, fail: bool) -> Result<PointerSubscription, &'static str> {
            let sub = bus.subscribe(|_| {});
            if fail {
                return Err("mount aborted");
            }
            Ok(sub)
        }

        let bus = PointerBus::default();
        assert!(mount(&bus, true).is_err());
        assert_eq!(bus.listener_count(), 0);

        let kept = mount(&bus, false).unwrap();
        assert_eq!(bus.listener_count(), 1);
        drop(kept);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_listener_dropped_mid_dispatch_is_skipped() {
        let bus = PointerBus::default();
        let victim_calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<PointerSubscription>>> = Rc::new(RefCell::new(None));

        let slot_for_killer = slot.clone();
        let _killer = bus.subscribe(move |_| {
            slot_for_killer.borrow_mut().take();
        });
        let counter = victim_calls.clone();
        *slot.borrow_mut() = Some(bus.subscribe(move |_| counter.set(counter.get() + 1)));

        bus.dispatch(PointerPosition::new(5.0, 5.0));
        assert_eq!(victim_calls.get(), 0);
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn test_subscription_outliving_bus() {
        let bus = PointerBus::default();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        drop(sub);
    }

    #[test]
    fn test_bus_clones_share_listeners() {
        let bus = PointerBus::default();
        let other = bus.clone();
        let _sub = other.subscribe(|_| {});
        assert_eq!(bus.listener_count(), 1);
        assert!(bus == other);
        assert!(bus != PointerBus::default());
    }
}
