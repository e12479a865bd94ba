// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click interaction: an idle/armed state machine over down/up phases.
//!
//! ## Usage
//!
//! 1) Create a [`ClickInteraction`] and set its callback with
//!    [`set_click_callback`](ClickInteraction::set_click_callback).
//! 2) [`anchor`](ClickInteraction::anchor) it to a target's hit region and
//!    that target's mouse and touch dispatchers.
//! 3) A down inside the region followed by an up inside the region invokes
//!    the callback with the up point. Anything else just resets.
//! 4) [`unanchor`](ClickInteraction::unanchor) (or drop the interaction) to
//!    remove its dispatcher registrations.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::sync::atomic::{AtomicU64, Ordering};
use kurbo::Point;

use crate::region::HitRegion;
use rustle_pointer::dispatcher::PointerDispatcher;
use rustle_pointer::types::HandlerKey;

/// The user callback invoked on a recognized click, with the release point
/// in component-local coordinates.
pub type ClickCallback = dyn Fn(Point);

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// State shared between the interaction handle and its dispatcher handlers.
struct ClickInner {
    armed: bool,
    region: Option<Rc<dyn HitRegion>>,
    callback: Option<Rc<ClickCallback>>,
}

/// Recognizes clicks on one rendering target from mouse and touch input.
///
/// Two states, idle and armed. A down event whose point lies inside the
/// target's [`HitRegion`] arms the interaction; a down outside leaves it
/// idle. The next up event disarms unconditionally, invoking the user
/// callback first when the up point is also inside the region. The region is
/// queried at each phase, never cached, so bounds that change between press
/// and release are honored.
///
/// Each interaction carries a unique [`HandlerKey`], so siblings anchored to
/// the same target register and tear down independently. An anchored
/// interaction that never sees a matching up event stays armed until the
/// next up or until it is unanchored; dropping the interaction deregisters
/// it from its dispatchers.
pub struct ClickInteraction {
    key: HandlerKey,
    inner: Rc<RefCell<ClickInner>>,
    anchored: Option<AnchoredDispatchers>,
}

struct AnchoredDispatchers {
    mouse: Rc<PointerDispatcher>,
    touch: Rc<PointerDispatcher>,
}

impl ClickInteraction {
    /// Creates an idle, unanchored interaction with a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            key: HandlerKey::new("interaction.click", NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            inner: Rc::new(RefCell::new(ClickInner {
                armed: false,
                region: None,
                callback: None,
            })),
            anchored: None,
        }
    }

    /// The key this interaction registers under with its dispatchers.
    #[must_use]
    pub fn key(&self) -> HandlerKey {
        self.key
    }

    /// Returns the current click callback, if one is set.
    #[must_use]
    pub fn click_callback(&self) -> Option<Rc<ClickCallback>> {
        self.inner.borrow().callback.clone()
    }

    /// Sets the callback invoked on a recognized click, replacing any
    /// previous one (single callback, last write wins).
    ///
    /// Callers wanting fan-out compose callbacks externally. Returns `&self`
    /// for chaining.
    pub fn set_click_callback(&self, callback: impl Fn(Point) + 'static) -> &Self {
        self.inner.borrow_mut().callback = Some(Rc::new(callback));
        self
    }

    /// Removes the click callback; recognized clicks become no-ops.
    ///
    /// Returns `&self` for chaining.
    pub fn clear_click_callback(&self) -> &Self {
        self.inner.borrow_mut().callback = None;
        self
    }

    /// Returns `true` while a qualifying down has been seen and the next up
    /// has not yet arrived.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.inner.borrow().armed
    }

    /// Returns `true` while anchored to a target's dispatchers.
    #[must_use]
    pub fn is_anchored(&self) -> bool {
        self.anchored.is_some()
    }

    /// Anchors this interaction to a target: registers down/up handlers on
    /// the target's mouse-class and touch-class dispatchers under this
    /// interaction's key, hit-testing against `region`.
    ///
    /// Re-anchoring tears down the previous registrations first, so an
    /// interaction is live on at most one target at a time.
    pub fn anchor(
        &mut self,
        region: Rc<dyn HitRegion>,
        mouse: &Rc<PointerDispatcher>,
        touch: &Rc<PointerDispatcher>,
    ) -> &mut Self {
        self.unanchor();
        {
            let mut inner = self.inner.borrow_mut();
            inner.region = Some(region);
            inner.armed = false;
        }
        for dispatcher in [mouse, touch] {
            let inner = self.inner.clone();
            dispatcher.on_down(self.key, move |ev| handle_down(&inner, ev.point));
            let inner = self.inner.clone();
            dispatcher.on_up(self.key, move |ev| handle_up(&inner, ev.point));
        }
        self.anchored = Some(AnchoredDispatchers {
            mouse: mouse.clone(),
            touch: touch.clone(),
        });
        self
    }

    /// Deregisters this interaction from both dispatchers, clears the region
    /// and resets to idle. Idempotent; a never-anchored interaction is fine.
    pub fn unanchor(&mut self) {
        if let Some(anchored) = self.anchored.take() {
            anchored.mouse.deregister(&self.key);
            anchored.touch.deregister(&self.key);
        }
        let mut inner = self.inner.borrow_mut();
        inner.region = None;
        inner.armed = false;
    }
}

impl Default for ClickInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ClickInteraction {
    fn drop(&mut self) {
        self.unanchor();
    }
}

impl core::fmt::Debug for ClickInteraction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClickInteraction")
            .field("key", &self.key)
            .field("armed", &self.inner.borrow().armed)
            .field("anchored", &self.anchored.is_some())
            .finish_non_exhaustive()
    }
}

fn handle_down(inner: &Rc<RefCell<ClickInner>>, point: Point) {
    // Region queried now, not at anchor time; no borrow is held across the
    // hit test so the region may call back into the interaction.
    let region = inner.borrow().region.clone();
    if region.is_some_and(|r| r.contains_point(point)) {
        inner.borrow_mut().armed = true;
    }
}

fn handle_up(inner: &Rc<RefCell<ClickInner>>, point: Point) {
    let (armed, region, callback) = {
        let inner = inner.borrow();
        (inner.armed, inner.region.clone(), inner.callback.clone())
    };
    // Invoke before resetting so the interaction still reads as armed inside
    // the callback. No borrow is held, so the callback may re-enter.
    if armed && region.is_some_and(|r| r.contains_point(point)) {
        if let Some(callback) = callback {
            callback(point);
        }
    }
    inner.borrow_mut().armed = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::Cell;
    use kurbo::{Affine, Rect};
    use rustle_pointer::types::{DeviceClass, PointerPhase, SourceId};

    struct Fixture {
        mouse: Rc<PointerDispatcher>,
        touch: Rc<PointerDispatcher>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                mouse: Rc::new(PointerDispatcher::new(DeviceClass::Mouse, Affine::IDENTITY)),
                touch: Rc::new(PointerDispatcher::new(DeviceClass::Touch, Affine::IDENTITY)),
            }
        }

        fn mouse_down(&self, x: f64, y: f64) {
            self.mouse
                .dispatch(PointerPhase::Down, Point::new(x, y), SourceId::mouse());
        }

        fn mouse_up(&self, x: f64, y: f64) {
            self.mouse
                .dispatch(PointerPhase::Up, Point::new(x, y), SourceId::mouse());
        }
    }

    fn region() -> Rc<Rect> {
        Rc::new(Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    fn counting_click(click: &ClickInteraction) -> Rc<RefCell<Vec<Point>>> {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let c = calls.clone();
        click.set_click_callback(move |p| c.borrow_mut().push(p));
        calls
    }

    // Down inside, up inside: one callback with the up point.
    #[test]
    fn click_inside_fires_once() {
        let fx = Fixture::new();
        let mut click = ClickInteraction::new();
        let calls = counting_click(&click);
        click.anchor(region(), &fx.mouse, &fx.touch);

        fx.mouse_down(5.0, 5.0);
        assert!(click.is_armed());
        fx.mouse_up(5.0, 5.0);

        assert_eq!(&*calls.borrow(), &[Point::new(5.0, 5.0)]);
        assert!(!click.is_armed());
    }

    // Down inside, up outside: no callback, state resets.
    #[test]
    fn release_outside_cancels() {
        let fx = Fixture::new();
        let mut click = ClickInteraction::new();
        let calls = counting_click(&click);
        click.anchor(region(), &fx.mouse, &fx.touch);

        fx.mouse_down(5.0, 5.0);
        fx.mouse_up(50.0, 50.0);

        assert!(calls.borrow().is_empty());
        assert!(!click.is_armed());
    }

    // Down outside never arms, so a later up inside does nothing.
    #[test]
    fn press_outside_never_arms() {
        let fx = Fixture::new();
        let mut click = ClickInteraction::new();
        let calls = counting_click(&click);
        click.anchor(region(), &fx.mouse, &fx.touch);

        fx.mouse_down(50.0, 50.0);
        assert!(!click.is_armed());
        fx.mouse_up(5.0, 5.0);

        assert!(calls.borrow().is_empty());
        assert!(!click.is_armed());
    }

    #[test]
    fn touch_phases_recognize_clicks_too() {
        let fx = Fixture::new();
        let mut click = ClickInteraction::new();
        let calls = counting_click(&click);
        click.anchor(region(), &fx.mouse, &fx.touch);

        fx.touch
            .dispatch(PointerPhase::Down, Point::new(2.0, 2.0), SourceId::touch(0));
        fx.touch
            .dispatch(PointerPhase::Up, Point::new(3.0, 3.0), SourceId::touch(0));

        assert_eq!(&*calls.borrow(), &[Point::new(3.0, 3.0)]);
    }

    // Bounds are re-queried at each phase: a region that moves away between
    // down and up turns the gesture into a miss.
    #[test]
    fn bounds_change_between_down_and_up() {
        let fx = Fixture::new();
        let mut click = ClickInteraction::new();
        let calls = counting_click(&click);
        let bounds = Rc::new(Cell::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        click.anchor(bounds.clone(), &fx.mouse, &fx.touch);

        fx.mouse_down(5.0, 5.0);
        assert!(click.is_armed());
        bounds.set(Rect::new(100.0, 100.0, 110.0, 110.0));
        fx.mouse_up(5.0, 5.0);

        assert!(calls.borrow().is_empty());
        assert!(!click.is_armed());
    }

    #[test]
    fn missing_callback_is_a_noop() {
        let fx = Fixture::new();
        let mut click = ClickInteraction::new();
        click.anchor(region(), &fx.mouse, &fx.touch);

        fx.mouse_down(5.0, 5.0);
        fx.mouse_up(5.0, 5.0);
        assert!(!click.is_armed());
    }

    #[test]
    fn callback_is_single_and_last_write_wins() {
        let fx = Fixture::new();
        let mut click = ClickInteraction::new();
        let first = Rc::new(Cell::new(0_u32));
        let second = Rc::new(Cell::new(0_u32));

        let f = first.clone();
        click.set_click_callback(move |_| f.set(f.get() + 1));
        let s = second.clone();
        click.set_click_callback(move |_| s.set(s.get() + 1));
        assert!(click.click_callback().is_some());
        click.anchor(region(), &fx.mouse, &fx.touch);

        fx.mouse_down(5.0, 5.0);
        fx.mouse_up(5.0, 5.0);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);

        click.clear_click_callback();
        assert!(click.click_callback().is_none());
        fx.mouse_down(5.0, 5.0);
        fx.mouse_up(5.0, 5.0);
        assert_eq!(second.get(), 1);
    }

    // Without a matching up, the interaction stays armed until torn down.
    #[test]
    fn armed_persists_until_up_or_unanchor() {
        let fx = Fixture::new();
        let mut click = ClickInteraction::new();
        click.anchor(region(), &fx.mouse, &fx.touch);

        fx.mouse_down(5.0, 5.0);
        fx.mouse
            .dispatch(PointerPhase::Move, Point::new(200.0, 200.0), SourceId::mouse());
        assert!(click.is_armed());

        click.unanchor();
        assert!(!click.is_armed());
        assert!(!click.is_anchored());
    }

    #[test]
    fn unanchor_removes_registrations_and_is_idempotent() {
        let fx = Fixture::new();
        let mut click = ClickInteraction::new();
        let calls = counting_click(&click);
        click.anchor(region(), &fx.mouse, &fx.touch);
        assert!(!fx.mouse.is_idle());
        assert!(!fx.touch.is_idle());

        click.unanchor();
        click.unanchor();
        assert!(fx.mouse.is_idle());
        assert!(fx.touch.is_idle());

        fx.mouse_down(5.0, 5.0);
        fx.mouse_up(5.0, 5.0);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn drop_deregisters_from_dispatchers() {
        let fx = Fixture::new();
        {
            let mut click = ClickInteraction::new();
            click.anchor(region(), &fx.mouse, &fx.touch);
            assert!(!fx.mouse.is_idle());
        }
        assert!(fx.mouse.is_idle());
        assert!(fx.touch.is_idle());
    }

    // Re-anchoring moves the registrations; events on the old target no
    // longer reach the interaction, and the new target fires exactly once.
    #[test]
    fn reanchor_moves_to_new_target() {
        let old = Fixture::new();
        let new = Fixture::new();
        let mut click = ClickInteraction::new();
        let calls = counting_click(&click);

        click.anchor(region(), &old.mouse, &old.touch);
        click.anchor(region(), &new.mouse, &new.touch);
        assert!(old.mouse.is_idle());

        old.mouse_down(5.0, 5.0);
        old.mouse_up(5.0, 5.0);
        assert!(calls.borrow().is_empty());

        new.mouse_down(5.0, 5.0);
        new.mouse_up(5.0, 5.0);
        assert_eq!(calls.borrow().len(), 1);
    }

    // Sibling interactions on the same dispatchers have distinct keys and do
    // not disturb each other.
    #[test]
    fn sibling_interactions_are_independent() {
        let fx = Fixture::new();
        let mut a = ClickInteraction::new();
        let mut b = ClickInteraction::new();
        assert_ne!(a.key(), b.key());

        let a_calls = counting_click(&a);
        let b_calls = counting_click(&b);
        a.anchor(region(), &fx.mouse, &fx.touch);
        b.anchor(region(), &fx.mouse, &fx.touch);

        fx.mouse_down(5.0, 5.0);
        fx.mouse_up(5.0, 5.0);
        assert_eq!(a_calls.borrow().len(), 1);
        assert_eq!(b_calls.borrow().len(), 1);

        a.unanchor();
        fx.mouse_down(5.0, 5.0);
        fx.mouse_up(5.0, 5.0);
        assert_eq!(a_calls.borrow().len(), 1);
        assert_eq!(b_calls.borrow().len(), 2);
    }

    // The callback may re-enter the interaction, e.g. to replace itself.
    #[test]
    fn callback_may_replace_itself() {
        let fx = Fixture::new();
        let click = Rc::new(RefCell::new(ClickInteraction::new()));
        let swapped_hits = Rc::new(Cell::new(0_u32));

        let click2 = click.clone();
        let hits = swapped_hits.clone();
        click.borrow().set_click_callback(move |_| {
            let hits = hits.clone();
            click2
                .borrow()
                .set_click_callback(move |_| hits.set(hits.get() + 1));
        });
        click
            .borrow_mut()
            .anchor(region(), &fx.mouse, &fx.touch);

        fx.mouse_down(5.0, 5.0);
        fx.mouse_up(5.0, 5.0);
        assert_eq!(swapped_hits.get(), 0);

        fx.mouse_down(5.0, 5.0);
        fx.mouse_up(5.0, 5.0);
        assert_eq!(swapped_hits.get(), 1);
    }
}
