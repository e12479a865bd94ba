// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for pointer dispatch: phases, device classes, sources,
//! normalized events, and consumer keys.

use kurbo::Point;

/// The phase of a pointer event within a press/move/release cycle.
///
/// Mouse and touch sources map onto the same three phases (touch start/end
/// arrive as [`Down`](Self::Down)/[`Up`](Self::Up)), so gesture state
/// machines can consume both classes uniformly.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerPhase {
    /// Button press or touch start.
    Down,
    /// Button release or touch end.
    Up,
    /// Pointer movement.
    Move,
}

bitflags::bitflags! {
    /// A set of pointer phases, used to describe which phases a dispatcher
    /// currently has handlers for.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PhaseSet: u8 {
        /// Press / touch-start phase.
        const DOWN = 0b0000_0001;
        /// Release / touch-end phase.
        const UP   = 0b0000_0010;
        /// Movement phase.
        const MOVE = 0b0000_0100;
    }
}

impl PointerPhase {
    /// Converts this phase into a single-element [`PhaseSet`].
    #[must_use]
    pub const fn into_set(self) -> PhaseSet {
        match self {
            Self::Down => PhaseSet::DOWN,
            Self::Up => PhaseSet::UP,
            Self::Move => PhaseSet::MOVE,
        }
    }
}

/// The class of physical input device feeding a dispatcher.
///
/// One dispatcher instance exists per (rendering target, device class); a
/// consumer interested in both classes registers with both dispatchers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DeviceClass {
    /// Mouse-class input (mouse, trackpad, pen-as-mouse).
    Mouse,
    /// Touch-class input (one entry per active touch point).
    Touch,
}

/// Identifies the physical source of one pointer event.
///
/// The mouse is a single source; each concurrent touch point carries its own
/// platform touch index so consumers can tell contacts apart.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SourceId {
    /// Device class the event originated from.
    pub class: DeviceClass,
    /// Index of the contact within its class. Always `0` for the mouse.
    pub index: u32,
}

impl SourceId {
    /// The mouse source.
    #[must_use]
    pub const fn mouse() -> Self {
        Self {
            class: DeviceClass::Mouse,
            index: 0,
        }
    }

    /// The touch source with the given platform touch index.
    #[must_use]
    pub const fn touch(index: u32) -> Self {
        Self {
            class: DeviceClass::Touch,
            index,
        }
    }
}

/// A normalized pointer event as seen by dispatcher consumers.
///
/// The point is in the owning component's local coordinate space; the
/// dispatcher is the only place raw platform coordinates are translated.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event position in component-local coordinates.
    pub point: Point,
    /// Which physical source produced the event.
    pub source: SourceId,
}

/// Structural identity of one dispatcher consumer.
///
/// A consumer derives its key from its own identity (a scope name plus a
/// unique id) so that re-registering replaces only its own handler and
/// teardown cannot disturb sibling consumers. Two keys with equal fields
/// address the same registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct HandlerKey {
    /// Namespace of the consumer, e.g. `"interaction.click"`.
    pub scope: &'static str,
    /// Unique id within the scope, typically from a monotonic counter.
    pub id: u64,
}

impl HandlerKey {
    /// Creates a key from a scope name and an id unique within that scope.
    #[must_use]
    pub const fn new(scope: &'static str, id: u64) -> Self {
        Self { scope, id }
    }
}
