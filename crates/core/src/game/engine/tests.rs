//! Regression test module wiring for engine behaviors.

mod monster_ai;
mod phase_order;

/// Shared imports for engine regression tests.
mod support {
    pub(super) use super::super::*;
    pub(super) use crate::game::test_support::*;
    pub(super) use crate::state::Tile;
}
