//! Turn resolution: movement per phase, then the cross-cutting systems.
//! This file wires focused engine submodules together.

use super::*;

mod advance;
mod movement;

#[cfg(test)]
mod tests;
