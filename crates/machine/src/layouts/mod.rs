//! # Machine Layouts
//!
//! The stock machines, numbered and built by plain construction
//! functions. A layout is pure data: it places components, wires
//! rotation, and hands the machine back. Everything dynamic happens in
//! the simulation afterwards.

mod dominoes;
mod machine_one;
mod machine_two;

pub use dominoes::{domino, DominoColor};

use crate::error::MachineError;
use crate::simulation::Machine;

type LayoutFn = fn() -> Result<Machine, MachineError>;

const LAYOUTS: &[(i32, LayoutFn)] = &[(1, machine_one::create), (2, machine_two::create)];

/// Numbers with a registered layout, in order.
pub fn numbers() -> impl Iterator<Item = i32> {
    LAYOUTS.iter().map(|(number, _)| *number)
}

/// Build the machine registered under `number`, or `None` for an
/// unknown number or a layout whose wiring fails.
pub fn create(number: i32) -> Option<Machine> {
    let (_, build) = LAYOUTS.iter().find(|(id, _)| *id == number)?;
    match build() {
        Ok(machine) => Some(machine),
        Err(error) => {
            tracing::error!(number, %error, "machine layout failed to wire");
            None
        }
    }
}
