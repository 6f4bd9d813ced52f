//! # Machine Two
//!
//! The basket relay behind a curtain. A ball drops into a row of
//! baskets that toss it from one to the next across the floor while
//! two motor-driven conveyors run overhead, and a banner unfurls once
//! the curtain has opened.

use canvas::Color;

use crate::components::{Banner, Basket, Body, Conveyor, Curtain, Motor, Pulley};
use crate::error::MachineError;
use crate::simulation::Machine;

pub(super) fn create() -> Result<Machine, MachineError> {
    let mut machine = Machine::new();

    machine.add(Body::rectangle(40.0, 300.0, 180.0, 20.0).color(Color::BROWN));
    machine.add(Banner::new().at(220.0, 275.0).countdown(1.0));
    machine.add(Body::rectangle(-300.0, 0.0, 600.0, 15.0));

    machine.add(
        Body::circle(15.0)
            .dynamic()
            .at(-200.0, 200.0)
            .color(Color::ORANGE),
    );

    machine.add(Basket::new().at(-200.0, 15.0).direction(6.0, 9.0));
    machine.add(Basket::new().at(-100.0, 15.0).direction(7.0, 10.0));
    machine.add(Basket::new().at(-15.0, 15.0).direction(6.0, 9.0));
    machine.add(Basket::new().at(85.0, 15.0).direction(7.0, 10.0));
    machine.add(Basket::new().at(210.0, 15.0).direction(4.0, 15.5));

    // High conveyor, driven off a dormant motor through a 25:12 belt.
    let high_motor = Motor::new().at(-50.0, 130.0).speed(-0.5);
    let high_motor_shaft = high_motor.shaft_position();
    let high_motor_id = machine.add(high_motor);

    let high_conveyor = Conveyor::new().at(100.0, 225.0);
    let high_shaft = high_conveyor.shaft_position();
    let high_conveyor_id = machine.add(high_conveyor);

    let high_drive = Pulley::new(25.0).at(high_motor_shaft);
    let high_drive_radius = high_drive.radius();
    let high_drive_id = machine.add(high_drive);
    machine.connect(high_motor_id, high_drive_id, 1.0)?;

    let high_driven = Pulley::new(12.0).at(high_shaft).belt_to(high_drive_id);
    let high_driven_radius = high_driven.radius();
    let high_driven_id = machine.add(high_driven);
    machine.connect(
        high_drive_id,
        high_driven_id,
        high_drive_radius / high_driven_radius,
    )?;
    machine.connect(high_driven_id, high_conveyor_id, 1.0)?;

    // Low conveyor, running from the start on a 25:8 belt.
    let low_motor = Motor::new()
        .at(40.0, 130.0)
        .initially_running(true)
        .speed(-1.15);
    let low_motor_shaft = low_motor.shaft_position();
    let low_motor_id = machine.add(low_motor);

    let low_conveyor = Conveyor::new().at(0.0, 210.0);
    let low_shaft = low_conveyor.shaft_position();
    let low_conveyor_id = machine.add(low_conveyor);

    let low_drive = Pulley::new(25.0).at(low_motor_shaft);
    let low_drive_radius = low_drive.radius();
    let low_drive_id = machine.add(low_drive);
    machine.connect(low_motor_id, low_drive_id, 1.0)?;

    let low_driven = Pulley::new(8.0).at(low_shaft).belt_to(low_drive_id);
    let low_driven_radius = low_driven.radius();
    let low_driven_id = machine.add(low_driven);
    machine.connect(
        low_drive_id,
        low_driven_id,
        low_drive_radius / low_driven_radius,
    )?;
    machine.connect(low_driven_id, low_conveyor_id, 1.0)?;

    machine.add(Body::rectangle(-300.0, 15.0, 40.0, 200.0).color(Color::BLACK));

    // Added last so the closed curtain covers the whole stage.
    machine.add(Curtain::new());

    Ok(machine)
}
