//! # Machine One
//!
//! The basketball run. A ball rolls off a wedge onto stacked beams, a
//! motor-driven arm knocks a second ball loose, conveyors ferry balls
//! across three levels, domino chains topple on the floor and the
//! platform, and everything funnels toward one goal on the right.

use canvas::Color;
use glam::Vec2;

use crate::components::{Body, Conveyor, Goal, Motor, Pulley};
use crate::error::MachineError;
use crate::layouts::dominoes::{domino, DominoColor};
use crate::simulation::Machine;

#[allow(clippy::too_many_lines)]
pub(super) fn create() -> Result<Machine, MachineError> {
    let mut machine = Machine::new();

    machine.add(Body::rectangle(-300.0, 0.0, 600.0, 15.0));

    machine.add(
        Body::circle(12.0)
            .dynamic()
            .at(-200.0, 350.0)
            .color(Color::ORANGE),
    );
    machine.add(Body::points(vec![
        Vec2::new(-210.0, 340.0),
        Vec2::new(-210.0, 310.0),
        Vec2::new(-140.0, 310.0),
    ]));
    machine.add(Body::rectangle(-210.0, 290.0, 375.0, 20.0).color(Color::BROWN));

    machine.add(Goal::new().at(270.0, 15.0));

    machine.add(Body::rectangle(-210.0, 245.0, 375.0, 20.0).color(Color::BROWN));
    machine.add(
        Body::circle(12.0)
            .dynamic()
            .at(-190.0, 280.0)
            .color(Color::ORANGE),
    );

    // The arm swings from the motor shaft, so it mounts there and takes
    // its rotation with a rigid 1:1 coupling.
    let arm_motor = Motor::new()
        .at(-210.0, 180.0)
        .initially_running(true)
        .speed(1.0);
    let arm_shaft = arm_motor.shaft_position();
    let arm_motor_id = machine.add(arm_motor);
    let arm_id = machine.add(
        Body::points(vec![
            Vec2::new(-7.0, 10.0),
            Vec2::new(7.0, 10.0),
            Vec2::new(7.0, -60.0),
            Vec2::new(-7.0, -60.0),
        ])
        .kinematic()
        .at(arm_shaft.x, arm_shaft.y),
    );
    machine.connect(arm_motor_id, arm_id, 1.0)?;

    let left_conveyor = Conveyor::new().at(-230.0, 110.0);
    let left_shaft = left_conveyor.shaft_position();
    let left_conveyor_id = machine.add(left_conveyor);

    machine.add(
        Body::circle(12.0)
            .dynamic()
            .at(-250.0, 140.0)
            .color(Color::BLUE),
    );
    machine.add(Body::rectangle(-165.0, 110.0, 140.0, 14.0).color(Color::BROWN));

    let top_motor = Motor::new().at(10.0, 130.0).speed(2.0);
    let top_motor_shaft = top_motor.shaft_position();
    let top_motor_id = machine.add(top_motor);

    let top_conveyor = Conveyor::new().at(120.0, 200.0);
    let top_shaft = top_conveyor.shaft_position();
    let top_conveyor_id = machine.add(top_conveyor);

    machine.add(
        Body::circle(12.0)
            .dynamic()
            .at(90.0, 230.0)
            .color(Color::BLUE),
    );

    let left_motor = Motor::new().at(-40.0, 15.0).speed(0.8);
    let left_motor_shaft = left_motor.shaft_position();
    let left_motor_id = machine.add(left_motor);

    let bottom_motor = Motor::new().at(240.0, 15.0).speed(-1.3);
    let bottom_motor_shaft = bottom_motor.shaft_position();
    let bottom_motor_id = machine.add(bottom_motor);

    let bottom_conveyor = Conveyor::new().at(60.0, 55.0);
    let bottom_shaft = bottom_conveyor.shaft_position();
    let bottom_conveyor_id = machine.add(bottom_conveyor);

    machine.add(
        Body::circle(12.0)
            .dynamic()
            .at(100.0, 80.0)
            .color(Color::BLUE),
    );

    // Bottom belt run: motor shaft to the bottom conveyor shaft.
    let bottom_drive = Pulley::new(12.0).at(bottom_motor_shaft);
    let bottom_drive_radius = bottom_drive.radius();
    let bottom_drive_id = machine.add(bottom_drive);
    machine.connect(bottom_motor_id, bottom_drive_id, 1.0)?;

    let bottom_driven = Pulley::new(12.0).at(bottom_shaft).belt_to(bottom_drive_id);
    let bottom_driven_radius = bottom_driven.radius();
    let bottom_driven_id = machine.add(bottom_driven);
    machine.connect(
        bottom_drive_id,
        bottom_driven_id,
        bottom_drive_radius / bottom_driven_radius,
    )?;
    machine.connect(bottom_driven_id, bottom_conveyor_id, 1.0)?;

    // Left belt run.
    let left_drive = Pulley::new(12.0).at(left_motor_shaft);
    let left_drive_radius = left_drive.radius();
    let left_drive_id = machine.add(left_drive);
    machine.connect(left_motor_id, left_drive_id, 1.0)?;

    let left_driven = Pulley::new(12.0).at(left_shaft).belt_to(left_drive_id);
    let left_driven_radius = left_driven.radius();
    let left_driven_id = machine.add(left_driven);
    machine.connect(
        left_drive_id,
        left_driven_id,
        left_drive_radius / left_driven_radius,
    )?;
    machine.connect(left_driven_id, left_conveyor_id, 1.0)?;

    // Top belt run, stepped down onto a smaller wheel.
    let top_drive = Pulley::new(12.0).at(top_motor_shaft);
    let top_drive_radius = top_drive.radius();
    let top_drive_id = machine.add(top_drive);
    machine.connect(top_motor_id, top_drive_id, 1.0)?;

    let top_driven = Pulley::new(8.0).at(top_shaft).belt_to(top_drive_id);
    let top_driven_radius = top_driven.radius();
    let top_driven_id = machine.add(top_driven);
    machine.connect(
        top_drive_id,
        top_driven_id,
        top_drive_radius / top_driven_radius,
    )?;
    machine.connect(top_driven_id, top_conveyor_id, 1.0)?;

    // Floor dominoes.
    for (x, color) in [
        (-100.0, DominoColor::Green),
        (-110.0, DominoColor::Red),
        (-120.0, DominoColor::Blue),
        (-130.0, DominoColor::Black),
    ] {
        machine.add(domino(x, 15.0, color));
    }

    // Platform dominoes on the small beam.
    for (x, color) in [
        (-100.0, DominoColor::Green),
        (-110.0, DominoColor::Red),
        (-120.0, DominoColor::Blue),
        (-130.0, DominoColor::Green),
        (-90.0, DominoColor::Red),
        (-80.0, DominoColor::Blue),
        (-70.0, DominoColor::Black),
        (-60.0, DominoColor::Green),
        (-50.0, DominoColor::Red),
    ] {
        machine.add(domino(x, 125.0, color));
    }

    Ok(machine)
}
