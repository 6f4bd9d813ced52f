use machine::components::{Body, Motor, Pulley};
use machine::{Component, Machine, MachineError};

const RATE: f32 = 30.0;

fn advance(machine: &mut Machine, frame: &mut u32, count: u32) {
    for _ in 0..count {
        machine.set_current_time(*frame as f32 / RATE);
        machine.update(1.0 / RATE);
        *frame += 1;
    }
}

#[test]
fn running_motor_accumulates_negative_rotation() {
    let mut machine = Machine::new();
    let motor_id = machine.add(Motor::new().initially_running(true).speed(1.0));

    let mut frame = 0;
    advance(&mut machine, &mut frame, 30);

    let motor = machine.component::<Motor>(motor_id).unwrap();
    let rotation = motor.rotation(machine.rotation_graph());
    assert!((rotation + 1.0).abs() < 1e-3);
}

#[test]
fn dormant_motor_holds_zero_rotation() {
    let mut machine = Machine::new();
    let motor_id = machine.add(Motor::new().speed(2.0));

    let mut frame = 0;
    advance(&mut machine, &mut frame, 10);

    let motor = machine.component::<Motor>(motor_id).unwrap();
    assert!(!motor.is_running());
    assert_eq!(motor.rotation(machine.rotation_graph()), 0.0);
}

#[test]
fn pulley_chain_applies_edge_ratios() {
    let mut machine = Machine::new();
    let motor_id = machine.add(Motor::new().initially_running(true).speed(1.0));
    let drive_id = machine.add(Pulley::new(25.0));
    let driven_id = machine.add(Pulley::new(10.0));
    machine.connect(motor_id, drive_id, 1.0).unwrap();
    machine.connect(drive_id, driven_id, 25.0 / 10.0).unwrap();

    let mut frame = 0;
    advance(&mut machine, &mut frame, 30);

    let graph = machine.rotation_graph();
    let drive = machine.component::<Pulley>(drive_id).unwrap();
    let driven = machine.component::<Pulley>(driven_id).unwrap();
    assert!((drive.rotation(graph) + 1.0).abs() < 1e-3);
    assert!((driven.rotation(graph) + 2.5).abs() < 1e-3);
}

#[test]
fn connect_rejects_components_without_endpoints() {
    let mut machine = Machine::new();
    let beam_id = machine.add(Body::rectangle(0.0, 0.0, 10.0, 10.0));
    let motor_id = machine.add(Motor::new());
    let other_motor_id = machine.add(Motor::new());

    assert_eq!(
        machine.connect(beam_id, motor_id, 1.0),
        Err(MachineError::NoSource(beam_id))
    );
    assert_eq!(
        machine.connect(motor_id, other_motor_id, 1.0),
        Err(MachineError::NoSink(other_motor_id))
    );
}

#[test]
fn wiring_a_loop_is_rejected_and_leaves_the_graph_usable() {
    let mut machine = Machine::new();
    let motor_id = machine.add(Motor::new().initially_running(true).speed(1.0));
    let first_id = machine.add(Pulley::new(10.0));
    let second_id = machine.add(Pulley::new(10.0));

    machine.connect(first_id, second_id, 1.0).unwrap();
    assert_eq!(
        machine.connect(second_id, first_id, 1.0),
        Err(MachineError::RotationCycle {
            source: second_id,
            sink: first_id,
        })
    );

    // The surviving edge still carries power once a motor feeds it.
    machine.connect(motor_id, first_id, 1.0).unwrap();
    let mut frame = 0;
    advance(&mut machine, &mut frame, 30);
    let second = machine.component::<Pulley>(second_id).unwrap();
    assert!((second.rotation(machine.rotation_graph()) + 1.0).abs() < 1e-3);
}

#[test]
fn reconnecting_a_sink_switches_drivers() {
    let mut machine = Machine::new();
    let slow_id = machine.add(Motor::new().initially_running(true).speed(1.0));
    let fast_id = machine.add(Motor::new().initially_running(true).speed(3.0));
    let pulley_id = machine.add(Pulley::new(10.0));

    machine.connect(slow_id, pulley_id, 1.0).unwrap();
    machine.connect(fast_id, pulley_id, 1.0).unwrap();

    let mut frame = 0;
    advance(&mut machine, &mut frame, 30);

    let pulley = machine.component::<Pulley>(pulley_id).unwrap();
    assert!((pulley.rotation(machine.rotation_graph()) + 3.0).abs() < 1e-2);
}
