use canvas::{DisplayList, DrawOp};
use machine::{layouts, MachineSystem};

#[test]
fn default_system_loads_machine_one() {
    let system = MachineSystem::new();
    assert_eq!(system.machine_number(), 1);
    assert_eq!(system.frame(), 0);
    let machine = system.machine().unwrap();
    assert!(machine.component_count() > 0);
}

#[test]
fn registry_has_machines_one_and_two() {
    let numbers: Vec<i32> = layouts::numbers().collect();
    assert_eq!(numbers, vec![1, 2]);
    assert!(layouts::create(1).is_some());
    assert!(layouts::create(2).is_some());
    assert!(layouts::create(3).is_none());
}

#[test]
fn thirty_frames_at_default_rate_is_one_second() {
    let mut system = MachineSystem::new();
    system.seek_to_frame(30);
    assert_eq!(system.frame(), 30);
    assert!((system.machine_time() - 1.0).abs() < 1e-6);
}

#[test]
fn declared_time_trails_the_materialized_frame() {
    // Each update runs against the time of the frame it starts from.
    let mut system = MachineSystem::new();
    system.seek_to_frame(10);
    let machine = system.machine().unwrap();
    assert!((machine.current_time() - 9.0 / 30.0).abs() < 1e-6);
}

#[test]
fn frame_rate_clamps_at_one() {
    let mut system = MachineSystem::new();
    system.set_frame_rate(0.25);
    assert!((system.frame_rate() - 1.0).abs() < f32::EPSILON);
    system.set_frame_rate(-10.0);
    assert!((system.frame_rate() - 1.0).abs() < f32::EPSILON);
    system.set_frame_rate(60.0);
    assert!((system.frame_rate() - 60.0).abs() < f32::EPSILON);
}

#[test]
fn backward_seek_lands_on_the_exact_frame() {
    let mut system = MachineSystem::new();
    system.seek_to_frame(20);
    system.seek_to_frame(5);
    assert_eq!(system.frame(), 5);
    assert!((system.machine_time() - 5.0 / 30.0).abs() < 1e-6);
}

#[test]
fn switching_machines_starts_over_at_frame_zero() {
    let mut system = MachineSystem::new();
    system.seek_to_frame(40);
    system.set_machine_number(2);
    assert_eq!(system.machine_number(), 2);
    assert_eq!(system.frame(), 0);
    assert!(system.machine_time().abs() < f32::EPSILON);
}

#[test]
fn unknown_machine_number_tracks_frames_and_draws_nothing() {
    let mut system = MachineSystem::new();
    system.set_machine_number(7);
    assert!(system.machine().is_none());

    system.seek_to_frame(12);
    assert_eq!(system.frame(), 12);

    let mut display = DisplayList::new();
    system.draw(&mut display);
    assert!(display.is_balanced());
    // Only the coordinate-space wrapper is recorded.
    assert_eq!(display.ops().len(), 4);
    assert!(matches!(display.ops()[0], DrawOp::Push));
    assert!(matches!(display.ops()[3], DrawOp::Pop));
}
