use machine::{layouts, MachineSystem};

#[test]
fn reseek_after_backward_scrub_matches() {
    let mut system = MachineSystem::new();
    system.seek_to_frame(90);
    let first = system.machine().unwrap().snapshot();

    system.seek_to_frame(30);
    system.seek_to_frame(90);
    let second = system.machine().unwrap().snapshot();

    assert_eq!(first, second);
}

#[test]
fn machine_two_replays_identically() {
    let mut system = MachineSystem::new();
    system.set_machine_number(2);
    system.seek_to_frame(120);
    let first = system.machine().unwrap().snapshot();

    system.seek_to_frame(0);
    system.seek_to_frame(120);
    let second = system.machine().unwrap().snapshot();

    assert_eq!(first, second);
}

#[test]
fn independent_systems_agree_frame_by_frame() {
    let mut left = MachineSystem::new();
    let mut right = MachineSystem::new();
    for frame in [1, 2, 15, 60] {
        left.seek_to_frame(frame);
        right.seek_to_frame(frame);
        assert_eq!(
            left.machine().unwrap().snapshot(),
            right.machine().unwrap().snapshot(),
        );
    }
}

#[test]
fn rewinding_to_zero_matches_a_fresh_build() {
    let mut system = MachineSystem::new();
    system.seek_to_frame(45);
    system.seek_to_frame(0);
    let rewound = system.machine().unwrap().snapshot();

    let fresh = layouts::create(1).unwrap().snapshot();
    assert_eq!(rewound, fresh);
}

#[test]
fn reset_twice_equals_reset_once() {
    let mut machine = layouts::create(1).unwrap();
    for frame in 0..20 {
        machine.set_current_time(frame as f32 / 30.0);
        machine.update(1.0 / 30.0);
    }
    machine.reset();
    let once = machine.snapshot();
    machine.reset();
    let twice = machine.snapshot();
    assert_eq!(once, twice);
}
