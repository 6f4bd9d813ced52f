use machine::components::{Basket, Body, Conveyor, Goal, Motor};
use machine::{Component, Machine};

const RATE: f32 = 30.0;

fn advance(machine: &mut Machine, frame: &mut u32, count: u32) {
    for _ in 0..count {
        machine.set_current_time(*frame as f32 / RATE);
        machine.update(1.0 / RATE);
        *frame += 1;
    }
}

#[test]
fn dormant_motor_latches_on_contact_and_stays_running() {
    let mut machine = Machine::new();
    machine.add(Body::rectangle(-300.0, 0.0, 600.0, 15.0));
    let motor_id = machine.add(Motor::new().at(0.0, 15.0).speed(1.0));
    machine.add(Body::circle(12.0).dynamic().at(0.0, 85.0));

    let mut frame = 0;
    advance(&mut machine, &mut frame, 5);
    assert!(!machine.component::<Motor>(motor_id).unwrap().is_running());

    // The ball lands on the cage well within four seconds.
    advance(&mut machine, &mut frame, 115);
    let motor = machine.component::<Motor>(motor_id).unwrap();
    assert!(motor.is_running());
    let latched_rotation = motor.rotation(machine.rotation_graph());
    assert!(latched_rotation < 0.0);

    // Still running and still turning a second later.
    advance(&mut machine, &mut frame, 30);
    let motor = machine.component::<Motor>(motor_id).unwrap();
    assert!(motor.is_running());
    assert!(motor.rotation(machine.rotation_graph()) < latched_rotation);
}

#[test]
fn kinematic_arm_holds_still_at_time_zero() {
    let mut machine = Machine::new();
    let motor_id = machine.add(Motor::new().at(0.0, 0.0).initially_running(true).speed(1.0));
    let arm_id = machine.add(
        Body::points(vec![
            glam::Vec2::new(-7.0, 10.0),
            glam::Vec2::new(7.0, 10.0),
            glam::Vec2::new(7.0, -60.0),
            glam::Vec2::new(-7.0, -60.0),
        ])
        .kinematic()
        .at(25.0, 40.0),
    );
    machine.connect(motor_id, arm_id, 1.0).unwrap();

    // First update runs with declared time zero; the velocity command
    // must be zero, not a division blow-up.
    machine.set_current_time(0.0);
    machine.update(1.0 / RATE);
    let arm = machine.component::<Body>(arm_id).unwrap();
    assert_eq!(arm.physics().angular_velocity(machine.world()), 0.0);

    machine.set_current_time(1.0 / RATE);
    machine.update(1.0 / RATE);
    let arm = machine.component::<Body>(arm_id).unwrap();
    let velocity = arm.physics().angular_velocity(machine.world());
    assert!((velocity - 2.0).abs() < 1e-3);
}

#[test]
fn basket_counts_down_one_second_then_launches_and_rearms() {
    let mut machine = Machine::new();
    machine.add(Body::rectangle(-300.0, 0.0, 600.0, 15.0));
    let basket_id = machine.add(Basket::new().at(0.0, 15.0).direction(0.0, 20.0));
    // Dead ball so it settles on the launcher well inside the countdown.
    let ball_id = machine.add(
        Body::circle(10.0)
            .dynamic()
            .at(0.0, 36.0)
            .material(1.0, 0.5, 0.0),
    );

    // Run until the ball lands in the basket.
    let mut frame = 0;
    let mut caught = false;
    for _ in 0..90 {
        advance(&mut machine, &mut frame, 1);
        if machine.component::<Basket>(basket_id).unwrap().is_counting() {
            caught = true;
            break;
        }
    }
    assert!(caught, "ball never reached the basket");

    // One frame short of the full second the basket is still holding.
    advance(&mut machine, &mut frame, 29);
    assert!(machine.component::<Basket>(basket_id).unwrap().is_counting());

    advance(&mut machine, &mut frame, 3);
    let basket = machine.component::<Basket>(basket_id).unwrap();
    assert!(!basket.is_counting());
    let ball = machine.component::<Body>(ball_id).unwrap();
    let velocity = ball.physics().linear_velocity(machine.world());
    assert!(velocity.y > 10.0, "ball was not launched, vy = {}", velocity.y);
}

#[test]
fn goal_scores_two_per_target_pass_and_resets() {
    let mut machine = Machine::new();
    machine.add(Body::rectangle(-300.0, 0.0, 600.0, 15.0));
    machine.add(Goal::new().at(270.0, 15.0));
    let early_ball_id = machine.add(Body::circle(5.0).dynamic().at(252.0, 192.0));
    machine.add(Body::circle(5.0).dynamic().at(264.0, 230.0));

    let mut frame = 0;
    advance(&mut machine, &mut frame, 50);
    assert_eq!(machine.total_score(), 2);

    advance(&mut machine, &mut frame, 70);
    assert_eq!(machine.total_score(), 4);

    // The target never blocks: the first ball is far below it by now.
    let early_ball = machine.component::<Body>(early_ball_id).unwrap();
    assert!(early_ball.physics().position(machine.world()).y < 180.0);

    machine.reset();
    assert_eq!(machine.total_score(), 0);
}

#[test]
fn conveyor_carries_whatever_rides_it() {
    let mut machine = Machine::new();
    let motor_id = machine.add(Motor::new().at(-100.0, 0.0).initially_running(true).speed(1.0));
    let conveyor_id = machine.add(Conveyor::new().at(0.0, 0.0));
    machine.connect(motor_id, conveyor_id, 1.0).unwrap();
    let ball_id = machine.add(
        Body::circle(10.0)
            .dynamic()
            .at(0.0, 26.0)
            .material(1.0, 0.5, 0.0),
    );

    let mut frame = 0;
    advance(&mut machine, &mut frame, 90);

    let ball = machine.component::<Body>(ball_id).unwrap();
    let velocity = ball.physics().linear_velocity(machine.world());
    let position = ball.physics().position(machine.world());
    assert!(velocity.x > 0.5, "belt speed not imparted, vx = {}", velocity.x);
    assert!(velocity.y.abs() < 0.5);
    assert!(position.x > 0.2, "ball did not travel, x = {}", position.x);
}
