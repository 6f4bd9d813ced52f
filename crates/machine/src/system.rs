//! # Machine System
//!
//! Frame-indexed driver around one machine. Consumers never step time
//! themselves; they declare the frame they want and the system runs the
//! machine forward, or resets and replays from zero when asked to go
//! backward. Replay is what makes scrubbing deterministic: any route to
//! frame N passes through the same update sequence.

use canvas::Canvas;
use glam::Vec2;

use crate::layouts;
use crate::simulation::Machine;

/// Frames of machine time per second unless overridden.
pub const DEFAULT_FRAME_RATE: f32 = 30.0;

/// Screen pixels per machine unit when drawing.
pub const PIXELS_PER_UNIT: f32 = 1.5;

pub struct MachineSystem {
    location: Vec2,
    pixels_per_unit: f32,
    frame: u32,
    frame_rate: f32,
    machine_number: i32,
    machine: Option<Machine>,
}

impl Default for MachineSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MachineSystem {
    /// A system with machine number 1 loaded at frame zero.
    pub fn new() -> Self {
        let mut system = Self {
            location: Vec2::ZERO,
            pixels_per_unit: PIXELS_PER_UNIT,
            frame: 0,
            frame_rate: DEFAULT_FRAME_RATE,
            machine_number: 0,
            machine: None,
        };
        system.set_machine_number(1);
        system
    }

    /// Load the machine layout with the given number, starting over at
    /// frame zero. An unknown number leaves no machine loaded.
    pub fn set_machine_number(&mut self, number: i32) {
        self.machine = layouts::create(number);
        if self.machine.is_none() {
            tracing::warn!(number, "no machine with this number");
        }
        self.machine_number = number;
        self.frame = 0;
    }

    pub fn machine_number(&self) -> i32 {
        self.machine_number
    }

    /// Run the machine to `frame`. Forward seeks update frame by frame
    /// from where the machine is; backward seeks reset to zero first
    /// and replay.
    pub fn seek_to_frame(&mut self, frame: u32) {
        let Some(machine) = self.machine.as_mut() else {
            self.frame = frame;
            return;
        };
        if frame < self.frame {
            self.frame = 0;
            machine.reset();
        }
        while self.frame < frame {
            machine.set_current_time(self.frame as f32 / self.frame_rate);
            machine.update(1.0 / self.frame_rate);
            self.frame += 1;
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Frame rate in frames per second, never below 1.
    pub fn set_frame_rate(&mut self, rate: f32) {
        self.frame_rate = if rate > 1.0 { rate } else { 1.0 };
    }

    pub fn frame_rate(&self) -> f32 {
        self.frame_rate
    }

    /// Machine time corresponding to the current frame, in seconds.
    pub fn machine_time(&self) -> f32 {
        self.frame as f32 / self.frame_rate
    }

    pub fn set_location(&mut self, location: Vec2) {
        self.location = location;
    }

    pub fn location(&self) -> Vec2 {
        self.location
    }

    pub fn set_pixels_per_unit(&mut self, scale: f32) {
        self.pixels_per_unit = scale;
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    pub fn machine(&self) -> Option<&Machine> {
        self.machine.as_ref()
    }

    pub fn machine_mut(&mut self) -> Option<&mut Machine> {
        self.machine.as_mut()
    }

    /// Draw at the system location, machine units scaled to pixels
    /// with y flipped so machine y points up.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.push();
        canvas.translate(self.location);
        canvas.scale(self.pixels_per_unit, -self.pixels_per_unit);
        if let Some(machine) = &self.machine {
            machine.draw(canvas);
        }
        canvas.pop();
    }
}
