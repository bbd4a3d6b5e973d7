/// Fixed timestep accumulator.
/// Turns variable frame times into a whole number of equal simulation steps.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Seconds per simulation step.
    dt: f32,
    /// Frame time not yet consumed by a step.
    accumulator: f32,
    /// Upper bound on steps per frame, so a long stall cannot snowball.
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: 10,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add frame time. Returns the number of fixed steps to run now.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if self.dt <= 0.0 {
            return 0;
        }
        self.accumulator = (self.accumulator + frame_dt.max(0.0)).min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Fraction of a step left over (0.0 to 1.0), for render interpolation.
    pub fn alpha(&self) -> f32 {
        if self.dt <= 0.0 {
            return 0.0;
        }
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}
