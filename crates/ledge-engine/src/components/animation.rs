//! Sprite animation over a texture atlas.
//!
//! Frames are atlas cell indices, read row-major: cell `i` sits at column
//! `i % cols`, row `i / cols`. Animation only advances while the entity has
//! movement intent and snaps back to the first frame when it stops.

/// Seconds each frame is held while moving.
pub const DEFAULT_FRAME_DURATION: f32 = 0.25;

/// Animation state for an entity drawn from an atlas.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAnimation {
    /// Atlas cell index for each frame.
    pub frames: Vec<u32>,
    /// Number of columns in the atlas grid.
    pub cols: u32,
    /// Number of rows in the atlas grid.
    pub rows: u32,
    /// Current position in `frames`.
    pub frame_index: usize,
    /// Time accumulated in the current frame.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
}

impl SpriteAnimation {
    /// Create from an explicit frame list.
    pub fn new(frames: Vec<u32>, cols: u32, rows: u32) -> Self {
        Self {
            frames,
            cols,
            rows,
            frame_index: 0,
            frame_timer: 0.0,
            frame_duration: DEFAULT_FRAME_DURATION,
        }
    }

    /// Create a run of consecutive cells starting at `start`, stopping at `u32::MAX`.
    pub fn strip(start: u32, frame_count: u32, cols: u32, rows: u32) -> Self {
        Self::new((start..start.saturating_add(frame_count)).collect(), cols, rows)
    }

    pub fn with_frame_duration(mut self, frame_duration: f32) -> Self {
        self.frame_duration = frame_duration;
        self
    }

    /// Get the number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Atlas cell for the current frame.
    pub fn current_cell(&self) -> Option<u32> {
        self.frames.get(self.frame_index).copied()
    }

    /// Back to the idle pose.
    pub fn reset(&mut self) {
        self.frame_index = 0;
    }

    /// Advance by dt seconds. Returns true if the frame changed.
    ///
    /// While `moving`, the timer accumulates and each time it reaches
    /// `frame_duration` it restarts from zero and the frame steps forward,
    /// wrapping at the end. When not moving the frame resets to 0.
    pub fn tick(&mut self, dt: f32, moving: bool) -> bool {
        if self.frames.is_empty() {
            return false;
        }

        if !moving {
            let changed = self.frame_index != 0;
            self.reset();
            return changed;
        }

        self.frame_timer += dt;
        if self.frame_timer < self.frame_duration {
            return false;
        }

        self.frame_timer = 0.0;
        self.frame_index += 1;
        if self.frame_index >= self.frames.len() {
            self.frame_index = 0;
        }
        true
    }
}
