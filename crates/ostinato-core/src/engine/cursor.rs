//! Playback and record cursors.

/// Playback direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayDirection {
    #[default]
    Forward,
    Reverse,
}

impl PlayDirection {
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward)
    }

    pub fn is_reverse(&self) -> bool {
        matches!(self, Self::Reverse)
    }
}

/// Fractional playback position within the loop region.
///
/// `position` stays in `[0, length)`; wrapping adds or subtracts the loop
/// length rather than clamping, so the sub-sample remainder survives the
/// boundary.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackCursor {
    position: f32,
    speed: f32,
    direction: PlayDirection,
}

impl PlaybackCursor {
    pub fn new() -> Self {
        Self {
            position: 0.0,
            speed: 1.0,
            direction: PlayDirection::Forward,
        }
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    /// Non-positive speeds are silently ignored; direction is a separate flag.
    pub fn set_speed(&mut self, speed: f32) {
        if speed > 0.0 {
            self.speed = speed;
        }
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        self.direction = if reverse {
            PlayDirection::Reverse
        } else {
            PlayDirection::Forward
        };
    }

    pub fn reset(&mut self) {
        self.position = 0.0;
    }

    /// Advance by `speed` in the current direction, wrapping within
    /// `[0, length)`.
    #[inline]
    pub fn advance(&mut self, length: usize) {
        let length = length as f32;
        if self.direction.is_reverse() {
            self.position -= self.speed;
            if self.position < 0.0 {
                self.position += length;
            }
        } else {
            self.position += self.speed;
            if self.position >= length {
                self.position -= length;
            }
        }
    }
}

impl Default for PlaybackCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Integer write head used while recording.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordCursor {
    pub head: usize,
    pub active: bool,
}

impl RecordCursor {
    pub fn start(&mut self) {
        self.head = 0;
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Advance one sample; on reaching `capacity` the head wraps to zero and
    /// recording deactivates (a recording never exceeds the store).
    #[inline]
    pub fn advance(&mut self, capacity: usize) {
        self.head += 1;
        if self.head >= capacity {
            self.head = 0;
            self.active = false;
        }
    }
}
