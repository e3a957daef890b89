//! Looper mode state machine.
//!
//! Validates every transition against a fixed table and invokes entry/exit
//! notifications so hosts can bind engine lifecycle calls (start/stop
//! recording, overdub) or UI feedback to mode changes. Notifications are
//! injected closures with no-op defaults, keeping the machine independent of
//! any particular host behavior.

use core::fmt;

/// Operating modes of the looper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LooperMode {
    #[default]
    Idle,
    RecordingInitial,
    Playing,
    Overdubbing,
    Paused,
}

impl fmt::Display for LooperMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LooperMode::Idle => "Idle",
            LooperMode::RecordingInitial => "RecordingInitial",
            LooperMode::Playing => "Playing",
            LooperMode::Overdubbing => "Overdubbing",
            LooperMode::Paused => "Paused",
        };
        f.write_str(name)
    }
}

/// Input events that can cause mode transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LooperEvent {
    PressRec,
    ReleaseRec,
    PressPlay,
    PressStop,
    PressPause,
    /// The loop reached its end naturally.
    LoopEnded,
    ClearLoop,
}

impl fmt::Display for LooperEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LooperEvent::PressRec => "PressRec",
            LooperEvent::ReleaseRec => "ReleaseRec",
            LooperEvent::PressPlay => "PressPlay",
            LooperEvent::PressStop => "PressStop",
            LooperEvent::PressPause => "PressPause",
            LooperEvent::LoopEnded => "LoopEnded",
            LooperEvent::ClearLoop => "ClearLoop",
        };
        f.write_str(name)
    }
}

/// Entry/exit notification closure.
pub type ModeHook = Box<dyn FnMut(LooperMode) + Send>;

fn noop_hook() -> ModeHook {
    Box::new(|_| {})
}

/// Finite state machine gating which looper operations are legal.
pub struct ModeController {
    current: LooperMode,
    previous: LooperMode,
    on_enter: ModeHook,
    on_exit: ModeHook,
}

impl ModeController {
    pub fn new() -> Self {
        Self {
            current: LooperMode::Idle,
            previous: LooperMode::Idle,
            on_enter: noop_hook(),
            on_exit: noop_hook(),
        }
    }

    /// Construct with host notification hooks bound up front.
    pub fn with_hooks(on_enter: ModeHook, on_exit: ModeHook) -> Self {
        Self {
            current: LooperMode::Idle,
            previous: LooperMode::Idle,
            on_enter,
            on_exit,
        }
    }

    pub fn set_enter_hook(&mut self, hook: ModeHook) {
        self.on_enter = hook;
    }

    pub fn set_exit_hook(&mut self, hook: ModeHook) {
        self.on_exit = hook;
    }

    pub fn mode(&self) -> LooperMode {
        self.current
    }

    pub fn previous_mode(&self) -> LooperMode {
        self.previous
    }

    pub fn is_in(&self, mode: LooperMode) -> bool {
        self.current == mode
    }

    pub fn is_active(&self) -> bool {
        self.current != LooperMode::Idle
    }

    /// True while capturing input, initial recording or overdub.
    pub fn is_recording(&self) -> bool {
        matches!(
            self.current,
            LooperMode::RecordingInitial | LooperMode::Overdubbing
        )
    }

    /// Whether the table permits `from -> to`. Idle is reachable from
    /// everywhere (stop/reset).
    pub fn can_transition(&self, from: LooperMode, to: LooperMode) -> bool {
        if to == LooperMode::Idle {
            return true;
        }
        match from {
            LooperMode::Idle => to == LooperMode::RecordingInitial,
            LooperMode::RecordingInitial => to == LooperMode::Playing,
            LooperMode::Playing => {
                matches!(to, LooperMode::Overdubbing | LooperMode::Paused)
            }
            LooperMode::Overdubbing => to == LooperMode::Playing,
            LooperMode::Paused => to == LooperMode::Playing,
        }
    }

    /// Map an event to the candidate next mode; unlisted pairs stay put.
    fn next_mode(current: LooperMode, event: LooperEvent) -> LooperMode {
        use LooperEvent::*;
        match (current, event) {
            (LooperMode::Idle, PressRec) => LooperMode::RecordingInitial,

            (LooperMode::RecordingInitial, ReleaseRec) => LooperMode::Playing,
            (LooperMode::RecordingInitial, PressStop) => LooperMode::Idle,

            (LooperMode::Playing, PressRec) => LooperMode::Overdubbing,
            (LooperMode::Playing, PressPause) => LooperMode::Paused,
            (LooperMode::Playing, PressStop | ClearLoop) => LooperMode::Idle,

            (LooperMode::Overdubbing, ReleaseRec) => LooperMode::Playing,
            (LooperMode::Overdubbing, PressStop) => LooperMode::Idle,

            (LooperMode::Paused, PressPlay | PressPause) => LooperMode::Playing,
            (LooperMode::Paused, PressStop | ClearLoop) => LooperMode::Idle,

            _ => current,
        }
    }

    /// Process an event; returns true when a transition was applied.
    pub fn process_event(&mut self, event: LooperEvent) -> bool {
        let candidate = Self::next_mode(self.current, event);
        if candidate == self.current {
            return false;
        }
        self.transition_to(candidate)
    }

    /// Transition directly to a mode if the table allows it.
    ///
    /// Invokes the exit notification for the old mode, then the entry
    /// notification for the new one.
    pub fn transition_to(&mut self, new_mode: LooperMode) -> bool {
        if !self.can_transition(self.current, new_mode) {
            tracing::debug!("mode transition {} -> {} rejected", self.current, new_mode);
            return false;
        }

        (self.on_exit)(self.current);

        self.previous = self.current;
        self.current = new_mode;
        tracing::debug!("mode {} -> {}", self.previous, self.current);

        (self.on_enter)(new_mode);
        true
    }

    /// Force a transition back to Idle.
    pub fn reset(&mut self) {
        self.transition_to(LooperMode::Idle);
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}
