//! Single-slot transient notification with timed auto-dismiss.
//!
//! ```text
//! Hidden --show--> FadingIn --300ms--> Visible --3000ms / dismiss--> FadingOut --300ms--> Hidden
//! ```
//!
//! There is no queue. Showing a message while another is visible cancels the
//! pending auto-dismiss, fades the old message out quickly (150ms) and then
//! fades the new one in. The latest message always wins.
//!
//! # Mid-fade Behavior
//!
//! | Phase when `show` is called | Result                                              |
//! |-----------------------------|-----------------------------------------------------|
//! | `FadingIn`                  | Text replaced in place, fade continues              |
//! | `FadingOut` (cross-fade)    | Replaces the message waiting to fade in             |
//! | `FadingOut` (dismissal)     | Takes the new text, fades back in from current opacity |
//!
//! # Scheduling
//!
//! The channel never spawns anything. The owner calls [`ToastChannel::update`]
//! once per frame. Every transition that fell due since the last call is
//! applied, each one starting at the exact instant the previous one ended, so a
//! late poll never stretches the visible window.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::clock::Clock;
use crate::config::{TOAST_CROSS_FADE, TOAST_FADE_IN, TOAST_FADE_OUT, TOAST_VISIBLE};
use crate::timer::Timer;

/// Visible phase of the toast.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ToastPhase {
    #[default]
    Hidden,
    FadingIn,
    Visible,
    FadingOut,
}

/// Linear opacity ramp.
#[derive(Clone, Copy, Debug)]
struct Fade {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Fade {
    fn opacity_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * t
    }

    fn end(&self) -> Instant {
        self.started + self.duration
    }
}

pub struct ToastChannel<C: Clock> {
    clock: C,
    phase: ToastPhase,
    message: String,
    /// Message waiting for the cross-fade to finish.
    pending: Option<String>,
    fade: Option<Fade>,
    /// Auto-dismiss deadline, armed only while `Visible`.
    hide_timer: Timer,
}

impl<C: Clock> ToastChannel<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            phase: ToastPhase::Hidden,
            message: String::new(),
            pending: None,
            fade: None,
            hide_timer: Timer::new(),
        }
    }

    /// Display `message`, replacing whatever is showing.
    pub fn show(&mut self, message: impl Into<String>) {
        let message = message.into();
        let now = self.clock.now();
        self.settle(now);

        match self.phase {
            ToastPhase::Hidden => {
                self.message = message;
                self.start_fade(ToastPhase::FadingIn, 0.0, 1.0, now, TOAST_FADE_IN);
            }
            ToastPhase::FadingIn => {
                self.message = message;
            }
            ToastPhase::Visible => {
                self.hide_timer.cancel();
                self.pending = Some(message);
                self.start_fade(ToastPhase::FadingOut, 1.0, 0.0, now, TOAST_CROSS_FADE);
            }
            ToastPhase::FadingOut if self.pending.is_some() => {
                self.pending = Some(message);
            }
            ToastPhase::FadingOut => {
                let from = self.opacity_at(now);
                self.message = message;
                self.start_fade(ToastPhase::FadingIn, from, 1.0, now, TOAST_FADE_IN);
            }
        }

        debug!(
            phase = ?self.phase,
            message = self.message.as_str(),
            pending = ?self.pending,
            "Toast show"
        );
    }

    /// Cancel the auto-dismiss and fade out now. No-op when hidden.
    pub fn dismiss(&mut self) {
        let now = self.clock.now();
        self.settle(now);

        self.hide_timer.cancel();
        self.pending = None;

        if matches!(self.phase, ToastPhase::FadingIn | ToastPhase::Visible) {
            let from = self.opacity_at(now);
            self.start_fade(ToastPhase::FadingOut, from, 0.0, now, TOAST_FADE_OUT);
            debug!(message = self.message.as_str(), "Toast dismissed");
        }
    }

    /// Apply every transition that is due. Returns `true` if the phase changed.
    pub fn update(&mut self) -> bool {
        let now = self.clock.now();
        self.settle(now)
    }

    #[inline]
    pub const fn phase(&self) -> ToastPhase {
        self.phase
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.phase != ToastPhase::Hidden
    }

    /// Text currently on screen, if any.
    pub fn message(&self) -> Option<&str> {
        match self.phase {
            ToastPhase::Hidden => None,
            _ => Some(self.message.as_str()),
        }
    }

    /// Opacity in `[0, 1]` for rendering.
    pub fn opacity(&self) -> f32 {
        self.opacity_at(self.clock.now())
    }

    /// When the auto-dismiss will start fading out, if armed.
    #[cfg(test)]
    pub const fn hide_deadline(&self) -> Option<Instant> {
        self.hide_timer.deadline()
    }

    fn opacity_at(&self, now: Instant) -> f32 {
        match (self.phase, self.fade) {
            (ToastPhase::Hidden, _) => 0.0,
            (ToastPhase::Visible, _) => 1.0,
            (_, Some(fade)) => fade.opacity_at(now).clamp(0.0, 1.0),
            (_, None) => 0.0,
        }
    }

    fn start_fade(
        &mut self,
        phase: ToastPhase,
        from: f32,
        to: f32,
        started: Instant,
        duration: Duration,
    ) {
        self.phase = phase;
        self.fade = Some(Fade {
            from,
            to,
            started,
            duration,
        });
    }

    fn settle(&mut self, now: Instant) -> bool {
        let mut changed = false;

        loop {
            match (self.phase, self.fade) {
                (ToastPhase::FadingIn, Some(fade)) if fade.end() <= now => {
                    self.phase = ToastPhase::Visible;
                    self.fade = None;
                    self.hide_timer.schedule(fade.end(), TOAST_VISIBLE);
                    debug!(message = self.message.as_str(), "Toast visible");
                }
                (ToastPhase::Visible, _) => {
                    let Some(expired) = self.hide_timer.take_due(now) else {
                        break;
                    };
                    self.start_fade(ToastPhase::FadingOut, 1.0, 0.0, expired, TOAST_FADE_OUT);
                    debug!(message = self.message.as_str(), "Toast auto-dismiss");
                }
                (ToastPhase::FadingOut, Some(fade)) if fade.end() <= now => {
                    if let Some(next) = self.pending.take() {
                        self.message = next;
                        self.start_fade(ToastPhase::FadingIn, 0.0, 1.0, fade.end(), TOAST_FADE_IN);
                        debug!(message = self.message.as_str(), "Toast cross-faded");
                    } else {
                        self.phase = ToastPhase::Hidden;
                        self.fade = None;
                        self.message.clear();
                        debug!("Toast hidden");
                    }
                }
                _ => break,
            }
            changed = true;
        }

        changed
    }
}
