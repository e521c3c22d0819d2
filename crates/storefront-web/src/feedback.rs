//! Submit/feedback state machine shared by every network-backed flow.
//!
//! A flow moves `Idle -> Submitting -> Succeeded | Failed`. The machine owns
//! the re-entrancy latch, so a trigger activated while a request is still in
//! flight is refused instead of issuing a second call. One-shot flows stay
//! completed after their first success.

use std::time::Duration;

/// How long an auto-hidden error stays on screen.
pub const ERROR_AUTO_HIDE: Duration = Duration::from_secs(5);

/// `delay` in the millisecond form browser timers take. Saturates instead of
/// wrapping.
pub fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDisplay {
    Sticky,
    AutoHide(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackPolicy {
    pub one_shot: bool,
    pub error_display: ErrorDisplay,
}

impl FeedbackPolicy {
    pub const fn retryable() -> Self {
        Self {
            one_shot: false,
            error_display: ErrorDisplay::Sticky,
        }
    }

    pub const fn one_shot() -> Self {
        Self {
            one_shot: true,
            error_display: ErrorDisplay::Sticky,
        }
    }

    pub const fn auto_hide(mut self, delay: Duration) -> Self {
        self.error_display = ErrorDisplay::AutoHide(delay);
        self
    }
}

impl Default for FeedbackPolicy {
    fn default() -> Self {
        Self::retryable()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Why a trigger was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    InFlight,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    policy: FeedbackPolicy,
    state: SubmitState,
    notice: Option<Notice>,
    completed: bool,
    attempt: u64,
}

impl Feedback {
    pub fn new(policy: FeedbackPolicy) -> Self {
        Self {
            policy,
            state: SubmitState::Idle,
            notice: None,
            completed: false,
            attempt: 0,
        }
    }

    /// Enters `Submitting` and returns the attempt number.
    pub fn begin(&mut self) -> Result<u64, Blocked> {
        if self.state == SubmitState::Submitting {
            return Err(Blocked::InFlight);
        }
        if self.completed {
            return Err(Blocked::Completed);
        }

        self.state = SubmitState::Submitting;
        self.notice = None;
        self.attempt += 1;
        Ok(self.attempt)
    }

    pub fn succeed(&mut self, notice: Option<Notice>) {
        if self.state != SubmitState::Submitting {
            return;
        }
        self.state = SubmitState::Succeeded;
        self.notice = notice;
        if self.policy.one_shot {
            self.completed = true;
        }
    }

    /// Records a failure. Returns the delay after which `dismiss` should be
    /// called for this attempt, if the policy hides errors automatically.
    pub fn fail(&mut self, text: impl Into<String>) -> Option<Duration> {
        if self.state != SubmitState::Submitting {
            return None;
        }
        self.state = SubmitState::Failed;
        self.notice = Some(Notice::error(text));

        match self.policy.error_display {
            ErrorDisplay::Sticky => None,
            ErrorDisplay::AutoHide(delay) => Some(delay),
        }
    }

    /// Hides the error of `attempt`. A newer attempt is left untouched.
    pub fn dismiss(&mut self, attempt: u64) {
        if attempt != self.attempt || self.state != SubmitState::Failed {
            return;
        }
        self.state = SubmitState::Idle;
        self.notice = None;
    }

    /// Back to `Idle` without a notice, for failures surfaced elsewhere.
    pub fn release(&mut self) {
        if self.state == SubmitState::Submitting {
            self.state = SubmitState::Idle;
            self.notice = None;
        }
    }

    /// A response for `attempt` still belongs on screen. False once the flow
    /// was released or a newer attempt started.
    pub fn is_current(&self, attempt: u64) -> bool {
        attempt == self.attempt && self.state == SubmitState::Submitting
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn trigger_enabled(&self) -> bool {
        !self.is_loading() && !self.completed
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new(FeedbackPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_refuses_while_in_flight() {
        let mut feedback = Feedback::default();
        assert_eq!(feedback.begin(), Ok(1));
        assert_eq!(feedback.begin(), Err(Blocked::InFlight));
        assert!(feedback.is_loading());
        assert!(!feedback.trigger_enabled());
    }

    #[test]
    fn begin_clears_previous_notice() {
        let mut feedback = Feedback::default();
        feedback.begin().unwrap();
        feedback.fail("boom");
        assert!(feedback.notice().is_some());

        feedback.begin().unwrap();
        assert!(feedback.notice().is_none());
        assert_eq!(feedback.state(), SubmitState::Submitting);
    }

    #[test]
    fn retryable_flow_reenables_after_success() {
        let mut feedback = Feedback::default();
        feedback.begin().unwrap();
        feedback.succeed(None);
        assert!(feedback.trigger_enabled());
        assert_eq!(feedback.begin(), Ok(2));
    }

    #[test]
    fn failure_reenables_trigger_and_hides_loading() {
        let mut feedback = Feedback::new(FeedbackPolicy::one_shot());
        feedback.begin().unwrap();
        assert_eq!(feedback.fail("server said no"), None);
        assert!(!feedback.is_loading());
        assert!(feedback.trigger_enabled());
        assert!(feedback.notice().is_some_and(Notice::is_error));
    }

    #[test]
    fn auto_hide_returns_delay() {
        let mut feedback = Feedback::new(FeedbackPolicy::retryable().auto_hide(ERROR_AUTO_HIDE));
        feedback.begin().unwrap();
        assert_eq!(feedback.fail("x"), Some(Duration::from_secs(5)));
    }

    #[test]
    fn stale_dismiss_keeps_newer_error() {
        let mut feedback = Feedback::new(FeedbackPolicy::retryable().auto_hide(ERROR_AUTO_HIDE));
        let first = feedback.begin().unwrap();
        feedback.fail("first");
        let second = feedback.begin().unwrap();
        feedback.fail("second");

        feedback.dismiss(first);
        assert_eq!(feedback.notice().map(|n| n.text.as_str()), Some("second"));

        feedback.dismiss(second);
        assert!(feedback.notice().is_none());
        assert_eq!(feedback.state(), SubmitState::Idle);
    }

    #[test]
    fn resolution_without_begin_is_ignored() {
        let mut feedback = Feedback::default();
        feedback.succeed(Some(Notice::success("sent")));
        assert_eq!(feedback.fail("late"), None);
        assert_eq!(feedback.state(), SubmitState::Idle);
        assert!(feedback.notice().is_none());
    }

    #[test]
    fn released_attempt_is_no_longer_current() {
        let mut feedback = Feedback::default();
        let first = feedback.begin().unwrap();
        assert!(feedback.is_current(first));

        feedback.release();
        assert!(!feedback.is_current(first));

        let second = feedback.begin().unwrap();
        assert!(!feedback.is_current(first));
        assert!(feedback.is_current(second));
    }

    #[test]
    fn timer_millis_saturates() {
        assert_eq!(timer_millis(ERROR_AUTO_HIDE), 5_000);
        assert_eq!(timer_millis(Duration::from_secs(u64::MAX)), u32::MAX);
        assert_eq!(timer_millis(Duration::from_millis(u64::from(u32::MAX) + 1)), u32::MAX);
    }

    #[test]
    fn release_returns_to_idle() {
        let mut feedback = Feedback::default();
        feedback.begin().unwrap();
        feedback.release();
        assert_eq!(feedback.state(), SubmitState::Idle);
        assert!(feedback.trigger_enabled());
    }
}
