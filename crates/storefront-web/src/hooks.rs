use crate::feedback::{timer_millis, Feedback, FeedbackPolicy, Notice};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// A `Feedback` machine bound to a component.
///
/// The machine lives in a `RefCell` so the latch is checked synchronously
/// inside event handlers. Every transition forces a re-render.
#[derive(Clone)]
pub struct FeedbackHandle {
    machine: Rc<RefCell<Feedback>>,
    hide_timer: Rc<RefCell<Option<Timeout>>>,
    redraw: UseForceUpdateHandle,
}

impl FeedbackHandle {
    /// Returns `None` when the trigger must be ignored.
    pub fn begin(&self) -> Option<u64> {
        let result = self.machine.borrow_mut().begin();
        match result {
            Ok(attempt) => {
                self.hide_timer.borrow_mut().take();
                self.redraw.force_update();
                Some(attempt)
            }
            Err(blocked) => {
                log::debug!("Trigger ignored: {:?}", blocked);
                None
            }
        }
    }

    pub fn succeed(&self, notice: Option<Notice>) {
        self.machine.borrow_mut().succeed(notice);
        self.redraw.force_update();
    }

    pub fn fail(&self, text: impl Into<String>) {
        let (attempt, delay) = {
            let mut machine = self.machine.borrow_mut();
            let delay = machine.fail(text);
            (machine.attempt(), delay)
        };

        if let Some(delay) = delay {
            let machine = Rc::downgrade(&self.machine);
            let redraw = self.redraw.clone();
            let timeout = Timeout::new(timer_millis(delay), move || {
                if let Some(machine) = machine.upgrade() {
                    machine.borrow_mut().dismiss(attempt);
                    redraw.force_update();
                }
            });
            *self.hide_timer.borrow_mut() = Some(timeout);
        }

        self.redraw.force_update();
    }

    /// True while `attempt` is the request the machine is still waiting on.
    pub fn is_current(&self, attempt: u64) -> bool {
        self.machine.borrow().is_current(attempt)
    }

    pub fn release(&self) {
        self.machine.borrow_mut().release();
        self.redraw.force_update();
    }

    pub fn snapshot(&self) -> Feedback {
        self.machine.borrow().clone()
    }
}

#[hook]
pub fn use_feedback(policy: FeedbackPolicy) -> FeedbackHandle {
    let machine = use_mut_ref(move || Feedback::new(policy));
    let hide_timer = use_mut_ref(|| None::<Timeout>);
    let redraw = use_force_update();

    FeedbackHandle {
        machine,
        hide_timer,
        redraw,
    }
}
