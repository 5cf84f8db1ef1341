//! Daily posting slots.
//!
//! A `ScheduleTimer` polls the clock on a fixed interval and pushes one
//! `ScheduleEvent::SlotDue` per due slot onto a queue; a single worker on the
//! other end does the actual posting.

use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::models::{ScheduleSlot, SlotState};

pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleEvent {
    SlotDue(ScheduleSlot),
}

#[derive(Debug, Clone)]
pub struct SlotTracker {
    slots: Vec<SlotState>,
}

impl SlotTracker {
    /// Slots whose time already passed on the starting day count as fired
    /// today, so nothing is made up for time the process was not running.
    pub fn new(slots: &[ScheduleSlot], started_at: NaiveDateTime) -> Self {
        let today = started_at.date();
        let slots = slots
            .iter()
            .map(|slot| SlotState {
                slot: *slot,
                last_fired_date: (started_at.time() >= slot.time()).then_some(today),
            })
            .collect();
        SlotTracker { slots }
    }

    /// Slots due at `now`, in configured order. A slot is due when it has not
    /// fired today and its time of day has been reached; returned slots are
    /// marked as fired.
    pub fn due(&mut self, now: NaiveDateTime) -> Vec<ScheduleSlot> {
        let today = now.date();
        let mut due = Vec::new();
        for state in self.slots.iter_mut() {
            if state.last_fired_date != Some(today) && now.time() >= state.slot.time() {
                state.last_fired_date = Some(today);
                due.push(state.slot);
            }
        }
        due
    }

    pub fn slots(&self) -> &[SlotState] {
        &self.slots
    }
}

pub struct ScheduleTimer {
    tracker: SlotTracker,
    clock: Arc<dyn Clock>,
    poll_interval: Duration,
    tx: UnboundedSender<ScheduleEvent>,
}

impl ScheduleTimer {
    pub fn new(
        slots: &[ScheduleSlot],
        clock: Arc<dyn Clock>,
        tx: UnboundedSender<ScheduleEvent>,
    ) -> Self {
        let tracker = SlotTracker::new(slots, clock.now());
        ScheduleTimer {
            tracker,
            clock,
            poll_interval: POLL_INTERVAL,
            tx,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Poll until shutdown is requested or the worker has gone away.
    pub async fn run(mut self, shutdown: CancellationToken) {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    debug!("Schedule timer stopping");
                    return;
                }
                _ = ticker.tick() => {}
            }

            for slot in self.tracker.due(self.clock.now()) {
                info!(slot = %slot, "Posting slot due");
                if self.tx.send(ScheduleEvent::SlotDue(slot)).is_err() {
                    debug!("Post queue closed, schedule timer stopping");
                    return;
                }
            }
        }
    }
}
