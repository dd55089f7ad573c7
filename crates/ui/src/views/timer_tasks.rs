use dioxus::prelude::*;
use dioxus::core::Task;
use services::{TimerKind, TimerTicket};
use tracing::debug;

use crate::vm::QuizVm;

/// Running sleep tasks, one per timer kind, tagged with the ticket they deliver.
#[derive(Default)]
pub(crate) struct TimerTasks {
    clear_feedback: Option<(TimerTicket, Task)>,
    auto_advance: Option<(TimerTicket, Task)>,
}

impl TimerTasks {
    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<(TimerTicket, Task)> {
        match kind {
            TimerKind::ClearFeedback => &mut self.clear_feedback,
            TimerKind::AutoAdvance => &mut self.auto_advance,
        }
    }

    /// Forgets the task serving `ticket` without cancelling it (it is finishing).
    fn release(&mut self, ticket: TimerTicket) {
        let slot = self.slot_mut(ticket.kind());
        if slot.as_ref().is_some_and(|(armed, _)| *armed == ticket) {
            *slot = None;
        }
    }

    pub(crate) fn cancel_all(&mut self) {
        for kind in TimerKind::ALL {
            if let Some((_, task)) = self.slot_mut(kind).take() {
                task.cancel();
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn tickets(&self) -> Vec<TimerTicket> {
        [&self.clear_feedback, &self.auto_advance]
            .into_iter()
            .flatten()
            .map(|(ticket, _)| *ticket)
            .collect()
    }
}

/// Makes the running tasks match the session's armed timers.
///
/// A slot whose ticket changed gets its old task cancelled and a new sleep
/// spawned; a slot the session disarmed is cancelled outright.
pub(crate) fn sync_timer_tasks(vm: Signal<QuizVm>, mut tasks: Signal<TimerTasks>) {
    let (scheduled, now) = {
        let vm = vm.read();
        (vm.scheduled_timers(), vm.now())
    };
    let handle = tasks;
    let mut running = tasks.write();

    for kind in TimerKind::ALL {
        let wanted = scheduled.iter().find(|timer| timer.kind() == kind).copied();
        let slot = running.slot_mut(kind);
        let current = slot.as_ref().map(|(ticket, _)| *ticket);
        if current == wanted.map(|timer| timer.ticket) {
            continue;
        }
        if let Some((_, task)) = slot.take() {
            task.cancel();
        }
        let Some(timer) = wanted else {
            continue;
        };

        let ticket = timer.ticket;
        let delay = timer.remaining(now);
        let task = spawn(async move {
            tokio::time::sleep(delay).await;
            let mut vm = vm;
            let mut tasks = handle;
            tasks.write().release(ticket);
            let outcome = vm.write().fire(ticket);
            debug!(timer = ticket.kind().label(), ?outcome, "timer task finished");
            sync_timer_tasks(vm, tasks);
        });
        *slot = Some((ticket, task));
    }
}
