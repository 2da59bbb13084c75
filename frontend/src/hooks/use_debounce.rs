use yew::prelude::*;

/// Re-arm bookkeeping shared by the effect and its timers. Every new value
/// takes a ticket; only the timer holding the newest ticket may publish.
/// Cancelling stale timers already covers the common path, the ticket check
/// also covers a timer that was queued to run in the same tick as the re-arm.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ReArm {
    latest: u64,
}

impl ReArm {
    fn arm(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    fn may_publish(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Debounced copy of `value`: updates only after `delay_ms` of quiet. Each
/// change re-arms the timeout and the effect cleanup cancels the pending one,
/// so at most one timer is live at a time and the latest value always wins.
#[hook]
pub fn use_debounce<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state({
        let value = value.clone();
        move || value
    });
    let gate = use_mut_ref(ReArm::default);

    {
        let debounced = debounced.clone();
        use_effect_with(value, move |value| {
            let ticket = gate.borrow_mut().arm();
            let value = value.clone();
            let fire_gate = gate.clone();
            let timeout = gloo::timers::callback::Timeout::new(delay_ms, move || {
                if fire_gate.borrow().may_publish(ticket) {
                    debounced.set(value);
                }
            });
            move || drop(timeout)
        });
    }

    (*debounced).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_wins() {
        let mut gate = ReArm::default();
        let first = gate.arm();
        let second = gate.arm();
        assert!(!gate.may_publish(first));
        assert!(gate.may_publish(second));
    }

    #[test]
    fn rearming_revokes_an_outstanding_ticket() {
        let mut gate = ReArm::default();
        let ticket = gate.arm();
        assert!(gate.may_publish(ticket));
        gate.arm();
        assert!(!gate.may_publish(ticket));
    }
}
