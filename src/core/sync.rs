//! Bidirectional sync between the bound value and the scroll surface.
//!
//! The bound value has two writers-by-turns: the host (external writes) and
//! the widget (settle writes).  The loop guard here keeps a settle-originated
//! write from re-triggering the programmatic-scroll path it just satisfied,
//! which would otherwise ping-pong forever.

use super::convert::SliderConfig;

/// Where the widget currently is in the update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// No pending move.
    Idle,
    /// Widget-initiated move toward `target`, commanded by an external
    /// value change.
    ProgrammaticScroll { target: usize },
    /// User drag in progress (grab → settle).
    UserScroll,
}

/// A committed user-driven change: the value to write back to the bound
/// value.  Feedback (the haptic-equivalent tick) is the host's side effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settle {
    pub index: usize,
    pub value: f64,
}

/// State machine keeping the bound value and the settled tick in agreement.
#[derive(Debug, Clone)]
pub struct ValueSync {
    config: SliderConfig,
    /// Index the scroll surface last came to rest on.
    settled: usize,
    phase: SyncPhase,
}

impl ValueSync {
    /// Starts `Idle`, with the settled index derived from the initial value.
    pub fn new(config: SliderConfig, initial_value: f64) -> Self {
        let settled = config.index_from_value(initial_value);
        Self {
            config,
            settled,
            phase: SyncPhase::Idle,
        }
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn settled_index(&self) -> usize {
        self.settled
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Observe the bound value.  Returns the tick index the surface should
    /// animate to, or `None` when the surface already reflects it.
    ///
    /// The `None` case is the loop guard: a value the widget itself just
    /// wrote back maps to the settled index and must not start another
    /// programmatic move.  Safe to call every frame.
    pub fn observe_value(&mut self, value: f64) -> Option<usize> {
        let target = self.config.index_from_value(value);
        match self.phase {
            // Mid-drag the user owns the surface; external writes wait.
            SyncPhase::UserScroll => None,
            SyncPhase::ProgrammaticScroll { target: in_flight } => {
                if in_flight == target {
                    None
                } else {
                    // Last writer wins: retarget the in-flight move.
                    tracing::debug!(to = target, from = in_flight, "retargeting programmatic scroll");
                    self.phase = SyncPhase::ProgrammaticScroll { target };
                    Some(target)
                }
            }
            SyncPhase::Idle => {
                if target == self.settled {
                    None
                } else {
                    tracing::debug!(to = target, settled = self.settled, "external value change");
                    self.phase = SyncPhase::ProgrammaticScroll { target };
                    Some(target)
                }
            }
        }
    }

    /// The programmatic move finished; the surface now rests on its target.
    /// No value write happens here — the bound value caused this move.
    pub fn scroll_finished(&mut self) {
        if let SyncPhase::ProgrammaticScroll { target } = self.phase {
            self.settled = target;
            self.phase = SyncPhase::Idle;
        }
    }

    /// The user grabbed the surface.  Supersedes any in-flight programmatic
    /// move.
    pub fn grab(&mut self) {
        self.phase = SyncPhase::UserScroll;
    }

    /// The drag released and the surface snapped to `landed`.  Returns the
    /// write-back when the committed tick changed; `None` means the drag
    /// returned to where it started and the bound value is left alone.
    pub fn settle(&mut self, landed: usize) -> Option<Settle> {
        let landed = landed.min(self.config.max_index());
        self.phase = SyncPhase::Idle;
        if landed == self.settled {
            return None;
        }
        self.settled = landed;
        let value = self.config.value_from_index(landed);
        tracing::debug!(index = landed, value, "user settle committed");
        Some(Settle {
            index: landed,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sync(initial: f64) -> ValueSync {
        ValueSync::new(SliderConfig::new(0.0, 10.0, 1.0).unwrap(), initial)
    }

    #[test]
    fn initial_settled_index_from_value() {
        assert_eq!(sync(0.0).settled_index(), 0);
        assert_eq!(sync(7.0).settled_index(), 7);
        assert_eq!(sync(3.4).settled_index(), 3);
    }

    #[test]
    fn external_change_commands_scroll() {
        let mut s = sync(5.0);
        assert_eq!(s.observe_value(7.0), Some(7));
        assert_eq!(s.phase(), SyncPhase::ProgrammaticScroll { target: 7 });

        // Completion moves the settled index without any value write.
        s.scroll_finished();
        assert_eq!(s.settled_index(), 7);
        assert_eq!(s.phase(), SyncPhase::Idle);

        // Loop guard: observing the same value again is a no-op.
        assert_eq!(s.observe_value(7.0), None);
    }

    #[test]
    fn unchanged_value_is_noop() {
        let mut s = sync(5.0);
        assert_eq!(s.observe_value(5.0), None);
        assert_eq!(s.phase(), SyncPhase::Idle);
    }

    #[test]
    fn in_flight_move_retargets_on_newer_write() {
        let mut s = sync(0.0);
        assert_eq!(s.observe_value(8.0), Some(8));
        // A newer external write supersedes the in-flight move.
        assert_eq!(s.observe_value(2.0), Some(2));
        s.scroll_finished();
        assert_eq!(s.settled_index(), 2);
    }

    #[test]
    fn in_flight_move_ignores_same_target() {
        let mut s = sync(0.0);
        assert_eq!(s.observe_value(8.0), Some(8));
        assert_eq!(s.observe_value(8.2), None);
    }

    #[test]
    fn settle_writes_back_once() {
        let mut s = sync(5.0);
        s.grab();
        // External writes are deferred while the user holds the surface.
        assert_eq!(s.observe_value(9.0), None);

        let settle = s.settle(3).unwrap();
        assert_eq!(settle, Settle { index: 3, value: 3.0 });
        assert_eq!(s.settled_index(), 3);
        assert_eq!(s.phase(), SyncPhase::Idle);

        // The write-back maps to the settled index — guarded, no new move.
        assert_eq!(s.observe_value(settle.value), None);
    }

    #[test]
    fn settle_on_same_tick_does_not_write() {
        let mut s = sync(5.0);
        s.grab();
        assert_eq!(s.settle(5), None);
        assert_eq!(s.phase(), SyncPhase::Idle);
    }

    #[test]
    fn settle_clamps_to_index_domain() {
        let mut s = sync(5.0);
        s.grab();
        let settle = s.settle(99).unwrap();
        assert_eq!(settle.index, 10);
        assert_eq!(settle.value, 10.0);
    }
}
