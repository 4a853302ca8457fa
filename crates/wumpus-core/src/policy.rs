use crate::{Action, Percepts, TurnReport};

/// Decision maker for one player, human or automated.
pub trait Policy {
    fn decide(&mut self, percepts: Percepts) -> Action;

    /// Learn the effects of the action just applied.
    fn observe(&mut self, _report: &TurnReport) {}
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn decide(&mut self, percepts: Percepts) -> Action {
        (**self).decide(percepts)
    }

    fn observe(&mut self, report: &TurnReport) {
        (**self).observe(report)
    }
}
