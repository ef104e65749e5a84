// One-shot reveal bookkeeping for scroll animations.
//
// Targets are compared by identity (`PartialEq`), so DOM elements can be
// tracked without tagging them. A target flips from `Pending` to `Revealed`
// the first time it is reported as intersecting and never flips back.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Clone, Debug)]
pub struct RevealTracker<T> {
    targets: Vec<(T, RevealState)>,
}

impl<T> Default for RevealTracker<T> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
        }
    }
}

impl<T: PartialEq> RevealTracker<T> {
    pub fn register(&mut self, target: T) {
        self.targets.push((target, RevealState::Pending));
    }

    /// Feed one visibility report. Returns true only on the transition to
    /// `Revealed`; the caller then shows the element and stops watching it.
    /// Unregistered targets are ignored.
    pub fn observe(&mut self, target: &T, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.targets.iter_mut().find(|(t, _)| t == target) {
            Some((_, state @ RevealState::Pending)) => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}
