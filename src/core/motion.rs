/// How the hero animator should come up given the user's motion preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionStart {
    Immediate,
    /// Reduced motion is preferred; wait for an explicit opt-in.
    AwaitOptIn,
}

#[inline]
pub fn motion_start(prefers_reduced: bool, forced: bool) -> MotionStart {
    if prefers_reduced && !forced {
        MotionStart::AwaitOptIn
    } else {
        MotionStart::Immediate
    }
}

/// `data-force-motion` only opts in for the exact value `"true"`.
#[inline]
pub fn is_opt_in(attr: Option<&str>) -> bool {
    attr == Some("true")
}

/// Runs an initializer the first time a watched condition is observed true.
pub struct OneShot<F: FnOnce()> {
    init: Option<F>,
}

impl<F: FnOnce()> OneShot<F> {
    pub fn new(init: F) -> Self {
        Self { init: Some(init) }
    }

    /// Returns `true` only on the call that ran the initializer.
    pub fn observe(&mut self, condition: bool) -> bool {
        if !condition {
            return false;
        }
        match self.init.take() {
            Some(init) => {
                init();
                true
            }
            None => false,
        }
    }
}
