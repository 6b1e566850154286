// Scroll-driven page behaviour: eased anchor scrolling, header state,
// active-section tracking and reveal thresholds.
use crate::constants::*;

/// Cubic ease-in-out over `p ∈ [0, 1]`.
#[inline]
pub fn ease_in_out_cubic(p: f64) -> f64 {
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        (p - 1.0) * (2.0 * p - 2.0) * (2.0 * p - 2.0) + 1.0
    }
}

/// Links that should scroll in-page instead of navigating.
#[inline]
pub fn is_section_anchor(href: &str) -> bool {
    href.starts_with('#') && href != "#" && href != "#!"
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    pub start: f64,
    pub target: f64,
    pub duration_ms: f64,
}

impl SmoothScroll {
    /// Scroll from `start` to the element at absolute `element_top`,
    /// leaving room for a fixed header of `header_height`.
    pub fn to_element(start: f64, element_top: f64, header_height: f64) -> Self {
        Self {
            start,
            target: element_top - header_height,
            duration_ms: SMOOTH_SCROLL_MS,
        }
    }

    /// Scroll position after `elapsed_ms`, and whether the animation is over.
    /// The final step lands exactly on `target`.
    pub fn position_at(&self, elapsed_ms: f64) -> (f64, bool) {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return (self.target, true);
        }
        let p = (elapsed_ms.max(0.0) / self.duration_ms).min(1.0);
        let y = self.start + (self.target - self.start) * ease_in_out_cubic(p);
        (y, false)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    #[default]
    Settled,
    ScrollingDown,
    ScrollingUp,
}

impl HeaderMode {
    /// Class to put on the header, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Settled => None,
            Self::ScrollingDown => Some("scroll-down"),
            Self::ScrollingUp => Some("scroll-up"),
        }
    }
}

/// Sticky header state, fed with `pageYOffset` on every scroll event.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HeaderScroll {
    pub last: f64,
    pub mode: HeaderMode,
    pub shadow: bool,
}

impl HeaderScroll {
    pub fn update(&mut self, y: f64) {
        if y <= 0.0 {
            if self.mode == HeaderMode::ScrollingUp {
                self.mode = HeaderMode::Settled;
            }
            self.shadow = false;
            return;
        }
        self.shadow = y > HEADER_SHADOW_AFTER_PX;
        if y > self.last && self.mode != HeaderMode::ScrollingDown {
            self.mode = HeaderMode::ScrollingDown;
        } else if y < self.last && self.mode == HeaderMode::ScrollingDown {
            self.mode = HeaderMode::ScrollingUp;
        }
        self.last = y;
    }
}

/// A section counts as current once the viewport top, plus a look-ahead,
/// is inside it.
#[inline]
pub fn section_is_active(scroll_y: f64, top: f64, height: f64) -> bool {
    let probe = scroll_y + NAV_LOOKAHEAD_PX;
    probe >= top && probe < top + height
}

#[inline]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_AFTER_PX
}

/// Reveal once the element's top edge passes 80% of the viewport height.
#[inline]
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height * REVEAL_VIEWPORT_FRACTION
}

#[inline]
pub fn stagger_delay_ms(index: usize) -> i32 {
    (index as i32).saturating_mul(REVEAL_STAGGER_MS)
}
