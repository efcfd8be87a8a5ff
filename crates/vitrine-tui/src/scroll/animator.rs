//! Eased scrolling over the composed page.

use std::time::{Duration, Instant};

use vitrine_core::{EasingKind, ScrollConfig};

use super::easing::{is_complete, lerp_rows, progress, EasingExt};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingKind,
}

/// Scroll state for the page viewport.
///
/// Anchor jumps and key scrolls request a target; `update()` is called
/// once per frame and returns the interpolated offset. With smooth
/// scrolling disabled every request lands instantly.
#[derive(Debug, Clone)]
pub struct PageScroller {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: u16,
    /// Scroll deltas accumulated between frames, applied as one animation
    pending_delta: i32,
}

impl PageScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0,
            pending_delta: 0,
        }
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current
    }

    /// Final position once the running animation (if any) lands
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// True while a frame update could still move the offset
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    fn smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    fn duration(&self) -> Duration {
        Duration::from_millis(self.config.animation_duration_ms)
    }

    /// Jump without animating
    pub fn set_scroll(&mut self, offset: u16) {
        self.animation = None;
        self.pending_delta = 0;
        self.current = offset;
    }

    /// Scroll to an absolute offset, eased when smooth scrolling is on
    pub fn animate_to(&mut self, target: u16, max_scroll: u16) {
        let target = target.min(max_scroll);

        if !self.smooth() {
            self.set_scroll(target);
            return;
        }
        if target == self.current {
            self.animation = None;
            return;
        }

        self.pending_delta = 0;
        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from: self.current,
            to: target,
            duration: self.duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a row delta; repeated calls within a frame are batched
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.smooth() {
            let target = (self.current as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.set_scroll(target);
            return;
        }
        self.pending_delta += delta;
    }

    /// One plain scroll step down/up
    pub fn step_down(&mut self, max_scroll: u16) {
        self.scroll_by(self.config.scroll_lines.max(1) as i32, max_scroll);
    }

    pub fn step_up(&mut self, max_scroll: u16) {
        self.scroll_by(-(self.config.scroll_lines.max(1) as i32), max_scroll);
    }

    pub fn half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by((viewport_height / 2).max(1) as i32, max_scroll);
    }

    pub fn half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-((viewport_height / 2).max(1) as i32), max_scroll);
    }

    /// Advance the animation one frame and return the current offset
    pub fn update(&mut self, max_scroll: u16) -> u16 {
        if self.pending_delta != 0 {
            let target =
                (self.target_scroll() as i32 + self.pending_delta).clamp(0, max_scroll as i32);
            self.pending_delta = 0;
            let target = target as u16;
            if target != self.current {
                self.animation = Some(ActiveAnimation {
                    start: Instant::now(),
                    from: self.current,
                    to: target,
                    duration: self.duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                self.current = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, anim.duration));
                self.current = lerp_rows(anim.from, anim.to, t).min(max_scroll);
            }
        } else {
            self.current = self.current.min(max_scroll);
        }

        self.current
    }
}
