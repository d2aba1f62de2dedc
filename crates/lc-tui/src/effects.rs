//! Terminal visual effects, powered by tachyonfx.
//!
//! Effects are painted over the already rendered frame buffer and never touch
//! the comparison state.

use std::time::Duration;

use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use tachyonfx::{fx, Effect, EffectManager as TachyonManager, Interpolation};

/// Fade-in effect: cells emerge from solid black over 350 ms.
///
/// Played once when the comparison mounts.
pub fn fade_in() -> Effect {
    let dark = Color::Black;
    fx::fade_from(dark, dark, (350, Interpolation::QuadOut))
}

/// Celebration when the last counter saturates: a short dissolve that
/// snaps back, ~600 ms total.
pub fn completion_burst() -> Effect {
    let out = fx::dissolve((200, Interpolation::QuadOut));
    let back = fx::coalesce((400, Interpolation::BounceOut));
    fx::sequence(&[out, back])
}

/// Manages the active effects for the comparison page.
///
/// Call [`tick_and_render`](EffectManager::tick_and_render) once per frame from
/// the draw closure, after widgets have been rendered to the buffer.
pub struct EffectManager {
    inner: TachyonManager<String>,
    enabled: bool,
}

impl EffectManager {
    pub fn new(enabled: bool) -> Self {
        Self {
            inner: TachyonManager::default(),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Add a named (unique) effect. An effect already running under the same
    /// `key` is cancelled and replaced. Ignored when effects are disabled.
    pub fn add_named(&mut self, key: &str, effect: Effect) {
        if self.enabled {
            self.inner.add_unique_effect(key.to_string(), effect);
        }
    }

    /// Advance all active effects by `delta` and paint them into `buf`.
    pub fn tick_and_render(&mut self, delta: Duration, buf: &mut Buffer, area: Rect) {
        if self.enabled {
            self.inner.process_effects(delta.into(), buf, area);
        }
    }

    /// Remove all active effects immediately.
    pub fn remove_all(&mut self) {
        self.inner = TachyonManager::default();
    }
}

impl Default for EffectManager {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tachyonfx::Shader;

    #[test]
    fn fade_in_effect_is_running_initially() {
        let mut effect = fade_in();
        assert!(!effect.done(), "fade_in should not be done immediately");
    }

    #[test]
    fn completion_burst_is_running_initially() {
        let mut effect = completion_burst();
        assert!(!effect.done());
    }

    #[test]
    fn manager_add_and_tick() {
        let mut mgr = EffectManager::new(true);
        mgr.add_named("mount", fade_in());

        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        mgr.tick_and_render(Duration::from_millis(16), &mut buf, area);
    }

    #[test]
    fn disabled_manager_leaves_buffer_alone() {
        let mut mgr = EffectManager::new(false);
        assert!(!mgr.is_enabled());
        mgr.add_named("mount", fade_in());

        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "abcd", ratatui::style::Style::default());
        let before = buf.clone();
        mgr.tick_and_render(Duration::from_millis(16), &mut buf, area);
        assert_eq!(buf, before);
    }

    #[test]
    fn remove_all_clears_state() {
        let mut mgr = EffectManager::default();
        mgr.add_named("burst", completion_burst());
        mgr.remove_all();

        let area = Rect::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        mgr.tick_and_render(Duration::from_millis(16), &mut buf, area);
    }
}
