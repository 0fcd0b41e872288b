//! The slider widget — a horizontally-scrolling strip of ticks with a fixed
//! centre anchor, snap-to-tick settling, and two-way binding to a numeric
//! value.
//!
//! [`SliderState`] is the persistent half (scroll offset, sync machine,
//! drag bookkeeping); [`Slider`] is created fresh each frame, per
//! Ratatui's `StatefulWidget` convention.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::{
    convert::{ConfigError, SliderConfig},
    snap::{index_from_offset, nearest_pitch_multiple, offset_from_index},
    sync::ValueSync,
};

use super::{
    render::{DefaultTickRender, TickContext, TickRender},
    scroll::ScrollAnimator,
    theme::Theme,
};

/// Fade mask applied at the horizontal edges of the scroll surface.
/// Purely presentational — no effect on snapping or sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMask {
    Hidden,
    /// Dim the outermost `width` columns on each side.
    Visible(u16),
}

/// Damping used for programmatic moves and snap-back, tuned for ~20 fps.
const SCROLL_SPEED: f64 = 0.35;

/// An in-progress drag: where it started, in columns and in offset space.
#[derive(Debug, Clone, Copy)]
struct Drag {
    grab_column: u16,
    grab_offset: f64,
}

// ───────────────────────────────────────── state ─────────────

/// Persistent state for the slider (offset, sync machine, callbacks).
pub struct SliderState {
    sync: ValueSync,
    anim: ScrollAnimator,
    item_width: u16,
    spacing: u16,
    drag: Option<Drag>,
    /// Invoked once per committed user-driven value change.
    on_edit: Option<Box<dyn FnMut(f64)>>,
    /// Pending tick notification — the TUI stand-in for haptic feedback.
    /// Set when a drag crosses a tick boundary or a settle commits; the
    /// host drains it with [`take_tick_feedback`](Self::take_tick_feedback).
    feedback: bool,
}

impl SliderState {
    /// Build the state from a validated range/step config plus the pitch
    /// parameters.  `item_width + spacing` must be at least one column.
    pub fn new(
        config: SliderConfig,
        item_width: u16,
        spacing: u16,
        initial_value: f64,
    ) -> Result<Self, ConfigError> {
        // Widen before adding: the two halves of the pitch can each be
        // anywhere in u16 range, and their sum must not wrap.
        let pitch = item_width as f64 + spacing as f64;
        if pitch < 1.0 {
            return Err(ConfigError::InvalidPitch(pitch));
        }
        let sync = ValueSync::new(config, initial_value);
        let offset = offset_from_index(sync.settled_index(), pitch);
        Ok(Self {
            sync,
            anim: ScrollAnimator::new(offset, SCROLL_SPEED),
            item_width,
            spacing,
            drag: None,
            on_edit: None,
            feedback: false,
        })
    }

    /// Register the editing callback.
    pub fn on_edit(mut self, callback: impl FnMut(f64) + 'static) -> Self {
        self.on_edit = Some(Box::new(callback));
        self
    }

    pub fn pitch(&self) -> f64 {
        self.item_width as f64 + self.spacing as f64
    }

    pub fn item_width(&self) -> u16 {
        self.item_width
    }

    pub fn settled_index(&self) -> usize {
        self.sync.settled_index()
    }

    pub fn offset(&self) -> f64 {
        self.anim.offset()
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_animating()
    }

    pub fn config(&self) -> &SliderConfig {
        self.sync.config()
    }

    /// Drain the pending tick notification.
    pub fn take_tick_feedback(&mut self) -> bool {
        std::mem::take(&mut self.feedback)
    }

    /// Per-frame update: advance the animation and observe the bound value.
    ///
    /// Call once per frame *before* rendering.  An external value change
    /// starts a programmatic move; the value the widget itself wrote back on
    /// the last settle maps to the settled index and is ignored (loop
    /// guard), so this is safe to call unconditionally.
    pub fn sync(&mut self, value: f64) {
        if self.anim.tick() {
            self.sync.scroll_finished();
        }
        if self.drag.is_none() {
            if let Some(target) = self.sync.observe_value(value) {
                self.anim.animate_to(offset_from_index(target, self.pitch()));
            }
        }
    }

    /// The user grabbed the surface at `column`.  Supersedes any in-flight
    /// programmatic move — the pointer owns the offset until release.
    pub fn grab(&mut self, column: u16) {
        self.sync.grab();
        self.anim.set_offset(self.anim.offset());
        self.drag = Some(Drag {
            grab_column: column,
            grab_offset: self.anim.offset(),
        });
    }

    /// Drag update: position the surface from the pointer column.
    ///
    /// Dragging right pulls earlier ticks under the anchor, so the offset
    /// decreases.  Sets the tick notification when the drag crosses a tick
    /// boundary.
    pub fn drag_to(&mut self, column: u16) {
        let Some(drag) = self.drag else {
            return;
        };
        let pitch = self.pitch();
        let max_offset = offset_from_index(self.config().max_index(), pitch);
        let delta = column as f64 - drag.grab_column as f64;
        let raw = (drag.grab_offset - delta).clamp(0.0, max_offset);

        let max_index = self.config().max_index();
        let before = index_from_offset(self.anim.offset(), pitch, max_index);
        let after = index_from_offset(raw, pitch, max_index);
        if before != after {
            self.feedback = true;
        }
        self.anim.set_offset(raw);
    }

    /// Drag release: snap to the nearest pitch multiple, animate the last
    /// stretch, and commit the landed tick.
    ///
    /// Returns `true` when the bound value changed (editing callback fired).
    pub fn release(&mut self, value: &mut f64) -> bool {
        if self.drag.take().is_none() {
            return false;
        }
        let pitch = self.pitch();
        let max_index = self.config().max_index();
        let snapped = nearest_pitch_multiple(self.anim.offset(), pitch)
            .clamp(0.0, offset_from_index(max_index, pitch));
        self.anim.animate_to(snapped);
        let landed = index_from_offset(snapped, pitch, max_index);
        self.commit(landed, value)
    }

    /// Whole-tick nudge (scroll wheel, arrow keys on the surface).  Runs the
    /// same commit path as a drag settle.
    pub fn nudge(&mut self, delta: i64, value: &mut f64) -> bool {
        let max_index = self.config().max_index() as i64;
        let landed = (self.sync.settled_index() as i64 + delta).clamp(0, max_index) as usize;
        self.sync.grab();
        self.anim.animate_to(offset_from_index(landed, self.pitch()));
        self.commit(landed, value)
    }

    fn commit(&mut self, landed: usize, value: &mut f64) -> bool {
        match self.sync.settle(landed) {
            Some(settle) => {
                *value = settle.value;
                self.feedback = true;
                if let Some(callback) = self.on_edit.as_mut() {
                    callback(settle.value);
                }
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for SliderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderState")
            .field("sync", &self.sync)
            .field("anim", &self.anim)
            .field("item_width", &self.item_width)
            .field("spacing", &self.spacing)
            .field("drag", &self.drag)
            .field("feedback", &self.feedback)
            .finish_non_exhaustive()
    }
}

// ───────────────────────────────────────── widget ────────────

static DEFAULT_RENDER: DefaultTickRender = DefaultTickRender;

/// The slider widget itself — created fresh each frame.
pub struct Slider<'a> {
    block: Option<Block<'a>>,
    edge_mask: EdgeMask,
    renderer: Option<&'a dyn TickRender>,
}

impl<'a> Slider<'a> {
    pub fn new() -> Self {
        Self {
            block: None,
            edge_mask: EdgeMask::Visible(6),
            renderer: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn edge_mask(mut self, mask: EdgeMask) -> Self {
        self.edge_mask = mask;
        self
    }

    /// Swap in custom anchor/segment/overlay rendering.
    pub fn renderer(mut self, renderer: &'a dyn TickRender) -> Self {
        self.renderer = Some(renderer);
        self
    }
}

impl<'a> Default for Slider<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> StatefulWidget for Slider<'a> {
    type State = SliderState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Resolve the inner area (inside the optional block border).
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };
        if inner.width < 3 || inner.height == 0 {
            return;
        }

        let renderer = self.renderer.unwrap_or(&DEFAULT_RENDER);
        let config = *state.config();
        let pitch = state.pitch();
        let offset = state.offset();
        let max_index = config.max_index();
        let anchor_x = inner.left() + inner.width / 2;

        // Indices whose columns can fall inside the lane this frame.
        let half_left = (anchor_x - inner.left()) as f64;
        let half_right = (inner.right() - 1 - anchor_x) as f64;
        let first = (((offset - half_left) / pitch).floor()).max(0.0) as usize;
        let last = ((((offset + half_right) / pitch).ceil()) as usize).min(max_index);

        let nearest = index_from_offset(offset, pitch, max_index);
        let mut nearest_ctx = None;

        for index in first..=last {
            let col = anchor_x as f64 + (offset_from_index(index, pitch) - offset);
            let col = col.round();
            if col < inner.left() as f64 || col >= inner.right() as f64 {
                continue;
            }
            let ctx = TickContext {
                index,
                value: config.value_from_index(index),
                step: config.step(),
                column: col as u16,
                item_width: state.item_width(),
            };
            renderer.render_segment(ctx, inner, buf);
            if index == nearest {
                nearest_ctx = Some(ctx);
            }
        }

        // Overlay, then the anchor on top of everything.
        if let Some(ctx) = nearest_ctx {
            renderer.render_segment_overlay(ctx, inner, buf);
        }
        renderer.render_anchor(inner, anchor_x, buf);

        if let EdgeMask::Visible(width) = self.edge_mask {
            apply_edge_mask(inner, width, buf);
        }
    }
}

/// Dim `width` columns at each horizontal edge, the outer half harder than
/// the inner half, approximating an alpha fade in cell space.
fn apply_edge_mask(inner: Rect, width: u16, buf: &mut Buffer) {
    let width = width.min(inner.width / 2);
    if width == 0 {
        return;
    }
    let outer = width.div_ceil(2);

    let left_outer = Rect::new(inner.left(), inner.y, outer, inner.height);
    let left_inner = Rect::new(inner.left() + outer, inner.y, width - outer, inner.height);
    let right_outer = Rect::new(inner.right() - outer, inner.y, outer, inner.height);
    let right_inner = Rect::new(inner.right() - width, inner.y, width - outer, inner.height);

    buf.set_style(left_inner, Theme::edge_fade_style());
    buf.set_style(right_inner, Theme::edge_fade_style());
    buf.set_style(left_outer, Theme::edge_fade_strong_style());
    buf.set_style(right_outer, Theme::edge_fade_strong_style());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn state(initial: f64) -> SliderState {
        let config = SliderConfig::new(0.0, 10.0, 1.0).unwrap();
        SliderState::new(config, 1, 5, initial).unwrap()
    }

    fn run_to_rest(state: &mut SliderState, value: f64) {
        for _ in 0..200 {
            state.sync(value);
        }
    }

    #[test]
    fn pitch_must_be_positive() {
        let config = SliderConfig::new(0.0, 10.0, 1.0).unwrap();
        assert!(matches!(
            SliderState::new(config, 0, 0, 0.0),
            Err(ConfigError::InvalidPitch(_))
        ));
    }

    #[test]
    fn pitch_widens_before_adding() {
        // Both halves near the top of u16 range must not wrap the sum.
        let config = SliderConfig::new(0.0, 10.0, 1.0).unwrap();
        let s = SliderState::new(config, 60_000, 60_000, 0.0).unwrap();
        assert_eq!(s.pitch(), 120_000.0);

        let s = SliderState::new(config, u16::MAX, u16::MAX, 0.0).unwrap();
        assert_eq!(s.pitch(), 2.0 * u16::MAX as f64);
    }

    #[test]
    fn initial_offset_matches_initial_value() {
        let s = state(3.0);
        assert_eq!(s.settled_index(), 3);
        assert_eq!(s.offset(), 18.0); // pitch 6 × index 3
    }

    #[test]
    fn external_change_scrolls_without_writing_back() {
        let mut s = state(5.0);
        let value = 7.0; // host wrote 7 while the widget sat at index 5

        s.sync(value);
        assert!(s.is_animating());
        run_to_rest(&mut s, value);

        assert_eq!(s.settled_index(), 7);
        assert_eq!(s.offset(), 42.0);
        // Loop guard held: no feedback, no edit — the move consumed the
        // change without re-deriving the value.
        assert!(!s.take_tick_feedback());
        assert_eq!(value, 7.0);
    }

    #[test]
    fn drag_and_release_commits_snapped_value() {
        let mut s = state(0.0);
        let mut value = 0.0;

        s.grab(50);
        s.drag_to(30); // 20 columns left → offset 20 → nearest tick 3 (18.0)
        let changed = s.release(&mut value);

        assert!(changed);
        assert_eq!(s.settled_index(), 3);
        assert_eq!(value, 3.0);
        assert!(s.take_tick_feedback());

        // Settle-back animation runs, then the written value is guarded.
        run_to_rest(&mut s, value);
        assert_eq!(s.offset(), 18.0);
        assert_eq!(value, 3.0);
    }

    #[test]
    fn release_on_same_tick_leaves_value_alone() {
        let mut s = state(4.0);
        let mut value = 4.0;

        s.grab(50);
        s.drag_to(48); // 2 columns — snaps back to the same tick
        assert!(!s.release(&mut value));
        assert_eq!(value, 4.0);
        assert_eq!(s.settled_index(), 4);
    }

    #[test]
    fn drag_crossing_ticks_sets_feedback() {
        let mut s = state(0.0);
        s.grab(50);
        s.drag_to(49);
        s.drag_to(48);
        assert!(!s.take_tick_feedback()); // still nearest tick 0
        s.drag_to(44); // offset 6 → nearest tick 1
        assert!(s.take_tick_feedback());
    }

    #[test]
    fn drag_clamps_to_domain() {
        let mut s = state(0.0);
        let mut value = 0.0;
        s.grab(50);
        s.drag_to(120); // would overscroll left of tick 0
        assert_eq!(s.offset(), 0.0);
        assert!(!s.release(&mut value));

        s.grab(50);
        // Way past the last tick (index 10, offset 60).
        s.drag_to(0);
        s.drag_to(0);
        assert!(s.offset() <= 60.0);
    }

    #[test]
    fn nudge_fires_edit_callback_once_per_commit() {
        let edits: Rc<RefCell<Vec<f64>>> = Rc::default();
        let sink = Rc::clone(&edits);
        let config = SliderConfig::new(0.0, 10.0, 1.0).unwrap();
        let mut s = SliderState::new(config, 1, 5, 2.0)
            .unwrap()
            .on_edit(move |v| sink.borrow_mut().push(v));
        let mut value = 2.0;

        assert!(s.nudge(1, &mut value));
        assert!(s.nudge(-3, &mut value));
        // Clamped at the lower bound: no change, no callback.
        assert!(!s.nudge(-5, &mut value));

        assert_eq!(*edits.borrow(), vec![3.0, 0.0]);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn user_write_does_not_retrigger_scroll() {
        let mut s = state(2.0);
        let mut value = 2.0;
        s.nudge(3, &mut value);
        run_to_rest(&mut s, value);
        // The settle wrote 5.0; observing it again must not start a move.
        s.sync(value);
        assert!(!s.is_animating());
        assert_eq!(s.settled_index(), 5);
    }

    #[test]
    fn render_smoke() {
        let area = Rect::new(0, 0, 60, 7);
        let mut buf = Buffer::empty(area);
        let mut s = state(5.0);
        Slider::new()
            .block(Block::bordered())
            .edge_mask(EdgeMask::Visible(4))
            .render(area, &mut buf, &mut s);
        // The anchor head sits at the centre of the inner area.
        let anchor_x = 1 + 58 / 2;
        assert_eq!(buf[(anchor_x, 1)].symbol(), "▼");
    }
}
