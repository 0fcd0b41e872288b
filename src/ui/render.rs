//! Per-tick rendering capability.
//!
//! The widget delegates its three visual pieces — the fixed centre anchor,
//! each tick segment, and the overlay on the segment under the anchor — to a
//! [`TickRender`] implementation, so hosts can restyle ticks without
//! touching any scroll logic.  [`DefaultTickRender`] is used when no custom
//! renderer is supplied.

use ratatui::{buffer::Buffer, layout::Rect};

use super::theme::Theme;

/// Everything a renderer needs to draw one tick segment.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Tick index in `[0, max_index]`.
    pub index: usize,
    /// Value this tick represents.
    pub value: f64,
    /// Step size of the slider (used for label precision).
    pub step: f64,
    /// Terminal column the tick sits on this frame.
    pub column: u16,
    /// Configured item width in columns.
    pub item_width: u16,
}

/// Rendering hooks for the three layers of the slider surface.
pub trait TickRender {
    /// Fixed centre marker, drawn last so it sits on top of the ticks.
    fn render_anchor(&self, lane: Rect, anchor_x: u16, buf: &mut Buffer);

    /// One tick segment at its scrolled position.
    fn render_segment(&self, ctx: TickContext, lane: Rect, buf: &mut Buffer);

    /// Drawn over the segment currently nearest the anchor.
    fn render_segment_overlay(&self, ctx: TickContext, lane: Rect, buf: &mut Buffer);
}

/// Default look: a rule per tick with value labels on every fifth tick, a
/// `▼` anchor head, and a highlighted rule under the anchor.
pub struct DefaultTickRender;

/// Decimal places needed to print tick values distinctly for `step`.
fn label_precision(step: f64) -> usize {
    if step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    }
}

impl DefaultTickRender {
    fn draw_rule(ctx: TickContext, lane: Rect, buf: &mut Buffer, glyph: &str, style: ratatui::style::Style) {
        if ctx.column < lane.left() || ctx.column >= lane.right() {
            return;
        }
        let major = ctx.index % 5 == 0;
        // Row 0 is the anchor head's row; the last row holds labels.
        let top = lane.top() + 1;
        let bottom = lane.bottom().saturating_sub(1);
        for y in top..bottom {
            // Minor ticks only mark the top of the lane.
            if !major && y > top {
                break;
            }
            buf.set_string(ctx.column, y, glyph, style);
        }
    }
}

impl TickRender for DefaultTickRender {
    fn render_anchor(&self, lane: Rect, anchor_x: u16, buf: &mut Buffer) {
        if lane.height == 0 || anchor_x < lane.left() || anchor_x >= lane.right() {
            return;
        }
        buf.set_string(anchor_x, lane.top(), "▼", Theme::anchor_style());
    }

    fn render_segment(&self, ctx: TickContext, lane: Rect, buf: &mut Buffer) {
        if lane.height < 2 {
            return;
        }
        let major = ctx.index % 5 == 0;
        let style = if major {
            Theme::major_tick_style()
        } else {
            Theme::tick_style()
        };
        let glyph = if major { "│" } else { "╵" };
        Self::draw_rule(ctx, lane, buf, glyph, style);

        // Value label under every major tick, centred on the rule and
        // clipped to the lane.
        if major && lane.height >= 3 {
            let label = format!("{:.*}", label_precision(ctx.step), ctx.value);
            let len = label.len() as u16;
            if len <= lane.width {
                let ideal = ctx.column.saturating_sub(len / 2);
                let x = ideal
                    .max(lane.left())
                    .min(lane.right().saturating_sub(len));
                buf.set_string(x, lane.bottom() - 1, &label, Theme::tick_label_style());
            }
        }
    }

    fn render_segment_overlay(&self, ctx: TickContext, lane: Rect, buf: &mut Buffer) {
        if lane.height < 2 {
            return;
        }
        Self::draw_rule(ctx, lane, buf, "┃", Theme::overlay_style());
    }
}
