//! Color preview swatch over a checkerboard, so translucent colors read as
//! translucent.

use floem::context::{ComputeLayoutCx, PaintCx, UpdateCx};
use floem::kurbo::{Rect, Stroke};
use floem::peniko::Color;
use floem::reactive::{SignalGet, create_effect};
use floem::views::Decorators;
use floem::{View, ViewId};
use floem_renderer::Renderer;

use crate::color::Argb;
use crate::constants;

const LIGHT: Color = Color::rgb8(255, 255, 255);
const DARK: Color = Color::rgb8(204, 204, 204);

/// Paint a checkerboard pattern into `rect`.
pub(crate) fn paint_checkerboard(cx: &mut PaintCx, rect: Rect) {
    let cell = constants::CHECKER_CELL;
    cx.fill(&rect, LIGHT, 0.0);
    let cols = (rect.width() / cell).ceil() as usize;
    let rows = (rect.height() / cell).ceil() as usize;
    for row in 0..rows {
        for col in ((row + 1) % 2..cols).step_by(2) {
            let x = rect.x0 + col as f64 * cell;
            let y = rect.y0 + row as f64 * cell;
            let cell_rect = Rect::new(x, y, (x + cell).min(rect.x1), (y + cell).min(rect.y1));
            cx.fill(&cell_rect, DARK, 0.0);
        }
    }
}

pub struct ColorSwatch {
    id: ViewId,
    color: Argb,
    border: Argb,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates a swatch showing `color()`, outlined with `border`.
pub(crate) fn color_swatch(color: impl Fn() -> Argb + 'static, border: Argb) -> ColorSwatch {
    let id = ViewId::new();
    let initial = color();

    create_effect(move |_| {
        id.update_state(color());
    });

    ColorSwatch {
        id,
        color: initial,
        border,
        size: Default::default(),
    }
    .style(|s| s.min_width(24.0).min_height(24.0))
}

/// Swatch bound to a color signal.
pub(crate) fn signal_swatch(
    color: floem::reactive::RwSignal<Argb>,
    border: Argb,
) -> ColorSwatch {
    color_swatch(move || color.get(), border)
}

impl View for ColorSwatch {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(color) = state.downcast::<Argb>() {
            self.color = *color;
            self.id.request_layout();
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        if self.color.a() < 255 {
            paint_checkerboard(cx, rect);
        }
        cx.fill(&rect, Color::from(self.color), 0.0);
        cx.restore();

        cx.stroke(&rrect, Color::from(self.border), &Stroke::new(1.0));
    }
}
