//! Horizontal 0–255 slider for one ARGB channel.
//!
//! The track shows the current color with the channel swept from 0 (left) to
//! 255 (right). The alpha track sits on a checkerboard.

use floem::kurbo::{Circle, Rect, Shape, Stroke};
use floem::peniko::{Color, Gradient};

use floem::reactive::{RwSignal, SignalGet, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::color::Argb;
use crate::constants;
use crate::swatch;
use crate::value::Channel;

enum SliderUpdate {
    Value(u8),
    BaseColor(Argb),
}

pub struct ChannelSlider {
    id: ViewId,
    channel: Channel,
    held: bool,
    value: u8,
    base: Argb,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(u8)>,
}

/// Creates a slider for `channel`.
///
/// - `value`: read-only, positions the thumb.
/// - `base`: the color whose other channels tint the track.
/// - `on_change`: receives the value picked by dragging.
pub(crate) fn channel_slider(
    channel: Channel,
    value: RwSignal<u8>,
    base: RwSignal<Argb>,
    on_change: impl Fn(u8) + 'static,
) -> ChannelSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(SliderUpdate::Value(value.get()));
    });

    create_effect(move |_| {
        id.update_state(SliderUpdate::BaseColor(base.get()));
    });

    ChannelSlider {
        id,
        channel,
        held: false,
        value: value.get_untracked(),
        base: base.get_untracked(),
        size: Default::default(),
        on_change: Box::new(on_change),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

/// Map a pointer x position to a channel value on a track `width` wide.
pub(crate) fn value_at(x: f64, width: f64) -> Option<u8> {
    let r = constants::THUMB_RADIUS;
    let usable = width - 2.0 * r;
    if usable <= 0.0 {
        return None;
    }
    Some((((x - r) / usable).clamp(0.0, 1.0) * 255.0).round() as u8)
}

impl ChannelSlider {
    fn drag_to(&mut self, x: f64) {
        if let Some(v) = value_at(x, self.size.width as f64) {
            if v != self.value {
                self.value = v;
                (self.on_change)(v);
            }
            self.id.request_layout();
        }
    }

    /// Track end colors at channel 0 and 255.
    fn track_stops(&self) -> (Color, Color) {
        let base = match self.channel {
            Channel::Alpha => self.base,
            _ => self.base.with_alpha(255),
        };
        (
            Color::from(self.channel.replace(base, 0)),
            Color::from(self.channel.replace(base, 255)),
        )
    }
}

impl View for ChannelSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Value(v) => self.value = v,
                SliderUpdate::BaseColor(c) => self.base = c,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.drag_to(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.drag_to(e.pos.x);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
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
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        if self.channel == Channel::Alpha {
            swatch::paint_checkerboard(cx, rect);
        }
        let (low, high) = self.track_stops();
        let gradient = Gradient::new_linear((0.0, h / 2.0), (w, h / 2.0)).with_stops([low, high]);
        // Convert to BezPath so the vello renderer uses the general path
        // handler (its Rect fast-path only supports solid colors).
        let path = rect.to_path(0.1);
        cx.fill(&path, &gradient, 0.0);
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        // Thumb ring
        let radius = constants::THUMB_RADIUS;
        let thumb_x = radius + (self.value as f64 / 255.0) * (w - 2.0 * radius);
        let center = (thumb_x, h / 2.0);
        cx.stroke(
            &Circle::new(center, radius),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
        cx.stroke(
            &Circle::new(center, radius - 1.5),
            Color::WHITE,
            &Stroke::new(2.0),
        );
        cx.stroke(
            &Circle::new(center, radius - 3.0),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_maps_across_usable_track() {
        let w = 2.0 * constants::THUMB_RADIUS + 255.0;
        assert_eq!(value_at(0.0, w), Some(0));
        assert_eq!(value_at(constants::THUMB_RADIUS + 100.0, w), Some(100));
        assert_eq!(value_at(w, w), Some(255));
        assert_eq!(value_at(5.0, 10.0), None);
    }
}
