use std::rc::Rc;

use floem::AnyView;
use floem::event::EventListener;
use floem::prelude::*;
use floem::reactive::{RwSignal, Scope, SignalGet, SignalUpdate};
use floem::style::Style;
use floem::unit::Pct;

use super::animation::{self, Easing, Tween};
use super::gate::CompletionGate;
use super::layer::DialogLayer;
use crate::color::Argb;
use crate::constants;
use crate::inputs::{icon_button, push_button};
use crate::settings::DialogSettings;

/// How a dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Ok,
    Cancel,
    /// Closed from code or by the title bar button.
    Closed,
}

impl DialogResult {
    pub fn is_confirmed(self) -> bool {
        self == DialogResult::Ok
    }
}

/// Handle to a dialog that has been shown.
#[derive(Clone)]
pub struct DialogHandle {
    gate: CompletionGate<DialogResult>,
    layer: DialogLayer,
    id: u64,
}

impl DialogHandle {
    /// Close the dialog with [`DialogResult::Closed`].
    ///
    /// Returns false if the dialog is not yet accepting input or already
    /// closing.
    pub fn close(&self) -> bool {
        self.resolve(DialogResult::Closed)
    }

    /// Complete the dialog as if a button had been clicked.
    pub(crate) fn resolve(&self, result: DialogResult) -> bool {
        self.gate.try_resolve(result)
    }

    /// Whether the dialog is still placed in its layer.
    pub fn is_open(&self) -> bool {
        self.layer.is_current(self.id)
    }
}

/// Modal dialog frame: title, caller supplied content, OK and Cancel.
///
/// ```rust,no_run
/// use floem::prelude::*;
/// use floem_argb::{Dialog, DialogLayer};
///
/// let layer = DialogLayer::new();
/// Dialog::new("Confirm").show(
///     &layer,
///     || label(|| "Apply the new palette?").into_any(),
///     |result| println!("confirmed: {}", result.is_confirmed()),
/// );
/// ```
pub struct Dialog {
    title: String,
    settings: DialogSettings,
}

impl Dialog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            settings: DialogSettings::default(),
        }
    }

    pub fn settings(mut self, settings: DialogSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Place the dialog into `layer` and wait for a button.
    ///
    /// Buttons are ignored until the show animation has finished. After a
    /// button is clicked the dialog animates out, leaves the layer and
    /// `on_closed` receives the result.
    pub fn show(
        self,
        layer: &DialogLayer,
        content: impl Fn() -> AnyView + 'static,
        on_closed: impl FnOnce(DialogResult) + 'static,
    ) -> DialogHandle {
        let animate = self.settings.dialog_animation;
        // Owns the animation signals; disposed once the dialog has closed.
        let cx = Scope::current().create_child();
        let opacity = cx.create_rw_signal(if animate { 0.0 } else { 1.0 });
        let scale = cx.create_rw_signal(if animate {
            constants::DIALOG_HIDDEN_SCALE
        } else {
            1.0
        });
        let gate = CompletionGate::new();

        let frame = Rc::new(DialogFrame {
            title: self.title,
            settings: self.settings,
            opacity,
            scale,
            gate: gate.clone(),
            content: Box::new(content),
        });
        let dismiss_gate = gate.clone();
        let id = layer.present(
            Rc::new(move || frame.view().into_any()),
            Rc::new(move || {
                dismiss_gate.try_resolve(DialogResult::Closed);
            }),
        );
        log::debug!("dialog {id} presented");

        let hide_layer = layer.clone();
        let on_resolved = move |result: DialogResult| {
            log::debug!("dialog {id} resolved with {result:?}");
            let finish = move || {
                hide_layer.remove(id);
                log::debug!("dialog {id} removed");
                on_closed(result);
                cx.dispose();
            };
            if animate {
                let fade = Tween::new(1.0, 0.0, Easing::SinIn);
                let shrink = Tween::new(1.0, constants::DIALOG_HIDDEN_SCALE, Easing::SinIn);
                animation::animate(
                    constants::DIALOG_ANIMATION,
                    move |t| {
                        opacity.set(fade.at(t));
                        scale.set(shrink.at(t));
                    },
                    finish,
                );
            } else {
                finish();
            }
        };

        let arm_gate = gate.clone();
        let arm_layer = layer.clone();
        let arm = move || {
            if arm_layer.is_current(id) {
                log::debug!("dialog {id} waiting for input");
                arm_gate.arm(on_resolved);
            } else {
                // Replaced by another dialog while animating in.
                on_resolved(DialogResult::Closed);
            }
        };
        if animate {
            let fade = Tween::new(0.0, 1.0, Easing::SinOut);
            let grow = Tween::new(constants::DIALOG_HIDDEN_SCALE, 1.0, Easing::SinOut);
            animation::animate(
                constants::DIALOG_ANIMATION,
                move |t| {
                    opacity.set(fade.at(t));
                    scale.set(grow.at(t));
                },
                arm,
            );
        } else {
            arm();
        }

        DialogHandle {
            gate,
            layer: layer.clone(),
            id,
        }
    }
}

struct DialogFrame {
    title: String,
    settings: DialogSettings,
    opacity: RwSignal<f64>,
    scale: RwSignal<f64>,
    gate: CompletionGate<DialogResult>,
    content: Box<dyn Fn() -> AnyView>,
}

/// `color` with its alpha multiplied by `opacity`.
fn faded(color: Argb, opacity: f64) -> Color {
    let a = (color.a() as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::from(color.with_alpha(a))
}

impl DialogFrame {
    fn view(&self) -> impl IntoView + use<> {
        let s = &self.settings;
        let (opacity, scale) = (self.opacity, self.scale);
        let (backdrop, surface, text) = (s.background_color, s.dialog_color, s.text_color);

        let resolve = |result: DialogResult| {
            let gate = self.gate.clone();
            move || {
                gate.try_resolve(result);
            }
        };

        let title_row = h_stack((
            label({
                let title = self.title.clone();
                move || title.clone()
            })
            .style(move |s| {
                s.font_size(constants::TITLE_FONT)
                    .color(faded(text, opacity.get()))
            }),
            empty().style(|s| s.flex_grow(1.0)),
            icon_button(lucide_icons::Icon::X, resolve(DialogResult::Closed)),
        ))
        .style(|s| s.items_center().margin_bottom(10.0).width_full());

        let specs = button_specs(s);
        let last = specs.len().saturating_sub(1);
        let buttons = h_stack_from_iter(specs.into_iter().enumerate().map(
            |(i, (result, caption))| {
                push_button(caption, text, resolve(result)).style(move |s| {
                    s.apply_if(i < last, |s| s.margin_right(constants::BUTTON_SPACING))
                })
            },
        ))
        .style(|s| s.justify_end().width_full().margin_top(constants::GAP));

        let frame = v_stack((title_row, (self.content)(), buttons)).style(move |s| {
            frame_style(s, faded(surface, opacity.get()), opacity.get())
                .scale(Pct(scale.get() * 100.0))
        });

        container(frame)
            .style(move |s| {
                s.size_full()
                    .items_center()
                    .justify_center()
                    .background(faded(backdrop, opacity.get()))
            })
            // Modal: nothing under the backdrop receives the pointer.
            .on_event_stop(EventListener::PointerDown, |_| {})
            .on_event_stop(EventListener::PointerUp, |_| {})
    }
}

/// The footer buttons in display order. A button with an empty caption is
/// left out.
fn button_specs(settings: &DialogSettings) -> Vec<(DialogResult, String)> {
    [
        (DialogResult::Ok, &settings.ok_button_text),
        (DialogResult::Cancel, &settings.cancel_button_text),
    ]
    .into_iter()
    .filter(|(_, caption)| !caption.is_empty())
    .map(|(result, caption)| (result, caption.clone()))
    .collect()
}

fn frame_style(s: Style, background: Color, opacity: f64) -> Style {
    s.padding(constants::DIALOG_PADDING)
        .background(background)
        .border_radius(constants::RADIUS * 2.0)
        .box_shadow_blur(16.0)
        .box_shadow_color(Color::rgba8(0, 0, 0, (70.0 * opacity) as u8))
}
