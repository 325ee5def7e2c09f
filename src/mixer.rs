//! Color mixer: one slider and numeric editor per channel, a hex editor and a
//! preview swatch.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::binding::ColorBinding;
use crate::channel_slider::channel_slider;
use crate::color::Argb;
use crate::constants;
use crate::convert::ByteText;
#[cfg(feature = "clipboard")]
use crate::inputs::copy_button;
use crate::inputs::{EditorLook, byte_input, hex_input};
use crate::settings::MixerAppearance;
use crate::swatch::signal_swatch;
use crate::value::Channel;

/// Builder for the mixer view.
///
/// The mixer edits `color` in place; external writes to the signal show up in
/// every editor.
pub struct ColorPickerMixer {
    color: RwSignal<Argb>,
    edit_alpha: RwSignal<bool>,
    appearance: MixerAppearance,
}

impl ColorPickerMixer {
    pub fn new(color: RwSignal<Argb>) -> Self {
        Self {
            color,
            edit_alpha: RwSignal::new(true),
            appearance: MixerAppearance::default(),
        }
    }

    pub fn appearance(mut self, appearance: MixerAppearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Show the alpha row and edit `AARRGGBB` hex instead of `RRGGBB`.
    pub fn edit_alpha(self, edit_alpha: bool) -> Self {
        self.edit_alpha.set(edit_alpha);
        self
    }

    /// Drive [`edit_alpha`](Self::edit_alpha) from a signal.
    pub fn edit_alpha_signal(mut self, edit_alpha: RwSignal<bool>) -> Self {
        self.edit_alpha = edit_alpha;
        self
    }

    pub fn build(self) -> impl IntoView {
        crate::load_icon_font();
        let binding = ColorBinding::new(self.color, self.edit_alpha);
        let look = self.appearance;

        v_stack((
            channel_row(Channel::Alpha, binding.clone(), look.clone()),
            channel_row(Channel::Red, binding.clone(), look.clone()),
            channel_row(Channel::Green, binding.clone(), look.clone()),
            channel_row(Channel::Blue, binding.clone(), look.clone()),
            hex_row(binding, look),
        ))
        .style(|s| s.gap(constants::GAP))
    }
}

/// Mixer with default appearance and alpha editing.
pub fn color_picker_mixer(color: RwSignal<Argb>) -> impl IntoView {
    ColorPickerMixer::new(color).build()
}

fn channel_row(ch: Channel, binding: ColorBinding, look: MixerAppearance) -> impl IntoView {
    let edit_alpha = binding.edit_alpha();
    let editor = EditorLook {
        width: look.argb_editors_width,
        background: look.editors_color,
        text: look.text_color,
    };
    let text_color = look.text_color;
    let slider_width = look.slider_width;

    h_stack((
        label(move || ch.label()).style(move |s| {
            s.width(14.0)
                .font_size(constants::LABEL_FONT)
                .color(Color::from(text_color))
        }),
        channel_slider(
            ch,
            binding.channel(ch),
            binding.color(),
            binding.channel_editor(ch),
        )
        .style(move |s| s.width(slider_width)),
        byte_input(
            binding.channel(ch),
            ByteText::default(),
            editor,
            binding.channel_editor(ch),
        ),
    ))
    .style(move |s| {
        let hidden = ch == Channel::Alpha && !edit_alpha.get();
        s.items_center()
            .gap(constants::GAP)
            .apply_if(hidden, |s| s.hide())
    })
}

fn hex_row(binding: ColorBinding, look: MixerAppearance) -> impl IntoView {
    let editor = EditorLook {
        width: look.color_editor_width,
        background: look.editors_color,
        text: look.text_color,
    };
    #[cfg(feature = "clipboard")]
    let hex = binding.hex();

    h_stack((
        signal_swatch(binding.color(), look.color_preview_border_color)
            .style(|s| s.width(48.0).height(28.0)),
        empty().style(|s| s.flex_grow(1.0)),
        hex_input(binding.hex(), editor, binding.hex_editor()),
        #[cfg(feature = "clipboard")]
        copy_button(move || hex.get_untracked()),
    ))
    .style(|s| s.items_center().gap(constants::GAP))
}
