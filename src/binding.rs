//! Two-way glue between a [`ColorValue`] and the signals the editors read.

use std::cell::Cell;
use std::rc::Rc;

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, SignalWith, create_effect};

use crate::color::Argb;
use crate::value::{Changes, Channel, ColorProperty, ColorValue};

/// Owns the view model of one widget and mirrors it into signals.
///
/// Edits go through [`update`](Self::update); the changes the model reports
/// are the only signals that get written.
#[derive(Clone)]
pub(crate) struct ColorBinding {
    model: Rc<Cell<ColorValue>>,
    color: RwSignal<Argb>,
    edit_alpha: RwSignal<bool>,
    hex: RwSignal<String>,
    channels: [RwSignal<u8>; 4],
}

fn set_if_changed<T: PartialEq + 'static>(signal: RwSignal<T>, value: T) {
    if signal.with_untracked(|current| *current != value) {
        signal.set(value);
    }
}

fn index(ch: Channel) -> usize {
    match ch {
        Channel::Alpha => 0,
        Channel::Red => 1,
        Channel::Green => 2,
        Channel::Blue => 3,
    }
}

impl ColorBinding {
    /// Bind to the widget's `color` and `edit_alpha` properties.
    pub(crate) fn new(color: RwSignal<Argb>, edit_alpha: RwSignal<bool>) -> Self {
        let model = ColorValue::new(color.get_untracked(), edit_alpha.get_untracked());
        let binding = Self {
            model: Rc::new(Cell::new(model)),
            color,
            edit_alpha,
            hex: RwSignal::new(model.hex()),
            channels: Channel::ALL.map(|ch| RwSignal::new(model.channel(ch))),
        };

        let b = binding.clone();
        create_effect(move |_| {
            let c = color.get();
            if c != b.value() {
                b.update(|m| m.set_value(c));
            }
        });

        let b = binding.clone();
        create_effect(move |_| {
            let on = edit_alpha.get();
            b.update(|m| m.set_edit_alpha(on));
        });

        binding
    }

    /// Mutate the model and publish what it reports.
    pub(crate) fn update(&self, f: impl FnOnce(&mut ColorValue) -> Changes) {
        let mut model = self.model.get();
        let changes = f(&mut model);
        self.model.set(model);
        self.publish(&changes);
    }

    fn publish(&self, changes: &Changes) {
        let model = self.model.get();
        for prop in changes.iter() {
            match prop {
                ColorProperty::Channel(ch) => {
                    set_if_changed(self.channels[index(ch)], model.channel(ch))
                }
                ColorProperty::Value => set_if_changed(self.color, model.value()),
                ColorProperty::Hex => set_if_changed(self.hex, model.hex()),
                ColorProperty::EditAlpha => set_if_changed(self.edit_alpha, model.edit_alpha()),
            }
        }
    }

    pub(crate) fn value(&self) -> Argb {
        self.model.get().value()
    }

    pub(crate) fn color(&self) -> RwSignal<Argb> {
        self.color
    }

    pub(crate) fn edit_alpha(&self) -> RwSignal<bool> {
        self.edit_alpha
    }

    pub(crate) fn hex(&self) -> RwSignal<String> {
        self.hex
    }

    pub(crate) fn channel(&self, ch: Channel) -> RwSignal<u8> {
        self.channels[index(ch)]
    }

    /// Callback applying typed hex text.
    pub(crate) fn hex_editor(&self) -> impl Fn(&str) + use<> {
        let b = self.clone();
        move |text: &str| b.update(|m| m.set_hex(text))
    }

    /// Callback applying a channel value.
    pub(crate) fn channel_editor(&self, ch: Channel) -> impl Fn(u8) + use<> {
        let b = self.clone();
        move |v| b.update(|m| m.set_channel(ch, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_edit_reaches_color_and_hex() {
        let color = RwSignal::new(Argb::WHITE);
        let binding = ColorBinding::new(color, RwSignal::new(true));
        binding.channel_editor(Channel::Green)(0);
        assert_eq!(color.get_untracked(), Argb::new(255, 255, 0, 255));
        assert_eq!(binding.hex().get_untracked(), "FFFF00FF");
        assert_eq!(binding.channel(Channel::Green).get_untracked(), 0);
    }

    #[test]
    fn external_color_reaches_editors() {
        let color = RwSignal::new(Argb::WHITE);
        let binding = ColorBinding::new(color, RwSignal::new(false));
        color.set(Argb::new(0x10, 0x20, 0x30, 0x40));
        assert_eq!(binding.hex().get_untracked(), "203040");
        assert_eq!(binding.channel(Channel::Alpha).get_untracked(), 0x10);
    }

    #[test]
    fn invalid_hex_changes_nothing() {
        let color = RwSignal::new(Argb::BLACK);
        let binding = ColorBinding::new(color, RwSignal::new(true));
        binding.hex_editor()("FF0");
        binding.hex_editor()("#GG000000");
        assert_eq!(color.get_untracked(), Argb::BLACK);
        binding.hex_editor()("#80FF0000");
        assert_eq!(color.get_untracked(), Argb::new(0x80, 0xFF, 0, 0));
    }

    #[test]
    fn toggling_alpha_truncates_hex() {
        let edit_alpha = RwSignal::new(true);
        let binding = ColorBinding::new(RwSignal::new(Argb::BLACK), edit_alpha);
        assert_eq!(binding.hex().get_untracked(), "FF000000");
        edit_alpha.set(false);
        assert_eq!(binding.hex().get_untracked(), "000000");
    }
}
