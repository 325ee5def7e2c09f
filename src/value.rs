//! Color view model shared by the entry and the mixer.
//!
//! Keeps the byte channels, the packed color and the hex string consistent.
//! Every mutation reports which properties it changed so the widgets can push
//! exactly those into their signals.

use crate::color::Argb;

/// One of the four editable channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue];

    /// Single-letter caption used by the editors.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Alpha => "A",
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }

    /// Read this channel out of a color.
    pub fn of(self, color: Argb) -> u8 {
        match self {
            Channel::Alpha => color.a(),
            Channel::Red => color.r(),
            Channel::Green => color.g(),
            Channel::Blue => color.b(),
        }
    }

    /// Copy of `color` with this channel replaced.
    pub fn replace(self, color: Argb, v: u8) -> Argb {
        let (a, r, g, b) = (color.a(), color.r(), color.g(), color.b());
        match self {
            Channel::Alpha => Argb::new(v, r, g, b),
            Channel::Red => Argb::new(a, v, g, b),
            Channel::Green => Argb::new(a, r, v, b),
            Channel::Blue => Argb::new(a, r, g, v),
        }
    }
}

/// A property of [`ColorValue`] that can report a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorProperty {
    Channel(Channel),
    Value,
    Hex,
    EditAlpha,
}

/// Ordered change notifications raised by one mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes(Vec<ColorProperty>);

impl Changes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, prop: ColorProperty) -> bool {
        self.0.contains(&prop)
    }

    pub fn iter(&self) -> impl Iterator<Item = ColorProperty> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[ColorProperty] {
        &self.0
    }
}

/// ARGB channels plus their derived packed and hex forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorValue {
    a: u8,
    r: u8,
    g: u8,
    b: u8,
    edit_alpha: bool,
    // Set while `set_value` assigns the channels one by one.
    batching: bool,
}

impl Default for ColorValue {
    fn default() -> Self {
        Self {
            a: 255,
            r: 255,
            g: 255,
            b: 255,
            edit_alpha: true,
            batching: false,
        }
    }
}

impl ColorValue {
    pub fn new(value: Argb, edit_alpha: bool) -> Self {
        let mut cv = Self {
            edit_alpha,
            ..Self::default()
        };
        cv.set_value(value);
        cv
    }

    pub fn a(&self) -> u8 {
        self.a
    }
    pub fn r(&self) -> u8 {
        self.r
    }
    pub fn g(&self) -> u8 {
        self.g
    }
    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn channel(&self, ch: Channel) -> u8 {
        match ch {
            Channel::Alpha => self.a,
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    pub fn set_a(&mut self, v: u8) -> Changes {
        self.set_channel(Channel::Alpha, v)
    }
    pub fn set_r(&mut self, v: u8) -> Changes {
        self.set_channel(Channel::Red, v)
    }
    pub fn set_g(&mut self, v: u8) -> Changes {
        self.set_channel(Channel::Green, v)
    }
    pub fn set_b(&mut self, v: u8) -> Changes {
        self.set_channel(Channel::Blue, v)
    }

    /// Set one channel. Raises nothing when the value is unchanged.
    pub fn set_channel(&mut self, ch: Channel, v: u8) -> Changes {
        let mut changes = Changes::default();
        self.assign_channel(ch, v, &mut changes);
        changes
    }

    fn assign_channel(&mut self, ch: Channel, v: u8, changes: &mut Changes) {
        let slot = match ch {
            Channel::Alpha => &mut self.a,
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        };
        if *slot == v {
            return;
        }
        *slot = v;
        self.notify(
            &[ColorProperty::Channel(ch), ColorProperty::Value, ColorProperty::Hex],
            changes,
        );
    }

    /// The packed color.
    pub fn value(&self) -> Argb {
        Argb::new(self.a, self.r, self.g, self.b)
    }

    /// Assign all four channels as one batch.
    ///
    /// Channels report only themselves; `Value` and `Hex` are reported once at
    /// the end, even if nothing changed.
    pub fn set_value(&mut self, value: Argb) -> Changes {
        let mut changes = Changes::default();
        self.batching = true;
        for ch in Channel::ALL {
            self.assign_channel(ch, ch.of(value), &mut changes);
        }
        self.batching = false;
        self.notify(&[ColorProperty::Value, ColorProperty::Hex], &mut changes);
        changes
    }

    /// Hex form: `AARRGGBB`, or `RRGGBB` while alpha is not edited.
    pub fn hex(&self) -> String {
        let hex = self.value().to_hex();
        if self.edit_alpha {
            hex
        } else {
            hex[2..].to_string()
        }
    }

    /// Assign from hex text typed by the user.
    ///
    /// Accepts exactly 8 digits while alpha is edited and exactly 6 otherwise,
    /// with an optional leading `#`. Anything else is ignored.
    pub fn set_hex(&mut self, text: &str) -> Changes {
        let hex = text.trim_start_matches('#');
        let expected = if self.edit_alpha { 8 } else { 6 };
        if hex.len() != expected {
            return Changes::default();
        }
        match Argb::from_hex(hex) {
            Ok(clr) if clr != self.value() => self.set_value(clr),
            Ok(_) => Changes::default(),
            Err(err) => {
                log::trace!("ignoring hex input {text:?}: {err}");
                Changes::default()
            }
        }
    }

    pub fn edit_alpha(&self) -> bool {
        self.edit_alpha
    }

    pub fn set_edit_alpha(&mut self, edit_alpha: bool) -> Changes {
        let mut changes = Changes::default();
        if self.edit_alpha != edit_alpha {
            self.edit_alpha = edit_alpha;
            self.notify(&[ColorProperty::EditAlpha, ColorProperty::Hex], &mut changes);
        }
        changes
    }

    fn notify(&self, props: &[ColorProperty], changes: &mut Changes) {
        for &prop in props {
            if self.batching && matches!(prop, ColorProperty::Value | ColorProperty::Hex) {
                continue;
            }
            changes.0.push(prop);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use super::ColorProperty::{EditAlpha, Hex, Value};

    #[test]
    fn defaults_to_opaque_white() {
        let cv = ColorValue::default();
        assert_eq!(cv.value(), Argb::WHITE);
        assert_eq!(cv.hex(), "FFFFFFFF");
        assert!(cv.edit_alpha());
    }

    #[test]
    fn channel_change_notifies_value_and_hex() {
        let mut cv = ColorValue::default();
        let changes = cv.set_r(0x10);
        assert_eq!(
            changes.as_slice(),
            &[ColorProperty::Channel(Channel::Red), Value, Hex]
        );
        assert_eq!(cv.hex(), "FF10FFFF");
        assert!(cv.set_r(0x10).is_empty());
    }

    #[test]
    fn batch_set_reports_value_once() {
        let mut cv = ColorValue::default();
        let changes = cv.set_value(Argb::new(0x80, 0x00, 0xFF, 0x01));
        assert_eq!(
            changes.as_slice(),
            &[
                ColorProperty::Channel(Channel::Alpha),
                ColorProperty::Channel(Channel::Red),
                ColorProperty::Channel(Channel::Blue),
                Value,
                Hex,
            ]
        );
    }

    #[test]
    fn batch_set_of_same_value_still_reports() {
        let mut cv = ColorValue::default();
        assert_eq!(cv.set_value(Argb::WHITE).as_slice(), &[Value, Hex]);
    }

    #[test]
    fn hex_drops_alpha_when_not_edited() {
        let mut cv = ColorValue::new(Argb::new(0x40, 0x12, 0x34, 0x56), true);
        assert_eq!(cv.hex(), "40123456");
        assert_eq!(cv.set_edit_alpha(false).as_slice(), &[EditAlpha, Hex]);
        assert_eq!(cv.hex(), "123456");
        assert!(cv.set_edit_alpha(false).is_empty());
        cv.set_edit_alpha(true);
        assert_eq!(cv.hex(), "40123456");
    }

    #[test]
    fn set_hex_requires_length_matching_alpha_mode() {
        let mut cv = ColorValue::default();
        assert!(cv.set_hex("123456").is_empty());
        assert_eq!(cv.value(), Argb::WHITE);

        assert!(!cv.set_hex("#80123456").is_empty());
        assert_eq!(cv.value(), Argb::new(0x80, 0x12, 0x34, 0x56));

        cv.set_edit_alpha(false);
        assert!(cv.set_hex("80123456").is_empty());
        cv.set_hex("ABCDEF");
        assert_eq!(cv.value(), Argb::new(0xFF, 0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn invalid_hex_keeps_prior_state() {
        let mut cv = ColorValue::new(Argb::BLACK, true);
        assert!(cv.set_hex("FF00ZZ00").is_empty());
        assert_eq!(cv.value(), Argb::BLACK);
    }

    #[test]
    fn set_hex_to_current_value_is_silent() {
        let mut cv = ColorValue::new(Argb::BLACK, true);
        assert!(cv.set_hex("ff000000").is_empty());
    }

    proptest! {
        #[test]
        fn hex_is_canonical(a: u8, r: u8, g: u8, b: u8, edit_alpha: bool) {
            let cv = ColorValue::new(Argb::new(a, r, g, b), edit_alpha);
            let hex = cv.hex();
            prop_assert_eq!(hex.len(), if edit_alpha { 8 } else { 6 });
            prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

            let mut other = ColorValue::new(Argb::new(a, 0, 0, 0), edit_alpha);
            other.set_hex(&hex.to_lowercase());
            prop_assert_eq!(other.hex(), hex);
        }
    }
}
