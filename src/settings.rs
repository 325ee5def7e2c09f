//! Appearance and behavior settings for the dialogs and the mixer.
//!
//! All settings deserialize from partial input; missing fields keep their
//! defaults. Colors are written as hex strings (`"#40000000"`).

use serde::{Deserialize, Serialize};

use crate::color::Argb;
use crate::constants;

/// Settings shared by every modal dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogSettings {
    /// Backdrop covering the page behind the dialog.
    pub background_color: Argb,
    pub dialog_color: Argb,
    pub text_color: Argb,
    /// Caption of the OK button. An empty caption hides the button.
    pub ok_button_text: String,
    /// Caption of the Cancel button. An empty caption hides the button.
    pub cancel_button_text: String,
    /// Fade and scale the dialog in and out.
    pub dialog_animation: bool,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            background_color: Argb::new(0x40, 0, 0, 0),
            dialog_color: Argb::WHITE,
            text_color: Argb::BLACK,
            ok_button_text: "OK".to_string(),
            cancel_button_text: "Cancel".to_string(),
            dialog_animation: true,
        }
    }
}

/// Settings of the color picker dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorDialogSettings {
    #[serde(flatten)]
    pub dialog: DialogSettings,
    #[serde(flatten)]
    pub mixer: MixerAppearance,
    pub edit_alpha: bool,
}

impl Default for ColorDialogSettings {
    fn default() -> Self {
        Self {
            dialog: DialogSettings::default(),
            mixer: MixerAppearance::default(),
            edit_alpha: true,
        }
    }
}

impl ColorDialogSettings {
    /// Mixer appearance with the dialog's text color applied.
    pub(crate) fn mixer_appearance(&self) -> MixerAppearance {
        MixerAppearance {
            text_color: self.dialog.text_color,
            ..self.mixer.clone()
        }
    }
}

/// Look of the color mixer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixerAppearance {
    #[serde(skip)]
    pub text_color: Argb,
    /// Background of the numeric and hex editors.
    pub editors_color: Argb,
    pub color_preview_border_color: Argb,
    pub slider_width: f64,
    pub argb_editors_width: f64,
    pub color_editor_width: f64,
}

impl Default for MixerAppearance {
    fn default() -> Self {
        Self {
            text_color: Argb::BLACK,
            editors_color: Argb::WHITE,
            color_preview_border_color: Argb::BLACK,
            slider_width: constants::SLIDER_WIDTH,
            argb_editors_width: constants::ARGB_EDITOR_WIDTH,
            color_editor_width: constants::HEX_EDITOR_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_defaults() {
        let s = DialogSettings::default();
        assert_eq!(s.background_color.to_hex(), "40000000");
        assert_eq!(s.ok_button_text, "OK");
        assert_eq!(s.cancel_button_text, "Cancel");
        assert!(s.dialog_animation);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s: ColorDialogSettings = serde_json::from_str(
            r##"{ "ok_button_text": "Pick", "slider_width": 300.0, "edit_alpha": false,
                  "dialog_color": "#FF202020" }"##,
        )
        .unwrap();
        assert_eq!(s.dialog.ok_button_text, "Pick");
        assert_eq!(s.dialog.cancel_button_text, "Cancel");
        assert_eq!(s.dialog.dialog_color, Argb::from_rgb(0x20, 0x20, 0x20));
        assert_eq!(s.mixer.slider_width, 300.0);
        assert_eq!(s.mixer.argb_editors_width, constants::ARGB_EDITOR_WIDTH);
        assert!(!s.edit_alpha);
    }

    #[test]
    fn mixer_takes_dialog_text_color() {
        let mut s = ColorDialogSettings::default();
        s.dialog.text_color = Argb::from_rgb(1, 2, 3);
        assert_eq!(s.mixer_appearance().text_color, Argb::from_rgb(1, 2, 3));
    }

    #[test]
    fn rejects_malformed_color() {
        let res = serde_json::from_str::<DialogSettings>(r#"{ "text_color": "blue" }"#);
        assert!(res.is_err());
    }
}
