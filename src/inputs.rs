//! Text editors and buttons shared by the entry, the mixer and the dialog.

use std::rc::Rc;

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::style::Style;

use crate::color::Argb;
use crate::constants;
use crate::convert::ByteText;

/// Size and colors of a text editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EditorLook {
    pub width: f64,
    pub background: Argb,
    pub text: Argb,
}

fn editor_style(s: Style, look: EditorLook) -> Style {
    s.width(look.width)
        .padding(3.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .color(Color::from(look.text))
        .background(Color::from(look.background))
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(3.0)
}

fn is_enter(e: &Event) -> bool {
    matches!(e, Event::KeyDown(ke) if ke.key.logical_key == Key::Named(NamedKey::Enter))
}

/// A 0–255 editor for one channel.
///
/// Committed on Enter or focus-lost; text that is not a byte commits the
/// converter's default value.
pub(crate) fn byte_input(
    value: RwSignal<u8>,
    conv: ByteText,
    look: EditorLook,
    on_commit: impl Fn(u8) + 'static,
) -> impl IntoView {
    let text = RwSignal::new(conv.format(Some(value.get_untracked())));

    // Signal → text (external updates)
    create_effect(move |_| {
        let expected = conv.format(Some(value.get()));
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let commit = move || {
        let raw = text.get_untracked();
        let parsed = conv.parse(&raw);
        if parsed != value.get_untracked() {
            on_commit(parsed);
        }
        // The committed value may equal the old one; re-sync the text anyway.
        let formatted = conv.format(Some(value.get_untracked()));
        if raw != formatted {
            text.set(formatted);
        }
    };
    let commit = Rc::new(commit);
    let on_focus_lost = commit.clone();

    text_input(text)
        .style(move |s| editor_style(s, look))
        .on_event_stop(EventListener::FocusLost, move |_| on_focus_lost())
        .on_event(EventListener::KeyDown, move |e| {
            if is_enter(e) {
                commit();
                return EventPropagation::Stop;
            }
            EventPropagation::Continue
        })
}

/// A hex editor prefixed with `#`.
///
/// Every keystroke is offered to `on_edit`; the owner decides whether the
/// text is acceptable. On Enter or focus-lost the text snaps back to `hex`.
pub(crate) fn hex_input(
    hex: RwSignal<String>,
    look: EditorLook,
    on_edit: impl Fn(&str) + 'static,
) -> impl IntoView {
    let text = RwSignal::new(hex.get_untracked());

    // External hex → text (only update if not equivalent)
    create_effect(move |_| {
        let val = hex.get();
        let current = text.get_untracked();
        if current.trim_start_matches('#').to_uppercase() != val {
            text.set(val);
        }
    });

    // Text → owner, skipping text that merely mirrors `hex`.
    create_effect(move |_| {
        let raw = text.get();
        let typed = raw.trim();
        if typed.trim_start_matches('#').to_uppercase() == hex.get_untracked() {
            return;
        }
        on_edit(typed);
    });

    let on_commit = move || {
        let canonical = hex.get_untracked();
        if text.get_untracked() != canonical {
            text.set(canonical);
        }
    };
    let on_commit_clone = on_commit;

    h_stack((
        label(|| "#").style(move |s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::from(look.text))
        }),
        text_input(text)
            .style(move |s| editor_style(s, look))
            .on_event_stop(EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event_stop(EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    on_commit_clone();
                }
            }),
    ))
    .style(|s| s.items_center().gap(2.0))
}

/// A captioned push button.
pub(crate) fn push_button(
    caption: String,
    text_color: Argb,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    let pressed = RwSignal::new(false);
    label(move || caption.clone())
        .style(move |s| {
            let bg = if pressed.get() {
                Color::rgb8(210, 210, 210)
            } else {
                Color::rgb8(235, 235, 235)
            };
            s.padding_horiz(14.0)
                .padding_vert(6.0)
                .font_size(constants::INPUT_FONT)
                .color(Color::from(text_color))
                .background(bg)
                .border(1.0)
                .border_color(Color::rgb8(190, 190, 190))
                .border_radius(constants::RADIUS)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.border_color(Color::rgb8(140, 140, 140)))
        })
        .on_event_stop(EventListener::PointerDown, move |_| {
            pressed.set(true);
        })
        .on_event_stop(EventListener::PointerUp, move |_| {
            pressed.set(false);
            on_click();
        })
}

/// A small borderless button showing a lucide icon.
pub(crate) fn icon_button(
    icon: lucide_icons::Icon,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    let pressed = RwSignal::new(false);
    let glyph = icon.unicode().to_string();
    container(
        label(move || glyph.clone()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_click();
    })
}

/// A small copy button that copies the result of `get_text` to the clipboard.
#[cfg(feature = "clipboard")]
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    icon_button(lucide_icons::Icon::Copy, move || {
        copy_to_clipboard(&get_text());
    })
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                log::warn!("failed to copy {text:?} to the clipboard: {err}");
            }
        }
        Err(err) => log::warn!("clipboard unavailable: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::ColorBinding;

    fn look() -> EditorLook {
        EditorLook {
            width: 100.0,
            background: Argb::WHITE,
            text: Argb::BLACK,
        }
    }

    #[test]
    fn rgb_hex_editor_keeps_alpha() {
        let color = RwSignal::new(Argb::new(0x80, 0x12, 0x34, 0x56));
        let binding = ColorBinding::new(color, RwSignal::new(false));
        let _view = hex_input(binding.hex(), look(), binding.hex_editor());
        assert_eq!(color.get_untracked(), Argb::new(0x80, 0x12, 0x34, 0x56));
        assert_eq!(binding.hex().get_untracked(), "123456");
    }

    #[test]
    fn alpha_survives_toggling_edit_alpha() {
        let color = RwSignal::new(Argb::new(0x80, 0x12, 0x34, 0x56));
        let edit_alpha = RwSignal::new(true);
        let binding = ColorBinding::new(color, edit_alpha);
        let _view = hex_input(binding.hex(), look(), binding.hex_editor());

        edit_alpha.set(false);
        assert_eq!(binding.hex().get_untracked(), "123456");
        edit_alpha.set(true);
        assert_eq!(binding.hex().get_untracked(), "80123456");
        assert_eq!(color.get_untracked(), Argb::new(0x80, 0x12, 0x34, 0x56));
    }

    #[test]
    fn external_color_is_not_echoed_back() {
        let color = RwSignal::new(Argb::BLACK);
        let edits = Rc::new(std::cell::Cell::new(0));
        let counter = edits.clone();
        let binding = ColorBinding::new(color, RwSignal::new(true));
        let _view = hex_input(binding.hex(), look(), move |_: &str| {
            counter.set(counter.get() + 1)
        });
        color.set(Argb::new(0x40, 1, 2, 3));
        assert_eq!(binding.hex().get_untracked(), "40010203");
        assert_eq!(edits.get(), 0);
    }
}
