// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Terminal colors used for operator-facing output.

use std::fmt::{Debug, Display};

use anstyle::{Color as AnsiColor, RgbColor, Style};

pub const GREY: Style = rgb(0xa0, 0xa0, 0xa0);
pub const LAVENDER: Style = rgb(0xbd, 0xb2, 0xff);
pub const MINT: Style = rgb(0x3e, 0xe6, 0xa3);
pub const RED: Style = rgb(0xff, 0x55, 0x55);
pub const YELLOW: Style = rgb(0xff, 0xd7, 0x5e);

const fn rgb(r: u8, g: u8, b: u8) -> Style {
    Style::new().fg_color(Some(AnsiColor::Rgb(RgbColor(r, g, b))))
}

fn paint(style: Style, text: impl Display) -> String {
    format!("{style}{text}{style:#}")
}

/// Colors anything that can be displayed.
pub trait Color {
    fn grey(&self) -> String;
    fn lavender(&self) -> String;
    fn mint(&self) -> String;
    fn red(&self) -> String;
    fn yellow(&self) -> String;
}

impl<T: Display + ?Sized> Color for T {
    fn grey(&self) -> String {
        paint(GREY, self)
    }

    fn lavender(&self) -> String {
        paint(LAVENDER, self)
    }

    fn mint(&self) -> String {
        paint(MINT, self)
    }

    fn red(&self) -> String {
        paint(RED, self)
    }

    fn yellow(&self) -> String {
        paint(YELLOW, self)
    }
}

/// Colors the [`Debug`] rendering of a value.
pub trait DebugColor {
    fn debug_lavender(&self) -> String;
    fn debug_red(&self) -> String;
}

impl<T: Debug + ?Sized> DebugColor for T {
    fn debug_lavender(&self) -> String {
        paint(LAVENDER, format!("{self:?}"))
    }

    fn debug_red(&self) -> String {
        paint(RED, format!("{self:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painted_text_is_reset() {
        let text = "sound".mint();
        assert!(text.contains("sound"));
        assert!(text.ends_with(&format!("{MINT:#}")));
    }
}
