//! Compile-time design tokens for the "menu style" look: black and white,
//! typewriter font, minimal borders. Consumed by the style guide only.

pub const FONT_FAMILY: &str = "Courier, monospace";

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct PaletteColor {
    pub name: &'static str,
    pub value: &'static str,
    pub usage: &'static str,
}

pub const BACKGROUND: PaletteColor = PaletteColor {
    name: "Background",
    value: "#FFFFFF",
    usage: "Page background",
};
pub const TEXT: PaletteColor = PaletteColor {
    name: "Text",
    value: "#000000",
    usage: "Primary text",
};
pub const MUTED: PaletteColor = PaletteColor {
    name: "Muted",
    value: "rgba(0,0,0,0.6)",
    usage: "Secondary text",
};
pub const BORDER: PaletteColor = PaletteColor {
    name: "Border",
    value: "#000000",
    usage: "Solid borders",
};
pub const BORDER_LIGHT: PaletteColor = PaletteColor {
    name: "Border Light",
    value: "#fafafa",
    usage: "Image placeholder",
};

pub const PALETTE: [PaletteColor; 5] = [BACKGROUND, TEXT, MUTED, BORDER, BORDER_LIGHT];

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub enum FontStyle {
    #[default]
    Upright,
    Italic,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub enum Opacity {
    #[default]
    Full,
    Soft,
    Muted,
    Dim,
}

impl Opacity {
    #[must_use]
    pub fn percent(self) -> u8 {
        match self {
            Opacity::Full => 100,
            Opacity::Soft => 70,
            Opacity::Muted => 60,
            Opacity::Dim => 50,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub enum BorderStyle {
    #[default]
    Solid1,
    Solid2,
    Dotted,
}

// Type scale (px).
pub const FONT_SMALL_LABEL: u8 = 10;
pub const FONT_MUTED: u8 = 11;
pub const FONT_SECONDARY: u8 = 12;
pub const FONT_BODY: u8 = 13;
pub const FONT_USERNAME: u8 = 14;
pub const FONT_PLACE_NAME: u8 = 18;
pub const FONT_PROFILE_NAME: u8 = 20;
pub const FONT_LOGO: u8 = 24;

// Spacing scale (px).
pub const PAGE_PADDING: u8 = 16;
pub const MAX_CONTENT_WIDTH: u16 = 480;
pub const POST_GAP: u8 = 20;
pub const ELEMENT_GAP: u8 = 14;
pub const GRID_GAP: u8 = 12;
pub const NAV_GAP: u8 = 48;
pub const AVATAR_GAP: u8 = 10;

// Avatar diameters (px).
pub const AVATAR_POST_HEADER: u8 = 32;
pub const AVATAR_PROFILE: u8 = 56;
