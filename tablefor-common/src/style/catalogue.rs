//! The style guide's content as data: every section of the reference
//! sheet, with sample copy matching the app's demo content. Rendering
//! lives in the styleguide binary.

use crate::style::nav::{NavItem, TabLabel};
use crate::style::tokens::{
    self, AVATAR_POST_HEADER, AVATAR_PROFILE, BorderStyle, FONT_BODY, FONT_MUTED,
    FONT_PLACE_NAME, FONT_SECONDARY, FONT_SMALL_LABEL, FONT_USERNAME, FontStyle, FontWeight,
    Opacity, PaletteColor,
};

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Section {
    pub title: &'static str,
    pub entries: Vec<Entry>,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Entry {
    Swatch(PaletteColor),
    Specimen { sample: CardText, size: u8 },
    Rule { style: BorderStyle, caption: &'static str },
    Avatar { initial: char, size: u8, caption: &'static str },
    NavRow(Vec<TabLabel>),
    /// Placeholder for the live two-tab toggle; rendered from UI state.
    TabPreview,
    Button { label: &'static str, variant: ButtonVariant, caption: &'static str },
    Card(Vec<CardLine>),
    ListRow { name: &'static str, detail: &'static str, divider: bool },
    Metric { label: &'static str, value: &'static str },
    Note(&'static [&'static str]),
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub enum ButtonVariant {
    #[default]
    Default,
    Inverted,
    Link,
    Disabled,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum CardLine {
    Text(CardText),
    Pair(CardText, CardText),
    Divider(BorderStyle),
    Blank,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct CardText {
    pub text: &'static str,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub opacity: Opacity,
}

impl CardText {
    #[must_use]
    pub const fn plain(text: &'static str) -> Self {
        Self {
            text,
            weight: FontWeight::Normal,
            style: FontStyle::Upright,
            opacity: Opacity::Full,
        }
    }

    #[must_use]
    pub const fn bold(text: &'static str) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::plain(text)
        }
    }

    #[must_use]
    pub const fn italic(text: &'static str) -> Self {
        Self {
            style: FontStyle::Italic,
            ..Self::plain(text)
        }
    }

    #[must_use]
    pub const fn muted(text: &'static str) -> Self {
        Self {
            opacity: Opacity::Muted,
            ..Self::plain(text)
        }
    }

    #[must_use]
    pub const fn soft(text: &'static str) -> Self {
        Self {
            opacity: Opacity::Soft,
            ..Self::plain(text)
        }
    }

    #[must_use]
    pub const fn dim(text: &'static str) -> Self {
        Self {
            opacity: Opacity::Dim,
            ..Self::plain(text)
        }
    }
}

/// The full reference sheet in display order.
#[must_use]
pub fn catalogue() -> Vec<Section> {
    vec![
        color_palette(),
        typography(),
        borders_and_lines(),
        avatar(),
        navigation(),
        post_card(),
        place_card(),
        user_profile(),
        kebab_menu(),
        tabs(),
        header(),
        bottom_nav(),
        buttons(),
        circular_button(),
        action_bar(),
        confirm_dialog(),
        forms(),
        search_results(),
        spacing(),
    ]
}

fn color_palette() -> Section {
    Section {
        title: "COLOR PALETTE",
        entries: tokens::PALETTE.into_iter().map(Entry::Swatch).collect(),
    }
}

fn typography() -> Section {
    Section {
        title: "TYPOGRAPHY",
        entries: vec![
            Entry::Note(&["FONT FAMILY: Courier, monospace", "Typewriter aesthetic, used for all text"]),
            Entry::Specimen {
                sample: CardText::bold("Restaurant Name (18px, bold)"),
                size: FONT_PLACE_NAME,
            },
            Entry::Specimen {
                sample: CardText::bold("Username (14px, bold)"),
                size: FONT_USERNAME,
            },
            Entry::Specimen {
                sample: CardText::plain("Body text / Caption (13px, normal)"),
                size: FONT_BODY,
            },
            Entry::Specimen {
                sample: CardText::italic("\"Quoted caption text\" (13px, italic)"),
                size: FONT_BODY,
            },
            Entry::Specimen {
                sample: CardText::plain("Secondary info (12px, normal)"),
                size: FONT_SECONDARY,
            },
            Entry::Specimen {
                sample: CardText::muted("Muted text (11px, 60% opacity)"),
                size: FONT_MUTED,
            },
            Entry::Specimen {
                sample: CardText::muted("Small labels (10px, 60% opacity)"),
                size: FONT_SMALL_LABEL,
            },
        ],
    }
}

fn borders_and_lines() -> Section {
    Section {
        title: "BORDERS & LINES",
        entries: vec![
            Entry::Rule {
                style: BorderStyle::Solid2,
                caption: "SOLID BORDER (2px): header, post separator",
            },
            Entry::Rule {
                style: BorderStyle::Solid1,
                caption: "SOLID BORDER (1px): post cards, image containers",
            },
            Entry::Rule {
                style: BorderStyle::Dotted,
                caption: "DOTTED BORDER (1px): menu-style dividers",
            },
        ],
    }
}

fn avatar() -> Section {
    Section {
        title: "AVATAR",
        entries: vec![
            Entry::Avatar {
                initial: 'B',
                size: AVATAR_POST_HEADER,
                caption: "32px - Post header",
            },
            Entry::Avatar {
                initial: 'B',
                size: AVATAR_PROFILE,
                caption: "56px - Profile",
            },
            Entry::Note(&[
                "Simple circle with 1px black border.",
                "Initial centered, Courier font, bold.",
            ]),
        ],
    }
}

fn navigation() -> Section {
    Section {
        title: "NAVIGATION",
        entries: vec![
            Entry::NavRow(bottom_nav_labels(NavItem::Feed)),
            Entry::Note(&[
                "Location: fixed bottom nav (app-style)",
                "Active: [BRACKETS] + bold, 100% opacity",
                "Inactive: no brackets, 50% opacity",
                "Gap: 48px, ALL CAPS, 12px",
            ]),
        ],
    }
}

fn post_card() -> Section {
    Section {
        title: "POST (PostCard)",
        entries: vec![
            Entry::Card(vec![
                CardLine::Pair(CardText::bold("(B) Blerp"), CardText::muted("2 hours ago")),
                CardLine::Text(CardText::italic("\"Date night spot. Get the tagliatelle.\"")),
                CardLine::Divider(BorderStyle::Solid1),
                CardLine::Text(CardText::dim("PlaceImage")),
                CardLine::Divider(BorderStyle::Solid1),
                CardLine::Text(CardText::bold("Canard")),
                CardLine::Text(CardText::soft("734 E Burnside St")),
                CardLine::Divider(BorderStyle::Dotted),
                CardLine::Pair(CardText::plain("$$$$"), CardText::plain("\u{2605} 4.6")),
            ]),
            Entry::Note(&[
                "PostHeader: Avatar (32px) + Username + PostTime",
                "PostTime: 11px, 60% opacity, right-aligned",
                "PostCaption: italic, quoted",
                "PlaceItem (nested): image + info in bordered card",
                "PlaceImage: 200px height, border-bottom",
                "PlaceName: 18px bold; PlaceAddress: 13px, 70% opacity",
                "Price/Rating: dotted border-top divider",
                "No border between posts (PlaceItem border separates)",
            ]),
        ],
    }
}

fn place_card() -> Section {
    Section {
        title: "PLACE CARD (PlaceItem in PlaceGrid)",
        entries: vec![
            Entry::Card(place_grid_item("Canard")),
            Entry::Card(place_grid_item("\u{bf}Por Qu\u{e9} No?")),
            Entry::Note(&[
                "PlaceGridStyles: 2-column grid, 12px gap",
                "PlaceItem: 1px border, no padding on container",
                "PlaceImage: 100px height, border-bottom",
                "PlaceInfoSection: 12px padding",
                "PlaceName: 14px bold; PlaceAddress: 12px, 70% opacity",
                "Price/Rating: dotted border-top divider",
            ]),
        ],
    }
}

fn place_grid_item(name: &'static str) -> Vec<CardLine> {
    vec![
        CardLine::Text(CardText::dim("PlaceImage")),
        CardLine::Divider(BorderStyle::Solid1),
        CardLine::Text(CardText::bold(name)),
        CardLine::Text(CardText::soft("Burnside")),
        CardLine::Divider(BorderStyle::Dotted),
        CardLine::Pair(CardText::plain("$$$$"), CardText::plain("\u{2605} 4.6")),
    ]
}

fn user_profile() -> Section {
    Section {
        title: "USER PROFILE (InfoSection)",
        entries: vec![
            Entry::Card(vec![
                CardLine::Pair(CardText::bold("( B )  Blerp"), CardText::plain("\u{22ee}")),
                CardLine::Blank,
                CardLine::Pair(CardText::muted("BEST MEAL"), CardText::plain("Tagliatelle")),
                CardLine::Divider(BorderStyle::Dotted),
                CardLine::Pair(CardText::muted("REPEAT SPOTS"), CardText::plain("12")),
                CardLine::Divider(BorderStyle::Dotted),
                CardLine::Pair(
                    CardText::muted("ABOUT"),
                    CardText::plain("Always looking for the next great meal."),
                ),
            ]),
            Entry::Note(&[
                "InfoSection: border-bottom 1px solid, padding-bottom 20px",
                "ProfileUsername: 20px bold",
                "KebabMenu: \u{22ee} icon, right-aligned",
                "BioSection: menu-style with dotted dividers",
                "ProfileBioLabel: ALL CAPS, 60% opacity",
            ]),
        ],
    }
}

fn kebab_menu() -> Section {
    Section {
        title: "KEBAB MENU (KebabMenu)",
        entries: vec![
            Entry::Button {
                label: "\u{22ee}",
                variant: ButtonVariant::Default,
                caption: "TRIGGER",
            },
            Entry::Card(vec![
                CardLine::Text(CardText::plain("EDIT PROFILE")),
                CardLine::Divider(BorderStyle::Dotted),
                CardLine::Text(CardText::plain("SIGN OUT")),
            ]),
            Entry::Note(&[
                "KebabMenuButton: \u{22ee} character, 18px",
                "KebabMenuDropdown: 1px border, positioned absolute",
                "KebabMenuItem: 12px, ALL CAPS, 10px 14px padding",
                "Divider: 1px dotted between items",
            ]),
        ],
    }
}

fn tabs() -> Section {
    Section {
        title: "TABS (TabContainer)",
        entries: vec![
            Entry::TabPreview,
            Entry::Note(&[
                "TabButton active: [BRACKETS], bold, 100% opacity",
                "TabButton inactive: no brackets, normal weight, 50% opacity",
                "Gap: 32px, centered",
                "Press left/right to preview the other tab",
            ]),
        ],
    }
}

fn header() -> Section {
    Section {
        title: "HEADER (HeaderContainer)",
        entries: vec![
            Entry::Card(vec![CardLine::Text(CardText::bold("T A B L E   F O R"))]),
            Entry::Note(&[
                "HeaderLogo: 18px, bold, 0.1em letter-spacing, ALL CAPS",
                "Border: 2px solid bottom",
                "Header is branding only; navigation lives in BottomNav",
            ]),
        ],
    }
}

fn bottom_nav() -> Section {
    Section {
        title: "BOTTOM NAV",
        entries: vec![
            Entry::NavRow(bottom_nav_labels(NavItem::Feed)),
            Entry::Note(&[
                "Position: fixed bottom, full width",
                "Border: 2px solid top; padding 16px 20px",
                "Gap: 48px between items",
                "Active: [BRACKETS], bold, 100% opacity",
                "Inactive: no brackets, 50% opacity",
            ]),
        ],
    }
}

fn buttons() -> Section {
    Section {
        title: "BUTTONS",
        entries: vec![
            Entry::Button {
                label: "SAVE",
                variant: ButtonVariant::Default,
                caption: "DEFAULT",
            },
            Entry::Button {
                label: "SAVE",
                variant: ButtonVariant::Inverted,
                caption: "HOVER STATE",
            },
            Entry::Button {
                label: "edit profile",
                variant: ButtonVariant::Link,
                caption: "LINK STYLE",
            },
            Entry::Note(&[
                "Button: 1px border, 12px bold, 8px 16px padding",
                "Hover: inverts to black bg, white text",
                "LinkStyle: no border/bg, 12px, underline, hover 60% opacity",
            ]),
        ],
    }
}

fn circular_button() -> Section {
    Section {
        title: "CIRCULAR BUTTON",
        entries: vec![
            Entry::Button {
                label: "(\u{2190})",
                variant: ButtonVariant::Default,
                caption: "DEFAULT",
            },
            Entry::Button {
                label: "(\u{2190})",
                variant: ButtonVariant::Inverted,
                caption: "HOVER",
            },
            Entry::Button {
                label: "(+)",
                variant: ButtonVariant::Disabled,
                caption: "DISABLED",
            },
            Entry::Note(&[
                "Size: 32px circle, 1px border; font 14px Courier",
                "Hover: inverts to black bg, white text",
                "Disabled: 50% opacity, no pointer events",
            ]),
        ],
    }
}

fn action_bar() -> Section {
    Section {
        title: "ACTION BAR",
        entries: vec![
            Entry::Button {
                label: "(\u{2190})",
                variant: ButtonVariant::Default,
                caption: "BACK",
            },
            Entry::Button {
                label: "(+)",
                variant: ButtonVariant::Default,
                caption: "ADD",
            },
            Entry::Note(&[
                "Position: fixed, bottom 70px, left 20px",
                "Layout: flex row, 10px gap",
                "Children: CircularButtons (Back, Add)",
                "Z-index: 100 (above content, below footer)",
            ]),
        ],
    }
}

fn confirm_dialog() -> Section {
    Section {
        title: "CONFIRM DIALOG",
        entries: vec![
            Entry::Card(vec![
                CardLine::Text(CardText::plain("Remove this place from your saved list?")),
                CardLine::Blank,
                CardLine::Pair(CardText::bold("CANCEL"), CardText::bold("REMOVE")),
            ]),
            Entry::Note(&[
                "Overlay: fixed, rgba(0,0,0,0.5), z-index 1000",
                "Container: white, 1px border, 24px padding, 300px max",
                "Message: 13px, 1.6 line-height",
                "Cancel: default button style (white bg)",
                "Danger: inverted (black bg, white text), hover reverses",
            ]),
        ],
    }
}

fn forms() -> Section {
    Section {
        title: "FORMS",
        entries: vec![
            Entry::Card(vec![
                CardLine::Text(CardText::bold("EDIT PROFILE")),
                CardLine::Blank,
                CardLine::Text(CardText::muted("BEST MEAL")),
                CardLine::Text(CardText::plain("[ Tagliatelle                    ]")),
                CardLine::Pair(CardText::plain(""), CardText::muted("11/75")),
                CardLine::Text(CardText::muted("ABOUT")),
                CardLine::Text(CardText::plain("[ Always looking for the next    ]")),
                CardLine::Text(CardText::plain("[ great meal.                    ]")),
                CardLine::Blank,
                CardLine::Pair(CardText::bold("CANCEL"), CardText::bold("SAVE")),
            ]),
            Entry::Note(&[
                "FormContainer: 320px max, 1px border, 24px padding, centered",
                "Input: 1px border, #fafafa bg, 13px, 10px padding",
                "TextArea: same as Input, resize vertical",
                "FormLabel: 11px, uppercase, 60% opacity, left-aligned",
                "CharacterCounter: 11px, 60% opacity, right-aligned",
                "FormButtons: flex, 10px gap, centered, margin-top 16px",
            ]),
        ],
    }
}

fn search_results() -> Section {
    Section {
        title: "SEARCH RESULTS",
        entries: vec![
            Entry::ListRow {
                name: "Canard",
                detail: "734 E Burnside St, Portland, OR",
                divider: true,
            },
            Entry::ListRow {
                name: "\u{bf}Por Qu\u{e9} No?",
                detail: "3524 N Mississippi Ave, Portland, OR",
                divider: true,
            },
            Entry::ListRow {
                name: "Pok Pok",
                detail: "3226 SE Division St, Portland, OR",
                divider: false,
            },
            Entry::Note(&[
                "SearchResult: 10px vertical padding",
                "Divider: 1px dotted border-bottom (none on last item)",
                "Hover: 70% opacity",
                "Name: 13px bold; Address: 12px, 60% opacity",
            ]),
        ],
    }
}

fn spacing() -> Section {
    Section {
        title: "SPACING",
        entries: vec![
            Entry::Metric { label: "Page padding", value: "16px" },
            Entry::Metric { label: "Max-width", value: "480px (mobile-first)" },
            Entry::Metric { label: "Post margin-bottom", value: "20px" },
            Entry::Metric { label: "Section gaps", value: "14px (between elements)" },
            Entry::Metric { label: "Grid gap", value: "12px" },
            Entry::Metric { label: "Nav gap", value: "48px" },
            Entry::Metric { label: "Avatar gap", value: "10px (from username)" },
        ],
    }
}

fn bottom_nav_labels(active: NavItem) -> Vec<TabLabel> {
    NavItem::ALL.into_iter().map(|item| item.label(active)).collect()
}
