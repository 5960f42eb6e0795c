//! Turns the catalogue data into styled terminal lines. The monochrome
//! mapping: bold for 700 weight, italic for quoted text, dim for any
//! reduced opacity, reversed for inverted buttons.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tablefor_common::style::{
    catalogue::{ButtonVariant, CardLine, CardText, Entry, Section},
    nav::{ExploreTab, TabLabel},
    tokens::{AVATAR_PROFILE, BorderStyle, FontStyle, FontWeight, Opacity},
};

const CARD_WIDTH: usize = 50;
const RULE_WIDTH: usize = 40;
const NAV_GAP: &str = "   ";

pub fn draw(frame: &mut Frame, sections: &[Section], tab: ExploreTab, scroll: u16) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "T A B L E   F O R",
            Style::new().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Design Guide - Menu Style", dim())),
        Line::raw("\u{2501}".repeat(RULE_WIDTH)),
    ]);
    frame.render_widget(header, header_area);

    let body = Paragraph::new(sheet_lines(sections, tab)).scroll((scroll, 0));
    frame.render_widget(body, body_area);

    let footer = Paragraph::new(Line::from(Span::styled(
        "q quit   up/down scroll   left/right toggle tabs",
        dim(),
    )));
    frame.render_widget(footer, footer_area);
}

/// The whole reference sheet as lines; pure so it can be tested without
/// a terminal.
#[must_use]
pub fn sheet_lines(sections: &[Section], tab: ExploreTab) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for section in sections {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            section.title.to_owned(),
            Style::new().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw("\u{2500}".repeat(RULE_WIDTH)));

        for entry in &section.entries {
            lines.extend(entry_lines(entry, tab));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("- END OF GUIDE -", dim())));
    lines
}

fn entry_lines(entry: &Entry, tab: ExploreTab) -> Vec<Line<'static>> {
    match entry {
        Entry::Swatch(color) => vec![Line::from(vec![
            Span::raw("\u{2588}\u{2588}  "),
            Span::styled(
                pad(color.name, 14),
                Style::new().add_modifier(Modifier::BOLD),
            ),
            Span::styled(pad(color.value, 18), dim()),
            Span::styled(color.usage.to_owned(), dim()),
        ])],
        Entry::Specimen { sample, size: _ } => {
            vec![Line::from(Span::styled(
                sample.text.to_owned(),
                text_style(sample),
            ))]
        }
        Entry::Rule { style, caption } => vec![
            Line::from(Span::styled((*caption).to_owned(), dim())),
            Line::raw(divider(*style).repeat(RULE_WIDTH)),
        ],
        Entry::Avatar {
            initial,
            size,
            caption,
        } => {
            let face = if *size >= AVATAR_PROFILE {
                format!("( {initial} )")
            } else {
                format!("({initial})")
            };
            vec![
                Line::from(Span::styled(face, Style::new().add_modifier(Modifier::BOLD))),
                Line::from(Span::styled((*caption).to_owned(), dim())),
            ]
        }
        Entry::NavRow(labels) => vec![nav_line(labels)],
        Entry::TabPreview => {
            let labels: Vec<TabLabel> = ExploreTab::ALL
                .into_iter()
                .map(|item| item.label(tab))
                .collect();
            vec![nav_line(&labels)]
        }
        Entry::Button {
            label,
            variant,
            caption,
        } => vec![
            Line::from(Span::styled((*caption).to_owned(), dim())),
            Line::from(button_span(label, *variant)),
        ],
        Entry::Card(card) => card_lines(card),
        Entry::ListRow {
            name,
            detail,
            divider: has_divider,
        } => {
            let mut lines = vec![
                Line::from(Span::styled(
                    (*name).to_owned(),
                    Style::new().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled((*detail).to_owned(), dim())),
            ];
            if *has_divider {
                lines.push(Line::raw(divider(BorderStyle::Dotted).repeat(RULE_WIDTH)));
            }
            lines
        }
        Entry::Metric { label, value } => vec![Line::from(vec![
            Span::styled(pad(label, 22), Style::new().add_modifier(Modifier::BOLD)),
            Span::raw((*value).to_owned()),
        ])],
        Entry::Note(note) => note
            .iter()
            .map(|line| Line::from(Span::styled((*line).to_owned(), dim())))
            .collect(),
    }
}

fn nav_line(labels: &[TabLabel]) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, label) in labels.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(NAV_GAP));
        }
        spans.push(Span::styled(
            label.text.clone(),
            weight_opacity_style(label.weight, label.opacity),
        ));
    }
    Line::from(spans)
}

fn button_span(label: &str, variant: ButtonVariant) -> Span<'static> {
    match variant {
        ButtonVariant::Default => Span::styled(
            format!("[ {label} ]"),
            Style::new().add_modifier(Modifier::BOLD),
        ),
        ButtonVariant::Inverted => Span::styled(
            format!("[ {label} ]"),
            Style::new().add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
        ButtonVariant::Link => Span::styled(
            label.to_owned(),
            Style::new().add_modifier(Modifier::UNDERLINED),
        ),
        ButtonVariant::Disabled => Span::styled(
            format!("[ {label} ]"),
            Style::new().add_modifier(Modifier::DIM),
        ),
    }
}

fn card_lines(card: &[CardLine]) -> Vec<Line<'static>> {
    let inner = CARD_WIDTH - 4;
    let mut lines = vec![Line::raw(format!(
        "\u{250c}{}\u{2510}",
        "\u{2500}".repeat(CARD_WIDTH - 2)
    ))];

    for line in card {
        lines.push(match line {
            CardLine::Blank => boxed(vec![Span::raw(" ".repeat(inner))]),
            CardLine::Divider(style) => Line::raw(format!(
                "\u{251c}{}\u{2524}",
                divider(*style).repeat(CARD_WIDTH - 2)
            )),
            CardLine::Text(text) => boxed(vec![Span::styled(
                pad(text.text, inner),
                text_style(text),
            )]),
            CardLine::Pair(left, right) => {
                let space = inner
                    .saturating_sub(char_count(left.text) + char_count(right.text))
                    .max(1);
                boxed(vec![
                    Span::styled(left.text.to_owned(), text_style(left)),
                    Span::raw(" ".repeat(space)),
                    Span::styled(right.text.to_owned(), text_style(right)),
                ])
            }
        });
    }

    lines.push(Line::raw(format!(
        "\u{2514}{}\u{2518}",
        "\u{2500}".repeat(CARD_WIDTH - 2)
    )));
    lines
}

fn boxed(spans: Vec<Span<'static>>) -> Line<'static> {
    let mut line = vec![Span::raw("\u{2502} ")];
    line.extend(spans);
    line.push(Span::raw(" \u{2502}"));
    Line::from(line)
}

fn text_style(text: &CardText) -> Style {
    let mut style = weight_opacity_style(text.weight, text.opacity);
    if text.style == FontStyle::Italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}

fn weight_opacity_style(weight: FontWeight, opacity: Opacity) -> Style {
    let mut style = Style::new();
    if weight == FontWeight::Bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if opacity != Opacity::Full {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}

fn divider(style: BorderStyle) -> &'static str {
    match style {
        BorderStyle::Solid1 => "\u{2500}",
        BorderStyle::Solid2 => "\u{2501}",
        BorderStyle::Dotted => "\u{2504}",
    }
}

fn dim() -> Style {
    Style::new().add_modifier(Modifier::DIM)
}

fn char_count(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    for _ in char_count(&out)..width {
        out.push(' ');
    }
    out
}
