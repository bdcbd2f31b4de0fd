//! Colors, styles and the per-part style set of a dropdown.
//!
//! Styles are plain values. Each dropdown starts from [`DropdownStyles::default`]
//! and merges caller overrides on top with [`Style::merge`]; nothing here is
//! shared between instances.

use std::str::FromStr;

use crate::error::DropdownError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    /// Parse `#RRGGBB`, `RRGGBB` or the three-digit short form.
    pub fn hex(s: &str) -> Result<Self, DropdownError> {
        let srgb = palette::Srgb::<u8>::from_str(s.trim())
            .map_err(|_| DropdownError::InvalidColor(s.to_string()))?;
        let (r, g, b) = srgb.into_components();
        Ok(Self::rgb(r, g, b))
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
            Self::Oklch { l, c, h } => oklch_to_rgb(l, c, h),
        }
    }
}

impl FromStr for Color {
    type Err = DropdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s)
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let srgb: Srgb = Oklch::new(l, c, h).into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Double,
    Rounded,
}

impl Border {
    /// Corner and edge glyphs: top-left, top-right, bottom-left,
    /// bottom-right, horizontal, vertical.
    pub fn glyphs(&self) -> Option<[char; 6]> {
        match self {
            Border::None => None,
            Border::Single => Some(['┌', '┐', '└', '┘', '─', '│']),
            Border::Double => Some(['╔', '╗', '╚', '╝', '═', '║']),
            Border::Rounded => Some(['╭', '╮', '╰', '╯', '─', '│']),
        }
    }

    pub fn size(&self) -> u16 {
        if *self == Border::None { 0 } else { 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    /// Attributes set on either side stay set.
    pub const fn union(self, other: TextStyle) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            dim: self.dim || other.dim,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Option<Border>,
    pub border_color: Option<Color>,
    /// Horizontal padding in cells.
    pub padding: Option<u16>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Layer `overrides` on top of `self`. Fields the override sets win;
    /// text attributes accumulate.
    pub fn merge(&self, overrides: &Style) -> Style {
        Style {
            background: overrides.background.or(self.background),
            foreground: overrides.foreground.or(self.foreground),
            border: overrides.border.or(self.border),
            border_color: overrides.border_color.or(self.border_color),
            padding: overrides.padding.or(self.padding),
            text_style: self.text_style.union(overrides.text_style),
        }
    }
}

/// One style per visual part of the dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownStyles {
    pub trigger: Style,
    pub selected_text: Style,
    pub overlay: Style,
    pub item: Style,
    pub item_text: Style,
    pub section_header: Style,
    pub section_header_text: Style,
}

const OUTLINE: Color = Color::rgb(0xCC, 0xCC, 0xCC);

impl Default for DropdownStyles {
    fn default() -> Self {
        Self {
            trigger: Style::new()
                .border(Border::Rounded)
                .border_color(OUTLINE)
                .padding(1),
            selected_text: Style::new(),
            overlay: Style::new()
                .background(Color::WHITE)
                .foreground(Color::BLACK),
            item: Style::new().padding(1),
            item_text: Style::new(),
            section_header: Style::new().background(Color::WHITE).padding(1),
            section_header_text: Style::new().underline(),
        }
    }
}

/// Caller overrides, one optional style per part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    pub trigger: Option<Style>,
    pub selected_text: Option<Style>,
    pub item: Option<Style>,
    pub item_text: Option<Style>,
    pub section_header: Option<Style>,
    pub section_header_text: Option<Style>,
}

impl DropdownStyles {
    /// Merge each override onto the matching base style.
    pub fn merged(&self, overrides: &StyleOverrides) -> DropdownStyles {
        fn layer(base: &Style, over: &Option<Style>) -> Style {
            over.as_ref().map_or(*base, |o| base.merge(o))
        }

        DropdownStyles {
            trigger: layer(&self.trigger, &overrides.trigger),
            selected_text: layer(&self.selected_text, &overrides.selected_text),
            overlay: self.overlay,
            item: layer(&self.item, &overrides.item),
            item_text: layer(&self.item_text, &overrides.item_text),
            section_header: layer(&self.section_header, &overrides.section_header),
            section_header_text: layer(&self.section_header_text, &overrides.section_header_text),
        }
    }
}
