use std::io::IsTerminal;

use clap::{ValueEnum, builder::styling};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
  /// Color when stdout is a terminal and NO_COLOR is unset
  #[default]
  Auto,
  /// Always emit color
  Always,
  /// Never emit color
  Never,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
  /// Probe the terminal background
  #[default]
  Auto,
  /// Palette for dark backgrounds
  Dark,
  /// Palette for light backgrounds
  Light,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// Role-based palette for command output. Every accessor collapses to
/// `Color::Reset` when colors are disabled, so call sites never branch.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  #[must_use]
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  #[must_use]
  pub const fn timestamp(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 110, g: 132, b: 163 },
      Theme::Light => Color::Rgb { r: 90, g: 98, b: 112 },
    }
  }

  #[must_use]
  pub const fn primary(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 134, g: 180, b: 212 },
      Theme::Light => Color::Rgb { r: 52, g: 86, b: 120 },
    }
  }

  #[must_use]
  pub const fn accent(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 212, g: 130, b: 100 },
      Theme::Light => Color::Rgb { r: 190, g: 84, b: 52 },
    }
  }

  #[must_use]
  pub const fn info(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 150, g: 160, b: 180 },
      Theme::Light => Color::Rgb { r: 70, g: 110, b: 160 },
    }
  }

  #[must_use]
  pub const fn success(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 140, g: 190, b: 128 },
      Theme::Light => Color::Rgb { r: 46, g: 130, b: 78 },
    }
  }

  #[must_use]
  pub const fn label(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 196, g: 172, b: 92 },
      Theme::Light => Color::Rgb { r: 150, g: 110, b: 48 },
    }
  }

  #[must_use]
  pub const fn value(&self) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => Color::Rgb { r: 228, g: 214, b: 130 },
      Theme::Light => Color::Rgb { r: 170, g: 134, b: 70 },
    }
  }

  /// Styles for clap's generated help, derived from the dark palette so help
  /// text matches command output.
  #[must_use]
  pub fn clap_styles() -> clap::builder::Styles {
    let colors = Self::new(true, Theme::Dark);
    clap::builder::Styles::styled()
      .header(to_clap(colors.label()).bold())
      .usage(to_clap(colors.label()).bold())
      .literal(to_clap(colors.primary()))
      .placeholder(to_clap(colors.value()))
  }
}

fn to_clap(color: Color) -> styling::Style {
  match color {
    Color::Rgb { r, g, b } => styling::Style::new()
      .fg_color(Some(styling::Color::Rgb(styling::RgbColor(r, g, b)))),
    _ => styling::Style::new(),
  }
}

/// comfy-table carries its own color enum; only the variants the palette
/// produces need mapping.
pub(crate) fn to_comfy_color(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    _ => ComfyColor::Reset,
  }
}

#[must_use]
pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => {
      std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
    }
  }
}

#[must_use]
pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

fn detect_terminal_theme() -> Theme {
  // COLORFGBG looks like "15;0"; the last field is the background color.
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(background) = colorfgbg.split(';').next_back()
    && let Ok(code) = background.parse::<u8>()
  {
    return if code < 8 { Theme::Dark } else { Theme::Light };
  }
  Theme::Dark
}
