use std::{collections::HashMap, ops::Range};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles (`title`, `label`, `focused`, `error`, `hint`, `card`, `status`)
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, style)| (name, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Style registered under `name`, or the terminal default
    pub fn get_or_default(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

/// Parses strings like `"bold yellow on black"` or `"italic #ff8800"`.
/// Words before `on` set the foreground, words after it the background.
/// Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let mut style = Style::default();
    let mut background = false;

    for word in line.split_whitespace() {
        let word = word.to_ascii_lowercase();
        if word == "on" {
            background = true;
            continue;
        }
        if let Some(modifier) = parse_modifier(&word) {
            style = style.add_modifier(modifier);
        } else if let Some(color) = parse_color(&word) {
            style = if background {
                style.bg(color)
            } else {
                style.fg(color)
            };
        }
    }

    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "inverse" | "reversed" => Some(Modifier::REVERSED),
        _ => None,
    }
}

fn parse_color(word: &str) -> Option<Color> {
    if let Some(hex) = word.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        return Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
    }
    if let Some(index) = word.strip_prefix("color") {
        return index.parse::<u8>().ok().map(Color::Indexed);
    }

    let color = match word.replace("grey", "gray").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}
