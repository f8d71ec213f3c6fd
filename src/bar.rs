//! Status bar assembly.
//!
//! Bars are built from coloured segments in "powerline" style: each segment
//! sits on its own background colour and is closed by a full-block glyph
//! whose foreground is the segment colour and background the next one, so
//! adjacent segments appear to merge with a hard edge.
//!
//! Both screens share everything up to the clock.  The primary screen adds
//! the battery and system-tray segments; the secondary screen ends after the
//! clock.

use crate::color::{Color, ColorError, ColorPair, Palette, Role};
use crate::widget::{BatteryWidget, HighlightMethod, TextStyle, Widget};
use serde::{Deserialize, Serialize};

/// Full block used to draw segment transitions.
pub const SEPARATOR_GLYPH: &str = "█";

/// Height of every bar, in pixels.
pub const BAR_HEIGHT: u32 = 24;

/// A bar: widgets laid out left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    pub size: u32,
}

/// One physical screen and the bar along its top edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub top: Bar,
}

/// Transition glyph from segment colour `from` to segment colour `to`.
pub fn separator(from: &ColorPair, to: &ColorPair) -> Widget {
    Widget::TextBox {
        text: SEPARATOR_GLYPH.into(),
        style: TextStyle {
            font: Some("Ubuntu Bold".into()),
            foreground: Some(from.clone()),
            background: Some(to.clone()),
            padding: Some(0),
            font_shadow: None,
        },
    }
}

/// Builds bar widget sequences from a palette.
pub struct BarBuilder<'a> {
    palette: &'a Palette,
}

impl<'a> BarBuilder<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    fn c(&self, role: Role) -> &'a ColorPair {
        self.palette.get(role)
    }

    fn workspaces(&self) -> Result<Vec<Widget>, ColorError> {
        let wine = self.c(Role::Wine);
        Ok(vec![
            Widget::spacer(5, wine),
            Widget::GroupBox {
                highlight_method: HighlightMethod::Line,
                highlight_color: self.c(Role::Highlight).clone(),
                this_current_screen_border: Color::parse("fc7703")?,
                inactive: Color::parse("5e5d5a")?,
                background: wine.clone(),
            },
            Widget::spacer(3, wine),
            separator(wine, self.c(Role::Background)),
        ])
    }

    fn prompt_and_window_name(&self) -> Vec<Widget> {
        let bg = self.c(Role::Background);
        vec![
            // Quick spawn
            Widget::spacer(3, bg),
            Widget::Prompt,
            Widget::spacer(3, bg),
            Widget::WindowName { max_chars: 70 },
            separator(bg, self.c(Role::Purple)),
        ]
    }

    fn network(&self) -> Vec<Widget> {
        let purple = self.c(Role::Purple);
        vec![
            Widget::spacer(3, purple),
            Widget::label("🌎", purple),
            Widget::Net {
                format: "↓{down} ↑{up}".into(),
                background: purple.clone(),
            },
            Widget::spacer(3, purple),
            separator(purple, self.c(Role::Red)),
        ]
    }

    fn layout(&self) -> Vec<Widget> {
        let red = self.c(Role::Red);
        vec![
            Widget::spacer(3, red),
            Widget::label("᎒᎒᎒", red),
            Widget::CurrentLayout {
                background: red.clone(),
            },
            Widget::spacer(3, red),
            separator(red, self.c(Role::Orange)),
        ]
    }

    fn calendar(&self) -> Vec<Widget> {
        let orange = self.c(Role::Orange);
        vec![
            Widget::spacer(3, orange),
            Widget::label("📅", orange),
            Widget::Clock {
                format: "%d/%m/%Y".into(),
                style: TextStyle::on(orange),
            },
            Widget::spacer(3, orange),
            separator(orange, self.c(Role::Yellow)),
        ]
    }

    /// The clock segment without its closing widgets.
    fn clock(&self) -> Vec<Widget> {
        let yellow = self.c(Role::Yellow);
        let shadowed = TextStyle {
            font_shadow: Some(self.c(Role::Background).clone()),
            ..TextStyle::on(yellow)
        };
        vec![
            Widget::spacer(3, yellow),
            Widget::TextBox {
                text: "🕒".into(),
                style: shadowed.clone(),
            },
            Widget::Clock {
                format: "%H:%M".into(),
                style: shadowed,
            },
        ]
    }

    fn battery(&self) -> Vec<Widget> {
        let yellow = self.c(Role::Yellow);
        let blue = self.c(Role::Blue);
        vec![
            Widget::spacer(3, yellow),
            separator(yellow, blue),
            Widget::spacer(3, blue),
            Widget::Battery(BatteryWidget {
                format: "{char} {percent:2.0%} {hour:d}:{min:02d}".into(),
                charge_char: "⚡".into(),
                discharge_char: "↯".into(),
                background: blue.clone(),
                low_foreground: self.c(Role::Red).clone(),
                low_percentage: 0.2,
                notify_below: 10,
            }),
            Widget::spacer(3, blue),
            separator(blue, self.c(Role::White)),
        ]
    }

    fn utilities(&self) -> Vec<Widget> {
        let white = self.c(Role::White);
        vec![
            Widget::spacer(3, white),
            Widget::Systray {
                background: white.clone(),
            },
            Widget::spacer(5, white),
        ]
    }

    /// Segments common to both screens, up to and including the clock.
    fn shared(&self) -> Result<Vec<Widget>, ColorError> {
        let mut w = self.workspaces()?;
        w.extend(self.prompt_and_window_name());
        w.extend(self.network());
        w.extend(self.layout());
        w.extend(self.calendar());
        w.extend(self.clock());
        Ok(w)
    }

    /// Widgets of the primary screen's bar.
    pub fn primary(&self) -> Result<Vec<Widget>, ColorError> {
        let mut w = self.shared()?;
        w.extend(self.battery());
        w.extend(self.utilities());
        Ok(w)
    }

    /// Widgets of the secondary screen's bar: no battery, no tray.
    pub fn secondary(&self) -> Result<Vec<Widget>, ColorError> {
        let mut w = self.shared()?;
        w.push(Widget::spacer(5, self.c(Role::Yellow)));
        Ok(w)
    }
}

/// The two configured screens, primary first.
pub fn screens(palette: &Palette) -> Result<Vec<Screen>, ColorError> {
    let builder = BarBuilder::new(palette);
    Ok(vec![
        Screen {
            top: Bar {
                widgets: builder.primary()?,
                size: BAR_HEIGHT,
            },
        },
        Screen {
            top: Bar {
                widgets: builder.secondary()?,
                size: BAR_HEIGHT,
            },
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars() -> (Vec<Widget>, Vec<Widget>) {
        let p = Palette::new().unwrap();
        let s = screens(&p).unwrap();
        (s[0].top.widgets.clone(), s[1].top.widgets.clone())
    }

    fn kinds(w: &[Widget]) -> Vec<&'static str> {
        w.iter().map(Widget::kind).collect()
    }

    #[test]
    fn two_screens_with_top_bars_of_fixed_height() {
        let p = Palette::new().unwrap();
        let s = screens(&p).unwrap();
        assert_eq!(s.len(), 2);
        assert!(s.iter().all(|s| s.top.size == 24));
    }

    #[test]
    fn secondary_is_primary_without_battery_and_tray() {
        let (primary, secondary) = bars();
        // Everything except the closing spacer is shared verbatim.
        let shared = secondary.len() - 1;
        assert_eq!(&primary[..shared], &secondary[..shared]);

        let extra = &primary[shared..];
        let informational: Vec<&str> = extra
            .iter()
            .filter(|w| !w.is_decoration())
            .map(Widget::kind)
            .collect();
        assert_eq!(informational, vec!["Battery", "Systray"]);

        assert!(!kinds(&secondary).contains(&"Battery"));
        assert!(!kinds(&secondary).contains(&"Systray"));
        assert!(matches!(
            secondary.last(),
            Some(Widget::Spacer { length: 5, .. })
        ));
    }

    #[test]
    fn informational_widgets_in_order() {
        let (primary, _) = bars();
        let info: Vec<&str> = primary
            .iter()
            .filter(|w| !w.is_decoration() && w.kind() != "TextBox")
            .map(Widget::kind)
            .collect();
        assert_eq!(
            info,
            vec![
                "GroupBox",
                "Prompt",
                "WindowName",
                "Net",
                "CurrentLayout",
                "Clock",
                "Clock",
                "Battery",
                "Systray"
            ]
        );
    }

    #[test]
    fn separators_chain_segment_colours() {
        let p = Palette::new().unwrap();
        let (primary, _) = bars();
        let chain: Vec<(Color, Color)> = primary
            .iter()
            .filter_map(|w| match w {
                Widget::TextBox { text, style } if text == SEPARATOR_GLYPH => Some((
                    style.foreground.clone()?.normal,
                    style.background.clone()?.normal,
                )),
                _ => None,
            })
            .collect();
        let roles = [
            Role::Wine,
            Role::Background,
            Role::Purple,
            Role::Red,
            Role::Orange,
            Role::Yellow,
            Role::Blue,
            Role::White,
        ];
        let expected: Vec<(Color, Color)> = roles
            .windows(2)
            .map(|w| (p.get(w[0]).normal.clone(), p.get(w[1]).normal.clone()))
            .collect();
        assert_eq!(chain, expected);
    }

    #[test]
    fn battery_widget_thresholds() {
        let (primary, _) = bars();
        let b = primary
            .iter()
            .find_map(|w| match w {
                Widget::Battery(b) => Some(b),
                _ => None,
            })
            .expect("primary bar has a battery widget");
        assert_eq!(b.low_percentage, 0.2);
        assert_eq!(b.notify_below, 10);
        assert_eq!(b.low_foreground.normal.hex(), "#e00702");
    }

    #[test]
    fn separators_use_bold_font_without_padding() {
        let p = Palette::new().unwrap();
        match separator(p.get(Role::Red), p.get(Role::Orange)) {
            Widget::TextBox { style, .. } => {
                assert_eq!(style.font.as_deref(), Some("Ubuntu Bold"));
                assert_eq!(style.padding, Some(0));
            }
            other => panic!("expected text box, got {:?}", other),
        }
    }
}
