//! Text rendering of the tip screen.

use std::fmt;

use tip_core::TipPercent;

use crate::state::TipView;

pub const TITLE: &str = "Calculate Tip";
pub const BILL_AMOUNT_LABEL: &str = "Bill Amount";
pub const ROUND_UP_LABEL: &str = "Round up tip?";
pub const CALCULATE_LABEL: &str = "Calculate";

/// Colour role of the calculate button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonColor {
    Primary,
    Secondary,
}

/// Target appearance of the calculate button.
///
/// Renderers animate towards these values; the interpolation itself is
/// theirs to choose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub scale: f32,
    pub color: ButtonColor,
}

impl ButtonStyle {
    pub fn for_pressed(pressed: bool) -> Self {
        if pressed {
            Self {
                scale: 0.95,
                color: ButtonColor::Secondary,
            }
        } else {
            Self {
                scale: 1.0,
                color: ButtonColor::Primary,
            }
        }
    }
}

/// Label shown above the slider.
pub fn tip_percentage_label(percent: TipPercent) -> String {
    format!("Tip Percentage: {}%", percent.whole_percent())
}

/// Label showing the computed tip.
pub fn tip_amount_label(tip: &str) -> String {
    format!("Tip Amount: {tip}")
}

fn slider_track(percent: TipPercent) -> String {
    let thumb = percent.stop_index();
    (0..TipPercent::STOPS)
        .map(|stop| if stop == thumb { "o" } else { "-" })
        .collect::<Vec<_>>()
        .join("--")
}

/// Renders a [`TipView`] as a block of text.
pub struct Screen<'a>(pub &'a TipView);

impl fmt::Display for Screen<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{BILL_AMOUNT_LABEL}: [{}]", view.bill_input)?;
        writeln!(f, "{}", tip_percentage_label(view.tip_percent))?;
        writeln!(f, "0% {} 30%", slider_track(view.tip_percent))?;
        writeln!(
            f,
            "{ROUND_UP_LABEL} [{}]",
            if view.round_up { "x" } else { " " }
        )?;
        let button = match ButtonStyle::for_pressed(view.pressed).color {
            ButtonColor::Primary => format!("[ {CALCULATE_LABEL} ]"),
            ButtonColor::Secondary => format!("[*{CALCULATE_LABEL}*]"),
        };
        writeln!(f, "{button}")?;
        writeln!(f, "{}", tip_amount_label(&view.tip))
    }
}

/// Convenience wrapper around [`Screen`].
pub fn render_screen(view: &TipView) -> String {
    Screen(view).to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn view() -> TipView {
        TipView {
            bill_input: "50.00".to_string(),
            tip_percent: TipPercent::new(dec!(15)),
            round_up: true,
            pressed: false,
            tip: "$8.00".to_string(),
        }
    }

    #[test]
    fn button_style_targets() {
        assert_eq!(
            ButtonStyle::for_pressed(true),
            ButtonStyle {
                scale: 0.95,
                color: ButtonColor::Secondary
            }
        );
        assert_eq!(
            ButtonStyle::for_pressed(false),
            ButtonStyle {
                scale: 1.0,
                color: ButtonColor::Primary
            }
        );
    }

    #[test]
    fn percentage_label_truncates() {
        assert_eq!(tip_percentage_label(TipPercent::new(dec!(17.8))), "Tip Percentage: 17%");
    }

    #[test]
    fn renders_full_screen() {
        let expected = "\
Calculate Tip
Bill Amount: [50.00]
Tip Percentage: 15%
0% ---------o--------- 30%
Round up tip? [x]
[ Calculate ]
Tip Amount: $8.00
";

        assert_eq!(render_screen(&view()), expected);
    }

    #[test]
    fn pressed_button_is_highlighted() {
        let mut view = view();
        view.pressed = true;

        assert!(render_screen(&view).contains("[*Calculate*]"));
    }
}
