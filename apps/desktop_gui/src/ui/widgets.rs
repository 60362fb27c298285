//! Small reusable widgets for the catalog forms and cards.

use eframe::egui;

use catalog::parse_price;

use crate::ui::theme;

/// Labeled single-line input with the field's validation message underneath.
pub fn form_text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    value: &mut String,
    error: &str,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .desired_width(f32::INFINITY);
    let response = ui.add_sized([ui.available_width(), 30.0], edit);
    if !error.is_empty() {
        ui.label(
            egui::RichText::new(error)
                .small()
                .color(egui::Color32::from_rgb(239, 68, 68)),
        );
    }
    response
}

/// Clickable palette circle. Selected swatches get an accent ring.
pub fn color_swatch(ui: &mut egui::Ui, tag: &str, selected: bool) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(20.0, 20.0), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let center = rect.center();
        let painter = ui.painter();
        painter.circle_filled(center, 8.0, theme::swatch_color(tag));
        if selected {
            painter.circle_stroke(
                center,
                9.5,
                egui::Stroke::new(2.0, ui.visuals().selection.bg_fill),
            );
        } else if response.hovered() {
            painter.circle_stroke(
                center,
                9.5,
                egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
            );
        }
    }
    response.on_hover_text(tag.to_string())
}

/// Small filled chip showing a committed color tag.
pub fn color_chip(ui: &mut egui::Ui, tag: &str) {
    egui::Frame::new()
        .fill(theme::swatch_color(tag))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(tag)
                    .small()
                    .color(egui::Color32::WHITE),
            );
        });
}

/// Price text for cards: parsed values get a dollar sign and digit
/// grouping, anything else is shown verbatim.
pub fn formatted_price(raw: &str) -> String {
    match parse_price(raw) {
        Ok(value) => format!("${}", group_thousands(value)),
        Err(_) => raw.to_string(),
    }
}

fn group_thousands(value: f64) -> String {
    let text = format!("{value:.2}");
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), "00"),
    };
    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    format!("{grouped}.{fraction}")
}

/// Card description preview. Cuts on a char boundary and appends an
/// ellipsis only when something was actually removed.
pub fn truncated(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str(" ...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_prices_get_grouping_and_two_decimals() {
        assert_eq!(formatted_price("49.99"), "$49.99");
        assert_eq!(formatted_price("500000"), "$500,000.00");
        assert_eq!(formatted_price("1234567.5"), "$1,234,567.50");
        assert_eq!(formatted_price("0"), "$0.00");
    }

    #[test]
    fn unparseable_price_is_shown_verbatim() {
        assert_eq!(formatted_price("cheap"), "cheap");
        assert_eq!(formatted_price(""), "");
    }

    #[test]
    fn short_descriptions_are_not_truncated() {
        assert_eq!(truncated("short text", 60), "short text");
    }

    #[test]
    fn long_descriptions_cut_at_the_limit_with_an_ellipsis() {
        let long = "x".repeat(80);
        let cut = truncated(&long, 60);
        assert_eq!(cut.chars().count(), 64);
        assert!(cut.ends_with(" ..."));
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        let text = "héllo wörld with accents and ümlauts everywhere in the text body";
        let cut = truncated(text, 10);
        assert!(cut.starts_with("héllo wör"));
        assert!(cut.ends_with(" ..."));
    }
}
