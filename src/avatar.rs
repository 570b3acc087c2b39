/// Letter-avatar tiles: text on a colored shape, independent of any renderer.
use crate::color::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Shape {
    #[default]
    Rect,
    Round,
    RoundRect {
        radius: u32,
    },
}

/// A fully configured tile, ready to be drawn by a frontend.
#[derive(Clone, Debug, PartialEq)]
pub struct Avatar {
    text: String,
    color: Color,
    text_color: Color,
    border_thickness: u32,
    width: Option<u32>,
    height: Option<u32>,
    font_size: Option<u32>,
    shape: Shape,
    bold: bool,
}

impl Avatar {
    pub fn builder() -> AvatarBuilder {
        AvatarBuilder::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Border is drawn in a darker shade of the fill.
    pub fn border_color(&self) -> Color {
        self.color.darker_shade()
    }

    pub fn border_thickness(&self) -> u32 {
        self.border_thickness
    }

    pub fn has_border(&self) -> bool {
        self.border_thickness > 0
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Intrinsic size; `None` means "fill whatever bounds the frontend offers".
    pub fn intrinsic_size(&self) -> (Option<u32>, Option<u32>) {
        (self.width, self.height)
    }

    /// Resolves unsized dimensions against the drawing bounds.
    pub fn size_in(&self, bounds: (u32, u32)) -> (u32, u32) {
        (self.width.unwrap_or(bounds.0), self.height.unwrap_or(bounds.1))
    }

    /// Explicit font size, or half the smaller side of the tile.
    pub fn font_size_for(&self, width: u32, height: u32) -> u32 {
        self.font_size.unwrap_or(width.min(height) / 2)
    }
}

#[derive(Clone, Debug)]
pub struct AvatarBuilder {
    text_color: Color,
    border_thickness: u32,
    width: Option<u32>,
    height: Option<u32>,
    font_size: Option<u32>,
    shape: Shape,
    bold: bool,
    upper_case: bool,
}

impl Default for AvatarBuilder {
    fn default() -> Self {
        Self {
            text_color: Color::WHITE,
            border_thickness: 0,
            width: None,
            height: None,
            font_size: None,
            shape: Shape::Rect,
            bold: false,
            upper_case: false,
        }
    }
}

impl AvatarBuilder {
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_border(mut self, thickness: u32) -> Self {
        self.border_thickness = thickness;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn to_upper_case(mut self) -> Self {
        self.upper_case = true;
        self
    }

    pub fn rect(mut self) -> Self {
        self.shape = Shape::Rect;
        self
    }

    pub fn round(mut self) -> Self {
        self.shape = Shape::Round;
        self
    }

    pub fn round_rect(mut self, radius: u32) -> Self {
        self.shape = Shape::RoundRect { radius };
        self
    }

    pub fn build(self, text: &str, color: Color) -> Avatar {
        let text = if self.upper_case {
            text.to_uppercase()
        } else {
            text.to_string()
        };
        Avatar {
            text,
            color,
            text_color: self.text_color,
            border_thickness: self.border_thickness,
            width: self.width,
            height: self.height,
            font_size: self.font_size,
            shape: self.shape,
            bold: self.bold,
        }
    }

    pub fn build_rect(self, text: &str, color: Color) -> Avatar {
        self.rect().build(text, color)
    }

    pub fn build_round(self, text: &str, color: Color) -> Avatar {
        self.round().build(text, color)
    }

    pub fn build_round_rect(self, text: &str, color: Color, radius: u32) -> Avatar {
        self.round_rect(radius).build(text, color)
    }
}

/// First letter of up to `max` words, upper-cased ("ada lovelace" -> "AL").
pub fn initials(name: &str, max: usize) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(max)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_tile() {
        let avatar = Avatar::builder().build("a", Color::GRAY);
        assert_eq!(avatar.text(), "a");
        assert_eq!(avatar.text_color(), Color::WHITE);
        assert_eq!(avatar.shape(), Shape::Rect);
        assert!(!avatar.has_border());
        assert!(!avatar.is_bold());
        assert_eq!(avatar.intrinsic_size(), (None, None));
    }

    #[test]
    fn shape_helpers_override_earlier_choice() {
        let color = Color::from_rgb(10, 20, 30);
        assert_eq!(
            Avatar::builder().round().build_rect("x", color).shape(),
            Shape::Rect
        );
        assert_eq!(
            Avatar::builder().build_round("x", color).shape(),
            Shape::Round
        );
        assert_eq!(
            Avatar::builder().build_round_rect("x", color, 8).shape(),
            Shape::RoundRect { radius: 8 }
        );
    }

    #[test]
    fn border_uses_darker_fill() {
        let fill = Color::from_rgb(200, 100, 50);
        let avatar = Avatar::builder().with_border(4).bold().build("ab", fill);
        assert!(avatar.has_border());
        assert_eq!(avatar.border_thickness(), 4);
        assert_eq!(avatar.border_color(), Color::from_rgb(180, 90, 45));
    }

    #[test]
    fn upper_case_applies_to_text() {
        let avatar = Avatar::builder().to_upper_case().build("ßa", Color::GRAY);
        assert_eq!(avatar.text(), "SSA");
    }

    #[test]
    fn font_size_falls_back_to_half_smaller_side() {
        let auto = Avatar::builder().width(60).build("A", Color::GRAY);
        let (w, h) = auto.size_in((100, 40));
        assert_eq!((w, h), (60, 40));
        assert_eq!(auto.font_size_for(w, h), 20);

        let fixed = Avatar::builder().font_size(12).build("A", Color::GRAY);
        assert_eq!(fixed.font_size_for(100, 100), 12);
    }

    #[test]
    fn initials_take_leading_letters() {
        assert_eq!(initials("ada lovelace", 2), "AL");
        assert_eq!(initials("  grace  brewster murray hopper ", 2), "GB");
        assert_eq!(initials("x", 3), "X");
        assert_eq!(initials("", 2), "");
    }
}
