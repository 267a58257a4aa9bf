/// Canvas size and typography for one rendered PNG.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub title_size: f64,
    /// Tick and category labels.
    pub label_size: f64,
    /// Text above each bar.
    pub value_size: f64,
    /// Y-axis description.
    pub axis_desc_size: f64,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
}

impl ChartStyle {
    /// One indicator per image (8x6 in at 200 dpi).
    pub const fn single() -> Self {
        Self {
            width: 1600,
            height: 1200,
            title_size: 56.0,
            label_size: 40.0,
            value_size: 40.0,
            axis_desc_size: 44.0,
            margin: 40,
            x_label_area: 90,
            y_label_area: 260,
        }
    }

    /// Three panels side by side (20x7 in at 150 dpi).
    pub const fn combined() -> Self {
        Self {
            width: 3000,
            height: 1050,
            title_size: 42.0,
            label_size: 30.0,
            value_size: 30.0,
            axis_desc_size: 32.0,
            margin: 30,
            x_label_area: 70,
            y_label_area: 200,
        }
    }

    /// Same proportions, scaled to `width` x `height`. Font sizes and areas
    /// follow the height ratio.
    pub fn scaled(&self, width: u32, height: u32) -> Self {
        let ratio = height as f64 / self.height.max(1) as f64;
        let px = |value: u32| (value as f64 * ratio).round() as u32;
        Self {
            width,
            height,
            title_size: self.title_size * ratio,
            label_size: self.label_size * ratio,
            value_size: self.value_size * ratio,
            axis_desc_size: self.axis_desc_size * ratio,
            margin: px(self.margin),
            x_label_area: px(self.x_label_area),
            y_label_area: px(self.y_label_area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_halves_everything() {
        let half = ChartStyle::single().scaled(800, 600);
        assert_eq!(half.width, 800);
        assert_eq!(half.margin, 20);
        assert_eq!(half.y_label_area, 130);
        assert!((half.title_size - 28.0).abs() < 1e-9);
    }
}
