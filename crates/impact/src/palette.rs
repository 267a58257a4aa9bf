//! Project and partner brand colors used by every chart surface.

/// 8-bit sRGB triple, independent of any drawing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }
}

/// #0E454A, dark teal.
pub const PRIMARY_DARK: Rgb = Rgb(14, 69, 74);
/// #1FFF5F, vivid green.
pub const PRIMARY_GREEN: Rgb = Rgb(31, 255, 95);
/// #FFFFFF.
pub const WHITE: Rgb = Rgb(255, 255, 255);
/// #009BD3, partner light blue.
pub const PARTNER_LIGHT_BLUE: Rgb = Rgb(0, 155, 211);
/// #008CCF, partner mid blue.
pub const PARTNER_MID_BLUE: Rgb = Rgb(0, 140, 207);
/// #00366E, partner dark blue.
pub const PARTNER_DARK_BLUE: Rgb = Rgb(0, 54, 110);

/// Fill for the four chart color slots, in slot order.
pub const CHART_SLOTS: [Rgb; 4] = [
    PRIMARY_DARK,
    PRIMARY_GREEN,
    PARTNER_LIGHT_BLUE,
    PARTNER_DARK_BLUE,
];

/// Tick labels, category labels and value labels.
pub const TEXT: Rgb = PRIMARY_DARK;
/// Chart titles.
pub const TITLE: Rgb = PARTNER_DARK_BLUE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_values() {
        assert_eq!(PRIMARY_DARK.hex(), 0x0E454A);
        assert_eq!(PRIMARY_GREEN.hex(), 0x1FFF5F);
        assert_eq!(PARTNER_LIGHT_BLUE.hex(), 0x009BD3);
        assert_eq!(PARTNER_MID_BLUE.hex(), 0x008CCF);
        assert_eq!(PARTNER_DARK_BLUE.hex(), 0x00366E);
        assert_eq!(WHITE.hex(), 0xFFFFFF);
    }
}
