// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Canvas fill/stroke styles accept #rrggbbaa directly
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

// Drawn for points that carry no color of their own
pub const POINT_FALLBACK: Color = Color::from_u32(0xffff_ff12);
pub const HIGHLIGHT: Color = Color::from_u32(0xff33_33ff);
pub const POLYGON_STROKE: Color = Color::from_u32(0xaaaa_ff12);
pub const FPS_TEXT: Color = Color::from_u32(0xff00_00ff);

pub const PARTICLE_PALETTE: [Color; 10] = [
    Color::from_u32(0xaacc_ddff),
    Color::from_u32(0xddaa_ccff),
    Color::from_u32(0xccdd_eeff),
    Color::from_u32(0xaabb_aaff),
    Color::from_u32(0xbbaa_aaff),
    Color::from_u32(0xaabb_ccff),
    Color::from_u32(0xddcc_aaff),
    Color::from_u32(0xaadd_eeff),
    Color::from_u32(0xeedd_aaff),
    Color::from_u32(0xccaa_bbff),
];

const FAINT_WHITE: Color = Color::from_u32(0xffff_f005);
const FAINT_YELLOW: Color = Color::from_u32(0xffff_a005);

// One fill per entry of the overlay wiring table
pub const PARTICLE_POLYGON_FILLS: [Color; 8] = [
    FAINT_WHITE,
    FAINT_YELLOW,
    FAINT_WHITE,
    FAINT_YELLOW,
    FAINT_WHITE,
    FAINT_YELLOW,
    FAINT_WHITE,
    Color::from_u32(0xfffa_a005),
];

pub const GRID_POLYGON_FILLS: [Color; 8] = [FAINT_WHITE; 8];
