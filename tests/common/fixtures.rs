//! Session scripts and configs shared by the integration tests.

/// Red, then green by hue, then darkened by lightness
pub const HUE_THEN_LIGHTNESS: &str = "\
# start from red
rgb 255 0 0
hue 120
lightness 25
";

/// Every command that must not refresh a red picker
pub const RED_NOOPS: &str = "\
red 255
green 0
blue 0
hex #FF0000
hue 0
hue 0.3
strip 0
strip 1
shade nan 0.5
click 1000 1000
";

/// Config with user color names and a small widget layout
pub const BRAND_CONFIG: &str = r##"
initial_color: brand
colors:
  brand: "#336699"
  paper: "#FAFAF5"
widget:
  shade:
    left: 0
    top: 0
    width: 100
    height: 100
  strip:
    left: 110
    top: 0
    width: 10
    height: 100
"##;
