//! Text and JSON rendering of picker state for the command line.

use hsl_picker::color::ensure_number;
use hsl_picker::{Color, FieldValues, ShadeRow, Snapshot};
use serde::Serialize;

/// How session refreshes are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// One refresh as written by a session
#[derive(Debug, Serialize)]
pub struct RefreshRecord<'a> {
    /// Script line that caused the refresh
    pub line: usize,
    pub fields: &'a FieldValues,
    pub base: String,
    pub shade_cursor: (f64, f64),
    pub hue_cursor: f64,
}

impl<'a> RefreshRecord<'a> {
    pub fn new(line: usize, fields: &'a FieldValues, snapshot: &Snapshot) -> Self {
        Self {
            line,
            fields,
            base: snapshot.base.to_hex(),
            shade_cursor: snapshot.shade_cursor(),
            hue_cursor: snapshot.hue_cursor(),
        }
    }
}

/// Field values in one line, as the widget inputs would show them.
pub fn fields_line(fields: &FieldValues) -> String {
    format!(
        "{}  rgb({}, {}, {})  hsl({}, {}%, {}%)  gray {}",
        fields.hex,
        fields.red,
        fields.green,
        fields.blue,
        fields.hue,
        fields.saturation,
        fields.lightness,
        fields.gray
    )
}

/// Text line for one session refresh
pub fn refresh_line(line: usize, snapshot: &Snapshot) -> String {
    format!(
        "{line:>4}  {}  base {}",
        fields_line(&snapshot.fields()),
        snapshot.base
    )
}

/// Multi-line description of a single color
pub fn describe(color: Color) -> String {
    let hue = color.hue();
    format!(
        "hex        {}\n\
         rgb        {}, {}, {}\n\
         hsl        {}, {}%, {}%\n\
         gray       {}\n\
         base       {}",
        color,
        color.r(),
        color.g(),
        color.b(),
        hue,
        ensure_number(color.saturation(), 2),
        ensure_number(color.lightness(), 2),
        color.gray(),
        hsl_picker::color_at_hue(f64::from(hue))
    )
}

/// Hue ramp samples, one `hue  hex` pair per line
pub fn ramp_table(samples: &[(f64, Color)]) -> String {
    samples
        .iter()
        .map(|(hue, color)| format!("{:>7.2}  {color}", hue))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shade rows as `t  left  right`
pub fn shade_table(rows: &[ShadeRow]) -> String {
    rows.iter()
        .map(|row| format!("{:.4}  {}  {}", row.t, row.left, row.right))
        .collect::<Vec<_>>()
        .join("\n")
}
