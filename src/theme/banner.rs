//! Gradient wordmark banner
//!
//! Every glyph of the fixed art gets its own colour, sampled from a colour
//! ramp by the glyph's position. The brand ramp does not follow the active
//! theme.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use serde::{Deserialize, Serialize};

use crate::theme::color::Rgb;

/// The wordmark, one entry per row
pub const BANNER_LINES: [&str; 6] = [
    "████████╗ ██╗   ██╗ ██╗ ██████╗   ██████╗   ██████╗ ",
    "╚══██╔══╝ ██║   ██║ ██║ ██╔══██╗ ██╔═══██╗ ██╔═══██╗",
    "   ██║    ██║   ██║ ██║ ██║  ██║ ██║   ██║ ██║   ██║",
    "   ██║    ██║   ██║ ██║ ██║  ██║ ██║   ██║ ██║   ██║",
    "   ██║    ╚██████╔╝ ██║ ██████╔╝ ╚██████╔╝ ╚██████╔╝",
    "   ╚═╝     ╚═════╝  ╚═╝ ╚═════╝   ╚═════╝   ╚═════╝ ",
];

/// Brand ramp: green through cyan to blue
pub const BRAND_GRADIENT: [Rgb; 6] = [
    Rgb::hex(0x00FF00),
    Rgb::hex(0x00FF66),
    Rgb::hex(0x00FFCC),
    Rgb::hex(0x00CCFF),
    Rgb::hex(0x0099FF),
    Rgb::hex(0x0066FF),
];

/// Markup tag that ends a coloured run
pub const MARKUP_RESET: &str = "[-]";

const ANSI_RESET: &str = "\x1b[0m";

/// Direction the gradient runs across the art
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BannerStyle {
    /// Left to right along each row
    #[default]
    Horizontal,
    /// Bottom-left to top-right across the whole block
    Diagonal,
}

impl BannerStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerStyle::Horizontal => "horizontal",
            BannerStyle::Diagonal => "diagonal",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "horizontal" => Some(BannerStyle::Horizontal),
            "diagonal" => Some(BannerStyle::Diagonal),
            _ => None,
        }
    }

    pub fn all() -> &'static [BannerStyle] {
        &[BannerStyle::Horizontal, BannerStyle::Diagonal]
    }
}

impl std::fmt::Display for BannerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sample a ramp at normalized position `p`.
///
/// With `t = p * (n - 1)` the colour is a blend of stops `floor(t)` and the
/// next one (clamped to the last), weighted by the fractional part. `p` is
/// clamped to `[0, 1]`, so the ends return the first and last stop exactly.
pub fn sample(stops: &[Rgb], p: f64) -> Rgb {
    match stops {
        [] => Rgb::new(0, 0, 0),
        [only] => *only,
        _ => {
            let last = stops.len() - 1;
            let t = p.clamp(0.0, 1.0) * last as f64;
            let idx1 = (t.floor() as usize).min(last);
            let idx2 = (idx1 + 1).min(last);
            Rgb::lerp(stops[idx1], stops[idx2], t - idx1 as f64)
        }
    }
}

/// Normalized position of `index` within `len` slots
fn position(index: usize, len: usize) -> f64 {
    if len <= 1 {
        0.0
    } else {
        index as f64 / (len - 1) as f64
    }
}

/// A coloured rendering of the wordmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    rows: Vec<Vec<(char, Rgb)>>,
}

impl Banner {
    /// The brand banner
    pub fn new(style: BannerStyle) -> Self {
        Self::from_ramp(&BRAND_GRADIENT, style)
    }

    /// Colour the wordmark with any ramp
    pub fn from_ramp(stops: &[Rgb], style: BannerStyle) -> Self {
        let row_count = BANNER_LINES.len();
        let width = BANNER_LINES
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let rows = BANNER_LINES
            .iter()
            .enumerate()
            .map(|(row, line)| {
                let len = line.chars().count();
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| {
                        let p = match style {
                            BannerStyle::Horizontal => position(col, len),
                            BannerStyle::Diagonal => {
                                (position(col, width) + (1.0 - position(row, row_count))) / 2.0
                            }
                        };
                        (ch, sample(stops, p))
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    /// Per-glyph colours, one vector per row
    pub fn rows(&self) -> &[Vec<(char, Rgb)>] {
        &self.rows
    }

    /// `[#rrggbb]c` per glyph, `[-]` closing every row
    pub fn to_markup(&self) -> String {
        self.render(|rgb, ch| format!("[{}]{}", rgb.to_hex(), ch), MARKUP_RESET)
    }

    /// 24-bit ANSI escapes per glyph, reset at the end of every row
    pub fn to_ansi(&self) -> String {
        self.render(
            |rgb, ch| format!("\x1b[38;2;{};{};{}m{}", rgb.r, rgb.g, rgb.b, ch),
            ANSI_RESET,
        )
    }

    /// The art without colour
    pub fn to_plain(&self) -> String {
        BANNER_LINES.join("\n")
    }

    /// ratatui lines, one span per glyph
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.rows
            .iter()
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|(ch, rgb)| Span::styled(ch.to_string(), Style::default().fg(Color::from(*rgb))))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row in glyphs
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn render(&self, glyph: impl Fn(Rgb, char) -> String, reset: &str) -> String {
        self.rows
            .iter()
            .map(|row| {
                let mut line: String = row.iter().map(|(ch, rgb)| glyph(*rgb, *ch)).collect();
                line.push_str(reset);
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Remove `[#rrggbb]` and `[-]` tags, leaving visible text
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        if let Some(after) = tail.strip_prefix(MARKUP_RESET) {
            rest = after;
        } else if is_color_tag(tail) {
            rest = &tail[9..];
        } else {
            out.push('[');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

fn is_color_tag(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 9
        && bytes[1] == b'#'
        && bytes[8] == b']'
        && bytes[2..8].iter().all(u8::is_ascii_hexdigit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        a.r.abs_diff(b.r) <= 1 && a.g.abs_diff(b.g) <= 1 && a.b.abs_diff(b.b) <= 1
    }

    #[test]
    fn test_sample_endpoints() {
        assert_eq!(sample(&BRAND_GRADIENT, 0.0), BRAND_GRADIENT[0]);
        assert_eq!(sample(&BRAND_GRADIENT, 1.0), BRAND_GRADIENT[5]);
        assert_eq!(sample(&BRAND_GRADIENT, -3.0), BRAND_GRADIENT[0]);
        assert_eq!(sample(&BRAND_GRADIENT, 7.0), BRAND_GRADIENT[5]);
    }

    #[test]
    fn test_sample_hits_interior_stops() {
        // p = i / 5 lands exactly on stop i
        for (i, stop) in BRAND_GRADIENT.iter().enumerate() {
            let got = sample(&BRAND_GRADIENT, i as f64 / 5.0);
            assert!(close(got, *stop), "stop {i}: {got} vs {stop}");
        }
    }

    #[test]
    fn test_sample_blends_between_stops() {
        // halfway between #00FF00 and #00FF66
        assert_eq!(sample(&BRAND_GRADIENT, 0.1), Rgb::new(0, 255, 51));
    }

    #[test]
    fn test_sample_degenerate_ramps() {
        assert_eq!(sample(&[], 0.5), Rgb::new(0, 0, 0));
        assert_eq!(sample(&[Rgb::hex(0x123456)], 0.9), Rgb::hex(0x123456));
    }

    #[test]
    fn test_banner_has_six_rows_matching_art() {
        for style in BannerStyle::all() {
            let banner = Banner::new(*style);
            assert_eq!(banner.height(), 6);
            for (row, line) in banner.rows().iter().zip(BANNER_LINES) {
                let text: String = row.iter().map(|(ch, _)| *ch).collect();
                assert_eq!(text, line);
            }
        }
    }

    #[test]
    fn test_horizontal_rows_start_and_end_on_ramp_ends() {
        let banner = Banner::new(BannerStyle::Horizontal);
        for row in banner.rows() {
            assert_eq!(row.first().map(|(_, c)| *c), Some(BRAND_GRADIENT[0]));
            assert_eq!(row.last().map(|(_, c)| *c), Some(BRAND_GRADIENT[5]));
        }
    }

    #[test]
    fn test_diagonal_corners() {
        let banner = Banner::new(BannerStyle::Diagonal);
        let rows = banner.rows();
        // bottom-left is the start of the ramp, top-right the end
        assert_eq!(rows[5][0].1, BRAND_GRADIENT[0]);
        let top = &rows[0];
        assert!(close(top[top.len() - 1].1, BRAND_GRADIENT[5]));
    }

    #[test]
    fn test_markup_strips_back_to_art() {
        let markup = Banner::new(BannerStyle::Horizontal).to_markup();
        let lines: Vec<&str> = markup.split('\n').collect();
        assert_eq!(lines.len(), 6);
        for (line, art) in lines.iter().zip(BANNER_LINES) {
            assert!(line.ends_with(MARKUP_RESET));
            assert_eq!(strip_markup(line), art);
            assert_eq!(strip_markup(line).chars().count(), art.chars().count());
        }
        assert!(markup.starts_with("[#00ff00]"));
    }

    #[test]
    fn test_ansi_output_resets_each_row() {
        let ansi = Banner::new(BannerStyle::Horizontal).to_ansi();
        assert_eq!(ansi.lines().count(), 6);
        assert!(ansi.lines().all(|l| l.ends_with("\x1b[0m")));
        assert!(ansi.starts_with("\x1b[38;2;0;255;0m"));
    }

    #[test]
    fn test_lines_have_one_span_per_glyph() {
        let banner = Banner::new(BannerStyle::Horizontal);
        let lines = banner.lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].spans.len(), BANNER_LINES[0].chars().count());
    }

    #[test]
    fn test_from_ramp_uses_given_stops() {
        let ramp = [
            Rgb::hex(0xFF0000),
            Rgb::hex(0xFF3200),
            Rgb::hex(0xFF6400),
            Rgb::hex(0xFF9600),
            Rgb::hex(0xFFFF00),
        ];
        let banner = Banner::from_ramp(&ramp, BannerStyle::Horizontal);
        let row = &banner.rows()[0];
        assert_eq!(row[0].1, ramp[0]);
        assert_eq!(row[row.len() - 1].1, ramp[4]);
    }

    #[test]
    fn test_banner_is_pure() {
        assert_eq!(
            Banner::new(BannerStyle::Diagonal),
            Banner::new(BannerStyle::Diagonal)
        );
    }

    #[test]
    fn test_strip_markup_keeps_plain_brackets() {
        assert_eq!(strip_markup("[#a1b2c3]x[-] [y] [#zz]"), "x [y] [#zz]");
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!(BannerStyle::from_str("diagonal"), Some(BannerStyle::Diagonal));
        assert_eq!(BannerStyle::from_str("sideways"), None);
        assert_eq!(BannerStyle::default().to_string(), "horizontal");
    }
}
