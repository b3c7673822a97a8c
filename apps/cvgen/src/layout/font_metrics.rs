//! Static font-metric tables for the three standard PDF font families.
//!
//! Character widths are in em units (relative to font size), taken from the
//! Adobe core-font AFM files. Italic faces are measured with the upright table
//! of the same family; the difference is below what the layout cares about.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

/// Millimetres per PDF point.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// Baseline-to-baseline distance as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

// ────────────────────────────────────────────────────────────────────────────
// Font family / weight
// ────────────────────────────────────────────────────────────────────────────

/// Font families understood by the drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontFamily {
    #[default]
    Helvetica,
    Times,
    Courier,
}

impl FontFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::Helvetica => "helvetica",
            FontFamily::Times => "times",
            FontFamily::Courier => "courier",
        }
    }

    /// Unknown names resolve to Helvetica.
    pub fn from_name(name: &str) -> FontFamily {
        match name.trim().to_ascii_lowercase().as_str() {
            "times" => FontFamily::Times,
            "courier" => FontFamily::Courier,
            _ => FontFamily::Helvetica,
        }
    }

    /// PostScript name of the standard-14 face for this family and weight.
    pub fn base_font(self, weight: FontWeight) -> &'static str {
        match (self, weight) {
            (FontFamily::Helvetica, FontWeight::Normal) => "Helvetica",
            (FontFamily::Helvetica, FontWeight::Bold) => "Helvetica-Bold",
            (FontFamily::Helvetica, FontWeight::Italic) => "Helvetica-Oblique",
            (FontFamily::Times, FontWeight::Normal) => "Times-Roman",
            (FontFamily::Times, FontWeight::Bold) => "Times-Bold",
            (FontFamily::Times, FontWeight::Italic) => "Times-Italic",
            (FontFamily::Courier, FontWeight::Normal) => "Courier",
            (FontFamily::Courier, FontWeight::Bold) => "Courier-Bold",
            (FontFamily::Courier, FontWeight::Italic) => "Courier-Oblique",
        }
    }
}

impl From<String> for FontFamily {
    fn from(name: String) -> Self {
        FontFamily::from_name(&name)
    }
}

impl From<FontFamily> for String {
    fn from(family: FontFamily) -> Self {
        family.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Italic,
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one font face.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Width of `•`, the one non-ASCII glyph the renderers emit themselves.
    pub bullet_width: f32,
    /// Fallback width for any other character outside 0x20..=0x7E.
    pub average_char_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else if c == '•' {
                    self.bullet_width
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measurement in page units
// ────────────────────────────────────────────────────────────────────────────

/// A resolved font: what the drawing context's "current font" consists of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size_pt: f32,
}

impl FontSpec {
    pub fn new(family: FontFamily, weight: FontWeight, size_pt: f32) -> Self {
        Self {
            family,
            weight,
            size_pt,
        }
    }

    /// Rendered width of `text` in millimetres.
    pub fn text_width(&self, text: &str) -> f32 {
        get_metrics(self.family, self.weight).measure_str(text) * self.size_pt * PT_TO_MM
    }

    /// Distance between successive baselines of multi-line text, in millimetres.
    pub fn line_height(&self) -> f32 {
        self.size_pt * LINE_HEIGHT_FACTOR * PT_TO_MM
    }

    /// Greedy word wrap to `max_width` millimetres.
    ///
    /// Explicit newlines always break. A word wider than the column is split
    /// between characters. Empty input yields no lines.
    pub fn split_text(&self, text: &str, max_width: f32) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut lines = Vec::new();
        for paragraph in normalized.split('\n') {
            self.wrap_paragraph(paragraph, max_width, &mut lines);
        }
        lines
    }

    fn wrap_paragraph(&self, paragraph: &str, max_width: f32, lines: &mut Vec<String>) {
        let space_w = self.text_width(" ");
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_w = self.text_width(word);

            if word_w > max_width {
                // Flush what we have, then hard-break the oversized word.
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let (pieces, tail) = self.break_word(word, max_width);
                lines.extend(pieces);
                current_width = self.text_width(&tail);
                current = tail;
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space_w + word_w > max_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
            }
        }

        lines.push(current);
    }

    /// Splits an oversized word into full-width pieces plus a trailing remainder.
    fn break_word(&self, word: &str, max_width: f32) -> (Vec<String>, String) {
        let mut pieces = Vec::new();
        let mut piece = String::new();
        for c in word.chars() {
            let mut candidate = piece.clone();
            candidate.push(c);
            if !piece.is_empty() && self.text_width(&candidate) > max_width {
                pieces.push(std::mem::take(&mut piece));
                piece.push(c);
            } else {
                piece = candidate;
            }
        }
        (pieces, piece)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    bullet_width: 0.350,
    average_char_width: 0.556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    bullet_width: 0.350,
    average_char_width: 0.611,
};

static TIMES_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    bullet_width: 0.350,
    average_char_width: 0.500,
};

static TIMES_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.555, 0.500, 0.500, 1.000, 0.833, 0.278, 0.333, 0.333, 0.500, 0.570, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.570, 0.570, 0.570, 0.500, 0.930,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.778, 0.389, 0.500, 0.778, 0.667, 0.944,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.611, 0.778, 0.722, 0.556, 0.667, 0.722, 0.722, 1.000, 0.722, 0.722, 0.667,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.581, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.500, 0.556, 0.444, 0.556, 0.444, 0.333, 0.500, 0.556, 0.278, 0.333, 0.556, 0.278, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.500, 0.556, 0.556, 0.444, 0.389, 0.333, 0.556, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.394, 0.220, 0.394, 0.520,
    ],
    bullet_width: 0.350,
    average_char_width: 0.540,
};

/// Courier is monospaced: every glyph is 0.6 em.
static COURIER_TABLE: FontMetricTable = FontMetricTable {
    widths: [0.600; 95],
    bullet_width: 0.600,
    average_char_width: 0.600,
};

/// Returns the static metric table for a family and weight.
pub fn get_metrics(family: FontFamily, weight: FontWeight) -> &'static FontMetricTable {
    match (family, weight) {
        (FontFamily::Helvetica, FontWeight::Bold) => &HELVETICA_BOLD_TABLE,
        (FontFamily::Helvetica, _) => &HELVETICA_TABLE,
        (FontFamily::Times, FontWeight::Bold) => &TIMES_BOLD_TABLE,
        (FontFamily::Times, _) => &TIMES_TABLE,
        (FontFamily::Courier, _) => &COURIER_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn helvetica(size: f32) -> FontSpec {
        FontSpec::new(FontFamily::Helvetica, FontWeight::Normal, size)
    }

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontFamily::Helvetica, FontWeight::Normal);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFamily::Helvetica, FontWeight::Normal);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!((width - 2.056).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(FontFamily::Times, FontWeight::Normal);
        assert!((metrics.measure_str("é") - metrics.average_char_width).abs() < 1e-4);
        assert!((metrics.measure_str("•") - metrics.bullet_width).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Senior Software Engineer";
        for family in [FontFamily::Helvetica, FontFamily::Times] {
            let regular = FontSpec::new(family, FontWeight::Normal, 10.0).text_width(text);
            let bold = FontSpec::new(family, FontWeight::Bold, 10.0).text_width(text);
            assert!(bold > regular, "{family:?}");
        }
    }

    #[test]
    fn test_courier_is_monospaced() {
        let spec = FontSpec::new(FontFamily::Courier, FontWeight::Normal, 10.0);
        assert!((spec.text_width("iiii") - spec.text_width("WWWW")).abs() < 1e-5);
        // 4 chars × 0.6em × 10pt × 25.4/72
        assert!((spec.text_width("abcd") - 4.0 * 0.6 * 10.0 * PT_TO_MM).abs() < 1e-4);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let small = helvetica(8.0).text_width("TypeScript");
        let large = helvetica(16.0).text_width("TypeScript");
        assert!((large - 2.0 * small).abs() < 1e-4);
    }

    #[test]
    fn test_split_text_empty_yields_no_lines() {
        assert!(helvetica(9.0).split_text("", 100.0).is_empty());
        assert!(helvetica(9.0).split_text("   ", 100.0).is_empty());
    }

    #[test]
    fn test_split_text_short_fits_on_one_line() {
        assert_eq!(helvetica(9.0).split_text("Rust", 100.0), vec!["Rust"]);
    }

    #[test]
    fn test_split_text_lines_respect_width() {
        let spec = helvetica(9.0);
        let text = "Architected a distributed caching layer using consistent hashing, \
                    reducing p99 latency by 40% under 50k RPS peak load across three regions";
        let lines = spec.split_text(text, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(spec.text_width(line) <= 60.0 + 1e-3, "{line:?} overflows");
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_split_text_honours_newlines() {
        let lines = helvetica(9.0).split_text("first\nsecond\r\nthird", 100.0);
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_split_text_breaks_oversized_word() {
        let spec = helvetica(9.0);
        let word = "x".repeat(200);
        let lines = spec.split_text(&word, 30.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(spec.text_width(line) <= 30.0 + 1e-3);
        }
    }

    #[test]
    fn test_line_height_matches_factor() {
        let spec = helvetica(10.0);
        assert!((spec.line_height() - 10.0 * 1.15 * 25.4 / 72.0).abs() < 1e-5);
    }

    #[test]
    fn test_font_family_names_are_total() {
        assert_eq!(FontFamily::from_name("Times"), FontFamily::Times);
        assert_eq!(FontFamily::from_name("courier"), FontFamily::Courier);
        assert_eq!(FontFamily::from_name("comic sans"), FontFamily::Helvetica);
        assert_eq!(FontFamily::Times.base_font(FontWeight::Italic), "Times-Italic");
    }
}
