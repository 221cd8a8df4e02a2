use std::path::PathBuf;

use crate::trim::BoundingBox;

#[derive(Clone, Debug, PartialEq)]
pub struct TrimSummary {
    pub output_path: PathBuf,
    pub original_dimensions: (u32, u32),
    pub trimmed_dimensions: (u32, u32),
    pub bounds: BoundingBox,
}

impl TrimSummary {
    pub fn original_pixels(&self) -> u64 {
        pixel_count(self.original_dimensions)
    }

    pub fn trimmed_pixels(&self) -> u64 {
        pixel_count(self.trimmed_dimensions)
    }

    /// Share of the original pixel count removed by trimming, in percent.
    pub fn reduction_percent(&self) -> f64 {
        let original = self.original_pixels();
        if original == 0 {
            return 0.0;
        }

        (1.0 - self.trimmed_pixels() as f64 / original as f64) * 100.0
    }
}

impl std::fmt::Display for TrimSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (original_width, original_height) = self.original_dimensions;
        let (trimmed_width, trimmed_height) = self.trimmed_dimensions;

        writeln!(f, "Trimmed image saved to: {}", self.output_path.display())?;
        writeln!(
            f,
            "  Original size: {original_width}x{original_height} ({} pixels)",
            group_thousands(self.original_pixels())
        )?;
        writeln!(
            f,
            "  Trimmed size: {trimmed_width}x{trimmed_height} ({} pixels)",
            group_thousands(self.trimmed_pixels())
        )?;
        write!(f, "  Reduction: {:.1}%", self.reduction_percent())
    }
}

fn pixel_count((width, height): (u32, u32)) -> u64 {
    width as u64 * height as u64
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
