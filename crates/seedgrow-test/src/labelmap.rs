//! Textual label maps
//!
//! One line per row, one character per pixel: `.` for unassigned, `1`-`9`
//! for labels 1 to 9. Volumes separate planes with an empty line.

use crate::error::{TestError, TestResult};
use seedgrow_core::LabelImage;

/// Parse a label map into a [`LabelImage`]
///
/// Leading and trailing blank lines are ignored.
pub fn parse_label_map(text: &str) -> TestResult<LabelImage> {
    let mut planes: Vec<Vec<Vec<u32>>> = vec![Vec::new()];
    for (n, raw) in text.trim().lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            planes.push(Vec::new());
            continue;
        }
        let row = line
            .chars()
            .map(|c| match c {
                '.' => Ok(0),
                _ => c.to_digit(10).ok_or_else(|| TestError::InvalidLabelMap {
                    line: n + 1,
                    message: format!("unexpected character '{c}'"),
                }),
            })
            .collect::<TestResult<Vec<u32>>>()?;
        if let Some(plane) = planes.last_mut() {
            plane.push(row);
        }
    }

    let height = planes[0].len();
    let width = planes[0].first().map_or(0, Vec::len);
    let mut data = Vec::with_capacity(width * height * planes.len());
    for (z, plane) in planes.iter().enumerate() {
        if plane.len() != height || plane.iter().any(|r| r.len() != width) {
            return Err(TestError::InvalidLabelMap {
                line: z,
                message: format!("plane {z} is not {width}x{height}"),
            });
        }
        data.extend(plane.iter().flatten());
    }
    Ok(LabelImage::from_data(
        width as u32,
        height as u32,
        planes.len() as u32,
        data,
    )?)
}

/// Render a label image in the format read by [`parse_label_map`]
///
/// Labels above 9 are written as `#`.
pub fn render_label_map(labels: &LabelImage) -> String {
    let width = labels.width() as usize;
    let plane = width * labels.height() as usize;
    let mut out = String::with_capacity(labels.data().len() + labels.data().len() / width);
    for (i, &l) in labels.data().iter().enumerate() {
        if i > 0 && i % plane == 0 {
            out.push('\n');
        }
        out.push(match l {
            0 => '.',
            1..=9 => char::from_digit(l, 10).unwrap_or('#'),
            _ => '#',
        });
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_planar() {
        let labels = parse_label_map(
            "
            11.
            122
            ",
        )
        .unwrap();
        assert_eq!(labels.width(), 3);
        assert_eq!(labels.height(), 2);
        assert_eq!(labels.data(), &[1, 1, 0, 1, 2, 2]);
    }

    #[test]
    fn test_parse_volume() {
        let labels = parse_label_map("12\n12\n\n33\n33").unwrap();
        assert_eq!(labels.depth(), 2);
        assert_eq!(labels.get_voxel(0, 1, 1).unwrap(), 3);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_label_map("1x").is_err());
        assert!(parse_label_map("11\n1").is_err());
    }

    #[test]
    fn test_render_roundtrip() {
        let text = "1.2\n.33\n\n111\n222\n";
        let labels = parse_label_map(text).unwrap();
        assert_eq!(render_label_map(&labels), text);
    }
}
