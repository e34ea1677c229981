// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Text color contrast selection
//!
//! Pure functions: relative luminance via the sRGB linearization formula,
//! and the light/dark text pick used over colored boxes and heat cells.

use crate::{AllocationError, AllocationResult};

/// Backgrounds brighter than this take dark text
pub const LUMINANCE_THRESHOLD: f64 = 0.179;

/// Parse `#rgb` or `#rrggbb` into channel values in `[0, 1]`.
pub fn parse_hex_color(color: &str) -> AllocationResult<(f64, f64, f64)> {
    let invalid = || AllocationError::InvalidColor(color.to_string());
    let hex = color.strip_prefix('#').ok_or_else(invalid)?;

    let (r, g, b) = match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| d * 17));
            let mut next = || digits.next().flatten().ok_or_else(invalid);
            (next()?, next()?, next()?)
        }
        6 => {
            let channel = |range| u32::from_str_radix(&hex[range], 16).map_err(|_| invalid());
            (channel(0..2)?, channel(2..4)?, channel(4..6)?)
        }
        _ => return Err(invalid()),
    };

    Ok((
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    ))
}

fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a hex color (WCAG sRGB weighting).
pub fn relative_luminance(color: &str) -> AllocationResult<f64> {
    let (r, g, b) = parse_hex_color(color)?;
    Ok(0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b))
}

/// Choose the readable text color for `background`: `dark` over bright
/// backgrounds, `light` over dim ones.
///
/// # Examples
/// ```
/// use roiviz_allocation::pick_text_color;
///
/// assert_eq!(pick_text_color("#ffffff", "#fff", "#000").unwrap(), "#000");
/// assert_eq!(pick_text_color("#000000", "#fff", "#000").unwrap(), "#fff");
/// ```
pub fn pick_text_color<'a>(
    background: &str,
    light: &'a str,
    dark: &'a str,
) -> AllocationResult<&'a str> {
    let luminance = relative_luminance(background)?;
    if luminance > LUMINANCE_THRESHOLD {
        Ok(dark)
    } else {
        Ok(light)
    }
}
