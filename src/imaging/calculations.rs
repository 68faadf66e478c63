//! Pure pixel math.
//!
//! Everything here works on plain numbers and histograms so it can be unit
//! tested without constructing images. The [`primitives`](super::primitives)
//! module maps these over buffers.

/// Luminance of an RGB triple using ITU-R 601 weights.
///
/// Same weighting for grayscale conversion and saturation adjustment, so a
/// desaturated pixel keeps the luminance the grayscale stage would give it.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = r as u32 * 299 + g as u32 * 587 + b as u32 * 114;
    ((weighted + 500) / 1000) as u8
}

/// Round and clamp a working value to an 8-bit channel.
pub fn clamp_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Linear interpolation between two channel values.
///
/// `t = 0` yields `a`, `t = 1` yields `b`. `t` outside `[0, 1]` extrapolates,
/// which is how contrast/brightness/saturation factors above 1 are expressed.
pub fn lerp_channel(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Rounded mean level of a 256-bin histogram. Empty histograms are treated
/// as black.
pub fn mean_level(histogram: &[u32; 256]) -> u8 {
    let (count, sum) = histogram
        .iter()
        .enumerate()
        .fold((0u64, 0u64), |(count, sum), (level, &n)| {
            (count + n as u64, sum + level as u64 * n as u64)
        });
    if count == 0 {
        return 0;
    }
    clamp_channel(sum as f32 / count as f32)
}

/// Lookup table stretching the occupied histogram range to 0..=255.
///
/// The darkest occupied level maps to 0 and the brightest to 255, linear in
/// between. A histogram with zero or one occupied level has nothing to
/// stretch and yields the identity table.
pub fn autocontrast_lut(histogram: &[u32; 256]) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, slot) in lut.iter_mut().enumerate() {
        *slot = i as u8;
    }

    let lo = histogram.iter().position(|&n| n > 0);
    let hi = histogram.iter().rposition(|&n| n > 0);
    let (Some(lo), Some(hi)) = (lo, hi) else {
        return lut;
    };
    if hi <= lo {
        return lut;
    }

    let scale = 255.0 / (hi - lo) as f32;
    let offset = -(lo as f32) * scale;
    for (i, slot) in lut.iter_mut().enumerate() {
        *slot = clamp_channel(i as f32 * scale + offset);
    }
    lut
}
