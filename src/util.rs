pub(crate) fn normalize_rgba_color(color: &[u8; 4]) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        color[3] as f32 / 255.0,
    ]
}

#[inline(always)]
pub(crate) fn srgb_to_linear(value: f32) -> f32 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts a normalized sRGB color to linear space. The swapchain format is
/// an `*Srgb` one, so fragment outputs must be linear; alpha stays as-is.
pub(crate) fn rgba_to_linear(rgba: [f32; 4]) -> [f32; 4] {
    let [r, g, b, a] = rgba;
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
}

#[inline(always)]
pub(crate) fn to_logical(physical_size: (u32, u32), scale_factor: f64) -> (f32, f32) {
    let (physical_width, physical_height) = physical_size;
    let logical_width = physical_width as f64 / scale_factor;
    let logical_height = physical_height as f64 / scale_factor;
    (logical_width as f32, logical_height as f32)
}

/// Maps a logical-pixel position to normalized device coordinates.
#[inline(always)]
pub(crate) fn to_ndc(
    logical: (f32, f32),
    canvas_physical_size: (u32, u32),
    scale_factor: f32,
) -> [f32; 2] {
    let x = 2.0 * logical.0 * scale_factor / canvas_physical_size.0 as f32 - 1.0;
    let y = 1.0 - 2.0 * logical.1 * scale_factor / canvas_physical_size.1 as f32;
    [x, y]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners() {
        let size = (800, 600);
        assert_eq!(to_ndc((0.0, 0.0), size, 1.0), [-1.0, 1.0]);
        assert_eq!(to_ndc((800.0, 600.0), size, 1.0), [1.0, -1.0]);
        assert_eq!(to_ndc((400.0, 300.0), size, 1.0), [0.0, 0.0]);
    }

    #[test]
    fn logical_size_accounts_for_scale() {
        assert_eq!(to_logical((1600, 1200), 2.0), (800.0, 600.0));
    }
}
