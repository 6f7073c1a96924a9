use crate::foundation::error::{EaselError, EaselResult};
use crate::foundation::math::mul_div255;
use crate::raster::surface::Surface;

pub(crate) type PremulRgba8 = [u8; 4];

pub(crate) fn premultiply(px: [u8; 4]) -> PremulRgba8 {
    let [r, g, b, a] = px;
    let a16 = u16::from(a);
    [
        mul_div255(u16::from(r), a16),
        mul_div255(u16::from(g), a16),
        mul_div255(u16::from(b), a16),
        a,
    ]
}

pub(crate) fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = px[3];
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return px;
    }
    let a32 = u32::from(a);
    let un = |c: u8| -> u8 { ((u32::from(c) * 255 + a32 / 2) / a32).min(255) as u8 };
    [un(px[0]), un(px[1]), un(px[2]), a]
}

pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

/// Source-over for straight-alpha pixels.
pub(crate) fn over_straight(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    match (dst[3], src[3]) {
        (_, 0) => dst,
        (_, 255) | (0, _) => src,
        _ => unpremultiply(over(premultiply(dst), premultiply(src))),
    }
}

/// Per-channel linear interpolation, `t = 0` gives `a`, `t = 1` gives `b`.
pub(crate) fn crossfade(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    let tt = ((t * 255.0).round() as i32).clamp(0, 255) as u16;
    let it = 255u16 - tt;

    let mut out = [0u8; 4];
    for i in 0..4 {
        let av = mul_div255(u16::from(a[i]), it);
        let bv = mul_div255(u16::from(b[i]), tt);
        out[i] = av.saturating_add(bv);
    }
    out
}

/// Interpolate two equally sized straight-alpha buffers into a new one.
pub(crate) fn crossfade_buffers(a: &[u8], b: &[u8], t: f32) -> EaselResult<Vec<u8>> {
    if a.len() != b.len() || !a.len().is_multiple_of(4) {
        return Err(EaselError::invalid_argument(
            "crossfade expects equal-length rgba8 buffers",
        ));
    }
    let mut out = Vec::with_capacity(a.len());
    for (pa, pb) in a.chunks_exact(4).zip(b.chunks_exact(4)) {
        out.extend_from_slice(&crossfade(
            [pa[0], pa[1], pa[2], pa[3]],
            [pb[0], pb[1], pb[2], pb[3]],
            t,
        ));
    }
    Ok(out)
}

/// Composite a premultiplied scratch buffer of the same size over a straight-alpha surface.
pub(crate) fn over_premul_onto(dst: &mut Surface, src_premul: &[u8]) -> EaselResult<()> {
    let raw = dst.raw_mut();
    if raw.len() != src_premul.len() {
        return Err(EaselError::invalid_argument(
            "overlay buffer does not match surface size",
        ));
    }
    for (d, s) in raw.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let s = [s[0], s[1], s[2], s[3]];
        match s[3] {
            0 => {}
            255 => d.copy_from_slice(&s),
            _ => {
                let out = over(premultiply([d[0], d[1], d[2], d[3]]), s);
                d.copy_from_slice(&unpremultiply(out));
            }
        }
    }
    Ok(())
}

/// Alpha-over `src` onto `dst` with its top-left corner at `(x, y)`; off-surface parts clip.
pub(crate) fn paste_at(dst: &mut Surface, src: &Surface, x: i64, y: i64) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add(sw).min(dw);
    let y1 = y.saturating_add(sh).min(dh);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let src_raw = src.as_raw();
    let dst_raw = dst.raw_mut();
    for dy in y0..y1 {
        let sy = dy - y;
        for dx in x0..x1 {
            let sx = dx - x;
            let si = ((sy * sw + sx) * 4) as usize;
            let di = ((dy * dw + dx) * 4) as usize;
            let s = [
                src_raw[si],
                src_raw[si + 1],
                src_raw[si + 2],
                src_raw[si + 3],
            ];
            let d = [
                dst_raw[di],
                dst_raw[di + 1],
                dst_raw[di + 2],
                dst_raw[di + 3],
            ];
            dst_raw[di..di + 4].copy_from_slice(&over_straight(d, s));
        }
    }
}

/// Scale alpha by `coverage` (one byte per pixel); fully masked pixels become transparent black.
pub(crate) fn apply_alpha_mask(surface: &mut Surface, coverage: &[u8]) -> EaselResult<()> {
    let raw = surface.raw_mut();
    if raw.len() != coverage.len() * 4 {
        return Err(EaselError::invalid_argument(
            "mask does not match surface size",
        ));
    }
    for (px, &c) in raw.chunks_exact_mut(4).zip(coverage) {
        let a = mul_div255(u16::from(px[3]), u16::from(c));
        if a == 0 {
            px.copy_from_slice(&[0, 0, 0, 0]);
        } else {
            px[3] = a;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
