use crate::foundation::core::{BlurMode, ensure_non_negative};
use crate::foundation::error::{EaselError, EaselResult};
use crate::raster::composite::{premultiply, unpremultiply};
use crate::raster::surface::Surface;

/// Blur `surface` in place. `amount` is a box radius or a gaussian standard deviation.
///
/// Kernel radii are capped at the larger surface side; taps past that only resample clamped
/// edge pixels.
pub(crate) fn blur_surface(surface: &mut Surface, mode: BlurMode, amount: f64) -> EaselResult<()> {
    let amount = ensure_non_negative("blur amount", amount)?;
    let (w, h) = surface.size();
    let max_radius = f64::from(w.max(h));
    let kernel = match mode {
        BlurMode::Box => box_kernel_q16(amount.min(max_radius))?,
        BlurMode::Gaussian => {
            let radius = (amount * 3.0).ceil().min(max_radius) as u32;
            gaussian_kernel_q16(radius, amount)?
        }
    };
    if kernel.len() == 1 {
        return Ok(());
    }

    let mut premul = Vec::with_capacity(surface.as_raw().len());
    for px in surface.as_raw().chunks_exact(4) {
        premul.extend_from_slice(&premultiply([px[0], px[1], px[2], px[3]]));
    }
    let blurred = blur_rgba8_premul(&premul, w, h, &kernel)?;
    for (dst, src) in surface
        .raw_mut()
        .chunks_exact_mut(4)
        .zip(blurred.chunks_exact(4))
    {
        dst.copy_from_slice(&unpremultiply([src[0], src[1], src[2], src[3]]));
    }
    Ok(())
}

pub(crate) fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    kernel: &[u32],
) -> EaselResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| EaselError::invalid_geometry("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(EaselError::invalid_argument(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if kernel.len() <= 1 {
        return Ok(src.to_vec());
    }

    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, height, kernel);
    vertical_pass(&tmp, &mut out, width, height, kernel);
    Ok(out)
}

fn gaussian_kernel_q16(radius: u32, sigma: f64) -> EaselResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(EaselError::invalid_geometry("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let denom = 2.0 * sigma * sigma;
    let weights: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = f64::from(i);
            (-x * x / denom).exp()
        })
        .collect();
    quantize_q16(&weights)
}

/// Uniform window of width `2 * radius + 1`; a fractional radius gives the outermost taps a
/// partial weight.
fn box_kernel_q16(radius: f64) -> EaselResult<Vec<u32>> {
    let whole = radius.floor();
    let frac = radius - whole;
    let whole = whole as usize;
    if whole == 0 && frac <= 0.0 {
        return Ok(vec![1 << 16]);
    }

    let taps = whole
        .checked_mul(2)
        .and_then(|v| v.checked_add(1))
        .ok_or_else(|| EaselError::invalid_geometry("blur radius too large"))?;
    let mut weights = Vec::with_capacity(taps + 2);
    if frac > 0.0 {
        weights.push(frac);
    }
    weights.extend(std::iter::repeat_n(1.0, taps));
    if frac > 0.0 {
        weights.push(frac);
    }
    quantize_q16(&weights)
}

fn quantize_q16(weights_f: &[f64]) -> EaselResult<Vec<u32>> {
    let sum: f64 = weights_f.iter().sum();
    if sum <= 0.0 {
        return Err(EaselError::invalid_geometry("blur kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let new_mid = (i64::from(weights[mid]) + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blur.rs"]
mod tests;
