use std::io::Cursor;

use anyhow::Context;
use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{AnimationDecoder, Delay, Frame};

use crate::foundation::error::{EaselError, EaselResult};
use crate::raster::surface::Surface;

pub(crate) struct DecodedGif {
    pub(crate) frames: Vec<Surface>,
    pub(crate) delay_ms: u32,
}

pub(crate) fn decode(bytes: &[u8]) -> EaselResult<DecodedGif> {
    let decoder = GifDecoder::new(Cursor::new(bytes))
        .map_err(|e| EaselError::construction(format!("read gif header: {e}")))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| EaselError::construction(format!("decode gif frames: {e}")))?;

    let delay_ms = frames.first().map_or(0, |f| delay_to_ms(f.delay()));
    let frames = frames
        .into_iter()
        .map(|f| Surface::from_rgba_image(f.into_buffer()))
        .collect::<EaselResult<Vec<_>>>()?;
    if frames.is_empty() {
        return Err(EaselError::construction("gif has no frames"));
    }
    Ok(DecodedGif { frames, delay_ms })
}

pub(crate) fn encode<'a>(
    frames: impl IntoIterator<Item = &'a Surface>,
    delay_ms: u32,
) -> EaselResult<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut buf);
        encoder
            .set_repeat(Repeat::Infinite)
            .context("configure gif looping")?;
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        for (index, surface) in frames.into_iter().enumerate() {
            let frame = Frame::from_parts(surface.as_rgba_image().clone(), 0, 0, delay);
            encoder
                .encode_frame(frame)
                .with_context(|| format!("encode gif frame {index}"))?;
        }
    }
    Ok(buf)
}

fn delay_to_ms(delay: Delay) -> u32 {
    let (numer, denom) = delay.numer_denom_ms();
    if denom == 0 { 0 } else { numer / denom }
}
