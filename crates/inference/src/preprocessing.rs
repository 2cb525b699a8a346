use capture::{Frame, PixelFormat};
use fast_image_resize::{
    FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer,
    images::{Image, ImageRef},
};
use ndarray::{Array, IxDyn};

/// Turns a captured frame into the model's input batch: RGB, resized to the
/// input size (no letterboxing - the models here are trained on plain
/// resizes), scaled to [0,1], NCHW.
pub struct Preprocessor {
    pub input_size: (u32, u32),
}

impl Preprocessor {
    pub fn new(input_size: (u32, u32)) -> Self {
        Self { input_size }
    }

    pub fn prepare(&self, frame: &Frame) -> anyhow::Result<Array<f32, IxDyn>> {
        let expected =
            frame.width as usize * frame.height as usize * frame.format.bytes_per_pixel();
        if frame.pixels.len() != expected {
            anyhow::bail!(
                "Buffer size mismatch: expected {}, got {} bytes",
                expected,
                frame.pixels.len()
            );
        }

        let rgb = match frame.format {
            PixelFormat::Rgb8 => frame.pixels.clone(),
            PixelFormat::Bgra8 => bgra_to_rgb(&frame.pixels),
        };

        let resized = self.resize(&rgb, frame.width, frame.height)?;

        Ok(normalize(resized.buffer(), self.input_size))
    }

    fn resize(&self, rgb: &[u8], width: u32, height: u32) -> anyhow::Result<Image<'static>> {
        let src = ImageRef::new(width, height, rgb, PixelType::U8x3)?;
        let mut resized = Image::new(self.input_size.0, self.input_size.1, PixelType::U8x3);

        Resizer::new().resize(
            &src,
            &mut resized,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear)),
        )?;

        Ok(resized)
    }
}

fn bgra_to_rgb(bgra: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(bgra.len() / 4 * 3);
    for px in bgra.chunks_exact(4) {
        rgb.extend_from_slice(&[px[2], px[1], px[0]]);
    }
    rgb
}

fn normalize(rgb: &[u8], (width, height): (u32, u32)) -> Array<f32, IxDyn> {
    let width = width as usize;
    let height = height as usize;
    let spatial = width * height;

    let mut output = vec![0.0f32; 3 * spatial];
    for (i, px) in rgb.chunks_exact(3).enumerate() {
        output[i] = px[0] as f32 / 255.0;
        output[i + spatial] = px[1] as f32 / 255.0;
        output[i + 2 * spatial] = px[2] as f32 / 255.0;
    }

    Array::from_shape_vec(IxDyn(&[1, 3, height, width]), output)
        .expect("buffer length matches shape")
}
