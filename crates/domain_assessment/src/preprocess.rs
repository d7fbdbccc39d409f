//! ImageNet-style preprocessing for the classifier input tensor

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView};

use crate::error::AssessmentError;

/// Target length of the shorter side before cropping
pub const RESIZE_SHORTER_SIDE: u32 = 256;
/// Side of the square center crop fed to the model
pub const CROP_SIZE: u32 = 224;

pub const CHANNEL_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
pub const CHANNEL_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Shape of the NCHW input tensor
pub const INPUT_SHAPE: [i64; 4] = [1, 3, CROP_SIZE as i64, CROP_SIZE as i64];

/// Dimensions after scaling the shorter side to `RESIZE_SHORTER_SIDE`
///
/// Computed in `u64`; the result may exceed what is ever allocated since
/// only the crop window is resampled.
pub fn resized_dimensions(width: u32, height: u32) -> (u64, u64) {
    let side = u64::from(RESIZE_SHORTER_SIDE);
    let scale = |long: u32, short: u32| ((u64::from(long) * side) / u64::from(short)).max(side);
    if width <= height {
        (side, scale(height, width))
    } else {
        (scale(width, height), side)
    }
}

/// Source pixel region that lands in the center crop after resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Maps the centered `CROP_SIZE` square of the resized image back onto the source
pub fn crop_window(width: u32, height: u32) -> CropWindow {
    let (new_width, new_height) = resized_dimensions(width, height);
    let crop = u64::from(CROP_SIZE);

    let axis = |source: u32, resized: u64| {
        let source = u64::from(source);
        let offset = (resized - crop) / 2;
        let start = offset * source / resized;
        let length = (crop * source).div_ceil(resized).clamp(1, source - start);
        // both values are bounded by `source`, a u32
        (start as u32, length as u32)
    };

    let (x, crop_width) = axis(width, new_width);
    let (y, crop_height) = axis(height, new_height);
    CropWindow {
        x,
        y,
        width: crop_width,
        height: crop_height,
    }
}

/// Center-crops, resizes and normalizes an image into a flat NCHW buffer
///
/// Only the crop window is resampled, so memory use does not depend on the
/// aspect ratio of the upload.
pub fn to_input_tensor(image: &DynamicImage) -> Result<Vec<f32>, AssessmentError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(AssessmentError::InvalidImage(format!(
            "image has no pixels ({width}x{height})"
        )));
    }

    let window = crop_window(width, height);
    let cropped = imageops::crop_imm(image, window.x, window.y, window.width, window.height)
        .to_image();
    let resized = DynamicImage::ImageRgba8(cropped)
        .resize_exact(CROP_SIZE, CROP_SIZE, FilterType::Triangle)
        .to_rgb8();

    let plane = (CROP_SIZE * CROP_SIZE) as usize;
    let mut tensor = vec![0.0f32; 3 * plane];
    for (x, y, pixel) in resized.enumerate_pixels() {
        let offset = (y * CROP_SIZE + x) as usize;
        for channel in 0..3 {
            let value = f32::from(pixel[channel]) / 255.0;
            tensor[channel * plane + offset] =
                (value - CHANNEL_MEAN[channel]) / CHANNEL_STD[channel];
        }
    }
    Ok(tensor)
}
