use crate::clusterer::Palette;
use crate::error::QuantizeError;
use crate::raster::Image;

/// Palette index of the nearest center for every pixel
pub fn assign(image: &Image, palette: &Palette) -> Vec<usize> {
    image
        .pixels()
        .iter()
        .map(|pixel| palette.nearest(pixel).0)
        .collect()
}

/// Replace every pixel with its nearest palette color.
///
/// Centers are copied exactly; rounding to 8 bits happens only when the
/// image is encoded.
pub fn map_image(image: &Image, palette: &Palette) -> Result<Image, QuantizeError> {
    if palette.is_empty() {
        return Err(QuantizeError::PaletteTooSmall(0));
    }

    let clusters = palette.clusters();
    let pixels = assign(image, palette)
        .into_iter()
        .map(|index| clusters[index].center)
        .collect();

    Image::new(image.width(), image.height(), pixels)
}
