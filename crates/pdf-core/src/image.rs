//! Image handling for PDF documents

use crate::{PdfError, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use lopdf::{Dictionary, Object, Stream};
use std::io::{Cursor, Write};

impl From<image::ImageError> for PdfError {
    fn from(err: image::ImageError) -> Self {
        PdfError::ImageError(err.to_string())
    }
}

/// JPEG header info
#[derive(Debug, Clone, Copy)]
struct JpegInfo {
    width: u32,
    height: u32,
    num_components: u8,
}

/// Image XObject ready for PDF embedding
#[derive(Debug, Clone)]
pub struct ImageXObject {
    pub width: u32,
    pub height: u32,
    /// Color space ("DeviceRGB", "DeviceGray", "DeviceCMYK")
    pub color_space: &'static str,
    /// PDF filter ("DCTDecode" for JPEG, "FlateDecode" otherwise)
    pub filter: &'static str,
    /// Encoded sample data
    pub data: Vec<u8>,
    /// Flate-encoded 8-bit alpha channel, if the source had transparency
    pub soft_mask: Option<Vec<u8>>,
}

impl ImageXObject {
    /// Decode image file bytes into an XObject
    ///
    /// Baseline JPEGs are passed through untouched; every other format the
    /// `image` crate can read is decoded and re-encoded with FlateDecode.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if is_jpeg(data) {
            if let Ok(xobject) = Self::from_jpeg(data) {
                return Ok(xobject);
            }
        }
        Self::from_raster(data)
    }

    /// Create XObject from JPEG data without re-encoding
    pub fn from_jpeg(data: &[u8]) -> Result<Self> {
        let info = get_jpeg_info(data)?;

        let color_space = match info.num_components {
            1 => "DeviceGray",
            4 => "DeviceCMYK",
            _ => "DeviceRGB",
        };

        Ok(Self {
            width: info.width,
            height: info.height,
            color_space,
            filter: "DCTDecode",
            data: data.to_vec(),
            soft_mask: None,
        })
    }

    /// Decode any supported raster format, splitting out the alpha channel
    pub fn from_raster(data: &[u8]) -> Result<Self> {
        let image = ImageReader::new(Cursor::new(data))
            .with_guessed_format()?
            .decode()?;
        let (width, height) = image.dimensions();

        if width == 0 || height == 0 {
            return Err(PdfError::ImageError("Image has no pixels".to_string()));
        }

        let has_alpha = image.color().has_alpha();
        let is_gray = !image.color().has_color();

        let (samples, color_space) = if is_gray {
            (image.to_luma8().into_raw(), "DeviceGray")
        } else {
            (image.to_rgb8().into_raw(), "DeviceRGB")
        };

        let soft_mask = if has_alpha {
            Some(deflate(&alpha_channel(&image))?)
        } else {
            None
        };

        Ok(Self {
            width,
            height,
            color_space,
            filter: "FlateDecode",
            data: deflate(&samples)?,
            soft_mask,
        })
    }

    /// Convert to lopdf Stream object
    ///
    /// `smask` is the object reference of the already-added soft mask stream.
    pub fn to_pdf_stream(&self, smask: Option<lopdf::ObjectId>) -> Stream {
        let mut dict = image_dictionary(self.width, self.height, self.color_space, self.filter);
        if let Some(id) = smask {
            dict.set("SMask", Object::Reference(id));
        }
        Stream::new(dict, self.data.clone())
    }

    /// The alpha channel as a DeviceGray stream, if present
    pub fn soft_mask_stream(&self) -> Option<Stream> {
        self.soft_mask.as_ref().map(|mask| {
            let dict = image_dictionary(self.width, self.height, "DeviceGray", "FlateDecode");
            Stream::new(dict, mask.clone())
        })
    }
}

fn image_dictionary(width: u32, height: u32, color_space: &str, filter: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", width as i64);
    dict.set("Height", height as i64);
    dict.set("ColorSpace", Object::Name(color_space.as_bytes().to_vec()));
    dict.set("BitsPerComponent", 8_i64);
    dict.set("Filter", Object::Name(filter.as_bytes().to_vec()));
    dict
}

fn alpha_channel(image: &DynamicImage) -> Vec<u8> {
    image.to_rgba8().pixels().map(|p| p[3]).collect()
}

fn deflate(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

fn is_jpeg(data: &[u8]) -> bool {
    data.len() >= 3 && data[0] == 0xFF && data[1] == 0xD8 && data[2] == 0xFF
}

/// Read dimensions and component count from the first SOF segment
fn get_jpeg_info(data: &[u8]) -> Result<JpegInfo> {
    let mut i = 2;
    while i + 10 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }

        let marker = data[i + 1];

        if (0xC0..=0xCF).contains(&marker) && marker != 0xC4 && marker != 0xC8 && marker != 0xCC {
            let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
            let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
            let num_components = data[i + 9];
            return Ok(JpegInfo {
                width,
                height,
                num_components,
            });
        }

        let length = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
        if length < 2 {
            break;
        }
        i += 2 + length;
    }

    Err(PdfError::ImageError("Could not parse JPEG info".to_string()))
}

/// Generate operators to draw an image resource at position
///
/// `y` is the bottom edge in PDF coordinates.
pub fn generate_image_operators(
    image_name: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Vec<u8> {
    format!("q\n{width} 0 0 {height} {x} {y} cm\n/{image_name} Do\nQ\n").into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

    fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
        bytes
    }

    #[test]
    fn test_decode_png_rgb() {
        let png = encode(
            DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 3, Rgb([200, 10, 10]))),
            ImageFormat::Png,
        );

        let xobject = ImageXObject::decode(&png).unwrap();
        assert_eq!((xobject.width, xobject.height), (4, 3));
        assert_eq!(xobject.color_space, "DeviceRGB");
        assert_eq!(xobject.filter, "FlateDecode");
        assert!(xobject.soft_mask.is_none());
    }

    #[test]
    fn test_decode_png_with_alpha_keeps_mask() {
        let png = encode(
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 128]))),
            ImageFormat::Png,
        );

        let xobject = ImageXObject::decode(&png).unwrap();
        assert!(xobject.soft_mask.is_some());
        assert!(xobject.soft_mask_stream().is_some());
    }

    #[test]
    fn test_decode_jpeg_passthrough() {
        let jpeg = encode(
            DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 6, Rgb([0, 128, 255]))),
            ImageFormat::Jpeg,
        );

        let xobject = ImageXObject::decode(&jpeg).unwrap();
        assert_eq!((xobject.width, xobject.height), (8, 6));
        assert_eq!(xobject.filter, "DCTDecode");
        assert_eq!(xobject.data, jpeg);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = ImageXObject::decode(b"definitely not an image");
        assert!(matches!(result, Err(PdfError::ImageError(_))));
    }

    #[test]
    fn test_get_jpeg_info_too_short() {
        assert!(get_jpeg_info(&[0xFF, 0xD8, 0xFF]).is_err());
    }

    #[test]
    fn test_to_pdf_stream_with_smask() {
        let xobject = ImageXObject {
            width: 10,
            height: 20,
            color_space: "DeviceRGB",
            filter: "FlateDecode",
            data: vec![1, 2, 3],
            soft_mask: None,
        };

        let stream = xobject.to_pdf_stream(Some((7, 0)));
        assert_eq!(stream.dict.get(b"Width").unwrap().as_i64().unwrap(), 10);
        assert_eq!(stream.dict.get(b"SMask").unwrap().as_reference().unwrap(), (7, 0));
        assert_eq!(stream.content, vec![1, 2, 3]);
    }

    #[test]
    fn test_generate_image_operators() {
        let ops = generate_image_operators("Im1", 100.0, 200.0, 50.0, 75.0);
        let ops_str = String::from_utf8(ops).unwrap();
        assert_eq!(ops_str, "q\n50 0 0 75 100 200 cm\n/Im1 Do\nQ\n");
    }
}
