//! Signature images.
//!
//! Signatures arrive as PNG files drawn on a transparent canvas. They are
//! decoded once into separate colour and alpha planes, ready to become a
//! PDF image with a soft mask.

use std::path::Path;

use image::ImageFormat;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Which signing line an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureSlot {
    /// Left line: the responsible person on shift.
    Responsible,
    /// Right line: operations coordinator or general director.
    Coordinator,
}

impl SignatureSlot {
    /// Both slots, left to right.
    pub const ALL: [SignatureSlot; 2] = [Self::Responsible, Self::Coordinator];
}

impl std::fmt::Display for SignatureSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Responsible => write!(f, "responsible"),
            Self::Coordinator => write!(f, "coordinator"),
        }
    }
}

/// A decoded signature image.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
    alpha: Option<Vec<u8>>,
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signature")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_alpha", &self.alpha.is_some())
            .finish_non_exhaustive()
    }
}

impl Signature {
    /// Decode a PNG image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SignatureDecode`] if the bytes are not a valid PNG.
    pub fn from_png(bytes: &[u8]) -> Result<Self> {
        let rgba = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8();
        let (width, height) = rgba.dimensions();

        let pixel_count = (width as usize) * (height as usize);
        let mut rgb = Vec::with_capacity(pixel_count * 3);
        let mut alpha = Vec::with_capacity(pixel_count);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend_from_slice(&[r, g, b]);
            alpha.push(a);
        }

        let opaque = alpha.iter().all(|&a| a == u8::MAX);
        Ok(Self {
            width,
            height,
            rgb,
            alpha: (!opaque).then_some(alpha),
        })
    }

    /// Read and decode a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::SignatureRead {
            path: path.to_path_buf(),
            source,
        })?;
        let signature = Self::from_png(&bytes)?;
        debug!(
            "Loaded signature {} ({}x{})",
            path.display(),
            signature.width,
            signature.height
        );
        Ok(signature)
    }

    /// Pixel width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Colour samples, 8-bit RGB, row-major.
    #[must_use]
    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }

    /// Alpha samples, if any pixel is not fully opaque.
    #[must_use]
    pub fn alpha(&self) -> Option<&[u8]> {
        self.alpha.as_deref()
    }

    /// Whether nothing was drawn: every pixel fully transparent.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.width == 0
            || self.height == 0
            || self
                .alpha
                .as_ref()
                .is_some_and(|alpha| alpha.iter().all(|&a| a == 0))
    }

    /// Drawn size in points at the given scale.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn scaled(&self, scale: f32) -> (f32, f32) {
        (self.width as f32 * scale, self.height as f32 * scale)
    }
}

/// The two signatures placed at the end of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signatures {
    /// Responsible person on shift.
    pub responsible: Option<Signature>,
    /// Operations coordinator / general director.
    pub coordinator: Option<Signature>,
}

impl Signatures {
    /// Load both signatures from optional paths. Blank images are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a given file cannot be read or decoded.
    pub fn load(responsible: Option<&Path>, coordinator: Option<&Path>) -> Result<Self> {
        Ok(Self {
            responsible: load_slot(SignatureSlot::Responsible, responsible)?,
            coordinator: load_slot(SignatureSlot::Coordinator, coordinator)?,
        })
    }

    /// The signature for a slot.
    #[must_use]
    pub fn get(&self, slot: SignatureSlot) -> Option<&Signature> {
        match slot {
            SignatureSlot::Responsible => self.responsible.as_ref(),
            SignatureSlot::Coordinator => self.coordinator.as_ref(),
        }
    }

    /// Present signatures with their slots, left to right.
    pub fn iter(&self) -> impl Iterator<Item = (SignatureSlot, &Signature)> {
        SignatureSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|signature| (slot, signature)))
    }
}

fn load_slot(slot: SignatureSlot, path: Option<&Path>) -> Result<Option<Signature>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let signature = Signature::load(path)?;
    if signature.is_blank() {
        info!(%slot, "Signature image is blank, leaving the line empty");
        return Ok(None);
    }
    Ok(Some(signature))
}

/// Encode an RGBA test image as PNG.
#[cfg(test)]
pub(crate) fn png_fixture(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba(pixel));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
