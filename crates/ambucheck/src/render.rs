//! PDF serialization of a laid-out [`Document`].
//!
//! The writer emits a minimal PDF 1.7 file: catalog, page tree, one content
//! stream per page, the two standard Helvetica fonts (not embedded, WinAnsi
//! encoded) and an image XObject per signature. Signature transparency is
//! carried by a grayscale soft mask.

use std::borrow::Cow;
use std::io::Write;

use chrono::{Datelike, NaiveDate};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::{Content, Date, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::font::StandardFont;
use crate::layout::geometry::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::layout::{Document, DrawOp, Page};
use crate::signature::{Signature, SignatureSlot, Signatures};
use crate::text::encode_win_ansi;

/// Producer string written to the document info dictionary.
pub const PRODUCER: &str = concat!("ambucheck ", env!("CARGO_PKG_VERSION"));

/// zlib compression level for streams.
const COMPRESSION_LEVEL: u32 = 6;

/// Settings for PDF output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Document title metadata.
    pub title: String,
    /// Day the document was produced.
    pub created: NaiveDate,
    /// Compress content and image streams.
    pub compress: bool,
}

/// Serialize a document to PDF bytes.
///
/// # Errors
///
/// Returns [`Error::Internal`] if the document draws a signature that was
/// not supplied or dimensions exceed PDF integer limits.
pub fn render(
    document: &Document,
    signatures: &Signatures,
    options: &RenderOptions,
) -> Result<Vec<u8>> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let info_id = alloc.bump();

    let font_ids: Vec<(StandardFont, Ref)> = StandardFont::ALL
        .into_iter()
        .map(|font| (font, alloc.bump()))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);

    for (font, id) in &font_ids {
        pdf.type1_font(*id)
            .base_font(Name(font.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let mut image_ids: Vec<(SignatureSlot, Ref)> = Vec::new();
    for slot in used_slots(document) {
        let signature = signatures.get(slot).ok_or_else(|| {
            Error::internal(format!("layout places the {slot} signature but none was loaded"))
        })?;
        let image_id = alloc.bump();
        write_image(&mut pdf, &mut alloc, image_id, signature, options.compress)?;
        image_ids.push((slot, image_id));
    }

    let page_ids: Vec<(Ref, Ref)> = document
        .pages
        .iter()
        .map(|_| (alloc.bump(), alloc.bump()))
        .collect();

    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(to_i32(page_ids.len())?);

    for (page, (page_id, content_id)) in document.pages.iter().zip(&page_ids) {
        let mut writer = pdf.page(*page_id);
        writer.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        writer.parent(page_tree_id);
        writer.contents(*content_id);

        let mut resources = writer.resources();
        {
            let mut fonts = resources.fonts();
            for (font, id) in &font_ids {
                fonts.pair(Name(font.resource_name().as_bytes()), *id);
            }
        }
        let page_images: Vec<&(SignatureSlot, Ref)> = image_ids
            .iter()
            .filter(|(slot, _)| page_draws(page, *slot))
            .collect();
        if !page_images.is_empty() {
            let mut x_objects = resources.x_objects();
            for (slot, id) in page_images {
                x_objects.pair(Name(image_name(*slot)), *id);
            }
        }
        resources.finish();
        writer.finish();

        let content = page_content(page);
        trace!(bytes = content.len(), "Page content stream");
        let data = encode(&content, options.compress)?;
        let mut stream = pdf.stream(*content_id, &data);
        if options.compress {
            stream.filter(Filter::FlateDecode);
        }
        stream.finish();
    }

    let mut info = pdf.document_info(info_id);
    info.title(TextStr(&options.title));
    info.producer(TextStr(PRODUCER));
    if let Some(date) = pdf_date(options.created) {
        info.creation_date(date);
    }
    info.finish();

    let bytes = pdf.finish();
    debug!(
        pages = document.page_count(),
        images = image_ids.len(),
        bytes = bytes.len(),
        "PDF rendered"
    );
    Ok(bytes)
}

/// Build the content stream for one page.
#[must_use]
pub fn page_content(page: &Page) -> Vec<u8> {
    let mut content = Content::new();
    content.set_stroke_rgb(0.0, 0.0, 0.0);
    content.set_fill_rgb(0.0, 0.0, 0.0);

    for op in &page.ops {
        match op {
            DrawOp::Text {
                text,
                x,
                y,
                size,
                font,
            } => {
                let encoded = encode_win_ansi(text);
                content.begin_text();
                content.set_font(Name(font.resource_name().as_bytes()), *size);
                content.next_line(*x, *y);
                content.show(Str(&encoded));
                content.end_text();
            }
            DrawOp::Line {
                from,
                to,
                thickness,
            } => {
                content.set_line_width(*thickness);
                content.move_to(from.x, from.y);
                content.line_to(to.x, to.y);
                content.stroke();
            }
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                border,
            } => {
                content.set_line_width(*border);
                content.rect(*x, *y, *width, *height);
                content.stroke();
            }
            DrawOp::Image {
                slot,
                x,
                y,
                width,
                height,
            } => {
                content.save_state();
                content.transform([*width, 0.0, 0.0, *height, *x, *y]);
                content.x_object(Name(image_name(*slot)));
                content.restore_state();
            }
        }
    }

    content.finish().to_vec()
}

fn write_image(
    pdf: &mut Pdf,
    alloc: &mut Ref,
    image_id: Ref,
    signature: &Signature,
    compress: bool,
) -> Result<()> {
    let width = to_i32(signature.width() as usize)?;
    let height = to_i32(signature.height() as usize)?;

    let mask_id = match signature.alpha() {
        Some(alpha) => {
            let mask_id = alloc.bump();
            let data = encode(alpha, compress)?;
            let mut mask = pdf.image_xobject(mask_id, &data);
            if compress {
                mask.filter(Filter::FlateDecode);
            }
            mask.width(width);
            mask.height(height);
            mask.color_space().device_gray();
            mask.bits_per_component(8);
            mask.finish();
            Some(mask_id)
        }
        None => None,
    };

    let data = encode(signature.rgb(), compress)?;
    let mut image = pdf.image_xobject(image_id, &data);
    if compress {
        image.filter(Filter::FlateDecode);
    }
    image.width(width);
    image.height(height);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    if let Some(mask_id) = mask_id {
        image.s_mask(mask_id);
    }
    image.finish();
    Ok(())
}

fn encode(data: &[u8], compress: bool) -> Result<Cow<'_, [u8]>> {
    if !compress {
        return Ok(Cow::Borrowed(data));
    }

    let mut encoder = ZlibEncoder::new(
        Vec::with_capacity((data.len() / 2).max(256)),
        Compression::new(COMPRESSION_LEVEL),
    );
    encoder.write_all(data)?;
    Ok(Cow::Owned(encoder.finish()?))
}

fn image_name(slot: SignatureSlot) -> &'static [u8] {
    match slot {
        SignatureSlot::Responsible => b"Im1",
        SignatureSlot::Coordinator => b"Im2",
    }
}

fn page_draws(page: &Page, slot: SignatureSlot) -> bool {
    page.ops
        .iter()
        .any(|op| matches!(op, DrawOp::Image { slot: s, .. } if *s == slot))
}

fn used_slots(document: &Document) -> Vec<SignatureSlot> {
    SignatureSlot::ALL
        .into_iter()
        .filter(|slot| document.pages.iter().any(|page| page_draws(page, *slot)))
        .collect()
}

fn pdf_date(date: NaiveDate) -> Option<Date> {
    let year = u16::try_from(date.year()).ok()?;
    let month = u8::try_from(date.month()).ok()?;
    let day = u8::try_from(date.day()).ok()?;
    Some(Date::new(year).month(month).day(day))
}

fn to_i32(value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::internal(format!("{value} exceeds PDF integer range")))
}
