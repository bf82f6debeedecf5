//! Minimal single-page PDF writer.
//!
//! The page is sized to the raster at 72 dpi (one pixel per point) and holds the
//! raster as one DCT-compressed image XObject, the same layout imaging tools use
//! when saving a bitmap as PDF.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::io::writers::jpeg::encode_rgb_jpeg;

struct PdfBuilder {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfBuilder {
    fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    /// Appends the next numbered object and returns its number.
    fn object(&mut self, body: &[u8]) -> usize {
        self.offsets.push(self.buf.len());
        let id = self.offsets.len();
        self.buf.extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
        id
    }

    fn stream(&mut self, dict: &str, data: &[u8]) -> usize {
        let mut body = format!("<< {} /Length {} >>\nstream\n", dict, data.len()).into_bytes();
        body.extend_from_slice(data);
        body.extend_from_slice(b"\nendstream");
        self.object(&body)
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        let xref_offset = self.buf.len();
        let size = self.offsets.len() + 1;

        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", size);
        for offset in &self.offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            size, root, xref_offset
        ));

        self.buf.extend_from_slice(xref.as_bytes());
        self.buf
    }
}

/// Wraps an already-encoded RGB JPEG of `cols` x `rows` into a one-page PDF document.
pub fn render_pdf(cols: u32, rows: u32, jpeg: &[u8]) -> Vec<u8> {
    let mut pdf = PdfBuilder::new();

    // Objects are numbered in insertion order: catalog, pages, page, image, contents.
    let catalog = pdf.object(b"<< /Type /Catalog /Pages 2 0 R >>");
    pdf.object(b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>");
    pdf.object(
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {w} {h}] \
             /Resources << /ProcSet [/PDF /ImageC] /XObject << /Im0 4 0 R >> >> \
             /Contents 5 0 R >>",
            w = cols,
            h = rows
        )
        .as_bytes(),
    );
    pdf.stream(
        &format!(
            "/Type /XObject /Subtype /Image /Width {} /Height {} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode",
            cols, rows
        ),
        jpeg,
    );
    let contents = format!("q {} 0 0 {} 0 0 cm /Im0 Do Q", cols, rows);
    pdf.stream("", contents.as_bytes());

    pdf.finish(catalog)
}

pub fn write_rgb_pdf(output: &Path, cols: u32, rows: u32, rgb_data: &[u8]) -> Result<()> {
    let jpeg = encode_rgb_jpeg(cols, rows, rgb_data)?;
    debug!("PDF image stream: {} bytes of JPEG", jpeg.len());

    let document = render_pdf(cols, rows, &jpeg);
    let file = File::create(output).map_err(Error::encode)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&document).map_err(Error::encode)?;
    writer.flush().map_err(Error::encode)?;
    Ok(())
}
