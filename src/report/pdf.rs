// src/report/pdf.rs
//! Minimal single-font-family PDF 1.4 writer.
//!
//! Pages are A4 portrait, content streams are stored uncompressed and the
//! three standard Helvetica faces are referenced rather than embedded. Every
//! page gets the document title as a header and a "Page N" footer.

use std::io::{self, Write};

const MM: f32 = 72.0 / 25.4;
const PAGE_WIDTH: f32 = 210.0 * MM;
const PAGE_HEIGHT: f32 = 297.0 * MM;
const MARGIN: f32 = 10.0 * MM;
const CELL_PADDING: f32 = 1.0 * MM;
const BREAK_MARGIN: f32 = 20.0 * MM;
const FOOTER_OFFSET: f32 = 15.0 * MM;

// Average Helvetica advance width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
    Italic,
}

impl Font {
    const ALL: [Font; 3] = [Font::Regular, Font::Bold, Font::Italic];

    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
            Font::Italic => "F3",
        }
    }

    fn base_font(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
            Font::Italic => "Helvetica-Oblique",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug)]
pub struct PdfWriter {
    title: String,
    pages: Vec<Vec<u8>>,
    // Distance from the top edge of the current page, in points.
    cursor: f32,
    font: Font,
    size: f32,
}

impl PdfWriter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
            cursor: MARGIN,
            font: Font::Regular,
            size: 12.0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn set_font(&mut self, font: Font, size: f32) {
        self.font = font;
        self.size = size;
    }

    pub fn add_page(&mut self) -> io::Result<()> {
        self.pages.push(Vec::new());
        self.cursor = MARGIN;

        let (font, size) = (self.font, self.size);
        self.set_font(Font::Bold, 15.0);
        let title = self.title.clone();
        self.draw_cell(&title, 10.0, Align::Center)?;
        self.ln(10.0);
        self.set_font(font, size);
        Ok(())
    }

    /// Writes one line of text in a cell `height_mm` tall and moves below it,
    /// starting a new page first when the cell would cross the bottom margin.
    pub fn cell(&mut self, text: &str, height_mm: f32, align: Align) -> io::Result<()> {
        if self.pages.is_empty() || self.cursor + height_mm * MM > PAGE_HEIGHT - BREAK_MARGIN {
            self.add_page()?;
        }
        self.draw_cell(text, height_mm, align)
    }

    pub fn ln(&mut self, height_mm: f32) {
        self.cursor += height_mm * MM;
    }

    pub fn finish(mut self) -> io::Result<Vec<u8>> {
        if self.pages.is_empty() {
            self.add_page()?;
        }
        self.write_footers()?;
        self.serialize()
    }

    fn draw_cell(&mut self, text: &str, height_mm: f32, align: Align) -> io::Result<()> {
        let page = self
            .pages
            .len()
            .checked_sub(1)
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "no page to draw on"))?;
        self.draw_on(page, text, height_mm, align)
    }

    fn draw_on(&mut self, page: usize, text: &str, height_mm: f32, align: Align) -> io::Result<()> {
        let height = height_mm * MM;
        let encoded = encode_win_ansi(text);
        let width = encoded.len() as f32 * self.size * AVG_GLYPH_WIDTH;
        let x = match align {
            Align::Left => MARGIN + CELL_PADDING,
            Align::Center => MARGIN + ((PAGE_WIDTH - 2.0 * MARGIN) - width).max(0.0) / 2.0,
        };
        let baseline = self.cursor + height / 2.0 + 0.3 * self.size;
        let y = PAGE_HEIGHT - baseline;

        let (font, size) = (self.font, self.size);
        let content = &mut self.pages[page];
        write!(content, "BT /{} {:.2} Tf {:.2} {:.2} Td (", font.resource(), size, x, y)?;
        content.extend_from_slice(&escape(&encoded));
        content.extend_from_slice(b") Tj ET\n");

        self.cursor += height;
        Ok(())
    }

    fn write_footers(&mut self) -> io::Result<()> {
        let (font, size) = (self.font, self.size);
        self.set_font(Font::Italic, 8.0);
        for page in 0..self.pages.len() {
            self.cursor = PAGE_HEIGHT - FOOTER_OFFSET;
            self.draw_on(page, &format!("Page {}", page + 1), 10.0, Align::Center)?;
        }
        self.set_font(font, size);
        Ok(())
    }

    fn serialize(&self) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut offsets = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n");

        let first_page_obj = 3 + Font::ALL.len();
        let kids = (0..self.pages.len())
            .map(|i| format!("{} 0 R", first_page_obj + 2 * i))
            .collect::<Vec<_>>()
            .join(" ");

        write_object(&mut out, &mut offsets, b"<< /Type /Catalog /Pages 2 0 R >>")?;
        write_object(
            &mut out,
            &mut offsets,
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, self.pages.len()).as_bytes(),
        )?;
        for font in Font::ALL {
            write_object(
                &mut out,
                &mut offsets,
                format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                    font.base_font()
                )
                .as_bytes(),
            )?;
        }

        let font_resources = Font::ALL
            .iter()
            .enumerate()
            .map(|(i, font)| format!("/{} {} 0 R", font.resource(), 3 + i))
            .collect::<Vec<_>>()
            .join(" ");

        for (i, content) in self.pages.iter().enumerate() {
            let content_obj = first_page_obj + 2 * i + 1;
            write_object(
                &mut out,
                &mut offsets,
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources << /Font << {} >> >> /Contents {} 0 R >>",
                    PAGE_WIDTH, PAGE_HEIGHT, font_resources, content_obj
                )
                .as_bytes(),
            )?;

            let mut stream = Vec::with_capacity(content.len() + 32);
            write!(stream, "<< /Length {} >>\nstream\n", content.len())?;
            stream.extend_from_slice(content);
            stream.extend_from_slice(b"\nendstream");
            write_object(&mut out, &mut offsets, &stream)?;
        }

        let xref_offset = out.len();
        write!(out, "xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1)?;
        for offset in &offsets {
            write!(out, "{:010} 00000 n \n", offset)?;
        }
        write!(
            out,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            xref_offset
        )?;
        Ok(out)
    }
}

fn write_object(out: &mut Vec<u8>, offsets: &mut Vec<usize>, body: &[u8]) -> io::Result<()> {
    offsets.push(out.len());
    write!(out, "{} 0 obj\n", offsets.len())?;
    out.extend_from_slice(body);
    out.extend_from_slice(b"\nendobj\n");
    Ok(())
}

// WinAnsiEncoding codes 0x80..=0x9F; the rest of the upper half matches Latin-1.
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('\u{20AC}', 0x80), ('\u{201A}', 0x82), ('\u{0192}', 0x83), ('\u{201E}', 0x84),
    ('\u{2026}', 0x85), ('\u{2020}', 0x86), ('\u{2021}', 0x87), ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89), ('\u{0160}', 0x8A), ('\u{2039}', 0x8B), ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E), ('\u{2018}', 0x91), ('\u{2019}', 0x92), ('\u{201C}', 0x93),
    ('\u{201D}', 0x94), ('\u{2022}', 0x95), ('\u{2013}', 0x96), ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98), ('\u{2122}', 0x99), ('\u{0161}', 0x9A), ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C), ('\u{017E}', 0x9E), ('\u{0178}', 0x9F),
];

/// Maps text onto the fonts' WinAnsiEncoding. Anything without a code,
/// control characters included, becomes `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            0x20..=0x7E | 0xA0..=0xFF => u32::from(c) as u8,
            _ => WIN_ANSI_HIGH
                .iter()
                .find(|(ch, _)| *ch == c)
                .map_or(b'?', |&(_, code)| code),
        })
        .collect()
}

fn escape(bytes: &[u8]) -> Vec<u8> {
    let mut escaped = Vec::with_capacity(bytes.len());
    for &b in bytes {
        if matches!(b, b'\\' | b'(' | b')') {
            escaped.push(b'\\');
        }
        escaped.push(b);
    }
    escaped
}
