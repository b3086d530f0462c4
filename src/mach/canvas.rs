use crate::error;
use crate::lang::Error;
use chrono::NaiveDateTime;

type Result<T> = std::result::Result<T, Error>;

pub const DRAWING_SUFFIX: &str = "-drawing";

/// ## Drawing buffer
///
/// Serialized SVG elements collected between `DRAW START` and
/// `DRAW FINISH`. The root element is the first entry while open.

#[derive(Debug, Default)]
pub struct Canvas {
    elements: Vec<String>,
    open: bool,
}

impl Canvas {
    pub fn new() -> Canvas {
        Canvas::default()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn begin(&mut self, width: f64, height: f64) -> Result<()> {
        if self.open {
            return Err(error!(DrawingAlreadyStarted));
        }
        self.elements.clear();
        self.elements.push(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            width, height
        ));
        self.open = true;
        Ok(())
    }

    pub fn circle(&mut self, x: f64, y: f64, r: f64, color: &str, filled: bool) -> Result<()> {
        let color = color.to_ascii_lowercase();
        self.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" stroke="{}" fill="{}" />"#,
            x,
            y,
            r,
            color,
            fill(&color, filled)
        ))
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str) -> Result<()> {
        self.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" />"#,
            x1,
            y1,
            x2,
            y2,
            color.to_ascii_lowercase()
        ))
    }

    /// Any two opposite corners.
    pub fn rect(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: &str,
        filled: bool,
    ) -> Result<()> {
        let color = color.to_ascii_lowercase();
        self.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" stroke="{}" fill="{}" />"#,
            x1.min(x2),
            y1.min(y2),
            (x2 - x1).abs(),
            (y2 - y1).abs(),
            color,
            fill(&color, filled)
        ))
    }

    /// Closes the root element and hands back the whole document,
    /// leaving the canvas empty.
    pub fn finish(&mut self) -> Result<String> {
        if !self.open {
            return Err(error!(NoDrawingStarted));
        }
        self.elements.push("</svg>".to_string());
        let mut document = self.elements.join("\n");
        document.push('\n');
        self.clear();
        Ok(document)
    }

    fn push(&mut self, element: String) -> Result<()> {
        if !self.open {
            return Err(error!(NoDrawingStarted));
        }
        self.elements.push(element);
        Ok(())
    }
}

fn fill(color: &str, filled: bool) -> &str {
    if filled {
        color
    } else {
        "none"
    }
}

/// `<stem>-drawing_<YYYYmmdd-HHMMSS>.svg`
pub fn file_name(stem: &str, time: &NaiveDateTime) -> String {
    format!(
        "{}{}_{}.svg",
        stem,
        DRAWING_SUFFIX,
        time.format("%Y%m%d-%H%M%S")
    )
}
