//! Output trait for rendering reports.

/// Target output for reports.
///
/// Reports describe *what* to output; implementations decide *how*.
pub trait Output {
    /// Render an underlined heading.
    fn heading(&mut self, text: &str);

    /// Render an aligned label/value row.
    fn entry(&mut self, label: &str, value: &str);

    /// Render a line of free text.
    fn line(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

const LABEL_WIDTH: usize = 12;

/// Collects rendered lines into a string.
#[derive(Default)]
pub struct TextOutput {
    buf: String,
}

impl TextOutput {
    pub fn into_string(self) -> String {
        self.buf
    }

    fn push(&mut self, line: &str) {
        self.buf.push_str(line);
        self.buf.push('\n');
    }
}

impl Output for TextOutput {
    fn heading(&mut self, text: &str) {
        self.push(text);
        self.push(&"─".repeat(text.chars().count()));
    }

    fn entry(&mut self, label: &str, value: &str) {
        self.push(&format!("{:<width$}{}", label, value, width = LABEL_WIDTH));
    }

    fn line(&mut self, text: &str) {
        self.push(text);
    }

    fn newline(&mut self) {
        self.push("");
    }
}

/// Render a report into plain text.
pub fn render_to_string(report: &dyn Report) -> String {
    let mut out = TextOutput::default();
    report.render(&mut out);
    out.into_string()
}
