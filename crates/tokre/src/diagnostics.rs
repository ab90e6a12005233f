//! Rendering compile errors against the pattern text.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::CompileError;

/// Builder for rendering a [`CompileError`] with a caret under the failing
/// part of the pattern.
pub struct CompileErrorPrinter<'e, 's> {
    error: &'e CompileError,
    pattern: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> CompileErrorPrinter<'e, 's> {
    pub fn new(error: &'e CompileError) -> Self {
        Self {
            error,
            pattern: None,
            path: None,
            colored: false,
        }
    }

    pub fn pattern(mut self, pattern: &'s str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(pattern) = self.pattern else {
            return writeln!(w, "error: {}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let range = adjust_range(self.error.offset, self.error.end, pattern.len());
        let mut snippet = Snippet::source(pattern).line_start(1).annotation(
            AnnotationKind::Primary
                .span(range)
                .label(&self.error.message),
        );
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report = vec![Level::ERROR.primary_title(&self.error.message).element(snippet)];
        writeln!(w, "{}", renderer.render(&report))
    }
}

/// Widen empty spans to one character so the caret is visible, and clamp to
/// the pattern.
fn adjust_range(start: usize, end: usize, limit: usize) -> std::ops::Range<usize> {
    let start = start.min(limit);
    let end = end.min(limit);
    if start == end {
        return start..(start + 1).min(limit);
    }
    start..end
}

impl CompileError {
    pub fn printer(&self) -> CompileErrorPrinter<'_, '_> {
        CompileErrorPrinter::new(self)
    }
}

/// Render `error` under `pattern` in one call.
pub fn render_compile_error(pattern: &str, error: &CompileError, colored: bool) -> String {
    error.printer().pattern(pattern).colored(colored).render()
}
