//! Plain-text rendering of report sections.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::Write;

/// Writes titled sections, one entity or key/value pair per line.
///
/// Sections after the first are preceded by a blank line.
pub struct ReportWriter<'w, W: Write> {
    out: &'w mut W,
    sections: usize,
}

impl<'w, W: Write> ReportWriter<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self { out, sections: 0 }
    }

    /// Starts a new section with a `--- title ---` header.
    pub fn section(&mut self, title: &str) -> std::io::Result<()> {
        if self.sections > 0 {
            writeln!(self.out)?;
        }
        self.sections += 1;
        writeln!(self.out, "--- {title} ---")
    }

    /// Writes one line.
    pub fn line(&mut self, item: impl Display) -> std::io::Result<()> {
        writeln!(self.out, "{item}")
    }

    /// Writes each item on its own line.
    pub fn lines<I>(&mut self, items: I) -> std::io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for item in items {
            self.line(item)?;
        }
        Ok(())
    }

    /// Writes `key : value` lines in map order.
    pub fn entries<K: Display, V: Display>(&mut self, map: &BTreeMap<K, V>) -> std::io::Result<()> {
        for (key, value) in map {
            writeln!(self.out, "{key} : {value}")?;
        }
        Ok(())
    }

    /// Writes `key : [a, b, c]` lines in map order.
    pub fn list_entries<K: Display, V: Display>(
        &mut self,
        map: &BTreeMap<K, Vec<V>>,
    ) -> std::io::Result<()> {
        for (key, values) in map {
            writeln!(self.out, "{key} : {}", bracketed(values))?;
        }
        Ok(())
    }
}

/// Formats values as `[a, b, c]`.
pub fn bracketed<V: Display>(values: &[V]) -> String {
    let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}
