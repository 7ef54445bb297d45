//! Rendering a [`CheckReport`] as pretty printed JSON

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

use crate::domain::CheckReport;

const INDENT: &[u8] = b"    ";

/// Render the report as a JSON object with 4-space indentation, keys in
/// report order.
pub fn render(report: &CheckReport) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(64 + report.len() * 32);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    report.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the rendered report plus a trailing newline.
pub fn write_report<W: Write>(report: &CheckReport, out: &mut W) -> std::io::Result<()> {
    let rendered = render(report).map_err(std::io::Error::from)?;
    writeln!(out, "{rendered}")?;
    out.flush()
}

/// Print the report to standard output
pub fn print_report(report: &CheckReport) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_report(report, &mut lock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_four_space_indent() {
        let mut report = CheckReport::default();
        report.record("a[href]", true);
        report.record("h1", false);
        report.record("title", true);

        let expected = "{\n    \"a[href]\": true,\n    \"h1\": false,\n    \"title\": true\n}";
        assert_eq!(render(&report).unwrap(), expected);
    }

    #[test]
    fn test_render_empty_report() {
        assert_eq!(render(&CheckReport::default()).unwrap(), "{}");
    }

    #[test]
    fn test_render_escapes_quotes_in_selectors() {
        let mut report = CheckReport::default();
        report.record(r#"a[href="x"]"#, false);
        assert_eq!(render(&report).unwrap(), "{\n    \"a[href=\\\"x\\\"]\": false\n}");
    }

    #[test]
    fn test_write_report_appends_newline() {
        let mut report = CheckReport::default();
        report.record("p", false);

        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n    \"p\": false\n}\n");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_report_surfaces_write_errors() {
        let mut report = CheckReport::default();
        report.record("p", true);

        let err = write_report(&report, &mut FailingWriter).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
