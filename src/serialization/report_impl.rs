//! Human-readable text reports.
//!
//! The format mirrors the files the pipeline historically produced: a `#`
//! header naming the automaton, then the five blocks, with one transition
//! line per `(origin, label, destination)` triple in sorted order.
//!
//! ```text
//! #DFA built by subset construction
//! Q: Dead, q0, q1, q2
//! Sigma: a, b
//! q0: q0
//! delta:
//!   (q0, a) -> q1
//!   (q0, b) -> q2
//! F: q1, q2
//! ```
//!
//! `Q:`, `Sigma:` and `F:` are comma-separated and may be empty. The epsilon
//! label is written as `e`, which only non-deterministic reports may contain.

use super::{AutomatonSerializer, Report, ReportError, ReportKind};
use std::io::{BufRead, BufReader, Read, Write};

/// Serializer for the five-block text report format.
pub struct TextReportSerializer;

impl AutomatonSerializer for TextReportSerializer {
    fn serialize<W: Write>(report: &Report, mut writer: W) -> Result<(), ReportError> {
        writeln!(writer, "#{}", report.kind.header())?;
        writeln!(writer, "Q: {}", report.states.join(", "))?;
        writeln!(
            writer,
            "Sigma: {}",
            report
                .alphabet
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        writeln!(writer, "q0: {}", report.initial)?;
        writeln!(writer, "delta:")?;
        for (from, label, to) in &report.transitions {
            writeln!(writer, "  ({from}, {label}) -> {to}")?;
        }
        writeln!(writer, "F: {}", report.accepting.join(", "))?;
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<Report, ReportError> {
        let mut lines = BufReader::new(reader).lines().enumerate();

        let kind_text = expect_line(&mut lines, "#")?;
        let kind = ReportKind::from_header(&kind_text).ok_or_else(|| ReportError::Parse {
            line: 1,
            message: format!("unknown report header `{kind_text}`"),
        })?;

        let states = split_list(&expect_line(&mut lines, "Q:")?);
        let alphabet = split_list(&expect_line(&mut lines, "Sigma:")?)
            .iter()
            .map(|text| {
                let mut symbols = text.chars();
                match (symbols.next(), symbols.next()) {
                    (Some(symbol), None) => Ok(symbol),
                    _ => Err(ReportError::InvalidAutomaton(format!(
                        "alphabet entry `{text}` is not a single symbol"
                    ))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let initial = expect_line(&mut lines, "q0:")?;
        expect_line(&mut lines, "delta:")?;

        let mut transitions = Vec::new();
        let mut accepting = Vec::new();
        for (index, line) in &mut lines {
            let line = line?;
            if let Some(rest) = line.strip_prefix("F:") {
                accepting = split_list(rest.trim());
                break;
            }
            transitions.push(parse_transition(line.trim(), index + 1)?);
        }

        Ok(Report {
            kind,
            states,
            alphabet,
            initial,
            transitions,
            accepting,
        })
    }
}

type NumberedLines<R> = std::iter::Enumerate<std::io::Lines<BufReader<R>>>;

fn expect_line<R: Read>(
    lines: &mut NumberedLines<R>,
    prefix: &str,
) -> Result<String, ReportError> {
    let (index, line) = lines.next().ok_or_else(|| ReportError::Parse {
        line: 0,
        message: format!("unexpected end of report, expected `{prefix}`"),
    })?;
    let line = line?;
    match line.strip_prefix(prefix) {
        Some(rest) => Ok(rest.trim().to_string()),
        None => Err(ReportError::Parse {
            line: index + 1,
            message: format!("expected a `{prefix}` line, found `{line}`"),
        }),
    }
}

fn split_list(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(|item| item.trim().to_string()).collect()
}

/// Parses one `  (origin, label) -> destination` line.
fn parse_transition(text: &str, line: usize) -> Result<(String, String, String), ReportError> {
    let malformed = || ReportError::Parse {
        line,
        message: format!("expected `(origin, label) -> destination`, found `{text}`"),
    };

    let (left, destination) = text.split_once("->").ok_or_else(malformed)?;
    let left = left.trim();
    let inner = left
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;
    // The label never contains a comma, so split at the last one to keep
    // origin names with commas impossible rather than silently truncated.
    let (origin, label) = inner.rsplit_once(',').ok_or_else(malformed)?;

    Ok((
        origin.trim().to_string(),
        label.trim().to_string(),
        destination.trim().to_string(),
    ))
}
