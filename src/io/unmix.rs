//! Reader for IRM unmixing parameter reports.
//!
//! The report is a fixed line grammar:
//!
//! ```text
//!  True SIRM=   1.234E-05
//! <one ignored line>
//!  Component 1
//!  Abs Cont=   8.9E-06
//!  Rel Cont=  0.72   Mean=  1.58   DP=  0.31
//! <one skipped line>
//!  Component 2
//!  ...
//! ```
//!
//! Parsing is a line-by-line state machine. The component list ends at end of
//! input or at the first line (in component position) that does not start with
//! `" Component"`. Anything else out of place fails the whole read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::domain::base_name;
use crate::error::{AppError, ParseError};
use crate::models::{ClgCurveModel, GaussianComponent};

const SIRM_PATTERN: &str = "` True SIRM= <number>`";
const ABS_PATTERN: &str = "` Abs Cont= <number>`";
const REL_PATTERN: &str = "` Rel Cont= <number> Mean= <number> DP= <number>`";
const COMPONENT_PREFIX: &str = " Component";

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    ExpectSirm,
    ExpectSeparator,
    ExpectComponentOrEnd,
    ExpectAbsCont,
    ExpectRelContMeanDp { abs: f64 },
    ExpectBlank,
}

/// Read a parameter report from disk. The model is named after the file.
pub fn read_curve_file(path: &Path) -> Result<ClgCurveModel, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve file '{}': {e}", path.display())))?;
    let name = base_name(path).unwrap_or_else(|| path.display().to_string());

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line
            .map_err(|e| AppError::new(2, format!("Failed to read curve file '{}': {e}", path.display())))?;
        lines.push(line);
    }

    let model = parse_curve_report(path, &name, lines.iter().map(String::as_str))?;
    log::info!(
        "read curve '{}' from '{}': SIRM={:e}, {} component(s)",
        model.name(),
        path.display(),
        model.sirm(),
        model.components().len()
    );
    Ok(model)
}

/// Parse report lines (without line terminators) into a model called `name`.
///
/// `path` is only used to label errors.
pub fn parse_curve_report<'a>(
    path: &Path,
    name: &str,
    lines: impl IntoIterator<Item = &'a str>,
) -> Result<ClgCurveModel, ParseError> {
    let fail = |line: usize, expected: &'static str, found: &str| ParseError {
        path: PathBuf::from(path),
        line,
        expected,
        found: found.to_string(),
    };

    let mut state = State::ExpectSirm;
    let mut sirm = 0.0;
    let mut components = Vec::new();
    let mut last_line = 0;

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        log::debug!("line {line_no}: {state:?}");

        state = match state {
            State::ExpectSirm => {
                let [value] = labelled_numbers(line, &["True SIRM="], false)
                    .ok_or_else(|| fail(line_no, SIRM_PATTERN, line))?;
                sirm = value;
                State::ExpectSeparator
            }
            State::ExpectSeparator => State::ExpectComponentOrEnd,
            State::ExpectComponentOrEnd => {
                if !line.starts_with(COMPONENT_PREFIX) {
                    break;
                }
                State::ExpectAbsCont
            }
            State::ExpectAbsCont => {
                let [abs] = labelled_numbers(line, &["Abs Cont="], false)
                    .ok_or_else(|| fail(line_no, ABS_PATTERN, line))?;
                State::ExpectRelContMeanDp { abs }
            }
            State::ExpectRelContMeanDp { abs } => {
                let [rel, mean, dp] = labelled_numbers(line, &["Rel Cont=", "Mean=", "DP="], true)
                    .ok_or_else(|| fail(line_no, REL_PATTERN, line))?;
                let component = GaussianComponent::new(abs, rel, mean, dp)
                    .map_err(|_| fail(line_no, "a positive `DP=` value", line))?;
                components.push(component);
                State::ExpectBlank
            }
            State::ExpectBlank => State::ExpectComponentOrEnd,
        };
    }

    // Running out of input is only acceptable between component blocks.
    match state {
        State::ExpectSirm => return Err(fail(last_line + 1, SIRM_PATTERN, "")),
        State::ExpectAbsCont => return Err(fail(last_line + 1, ABS_PATTERN, "")),
        State::ExpectRelContMeanDp { .. } => return Err(fail(last_line + 1, REL_PATTERN, "")),
        State::ExpectSeparator | State::ExpectComponentOrEnd | State::ExpectBlank => {}
    }

    Ok(ClgCurveModel::new(name, sirm, components))
}

/// Match ` <label0> +<n> +<label1> +<n> ...` and return the numbers.
///
/// The line starts with a single space, labels are matched exactly and each is
/// followed by one or more spaces. With `to_end`, only whitespace may follow the
/// last number; otherwise the remainder of the line is ignored.
fn labelled_numbers<const N: usize>(line: &str, labels: &[&str; N], to_end: bool) -> Option<[f64; N]> {
    let mut rest = line.strip_prefix(' ')?;
    let mut out = [0.0; N];

    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            rest = skip_spaces(rest)?;
        }
        rest = rest.strip_prefix(*label)?;
        rest = skip_spaces(rest)?;

        let end = rest.find(|c: char| !is_number_char(c)).unwrap_or(rest.len());
        out[i] = rest[..end].parse().ok()?;
        rest = &rest[end..];
    }

    if to_end && !rest.trim().is_empty() {
        return None;
    }
    Some(out)
}

/// Strip one or more leading spaces; `None` if there are none.
fn skip_spaces(s: &str) -> Option<&str> {
    let trimmed = s.trim_start_matches(' ');
    (trimmed.len() < s.len()).then_some(trimmed)
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}
