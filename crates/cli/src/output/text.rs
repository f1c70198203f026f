//! Text output formatter.
//!
//! ```text
//! <check-name>: FAIL
//!   <subject>: <violation type>
//!     <advice>
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::ViolationLimit;
use crate::check::{CheckOutput, CheckResult, Violation};
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor = StandardStream> {
    out: W,
    limit: ViolationLimit,
    violations_shown: usize,
    truncated: bool,
}

impl TextFormatter<StandardStream> {
    /// Create a text formatter writing to stdout.
    pub fn new(color_choice: ColorChoice, limit: ViolationLimit) -> Self {
        Self::with_writer(StandardStream::stdout(color_choice), limit)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    /// Create a text formatter writing to `out`.
    pub fn with_writer(out: W, limit: ViolationLimit) -> Self {
        Self {
            out,
            limit,
            violations_shown: 0,
            truncated: false,
        }
    }

    /// Write a single check result.
    /// Returns true if output was truncated.
    pub fn write_check(&mut self, result: &CheckResult) -> std::io::Result<bool> {
        if result.skipped {
            self.write_header(&result.name, "SKIP", &scheme::skip())?;
            if let Some(reason) = &result.error {
                writeln!(self.out, "  {}", reason)?;
            }
            return Ok(false);
        }

        if result.violations.is_empty() {
            return Ok(false); // Silent on pass
        }

        if result.warning {
            self.write_header(&result.name, "WARN", &scheme::warn())?;
        } else {
            self.write_header(&result.name, "FAIL", &scheme::fail())?;
        }

        for violation in &result.violations {
            if self.limit.reached(self.violations_shown) {
                self.truncated = true;
                return Ok(true);
            }
            self.write_violation(violation)?;
            self.violations_shown += 1;
        }

        Ok(false)
    }

    fn write_header(
        &mut self,
        name: &str,
        status: &str,
        color: &termcolor::ColorSpec,
    ) -> std::io::Result<()> {
        self.out.set_color(&scheme::check_name())?;
        write!(self.out, "{}", name)?;
        self.out.reset()?;

        write!(self.out, ": ")?;
        self.out.set_color(color)?;
        write!(self.out, "{}", status)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    fn write_violation(&mut self, v: &Violation) -> std::io::Result<()> {
        write!(self.out, "  ")?;

        if let Some(subject) = &v.subject {
            self.out.set_color(&scheme::subject())?;
            write!(self.out, "{}", subject)?;
            self.out.reset()?;
            write!(self.out, ": ")?;
        }

        writeln!(self.out, "{}", describe(v))?;
        writeln!(self.out, "    {}", v.advice)?;

        Ok(())
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        let ran: Vec<_> = output.checks.iter().filter(|c| !c.skipped).collect();
        let passed = ran.iter().filter(|c| c.passed).count();
        let failed = ran.len() - passed;
        let plural = if passed == 1 { "" } else { "s" };

        if failed == 0 {
            writeln!(self.out, "{} check{} passed", passed, plural)
        } else {
            writeln!(self.out, "{} check{} passed, {} failed", passed, plural, failed)
        }
    }

    /// Write truncation message if applicable.
    pub fn write_truncation_message(&mut self, total: usize) -> std::io::Result<()> {
        if let Some(limit) = self.limit.cap()
            && self.truncated
            && total > limit
        {
            writeln!(
                self.out,
                "Stopped after {} violations. Use --no-limit to see all.",
                limit
            )?;
        }
        Ok(())
    }

    /// Check if output was truncated.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Get the number of violations shown.
    pub fn violations_shown(&self) -> usize {
        self.violations_shown
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Brief description for a violation type.
fn describe(v: &Violation) -> String {
    let desc = match v.violation_type.as_str() {
        "invalid_branch" => "branch does not follow any branch syntax",
        "invalid_target_branch" => "not a valid pull request target",
        "detached_head" => "no branch checked out",
        other => other,
    };
    match &v.pattern {
        Some(pattern) => format!("{} (expected '{}')", desc, pattern),
        None => desc.to_string(),
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
