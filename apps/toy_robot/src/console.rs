//! Text display for a controller: parses command lines, dispatches them and prints
//! whatever the controller reports.

use std::io::{BufRead, Write};

use anyhow::Context;
use crossbeam_channel::{unbounded, Receiver};
use robot_core::{dispatch_command, Controller};
use shared::protocol::{Command, RobotDescription};
use tracing::{debug, warn};

use crate::config::{ReportFormat, Settings};

pub struct Console<C, W> {
    controller: C,
    reports: Receiver<Vec<RobotDescription>>,
    output: W,
    format: ReportFormat,
    prefix: bool,
}

impl<C: Controller, W: Write> Console<C, W> {
    pub fn new(mut controller: C, output: W, settings: &Settings) -> Self {
        let (report_tx, reports) = unbounded();
        controller.set_on_report_callback(Box::new(move |robots| {
            if report_tx.send(robots).is_err() {
                warn!("console is gone; dropping report");
            }
        }));

        Self {
            controller,
            reports,
            output,
            format: settings.report_format,
            prefix: settings.report_prefix,
        }
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Returns whether the line was dispatched to the controller.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<bool> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(false);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!(%line, error = %err, "skipping unreadable command");
                return Ok(false);
            }
        };

        dispatch_command(&mut self.controller, command);
        self.render_reports()?;
        Ok(true)
    }

    /// Returns the number of commands dispatched.
    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<usize> {
        let mut dispatched = 0;
        for (index, line) in input.lines().enumerate() {
            let line = line.with_context(|| format!("failed to read input line {}", index + 1))?;
            if self.handle_line(&line)? {
                dispatched += 1;
            }
        }
        self.output.flush().context("failed to flush report output")?;
        Ok(dispatched)
    }

    fn render_reports(&mut self) -> anyhow::Result<()> {
        while let Ok(robots) = self.reports.try_recv() {
            debug!(robots = robots.len(), "rendering report");
            for robot in &robots {
                self.render(robot)?;
            }
        }
        Ok(())
    }

    fn render(&mut self, robot: &RobotDescription) -> anyhow::Result<()> {
        match self.format {
            ReportFormat::Text if self.prefix => writeln!(self.output, "Output: {robot}"),
            ReportFormat::Text => writeln!(self.output, "{robot}"),
            ReportFormat::Json => {
                let line = serde_json::to_string(robot).context("failed to encode report")?;
                writeln!(self.output, "{line}")
            }
        }
        .context("failed to write report")
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
