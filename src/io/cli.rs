//! Command-line interface for running plane command scripts

use crate::algorithm::Session;
use crate::io::command::Command;
use crate::io::error::{Result, WithContext};
use crate::io::progress::ProgressManager;
use crate::io::render::{format_dump, format_path, format_rules, format_tile, render_grid};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "tileplane")]
#[command(
    author,
    version,
    about = "Run tile plane commands from scripts or standard input"
)]
/// Command-line arguments for the command runner
pub struct Cli {
    /// Command scripts to run, each in a fresh session (reads stdin when none are given)
    #[arg(value_name = "SCRIPTS")]
    pub scripts: Vec<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.scripts.is_empty()
    }
}

/// Counts for one input run to completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands executed
    pub executed: usize,
    /// Lines rejected as invalid input
    pub rejected: usize,
    /// Whether input ended with `q`
    pub quit: bool,
}

/// Executes parsed commands against one session, writing results to `output`
pub struct CommandProcessor<W: Write> {
    session: Session,
    output: W,
}

impl<W: Write> CommandProcessor<W> {
    /// Create a processor with a fresh session
    pub fn new(output: W) -> Self {
        Self {
            session: Session::new(),
            output,
        }
    }

    /// The session commands act on
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Execute one command, returning false once input should stop
    ///
    /// # Errors
    ///
    /// Returns an error if writing the command's output fails or the grid
    /// is too large to draw
    pub fn execute(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Color {
                position,
                color,
                intensity,
            } => {
                self.session.color(position, &color, intensity);
            }
            Command::SwitchOff { position } => {
                self.session.switch_off(position);
            }
            Command::Rule {
                requirements,
                result,
            } => {
                self.session.add_rule(requirements, &result);
            }
            Command::ReorderRules => self.session.reorder_rules(),
            Command::PrintRules => {
                writeln!(self.output, "{}", format_rules(self.session.rules()))?;
            }
            Command::State { position } => {
                if let Some(tile) = self.session.plane().tile(position) {
                    writeln!(self.output, "{}", format_tile(tile))?;
                }
            }
            Command::BlockIntensity {
                position,
                homogeneous_only,
            } => {
                let total = self.session.block_intensity(position, homogeneous_only);
                writeln!(self.output, "{total}")?;
            }
            Command::Propagate { position } => {
                self.session.propagate(position);
            }
            Command::PropagateBlock { position } => {
                self.session.propagate_block(position);
            }
            Command::Track { start, directions } => {
                if let Some(path) = self.session.walk_path(start, &directions) {
                    writeln!(self.output, "{}", format_path(&path))?;
                }
            }
            Command::ShortestPath { from, to } => {
                if let Some(length) = self.session.shortest_path_length(from, to) {
                    writeln!(self.output, "{length}")?;
                }
            }
            Command::Dump => {
                let dump = format_dump(self.session.plane());
                if !dump.is_empty() {
                    writeln!(self.output, "{dump}")?;
                }
            }
            Command::Draw => {
                let grid = render_grid(self.session.plane())?;
                if !grid.is_empty() {
                    writeln!(self.output, "{grid}")?;
                }
            }
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Parse and execute one line
    ///
    /// Blank lines do nothing and return true.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is invalid or writing output fails
    pub fn execute_line(&mut self, line: &str) -> Result<bool> {
        match Command::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(true),
        }
    }

    /// Execute every line of `input` until it ends or a `q` command
    ///
    /// Invalid lines are logged with their line number and skipped. Blank
    /// lines are not counted in the summary.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails
    pub fn run<R: BufRead>(&mut self, input: R, source: &Path) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line.with_path(source, "read")?;
            let number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            match self.execute_line(&line) {
                Ok(true) => summary.executed += 1,
                Ok(false) => {
                    summary.executed += 1;
                    summary.quit = true;
                    break;
                }
                Err(err) if err.is_input_error() => {
                    warn!(source = %source.display(), line = number, error = %err, "skipping invalid command");
                    summary.rejected += 1;
                }
                Err(err) => return Err(err),
            }
        }

        self.output.flush()?;
        Ok(summary)
    }
}

/// Runs the scripts named on the command line, or stdin when there are none
pub struct ScriptRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ScriptRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.scripts.len()));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run all inputs, writing command output to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if a script cannot be read or output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();

        if self.cli.scripts.is_empty() {
            let stdin = std::io::stdin();
            let mut processor = CommandProcessor::new(stdout.lock());
            let summary = processor.run(stdin.lock(), Path::new("<stdin>"))?;
            info!(
                executed = summary.executed,
                rejected = summary.rejected,
                "input finished"
            );
            return Ok(());
        }

        self.process_scripts(&mut stdout.lock())
    }

    /// Run each script in its own session, writing command output to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if a script cannot be read or output cannot be written
    pub fn process_scripts<W: Write>(&mut self, output: &mut W) -> Result<()> {
        for script in &self.cli.scripts {
            let content = std::fs::read_to_string(script).with_path(script, "read")?;

            if let Some(ref pm) = self.progress_manager {
                pm.start_script(script);
            }

            let mut processor = CommandProcessor::new(&mut *output);
            let summary = processor.run(content.as_bytes(), script)?;

            info!(
                script = %script.display(),
                executed = summary.executed,
                rejected = summary.rejected,
                "script finished"
            );

            if let Some(ref mut pm) = self.progress_manager {
                pm.finish_script(script, &summary);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }
}
