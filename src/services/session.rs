//! Line-oriented picker sessions.
//!
//! A session feeds commands to a [`ColorPicker`] and writes one record per
//! refresh, the way a front end would redraw its fields. Commands:
//!
//! ```text
//! rgb R G B            set all three channels
//! hex TEXT             set from a hex literal or color name
//! red|green|blue V     set one channel
//! hue H                select a hue, keeping saturation and lightness
//! saturation|sat S     set saturation
//! lightness|light L    set lightness
//! shade U V            pointer on the shade square (normalized, v=1 top)
//! strip V              pointer on the hue strip (normalized, v=1 top)
//! click X Y            pointer in screen coordinates, hit-tested
//! show                 print the current state
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Numbers that do not
//! parse are treated as NaN, which the picker ignores.

use crate::error::SessionError;
use crate::models::{AppConfig, WidgetConfig};
use crate::output::{refresh_line, OutputFormat, RefreshRecord};
use hsl_picker::{Channel, ColorPicker, Pointer, Snapshot};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

/// One parsed session command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Rgb(f64, f64, f64),
    Hex(String),
    Channel(Channel, f64),
    Hue(f64),
    Saturation(f64),
    Lightness(f64),
    Shade { u: f64, v: f64 },
    Strip { v: f64 },
    Click { x: f64, y: f64 },
    Show,
}

fn number(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}

fn expect_args(
    command: &'static str,
    args: &[&str],
    expected: usize,
) -> Result<(), SessionError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(SessionError::Arity {
            command,
            expected,
            got: args.len(),
        })
    }
}

impl FromStr for Command {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match name.to_lowercase().as_str() {
            "rgb" => {
                expect_args("rgb", &args, 3)?;
                Command::Rgb(number(args[0]), number(args[1]), number(args[2]))
            }
            // The hex argument may contain spaces, e.g. "rgb(1, 2, 3)".
            "hex" => {
                if rest.trim().is_empty() {
                    return Err(SessionError::Arity {
                        command: "hex",
                        expected: 1,
                        got: 0,
                    });
                }
                Command::Hex(rest.trim().to_string())
            }
            "red" | "r" => {
                expect_args("red", &args, 1)?;
                Command::Channel(Channel::Red, number(args[0]))
            }
            "green" | "g" => {
                expect_args("green", &args, 1)?;
                Command::Channel(Channel::Green, number(args[0]))
            }
            "blue" | "b" => {
                expect_args("blue", &args, 1)?;
                Command::Channel(Channel::Blue, number(args[0]))
            }
            "hue" | "h" => {
                expect_args("hue", &args, 1)?;
                Command::Hue(number(args[0]))
            }
            "saturation" | "sat" | "s" => {
                expect_args("saturation", &args, 1)?;
                Command::Saturation(number(args[0]))
            }
            "lightness" | "light" | "l" => {
                expect_args("lightness", &args, 1)?;
                Command::Lightness(number(args[0]))
            }
            "shade" => {
                expect_args("shade", &args, 2)?;
                Command::Shade {
                    u: number(args[0]),
                    v: number(args[1]),
                }
            }
            "strip" => {
                expect_args("strip", &args, 1)?;
                Command::Strip { v: number(args[0]) }
            }
            "click" => {
                expect_args("click", &args, 2)?;
                Command::Click {
                    x: number(args[0]),
                    y: number(args[1]),
                }
            }
            "show" => {
                expect_args("show", &args, 0)?;
                Command::Show
            }
            _ => return Err(SessionError::UnknownCommand(name.to_string())),
        };
        Ok(command)
    }
}

/// Counters reported when a session ends
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub refreshes: usize,
    pub errors: usize,
}

/// A picker driven by text commands
pub struct Session {
    picker: ColorPicker,
    widget: WidgetConfig,
    format: OutputFormat,
    /// Snapshots queued by the refresh observer, drained after each command
    pending: Rc<RefCell<Vec<Snapshot>>>,
}

impl Session {
    /// Session over a picker built from `config`
    pub fn new(config: &AppConfig, format: OutputFormat) -> Self {
        Self::with_picker(config.build_picker(), config.widget, format)
    }

    pub fn with_picker(
        mut picker: ColorPicker,
        widget: WidgetConfig,
        format: OutputFormat,
    ) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let queue = Rc::clone(&pending);
        picker.on_refresh(move |snapshot| queue.borrow_mut().push(*snapshot));
        Self {
            picker,
            widget,
            format,
            pending,
        }
    }

    pub fn picker(&self) -> &ColorPicker {
        &self.picker
    }

    /// Apply one command. Returns whether the picker refreshed.
    pub fn execute(&mut self, command: &Command) -> Result<bool, SessionError> {
        let refreshed = match *command {
            Command::Rgb(r, g, b) => self.picker.set_rgb(r, g, b),
            Command::Hex(ref text) => self.picker.set_hex(text)?,
            Command::Channel(channel, value) => self.picker.set_channel(channel, value),
            Command::Hue(value) => self.picker.set_hue(value),
            Command::Saturation(value) => self.picker.set_saturation(value),
            Command::Lightness(value) => self.picker.set_lightness(value),
            Command::Shade { u, v } => self.picker.set_from_pointer(Pointer::Shade { u, v }),
            Command::Strip { v } => self.picker.set_from_pointer(Pointer::Hue { v }),
            Command::Click { x, y } => match self.hit_test(x, y) {
                Some(pointer) => self.picker.set_from_pointer(pointer),
                None => {
                    tracing::trace!(x, y, "Click outside picker widgets");
                    false
                }
            },
            Command::Show => false,
        };
        Ok(refreshed)
    }

    fn hit_test(&self, x: f64, y: f64) -> Option<Pointer> {
        let WidgetConfig { shade, strip } = self.widget;
        if shade.contains(x, y) {
            Some(shade.shade_pointer(x, y))
        } else if strip.contains(x, y) {
            Some(strip.hue_pointer(y))
        } else {
            None
        }
    }

    /// Run a script, writing one record per refresh to `out`
    ///
    /// Command errors are written as `! line N: message` and counted; only
    /// I/O and serialization failures abort the run.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
    ) -> Result<SessionSummary, SessionError> {
        let mut summary = SessionSummary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let number = index + 1;
            let text = line.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            summary.commands += 1;
            let result = text
                .parse::<Command>()
                .and_then(|command| self.execute(&command).map(|_| command));

            match result {
                Ok(Command::Show) => self.write_record(number, &self.picker.snapshot(), out)?,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(line = number, %e, "Session command failed");
                    summary.errors += 1;
                    writeln!(out, "! line {number}: {e}")?;
                }
            }

            let refreshed: Vec<Snapshot> = self.pending.borrow_mut().drain(..).collect();
            summary.refreshes += refreshed.len();
            for snapshot in &refreshed {
                self.write_record(number, snapshot, out)?;
            }
        }

        tracing::debug!(
            commands = summary.commands,
            refreshes = summary.refreshes,
            errors = summary.errors,
            "Session finished"
        );
        Ok(summary)
    }

    fn write_record<W: Write>(
        &self,
        line: usize,
        snapshot: &Snapshot,
        out: &mut W,
    ) -> Result<(), SessionError> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{}", refresh_line(line, snapshot))?,
            OutputFormat::Json => {
                let fields = snapshot.fields();
                serde_json::to_writer(&mut *out, &RefreshRecord::new(line, &fields, snapshot))?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(script: &str) -> (SessionSummary, String, Session) {
        let mut session = Session::new(&AppConfig::default(), OutputFormat::Text);
        let mut out = Vec::new();
        let summary = session.run(script.as_bytes(), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("rgb 1 2 3".parse::<Command>().unwrap(), Command::Rgb(1.0, 2.0, 3.0));
        assert_eq!(
            "HEX rgb(1, 2, 3)".parse::<Command>().unwrap(),
            Command::Hex("rgb(1, 2, 3)".to_string())
        );
        assert_eq!(
            "sat 40".parse::<Command>().unwrap(),
            Command::Saturation(40.0)
        );
        assert_eq!(
            "b 9".parse::<Command>().unwrap(),
            Command::Channel(Channel::Blue, 9.0)
        );
        assert_eq!(
            "shade 0.5 1".parse::<Command>().unwrap(),
            Command::Shade { u: 0.5, v: 1.0 }
        );
        assert_eq!("show".parse::<Command>().unwrap(), Command::Show);
    }

    #[test]
    fn test_non_numeric_argument_becomes_nan() {
        match "hue abc".parse::<Command>().unwrap() {
            Command::Hue(value) => assert!(value.is_nan()),
            other => panic!("Expected Hue, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "paint 1".parse::<Command>(),
            Err(SessionError::UnknownCommand(name)) if name == "paint"
        ));
        assert!(matches!(
            "rgb 1 2".parse::<Command>(),
            Err(SessionError::Arity { command: "rgb", expected: 3, got: 2 })
        ));
        assert!(matches!(
            "hex".parse::<Command>(),
            Err(SessionError::Arity { command: "hex", .. })
        ));
    }

    #[test]
    fn test_run_writes_one_line_per_refresh() {
        let (summary, out, _) = run("# start\n\nhue 120\nhue 120\nlightness 25\n");
        assert_eq!(
            summary,
            SessionSummary {
                commands: 3,
                refreshes: 2,
                errors: 0
            }
        );
        assert_eq!(
            out,
            "   3  #00FF00  rgb(0, 255, 0)  hsl(120, 100%, 50%)  gray 182  base #00FF00\n\
             \x20  5  #008000  rgb(0, 128, 0)  hsl(120, 100%, 25%)  gray 92  base #00FF00\n"
        );
    }

    #[test]
    fn test_run_reports_errors_and_continues() {
        let (summary, out, session) = run("hex #12\nfly\nhex blue\n");
        assert_eq!(summary.errors, 2);
        assert_eq!(summary.refreshes, 1);
        assert!(out.starts_with(
            "! line 1: color '#12' could not be parsed\n! line 2: Unknown command: fly\n"
        ));
        assert_eq!(session.picker().color(), hsl_picker::Color::BLUE);
    }

    #[test]
    fn test_show_prints_without_refresh() {
        let (summary, out, _) = run("show\n");
        assert_eq!(summary.refreshes, 0);
        assert_eq!(
            out,
            "   1  #FF0000  rgb(255, 0, 0)  hsl(0, 100%, 50%)  gray 54  base #FF0000\n"
        );
    }

    #[test]
    fn test_click_hit_tests_widgets() {
        // Default widget: shade square at (0, 0, 256, 256), strip at x 266..286.
        let (summary, _, session) = run("click 256 128\nclick 276 64\nclick 500 500\n");
        assert_eq!(summary.refreshes, 2);
        let snapshot = session.picker().snapshot();
        assert_eq!(snapshot.hue, 270);
        assert_eq!(snapshot.saturation, 100.0);
        assert_eq!(snapshot.lightness, 50.0);

        let (_, _, session) = run("click 280 128\n");
        assert_eq!(session.picker().snapshot().hue, 180);
    }

    #[test]
    fn test_json_format() {
        let mut session = Session::new(&AppConfig::default(), OutputFormat::Json);
        let mut out = Vec::new();
        session.run("blue 255\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let record: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(record["line"], 1);
        assert_eq!(record["fields"]["hex"], "#FF00FF");
        assert_eq!(record["base"], "#FF00FF");
    }
}
