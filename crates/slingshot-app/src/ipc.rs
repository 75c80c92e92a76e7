//! JSON-lines bridge to the front end.
//!
//! Input events arrive on a reader (stdin in the binary), one JSON object per
//! line, and are forwarded to the game loop. Frames leave through a
//! [`FrameSink`], one [`HostMessage`] per line.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::state::{HostMessage, LoopCommand};

/// Front-end input, tagged by `type`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    Cancel,
    Pause,
    Resume,
    Clear,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<InputEvent>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}

/// Why input forwarding stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEnd {
    /// The reader reached end of input.
    Eof,
    /// A `Quit` event was forwarded.
    Quit,
    /// The game loop is gone.
    LoopClosed,
}

/// Forward every parseable line to the game loop. Malformed lines are logged
/// and skipped.
pub fn forward_input<R: BufRead>(reader: R, tx: &mpsc::Sender<LoopCommand>) -> io::Result<InputEnd> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let event = match parse_line(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("skipping input line {}: {}", index + 1, e);
                continue;
            }
        };
        if tx.send(LoopCommand::Input(event)).is_err() {
            return Ok(InputEnd::LoopClosed);
        }
        if event == InputEvent::Quit {
            return Ok(InputEnd::Quit);
        }
    }
    Ok(InputEnd::Eof)
}

/// Destination for host messages.
pub trait FrameSink {
    fn send(&mut self, message: &HostMessage) -> io::Result<()>;
}

/// Writes each message as a single JSON line and flushes.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn send(&mut self, message: &HostMessage) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, message)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Frame;
    use slingshot_core::state::SimSnapshot;

    #[test]
    fn test_parse_pointer_events() {
        let event = parse_line(r#"{"type":"PointerDown","x":10.5,"y":20}"#)
            .unwrap()
            .unwrap();
        assert_eq!(event, InputEvent::PointerDown { x: 10.5, y: 20.0 });

        let event = parse_line(r#" {"type":"Clear"} "#).unwrap().unwrap();
        assert_eq!(event, InputEvent::Clear);
    }

    #[test]
    fn test_parse_blank_and_malformed() {
        assert!(parse_line("   ").unwrap().is_none());
        assert!(parse_line("not json").is_err());
        assert!(parse_line(r#"{"type":"Teleport"}"#).is_err());
        assert!(parse_line(r#"{"type":"PointerUp","x":1}"#).is_err());
    }

    #[test]
    fn test_forward_skips_bad_lines_and_stops_on_quit() {
        let input = "\
{\"type\":\"PointerDown\",\"x\":1,\"y\":2}
garbage

{\"type\":\"Pause\"}
{\"type\":\"Quit\"}
{\"type\":\"Resume\"}
";
        let (tx, rx) = mpsc::channel();
        let end = forward_input(input.as_bytes(), &tx).unwrap();
        assert_eq!(end, InputEnd::Quit);

        let events: Vec<InputEvent> = rx
            .try_iter()
            .map(|cmd| match cmd {
                LoopCommand::Input(event) => event,
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { x: 1.0, y: 2.0 },
                InputEvent::Pause,
                InputEvent::Quit,
            ]
        );
    }

    #[test]
    fn test_forward_reports_eof_and_closed_loop() {
        let (tx, rx) = mpsc::channel();
        let end = forward_input("{\"type\":\"Cancel\"}\n".as_bytes(), &tx).unwrap();
        assert_eq!(end, InputEnd::Eof);

        drop(rx);
        let end = forward_input("{\"type\":\"Cancel\"}\n".as_bytes(), &tx).unwrap();
        assert_eq!(end, InputEnd::LoopClosed);
    }

    #[test]
    fn test_json_lines_sink_writes_one_line_per_message() {
        let mut sink = JsonLinesSink::new(Vec::new());
        let message = HostMessage::Frame(Frame {
            snapshot: SimSnapshot::default(),
            aim: None,
        });
        sink.send(&message).unwrap();
        sink.send(&message).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let decoded: HostMessage = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(decoded, message);
    }
}
