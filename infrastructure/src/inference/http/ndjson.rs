//! NDJSON decoding for `/predict` response bodies.
//!
//! The body arrives as arbitrary byte chunks. Lines (and multi-byte UTF-8
//! sequences) may be split across chunks, so bytes are buffered until a
//! newline completes a frame.

use super::error::HttpInferenceError;
use super::protocol::PredictFrame;
use futures::{Stream, StreamExt};
use std::fmt::Display;
use streamchat_domain::StreamEvent;
use tokio::sync::mpsc;
use tracing::debug;

type FrameResult = Result<PredictFrame, HttpInferenceError>;

/// Incremental NDJSON frame decoder
#[derive(Debug, Default)]
pub struct NdjsonDecoder {
    buffer: Vec<u8>,
}

impl NdjsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk; returns every frame completed by it
    pub fn push(&mut self, chunk: &[u8]) -> Vec<FrameResult> {
        self.buffer.extend_from_slice(chunk);

        let mut frames = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();
            if let Some(frame) = decode_line(&line[..newline]) {
                frames.push(frame);
            }
        }
        frames
    }

    /// Decode whatever is left once the body has ended
    pub fn finish(&mut self) -> Option<FrameResult> {
        let rest = std::mem::take(&mut self.buffer);
        decode_line(&rest)
    }
}

fn decode_line(line: &[u8]) -> Option<FrameResult> {
    let text = match std::str::from_utf8(line) {
        Ok(text) => text,
        Err(e) => {
            return Some(Err(HttpInferenceError::MalformedFrame {
                error: e.to_string(),
                raw: String::from_utf8_lossy(line).into_owned(),
            }));
        }
    };

    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some(
        serde_json::from_str(text).map_err(|e| HttpInferenceError::MalformedFrame {
            error: e.to_string(),
            raw: text.to_string(),
        }),
    )
}

fn frame_events(frame: FrameResult) -> Vec<StreamEvent> {
    match frame {
        Ok(frame) => frame.into_events(),
        Err(e) => vec![StreamEvent::Error(e.to_string())],
    }
}

/// Forward `events` to `tx`; returns false once the stream should end
async fn forward(tx: &mpsc::Sender<StreamEvent>, events: Vec<StreamEvent>) -> bool {
    for event in events {
        let terminal = event.is_terminal();
        if tx.send(event).await.is_err() {
            debug!("Fragment consumer went away, closing stream");
            return false;
        }
        if terminal {
            return false;
        }
    }
    true
}

/// Decode an NDJSON byte stream into `tx` until a terminal event, the end of
/// the body, or the receiver being dropped.
///
/// A body that ends without a `done` frame still terminates with
/// `Completed`. Returning drops `body`, which closes the HTTP response.
pub async fn pump_fragments<S, B, E>(body: S, tx: mpsc::Sender<StreamEvent>)
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    let mut body = std::pin::pin!(body);
    let mut decoder = NdjsonDecoder::new();

    loop {
        let chunk = tokio::select! {
            _ = tx.closed() => {
                debug!("Fragment consumer went away, closing stream");
                return;
            }
            chunk = body.next() => chunk,
        };

        let events = match chunk {
            Some(Ok(bytes)) => decoder
                .push(bytes.as_ref())
                .into_iter()
                .flat_map(frame_events)
                .collect(),
            Some(Err(e)) => vec![StreamEvent::Error(format!("stream read error: {}", e))],
            None => break,
        };

        if !forward(&tx, events).await {
            return;
        }
    }

    let mut events = decoder.finish().map(frame_events).unwrap_or_default();
    if !events.last().is_some_and(StreamEvent::is_terminal) {
        events.push(StreamEvent::Completed(String::new()));
    }
    forward(&tx, events).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use streamchat_application::FragmentStream;

    async fn decode(chunks: &[&[u8]]) -> Vec<StreamEvent> {
        let (tx, mut fragments) = FragmentStream::channel(64);
        let owned: Vec<Vec<u8>> = chunks.iter().map(|c| c.to_vec()).collect();
        let body = stream::iter(owned.into_iter().map(Ok::<_, std::io::Error>));
        pump_fragments(body, tx).await;

        let mut events = Vec::new();
        while let Some(event) = fragments.recv().await {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_lines_split_across_chunks() {
        let events = decode(&[
            &b"{\"fragment\":\"Hel\"}\n{\"frag"[..],
            &b"ment\":\"lo!\"}\n"[..],
            &b"{\"done\":true}\n"[..],
        ])
        .await;
        assert_eq!(
            events,
            vec![
                StreamEvent::Delta("Hel".into()),
                StreamEvent::Delta("lo!".into()),
                StreamEvent::Completed(String::new()),
            ]
        );
    }

    #[tokio::test]
    async fn test_multibyte_character_split_across_chunks() {
        // "é" is 0xC3 0xA9
        let events = decode(&[&b"{\"fragment\":\"caf\xC3"[..], &b"\xA9\"}\n"[..]]).await;
        assert_eq!(
            events,
            vec![
                StreamEvent::Delta("café".into()),
                StreamEvent::Completed(String::new()),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_trailing_newline_and_done() {
        let events = decode(&[&b"\n\n{\"fragment\":\"tail\"}"[..]]).await;
        assert_eq!(
            events,
            vec![
                StreamEvent::Delta("tail".into()),
                StreamEvent::Completed(String::new()),
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_line_ends_stream_with_error() {
        let events = decode(&[&b"{\"fragment\":\"ok\"}\nnot json\n{\"fragment\":\"never\"}\n"[..]]).await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], StreamEvent::Delta("ok".into()));
        assert!(matches!(&events[1], StreamEvent::Error(msg) if msg.contains("not json")));
    }

    #[tokio::test]
    async fn test_events_after_done_are_dropped() {
        let events = decode(&[&b"{\"done\":true}\n{\"fragment\":\"late\"}\n"[..]]).await;
        assert_eq!(events, vec![StreamEvent::Completed(String::new())]);
    }

    #[test]
    fn test_decoder_keeps_partial_line() {
        let mut decoder = NdjsonDecoder::new();
        assert!(decoder.push(b"{\"fragment\":").is_empty());
        let frames = decoder.push(b"\"x\"}\r\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_ref().unwrap().fragment.as_deref(), Some("x"));
        assert!(decoder.finish().is_none());
    }
}
