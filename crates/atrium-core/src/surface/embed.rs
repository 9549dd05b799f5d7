//! Embed player surface: an external player over line-delimited JSON IPC
//!
//! The external player owns decoding and presentation; this client only
//! speaks the narrow control protocol:
//!
//! - requests:  `{"id":1,"op":"play"}`, `{"id":2,"op":"set_volume","value":0.5}`
//! - responses: `{"id":1,"ok":true}` or `{"id":1,"ok":false,"error":"..."}`
//! - events:    `{"event":"play_started"}`
//!
//! A reader thread owns the receive half and forwards every inbound line
//! through a channel; requests are written directly and answered
//! synchronously with a bounded wait. Events that arrive while waiting are
//! stashed and handed out on the next [`PlayerSurface::poll_events`] drain.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpStream};
use std::time::{Duration, Instant};

use crossbeam::channel::{unbounded, Receiver, RecvTimeoutError};
use serde::{Deserialize, Serialize};

use super::{PlayerSurface, SurfaceError, SurfaceEvent, SurfaceResult};

/// How long a single request may wait for its response
const RESPONSE_TIMEOUT: Duration = Duration::from_millis(1500);

#[derive(Serialize)]
struct Request<'a> {
    id: u64,
    op: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flag: Option<bool>,
}

/// One inbound line: either a response (has `id`) or an event (has `event`)
#[derive(Deserialize)]
struct Inbound {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    ok: Option<bool>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    value: Option<f32>,
    #[serde(default)]
    event: Option<String>,
}

/// Surface backed by an external embed player process
pub struct EmbedSurface {
    stream: TcpStream,
    inbound: Receiver<Inbound>,
    pending_events: Vec<SurfaceEvent>,
    next_id: u64,
}

impl EmbedSurface {
    /// Connect to the player's control socket and start the reader thread
    pub fn connect(addr: &str, timeout: Duration) -> SurfaceResult<Self> {
        let parsed: SocketAddr = addr
            .parse()
            .map_err(|_| SurfaceError::Protocol(format!("invalid player address '{}'", addr)))?;

        let stream = TcpStream::connect_timeout(&parsed, timeout).map_err(|source| {
            SurfaceError::Connect {
                addr: addr.to_string(),
                source,
            }
        })?;

        let reader_stream = stream.try_clone()?;
        let (tx, rx) = unbounded();

        std::thread::Builder::new()
            .name("embed-surface-reader".to_string())
            .spawn(move || {
                let reader = BufReader::new(reader_stream);
                for line in reader.lines() {
                    let line = match line {
                        Ok(l) => l,
                        Err(e) => {
                            log::warn!("embed surface: read failed: {}", e);
                            break;
                        }
                    };
                    if line.trim().is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<Inbound>(&line) {
                        Ok(msg) => {
                            if tx.send(msg).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            log::warn!("embed surface: ignoring malformed line: {}", e)
                        }
                    }
                }
                log::info!("embed surface: reader thread exiting");
            })?;

        log::info!("embed surface: connected to {}", addr);

        Ok(Self {
            stream,
            inbound: rx,
            pending_events: Vec::new(),
            next_id: 1,
        })
    }

    /// Send one request and wait for its response
    ///
    /// Events received while waiting are stashed for the next poll. A
    /// response carrying an id we already gave up on is discarded.
    fn request(
        &mut self,
        op: &'static str,
        value: Option<f32>,
        flag: Option<bool>,
    ) -> SurfaceResult<Option<f32>> {
        let id = self.next_id;
        self.next_id += 1;

        let mut line = serde_json::to_string(&Request { id, op, value, flag })
            .map_err(|e| SurfaceError::Protocol(e.to_string()))?;
        line.push('\n');
        self.stream.write_all(line.as_bytes())?;

        let deadline = Instant::now() + RESPONSE_TIMEOUT;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(SurfaceError::Timeout(op));
            }
            match self.inbound.recv_timeout(remaining) {
                Ok(msg) => {
                    if let Some(event) = msg.event.as_deref() {
                        self.stash_event(event);
                        continue;
                    }
                    match msg.id {
                        Some(got) if got == id => {
                            return if msg.ok.unwrap_or(false) {
                                Ok(msg.value)
                            } else {
                                Err(SurfaceError::Rejected {
                                    op,
                                    reason: msg
                                        .error
                                        .unwrap_or_else(|| "unspecified".to_string()),
                                })
                            };
                        }
                        _ => continue,
                    }
                }
                Err(RecvTimeoutError::Timeout) => return Err(SurfaceError::Timeout(op)),
                Err(RecvTimeoutError::Disconnected) => return Err(SurfaceError::Disconnected),
            }
        }
    }

    fn stash_event(&mut self, name: &str) {
        match name {
            "play_started" => self.pending_events.push(SurfaceEvent::PlayStarted),
            other => log::debug!("embed surface: ignoring event '{}'", other),
        }
    }
}

impl PlayerSurface for EmbedSurface {
    fn name(&self) -> &'static str {
        "embed"
    }

    fn play(&mut self) -> SurfaceResult<()> {
        self.request("play", None, None).map(|_| ())
    }

    fn pause(&mut self) -> SurfaceResult<()> {
        self.request("pause", None, None).map(|_| ())
    }

    fn set_volume(&mut self, volume: f32) -> SurfaceResult<()> {
        self.request("set_volume", Some(volume), None).map(|_| ())
    }

    fn get_volume(&mut self) -> SurfaceResult<f32> {
        self.request("get_volume", None, None)?.ok_or_else(|| {
            SurfaceError::Protocol("get_volume response missing value".to_string())
        })
    }

    fn set_autopause(&mut self, enabled: bool) -> SurfaceResult<()> {
        self.request("set_autopause", None, Some(enabled)).map(|_| ())
    }

    fn set_inline_playback(&mut self) -> SurfaceResult<()> {
        self.request("set_inline_playback", None, None).map(|_| ())
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        let mut events = std::mem::take(&mut self.pending_events);
        while let Ok(msg) = self.inbound.try_recv() {
            match msg.event.as_deref() {
                Some("play_started") => events.push(SurfaceEvent::PlayStarted),
                Some(other) => log::debug!("embed surface: ignoring event '{}'", other),
                // A response nobody is waiting for: its request timed out earlier
                None => log::debug!("embed surface: dropping stale response {:?}", msg.id),
            }
        }
        events
    }
}
