//! Windowless host: request frames in on stdin, reply frames out on stdout.
//!
//! One JSON frame per line in both directions. The host stops on end of
//! input or after a `close` call, once every outstanding call has replied.

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::{broadcast, mpsc};

use casement_bridge::MethodChannel;
use casement_common::{Event, EventBus, Point, Size};
use casement_config::CasementConfig;
use casement_platform::{HeadlessSurface, WindowSurface};

use crate::{build_channel, EVENT_CAPACITY};

/// Where the headless window starts on its virtual screen.
const ORIGIN: Point = Point { x: 100, y: 100 };

pub fn run(config: &CasementConfig) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let (channel, events) = headless_channel(config);
        let input = BufReader::new(tokio::io::stdin());
        serve_lines(channel, events.subscribe(), input, tokio::io::stdout()).await
    })
}

fn headless_channel(config: &CasementConfig) -> (Arc<MethodChannel>, EventBus) {
    let size = Size::new(
        i32::try_from(config.window.width).unwrap_or(i32::MAX),
        i32::try_from(config.window.height).unwrap_or(i32::MAX),
    );
    let surface = Arc::new(HeadlessSurface::new(ORIGIN, size));
    if let Err(e) = surface.set_title(&config.window.title) {
        tracing::warn!("Failed to set initial title: {e}");
    }

    let events = EventBus::new(EVENT_CAPACITY);
    let channel = build_channel(surface, config, &events);
    (channel, events)
}

/// Pump frames between a line-oriented reader/writer pair and `channel`.
pub async fn serve_lines<R, W>(
    channel: Arc<MethodChannel>,
    mut events: broadcast::Receiver<Event>,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (frame_tx, frame_rx) = mpsc::unbounded_channel();
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel();
    let server = tokio::spawn(Arc::clone(&channel).serve(frame_rx, reply_tx));

    tracing::info!(channel = %channel.name(), "Headless host ready");

    let mut frames = Some(frame_tx);
    let mut lines = input.lines();

    loop {
        tokio::select! {
            reply = reply_rx.recv() => {
                let Some(reply) = reply else { break };
                output.write_all(reply.as_bytes()).await?;
                output.write_all(b"\n").await?;
                output.flush().await?;
            }
            line = lines.next_line(), if frames.is_some() => {
                match line? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => {
                        if !frames.as_ref().is_some_and(|tx| forward_frame(tx, line)) {
                            frames = None;
                        }
                    }
                    None => {
                        tracing::info!("Input closed");
                        frames = None;
                    }
                }
            }
            event = events.recv(), if frames.is_some() => {
                match event {
                    Ok(Event::CloseRequested) => {
                        tracing::info!("Close requested");
                        frames = None;
                    }
                    Ok(event) => tracing::debug!(?event, "event"),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::debug!(skipped = n, "event receiver lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => {}
                }
            }
        }
    }

    server.await.map_err(io::Error::other)
}

/// Queue one inbound line for the channel. `false` once the serve task is gone.
fn forward_frame(tx: &mpsc::UnboundedSender<String>, line: String) -> bool {
    if tx.send(line).is_err() {
        tracing::warn!("Frame dropped: channel task gone");
        return false;
    }
    true
}
