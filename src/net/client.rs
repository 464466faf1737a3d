use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{info, warn};

use crate::net::messages::Command;

/// Bridges the render loop to the WebSocket relay. A background thread owns
/// the tokio runtime and the connection; commands go out and raw message
/// text comes in over unbounded channels, so the loop never blocks.
pub struct ViewerClient {
    outbound_tx: UnboundedSender<Command>,
    inbound_rx: UnboundedReceiver<String>,
}

impl ViewerClient {
    pub fn connect(url: String) -> Self {
        let (outbound_tx, mut outbound_rx) = unbounded_channel::<Command>();
        let (inbound_tx, inbound_rx) = unbounded_channel::<String>();

        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(err) => {
                    warn!(%err, "failed to start websocket runtime");
                    return;
                }
            };
            rt.block_on(async move {
                let ws_stream = match connect_async(&url).await {
                    Ok((stream, _)) => stream,
                    Err(err) => {
                        warn!(%err, "websocket connect failed");
                        return;
                    }
                };
                info!(%url, "connected");
                let (mut ws_sender, mut ws_receiver) = ws_stream.split();

                loop {
                    tokio::select! {
                        Some(command) = outbound_rx.recv() => {
                            let frame = Message::Text(command.token().to_owned());
                            if ws_sender.send(frame).await.is_err() {
                                break;
                            }
                        }
                        inbound = ws_receiver.next() => {
                            match inbound {
                                Some(Ok(Message::Text(text))) => {
                                    let _ = inbound_tx.send(text);
                                }
                                Some(Ok(Message::Close(_))) | None | Some(Err(_)) => {
                                    info!("connection closed");
                                    break;
                                }
                                _ => {}
                            }
                        }
                    }
                }
            });
        });

        Self {
            outbound_tx,
            inbound_rx,
        }
    }

    pub fn send(&self, command: Command) {
        let _ = self.outbound_tx.send(command);
    }

    pub fn try_recv(&mut self) -> Option<String> {
        self.inbound_rx.try_recv().ok()
    }
}
