//! Companion link task.
//!
//! Reads the UART one byte at a time through the frame decoder, answers every
//! complete frame with an ACK or NACK byte, and queues the outcome for the
//! render loop. The watch face itself is never touched from here.

use defmt::{debug, warn};
use dial_common::FrameDecoder;
use dial_pico2::config::LINK_QUEUE_DEPTH;
use dial_pico2::LinkMessage;
use embassy_rp::uart::{Async, UartRx, UartTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Link outcomes waiting for the render loop.
pub static LINK_CHANNEL: Channel<CriticalSectionRawMutex, LinkMessage, LINK_QUEUE_DEPTH> = Channel::new();

#[embassy_executor::task]
pub async fn link_task(
    mut rx: UartRx<'static, Async>,
    mut tx: UartTx<'static, Async>,
) {
    debug!("Link task started");

    let mut decoder = FrameDecoder::new();
    let mut byte = [0u8; 1];

    loop {
        if let Err(e) = rx.read(&mut byte).await {
            // Framing or overrun error: resync on the next start byte
            warn!("UART read error: {}", e);
            decoder.reset();
            continue;
        }

        let Some(event) = decoder.push(byte[0]) else {
            continue;
        };

        let reply = event.reply();
        let message = LinkMessage::from_event(&event);
        LINK_CHANNEL.send(message).await;

        let sent = tx.write(&[reply]).await.is_ok();
        LINK_CHANNEL.send(LinkMessage::outbox(sent)).await;
    }
}
