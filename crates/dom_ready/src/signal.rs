//! `DOMContentLoaded` as a single-resolution future.

use crate::error::ReadyError;
use crate::gate::on_dom_ready;
use crate::host::DocumentHost;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use tokio::sync::oneshot;

/// Resolves once the document has fired `DOMContentLoaded`.
///
/// Resolves to [`ReadyError::SignalDropped`] if the host discards the
/// listener without running it.
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct DomReady {
    receiver: oneshot::Receiver<()>,
}

impl Future for DomReady {
    type Output = Result<(), ReadyError>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(context)
            .map(|received| received.map_err(|_closed| ReadyError::SignalDropped))
    }
}

/// A future for [`on_dom_ready`]. Already resolved if the document is
/// interactive or complete.
pub fn dom_ready_future<H: DocumentHost>(host: H) -> DomReady {
    let (sender, receiver) = oneshot::channel();
    on_dom_ready(host, move || {
        // The future may have been dropped; nobody is left to notify then.
        let _unused = sender.send(());
    });
    DomReady { receiver }
}
