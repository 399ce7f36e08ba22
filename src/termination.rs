use color_eyre::eyre;
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupted {
    OsSigInt,
    UserInt,
}

/// Broadcasts the reason the application is shutting down
#[derive(Debug, Clone)]
pub struct Terminator {
    interrupt_tx: broadcast::Sender<Interrupted>,
}

impl Terminator {
    pub fn new(interrupt_tx: broadcast::Sender<Interrupted>) -> Self {
        Self { interrupt_tx }
    }

    pub fn terminate(&mut self, interrupted: Interrupted) -> eyre::Result<()> {
        self.interrupt_tx.send(interrupted)?;

        Ok(())
    }
}

async fn terminate_by_os_signal(mut terminator: Terminator) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Unable to listen for the interrupt signal: {}", e);
        return;
    }
    if let Err(e) = terminator.terminate(Interrupted::OsSigInt) {
        tracing::error!("Unable to send the interrupt: {}", e);
    }
}

/// Creates the terminator together with a receiver for the interrupt reason
pub fn create_termination() -> (Terminator, broadcast::Receiver<Interrupted>) {
    let (tx, rx) = broadcast::channel(1);
    let terminator = Terminator::new(tx);

    tokio::spawn(terminate_by_os_signal(terminator.clone()));

    (terminator, rx)
}
