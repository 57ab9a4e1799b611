use common::games::snake::SessionCommand;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct CommandSender(mpsc::UnboundedSender<SessionCommand>);

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self(tx)
    }

    /// Commands sent after the session has ended are dropped.
    pub fn send(&self, cmd: SessionCommand) {
        let _ = self.0.send(cmd);
    }
}
