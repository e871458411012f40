use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::generation::{run_stream, CancelToken, CompletionClient};
use crate::messages::{EditMsg, GenerationMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

/// An editor session bound to a completion backend
pub struct Session {
    model: AppModel,
    client: Arc<dyn CompletionClient>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    streams: HashMap<u64, CancelToken>,
}

impl Session {
    pub fn new(model: AppModel, client: Arc<dyn CompletionClient>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            client,
            msg_tx,
            msg_rx,
            streams: HashMap::new(),
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn into_model(mut self) -> AppModel {
        self.cancel_all();
        std::mem::take(&mut self.model)
    }

    /// Run one message through `update` and execute the resulting command.
    /// Returns whether a redraw is needed.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let needs_redraw = match update(&mut self.model, msg) {
            Some(cmd) => {
                let redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                redraw
            }
            None => false,
        };
        self.reap_streams();
        needs_redraw
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::StartGeneration {
                generation_id,
                request,
            } => {
                let cancel = CancelToken::new();
                self.streams.insert(generation_id, cancel.clone());
                let client = Arc::clone(&self.client);
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let delta_tx = tx.clone();
                    let result = run_stream(client.as_ref(), &request, &cancel, |text| {
                        let _ = delta_tx.send(Msg::Generation(GenerationMsg::Delta {
                            generation_id,
                            text,
                        }));
                    });
                    let msg = match result {
                        Ok(()) => GenerationMsg::Finished { generation_id },
                        Err(e) => GenerationMsg::Failed {
                            generation_id,
                            error: e.to_string(),
                        },
                    };
                    let _ = tx.send(Msg::Generation(msg));
                });
            }
            Cmd::CancelGeneration { generation_id } => {
                if let Some(cancel) = self.streams.remove(&generation_id) {
                    tracing::debug!(target: "generation", generation_id, "signalling worker to stop");
                    cancel.cancel();
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Drop worker handles for streams that are no longer active
    fn reap_streams(&mut self) {
        let generation = &self.model.generation;
        self.streams.retain(|id, cancel| {
            let keep = generation.is_active(*id);
            if !keep {
                cancel.cancel();
            }
            keep
        });
    }

    fn cancel_all(&mut self) {
        for (_, cancel) in self.streams.drain() {
            cancel.cancel();
        }
    }

    /// Apply every message the workers have sent so far.
    /// Returns whether a redraw is needed.
    pub fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            needs_redraw |= self.dispatch(msg);
        }
        needs_redraw
    }

    /// Block until no generation is running, applying worker messages as
    /// they arrive. Returns false if `timeout` elapsed first.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.process_async_messages();
            if !self.model.generation.is_running() {
                return true;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => {
                    self.dispatch(msg);
                }
                Err(RecvTimeoutError::Timeout) => return false,
                // Unreachable while we hold a sender
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
    }

    /// Tear down the editor surface, cancelling any running stream
    pub fn shutdown(&mut self) {
        self.dispatch(Msg::Edit(EditMsg::Detach));
        self.cancel_all();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
