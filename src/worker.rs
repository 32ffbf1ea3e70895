use crate::command::Command;
use crate::engine::{ClusterEngine, Snapshot};
use crate::error::{Error, Result};
use crate::Float;
use log::debug;
use ndarray_rand::rand::Rng;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

enum Message<F> {
    Apply(Command),
    Snapshot(Sender<Snapshot<F>>),
    Shutdown,
}

/// A [`ClusterEngine`] running on its own thread.
///
/// Commands submitted from any number of threads are queued and applied one at a time, in
/// submission order, by the thread owning the engine. A snapshot request is queued like any
/// other command, so it observes every command submitted before it.
pub struct EngineWorker<F: Float, R: Rng + Send + 'static> {
    sender: Sender<Message<F>>,
    handle: Option<JoinHandle<ClusterEngine<F, R>>>,
}

impl<F: Float, R: Rng + Send + 'static> EngineWorker<F, R> {
    /// Moves `engine` to a new thread and starts draining the command queue.
    pub fn spawn(engine: ClusterEngine<F, R>) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handle = thread::spawn(move || run(engine, receiver));
        EngineWorker {
            sender,
            handle: Some(handle),
        }
    }

    /// Queues `command` for the engine.
    pub fn submit(&self, command: Command) -> Result<()> {
        self.sender
            .send(Message::Apply(command))
            .map_err(|_| Error::WorkerDisconnected)
    }

    /// Waits for every previously submitted command, then returns a copy of the engine state.
    pub fn snapshot(&self) -> Result<Snapshot<F>> {
        let (reply, response) = mpsc::channel();
        self.sender
            .send(Message::Snapshot(reply))
            .map_err(|_| Error::WorkerDisconnected)?;
        response.recv().map_err(|_| Error::WorkerDisconnected)
    }

    /// Stops the worker once the queue is drained and hands the engine back.
    pub fn shutdown(mut self) -> Result<ClusterEngine<F, R>> {
        let _ = self.sender.send(Message::Shutdown);
        self.handle
            .take()
            .ok_or(Error::WorkerDisconnected)?
            .join()
            .map_err(|_| Error::WorkerDisconnected)
    }
}

impl<F: Float, R: Rng + Send + 'static> Drop for EngineWorker<F, R> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.sender.send(Message::Shutdown);
            let _ = handle.join();
        }
    }
}

fn run<F: Float, R: Rng>(
    mut engine: ClusterEngine<F, R>,
    receiver: Receiver<Message<F>>,
) -> ClusterEngine<F, R> {
    for message in receiver {
        match message {
            Message::Apply(command) => {
                debug!("worker applying {:?}", command);
                engine.apply(command);
            }
            Message::Snapshot(reply) => {
                // The requester may have given up waiting
                let _ = reply.send(engine.snapshot());
            }
            Message::Shutdown => break,
        }
    }
    engine
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Phase, UNASSIGNED};
    use crate::{CanvasParams, ParamGuard};
    use rand_xoshiro::rand_core::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    fn worker() -> EngineWorker<f64, Xoshiro256Plus> {
        let canvas = CanvasParams::default().check_unwrap();
        EngineWorker::spawn(ClusterEngine::new(
            canvas,
            Xoshiro256Plus::seed_from_u64(42),
        ))
    }

    #[test]
    fn commands_are_applied_in_order() {
        let worker = worker();
        worker
            .submit(Command::Initialize {
                n_points: 60,
                n_clusters: 3,
            })
            .unwrap();

        let initialized = worker.snapshot().unwrap();
        assert_eq!(initialized.phase, Phase::Initialized);
        assert_eq!(initialized.points.len(), 60);
        assert!(initialized.labels.iter().all(|&l| l == UNASSIGNED));

        worker.submit(Command::AssignStep).unwrap();
        worker.submit(Command::UpdateStep).unwrap();
        let updated = worker.snapshot().unwrap();
        assert_eq!(updated.phase, Phase::Updated);
        assert_eq!(updated.points, initialized.points);
        assert!(updated.labels.iter().all(|l| l.is_some()));
    }

    #[test]
    fn matches_a_local_engine() {
        let worker = worker();
        let canvas = CanvasParams::default().check_unwrap();
        let mut local: ClusterEngine<f64, _> =
            ClusterEngine::new(canvas, Xoshiro256Plus::seed_from_u64(42));

        let commands = [
            Command::Initialize {
                n_points: 80,
                n_clusters: 4,
            },
            Command::AssignStep,
            Command::UpdateStep,
            Command::AssignStep,
        ];
        for &command in &commands {
            worker.submit(command).unwrap();
            local.apply(command);
        }
        assert_eq!(worker.snapshot().unwrap(), local.snapshot());
    }

    #[test]
    fn shutdown_returns_the_engine() {
        let worker = worker();
        worker
            .submit(Command::Initialize {
                n_points: 10,
                n_clusters: 2,
            })
            .unwrap();
        let engine = worker.shutdown().unwrap();
        assert_eq!(engine.n_points(), 10);
        assert_eq!(engine.phase(), Phase::Initialized);
    }
}
