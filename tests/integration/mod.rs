// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests
#![allow(dead_code)]

use meeting_translator::server::{self, AppState};
use meeting_translator::RandomSource;
use std::collections::VecDeque;
use std::net::SocketAddr;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Random source that replays scripted picks and confidences, then repeats the last one
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
    confidences: VecDeque<u8>,
    last_pick: usize,
    last_confidence: u8,
}

impl ScriptedRandom {
    pub fn new(picks: &[usize], confidences: &[u8]) -> Self {
        Self {
            picks: picks.iter().copied().collect(),
            confidences: confidences.iter().copied().collect(),
            last_pick: 0,
            last_confidence: 85,
        }
    }

    /// Always the first translation at the given confidence
    pub fn constant(confidence: u8) -> Self {
        Self::new(&[0], &[confidence])
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, _len: usize) -> usize {
        if let Some(pick) = self.picks.pop_front() {
            self.last_pick = pick;
        }
        self.last_pick
    }

    fn confidence(&mut self) -> u8 {
        if let Some(confidence) = self.confidences.pop_front() {
            self.last_confidence = confidence;
        }
        self.last_confidence
    }
}

/// Running server bound to an ephemeral localhost port
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<anyhow::Result<()>>>,
}

impl TestServer {
    pub async fn start(state: AppState) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no local address");
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(server::serve(listener, state, async move {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Stop the server and wait for it to finish
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle
                .await
                .expect("Server task panicked")
                .expect("Server returned an error");
        }
    }
}
