//! Background search worker.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::board::{search, Board, Color, SearchConfig, SearchOutcome};

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// A search running on its own thread.
///
/// The worker takes a copy of the board and runs [`search`] to the end of
/// its time budget; there is no external cancellation. Completion is
/// announced through the `on_done` callback, and the outcome can also be
/// collected by joining.
pub struct SearchWorker {
    handle: JoinHandle<()>,
    outcome: Arc<Mutex<Option<SearchOutcome>>>,
}

impl SearchWorker {
    /// Spawn a search for `side` on a copy of `board`.
    ///
    /// `on_done` runs on the worker thread as soon as the search returns.
    pub fn spawn<F>(board: Board, side: Color, config: SearchConfig, on_done: F) -> SearchWorker
    where
        F: FnOnce(&SearchOutcome) + Send + 'static,
    {
        let outcome = Arc::new(Mutex::new(None));
        let cell = Arc::clone(&outcome);
        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let mut board = board;
                let result = search(&mut board, side, &config);
                on_done(&result);
                *cell.lock() = Some(result);
            })
            .expect("failed to spawn search thread");

        SearchWorker {
            handle,
            outcome,
        }
    }

    /// True once the worker thread has exited
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the search ends and take its outcome.
    pub fn join(self) -> SearchOutcome {
        self.handle.join().expect("search thread panicked");
        self.outcome
            .lock()
            .take()
            .expect("search thread exited without an outcome")
    }
}
