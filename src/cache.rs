use crate::board::Counts;
use crate::board::Field;
use crate::error::Error;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::mpsc;
use std::sync::mpsc::SyncSender;
use std::time::Duration;

type Solutions = Arc<Vec<Field>>;
type Compute = dyn Fn(Counts, Counts) -> Vec<Field> + Send + Sync;

/// one cache slot. Pending holds a one-shot sender per
/// waiter; publication moves the slot to Ready and wakes
/// every registered waiter in the same critical section, so
/// a waiter either registers before publication and gets
/// sent the result, or registers after and sees Ready
/// directly. nobody falls between.
enum Entry {
    Pending(Vec<SyncSender<Solutions>>),
    Ready(Solutions),
}

/// keyed, single-flight cache over solution enumeration.
///
/// completed sets are retained until purged, since a game
/// keeps asking about the same counts with ever longer shot
/// histories. the enumeration function is injected so tests
/// can observe how often it actually runs.
pub struct Cache {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
    compute: Arc<Compute>,
}

impl Default for Cache {
    fn default() -> Self {
        Self::new(Arc::new(crate::solver::enumerate))
    }
}

impl Cache {
    pub fn new(compute: Arc<Compute>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            compute,
        }
    }

    fn key(rows: &Counts, cols: &Counts) -> String {
        format!("{}/{}", rows, cols)
    }

    /// fetch (or join the computation of) the solution set
    /// for these counts. concurrent callers for one key share
    /// a single enumeration. a caller that outwaits `wait`
    /// gets SolverTimeout; the computation keeps running and
    /// will serve future callers from the cache.
    pub fn solutions(
        &self,
        rows: Counts,
        cols: Counts,
        wait: Duration,
    ) -> Result<Solutions, Error> {
        let key = Self::key(&rows, &cols);
        let (tx, rx) = mpsc::sync_channel(1);
        {
            let mut entries = self.entries.lock().expect("cache mutex");
            let vacant = !entries.contains_key(&key);
            if vacant {
                entries.insert(key.clone(), Entry::Pending(Vec::new()));
            }
            match entries.get_mut(&key).expect("entry just ensured") {
                Entry::Ready(solutions) => return Ok(solutions.clone()),
                Entry::Pending(waiters) => waiters.push(tx),
            }
            if vacant {
                let entries = self.entries.clone();
                let compute = self.compute.clone();
                let key = key.clone();
                std::thread::spawn(move || {
                    let solutions = Arc::new(compute(rows, cols));
                    let mut entries = entries.lock().expect("cache mutex");
                    let pending = entries.insert(key, Entry::Ready(solutions.clone()));
                    if let Some(Entry::Pending(waiters)) = pending {
                        for waiter in waiters {
                            waiter.send(solutions.clone()).ok();
                        }
                    }
                });
            }
        }
        rx.recv_timeout(wait).map_err(|_| Error::SolverTimeout)
    }

    /// drop a completed entry to bound memory across games.
    /// in-flight work is left alone; it will still publish
    /// and wake its waiters.
    pub fn purge(&self, rows: &Counts, cols: &Counts) {
        let key = Self::key(rows, cols);
        let mut entries = self.entries.lock().expect("cache mutex");
        if let Some(Entry::Ready(_)) = entries.get(&key) {
            entries.remove(&key);
        }
    }
}
