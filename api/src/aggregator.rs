use crate::GameSnapshot;
use crate::client::{ApiError, LeagueAdapter};
use log::warn;
use rand::seq::SliceRandom;
use std::fmt;
use std::thread;
use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Retries exhausted — terminal for this fetch cycle. The caller shows an
/// error screen and keeps its loop running; it must not exit the process.
#[derive(Debug)]
pub struct FetchError {
    pub attempts: u32,
    pub last: ApiError,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to fetch game data after {} attempts: {}",
            self.attempts, self.last
        )
    }
}

/// Fans one fetch cycle out over every league adapter. A single bad game
/// record is the adapter's problem; a whole adapter call failing fails the
/// attempt, and the bounded retry loop here owns recovery.
pub struct Aggregator {
    adapters: Vec<Box<dyn LeagueAdapter>>,
    max_attempts: u32,
    retry_delay: Duration,
}

impl Aggregator {
    pub fn new(adapters: Vec<Box<dyn LeagueAdapter>>) -> Self {
        Self {
            adapters,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_retry(mut self, max_attempts: u32, retry_delay: Duration) -> Self {
        self.max_attempts = max_attempts;
        self.retry_delay = retry_delay;
        self
    }

    /// One attempt: every adapter, outputs concatenated in adapter order,
    /// then shuffled once. The shuffle is unseeded; display order varying
    /// between refreshes is intended.
    fn fetch_once(&self) -> Result<Vec<GameSnapshot>, ApiError> {
        let mut games = Vec::new();
        for adapter in &self.adapters {
            games.extend(adapter.fetch_games()?);
        }
        games.shuffle(&mut rand::thread_rng());
        Ok(games)
    }

    pub fn fetch_all(&self) -> Result<Vec<GameSnapshot>, FetchError> {
        let mut last: Option<ApiError> = None;
        for attempt in 1..=self.max_attempts {
            match self.fetch_once() {
                Ok(games) => return Ok(games),
                Err(err) => {
                    warn!(
                        "fetch attempt {attempt}/{} failed: {err}",
                        self.max_attempts
                    );
                    last = Some(err);
                    if attempt < self.max_attempts {
                        thread::sleep(self.retry_delay);
                    }
                }
            }
        }

        Err(FetchError {
            attempts: self.max_attempts,
            last: last
                .unwrap_or_else(|| ApiError::Other("no fetch attempts were made".to_owned())),
        })
    }
}
