use std::future::Future;

use futures::future::join;
use log::{debug, warn};
use tokio::task::JoinHandle;

use crate::clients::{
    TimeRange,
    errors::{Error, Result},
};

/// One value per time window
#[derive(Debug, Clone, PartialEq)]
pub struct ByRange<T> {
    /// Value for `TimeRange::LongTerm`
    pub long_term: T,
    /// Value for `TimeRange::ShortTerm`
    pub short_term: T,
}

impl<T> ByRange<T> {
    /// Value for `range`
    #[must_use]
    pub fn get(&self, range: TimeRange) -> &T {
        match range {
            TimeRange::LongTerm => &self.long_term,
            TimeRange::ShortTerm => &self.short_term,
        }
    }

    /// Values paired with their window, long term first
    pub fn iter(&self) -> impl Iterator<Item = (TimeRange, &T)> {
        TimeRange::ALL.into_iter().map(move |range| (range, self.get(range)))
    }
}

/// Run `fetch` for every time window concurrently and wait for all of them.
///
/// Each window runs on its own task and hands its outcome back through its
/// join handle. A failure does not cancel the sibling: both are awaited before
/// anything is inspected. If both fail, both errors are returned.
pub async fn fan_out<T, F, Fut>(fetch: F) -> Result<ByRange<T>>
where
    F: Fn(TimeRange) -> Fut,
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    let long_term = tokio::spawn(fetch(TimeRange::LongTerm));
    let short_term = tokio::spawn(fetch(TimeRange::ShortTerm));

    let (long_term, short_term) = join(settle(long_term), settle(short_term)).await;

    match (long_term, short_term) {
        (Ok(long_term), Ok(short_term)) => Ok(ByRange {
            long_term,
            short_term,
        }),
        (Err(e), Ok(_)) => {
            debug!("long_term request failed, discarding short_term result");
            Err(e)
        }
        (Ok(_), Err(e)) => {
            debug!("short_term request failed, discarding long_term result");
            Err(e)
        }
        (Err(long_term), Err(short_term)) => {
            warn!("Both time windows failed");
            Err(Error::BothRangesFailed {
                long_term: Box::new(long_term),
                short_term: Box::new(short_term),
            })
        }
    }
}

async fn settle<T>(handle: JoinHandle<Result<T>>) -> Result<T> {
    handle.await.unwrap_or_else(|e| Err(Error::Task(e)))
}
