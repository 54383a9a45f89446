//! Stream adapter for fallible asynchronous steps.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::{FutureExt, Stream, StreamExt};

use crate::outcome::Outcome;

use super::catch::PanicPayload;

/// Maps a stream with an asynchronous step, yielding one `Outcome` per
/// input item.
///
/// Each step is awaited under `catch_unwind` before the next item is
/// taken from the stream, so items are processed strictly in order and
/// a panicking step yields `Failure(payload)` for that item without
/// ending the stream.
///
/// To retype the failures, compose with
/// [`map_failure`](crate::outcome::Outcome::map_failure) on each item.
///
/// # Examples
///
/// ```rust
/// use futures::StreamExt;
/// use outcomars::bridge::try_map_stream;
/// use outcomars::outcome::Outcome;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let input = futures::stream::iter([1, 2, 3]);
/// let outcomes: Vec<_> = try_map_stream(input, |n| async move { n * 2 })
///     .map(|outcome| outcome.unwrap_or(0))
///     .collect()
///     .await;
/// assert_eq!(outcomes, vec![2, 4, 6]);
/// # });
/// ```
pub fn try_map_stream<S, F, Fut, U>(
    stream: S,
    mut operation: F,
) -> impl Stream<Item = Outcome<U, PanicPayload>>
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = U>,
{
    stream
        .then(move |item| AssertUnwindSafe(operation(item)).catch_unwind())
        .map(Outcome::from)
}
