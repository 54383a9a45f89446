//! Asynchronous bridges between futures and the outcome algebra.
//!
//! A future that panics is the analog of a rejecting promise. The
//! entry points here await under `catch_unwind`, exactly as the
//! synchronous bridge wraps a closure, so a panicking future settles
//! into a `Failure` instead of unwinding through the caller.

use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind, panic_any};

use futures::FutureExt;
use futures::future::join_all;

use crate::outcome::Outcome;

use super::catch::PanicPayload;

// =============================================================================
// Future -> Outcome
// =============================================================================

/// Awaits a future, converting a panic during its execution into a
/// `Failure`.
///
/// Fulfillment becomes `Success(value)`; a panic of any payload shape
/// becomes `Failure(payload)`.
///
/// # Examples
///
/// ```rust
/// use outcomars::bridge::from_future;
/// use outcomars::outcome::Outcome;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let outcome = from_future(async { 42 }).await;
/// assert_eq!(outcome.unwrap_or(0), 42);
/// # });
/// ```
pub async fn from_future<T, Fut>(future: Fut) -> Outcome<T, PanicPayload>
where
    Fut: Future<Output = T>,
{
    AssertUnwindSafe(future).catch_unwind().await.into()
}

/// Awaits a future, converting a panic into a `Failure` mapped through
/// the given error mapper.
pub async fn from_future_with<T, E, Fut, M>(future: Fut, map_error: M) -> Outcome<T, E>
where
    Fut: Future<Output = T>,
    M: FnOnce(PanicPayload) -> E,
{
    from_future(future).await.map_failure(map_error)
}

/// Invokes an asynchronous operation and awaits it, converting a panic
/// at either stage into a `Failure`.
///
/// The call itself is caught as well as the returned future, so a
/// panic while constructing the future is also represented rather than
/// propagated.
///
/// # Examples
///
/// ```rust
/// use outcomars::bridge::{async_try_catch, panic_message};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let caught = async_try_catch(|| async { panic!("boom") }).await;
/// let payload = caught.failure().unwrap();
/// assert_eq!(panic_message(&payload), Some("boom"));
/// # });
/// ```
pub async fn async_try_catch<T, F, Fut>(operation: F) -> Outcome<T, PanicPayload>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(future) => from_future(future).await,
        Err(payload) => Outcome::Failure(payload),
    }
}

/// Invokes an asynchronous operation and awaits it, converting a panic
/// into a `Failure` mapped through the given error mapper.
pub async fn async_try_catch_with<T, E, F, Fut, M>(operation: F, map_error: M) -> Outcome<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
    M: FnOnce(PanicPayload) -> E,
{
    async_try_catch(operation).await.map_failure(map_error)
}

// =============================================================================
// Outcome -> Future
// =============================================================================

/// Materializes an `Outcome` back into the native future idiom.
///
/// The returned future resolves to the success value, or re-raises the
/// failure payload itself as a panic so that a downstream
/// `catch_unwind` can recover the original error value. This is the
/// one deliberate exit from the algebra on the asynchronous side,
/// mirroring [`Outcome::unwrap`](crate::outcome::Outcome::unwrap) on
/// the synchronous one.
///
/// # Examples
///
/// ```rust
/// use outcomars::bridge::to_future;
/// use outcomars::outcome::Outcome;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let success: Outcome<i32, String> = Outcome::Success(42);
/// assert_eq!(to_future(success).await, 42);
/// # });
/// ```
pub fn to_future<T, E>(outcome: Outcome<T, E>) -> impl Future<Output = T>
where
    E: Send + 'static,
{
    async move {
        match outcome {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic_any(error),
        }
    }
}

// =============================================================================
// Batch Aggregation
// =============================================================================

/// Awaits every future, succeeding only if all of them do.
///
/// The futures run concurrently and are all observed to settlement.
/// If every one fulfills, returns `Success` of the values in input
/// order. Otherwise returns `Failure` with the first failing payload
/// in input order - a single error, never an aggregate.
///
/// # Examples
///
/// ```rust
/// use outcomars::bridge::from_future_all;
/// use outcomars::outcome::Outcome;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let outcome = from_future_all((1..=3).map(|n| async move { n * 10 })).await;
/// assert_eq!(outcome.unwrap_or_default(), vec![10, 20, 30]);
/// # });
/// ```
pub async fn from_future_all<I, T, Fut>(futures: I) -> Outcome<Vec<T>, PanicPayload>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = T>,
{
    let settled = join_all(
        futures
            .into_iter()
            .map(|future| AssertUnwindSafe(future).catch_unwind()),
    )
    .await;

    let mut values = Vec::with_capacity(settled.len());
    for result in settled {
        match result {
            Ok(value) => values.push(value),
            Err(payload) => return Outcome::Failure(payload),
        }
    }
    Outcome::Success(values)
}

/// Awaits every future, mapping the first failing payload through the
/// given error mapper.
pub async fn from_future_all_with<I, T, E, Fut, M>(futures: I, map_error: M) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = T>,
    M: FnOnce(PanicPayload) -> E,
{
    from_future_all(futures).await.map_failure(map_error)
}

// =============================================================================
// Asynchronous Value Combinators
// =============================================================================

/// Asynchronous [`map`](crate::outcome::Outcome::map): transforms the
/// success channel with an awaited operation.
///
/// The operation is never invoked on a `Failure`. Panics inside the
/// operation are not caught here; wrap the whole computation with
/// [`async_try_catch`] when capture is wanted.
///
/// # Examples
///
/// ```rust
/// use outcomars::bridge::map_async;
/// use outcomars::outcome::Outcome;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let success: Outcome<i32, String> = Outcome::Success(21);
/// let doubled = map_async(success, |n| async move { n * 2 }).await;
/// assert_eq!(doubled, Outcome::Success(42));
/// # });
/// ```
pub async fn map_async<T, U, E, F, Fut>(outcome: Outcome<T, E>, operation: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = U>,
{
    match outcome {
        Outcome::Success(value) => Outcome::Success(operation(value).await),
        Outcome::Failure(error) => Outcome::Failure(error),
    }
}

/// Asynchronous [`and_then`](crate::outcome::Outcome::and_then):
/// chains an awaited computation that may itself fail.
pub async fn and_then_async<T, U, E, F, Fut>(
    outcome: Outcome<T, E>,
    operation: F,
) -> Outcome<U, E>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Outcome<U, E>>,
{
    match outcome {
        Outcome::Success(value) => operation(value).await,
        Outcome::Failure(error) => Outcome::Failure(error),
    }
}

/// Asynchronous [`or_else`](crate::outcome::Outcome::or_else): chains
/// an awaited recovery computation on the failure channel.
pub async fn or_else_async<T, E, F, G, Fut>(outcome: Outcome<T, E>, operation: G) -> Outcome<T, F>
where
    G: FnOnce(E) -> Fut,
    Fut: Future<Output = Outcome<T, F>>,
{
    match outcome {
        Outcome::Success(value) => Outcome::Success(value),
        Outcome::Failure(error) => operation(error).await,
    }
}

/// Asynchronous [`map_failure`](crate::outcome::Outcome::map_failure):
/// transforms the failure channel with an awaited operation.
pub async fn map_failure_async<T, E, F, G, Fut>(
    outcome: Outcome<T, E>,
    operation: G,
) -> Outcome<T, F>
where
    G: FnOnce(E) -> Fut,
    Fut: Future<Output = F>,
{
    match outcome {
        Outcome::Success(value) => Outcome::Success(value),
        Outcome::Failure(error) => Outcome::Failure(operation(error).await),
    }
}
