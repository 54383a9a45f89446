//! Asynchronous sequence combinators.
//!
//! These mirror the synchronous combinators exactly: elements are
//! visited strictly one at a time, in input order, and each step is
//! awaited to settlement before the next begins. No concurrency is
//! introduced, which keeps the short-circuit and ordering contract
//! deterministic. There is no cancellation; once a step's future has
//! been started it is observed to completion.

use std::future::Future;

use crate::outcome::{Maybe, Outcome};

/// Asynchronous [`try_map`](crate::seq::try_map): applies a fallible
/// asynchronous operation to each element in order, collecting the
/// mapped values.
///
/// On the first `Failure` the remaining elements are not visited and
/// that failure is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use outcomars::outcome::Outcome;
/// use outcomars::seq::try_map_async;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let doubled = try_map_async([1, 2, 3], |n| async move {
///     Outcome::<i32, &str>::Success(n * 2)
/// })
/// .await;
/// assert_eq!(doubled, Outcome::Success(vec![2, 4, 6]));
/// # });
/// ```
pub async fn try_map_async<I, T, U, E, F, Fut>(items: I, mut operation: F) -> Outcome<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Outcome<U, E>>,
{
    let mut values = Vec::new();
    for item in items {
        match operation(item).await {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(values)
}

/// Asynchronous [`try_filter`](crate::seq::try_filter): keeps the
/// elements whose fallible asynchronous predicate holds, preserving
/// relative order.
///
/// On the first `Failure` the remaining elements are not visited and
/// that failure is returned unchanged.
pub async fn try_filter_async<I, T, E, F, Fut>(items: I, mut predicate: F) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Fut,
    Fut: Future<Output = Outcome<bool, E>>,
{
    let mut kept = Vec::new();
    for item in items {
        match predicate(&item).await {
            Outcome::Success(true) => kept.push(item),
            Outcome::Success(false) => {}
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(kept)
}

/// Asynchronous [`try_find`](crate::seq::try_find): searches for the
/// first element whose fallible asynchronous predicate holds.
///
/// Returns `Success(Present(element))` for the first match,
/// `Success(Absent)` if no element matches, or the first `Failure`
/// produced by the predicate.
pub async fn try_find_async<I, T, E, F, Fut>(items: I, mut predicate: F) -> Outcome<Maybe<T>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Fut,
    Fut: Future<Output = Outcome<bool, E>>,
{
    for item in items {
        match predicate(&item).await {
            Outcome::Success(true) => return Outcome::Success(Maybe::Present(item)),
            Outcome::Success(false) => {}
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(Maybe::Absent)
}

/// Asynchronous [`try_for_each`](crate::seq::try_for_each): applies a
/// fallible asynchronous operation to each element for its effect.
///
/// On the first `Failure` the remaining elements are not visited and
/// that failure is returned unchanged; otherwise returns
/// `Success(())`.
pub async fn try_for_each_async<I, T, E, F, Fut>(items: I, mut operation: F) -> Outcome<(), E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Outcome<(), E>>,
{
    for item in items {
        if let Outcome::Failure(error) = operation(item).await {
            return Outcome::Failure(error);
        }
    }
    Outcome::Success(())
}

/// Asynchronous [`try_reduce`](crate::seq::try_reduce): left fold with
/// a fallible asynchronous step, threading the accumulator through in
/// input order.
///
/// On the first `Failure` the remaining elements are not visited and
/// that failure is returned unchanged; otherwise returns `Success` of
/// the final accumulator.
pub async fn try_reduce_async<I, T, U, E, F, Fut>(
    items: I,
    init: U,
    mut operation: F,
) -> Outcome<U, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(U, T) -> Fut,
    Fut: Future<Output = Outcome<U, E>>,
{
    let mut accumulator = init;
    for item in items {
        match operation(accumulator, item).await {
            Outcome::Success(next) => accumulator = next,
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn test_try_map_async_stops_at_first_failure() {
        let mut calls = 0;
        let result = try_map_async([1, 2, 3], |n: i32| {
            calls += 1;
            async move {
                if n % 2 == 1 {
                    Outcome::Success(n * 2)
                } else {
                    Outcome::Failure("even")
                }
            }
        })
        .await;
        assert_eq!(result, Outcome::Failure("even"));
        assert_eq!(calls, 2);
    }
}
