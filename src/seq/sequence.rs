//! Synchronous sequence combinators.

use crate::outcome::{Maybe, Outcome};

/// Applies a fallible operation to each element in order, collecting
/// the mapped values.
///
/// On the first `Failure` the remaining elements are not visited and
/// that failure is returned unchanged. On success the output has the
/// same length and order as the input.
///
/// # Examples
///
/// ```rust
/// use outcomars::outcome::Outcome;
/// use outcomars::seq::try_map;
///
/// let doubled = try_map([1, 3, 5], |n: i32| {
///     if n % 2 == 1 {
///         Outcome::Success(n * 2)
///     } else {
///         Outcome::Failure("even")
///     }
/// });
/// assert_eq!(doubled, Outcome::Success(vec![2, 6, 10]));
///
/// let failed = try_map([1, 2, 3], |n: i32| {
///     if n % 2 == 1 {
///         Outcome::Success(n * 2)
///     } else {
///         Outcome::Failure("even")
///     }
/// });
/// assert_eq!(failed, Outcome::Failure("even"));
/// ```
pub fn try_map<I, T, U, E, F>(items: I, mut operation: F) -> Outcome<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Outcome<U, E>,
{
    let mut values = Vec::new();
    for item in items {
        match operation(item) {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(values)
}

/// Keeps the elements whose fallible predicate holds, preserving
/// relative order.
///
/// On the first `Failure` the remaining elements are not visited and
/// that failure is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use outcomars::outcome::Outcome;
/// use outcomars::seq::try_filter;
///
/// let evens = try_filter([1, 2, 3, 4], |n| Outcome::<bool, &str>::Success(n % 2 == 0));
/// assert_eq!(evens, Outcome::Success(vec![2, 4]));
/// ```
pub fn try_filter<I, T, E, F>(items: I, mut predicate: F) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Outcome<bool, E>,
{
    let mut kept = Vec::new();
    for item in items {
        match predicate(&item) {
            Outcome::Success(true) => kept.push(item),
            Outcome::Success(false) => {}
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(kept)
}

/// Searches for the first element whose fallible predicate holds.
///
/// Returns `Success(Present(element))` for the first match,
/// `Success(Absent)` if no element matches, or the first `Failure`
/// produced by the predicate (remaining elements are not visited).
///
/// # Examples
///
/// ```rust
/// use outcomars::outcome::{Maybe, Outcome};
/// use outcomars::seq::try_find;
///
/// let found = try_find([1, 2, 3], |n| Outcome::<bool, &str>::Success(*n > 1));
/// assert_eq!(found, Outcome::Success(Maybe::Present(2)));
///
/// let missing = try_find([1, 2, 3], |n| Outcome::<bool, &str>::Success(*n > 9));
/// assert_eq!(missing, Outcome::Success(Maybe::Absent));
/// ```
pub fn try_find<I, T, E, F>(items: I, mut predicate: F) -> Outcome<Maybe<T>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Outcome<bool, E>,
{
    for item in items {
        match predicate(&item) {
            Outcome::Success(true) => return Outcome::Success(Maybe::Present(item)),
            Outcome::Success(false) => {}
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(Maybe::Absent)
}

/// Applies a fallible operation to each element for its effect,
/// discarding the values.
///
/// On the first `Failure` the remaining elements are not visited and
/// that failure is returned unchanged; otherwise returns
/// `Success(())`.
///
/// # Examples
///
/// ```rust
/// use outcomars::outcome::Outcome;
/// use outcomars::seq::try_for_each;
///
/// let mut total = 0;
/// let result = try_for_each([1, 2, 3], |n| {
///     total += n;
///     Outcome::<(), &str>::Success(())
/// });
/// assert_eq!(result, Outcome::Success(()));
/// assert_eq!(total, 6);
/// ```
pub fn try_for_each<I, T, E, F>(items: I, mut operation: F) -> Outcome<(), E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Outcome<(), E>,
{
    for item in items {
        if let Outcome::Failure(error) = operation(item) {
            return Outcome::Failure(error);
        }
    }
    Outcome::Success(())
}

/// Left fold with a fallible step, threading the accumulator through
/// in input order.
///
/// On the first `Failure` the remaining elements are not visited and
/// that failure is returned unchanged; otherwise returns `Success` of
/// the final accumulator.
///
/// # Examples
///
/// ```rust
/// use outcomars::outcome::Outcome;
/// use outcomars::seq::try_reduce;
///
/// let sum = try_reduce([1, 2, 3], 0, |acc, n| Outcome::<i32, &str>::Success(acc + n));
/// assert_eq!(sum, Outcome::Success(6));
/// ```
pub fn try_reduce<I, T, U, E, F>(items: I, init: U, mut operation: F) -> Outcome<U, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(U, T) -> Outcome<U, E>,
{
    let mut accumulator = init;
    for item in items {
        match operation(accumulator, item) {
            Outcome::Success(next) => accumulator = next,
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(accumulator)
}

/// Turns a sequence of outcomes into an outcome of a `Vec`.
///
/// Returns `Success` of every value in order if all are successes,
/// otherwise the first `Failure` (remaining elements are not visited).
///
/// # Examples
///
/// ```rust
/// use outcomars::outcome::Outcome;
/// use outcomars::seq::collect;
///
/// let all: Outcome<Vec<i32>, &str> =
///     collect([Outcome::Success(1), Outcome::Success(2)]);
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
///
/// let one_bad: Outcome<Vec<i32>, &str> =
///     collect([Outcome::Success(1), Outcome::Failure("oops")]);
/// assert_eq!(one_bad, Outcome::Failure("oops"));
/// ```
pub fn collect<I, T, E>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(values)
}

/// Separates a sequence of outcomes into its successes and failures.
///
/// Both output vectors preserve the relative order of their elements.
///
/// # Examples
///
/// ```rust
/// use outcomars::outcome::Outcome;
/// use outcomars::seq::partition;
///
/// let (values, errors) = partition([
///     Outcome::Success(1),
///     Outcome::Failure("oops"),
///     Outcome::Success(2),
/// ]);
/// assert_eq!(values, vec![1, 2]);
/// assert_eq!(errors, vec!["oops"]);
/// ```
pub fn partition<I, T, E>(outcomes: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => errors.push(error),
        }
    }
    (values, errors)
}
