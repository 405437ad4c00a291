use crate::error::AccessError;

/// Either a [successful](Outcome::Success) value of type `T` or a [failed](Outcome::Failure) error value of type
/// `E`.
///
/// A failure is an ordinary value that combinators propagate untouched; only the `unwrap` family of accessors signals
/// an [`AccessError`] when asked for a value the active variant does not hold.
#[must_use]
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Outcome<T, E> {
  Success(T),
  Failure(E),
}

impl<T, E> Outcome<T, E> {
  #[inline]
  pub const fn success(value: T) -> Self { Self::Success(value) }
  #[inline]
  pub const fn failure(error: E) -> Self { Self::Failure(error) }


  #[inline]
  pub const fn is_ok(&self) -> bool { matches!(self, Self::Success(_)) }
  #[inline]
  pub const fn is_error(&self) -> bool { !self.is_ok() }

  #[inline]
  pub fn is_ok_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Self::Success(value) => predicate(value),
      Self::Failure(_) => false,
    }
  }
  #[inline]
  pub fn is_error_and(&self, predicate: impl FnOnce(&E) -> bool) -> bool {
    match self {
      Self::Success(_) => false,
      Self::Failure(error) => predicate(error),
    }
  }

  #[inline]
  pub const fn variant_name(&self) -> &'static str {
    match self {
      Self::Success(_) => "Success",
      Self::Failure(_) => "Failure",
    }
  }


  #[inline]
  pub fn as_ref(&self) -> Outcome<&T, &E> {
    match self {
      Self::Success(value) => Outcome::Success(value),
      Self::Failure(error) => Outcome::Failure(error),
    }
  }

  #[inline]
  pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
    match self {
      Self::Success(value) => Outcome::Success(value),
      Self::Failure(error) => Outcome::Failure(error),
    }
  }


  #[inline]
  pub fn try_unwrap(self) -> Result<T, AccessError> {
    match self {
      Self::Success(value) => Ok(value),
      Self::Failure(_) => Err(AccessError::new("Outcome", "Failure", "unwrap")),
    }
  }

  #[inline]
  pub fn try_unwrap_error(self) -> Result<E, AccessError> {
    match self {
      Self::Success(_) => Err(AccessError::new("Outcome", "Success", "unwrap_error")),
      Self::Failure(error) => Ok(error),
    }
  }

  /// Returns the success value.
  ///
  /// # Panics
  ///
  /// Panics with an [`AccessError`] message if this is a failure.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self.try_unwrap() {
      Ok(value) => value,
      Err(error) => error.raise(),
    }
  }

  /// Returns the error value.
  ///
  /// # Panics
  ///
  /// Panics with an [`AccessError`] message if this is a success.
  #[inline]
  #[track_caller]
  pub fn unwrap_error(self) -> E {
    match self.try_unwrap_error() {
      Ok(error) => error,
      Err(access_error) => access_error.raise(),
    }
  }

  #[inline]
  pub fn unwrap_or(self, fallback: T) -> T {
    match self {
      Self::Success(value) => value,
      Self::Failure(_) => fallback,
    }
  }

  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
    match self {
      Self::Success(value) => value,
      Self::Failure(error) => f(error),
    }
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
    match self {
      Self::Success(value) => Outcome::Success(f(value)),
      Self::Failure(error) => Outcome::Failure(error),
    }
  }

  #[inline]
  pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
    match self {
      Self::Success(value) => Outcome::Success(value),
      Self::Failure(error) => Outcome::Failure(f(error)),
    }
  }

  #[inline]
  pub fn map_or<U>(self, fallback: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Success(value) => f(value),
      Self::Failure(_) => fallback,
    }
  }

  /// Applies `f` to the success value, or `fallback` to the error value.
  #[inline]
  pub fn map_or_else<U>(self, fallback: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Success(value) => f(value),
      Self::Failure(error) => fallback(error),
    }
  }


  /// Returns `other` if successful, otherwise this failure. The error of `other` is never used on the failing path.
  #[inline]
  pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Self::Success(_) => other,
      Self::Failure(error) => Outcome::Failure(error),
    }
  }

  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Self::Success(value) => f(value),
      Self::Failure(error) => Outcome::Failure(error),
    }
  }

  /// Calls `f` with the success value for its side effect and returns the receiver unchanged.
  #[inline]
  pub fn and_then_continue<R>(self, f: impl FnOnce(&T) -> R) -> Self {
    if let Self::Success(value) = &self {
      f(value);
    }
    self
  }

  #[inline]
  pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
    match self {
      Self::Success(value) => Outcome::Success(value),
      Self::Failure(_) => other,
    }
  }

  #[inline]
  pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
    match self {
      Self::Success(value) => Outcome::Success(value),
      Self::Failure(error) => f(error),
    }
  }

  /// Calls `f` with the error value for its side effect and returns the receiver unchanged.
  #[inline]
  pub fn or_else_continue<R>(self, f: impl FnOnce(&E) -> R) -> Self {
    if let Self::Failure(error) = &self {
      f(error);
    }
    self
  }
}

impl<E> Outcome<(), E> {
  /// Success that carries no meaningful payload.
  #[inline]
  pub const fn succeeded() -> Self { Self::Success(()) }
}

impl<T> Outcome<T, ()> {
  /// Failure that carries no meaningful error payload.
  #[inline]
  pub const fn failed() -> Self { Self::Failure(()) }
}
