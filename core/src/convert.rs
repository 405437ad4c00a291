//! Conversions between the containers, and to and from the standard library's `Option` and `Result`.

use crate::optional::Optional;
use crate::outcome::Outcome;

impl<T> Optional<T> {
  #[inline]
  pub fn from_option(option: Option<T>) -> Self {
    match option {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }
  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Absent => None,
    }
  }
}
impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(option: Option<T>) -> Self { Self::from_option(option) }
}
impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.into_option() }
}

impl<T, E> Outcome<T, E> {
  #[inline]
  pub fn from_result(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::Success(value),
      Err(error) => Self::Failure(error),
    }
  }
  #[inline]
  pub fn into_result(self) -> Result<T, E> {
    match self {
      Self::Success(value) => Ok(value),
      Self::Failure(error) => Err(error),
    }
  }

  /// Converts into the success value if successful, discarding any error.
  #[inline]
  pub fn ok(self) -> Optional<T> {
    match self {
      Self::Success(value) => Optional::Present(value),
      Self::Failure(_) => Optional::Absent,
    }
  }
  /// Converts into the error value if failed, discarding any success value.
  #[inline]
  pub fn error(self) -> Optional<E> {
    match self {
      Self::Success(_) => Optional::Absent,
      Self::Failure(error) => Optional::Present(error),
    }
  }
}
impl<T, E> From<Result<T, E>> for Outcome<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self { Self::from_result(result) }
}
impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  #[inline]
  fn from(outcome: Outcome<T, E>) -> Self { outcome.into_result() }
}
