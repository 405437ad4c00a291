use crate::error::AccessError;
use crate::outcome::Outcome;

/// A value that is either [present](Optional::Present) or [absent](Optional::Absent).
///
/// Absence is the variant tag, not a property of the payload: `Optional::present(None::<i32>)` is present. The
/// variant is fixed at construction; every combinator consumes the receiver and produces a new container or a plain
/// value. Supplied functions run inline, and at most one of them runs per call.
#[must_use]
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Optional<T> {
  Present(T),
  Absent,
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::Absent }
}

impl<T> Optional<T> {
  #[inline]
  pub const fn present(value: T) -> Self { Self::Present(value) }
  #[inline]
  pub const fn absent() -> Self { Self::Absent }


  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }
  #[inline]
  pub const fn is_absent(&self) -> bool { !self.is_present() }

  /// Returns `false` if absent, otherwise the result of `predicate` applied to the payload.
  #[inline]
  pub fn is_present_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Self::Present(value) => predicate(value),
      Self::Absent => false,
    }
  }

  /// Name of the active variant: `Present` or `Absent`.
  #[inline]
  pub const fn variant_name(&self) -> &'static str {
    match self {
      Self::Present(_) => "Present",
      Self::Absent => "Absent",
    }
  }


  #[inline]
  pub fn as_ref(&self) -> Optional<&T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Absent => Optional::Absent,
    }
  }

  #[inline]
  pub fn as_mut(&mut self) -> Optional<&mut T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Absent => Optional::Absent,
    }
  }


  /// Returns the payload, or an [`AccessError`] if absent.
  #[inline]
  pub fn try_unwrap(self) -> Result<T, AccessError> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(AccessError::new("Optional", "Absent", "unwrap")),
    }
  }

  /// Returns the payload.
  ///
  /// # Panics
  ///
  /// Panics with an [`AccessError`] message if absent.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self.try_unwrap() {
      Ok(value) => value,
      Err(error) => error.raise(),
    }
  }

  #[inline]
  pub fn unwrap_or(self, fallback: T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => fallback,
    }
  }

  #[inline]
  pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => fallback(),
    }
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
    match self {
      Self::Present(value) => Optional::Present(f(value)),
      Self::Absent => Optional::Absent,
    }
  }

  #[inline]
  pub fn map_or<U>(self, fallback: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Present(value) => f(value),
      Self::Absent => fallback,
    }
  }

  #[inline]
  pub fn map_or_else<U>(self, fallback: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Present(value) => f(value),
      Self::Absent => fallback(),
    }
  }


  /// Converts into a successful outcome holding the payload, or a failed outcome holding `error` if absent.
  #[inline]
  pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
    match self {
      Self::Present(value) => Outcome::Success(value),
      Self::Absent => Outcome::Failure(error),
    }
  }

  #[inline]
  pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Outcome<T, E> {
    match self {
      Self::Present(value) => Outcome::Success(value),
      Self::Absent => Outcome::Failure(error()),
    }
  }


  /// Returns `f` applied to the payload, or absent without calling `f`.
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    match self {
      Self::Present(value) => f(value),
      Self::Absent => Optional::Absent,
    }
  }

  /// Calls `f` with the payload for its side effect and returns the receiver unchanged. The value returned by `f` is
  /// discarded. `f` is not called if absent.
  #[inline]
  pub fn and_then_continue<R>(self, f: impl FnOnce(&T) -> R) -> Self {
    if let Self::Present(value) = &self {
      f(value);
    }
    self
  }

  /// Returns `other` if present, regardless of its variant, otherwise absent.
  #[inline]
  pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
    match self {
      Self::Present(_) => other,
      Self::Absent => Optional::Absent,
    }
  }

  /// Keeps the payload only if `predicate` holds for it.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    if let Self::Present(value) = self {
      if predicate(&value) {
        return Self::Present(value);
      }
    }
    Self::Absent
  }

  #[inline]
  pub fn or(self, other: Self) -> Self {
    match self {
      Self::Present(_) => self,
      Self::Absent => other,
    }
  }

  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
    match self {
      Self::Present(_) => self,
      Self::Absent => f(),
    }
  }

  /// Calls `f` for its side effect if absent, and returns the receiver unchanged either way.
  #[inline]
  pub fn or_else_continue<R>(self, f: impl FnOnce() -> R) -> Self {
    if self.is_absent() {
      f();
    }
    self
  }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[test]
  fn variant_predicates() {
    assert!(Optional::present(1).is_present());
    assert!(!Optional::present(1).is_absent());
    assert!(Optional::<i32>::absent().is_absent());
    assert!(Optional::present(None::<i32>).is_present());
    assert!(Optional::<i32>::default().is_absent());
  }

  #[test]
  fn is_present_and_skips_predicate_when_absent() {
    let calls = Cell::new(0);
    let predicate = |v: &i32| {
      calls.set(calls.get() + 1);
      *v > 2
    };
    assert!(Optional::present(3).is_present_and(predicate));
    assert!(!Optional::present(1).is_present_and(predicate));
    assert_eq!(calls.get(), 2);
    assert!(!Optional::absent().is_present_and(predicate));
    assert_eq!(calls.get(), 2);
  }

  #[test]
  fn unwrap_present() {
    assert_eq!(Optional::present("Foo").unwrap(), "Foo");
    assert_eq!(Optional::present(4).try_unwrap(), Ok(4));
  }

  #[test]
  #[should_panic(expected = "Called `unwrap` on Absent Optional.")]
  fn unwrap_absent_panics() {
    Optional::<i32>::absent().unwrap();
  }

  #[test]
  fn try_unwrap_absent_is_access_error() {
    let error = Optional::<i32>::absent().try_unwrap().unwrap_err();
    assert_eq!(error.variant(), "Absent");
    assert_eq!(error.accessor(), "unwrap");
  }

  #[test]
  fn unwrap_or_and_unwrap_or_else() {
    assert_eq!(Optional::present(1).unwrap_or(2), 1);
    assert_eq!(Optional::absent().unwrap_or(2), 2);
    assert_eq!(Optional::present(1).unwrap_or_else(|| unreachable!()), 1);
    assert_eq!(Optional::absent().unwrap_or_else(|| 3), 3);
  }

  #[test]
  fn map_only_calls_f_when_present() {
    assert_eq!(Optional::present(2).map(|v| v * 10), Optional::present(20));
    let calls = Cell::new(0);
    let mapped = Optional::<i32>::absent().map(|v| {
      calls.set(calls.get() + 1);
      v
    });
    assert!(mapped.is_absent());
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn map_or_and_map_or_else() {
    assert_eq!(Optional::present("abc").map_or(0, |s| s.len()), 3);
    assert_eq!(Optional::<&str>::absent().map_or(0, |s| s.len()), 0);
    assert_eq!(Optional::present("abc").map_or_else(|| unreachable!(), |s| s.len()), 3);
    assert_eq!(Optional::<&str>::absent().map_or_else(|| 7, |_| unreachable!()), 7);
  }

  #[test]
  fn ok_or_converts_into_outcome() {
    assert_eq!(Optional::present(1).ok_or("error"), Outcome::success(1));
    assert_eq!(Optional::<i32>::absent().ok_or("error"), Outcome::failure("error"));
    assert_eq!(Optional::present(1).ok_or_else::<&str>(|| unreachable!()), Outcome::success(1));
    assert_eq!(Optional::<i32>::absent().ok_or_else(|| "error"), Outcome::failure("error"));
  }

  #[test]
  fn and_then_chains_and_short_circuits() {
    let halve = |v: i32| if v % 2 == 0 { Optional::present(v / 2) } else { Optional::absent() };
    assert_eq!(Optional::present(8).and_then(halve).and_then(halve), Optional::present(2));
    assert!(Optional::present(6).and_then(halve).and_then(halve).is_absent());
    assert!(Optional::absent().and_then(|_: i32| -> Optional<i32> { unreachable!() }).is_absent());
  }

  #[test]
  fn and_then_continue_keeps_payload() {
    let seen = Cell::new(0);
    let result = Optional::present(5).and_then_continue(|v| {
      seen.set(*v);
      "ignored"
    });
    assert_eq!(result, Optional::present(5));
    assert_eq!(seen.get(), 5);
    assert!(Optional::<i32>::absent().and_then_continue(|_| unreachable!()).is_absent());
  }

  #[test]
  fn and_returns_other_only_when_present() {
    assert_eq!(Optional::present(1).and(Optional::present("b")), Optional::present("b"));
    assert!(Optional::present(1).and(Optional::<&str>::absent()).is_absent());
    assert!(Optional::<i32>::absent().and(Optional::present("b")).is_absent());
  }

  #[test]
  fn filter() {
    assert!(Optional::present("Foo").filter(|s| *s == "Bar").is_absent());
    assert_eq!(Optional::present("Foo").filter(|s| *s == "Foo"), Optional::present("Foo"));
    assert!(Optional::<&str>::absent().filter(|_| unreachable!()).is_absent());
  }

  #[test]
  fn or_and_or_else() {
    assert_eq!(Optional::present(1).or(Optional::present(2)), Optional::present(1));
    assert_eq!(Optional::absent().or(Optional::present(2)), Optional::present(2));
    assert_eq!(Optional::absent().or_else(|| Optional::present("Foo")).unwrap(), "Foo");
    assert_eq!(Optional::present("Foo").or_else(|| Optional::present("Bar")).unwrap(), "Foo");
  }

  #[test]
  fn or_else_continue_only_calls_f_when_absent() {
    let calls = Cell::new(0);
    let present = Optional::present(1).or_else_continue(|| calls.set(calls.get() + 1));
    assert_eq!(present, Optional::present(1));
    assert_eq!(calls.get(), 0);
    let absent = Optional::<i32>::absent().or_else_continue(|| {
      calls.set(calls.get() + 1);
      Optional::present(9)
    });
    assert!(absent.is_absent());
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn as_ref_and_as_mut_do_not_consume() {
    let mut optional = Optional::present(String::from("foo"));
    assert_eq!(optional.as_ref().map(|s| s.len()), Optional::present(3));
    if let Optional::Present(s) = optional.as_mut() {
      s.push('!');
    }
    assert_eq!(optional.unwrap(), "foo!");
  }

  #[test]
  fn variant_name() {
    assert_eq!(Optional::present(()).variant_name(), "Present");
    assert_eq!(Optional::<()>::absent().variant_name(), "Absent");
  }
}
