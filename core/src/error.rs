use thiserror::Error;

/// Signal raised when an accessor asks a container for a value its active variant does not hold.
///
/// This always indicates a defect in the calling code: an absent [`Optional`](crate::Optional) or a failed
/// [`Outcome`](crate::Outcome) is an ordinary value, but calling `unwrap` on one is a contract violation.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[error("Called `{accessor}` on {variant} {container}.")]
pub struct AccessError {
  container: &'static str,
  variant: &'static str,
  accessor: &'static str,
}
impl AccessError {
  #[cold]
  pub(crate) fn new(container: &'static str, variant: &'static str, accessor: &'static str) -> Self {
    let error = Self { container, variant, accessor };
    crate::trace::access_error(&error);
    error
  }

  /// Name of the container type that was accessed, e.g. `Optional`.
  #[inline]
  pub fn container(&self) -> &'static str { self.container }
  /// Name of the variant that was active during the access, e.g. `Absent`.
  #[inline]
  pub fn variant(&self) -> &'static str { self.variant }
  /// Name of the misused accessor, e.g. `unwrap`.
  #[inline]
  pub fn accessor(&self) -> &'static str { self.accessor }

  /// Panic with this error's message.
  #[cold]
  #[track_caller]
  pub(crate) fn raise(self) -> ! {
    panic!("{}", self)
  }
}
