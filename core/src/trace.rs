//! Access-error events, emitted through `tracing` only when the `tracing` feature is enabled.

pub(crate) use access::access_error;

#[cfg(feature = "tracing")]
mod access {
  use crate::error::AccessError;

  #[cold]
  pub fn access_error(error: &AccessError) {
    tracing::error!(
      container = error.container(),
      variant = error.variant(),
      accessor = error.accessor(),
      "{}", error
    );
  }
}

#[cfg(not(feature = "tracing"))]
mod access {
  use crate::error::AccessError;

  #[inline(always)]
  pub fn access_error(_error: &AccessError) {}
}
