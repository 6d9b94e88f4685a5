use crate::encoders::CodecError;

/// Output-size ceilings checked before any codec allocates its output.
///
/// `max_encoded_len` counts symbols, `max_decoded_len` counts bytes. A
/// length that cannot even be computed without overflow always fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_encoded_len: usize,
    pub max_decoded_len: usize,
}

impl Limits {
    /// Largest length a single allocation may have.
    pub const DEFAULT_MAX_LEN: usize = isize::MAX as usize;

    pub const fn new(max_encoded_len: usize, max_decoded_len: usize) -> Self {
        Limits {
            max_encoded_len,
            max_decoded_len,
        }
    }

    pub(crate) fn check_encoded(&self, required: Option<usize>) -> Result<usize, CodecError> {
        check(required, self.max_encoded_len)
    }

    pub(crate) fn check_decoded(&self, required: Option<usize>) -> Result<usize, CodecError> {
        check(required, self.max_decoded_len)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::new(Self::DEFAULT_MAX_LEN, Self::DEFAULT_MAX_LEN)
    }
}

fn check(required: Option<usize>, limit: usize) -> Result<usize, CodecError> {
    match required {
        Some(len) if len <= limit => Ok(len),
        _ => {
            tracing::debug!(?required, limit, "output length rejected by pre-flight check");
            Err(CodecError::CapacityExceeded { required, limit })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_encoded_len, isize::MAX as usize);
        assert_eq!(limits.check_encoded(Some(1024)), Ok(1024));
    }

    #[test]
    fn test_rejects_over_limit_and_overflow() {
        let limits = Limits::new(8, 4);
        assert_eq!(limits.check_encoded(Some(8)), Ok(8));
        assert_eq!(
            limits.check_encoded(Some(9)),
            Err(CodecError::CapacityExceeded {
                required: Some(9),
                limit: 8
            })
        );
        assert_eq!(
            limits.check_decoded(None),
            Err(CodecError::CapacityExceeded {
                required: None,
                limit: 4
            })
        );
    }
}
