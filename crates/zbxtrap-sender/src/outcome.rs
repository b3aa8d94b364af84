use zbxtrap_proto::TrapperResult;

use crate::error::{Result, SendError};

/// Classify a decoded acknowledgement into pass/partial/total failure.
///
/// Caller-invoked, never automatic: a bare send returns its result even
/// when every value was rejected. `failed == total` with `total > 0` is
/// a total failure; any other nonzero failure count is partial. A
/// zero-item result classifies as success, not as the vacuous `0 == 0`
/// total failure.
pub fn ensure_processed(result: TrapperResult) -> Result<TrapperResult> {
    if result.total > 0 && result.failed == result.total {
        return Err(SendError::TotalFailure { result });
    }
    if result.failed > 0 {
        return Err(SendError::PartialFailure { result });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(processed: u64, failed: u64, total: u64) -> TrapperResult {
        TrapperResult {
            processed,
            failed,
            total,
            seconds_spent: 0.001,
        }
    }

    #[test]
    fn all_processed_passes() {
        let ok = ensure_processed(result(4, 0, 4)).unwrap();
        assert_eq!(ok.processed, 4);
    }

    #[test]
    fn some_failed_is_partial() {
        let err = ensure_processed(result(2, 2, 4)).unwrap_err();
        assert!(matches!(
            err,
            SendError::PartialFailure { result } if result.failed == 2
        ));
    }

    #[test]
    fn all_failed_is_total() {
        let err = ensure_processed(result(0, 4, 4)).unwrap_err();
        assert!(matches!(
            err,
            SendError::TotalFailure { result } if result.failed == 4
        ));
    }

    #[test]
    fn empty_result_is_not_total_failure() {
        assert!(ensure_processed(result(0, 0, 0)).is_ok());
    }
}
