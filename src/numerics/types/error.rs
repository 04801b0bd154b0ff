// src/numerics/types/error.rs
// Error taxonomy shared by every vector and matrix operation.

use thiserror::Error;

/// Errors produced by fallible linear-algebra operations.
///
/// Every error is raised at the offending call and handed straight back to
/// the caller; the library never retries or recovers on its own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    /// Input with the wrong shape, e.g. a 3x4 slice passed to a 4x4 constructor.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Row or column index outside `[0, dimension)`.
    #[error("index {index} out of bounds for dimension {dimension}")]
    IndexOutOfBounds { index: usize, dimension: usize },

    #[error("division by zero (divisor {divisor})")]
    DivisionByZero { divisor: f32 },

    #[error("cannot normalize a zero-length vector (length {length})")]
    DegenerateVector { length: f32 },

    #[error("matrix is singular (determinant {determinant}), cannot compute inverse")]
    SingularMatrix { determinant: f32 },
}

pub type Result<T> = std::result::Result<T, LinalgError>;

/// Fails with `IndexOutOfBounds` unless both indices are below `dimension`.
pub(crate) fn check_index(row: usize, col: usize, dimension: usize) -> Result<()> {
    for index in [row, col] {
        if index >= dimension {
            return Err(LinalgError::IndexOutOfBounds { index, dimension });
        }
    }
    Ok(())
}

/// Copies a slice of rows into an `N x N` array, rejecting any other shape.
pub(crate) fn square_from_rows<const N: usize, R: AsRef<[f32]>>(rows: &[R]) -> Result<[[f32; N]; N]> {
    if rows.len() != N {
        return Err(LinalgError::InvalidArgument(format!(
            "matrix must be {n}x{n}, got {} rows",
            rows.len(),
            n = N
        )));
    }
    let mut data = [[0.0; N]; N];
    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != N {
            return Err(LinalgError::InvalidArgument(format!(
                "matrix must be {n}x{n}, row {i} has {} columns",
                row.len(),
                n = N
            )));
        }
        data[i].copy_from_slice(row);
    }
    Ok(data)
}

/// Same as `square_from_rows` for a flat row-major slice of `N * N` values.
pub(crate) fn square_from_row_major<const N: usize>(values: &[f32]) -> Result<[[f32; N]; N]> {
    if values.len() != N * N {
        return Err(LinalgError::InvalidArgument(format!(
            "matrix must be {n}x{n}, got {} values",
            values.len(),
            n = N
        )));
    }
    let mut data = [[0.0; N]; N];
    for (row, chunk) in data.iter_mut().zip(values.chunks_exact(N)) {
        row.copy_from_slice(chunk);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index_reports_offending_index() {
        assert!(check_index(0, 2, 3).is_ok());
        assert_eq!(
            check_index(3, 0, 3),
            Err(LinalgError::IndexOutOfBounds { index: 3, dimension: 3 })
        );
        assert_eq!(
            check_index(1, 7, 4),
            Err(LinalgError::IndexOutOfBounds { index: 7, dimension: 4 })
        );
    }

    #[test]
    fn test_square_from_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(square_from_rows::<2, _>(&rows), Ok([[1.0, 2.0], [3.0, 4.0]]));

        let short = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            square_from_rows::<2, _>(&short),
            Err(LinalgError::InvalidArgument(_))
        ));
        assert!(square_from_rows::<3, _>(&rows).is_err());
    }

    #[test]
    fn test_square_from_row_major() {
        assert_eq!(
            square_from_row_major::<2>(&[1.0, 2.0, 3.0, 4.0]),
            Ok([[1.0, 2.0], [3.0, 4.0]])
        );
        assert!(square_from_row_major::<2>(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = LinalgError::SingularMatrix { determinant: 0.0 };
        assert!(err.to_string().starts_with("matrix is singular"));

        let err = LinalgError::InvalidArgument("matrix must be 3x3".into());
        assert_eq!(err.to_string(), "invalid argument: matrix must be 3x3");
    }
}
