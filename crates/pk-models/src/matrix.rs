//! Binary interaction matrices.
//!
//! Matrices are square and index-aligned with the configured components.
//! Besides programmatic construction they can be parsed from text pasted out of
//! a spreadsheet, either as a full `n x n` block or, for symmetric parameters,
//! as the values of the upper triangle read row by row.

use nalgebra::{DMatrix, Scalar};
use pk_core::numeric::check_index;
use serde::{Serialize, Serializer};

use crate::error::{ModelError, ModelResult};

/// How values on one pasted line are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Tabs or spaces. A decimal comma is accepted (`0,05`).
    #[default]
    Whitespace,
    Comma,
}

impl Delimiter {
    pub(crate) fn split(self, line: &str) -> Vec<&str> {
        match self {
            Delimiter::Whitespace => line.split_whitespace().collect(),
            Delimiter::Comma => line
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixLayout {
    #[default]
    Full,
    UpperTriangle,
}

/// Parses one number, accepting a decimal comma.
pub(crate) fn parse_number(token: &str) -> ModelResult<f64> {
    let token = token.trim();
    token
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ModelError::Number {
            text: token.to_string(),
        })
}

/// Square matrix over `nalgebra::DMatrix`.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T: Scalar>(DMatrix<T>);

pub type InteractionMatrix = SquareMatrix<f64>;

/// Per-pair switches, e.g. which pairs of an HV-NRTL rule use a classic kij.
pub type PairFlags = SquareMatrix<bool>;

impl<T: Scalar> SquareMatrix<T> {
    pub fn from_element(n: usize, value: T) -> Self {
        Self(DMatrix::from_element(n, n, value))
    }

    pub fn from_rows(rows: &[Vec<T>]) -> ModelResult<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(ModelError::RowLength {
                    row: i + 1,
                    expected: n,
                    got: row.len(),
                });
            }
        }
        Ok(Self(DMatrix::from_fn(n, n, |i, j| rows[i][j].clone())))
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.0.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        self.0.get((i, j))
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) -> ModelResult<()> {
        check_index(i, self.dim(), "matrix row")?;
        check_index(j, self.dim(), "matrix column")?;
        self.0[(i, j)] = value;
        Ok(())
    }

    /// Sets both `(i, j)` and `(j, i)`.
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: T) -> ModelResult<()> {
        self.set(i, j, value.clone())?;
        self.set(j, i, value)
    }

    pub fn as_matrix(&self) -> &DMatrix<T> {
        &self.0
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.0
            .row_iter()
            .map(|row| row.iter().cloned().collect())
            .collect()
    }
}

impl<T: Scalar + Serialize> Serialize for SquareMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_rows())
    }
}

impl InteractionMatrix {
    pub fn zeros(n: usize) -> Self {
        Self(DMatrix::zeros(n, n))
    }

    /// Every off-diagonal entry set to `value`, diagonal zero.
    pub fn filled(n: usize, value: f64) -> Self {
        let mut matrix = DMatrix::from_element(n, n, value);
        matrix.fill_diagonal(0.0);
        Self(matrix)
    }

    /// `(M + Mᵀ) / 2`
    pub fn symmetrized(&self) -> Self {
        Self((&self.0 + self.0.transpose()) * 0.5)
    }

    pub fn with_zero_diagonal(mut self) -> Self {
        self.0.fill_diagonal(0.0);
        self
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.dim();
        (0..n).all(|i| {
            (i + 1..n).all(|j| {
                let (a, b) = (self.0[(i, j)], self.0[(j, i)]);
                (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
            })
        })
    }

    /// Parses pasted text into an `n x n` matrix with a zero diagonal.
    ///
    /// Blank lines are ignored. In the upper-triangle layout values fill
    /// `(0,1), (0,2), .., (1,2), ..` in order and are mirrored; missing trailing
    /// values stay zero. A full-layout matrix is symmetrized when `symmetric`.
    pub fn parse(
        text: &str,
        n: usize,
        layout: MatrixLayout,
        delimiter: Delimiter,
        symmetric: bool,
    ) -> ModelResult<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let matrix = match layout {
            MatrixLayout::Full => {
                if lines.len() != n {
                    return Err(ModelError::RowCount {
                        expected: n,
                        got: lines.len(),
                    });
                }
                let rows = lines
                    .iter()
                    .enumerate()
                    .map(|(i, line)| {
                        let values = delimiter
                            .split(line)
                            .into_iter()
                            .map(parse_number)
                            .collect::<ModelResult<Vec<f64>>>()?;
                        if values.len() != n {
                            return Err(ModelError::RowLength {
                                row: i + 1,
                                expected: n,
                                got: values.len(),
                            });
                        }
                        Ok(values)
                    })
                    .collect::<ModelResult<Vec<_>>>()?;
                let matrix = Self::from_rows(&rows)?;
                if symmetric {
                    matrix.symmetrized()
                } else {
                    matrix
                }
            }
            MatrixLayout::UpperTriangle => {
                let mut matrix = Self::zeros(n);
                let (mut row, mut col) = (0, 1);
                for token in lines.iter().flat_map(|line| delimiter.split(line)) {
                    let value = parse_number(token)?;
                    if row >= n || col >= n {
                        return Err(ModelError::TriangleOverflow { n });
                    }
                    matrix.set_symmetric(row, col, value)?;
                    col += 1;
                    if col >= n {
                        row += 1;
                        col = row + 1;
                    }
                }
                matrix
            }
        };

        Ok(matrix.with_zero_diagonal())
    }
}
