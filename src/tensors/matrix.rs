use std::{
    fmt::Display,
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use tracing::debug;

use crate::domains::{
    rational::{Rational, RationalField},
    Field, Ring,
};

/// A matrix with entries that are elements of a ring `F`.
/// A vector can be represented as a matrix with one row or one column.
///
/// Every row has exactly [ncols](Matrix::ncols) entries.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Matrix<F: Ring> {
    pub(crate) rows: Vec<Vec<F::Element>>,
    pub(crate) ncols: usize,
    pub(crate) field: F,
}

impl<F: Ring> Matrix<F> {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: usize, ncols: usize, field: F) -> Matrix<F> {
        Matrix {
            rows: (0..nrows)
                .map(|_| (0..ncols).map(|_| field.zero()).collect())
                .collect(),
            ncols,
            field,
        }
    }

    /// Create a new square matrix with `nrows` rows and ones on the main diagonal and zeroes elsewhere.
    pub fn identity(nrows: usize, field: F) -> Matrix<F> {
        let mut m = Matrix::new(nrows, nrows, field);
        for i in 0..nrows {
            m.rows[i][i] = m.field.one();
        }
        m
    }

    /// Create a new matrix with the scalars `diag` on the main diagonal and zeroes elsewhere.
    pub fn eye(diag: &[F::Element], field: F) -> Matrix<F> {
        let mut m = Matrix::new(diag.len(), diag.len(), field);
        for (i, e) in diag.iter().enumerate() {
            m.rows[i][i] = e.clone();
        }
        m
    }

    /// Create a new column vector from a list of scalars.
    pub fn new_vec(data: Vec<F::Element>, field: F) -> Matrix<F> {
        Matrix {
            rows: data.into_iter().map(|e| vec![e]).collect(),
            ncols: 1,
            field,
        }
    }

    /// Convert a row-major linear representation of a matrix to a `Matrix`.
    pub fn from_linear(
        data: Vec<F::Element>,
        nrows: usize,
        ncols: usize,
        field: F,
    ) -> Result<Matrix<F>, MatrixError<F>> {
        if data.len() != nrows * ncols {
            return Err(MatrixError::ShapeMismatch);
        }

        let mut data = data.into_iter();
        Ok(Matrix {
            rows: (0..nrows)
                .map(|_| data.by_ref().take(ncols).collect())
                .collect(),
            ncols,
            field,
        })
    }

    /// Create a new matrix from a 2-dimensional vector of scalars.
    pub fn from_nested_vec(
        matrix: Vec<Vec<F::Element>>,
        field: F,
    ) -> Result<Matrix<F>, MatrixError<F>> {
        let cols = matrix.first().map(|r| r.len()).unwrap_or(0);

        if matrix.iter().any(|r| r.len() != cols) {
            return Err(MatrixError::NotRectangular);
        }

        Ok(Matrix {
            rows: matrix,
            ncols: cols,
            field,
        })
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Return the field of the matrix entries.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Get the `i`th row.
    pub fn row(&self, i: usize) -> &[F::Element] {
        &self.rows[i]
    }

    /// Get a copy of the `j`th column.
    pub fn column(&self, j: usize) -> Vec<F::Element> {
        self.rows.iter().map(|r| r[j].clone()).collect()
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> impl Iterator<Item = &[F::Element]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Return true iff every entry in the matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.rows.iter().flatten().all(|e| F::is_zero(e))
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols
    }

    /// Return true iff every non- main diagonal entry in the matrix is zero.
    pub fn is_diagonal(&self) -> bool {
        self.rows
            .iter()
            .enumerate()
            .all(|(i, r)| r.iter().enumerate().all(|(j, e)| i == j || F::is_zero(e)))
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix<F> {
        Matrix {
            rows: (0..self.ncols).map(|j| self.column(j)).collect(),
            ncols: self.nrows(),
            field: self.field.clone(),
        }
    }

    /// Concatenate the columns of `other` to the right of `self`.
    pub fn augment(&self, other: &Matrix<F>) -> Result<Matrix<F>, MatrixError<F>> {
        if self.nrows() != other.nrows() {
            return Err(MatrixError::ShapeMismatch);
        }

        Ok(Matrix {
            rows: self
                .rows
                .iter()
                .zip(&other.rows)
                .map(|(a, b)| a.iter().chain(b).cloned().collect())
                .collect(),
            ncols: self.ncols + other.ncols,
            field: self.field.clone(),
        })
    }

    /// Split the matrix into the first `col` columns and the rest.
    fn split_columns(mut self, col: usize) -> (Matrix<F>, Matrix<F>) {
        let right = self.rows.iter_mut().map(|r| r.split_off(col)).collect();
        let right = Matrix {
            rows: right,
            ncols: self.ncols - col,
            field: self.field.clone(),
        };
        self.ncols = col;
        (self, right)
    }

    /// Multiply the scalar `e` to each entry of the matrix.
    pub fn mul_scalar(&self, e: &F::Element) -> Matrix<F> {
        self.map(|ee| self.field.mul(ee, e), self.field.clone())
    }

    /// Apply a function `f` to each entry of the matrix.
    pub fn map<G: Ring>(&self, f: impl Fn(&F::Element) -> G::Element, field: G) -> Matrix<G> {
        Matrix {
            rows: self
                .rows
                .iter()
                .map(|r| r.iter().map(&f).collect())
                .collect(),
            ncols: self.ncols,
            field,
        }
    }

    /// Add two matrices, checking that the shapes are compatible.
    pub fn checked_add(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError<F>> {
        self.zip_with(rhs, |a, b| self.field.add(a, b))
    }

    /// Subtract two matrices, checking that the shapes are compatible.
    pub fn checked_sub(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError<F>> {
        self.zip_with(rhs, |a, b| self.field.sub(a, b))
    }

    fn zip_with(
        &self,
        rhs: &Matrix<F>,
        f: impl Fn(&F::Element, &F::Element) -> F::Element,
    ) -> Result<Matrix<F>, MatrixError<F>> {
        if self.nrows() != rhs.nrows() || self.ncols != rhs.ncols {
            return Err(MatrixError::ShapeMismatch);
        }

        Ok(Matrix {
            rows: self
                .rows
                .iter()
                .zip(&rhs.rows)
                .map(|(a, b)| a.iter().zip(b).map(|(x, y)| f(x, y)).collect())
                .collect(),
            ncols: self.ncols,
            field: self.field.clone(),
        })
    }

    /// Multiply two matrices, checking that the shapes are compatible.
    pub fn checked_mul(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError<F>> {
        if self.ncols != rhs.nrows() {
            return Err(MatrixError::ShapeMismatch);
        }

        let mut m = Matrix::new(self.nrows(), rhs.ncols, self.field.clone());

        for (i, row) in self.rows.iter().enumerate() {
            for j in 0..rhs.ncols {
                let sum = &mut m.rows[i][j];
                for (k, e) in row.iter().enumerate() {
                    if !F::is_zero(e) {
                        self.field.add_mul_assign(sum, e, &rhs.rows[k][j]);
                    }
                }
            }
        }

        Ok(m)
    }

    /// Compute `self^e` for a square matrix.
    pub fn pow(&self, mut e: u64) -> Result<Matrix<F>, MatrixError<F>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }

        let mut x = self.clone();
        let mut y = Matrix::identity(self.nrows(), self.field.clone());
        while e > 0 {
            if e % 2 == 1 {
                y = &y * &x;
            }
            e /= 2;
            if e > 0 {
                x = &x * &x;
            }
        }

        Ok(y)
    }

    /// Compute the sum of the diagonal entries.
    pub fn trace(&self) -> Result<F::Element, MatrixError<F>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }

        let mut t = self.field.zero();
        for (i, r) in self.rows.iter().enumerate() {
            self.field.add_assign(&mut t, &r[i]);
        }
        Ok(t)
    }

    /// Multiply row `i` by `factor`, starting at column `from_col`.
    fn scale_row(&mut self, i: usize, factor: &F::Element, from_col: usize) {
        for e in &mut self.rows[i][from_col..] {
            self.field.mul_assign(e, factor);
        }
    }

    /// Subtract `factor` times row `source` from row `target`, starting at column `from_col`.
    fn sub_mul_row(&mut self, target: usize, source: usize, factor: &F::Element, from_col: usize) {
        let (t, s) = if target > source {
            let (a, b) = self.rows.split_at_mut(target);
            (&mut b[0], &a[source])
        } else {
            let (a, b) = self.rows.split_at_mut(source);
            (&mut a[target], &b[0])
        };

        for (te, se) in t[from_col..].iter_mut().zip(&s[from_col..]) {
            self.field.sub_mul_assign(te, se, factor);
        }
    }
}

impl<F: Ring> Index<usize> for Matrix<F> {
    type Output = [F::Element];

    /// Get the `index`th row of the matrix.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<F: Ring> Index<(usize, usize)> for Matrix<F> {
    type Output = F::Element;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl<F: Ring> IndexMut<(usize, usize)> for Matrix<F> {
    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut F::Element {
        &mut self.rows[index.0][index.1]
    }
}

impl<F: Ring> Display for Matrix<F> {
    /// Print the matrix as nested lists, as in `{{1,2},{3,4}}`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, r) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str("{")?;
            for (j, e) in r.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", e)?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

impl<F: Ring> Add<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Add two matrices. Panics if the dimensions differ.
    fn add(self, rhs: &Matrix<F>) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|_| {
            panic!(
                "Cannot add matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows(),
                self.ncols,
                rhs.nrows(),
                rhs.ncols
            )
        })
    }
}

impl<F: Ring> AddAssign<&Matrix<F>> for Matrix<F> {
    /// Add two matrices in place.
    fn add_assign(&mut self, rhs: &Matrix<F>) {
        *self = &*self + rhs;
    }
}

impl<F: Ring> Sub<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Subtract two matrices. Panics if the dimensions differ.
    fn sub(self, rhs: &Matrix<F>) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|_| {
            panic!(
                "Cannot subtract matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows(),
                self.ncols,
                rhs.nrows(),
                rhs.ncols
            )
        })
    }
}

impl<F: Ring> SubAssign<&Matrix<F>> for Matrix<F> {
    /// Subtract two matrices in place.
    fn sub_assign(&mut self, rhs: &Matrix<F>) {
        *self = &*self - rhs;
    }
}

impl<F: Ring> Mul<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Multiply two matrices. Panics on a dimension mismatch.
    fn mul(self, rhs: &Matrix<F>) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|_| {
            panic!(
                "Cannot multiply matrices because of a dimension mismatch: ({},{}) vs ({},{})",
                self.nrows(),
                self.ncols,
                rhs.nrows(),
                rhs.ncols
            )
        })
    }
}

impl<F: Ring> MulAssign<&Matrix<F>> for Matrix<F> {
    /// Multiply two matrices in place.
    fn mul_assign(&mut self, rhs: &Matrix<F>) {
        *self = &*self * rhs;
    }
}

impl<F: Ring> Neg for Matrix<F> {
    type Output = Matrix<F>;

    /// Negate each entry of the matrix.
    fn neg(mut self) -> Self::Output {
        for e in self.rows.iter_mut().flatten() {
            *e = self.field.neg(e);
        }

        self
    }
}

/// Errors that can occur when performing matrix operations.
#[derive(Debug)]
pub enum MatrixError<F: Ring> {
    Underdetermined {
        min_rank: usize,
        max_rank: usize,
        row_reduced_matrix: Option<Matrix<F>>,
    },
    Inconsistent,
    NotSquare,
    NotRectangular,
    Singular,
    /// The unpivoted LU decomposition met a zero pivot at this diagonal position.
    ZeroPivot {
        index: usize,
    },
    ShapeMismatch,
    RightHandSideIsNotVector,
    Parse(String),
}

impl<F: Ring> PartialEq for MatrixError<F> {
    /// Compare the error kinds, ignoring attached matrices.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                MatrixError::Underdetermined {
                    min_rank: a1,
                    max_rank: b1,
                    ..
                },
                MatrixError::Underdetermined {
                    min_rank: a2,
                    max_rank: b2,
                    ..
                },
            ) => a1 == a2 && b1 == b2,
            (MatrixError::ZeroPivot { index: a }, MatrixError::ZeroPivot { index: b }) => a == b,
            (MatrixError::Parse(a), MatrixError::Parse(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl<F: Ring> std::fmt::Display for MatrixError<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::Underdetermined {
                min_rank,
                max_rank,
                row_reduced_matrix,
            } => {
                write!(
                    f,
                    "The system is underdetermined. The rank of the matrix is between {} and {}",
                    min_rank, max_rank
                )?;
                if let Some(m) = row_reduced_matrix {
                    write!(f, "\nRow reduced matrix:\n{}", m)?;
                }
                Ok(())
            }
            MatrixError::Inconsistent => write!(f, "The system is inconsistent"),
            MatrixError::NotSquare => write!(f, "The matrix is not square"),
            MatrixError::NotRectangular => write!(f, "The matrix is not rectangular"),
            MatrixError::Singular => write!(f, "The matrix is singular"),
            MatrixError::ZeroPivot { index } => {
                write!(f, "Zero pivot at position {} in unpivoted decomposition", index)
            }
            MatrixError::ShapeMismatch => write!(f, "The shape of the matrix is not compatible"),
            MatrixError::RightHandSideIsNotVector => {
                write!(f, "The right-hand side is not a vector")
            }
            MatrixError::Parse(s) => write!(f, "Could not parse matrix: {}", s),
        }
    }
}

impl<F: Ring> std::error::Error for MatrixError<F> {}

/// Bookkeeping of a forward elimination pass.
struct Elimination<F: Ring> {
    /// The pivot column of every nonzero row, in row order.
    pivots: Vec<usize>,
    /// The product of the pivots that were scaled to one.
    scale: F::Element,
    swaps: usize,
}

impl<F: Field> Matrix<F> {
    /// Write the matrix in echelon form with unit pivots, only pivoting in the first `max_col` columns.
    /// With `early_return`, stop at the first column without a pivot.
    fn gaussian_elimination(&mut self, max_col: usize, early_return: bool) -> Elimination<F> {
        let mut elim = Elimination {
            pivots: vec![],
            scale: self.field.one(),
            swaps: 0,
        };

        let mut i = 0;
        for j in 0..max_col {
            if i >= self.nrows() {
                break;
            }

            let Some(k) = (i..self.nrows()).find(|&k| !F::is_zero(&self.rows[k][j])) else {
                if early_return {
                    break;
                }
                continue;
            };

            if k != i {
                self.rows.swap(i, k);
                elim.swaps += 1;
            }

            let pivot = self.rows[i][j].clone();
            if !self.field.is_one(&pivot) {
                let inv_pivot = self.field.inv(&pivot);
                self.scale_row(i, &inv_pivot, j);
                self.field.mul_assign(&mut elim.scale, &pivot);
            }

            for k in i + 1..self.nrows() {
                if !F::is_zero(&self.rows[k][j]) {
                    let s = self.rows[k][j].clone();
                    self.sub_mul_row(k, i, &s, j);
                }
            }

            elim.pivots.push(j);
            i += 1;
        }

        elim
    }

    /// Create a row-reduced matrix from a matrix in echelon form with unit pivots.
    fn back_substitution(&mut self, pivots: &[usize]) {
        for (i, &j) in pivots.iter().enumerate().rev() {
            for k in 0..i {
                if !F::is_zero(&self.rows[k][j]) {
                    let s = self.rows[k][j].clone();
                    self.sub_mul_row(k, i, &s, j);
                }
            }
        }
    }

    /// Row reduce `[self | augment]`, pivoting only in the columns of `self`.
    /// Returns the reduced matrix and its pivot columns.
    fn reduce_augmented(
        &self,
        augment: &Matrix<F>,
    ) -> Result<(Matrix<F>, Vec<usize>), MatrixError<F>> {
        let mut m = self.augment(augment)?;
        let elim = m.gaussian_elimination(self.ncols, false);
        m.back_substitution(&elim.pivots);
        Ok((m, elim.pivots))
    }

    /// Compute the row echelon form, where every pivot is one.
    pub fn row_echelon(&self) -> Matrix<F> {
        let mut m = self.clone();
        m.gaussian_elimination(self.ncols, false);
        m
    }

    /// Compute the reduced row echelon form.
    pub fn reduced_row_echelon(&self) -> Matrix<F> {
        let mut m = self.clone();
        let elim = m.gaussian_elimination(self.ncols, false);
        m.back_substitution(&elim.pivots);
        m
    }

    /// Apply the row reduction of `self` to `augment` as well.
    /// Returns the reduced row echelon form of `self` and the transformed `augment`.
    pub fn reduced_row_echelon_augmented(
        &self,
        augment: &Matrix<F>,
    ) -> Result<(Matrix<F>, Matrix<F>), MatrixError<F>> {
        let (m, _) = self.reduce_augmented(augment)?;
        Ok(m.split_columns(self.ncols))
    }

    /// Compute the determinant of the matrix. The empty matrix has determinant one.
    pub fn det(&self) -> Result<F::Element, MatrixError<F>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }

        Ok(self.det_square())
    }

    /// The determinant of a square matrix, from the pivots of the elimination.
    pub(crate) fn det_square(&self) -> F::Element {
        let mut m = self.clone();
        let elim = m.gaussian_elimination(self.ncols, true);

        if elim.pivots.len() < self.nrows() {
            return self.field.zero();
        }

        if elim.swaps % 2 == 1 {
            self.field.neg(&elim.scale)
        } else {
            elim.scale
        }
    }

    /// Get the rank of the matrix.
    pub fn rank(&self) -> usize {
        self.clone()
            .gaussian_elimination(self.ncols, false)
            .pivots
            .len()
    }

    /// Compute the inverse of a square matrix, if it exists.
    /// Otherwise, this function returns `MatrixError::Singular`.
    pub fn inv(&self) -> Result<Self, MatrixError<F>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }

        let id = Matrix::identity(self.nrows(), self.field.clone());
        let (m, pivots) = self.reduce_augmented(&id)?;

        if pivots.len() < self.nrows() {
            return Err(MatrixError::Singular);
        }

        Ok(m.split_columns(self.ncols).1)
    }

    /// Compute the left inverse `(A^T A)^-1 A^T` of a matrix with independent columns.
    pub fn left_pseudo_inverse(&self) -> Result<Self, MatrixError<F>> {
        let t = self.transpose();
        let gram = &t * self;

        let (m, pivots) = gram.reduce_augmented(&t)?;
        if pivots.len() < gram.nrows() {
            return Err(MatrixError::Singular);
        }

        Ok(m.split_columns(gram.ncols).1)
    }

    /// Compute the right inverse `A^T (A A^T)^-1` of a matrix with independent rows.
    pub fn right_pseudo_inverse(&self) -> Result<Self, MatrixError<F>> {
        let gram = self * &self.transpose();

        // X = A^T (A A^T)^-1 solves (A A^T) X^T = A
        let (m, pivots) = gram.reduce_augmented(self)?;
        if pivots.len() < gram.nrows() {
            return Err(MatrixError::Singular);
        }

        Ok(m.split_columns(gram.ncols).1.transpose())
    }

    /// Solve `A * x = b` for `x`, where `A` is `self`.
    pub fn solve(&self, b: &Matrix<F>) -> Result<Matrix<F>, MatrixError<F>> {
        if self.nrows() != b.nrows() {
            return Err(MatrixError::ShapeMismatch);
        }
        if b.ncols != 1 {
            return Err(MatrixError::RightHandSideIsNotVector);
        }

        let (neqs, nvars) = (self.nrows(), self.ncols);

        if neqs < nvars {
            return Err(MatrixError::Underdetermined {
                min_rank: 0,
                max_rank: neqs,
                row_reduced_matrix: None,
            });
        }

        let mut m = self.augment(b)?;
        let elim = m.gaussian_elimination(nvars, false);
        let rank = elim.pivots.len();

        for k in rank..neqs {
            if !F::is_zero(&m.rows[k][nvars]) {
                return Err(MatrixError::Inconsistent);
            }
        }

        if rank < nvars {
            debug!("Underdetermined system of rank {} in {} variables", rank, nvars);
            return Err(MatrixError::Underdetermined {
                min_rank: rank,
                max_rank: rank,
                row_reduced_matrix: Some(m),
            });
        }

        m.back_substitution(&elim.pivots);

        Ok(Matrix::new_vec(
            m.rows.into_iter().take(nvars).map(|mut r| r.swap_remove(nvars)).collect(),
            self.field.clone(),
        ))
    }

    /// Compute the unpivoted LU decomposition `A = L * U` with Doolittle's method,
    /// where `L` is unit lower triangular and `U` is upper triangular.
    pub fn lu(&self) -> Result<(Matrix<F>, Matrix<F>), MatrixError<F>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }

        let n = self.nrows();
        let f = &self.field;
        let mut l = Matrix::identity(n, f.clone());
        let mut u = Matrix::new(n, n, f.clone());

        for i in 0..n {
            for k in i..n {
                let mut s = self.rows[i][k].clone();
                for j in 0..i {
                    f.sub_mul_assign(&mut s, &l.rows[i][j], &u.rows[j][k]);
                }
                u.rows[i][k] = s;
            }

            if i + 1 == n {
                break;
            }

            if F::is_zero(&u.rows[i][i]) {
                return Err(MatrixError::ZeroPivot { index: i });
            }

            let inv_pivot = f.inv(&u.rows[i][i]);
            for k in i + 1..n {
                let mut s = self.rows[k][i].clone();
                for j in 0..i {
                    f.sub_mul_assign(&mut s, &l.rows[k][j], &u.rows[j][i]);
                }
                l.rows[k][i] = f.mul(&s, &inv_pivot);
            }
        }

        Ok((l, u))
    }

    /// Compute the unpivoted decomposition `A = L * D * U` with `L` unit lower triangular,
    /// `D` diagonal and `U` unit upper triangular.
    pub fn ldu(&self) -> Result<(Matrix<F>, Matrix<F>, Matrix<F>), MatrixError<F>> {
        let (l, mut u) = self.lu()?;

        let diag: Vec<_> = (0..u.nrows()).map(|i| u.rows[i][i].clone()).collect();
        for (i, d) in diag.iter().enumerate() {
            if F::is_zero(d) {
                // only the last pivot can vanish
                u.rows[i][i] = self.field.one();
            } else if !self.field.is_one(d) {
                let inv = self.field.inv(d);
                u.scale_row(i, &inv, i);
            }
        }

        Ok((l, Matrix::eye(&diag, self.field.clone()), u))
    }
}

impl Matrix<RationalField> {
    /// The canonical text form: entries separated by `,` and rows by `;`.
    pub fn true_text(&self) -> String {
        self.rows
            .iter()
            .map(|r| {
                r.iter()
                    .map(|e| e.true_text())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl FromStr for Matrix<RationalField> {
    type Err = MatrixError<RationalField>;

    /// Parse rows separated by `;` with entries separated by `,`, as in `1,2;3,4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MatrixError::Parse("empty input".to_owned()));
        }

        let rows = s
            .split(';')
            .map(|r| {
                r.split(',')
                    .map(|e| {
                        e.trim()
                            .parse::<Rational>()
                            .map_err(|err| MatrixError::Parse(err.to_string()))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Matrix::from_nested_vec(rows, RationalField::new())
    }
}

#[cfg(test)]
mod test {
    use crate::domains::{
        integer::Z,
        rational::{RationalField, Q},
    };

    use super::{Matrix, MatrixError};

    fn q(s: &str) -> Matrix<RationalField> {
        s.parse().unwrap()
    }

    #[test]
    fn basics() {
        let a = Matrix::from_linear(
            vec![
                1u64.into(),
                2u64.into(),
                3u64.into(),
                4u64.into(),
                5u64.into(),
                6u64.into(),
            ],
            2,
            3,
            Z,
        )
        .unwrap();

        assert_eq!(a.transpose().rows, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);

        assert_eq!((-a.clone()).rows, vec![vec![-1, -2, -3], vec![-4, -5, -6]]);

        assert!((&a - &a).is_zero());

        let b = Matrix::from_nested_vec(
            vec![
                vec![7u64.into(), 8u64.into()],
                vec![9u64.into(), 10u64.into()],
                vec![11u64.into(), 12u64.into()],
            ],
            Z,
        )
        .unwrap();

        let c = &a * &b;

        assert_eq!(c.rows, vec![vec![58, 64], vec![139, 154]]);
        assert_eq!(&c[1], &[139, 154]);
        assert_eq!(c[(0, 1)], 64);
        assert_eq!(c.column(1), vec![64, 154]);
        assert_eq!(c.trace().unwrap(), 212);

        let mut d = a.clone();
        d += &a;

        assert_eq!(d.rows, vec![vec![2, 4, 6], vec![8, 10, 12]]);

        let c_m = c.mul_scalar(&2u64.into());
        assert_eq!(c_m.rows, vec![vec![116, 128], vec![278, 308]]);

        assert_eq!(a.checked_mul(&a), Err(MatrixError::ShapeMismatch));
        assert_eq!(a.checked_add(&b), Err(MatrixError::ShapeMismatch));
        assert_eq!(a.trace(), Err(MatrixError::NotSquare));
        assert_eq!(a.augment(&a).unwrap().ncols(), 6);
    }

    #[test]
    fn construction() {
        assert_eq!(
            Matrix::from_nested_vec(vec![vec![1.into()], vec![]], Z),
            Err(MatrixError::NotRectangular)
        );
        assert_eq!(
            Matrix::from_linear(vec![1.into(), 2.into()], 3, 1, Z),
            Err(MatrixError::ShapeMismatch)
        );
        assert!(Matrix::eye(&[1.into(), 2.into()], Q).is_diagonal());
        assert!(!q("1,2;0,1").is_diagonal());
        assert_eq!(Matrix::new_vec(vec![1.into(), 2.into()], Q), q("1;2"));
        assert_eq!(
            "1,2;3".parse::<Matrix<RationalField>>(),
            Err(MatrixError::NotRectangular)
        );
        assert!("1,a".parse::<Matrix<RationalField>>().is_err());
        assert!(matches!(
            "1_0,2;3,4".parse::<Matrix<RationalField>>(),
            Err(MatrixError::Parse(_))
        ));
        assert_eq!(" 1 , 2 ; 3 , 4 ".parse::<Matrix<RationalField>>(), Ok(q("1,2;3,4")));
    }

    #[test]
    #[should_panic]
    fn add_mismatch() {
        let _ = &q("1,2") + &q("1;2");
    }

    #[test]
    fn solve() {
        let a = Matrix::from_linear(
            vec![
                1u64.into(),
                2u64.into(),
                3u64.into(),
                4u64.into(),
                5u64.into(),
                16u64.into(),
                7u64.into(),
                8u64.into(),
                9u64.into(),
            ],
            3,
            3,
            Q,
        )
        .unwrap();

        assert_eq!(
            a.inv().unwrap(),
            Matrix::from_linear(
                vec![
                    (-83, 60).into(),
                    (1, 10).into(),
                    (17, 60).into(),
                    (19, 15).into(),
                    (-1, 5).into(),
                    (-1, 15).into(),
                    (-1, 20).into(),
                    (1, 10).into(),
                    (-1, 20).into()
                ],
                3,
                3,
                Q
            )
            .unwrap()
        );
        assert_eq!(a.det().unwrap(), 60.into());

        let b = Matrix::new_vec(vec![1u64.into(), 2u64.into(), 3u64.into()], Q);

        let r = a.solve(&b).unwrap();
        assert_eq!(r, Matrix::new_vec(vec![(-1, 3).into(), (2, 3).into(), 0.into()], Q));

        assert_eq!(a.solve(&q("1;2")), Err(MatrixError::ShapeMismatch));
        assert_eq!(
            a.solve(&q("1,1;2,2;3,3")),
            Err(MatrixError::RightHandSideIsNotVector)
        );

        let s = q("1,1;2,2");
        assert_eq!(s.solve(&q("1;3")), Err(MatrixError::Inconsistent));
        assert_eq!(
            s.solve(&q("1;2")),
            Err(MatrixError::Underdetermined {
                min_rank: 1,
                max_rank: 1,
                row_reduced_matrix: None
            })
        );
    }

    #[test]
    fn row_reduce() {
        let a = q("1,2,3;4,5,6;7,8,9");

        assert_eq!(a.rank(), 2);
        assert_eq!(a.reduced_row_echelon(), q("1,0,-1;0,1,2;0,0,0"));

        let r = a.row_echelon();
        assert_eq!(r, q("1,2,3;0,1,2;0,0,0"));
        assert_eq!(
            r.row_iter()
                .filter(|r| r.iter().any(|e| !e.is_zero()))
                .count(),
            a.rank()
        );

        let (left, right) = q("2,4;1,3")
            .reduced_row_echelon_augmented(&Matrix::identity(2, Q))
            .unwrap();
        assert_eq!(left, Matrix::identity(2, Q));
        assert_eq!(right, q("3/2,-2;-1/2,1"));
    }

    #[test]
    fn determinant() {
        assert_eq!(q("1,2;3,4").det().unwrap(), (-2).into());
        assert_eq!(Matrix::identity(4, Q).det().unwrap(), 1.into());
        assert_eq!(q("1,2,3;4,5,6;1,2,3").det().unwrap(), 0.into());
        assert_eq!(q("0,1;1,0").det().unwrap(), (-1).into());
        assert_eq!(Matrix::new(0, 0, Q).det().unwrap(), 1.into());
        assert_eq!(q("1,2").det(), Err(MatrixError::NotSquare));
    }

    #[test]
    fn inverse() {
        let a = q("3,2;15,4");
        let inv = a.inv().unwrap();
        assert_eq!(&a * &inv, Matrix::identity(2, Q));

        let a = q("3,2,15;4,9,6;7,8,17");
        let inv = a.inv().unwrap();
        assert_eq!(&a * &inv, Matrix::identity(3, Q));

        let a = q("3,2,15,4;9,6,7,8;17,45,23,12;13,14,15,16");
        let inv = a.inv().unwrap();
        assert_eq!(&a * &inv, Matrix::identity(4, Q));

        assert_eq!(q("1,0;0,1").inv().unwrap(), q("1,0;0,1"));
        assert_eq!(q("1,2;2,4").inv(), Err(MatrixError::Singular));
        assert_eq!(q("1,2").inv(), Err(MatrixError::NotSquare));
    }

    #[test]
    fn pseudo_inverse() {
        let a = q("1,0;0,1;1,1");
        let l = a.left_pseudo_inverse().unwrap();
        assert_eq!(&l * &a, Matrix::identity(2, Q));

        let t = a.transpose();
        let r = t.right_pseudo_inverse().unwrap();
        assert_eq!(&t * &r, Matrix::identity(2, Q));

        assert_eq!(q("1,2;2,4;3,6").left_pseudo_inverse(), Err(MatrixError::Singular));
    }

    #[test]
    fn lu() {
        let a = q("2,1;4,3");
        let (l, u) = a.lu().unwrap();
        assert_eq!(l, q("1,0;2,1"));
        assert_eq!(u, q("2,1;0,1"));
        assert_eq!(&l * &u, a);

        let a = q("4,3,2;2,1,3;3,2,1");
        let (l, d, u) = a.ldu().unwrap();
        assert!(d.is_diagonal());
        assert_eq!(&(&l * &d) * &u, a);

        let (l, d, u) = q("1,2;2,4").ldu().unwrap();
        assert_eq!(d, q("1,0;0,0"));
        assert_eq!(&(&l * &d) * &u, q("1,2;2,4"));

        assert_eq!(q("0,1;1,0").lu(), Err(MatrixError::ZeroPivot { index: 0 }));
    }

    #[test]
    fn power() {
        let a = q("1,1;0,1");
        assert_eq!(a.pow(5).unwrap(), q("1,5;0,1"));
        assert_eq!(a.pow(0).unwrap(), Matrix::identity(2, Q));
    }

    #[test]
    fn text() {
        let a = q("1/2,-2;0,3");
        assert_eq!(a.to_string(), "{{1/2,-2},{0,3}}");
        assert_eq!(a.true_text(), "1/2,-2;0,3");
        assert_eq!(q(&a.true_text()), a);
    }
}
