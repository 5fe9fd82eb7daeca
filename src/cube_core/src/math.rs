//! Exact integer vectors and matrices.
//!
//! Cubie coordinates and face normals only ever hold -1, 0, and 1, and the
//! quarter-turn matrices only permute and negate components, so everything
//! here stays integral and equality is exact.

use std::ops::Mul;

use itertools::Itertools;

/// A column-major `O`x`I` matrix: `I` columns of `O` entries each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<const O: usize, const I: usize>([[i32; O]; I]);

pub type Vector<const N: usize> = Matrix<N, 1>;

/// One axis of the coordinate frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl<const O: usize, const I: usize> Matrix<O, I> {
    /// Build a matrix out of its columns.
    #[must_use]
    pub const fn new(data: [[i32; O]; I]) -> Matrix<O, I> {
        Matrix(data)
    }

    #[must_use]
    pub const fn zero() -> Matrix<O, I> {
        Matrix([[0; O]; I])
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().flatten().all(|&entry| entry == 0)
    }
}

impl<const N: usize> Matrix<N, N> {
    #[must_use]
    pub fn identity() -> Matrix<N, N> {
        let mut identity = Matrix::zero();

        for i in 0..N {
            identity.0[i][i] = 1;
        }

        identity
    }

    /// The `n`-th power of this matrix; `pow(0)` is the identity.
    #[must_use]
    pub fn pow(&self, n: u32) -> Matrix<N, N> {
        let mut power = Matrix::identity();

        for _ in 0..n {
            power = &power * self;
        }

        power
    }
}

impl<const N: usize> Vector<N> {
    #[must_use]
    pub fn into_inner(self) -> [i32; N] {
        let [v] = self.0;
        v
    }
}

impl Vector<3> {
    /// The unit vector along `axis` pointing in the direction of `sign`.
    #[must_use]
    pub fn unit(axis: Axis, sign: i32) -> Vector<3> {
        let mut v = [0; 3];
        v[axis.index()] = sign;
        Matrix([v])
    }

    /// The component along `axis`.
    #[must_use]
    pub fn component(self, axis: Axis) -> i32 {
        self.0[0][axis.index()]
    }
}

impl<const O: usize, const M: usize, const I: usize> Mul<&Matrix<M, I>> for &Matrix<O, M> {
    type Output = Matrix<O, I>;

    fn mul(self, rhs: &Matrix<M, I>) -> Self::Output {
        Matrix(
            (0..I)
                .map(|i| {
                    (0..O)
                        .map(|j| (0..M).map(|m| self.0[m][j] * rhs.0[i][m]).sum::<i32>())
                        .collect_array()
                        .unwrap()
                })
                .collect_array()
                .unwrap(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Matrix, Vector};

    #[test]
    fn vector_ops() {
        assert!(Vector::new([[0, 0, 0]]).is_zero());
        assert!(!Vector::new([[0, -1, 0]]).is_zero());
        assert_eq!(Vector::zero(), Vector::new([[0, 0, 0]]));

        assert_eq!(Vector::unit(Axis::X, 1), Vector::new([[1, 0, 0]]));
        assert_eq!(Vector::unit(Axis::Z, -1), Vector::new([[0, 0, -1]]));

        let v = Vector::new([[2, -3, 4]]);
        assert_eq!(v.component(Axis::X), 2);
        assert_eq!(v.component(Axis::Y), -3);
        assert_eq!(v.component(Axis::Z), 4);
        assert_eq!(v.into_inner(), [2, -3, 4]);
    }

    #[test]
    fn matrix_vector_products() {
        // Quarter turn about the Z axis
        let quarter = Matrix::new([[0, 1, 0], [-1, 0, 0], [0, 0, 1]]);

        assert_eq!(
            &quarter * &Vector::new([[1, 0, 0]]),
            Vector::new([[0, 1, 0]])
        );
        assert_eq!(
            &quarter * &Vector::new([[0, 1, 0]]),
            Vector::new([[-1, 0, 0]])
        );
        assert_eq!(
            &quarter * &Vector::new([[2, 3, 4]]),
            Vector::new([[-3, 2, 4]])
        );
    }

    #[test]
    fn matrix_matrix_products() {
        let quarter = Matrix::new([[0, 1, 0], [-1, 0, 0], [0, 0, 1]]);
        let half = &quarter * &quarter;

        assert_eq!(half, Matrix::new([[-1, 0, 0], [0, -1, 0], [0, 0, 1]]));
        assert_eq!(&half * &half, Matrix::identity());
        assert_eq!(
            &Matrix::<3, 3>::identity() * &quarter,
            &quarter * &Matrix::identity()
        );
    }

    #[test]
    fn matrix_powers() {
        let quarter = Matrix::new([[0, 1, 0], [-1, 0, 0], [0, 0, 1]]);

        assert_eq!(quarter.pow(0), Matrix::identity());
        assert_eq!(quarter.pow(1), quarter);
        assert_eq!(quarter.pow(2), &quarter * &quarter);
        assert_eq!(quarter.pow(3), Matrix::new([[0, -1, 0], [1, 0, 0], [0, 0, 1]]));
        assert_eq!(quarter.pow(4), Matrix::identity());
    }
}
