//! Conversion between complex arrays and pairs of real arrays
//!
//! Complex arrays are the only representation used by the
//! computations. Coordinates given as separate x and y arrays are
//! joined once with [`from_parts`], results are split again with
//! [`to_parts`] where a consumer expects real coordinates.
use crate::error::{Error, Result};
use crate::types::FloatNum;
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use num_complex::Complex;

/// Split complex array into real and imaginary part
///
/// # Example
///```
/// use joukowski::convert::to_parts;
/// use ndarray::array;
/// use num_complex::Complex;
/// let z = array![Complex::<f64>::new(1., 2.), Complex::new(3., 4.)];
/// let (x, y) = to_parts(&z);
/// assert_eq!(x, array![1., 3.]);
/// assert_eq!(y, array![2., 4.]);
///```
pub fn to_parts<A, S, D>(z: &ArrayBase<S, D>) -> (Array<A, D>, Array<A, D>)
where
    A: FloatNum,
    S: Data<Elem = Complex<A>>,
    D: Dimension,
{
    let Complex { re, im } = z.view().split_complex();
    (re.to_owned(), im.to_owned())
}

/// Join x and y coordinates into complex points `x + i*y`
///
/// # Errors
/// Returns [`Error::ShapeMismatch`] if x and y differ in shape.
pub fn from_parts<A, S1, S2, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
) -> Result<Array<Complex<A>, D>>
where
    A: FloatNum,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    if x.shape() != y.shape() {
        return Err(Error::ShapeMismatch {
            re: x.shape().to_vec(),
            im: y.shape().to_vec(),
        });
    }
    Ok(Zip::from(x)
        .and(y)
        .map_collect(|&re, &im| Complex::new(re, im)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::streamfunction;
    use crate::transform::joukowski_transform;
    use crate::types::Complex64;
    use ndarray::{array, Array1, Array2};

    #[test]
    fn test_parts_round_trip_on_grid() {
        let x: Array2<f64> = array![[1., 2., 3.], [4., 5., 6.]];
        let y: Array2<f64> = array![[-1., 0., 1.], [0.5, 0.25, 0.125]];
        let z = from_parts(&x, &y).unwrap();
        assert_eq!(z[[1, 0]], Complex64::new(4., 0.5));
        let (x2, y2) = to_parts(&z);
        assert_eq!(x2, x);
        assert_eq!(y2, y);
    }

    #[test]
    fn test_shape_mismatch() {
        let x = Array2::<f64>::zeros((2, 3));
        let y = Array2::<f64>::zeros((3, 2));
        let err = from_parts(&x, &y).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                re: vec![2, 3],
                im: vec![3, 2]
            }
        );
    }

    #[test]
    fn test_real_coordinates_through_transform() {
        // Coordinates given as x and y arrays give the same result as
        // complex input
        let x: Array1<f64> = array![2., 0., -1.5];
        let y: Array1<f64> = array![0., 3., 0.5];
        let z = from_parts(&x, &y).unwrap();
        let (xt, yt) = to_parts(&joukowski_transform(&z, 1.));
        assert!((xt[0] - 2.5).abs() < 1e-12);
        assert!(yt[0].abs() < 1e-12);
        assert!(xt[1].abs() < 1e-12);
        assert!((yt[1] - (3. - 1. / 3.)).abs() < 1e-12);

        let psi = streamfunction(&z, 0.);
        assert_eq!(psi.shape(), x.shape());
    }
}
