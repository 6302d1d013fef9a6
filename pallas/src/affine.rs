// Pallas: y^2 = x^3 + 5 over GF(p)
// p = 0x40000000000000000000000000000000224698fc094cf91b992d30ed00000001
// Group order q = 0x40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001 (prime, cofactor 1)
// Generator: (1, 12418654782883325593414442427049395787963493412651469444558597405572177144507)

use crate::projective::Projective;
use crate::{
    double_scalar_mul_basepoint_affine, mul_generator_affine, BaseField, DecodeError, Group,
    ScalarField,
};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

// Canonical limbs of the generator's y-coordinate.
const GENERATOR_Y: [u64; 4] = [
    0x19cf7a23caed2abb,
    0x8f655bd4333d4771,
    0x53dfa9f06378ee54,
    0x1b74b5a30a12937c,
];

/// Affine point on the elliptic curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
///
/// Deserialization rejects coordinates that are not on the curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "AffineCoords", try_from = "AffineCoords")]
pub struct Affine {
    /// The x-coordinate of the point
    pub x: BaseField,
    /// The y-coordinate of the point
    pub y: BaseField,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

/// Unchecked wire form of [`Affine`].
#[derive(Copy, Clone, Serialize, Deserialize)]
#[serde(rename = "Affine")]
struct AffineCoords {
    x: BaseField,
    y: BaseField,
    is_infinity: bool,
}

impl From<Affine> for AffineCoords {
    fn from(point: Affine) -> Self {
        AffineCoords {
            x: point.x,
            y: point.y,
            is_infinity: point.is_infinity,
        }
    }
}

impl TryFrom<AffineCoords> for Affine {
    type Error = DecodeError;

    fn try_from(coords: AffineCoords) -> Result<Self, Self::Error> {
        if !coords.is_infinity {
            return Affine::from_xy(coords.x, coords.y);
        }
        if coords.x.is_zero() && coords.y.is_zero() {
            Ok(Affine::INFINITY)
        } else {
            Err(DecodeError::NotOnCurve)
        }
    }
}

/// A point folded to its x-coordinate and the parity of its y-coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompressedPoint {
    pub x: BaseField,
    pub is_odd: bool,
}

impl Affine {
    /// The 'b' coefficient: 5 (a = 0)
    #[inline]
    pub(crate) fn curve_b() -> BaseField {
        BaseField::from_canonical_u64(5)
    }

    /// The point at infinity (identity element)
    pub const INFINITY: Self = Affine {
        x: BaseField::ZERO,
        y: BaseField::ZERO,
        is_infinity: true,
    };

    /// Create a new affine point without checking the curve equation.
    pub fn new(x: BaseField, y: BaseField) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Create a point, rejecting coordinates that are not on the curve.
    pub fn from_xy(x: BaseField, y: BaseField) -> Result<Self, DecodeError> {
        let point = Affine::new(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(DecodeError::NotOnCurve)
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check if a point is on the curve: y^2 = x^3 + 5.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }

        let y2 = self.y.square();
        let x3 = self.x.square() * self.x;
        y2 == x3 + Self::curve_b()
    }

    /// The fixed generator (1, sqrt(6)) with odd y.
    pub fn generator() -> Self {
        Affine::new(
            BaseField::ONE,
            BaseField::from_reduced_limbs(GENERATOR_Y),
        )
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity {
            return *self;
        }

        // If y = 0, then 2P = O
        if self.y.is_zero() {
            return Self::INFINITY;
        }

        // Compute slope: λ = 3x^2 / (2y)
        let x2 = self.x.square();
        let numerator = x2.double() + x2;
        let denominator = self.y.double();
        let lambda = numerator * denominator.inverse_or_zero();

        // x_r = λ^2 - 2x
        let x_r = lambda.square() - self.x.double();

        // y_r = λ(x - x_r) - y
        let y_r = lambda * (self.x - x_r) - self.y;

        Affine::new(x_r, y_r)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        Affine::new(self.x, -self.y)
    }

    /// Fold to `(x, is_odd)`. The identity has no compressed form.
    pub fn compress(&self) -> Option<CompressedPoint> {
        if self.is_infinity {
            return None;
        }
        Some(CompressedPoint {
            x: self.x,
            is_odd: self.y.is_odd(),
        })
    }

    /// Recover the point with the given x-coordinate and y parity.
    pub fn decompress(compressed: &CompressedPoint) -> Result<Self, DecodeError> {
        let rhs = compressed.x.square() * compressed.x + Self::curve_b();
        let root = rhs.sqrt().ok_or(DecodeError::NotOnCurve)?;
        let y = if root.is_odd() == compressed.is_odd {
            root
        } else {
            -root
        };
        Ok(Affine::new(compressed.x, y))
    }

    /// Multiply the fixed generator using a precomputed table.
    pub fn mul_generator(scalar: &ScalarField) -> Self {
        mul_generator_affine(scalar)
    }

    /// Compute a * G + b * P, where G is the fixed generator.
    pub fn double_scalar_mul_basepoint(a: &ScalarField, b: &ScalarField, point: &Self) -> Self {
        double_scalar_mul_basepoint_affine(a, b, point)
    }
}

impl Group for Affine {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn mul_generator(scalar: &ScalarField) -> Self {
        Affine::mul_generator(scalar)
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    // Affine additions each cost an inversion, so run the ladder in Jacobian form.
    fn scalar_mul(&self, scalar: &ScalarField) -> Self {
        Projective::from_affine(self)
            .scalar_mul_windowed(scalar)
            .to_affine()
    }
}

// Implement addition for affine points
impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        // Handle infinity cases
        if self.is_infinity {
            return other;
        }
        if other.is_infinity {
            return self;
        }

        // Check if points are the same
        if self.x == other.x {
            if self.y == other.y {
                // Point doubling
                return self.double();
            } else {
                // Points are inverses, return infinity
                return Self::INFINITY;
            }
        }

        // Regular point addition
        // λ = (y2 - y1) / (x2 - x1)
        let numerator = other.y - self.y;
        let denominator = other.x - self.x;
        let lambda = numerator * denominator.inverse_or_zero();

        // x_r = λ^2 - x1 - x2
        let x_r = lambda.square() - self.x - other.x;

        // y_r = λ(x1 - x_r) - y1
        let y_r = lambda * (self.x - x_r) - self.y;

        Affine::new(x_r, y_r)
    }
}

impl AddAssign for Affine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Scalar multiplication
impl Mul<ScalarField> for Affine {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl Mul<&ScalarField> for Affine {
    type Output = Self;

    fn mul(self, scalar: &ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

impl Mul<Affine> for ScalarField {
    type Output = Affine;

    fn mul(self, point: Affine) -> Affine {
        <Affine as Group>::scalar_mul(&point, &self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;

    #[test]
    fn test_infinity() {
        let inf = Affine::INFINITY;
        assert!(inf.is_infinity());
        assert!(inf.is_on_curve());
        assert!(inf.compress().is_none());
    }

    #[test]
    fn test_generator_on_curve() {
        let g = Affine::generator();
        assert!(g.is_on_curve(), "Generator point is not on the curve");
        assert!(!g.is_infinity());
        assert!(g.y.is_odd());
        assert_eq!(
            g.y.to_string(),
            "12418654782883325593414442427049395787963493412651469444558597405572177144507"
        );
    }

    #[test]
    fn test_from_xy_rejects_off_curve() {
        let g = Affine::generator();
        assert!(Affine::from_xy(g.x, g.y).is_ok());
        assert_eq!(
            Affine::from_xy(g.x, g.y + BaseField::ONE),
            Err(DecodeError::NotOnCurve)
        );
    }

    #[test]
    fn test_point_addition_with_infinity() {
        let g = Affine::generator();
        let inf = Affine::INFINITY;

        assert_eq!(g + inf, g);
        assert_eq!(inf + g, g);
        assert_eq!(inf + inf, inf);
    }

    #[test]
    fn test_point_doubling() {
        let g = Affine::generator();
        let g2 = g.double();

        assert!(g2.is_on_curve(), "Doubled point is not on the curve");
        assert_eq!(g + g, g2);
        assert_eq!(
            g2.x.to_string(),
            "18092513943330655534932966407607485602101910301213475447471672977718729768959"
        );
    }

    #[test]
    fn test_point_negation() {
        let g = Affine::generator();
        let neg_g = g.negate();

        assert!(neg_g.is_on_curve());
        assert_eq!(g + neg_g, Affine::INFINITY);
    }

    #[test]
    fn test_compress_round_trip() {
        let g = Affine::generator();
        for k in 1..8u64 {
            let point = g.mul_u64(k);
            let compressed = point.compress().expect("finite point");
            assert_eq!(Affine::decompress(&compressed), Ok(point));
        }
    }

    #[test]
    fn test_decompress_rejects_missing_x() {
        // x = 0 gives y^2 = 5, and 5 is a non-residue.
        let compressed = CompressedPoint {
            x: BaseField::ZERO,
            is_odd: false,
        };
        assert_eq!(Affine::decompress(&compressed), Err(DecodeError::NotOnCurve));
    }

    #[test]
    fn test_scalar_multiplication() {
        let g = Affine::generator();
        let scalar = ScalarField::from_canonical_u64(5);
        let result = g.scalar_mul(&scalar);

        // 5*G = G + G + G + G + G
        let expected = g + g + g + g + g;
        assert_eq!(result, expected);
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_scalar_mul_zero() {
        let g = Affine::generator();
        let result = g.scalar_mul(&ScalarField::ZERO);
        assert_eq!(result, Affine::INFINITY);
        assert_eq!(
            Affine::INFINITY.scalar_mul(&ScalarField::from_canonical_u64(3)),
            Affine::INFINITY
        );
    }

    #[test]
    fn test_scalar_mul_one() {
        let g = Affine::generator();
        let result = g.scalar_mul(&ScalarField::ONE);
        assert_eq!(result, g);
    }

    #[test]
    fn test_associativity() {
        let g = Affine::generator();
        let a = ScalarField::from_canonical_u64(3);
        let b = ScalarField::from_canonical_u64(5);

        // (a + b) * G = a*G + b*G
        let left = g.scalar_mul(&(a + b));
        let right = g.scalar_mul(&a) + g.scalar_mul(&b);

        assert_eq!(left, right);
    }

    #[test]
    fn test_mul_generator() {
        let scalar = ScalarField::from_canonical_u64(123456);
        let result = Affine::mul_generator(&scalar);
        let expected = Affine::generator().scalar_mul(&scalar);

        assert_eq!(result, expected);
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_double_scalar_mul_basepoint() {
        let g = Affine::generator();
        let p = g.mul_u64(17);
        let a = ScalarField::from_canonical_u64(1000);
        let b = -ScalarField::from_canonical_u64(31);

        let result = Affine::double_scalar_mul_basepoint(&a, &b, &p);
        let expected = g.scalar_mul(&a) + p.scalar_mul(&b);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_group_properties() {
        let g = Affine::generator();

        assert_eq!(g.double(), g + g);

        let triple1 = g + g + g;
        let triple2 = g.mul_u64(3);
        assert_eq!(triple1, triple2);

        let h = g.mul_u64(5);
        let neg_h = -h;
        assert_eq!(h + neg_h, Affine::INFINITY);
    }

    #[test]
    fn test_serde_round_trip() {
        for point in [Affine::generator().mul_u64(9), Affine::INFINITY] {
            let bytes = bincode::serialize(&point).unwrap();
            assert_eq!(bincode::deserialize::<Affine>(&bytes).unwrap(), point);
        }

        let projective = Projective::generator().double();
        let bytes = bincode::serialize(&projective).unwrap();
        assert_eq!(bincode::deserialize::<Projective>(&bytes).unwrap(), projective);
    }

    #[test]
    fn test_deserialize_rejects_points_off_curve() {
        let g = Affine::generator();
        let off_curve = AffineCoords {
            x: g.x,
            y: g.y + BaseField::ONE,
            is_infinity: false,
        };
        let bytes = bincode::serialize(&off_curve).unwrap();
        assert!(bincode::deserialize::<Affine>(&bytes).is_err());
        assert!(bincode::deserialize::<Projective>(&bytes).is_err());

        let bad_infinity = AffineCoords {
            x: BaseField::ONE,
            y: BaseField::ZERO,
            is_infinity: true,
        };
        let bytes = bincode::serialize(&bad_infinity).unwrap();
        assert!(bincode::deserialize::<Affine>(&bytes).is_err());
    }
}
