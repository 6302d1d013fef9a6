use p3_field::Field;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Rejection-samples until the draw is non-zero.
    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl<F> RandomField for F
where
    F: Field,
    StandardUniform: Distribution<F>,
{
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }

    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let value = Self::random(rng);
            if value != F::ZERO {
                return value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseField, ScalarField};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_nonzero() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..32 {
            assert!(!BaseField::random_nonzero(&mut rng).is_zero());
            assert!(!ScalarField::random_nonzero(&mut rng).is_zero());
        }
    }
}
