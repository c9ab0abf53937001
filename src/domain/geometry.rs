// ============================================================================
// Vector Geometry
// Magnitude, normalization, angles, predicates, projection, cross product
// ============================================================================
//
// Every method here has a default form using `Tolerance::default()` and, where
// precision matters, a `*_with` form taking explicit settings.

use super::config::Tolerance;
use super::vector::Vector;
use crate::numeric::float_bridge::{self, AngleUnit};
use crate::numeric::precision;
use crate::numeric::{InvalidArgument, VectorError, VectorResult, ZeroVectorError};
use bigdecimal::{BigDecimal, Zero};

const CROSS_PRODUCT_DIMENSION: usize = 3;

impl Vector {
    // ========================================================================
    // Length and Direction
    // ========================================================================

    /// Euclidean norm. The sum of squares keeps 30 significant digits; the
    /// root is taken in f64 on a decade-scaled mantissa, so any nonzero vector
    /// has a nonzero magnitude.
    pub fn magnitude(&self) -> BigDecimal {
        let coordinates = self.coordinates();
        float_bridge::sqrt(&float_bridge::sum_of_products(coordinates, coordinates))
    }

    /// Unit vector pointing the same way as `self`.
    ///
    /// # Errors
    /// `ZeroVectorError::Normalize` if the magnitude is zero.
    pub fn normalized(&self) -> VectorResult<Vector> {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            tracing::debug!("Cannot normalize zero vector of dimension {}", self.dimension());
            return Err(ZeroVectorError::Normalize.into());
        }
        Ok(self.scalar_multiply(float_bridge::reciprocal(&magnitude)?))
    }

    /// Sum of element-wise products.
    pub fn dot(&self, other: &Vector) -> VectorResult<BigDecimal> {
        self.ensure_same_dimension(other)?;
        Ok(float_bridge::sum_of_products(
            self.coordinates(),
            other.coordinates(),
        ))
    }

    // ========================================================================
    // Angle
    // ========================================================================

    /// Angle between `self` and `other`.
    ///
    /// The cosine is rounded to 3 decimal places before the inverse cosine so
    /// that precision noise cannot push it outside `[-1, 1]`.
    ///
    /// # Errors
    /// `ZeroVectorError::Angle` if either vector is zero.
    pub fn angle(&self, other: &Vector, unit: AngleUnit) -> VectorResult<BigDecimal> {
        self.angle_with(other, unit, &Tolerance::default())
    }

    pub fn angle_with(
        &self,
        other: &Vector,
        unit: AngleUnit,
        tolerance: &Tolerance,
    ) -> VectorResult<BigDecimal> {
        tolerance.validate()?;
        let u1 = self
            .normalized()
            .map_err(|e| e.in_context(ZeroVectorError::Angle))?;
        let u2 = other
            .normalized()
            .map_err(|e| e.in_context(ZeroVectorError::Angle))?;

        let cosine = precision::round_places(&u1.dot(&u2)?, tolerance.comparison_places);
        Ok(float_bridge::acos(&cosine, unit)?)
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// True if the magnitude is below `1e-10`.
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(&Tolerance::default_zero_tolerance())
    }

    /// True if the magnitude is strictly below `tolerance`.
    pub fn is_zero_within(&self, tolerance: &BigDecimal) -> bool {
        self.magnitude() < *tolerance
    }

    /// Parallel or anti-parallel, compared on unit vectors rounded to 3 places.
    ///
    /// A zero vector is parallel to every vector.
    pub fn is_parallel(&self, other: &Vector) -> VectorResult<bool> {
        self.is_parallel_with(other, &Tolerance::default())
    }

    pub fn is_parallel_with(&self, other: &Vector, tolerance: &Tolerance) -> VectorResult<bool> {
        tolerance.validate()?;
        if self.magnitude().is_zero() || other.magnitude().is_zero() {
            return Ok(true);
        }
        self.ensure_same_dimension(other)?;

        let u1 = self.normalized()?.round_to(tolerance.comparison_places);
        let u2 = other.normalized()?.round_to(tolerance.comparison_places);
        Ok(u1 == u2 || u1 == -&u2)
    }

    /// True if the angle between the vectors is exactly 90 degrees after the
    /// cosine rounding. A zero vector is orthogonal to every vector.
    pub fn is_orthogonal(&self, other: &Vector) -> VectorResult<bool> {
        self.is_orthogonal_with(other, &Tolerance::default())
    }

    pub fn is_orthogonal_with(&self, other: &Vector, tolerance: &Tolerance) -> VectorResult<bool> {
        tolerance.validate()?;
        if self.magnitude().is_zero() || other.magnitude().is_zero() {
            return Ok(true);
        }
        let degrees = self.angle_with(other, AngleUnit::Degrees, tolerance)?;
        Ok(degrees == BigDecimal::from(90))
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Projection of `self` onto the direction of `onto`.
    ///
    /// # Errors
    /// `ZeroVectorError::Normalize` if `onto` is the zero vector.
    pub fn vector_projection(&self, onto: &Vector) -> VectorResult<Vector> {
        let unit = onto.normalized()?;
        let weight = self.dot(&unit)?;
        Ok(unit.scalar_multiply(weight))
    }

    /// The part of `self` perpendicular to `basis`.
    pub fn component_orthogonal_to(&self, basis: &Vector) -> VectorResult<Vector> {
        self.subtract(&self.vector_projection(basis)?)
    }

    // ========================================================================
    // Cross Product (3D only)
    // ========================================================================

    /// Cross product of two 3D vectors.
    ///
    /// Zero or collinear operands (angle exactly 0 or π) give the zero vector
    /// without evaluating the determinant.
    ///
    /// # Errors
    /// `InvalidArgument::UnsupportedDimension` unless both operands are 3D.
    pub fn cross_product(&self, other: &Vector) -> VectorResult<Vector> {
        self.cross_product_with(other, &Tolerance::default())
    }

    pub fn cross_product_with(
        &self,
        other: &Vector,
        tolerance: &Tolerance,
    ) -> VectorResult<Vector> {
        tolerance.validate()?;
        self.ensure_three_dimensional()?;
        other.ensure_three_dimensional()?;

        let zero = || Vector::from_nonempty(vec![BigDecimal::zero(); CROSS_PRODUCT_DIMENSION]);

        if self.is_zero_within(&tolerance.zero_tolerance)
            || other.is_zero_within(&tolerance.zero_tolerance)
        {
            tracing::trace!("Cross product with zero vector, returning zero");
            return Ok(zero());
        }

        let angle = self.angle_with(other, AngleUnit::Radians, tolerance)?;
        if angle.is_zero() || angle == float_bridge::pi()? {
            tracing::trace!("Cross product of collinear vectors, returning zero");
            return Ok(zero());
        }

        let (x, y, z) = (&self[0], &self[1], &self[2]);
        let (p, q, r) = (&other[0], &other[1], &other[2]);

        Ok(Vector::from_nonempty(vec![
            difference_of_products(y, r, q, z),
            difference_of_products(p, z, x, r),
            difference_of_products(x, q, p, y),
        ]))
    }

    /// Area of the parallelogram spanned by two 3D vectors.
    pub fn area_of_parallelogram_with(&self, other: &Vector) -> VectorResult<BigDecimal> {
        Ok(self.cross_product(other)?.magnitude())
    }

    /// Area of the triangle spanned by two 3D vectors.
    pub fn area_of_triangle_with(&self, other: &Vector) -> VectorResult<BigDecimal> {
        let parallelogram = self.area_of_parallelogram_with(other)?;
        Ok(precision::round(parallelogram / BigDecimal::from(2)))
    }

    fn ensure_three_dimensional(&self) -> VectorResult<()> {
        if self.dimension() != CROSS_PRODUCT_DIMENSION {
            tracing::debug!(
                "Cross product requires 3D vectors, got dimension {}",
                self.dimension()
            );
            return Err(VectorError::InvalidArgument(
                InvalidArgument::UnsupportedDimension {
                    required: CROSS_PRODUCT_DIMENSION,
                    found: self.dimension(),
                },
            ));
        }
        Ok(())
    }
}

/// `a·b − c·d`, each step rounded to the working precision.
fn difference_of_products(
    a: &BigDecimal,
    b: &BigDecimal,
    c: &BigDecimal,
    d: &BigDecimal,
) -> BigDecimal {
    let ab = precision::round(a * b);
    let cd = precision::round(c * d);
    precision::round(ab - cd)
}

// ============================================================================
// Tests
// ============================================================================
