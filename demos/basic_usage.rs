// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_vector::prelude::*;

fn main() -> Result<(), VectorError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Decimal Vector Example ===\n");

    let v = Vector::new([3, 4])?;
    let w: Vector = "(1.5, -2)".parse()?;

    println!("v = {}", v);
    println!("w = {}", w);
    println!("v + w = {}", v.add(&w)?);
    println!("v - w = {}", v.subtract(&w)?);
    println!("2v = {}", v.scalar_multiply(2));
    println!("|v| = {}", v.magnitude());
    println!("unit(v) = {}", v.normalized()?);
    println!("v . w = {}", v.dot(&w)?);
    println!("angle(v, w) = {} deg", v.angle(&w, AngleUnit::Degrees)?);

    println!("\n=== Predicates ===");
    let diagonal = Vector::new([1, 1])?;
    let anti = Vector::new([1, -1])?;
    println!(
        "{} orthogonal to {}: {}",
        diagonal,
        anti,
        diagonal.is_orthogonal(&anti)?
    );
    println!(
        "{} parallel to {}: {}",
        v,
        Vector::new([-6, -8])?,
        v.is_parallel(&Vector::new([-6, -8])?)?
    );

    let strict = Tolerance::new()
        .with_comparison_places(6)
        .with_zero_tolerance(BigDecimal::new(1.into(), 12));
    let x_axis = Vector::new([1, 0])?;
    let tilted: Vector = "0.0001, 1".parse()?;
    println!(
        "{} orthogonal to {} (3 places / 6 places): {} / {}",
        x_axis,
        tilted,
        x_axis.is_orthogonal(&tilted)?,
        x_axis.is_orthogonal_with(&tilted, &strict)?
    );

    println!("\n=== Extreme Magnitudes ===");
    let tiny: Vector = "1e-15, 0".parse()?;
    let huge: Vector = "3e300, 4e300".parse()?;
    println!("|{}| = {}", tiny, tiny.magnitude());
    println!("unit({}) = {}", tiny, tiny.normalized()?);
    println!("|{}| = {}", huge, huge.magnitude());

    println!("\n=== Projection ===");
    let basis = Vector::new([5, 0])?;
    println!("proj(v onto {}) = {}", basis, v.vector_projection(&basis)?);
    println!("perp(v from {}) = {}", basis, v.component_orthogonal_to(&basis)?);

    println!("\n=== Cross Product ===");
    let x = Vector::new([1, 0, 0])?;
    let y = Vector::new([0, 1, 0])?;
    println!("{} x {} = {}", x, y, x.cross_product(&y)?);

    let ones = Vector::new([1, 1, 1])?;
    let twos = Vector::new([2, 2, 2])?;
    println!("{} x {} = {}", ones, twos, ones.cross_product(&twos)?);
    println!(
        "triangle area({}, {}) = {}",
        x,
        y,
        x.area_of_triangle_with(&y)?
    );

    println!("\n=== Errors ===");
    let zero = Vector::zero(2)?;
    if let Err(e) = zero.normalized() {
        println!("normalize {}: {}", zero, e);
    }
    if let Err(e) = zero.angle(&v, AngleUnit::Radians) {
        println!("angle with {}: {}", zero, e);
    }
    if let Err(e) = v.add(&x) {
        println!("{} + {}: {}", v, x, e);
    }

    Ok(())
}
