//! Adaptive Simpson-Quadratur für Bogenlängen-Integrale.

use crate::core::error::GeometryError;

/// Integriert `f` über `[a, b]` adaptiv bis zur absoluten Toleranz.
///
/// Richardson-Kriterium: ein Intervall gilt als konvergiert, wenn die
/// halbierte Auswertung um weniger als `15·tolerance` vom Grobwert
/// abweicht; der Restfehler wird mit `(fein − grob)/15` korrigiert.
/// Ist `max_depth` erschöpft bevor das Kriterium greift, bricht die
/// Integration mit einem Fehler ab statt still ein ungenaues Ergebnis
/// zu liefern.
pub fn adaptive_simpson<F>(
    f: &F,
    a: f64,
    b: f64,
    tolerance: f64,
    max_depth: usize,
) -> Result<f64, GeometryError>
where
    F: Fn(f64) -> f64,
{
    let whole = simpson_step(f, a, b);
    refine(f, a, b, tolerance, whole, max_depth)
}

/// Einfacher Simpson-Schritt über `[a, b]`
fn simpson_step<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> f64 {
    let mid = 0.5 * (a + b);
    let h = (b - a) / 6.0;
    h * (f(a) + 4.0 * f(mid) + f(b))
}

fn refine<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    tolerance: f64,
    whole: f64,
    depth: usize,
) -> Result<f64, GeometryError> {
    let mid = 0.5 * (a + b);
    let left = simpson_step(f, a, mid);
    let right = simpson_step(f, mid, b);
    let combined = left + right;
    let residual = combined - whole;

    if residual.abs() < 15.0 * tolerance {
        return Ok(combined + residual / 15.0);
    }
    if depth == 0 {
        return Err(GeometryError::IntegrationDiverged {
            residual: residual.abs(),
        });
    }

    let half_tol = 0.5 * tolerance;
    Ok(refine(f, a, mid, half_tol, left, depth - 1)? + refine(f, mid, b, half_tol, right, depth - 1)?)
}
