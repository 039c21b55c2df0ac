//! Geschlossene Auswertung der Euler-Spirale (Klothoide).
//!
//! Die Krümmung läuft linear über der Bogenlänge:
//! κ(s) = κ₀ + γ·s. Position und Richtung folgen geschlossen aus den
//! Fresnel-Integralen; die beiden Entartungen (γ = 0) fallen auf die
//! Gerade bzw. den Kreisbogen zurück und brauchen keine Integrale.

use std::f64::consts::PI;

use glam::DVec2;

use super::fresnel::fresnel;

/// Klothoiden-Löser für eine feste Krümmungsänderung γ (1/m²).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerSpiral {
    gamma: f64,
}

impl EulerSpiral {
    /// Direkt aus der Krümmungsänderung γ
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    /// Aus Anfangs- und Endkrümmung über die Segmentlänge
    pub fn from_curvatures(curv_start: f64, curv_end: f64, length: f64) -> Self {
        Self {
            gamma: (curv_end - curv_start) / length,
        }
    }

    /// Krümmungsänderung pro Bogenlänge
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Wertet Position und Fahrtrichtung bei Bogenlänge `s` aus.
    ///
    /// `origin` und `theta0` bilden die Startpose, `kappa0` ist die
    /// Krümmung am Start. Die Fahrtrichtung ist in allen Zweigen
    /// θ₀ + κ₀·s + γ·s²/2.
    pub fn eval(&self, s: f64, origin: DVec2, kappa0: f64, theta0: f64) -> (DVec2, f64) {
        let heading = theta0 + kappa0 * s + 0.5 * self.gamma * s * s;

        let position = if self.gamma == 0.0 && kappa0 == 0.0 {
            // Gerade
            origin + s * DVec2::from_angle(theta0)
        } else if self.gamma == 0.0 {
            // Kreisbogen mit Radius 1/κ₀
            let turn = kappa0 * s;
            let offset = DVec2::new(turn.sin(), 1.0 - turn.cos()) / kappa0;
            origin + DVec2::from_angle(theta0).rotate(offset)
        } else {
            // Fresnel-Zweig
            let scale = (PI * self.gamma.abs()).sqrt();
            let (sa, ca) = fresnel((kappa0 + self.gamma * s) / scale);
            let (sb, cb) = fresnel(kappa0 / scale);

            let amplitude = (PI / self.gamma.abs()).sqrt();
            let phase = theta0 - kappa0 * kappa0 / (2.0 * self.gamma);
            let delta = DVec2::new(self.gamma.signum() * (ca - cb), sa - sb);
            origin + amplitude * DVec2::from_angle(phase).rotate(delta)
        };

        (position, heading)
    }
}
