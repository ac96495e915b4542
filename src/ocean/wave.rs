//! Wave generators and the ordered wave field folded over every vertex.

use std::fmt;

use glam::{Vec2, Vec3};

use crate::error::Result;
use crate::params::{PhaseRateModel, WaveParams, DEFAULT_STEEPNESS};

/// A displacement source that can be layered on top of other waves.
///
/// Implementations must be pure: the same `(rest, prior, time_s)` always
/// yields the same offset.
pub trait WaveGenerator: Send + Sync + fmt::Debug {
    /// Add this wave's contribution at `rest` and `time_s` to `prior`
    fn displace(&self, rest: Vec2, prior: Vec3, time_s: f32) -> Vec3;
}

/// Trochoidal (Gerstner) wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GerstnerWave {
    direction: Vec2,
    amplitude: f32,
    wavelength: f32,
    speed: f32,
    wavenumber: f32,
    steepness: f32,
    phase_rate: f32,
}

impl GerstnerWave {
    /// Build a wave, deriving its phase rate from `model`
    pub fn new(params: &WaveParams, model: PhaseRateModel) -> Result<Self> {
        params.validate()?;
        let wavelength = params.wavelength_m;
        Ok(Self {
            direction: Vec2::from_array(params.direction).normalize(),
            amplitude: params.amplitude_m,
            wavelength,
            speed: params.speed,
            wavenumber: std::f32::consts::TAU / wavelength,
            steepness: DEFAULT_STEEPNESS,
            phase_rate: model.phase_rate(params.speed, wavelength),
        })
    }

    /// Override the choppiness constant
    pub fn with_steepness(mut self, steepness: f32) -> Self {
        self.steepness = steepness;
        self
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn wavelength(&self) -> f32 {
        self.wavelength
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// `K = 2π / λ`
    pub fn wavenumber(&self) -> f32 {
        self.wavenumber
    }

    pub fn steepness(&self) -> f32 {
        self.steepness
    }

    /// Radians of phase advance per second
    pub fn phase_rate(&self) -> f32 {
        self.phase_rate
    }

    /// Seconds for the phase to advance by one full turn (infinite if static)
    pub fn period_s(&self) -> f32 {
        std::f32::consts::TAU / self.phase_rate
    }

    fn phase(&self, rest: Vec2, time_s: f32) -> f32 {
        self.wavenumber * self.direction.dot(rest) + self.phase_rate * time_s
    }
}

impl WaveGenerator for GerstnerWave {
    fn displace(&self, rest: Vec2, prior: Vec3, time_s: f32) -> Vec3 {
        let (sin, cos) = self.phase(rest, time_s).sin_cos();
        let horizontal = self.steepness * self.amplitude * cos;
        prior
            + Vec3::new(
                horizontal * self.direction.x,
                horizontal * self.direction.y,
                self.amplitude * sin,
            )
    }
}

/// Ordered collection of wave generators; order is the fold order
#[derive(Debug, Default)]
pub struct WaveField {
    waves: Vec<Box<dyn WaveGenerator>>,
}

impl WaveField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build Gerstner waves from parameter tuples, preserving their order
    pub fn from_params(params: &[WaveParams], model: PhaseRateModel) -> Result<Self> {
        let mut field = Self::new();
        for wave in params {
            field.push(GerstnerWave::new(wave, model)?);
        }
        Ok(field)
    }

    pub fn push(&mut self, wave: impl WaveGenerator + 'static) {
        self.waves.push(Box::new(wave));
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn WaveGenerator>> {
        self.waves.iter()
    }

    /// Left fold of every wave over a zero offset
    #[inline]
    pub fn displace(&self, rest: Vec2, time_s: f32) -> Vec3 {
        self.waves
            .iter()
            .fold(Vec3::ZERO, |offset, wave| wave.displace(rest, offset, time_s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WavePreset;

    const EPS: f32 = 1e-4;

    fn single_wave(speed: f32) -> GerstnerWave {
        let params = WaveParams::new([1.0, 0.0], 1.0, 32.0, speed);
        GerstnerWave::new(&params, PhaseRateModel::SpeedOverWavelength).unwrap()
    }

    #[test]
    fn test_derived_terms() {
        let wave = single_wave(8.0);
        assert!((wave.wavenumber() - std::f32::consts::TAU / 32.0).abs() < 1e-6);
        assert!((wave.phase_rate() - 0.5).abs() < 1e-6);
        assert_eq!(wave.steepness(), DEFAULT_STEEPNESS);
    }

    #[test]
    fn test_direction_is_normalized() {
        let params = WaveParams::new([3.0, 4.0], 1.0, 10.0, 1.0);
        let wave = GerstnerWave::new(&params, PhaseRateModel::default()).unwrap();
        assert!((wave.direction().length() - 1.0).abs() < 1e-6);
        assert!((wave.direction() - Vec2::new(0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_displace_at_origin() {
        // phase = 0: full horizontal push, zero height
        let wave = single_wave(1.0);
        let offset = wave.displace(Vec2::ZERO, Vec3::ZERO, 0.0);
        assert!((offset.x - DEFAULT_STEEPNESS).abs() < EPS);
        assert!(offset.y.abs() < EPS);
        assert!(offset.z.abs() < EPS);
    }

    #[test]
    fn test_displace_quarter_wavelength() {
        // phase = π/2: crest, no horizontal push
        let wave = single_wave(1.0);
        let offset = wave.displace(Vec2::new(8.0, 0.0), Vec3::ZERO, 0.0);
        assert!(offset.x.abs() < EPS);
        assert!((offset.z - 1.0).abs() < EPS);
    }

    #[test]
    fn test_displace_adds_prior() {
        let wave = single_wave(1.0);
        let prior = Vec3::new(1.0, 2.0, 3.0);
        let rest = Vec2::new(5.0, 7.0);
        let alone = wave.displace(rest, Vec3::ZERO, 1.5);
        let stacked = wave.displace(rest, prior, 1.5);
        assert!((stacked - (alone + prior)).length() < EPS);
    }

    #[test]
    fn test_time_periodicity() {
        for speed in [1.0, 3.5, 12.0] {
            let wave = single_wave(speed);
            let period = wave.period_s();
            for &(x, y, t) in &[(0.0, 0.0, 0.0), (5.0, 3.0, 0.7), (31.0, 12.0, 2.25)] {
                let rest = Vec2::new(x, y);
                let a = wave.displace(rest, Vec3::ZERO, t);
                let b = wave.displace(rest, Vec3::ZERO, t + period);
                assert!((a - b).length() < 1e-3, "speed {speed}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn test_single_wave_amplitude_bound() {
        let params = WaveParams::new([2.0, -4.0], 1.4, 26.0, 15.4);
        let wave = GerstnerWave::new(&params, PhaseRateModel::default()).unwrap();
        let bound_z = wave.amplitude() + EPS;
        let bound_xy = wave.steepness() * wave.amplitude() + EPS;
        for step in 0..200 {
            let t = step as f32 * 0.173;
            let rest = Vec2::new((step % 17) as f32, (step % 23) as f32);
            let offset = wave.displace(rest, Vec3::ZERO, t);
            assert!(offset.z.abs() <= bound_z);
            assert!(offset.x.abs() <= bound_xy);
            assert!(offset.y.abs() <= bound_xy);
        }
    }

    #[test]
    fn test_empty_field_is_identity() {
        let field = WaveField::new();
        assert!(field.is_empty());
        assert_eq!(field.displace(Vec2::new(3.0, 4.0), 12.0), Vec3::ZERO);
    }

    #[test]
    fn test_field_is_left_fold() {
        let params = WavePreset::Default.waves();
        let model = PhaseRateModel::default();
        let field = WaveField::from_params(&params, model).unwrap();
        assert_eq!(field.len(), params.len());

        let rest = Vec2::new(9.0, 21.0);
        let t = 3.3;
        let mut expected = Vec3::ZERO;
        for p in &params {
            expected = GerstnerWave::new(p, model).unwrap().displace(rest, expected, t);
        }
        assert!((field.displace(rest, t) - expected).length() < EPS);
    }

    #[test]
    fn test_field_rejects_invalid_wave() {
        let params = [
            WaveParams::new([1.0, 0.0], 1.0, 32.0, 1.0),
            WaveParams::new([1.0, 0.0], 1.0, 0.0, 1.0),
        ];
        assert!(WaveField::from_params(&params, PhaseRateModel::default()).is_err());
    }

    #[derive(Debug)]
    struct Lift(f32);

    impl WaveGenerator for Lift {
        fn displace(&self, _rest: Vec2, prior: Vec3, _time_s: f32) -> Vec3 {
            prior + Vec3::Z * self.0
        }
    }

    #[test]
    fn test_custom_generator() {
        let mut field = WaveField::new();
        field.push(Lift(0.25));
        field.push(single_wave(1.0).with_steepness(0.0));
        let offset = field.displace(Vec2::ZERO, 0.0);
        assert!((offset - Vec3::new(0.0, 0.0, 0.25)).length() < EPS);
    }
}
