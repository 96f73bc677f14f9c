//! Elastic property records aligned to evaluation points.

use sr_core::SrResult;
use sr_core::numeric::ensure_len;

/// Elastic state of a phase (or the bulk rock) at one evaluation point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElasticPoint {
    /// Volume [m³/mol]; phase: fraction × molar volume, bulk: total volume
    pub volume: f64,
    /// Density [kg/m³]
    pub density: f64,
    /// Bulk modulus [Pa]
    pub bulk_modulus: f64,
    /// Shear modulus [Pa]
    pub shear_modulus: f64,
    /// Phase: input molar fraction, bulk: 1.0
    pub fraction: f64,
}

/// Elastic state across an ordered sequence of evaluation points.
///
/// Stored as one record per point, so every field has the same length and index `i`
/// always describes one physical state. Sets are filled once and not mutated after.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElasticPropertySet {
    points: Vec<ElasticPoint>,
}

impl ElasticPropertySet {
    pub fn from_points(points: Vec<ElasticPoint>) -> Self {
        Self { points }
    }

    /// Build from parallel columns, which must all have the same length.
    pub fn from_columns(
        volume: &[f64],
        density: &[f64],
        bulk_modulus: &[f64],
        shear_modulus: &[f64],
        fraction: &[f64],
    ) -> SrResult<Self> {
        let n = volume.len();
        ensure_len(density, n, "density")?;
        ensure_len(bulk_modulus, n, "bulk modulus")?;
        ensure_len(shear_modulus, n, "shear modulus")?;
        ensure_len(fraction, n, "fraction")?;

        let points = (0..n)
            .map(|i| ElasticPoint {
                volume: volume[i],
                density: density[i],
                bulk_modulus: bulk_modulus[i],
                shear_modulus: shear_modulus[i],
                fraction: fraction[i],
            })
            .collect();
        Ok(Self { points })
    }

    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            points: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, point: ElasticPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ElasticPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElasticPoint> + '_ {
        self.points.iter()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.column(|p| p.volume)
    }

    pub fn densities(&self) -> Vec<f64> {
        self.column(|p| p.density)
    }

    pub fn bulk_moduli(&self) -> Vec<f64> {
        self.column(|p| p.bulk_modulus)
    }

    pub fn shear_moduli(&self) -> Vec<f64> {
        self.column(|p| p.shear_modulus)
    }

    pub fn fractions(&self) -> Vec<f64> {
        self.column(|p| p.fraction)
    }

    fn column(&self, field: impl Fn(&ElasticPoint) -> f64) -> Vec<f64> {
        self.points.iter().map(field).collect()
    }
}
