//! Reference (observed) seismic models sampled at arbitrary depths.

use std::fmt;

use sr_core::SrError;
use sr_core::numeric::{ensure_all_finite, ensure_len};

use crate::error::SeismicResult;
use crate::misfit::ProfileTriple;

/// Reference profile sampled at a list of depths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeismicProfile {
    /// m
    pub depth: Vec<f64>,
    /// Pa
    pub pressure: Vec<f64>,
    /// kg/m³
    pub density: Vec<f64>,
    /// m/s
    pub vp: Vec<f64>,
    pub vs: Vec<f64>,
    pub vphi: Vec<f64>,
}

impl SeismicProfile {
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    pub fn as_triple(&self) -> ProfileTriple<'_> {
        ProfileTriple {
            density: &self.density,
            vphi: &self.vphi,
            vs: &self.vs,
        }
    }
}

/// A one-dimensional seismic Earth model.
pub trait SeismicModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Shallowest and deepest depth the model covers [m].
    fn depth_range(&self) -> (f64, f64);

    /// Sample every column at `depths` [m].
    fn evaluate(&self, depths: &[f64]) -> SeismicResult<SeismicProfile>;

    /// Pressure [Pa] at `depths`.
    fn pressure(&self, depths: &[f64]) -> SeismicResult<Vec<f64>> {
        Ok(self.evaluate(depths)?.pressure)
    }
}

/// Seismic model given as a depth table, linearly interpolated.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedSeismicModel {
    name: String,
    depth: Vec<f64>,
    pressure: Vec<f64>,
    density: Vec<f64>,
    vp: Vec<f64>,
    vs: Vec<f64>,
}

impl TabulatedSeismicModel {
    /// Columns must share one length of at least two, depth must be strictly
    /// increasing, and every value finite.
    pub fn new(
        name: impl Into<String>,
        depth: Vec<f64>,
        pressure: Vec<f64>,
        density: Vec<f64>,
        vp: Vec<f64>,
        vs: Vec<f64>,
    ) -> SeismicResult<Self> {
        if depth.len() < 2 {
            return Err(SrError::Shape {
                what: "reference depth (at least two rows)",
                expected: 2,
                found: depth.len(),
            }
            .into());
        }
        let n = depth.len();
        ensure_len(&pressure, n, "reference pressure")?;
        ensure_len(&density, n, "reference density")?;
        ensure_len(&vp, n, "reference vp")?;
        ensure_len(&vs, n, "reference vs")?;

        for (what, column) in [
            ("reference depth", &depth),
            ("reference pressure", &pressure),
            ("reference density", &density),
            ("reference vp", &vp),
            ("reference vs", &vs),
        ] {
            ensure_all_finite(column, what)?;
        }
        for (index, pair) in depth.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(SrError::Domain {
                    what: "reference depth must be strictly increasing",
                    index: index + 1,
                    value: pair[1],
                }
                .into());
            }
        }

        Ok(Self {
            name: name.into(),
            depth,
            pressure,
            density,
            vp,
            vs,
        })
    }

    pub fn depths(&self) -> &[f64] {
        &self.depth
    }

    /// The table sampled at its own depths.
    pub fn table(&self) -> SeismicResult<SeismicProfile> {
        self.evaluate(&self.depth)
    }

    /// Segment start and interpolation weight for `x`, or `None` outside the table.
    fn locate(&self, x: f64) -> Option<(usize, f64)> {
        let last = self.depth.len() - 1;
        if !(x >= self.depth[0] && x <= self.depth[last]) {
            return None;
        }
        let upper = self.depth.partition_point(|&d| d < x).clamp(1, last);
        let lower = upper - 1;
        let weight = (x - self.depth[lower]) / (self.depth[upper] - self.depth[lower]);
        Some((lower, weight))
    }
}

fn interpolate(column: &[f64], lower: usize, weight: f64) -> f64 {
    column[lower] + weight * (column[lower + 1] - column[lower])
}

impl SeismicModel for TabulatedSeismicModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn depth_range(&self) -> (f64, f64) {
        (self.depth[0], self.depth[self.depth.len() - 1])
    }

    fn evaluate(&self, depths: &[f64]) -> SeismicResult<SeismicProfile> {
        let n = depths.len();
        let mut profile = SeismicProfile {
            depth: depths.to_vec(),
            pressure: Vec::with_capacity(n),
            density: Vec::with_capacity(n),
            vp: Vec::with_capacity(n),
            vs: Vec::with_capacity(n),
            vphi: Vec::with_capacity(n),
        };

        for (index, &x) in depths.iter().enumerate() {
            let Some((lower, w)) = self.locate(x) else {
                return Err(SrError::Domain {
                    what: "depth outside reference model",
                    index,
                    value: x,
                }
                .into());
            };
            let vp = interpolate(&self.vp, lower, w);
            let vs = interpolate(&self.vs, lower, w);
            let radicand = vp * vp - 4.0 / 3.0 * vs * vs;
            if radicand < 0.0 {
                return Err(SrError::Domain {
                    what: "bulk sound radicand",
                    index,
                    value: radicand,
                }
                .into());
            }

            profile.pressure.push(interpolate(&self.pressure, lower, w));
            profile.density.push(interpolate(&self.density, lower, w));
            profile.vp.push(vp);
            profile.vs.push(vs);
            profile.vphi.push(radicand.sqrt());
        }
        Ok(profile)
    }
}
