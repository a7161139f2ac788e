//! Heat-point aggregation for heatmap overlays
//!
//! Each located record contributes its exact coordinate plus a small cloud of
//! uniformly jittered copies. The cloud is a visual aid to make clusters read
//! as "dense" on a tile renderer; it is not a kernel density estimate and no
//! per-cell binning happens here.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::record::{HeatPoint, Record};

/// Weight of every emitted heat point
pub const HEAT_WEIGHT: f64 = 1.0;

/// Widest accepted jitter window; one full turn of longitude
pub const MAX_JITTER_SPREAD_DEG: f64 = 360.0;

/// Jitter cloud parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JitterConfig {
    /// Extra points per record
    pub count: usize,
    /// Full width of the jitter window in degrees (points land within ±spread/2)
    pub spread_deg: f64,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            count: 5,
            spread_deg: 0.01,
        }
    }
}

impl JitterConfig {
    pub fn new(count: usize, spread_deg: f64) -> Self {
        Self { count, spread_deg }
    }

    /// Exact points only
    pub fn none() -> Self {
        Self {
            count: 0,
            spread_deg: 0.0,
        }
    }

    /// Spread must lie in `[0, MAX_JITTER_SPREAD_DEG]`
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=MAX_JITTER_SPREAD_DEG).contains(&self.spread_deg) {
            return Err(CoreError::InvalidJitterSpread(self.spread_deg));
        }
        Ok(())
    }

    /// Number of heat points produced for `located` records
    pub fn points_for(&self, located: usize) -> usize {
        located * (1 + self.count)
    }
}

/// Build the heat-point cloud for `records`.
///
/// Output is grouped per located record: the exact point first, then
/// `jitter_count` jittered copies. Each copy draws Δlat then Δlon uniformly
/// from `[-spread/2, +spread/2]` out of `rng`, so a seeded source gives
/// reproducible output.
pub fn aggregate<R: Rng + ?Sized>(
    records: &[Record],
    jitter_count: usize,
    jitter_spread_deg: f64,
    rng: &mut R,
) -> Result<Vec<HeatPoint>, CoreError> {
    let config = JitterConfig::new(jitter_count, jitter_spread_deg);
    config.validate()?;

    let located = records.iter().filter(|r| r.has_location()).count();
    let mut out = Vec::with_capacity(config.points_for(located));
    let half = jitter_spread_deg / 2.0;

    for record in records.iter().filter(|r| r.has_location()) {
        out.push(HeatPoint::new(record.location, HEAT_WEIGHT));

        for _ in 0..jitter_count {
            let d_lat = sample(rng, half);
            let d_lon = sample(rng, half);
            out.push(HeatPoint::new(record.location.offset(d_lat, d_lon), HEAT_WEIGHT));
        }
    }

    Ok(out)
}

/// `aggregate` driven by a `JitterConfig`
pub fn aggregate_with<R: Rng + ?Sized>(
    records: &[Record],
    config: &JitterConfig,
    rng: &mut R,
) -> Result<Vec<HeatPoint>, CoreError> {
    aggregate(records, config.count, config.spread_deg, rng)
}

fn sample<R: Rng + ?Sized>(rng: &mut R, half: f64) -> f64 {
    if half > 0.0 {
        rng.gen_range(-half..=half)
    } else {
        0.0
    }
}
