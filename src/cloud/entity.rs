//! One rain cloud: formation under the pointer, drift, rain targeting,
//! dissolve and retirement.

use serde::{Deserialize, Serialize};

use crate::core::types::{Vec2, Vec3};
use crate::flora::PlantId;
use crate::generation::ShapeNode;

use super::config::CloudConfig;
use super::rain::RainShower;

/// Stable handle for a cloud; never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CloudId(pub u64);

/// Forward-only lifecycle. Raining is a sub-state of `Active` (and of
/// `Dissolving` for a cloud that was already raining when its time ran out).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CloudState {
    /// Pointer held; growing under the cursor.
    Forming,
    Active,
    Dissolving,
    Dissolved,
}

#[derive(Clone, Debug)]
pub struct Cloud {
    id: CloudId,
    state: CloudState,
    position: Vec3,
    scale: f32,
    /// Simulation time at release; `None` while forming.
    created_at: Option<f64>,
    drift_phase: f32,
    shape: ShapeNode,
    rain: RainShower,
    raining: bool,
    target: Option<PlantId>,
    rain_count: u32,
    retiring: bool,
}

impl Cloud {
    /// Start forming a cloud of puffs `shape` at `position`.
    pub fn forming(id: CloudId, position: Vec3, shape: ShapeNode, drift_phase: f32, config: &CloudConfig) -> Self {
        Self {
            id,
            state: CloudState::Forming,
            position,
            scale: config.initial_scale,
            created_at: None,
            drift_phase,
            shape,
            rain: RainShower::default(),
            raining: false,
            target: None,
            rain_count: 0,
            retiring: false,
        }
    }

    #[inline]
    pub fn id(&self) -> CloudId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> CloudState {
        self.state
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Ground-plane projection (x, z) of the cloud centre.
    #[inline]
    pub fn ground_position(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }

    /// Move the cloud; used by hosts that let the user drag clouds around.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn created_at(&self) -> Option<f64> {
        self.created_at
    }

    /// Seconds since release, or 0 while forming.
    pub fn age(&self, now: f64) -> f64 {
        self.created_at.map_or(0.0, |t| (now - t).max(0.0))
    }

    #[inline]
    pub fn drift_phase(&self) -> f32 {
        self.drift_phase
    }

    #[inline]
    pub fn shape(&self) -> &ShapeNode {
        &self.shape
    }

    #[inline]
    pub fn rain(&self) -> &RainShower {
        &self.rain
    }

    #[inline]
    pub fn rain_mut(&mut self) -> &mut RainShower {
        &mut self.rain
    }

    #[inline]
    pub fn is_raining(&self) -> bool {
        self.raining
    }

    #[inline]
    pub fn target(&self) -> Option<PlantId> {
        self.target
    }

    #[inline]
    pub fn rain_count(&self) -> u32 {
        self.rain_count
    }

    #[inline]
    pub fn is_retiring(&self) -> bool {
        self.retiring
    }

    /// Highest opacity among the puffs.
    pub fn puff_opacity(&self) -> f32 {
        self.shape.children.iter().map(|p| p.opacity).fold(0.0, f32::max)
    }

    /// Whether the cloud may pick a new plant to rain on.
    pub fn can_seek_target(&self) -> bool {
        self.state == CloudState::Active && !self.raining && !self.retiring
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Grow toward full size. Clouds keep growing after release until they
    /// reach scale 1.
    pub fn grow(&mut self, step: f32) {
        if self.state <= CloudState::Active && self.scale < 1.0 {
            self.scale = (self.scale + step).min(1.0);
        }
    }

    /// Release: Forming → Active, stamping the creation time and attaching
    /// the (hidden) rain shower. Returns `false` if the cloud was not forming.
    pub fn finalize(&mut self, now: f64, rain: RainShower) -> bool {
        if self.state != CloudState::Forming {
            return false;
        }
        self.state = CloudState::Active;
        self.created_at = Some(now);
        self.rain = rain;
        self.rain.set_visible(false);
        true
    }

    /// Apply one tick of the periodic drift at simulation time `t` seconds.
    pub fn drift(&mut self, t: f32, amplitude: f32) {
        let phi = self.drift_phase;
        self.position.x += (t + phi).sin() * amplitude;
        self.position.z += (1.5 * t + 0.5 * phi).cos() * amplitude;
    }

    /// Begin raining on `plant`.
    pub fn start_rain(&mut self, plant: PlantId) {
        if self.state == CloudState::Dissolved {
            return;
        }
        self.raining = true;
        self.target = Some(plant);
        self.rain.set_visible(true);
    }

    /// Stop raining without credit.
    pub fn stop_rain(&mut self) {
        self.raining = false;
        self.target = None;
        self.rain.set_visible(false);
    }

    /// The target has been revived by this cloud. Returns `true` if this
    /// revival makes the cloud retire.
    pub fn complete_revival(&mut self, config: &CloudConfig) -> bool {
        self.stop_rain();
        self.rain_count += 1;
        if !self.retiring && self.rain_count >= config.retire_after_revivals {
            self.retiring = true;
            self.shape.set_opacity_recursive(config.retire_opacity);
            return true;
        }
        false
    }

    /// Active → Dissolving once the cloud has outlived `lifetime` seconds.
    /// Returns `true` on the transition.
    pub fn check_lifetime(&mut self, now: f64, lifetime: f32) -> bool {
        if self.state == CloudState::Active && self.age(now) > lifetime as f64 {
            self.state = CloudState::Dissolving;
            return true;
        }
        false
    }

    /// Fade every puff by `step`. Returns `true` once all puffs are fully
    /// transparent, at which point the cloud is `Dissolved`.
    pub fn fade(&mut self, step: f32) -> bool {
        if self.state != CloudState::Dissolving {
            return self.state == CloudState::Dissolved;
        }
        let mut all_clear = true;
        for puff in &mut self.shape.children {
            puff.opacity = (puff.opacity - step).max(0.0);
            if puff.opacity > 0.0 {
                all_clear = false;
            }
        }
        if all_clear {
            self.state = CloudState::Dissolved;
            self.stop_rain();
        }
        all_clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::cloud_gen;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cloud() -> (Cloud, StdRng, CloudConfig) {
        let mut rng = StdRng::seed_from_u64(131);
        let config = CloudConfig::default();
        let shape = cloud_gen::cloud(&mut rng);
        let c = Cloud::forming(CloudId(1), Vec3::new(0.0, 20.0, 0.0), shape, 0.0, &config);
        (c, rng, config)
    }

    #[test]
    fn test_forming_growth_clamps() {
        let (mut c, _, config) = cloud();
        assert!((c.scale() - 0.1).abs() < 1e-6);
        for _ in 0..100 {
            c.grow(config.growth_per_tick);
        }
        assert_eq!(c.scale(), 1.0, "growth clamps at full size");
    }

    #[test]
    fn test_finalize_once() {
        let (mut c, mut rng, config) = cloud();
        assert_eq!(c.age(5.0), 0.0, "forming clouds have no age");
        assert!(c.finalize(1.0, RainShower::new(&mut rng, &config)));
        assert!(!c.finalize(2.0, RainShower::default()), "second release is ignored");
        assert_eq!(c.state(), CloudState::Active);
        assert_eq!(c.created_at(), Some(1.0));
        assert_eq!(c.rain().drops().len(), 20);
        assert!(!c.rain().is_visible());
    }

    #[test]
    fn test_lifetime_and_fade() {
        let (mut c, mut rng, config) = cloud();
        c.finalize(0.0, RainShower::new(&mut rng, &config));
        assert!(!c.check_lifetime(10.0, 10.0), "exactly ten seconds is still active");
        assert!(c.check_lifetime(10.01, 10.0));
        assert!(!c.can_seek_target(), "dissolving clouds do not look for plants");

        let mut ticks = 0;
        while !c.fade(config.dissolve_step) {
            ticks += 1;
            assert!(ticks < 200, "fade terminates");
        }
        assert_eq!(c.state(), CloudState::Dissolved);
        assert_eq!(c.puff_opacity(), 0.0);
        assert!((85..=95).contains(&ticks), "0.9 opacity fades in about 90 ticks, took {}", ticks);
    }

    #[test]
    fn test_rain_and_retire() {
        let (mut c, mut rng, config) = cloud();
        c.finalize(0.0, RainShower::new(&mut rng, &config));
        for i in 0..3 {
            assert!(c.can_seek_target());
            c.start_rain(PlantId(i));
            assert!(c.is_raining() && c.rain().is_visible());
            assert_eq!(c.target(), Some(PlantId(i)));
            let retired = c.complete_revival(&config);
            assert_eq!(retired, i == 2, "retires on the third revival");
            assert!(!c.is_raining() && c.target().is_none());
        }
        assert_eq!(c.rain_count(), 3);
        assert!(c.is_retiring());
        assert!(!c.can_seek_target());
        assert!((c.puff_opacity() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_drift_is_small_and_periodic() {
        let (mut c, _, config) = cloud();
        let start = c.position();
        c.drift(0.0, config.drift_amplitude);
        let moved = c.position() - start;
        assert!(moved.x.abs() < 1e-6, "sin(0) drift is zero");
        assert!((moved.z - 0.005).abs() < 1e-6, "cos(0) drift is the amplitude");
        assert_eq!(moved.y, 0.0);
    }
}
