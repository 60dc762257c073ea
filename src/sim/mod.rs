//! The simulation aggregate and its per-tick update loop.
//!
//! [`Simulation`] owns every entity collection, the clocks, the magic pool and
//! the deferred-action queue. Hosts feed it input, call [`Simulation::tick`]
//! once per frame, read the render snapshot through the accessors and drain
//! [`SimEvent`]s for audio and UI.

pub mod config;
pub mod events;
pub mod magic;

pub use config::SimConfig;
pub use events::{AudioCue, FEEDBACK_SECONDS, Hud, SimEvent};
pub use magic::{MagicConfig, MagicPool};

use std::f32::consts::TAU;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::atmosphere::{DayNightClock, SkyState, SkyUniform, StarField};
use crate::cloud::{Cloud, CloudId, CloudState, RainShower};
use crate::core::camera::Camera;
use crate::core::camera_controller::CameraController;
use crate::core::error::Error;
use crate::core::input::{InputState, Key};
use crate::core::schedule::DeferredQueue;
use crate::core::time::SimClock;
use crate::core::types::{Result, Vec2, Vec3};
use crate::effects::{RainSplash, RevivalBurst};
use crate::flora::{PlantId, PlantRegistry};
use crate::generation::{self, cloud_gen};
use crate::weather::{Lightning, Rainbow, WeatherRoll, roll_weather};
use crate::world::{Decoration, PopulatedWorld, WorldPopulator};

/// One-shot actions fired by the deferred queue.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Deferred {
    SpawnRainbow { start: Vec3, end: Vec3 },
    SpawnLightning { start: Vec3, end: Vec3 },
    /// Hide the wilted form of a revived plant.
    SettlePlant(PlantId),
    /// Remove a retired cloud if it still exists.
    RemoveCloud(CloudId),
}

pub struct Simulation<R: Rng = StdRng> {
    config: SimConfig,
    rng: R,
    clock: SimClock,
    sky: DayNightClock,
    stars: StarField,
    camera: Camera,
    controller: CameraController,
    input: InputState,
    magic: MagicPool,

    decorations: Vec<Decoration>,
    plants: PlantRegistry,
    forming: Option<Cloud>,
    clouds: Vec<Cloud>,
    next_cloud_id: u64,
    deferred: DeferredQueue<Deferred>,

    splashes: Vec<RainSplash>,
    bursts: Vec<RevivalBurst>,
    rainbows: Vec<Rainbow>,
    lightning: Vec<Lightning>,

    events: Vec<SimEvent>,
    plants_revived: u32,
    /// Last ambient (day, night) volumes sent to the host.
    ambient: Option<(f32, f32)>,
}

impl Simulation<StdRng> {
    /// Build and populate a simulation seeded from system entropy.
    pub fn new(config: SimConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Build and populate a reproducible simulation.
    pub fn seeded(config: SimConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Validate `config` and populate a fresh world from `rng`.
    pub fn with_rng(config: SimConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let world = WorldPopulator::new(&config.population, &config.plant).populate(&mut rng);
        Self::with_world(config, rng, world)
    }

    /// Start from an already built world instead of populating one.
    pub fn with_world(config: SimConfig, mut rng: R, world: PopulatedWorld) -> Result<Self> {
        config.validate()?;
        let stars = StarField::generate(&mut rng, config.day_night.star_count, config.day_night.star_radius);
        let sky = DayNightClock::new(config.day_night.clone());
        let camera = Camera::from_config(&config.camera);
        let controller = CameraController::from_config(&config.camera);
        let magic = MagicPool::new(config.magic.clone());

        log::info!(
            "Simulation ready: {} decorations, {} plants, {:.0} magic",
            world.decorations.len(),
            world.plants.len(),
            magic.power()
        );

        Ok(Self {
            config,
            rng,
            clock: SimClock::new(),
            sky,
            stars,
            camera,
            controller,
            input: InputState::new(),
            magic,
            decorations: world.decorations,
            plants: world.plants,
            forming: None,
            clouds: Vec::new(),
            next_cloud_id: 1,
            deferred: DeferredQueue::new(),
            splashes: Vec::new(),
            bursts: Vec::new(),
            rainbows: Vec::new(),
            lightning: Vec::new(),
            events: Vec::new(),
            plants_revived: 0,
            ambient: None,
        })
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Pointer moved, in pixels from the top-left of the viewport.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.input.set_pointer_pixels(x, y);
    }

    /// Pointer moved, in normalized device coordinates.
    pub fn pointer_move_ndc(&mut self, ndc: Vec2) {
        self.input.set_pointer_ndc(ndc);
    }

    /// Primary button pressed: start forming a cloud over the ground point
    /// under the pointer.
    ///
    /// Returns the forming cloud, `None` if the pointer is over the sky, or
    /// [`Error::InsufficientMagic`]
    /// when the pool cannot pay.
    pub fn pointer_down(&mut self) -> Result<Option<CloudId>> {
        self.input.set_pointer_pressed(true);
        if let Some(cloud) = &self.forming {
            return Ok(Some(cloud.id()));
        }
        self.ensure_affordable()?;
        let Some(ground) = self.camera.pick_ground(self.input.pointer()) else {
            log::debug!("Pointer ray missed the ground");
            return Ok(None);
        };
        self.magic.spend_cloud()?;
        Ok(Some(self.spawn_forming(ground)))
    }

    /// Start forming a cloud above the ground point `ground` (x, z). A second
    /// call while a cloud is forming returns that cloud without charging.
    pub fn begin_cloud_at(&mut self, ground: Vec2) -> Result<CloudId> {
        if let Some(cloud) = &self.forming {
            return Ok(cloud.id());
        }
        self.ensure_affordable()?;
        self.magic.spend_cloud()?;
        Ok(self.spawn_forming(ground))
    }

    /// Primary button released: the forming cloud (if any) becomes active.
    pub fn pointer_up(&mut self) -> Option<CloudId> {
        self.input.set_pointer_pressed(false);
        let mut cloud = self.forming.take()?;
        let now = self.clock.elapsed();
        let rain = RainShower::new(&mut self.rng, &self.config.cloud);
        cloud.finalize(now, rain);

        let id = cloud.id();
        let position = cloud.position();
        match roll_weather(&mut self.rng, &self.config.weather, position) {
            WeatherRoll::Clear => {}
            WeatherRoll::Rainbow { delay, start, end } => {
                log::debug!("Rainbow scheduled in {:.1}s", delay);
                self.deferred.schedule(now + delay as f64, Deferred::SpawnRainbow { start, end });
            }
            WeatherRoll::Lightning { delay, start, end } => {
                log::debug!("Lightning scheduled in {:.1}s", delay);
                self.deferred.schedule(now + delay as f64, Deferred::SpawnLightning { start, end });
            }
        }

        log::info!("Cloud {:?} released at ({:.1}, {:.1}, {:.1})", id, position.x, position.y, position.z);
        self.events.push(SimEvent::CloudFinalized { cloud: id, position });
        self.clouds.push(cloud);
        Some(id)
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Press a key by host name. Returns `false` for unmapped keys.
    pub fn key_down_named(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.key_down(key);
                true
            }
            None => false,
        }
    }

    /// Release a key by host name. Returns `false` for unmapped keys.
    pub fn key_up_named(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.key_up(key);
                true
            }
            None => false,
        }
    }

    /// Release every held key and the pointer button (e.g. on focus loss).
    pub fn release_all(&mut self) {
        self.input.clear();
    }

    /// Viewport resized; updates the projection aspect and pixel mapping.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.input.set_viewport(width, height);
        let (w, h) = self.input.viewport();
        self.camera.set_aspect(w as f32, h as f32);
    }

    /// Move an active cloud over a new ground point, keeping its height.
    /// Returns `false` if no such cloud exists.
    pub fn move_cloud(&mut self, id: CloudId, ground: Vec2) -> bool {
        let Some(cloud) = self.clouds.iter_mut().find(|c| c.id() == id) else {
            return false;
        };
        let y = cloud.position().y;
        cloud.set_position(Vec3::new(ground.x, y, ground.y));
        true
    }

    // -----------------------------------------------------------------------
    // Tick
    // -----------------------------------------------------------------------

    /// Advance the whole simulation by `dt` measured seconds.
    pub fn tick(&mut self, dt: f32) {
        let now = self.clock.advance(dt);

        self.sky.update(dt);
        self.emit_ambient_volumes();
        self.magic.regenerate();
        self.controller.update(&mut self.camera, &self.input);

        if let Some(cloud) = &mut self.forming {
            cloud.grow(self.config.cloud.growth_per_tick);
        }

        let t = self.clock.elapsed_f32();
        let mut clouds = std::mem::take(&mut self.clouds);
        clouds.retain_mut(|cloud| self.update_cloud(cloud, now, t));
        self.clouds = clouds;

        let growth_step = self.config.plant.growth_step;
        for plant in self.plants.iter_mut() {
            plant.step_growth(growth_step);
        }

        for action in self.deferred.drain_due(now) {
            self.run_deferred(action, now);
        }

        self.update_effects(now);
    }

    /// Take every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn hud(&self) -> Hud {
        Hud {
            magic_power: self.magic.display(),
            plants_revived: self.plants_revived,
        }
    }

    // -----------------------------------------------------------------------
    // Render snapshot
    // -----------------------------------------------------------------------

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Simulation seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn day_night(&self) -> &DayNightClock {
        &self.sky
    }

    /// Jump the day to `phase` (0 = midnight).
    pub fn set_day_phase(&mut self, phase: f32) {
        self.sky.set_phase(phase);
    }

    #[inline]
    pub fn sky(&self) -> &SkyState {
        self.sky.state()
    }

    pub fn sky_uniform(&self) -> SkyUniform {
        self.sky.uniform()
    }

    #[inline]
    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[inline]
    pub fn magic(&self) -> &MagicPool {
        &self.magic
    }

    #[inline]
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    #[inline]
    pub fn plants(&self) -> &PlantRegistry {
        &self.plants
    }

    #[inline]
    pub fn forming_cloud(&self) -> Option<&Cloud> {
        self.forming.as_ref()
    }

    #[inline]
    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn cloud(&self, id: CloudId) -> Option<&Cloud> {
        self.clouds.iter().find(|c| c.id() == id)
    }

    #[inline]
    pub fn splashes(&self) -> &[RainSplash] {
        &self.splashes
    }

    #[inline]
    pub fn bursts(&self) -> &[RevivalBurst] {
        &self.bursts
    }

    #[inline]
    pub fn rainbows(&self) -> &[Rainbow] {
        &self.rainbows
    }

    #[inline]
    pub fn lightning(&self) -> &[Lightning] {
        &self.lightning
    }

    /// Number of deferred actions still waiting to fire.
    #[inline]
    pub fn pending_actions(&self) -> usize {
        self.deferred.len()
    }

    #[inline]
    pub fn plants_revived(&self) -> u32 {
        self.plants_revived
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    /// Reject with user feedback if the pool cannot pay for a cloud.
    fn ensure_affordable(&mut self) -> Result<()> {
        if self.magic.can_afford_cloud() {
            return Ok(());
        }
        let err = Error::InsufficientMagic {
            available: self.magic.power(),
            cost: self.magic.config().cloud_cost,
        };
        log::warn!("Cloud rejected: {}", err);
        self.events.push(SimEvent::Feedback {
            message: "Not enough magic power!".to_string(),
            duration: FEEDBACK_SECONDS,
        });
        Err(err)
    }

    fn spawn_forming(&mut self, ground: Vec2) -> CloudId {
        let id = CloudId(self.next_cloud_id);
        self.next_cloud_id += 1;
        let height = self.config.cloud.spawn_height.sample(&mut self.rng);
        let shape = cloud_gen::cloud(&mut self.rng);
        let drift_phase = self.rng.r#gen::<f32>() * TAU;
        let position = Vec3::new(ground.x, height, ground.y);
        self.forming = Some(Cloud::forming(id, position, shape, drift_phase, &self.config.cloud));
        log::debug!("Cloud {:?} forming over ({:.1}, {:.1}), {:.0} magic left", id, ground.x, ground.y, self.magic.power());
        id
    }

    /// Returns `false` once the cloud has fully dissolved and should be dropped.
    fn update_cloud(&mut self, cloud: &mut Cloud, now: f64, t: f32) -> bool {
        let cfg = &self.config.cloud;
        let (lifetime, dissolve_step, rain_radius) = (cfg.lifetime_seconds, cfg.dissolve_step, cfg.rain_radius);
        cloud.grow(cfg.growth_per_tick);
        cloud.drift(t, cfg.drift_amplitude);

        if cloud.check_lifetime(now, lifetime) {
            log::debug!("Cloud {:?} dissolving after {:.1}s", cloud.id(), cloud.age(now));
        }

        if cloud.state() == CloudState::Dissolving {
            let was_raining = cloud.is_raining();
            if cloud.fade(dissolve_step) {
                if was_raining {
                    self.release_target(cloud);
                    self.events.push(SimEvent::Audio(AudioCue::RainStopped));
                }
                self.forget_cloud(cloud.id());
                return false;
            }
        }

        if cloud.can_seek_target() {
            if let Some(plant) = self.plants.nearest_unrevived_within(cloud.ground_position(), rain_radius) {
                self.begin_rain(cloud, plant);
            }
        } else if cloud.is_raining() {
            self.rain_on_target(cloud, now);
        }
        true
    }

    fn begin_rain(&mut self, cloud: &mut Cloud, id: PlantId) {
        let Some(plant) = self.plants.get_mut(id) else {
            return;
        };
        if plant.revived_shape().is_none() {
            plant.attach_revived_shape(generation::revived_plant(plant.kind(), &mut self.rng));
        }
        plant.set_targeted(true);
        cloud.start_rain(id);
        self.events.push(SimEvent::Audio(AudioCue::RainStarted));
        log::debug!("Cloud {:?} raining on plant {:?}", cloud.id(), id);
    }

    fn rain_on_target(&mut self, cloud: &mut Cloud, now: f64) {
        let position = cloud.position();
        let splash_chance = self.config.cloud.splash_chance;
        for at in cloud.rain_mut().step(&mut self.rng, position, splash_chance) {
            self.splashes.push(RainSplash::new(&mut self.rng, at, now));
        }

        let step = self.config.cloud.rain_progress_step;
        let complete = match cloud.target().and_then(|id| self.plants.get_mut(id).map(|p| (id, p))) {
            Some((id, plant)) if !plant.is_revived() => plant.add_rain(step).then_some(id),
            _ => {
                // Target vanished or was revived by another cloud
                cloud.stop_rain();
                self.events.push(SimEvent::Audio(AudioCue::RainStopped));
                return;
            }
        };

        let Some(id) = complete else {
            return;
        };
        self.revive_plant(id, now);
        self.events.push(SimEvent::Audio(AudioCue::RainStopped));
        if cloud.complete_revival(&self.config.cloud) {
            let delay = self.config.cloud.retire_delay_seconds;
            log::info!("Cloud {:?} retiring after {} revivals", cloud.id(), cloud.rain_count());
            self.deferred.schedule(now + delay as f64, Deferred::RemoveCloud(cloud.id()));
        }
    }

    fn revive_plant(&mut self, id: PlantId, now: f64) {
        let Some(plant) = self.plants.get_mut(id) else {
            return;
        };
        if !plant.finalize_revival() {
            return;
        }
        if plant.revived_shape().is_none() {
            plant.attach_revived_shape(generation::revived_plant(plant.kind(), &mut self.rng));
        }
        let ground = plant.position();
        let origin = Vec3::new(ground.x, 0.0, ground.y);

        self.bursts.push(RevivalBurst::new(&mut self.rng, origin, now));
        self.magic.reward_revival();
        self.plants_revived += 1;
        let settle = self.config.plant.settle_delay_seconds;
        self.deferred.schedule(now + settle as f64, Deferred::SettlePlant(id));

        log::info!("Plant {:?} revived ({} total, {:.0} magic)", id, self.plants_revived, self.magic.power());
        self.events.push(SimEvent::Audio(AudioCue::PlantGrowth));
        self.events.push(SimEvent::PlantRevived {
            plant: id,
            total_revived: self.plants_revived,
        });
    }

    /// Give up the cloud's claim on its rain target.
    fn release_target(&mut self, cloud: &Cloud) {
        if let Some(plant) = cloud.target().and_then(|id| self.plants.get_mut(id)) {
            plant.set_targeted(false);
        }
    }

    /// Drop pending actions for a removed cloud and announce the removal.
    fn forget_cloud(&mut self, id: CloudId) {
        self.deferred.retain(|a| *a != Deferred::RemoveCloud(id));
        log::info!("Cloud {:?} removed", id);
        self.events.push(SimEvent::CloudRemoved { cloud: id });
    }

    fn run_deferred(&mut self, action: Deferred, now: f64) {
        match action {
            Deferred::SpawnRainbow { start, end } => {
                self.rainbows.push(Rainbow::new(start, end, now, &self.config.weather));
                log::info!("Rainbow spawned");
                self.events.push(SimEvent::RainbowSpawned { start, end });
            }
            Deferred::SpawnLightning { start, end } => {
                self.lightning.push(Lightning::new(&mut self.rng, start, end, now, &self.config.weather));
                log::info!("Lightning spawned");
                self.events.push(SimEvent::LightningSpawned { start, end });
            }
            Deferred::SettlePlant(id) => {
                if let Some(plant) = self.plants.get_mut(id) {
                    plant.settle();
                }
            }
            Deferred::RemoveCloud(id) => {
                if let Some(index) = self.clouds.iter().position(|c| c.id() == id) {
                    let cloud = self.clouds.remove(index);
                    if cloud.is_raining() {
                        self.release_target(&cloud);
                        self.events.push(SimEvent::Audio(AudioCue::RainStopped));
                    }
                    self.forget_cloud(id);
                }
            }
        }
    }

    fn update_effects(&mut self, now: f64) {
        self.splashes.retain(|s| !s.is_finished(now));
        for burst in &mut self.bursts {
            burst.step(&mut self.rng);
        }
        self.bursts.retain(|b| !b.is_finished(now));
        self.rainbows.retain(|r| !r.is_finished(now));
        self.lightning.retain(|l| !l.is_finished(now));
    }

    fn emit_ambient_volumes(&mut self) {
        let state = self.sky.state();
        let volumes = (state.day_volume, state.night_volume);
        if self.ambient != Some(volumes) {
            self.ambient = Some(volumes);
            self.events.push(SimEvent::Audio(AudioCue::AmbientVolumes {
                day: volumes.0,
                night: volumes.1,
            }));
        }
    }
}
