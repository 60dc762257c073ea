use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use cloud_wizard::core::types::Vec2;
use cloud_wizard::flora::PlantConfig;
use cloud_wizard::generation::{self, PlantKind};
use cloud_wizard::sim::{SimConfig, Simulation};
use cloud_wizard::world::{PopulationConfig, WorldPopulator};

fn bench_populate(c: &mut Criterion) {
    let config = PopulationConfig::default();
    let plant_config = PlantConfig::default();

    c.bench_function("populate_world", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| WorldPopulator::new(&config, &plant_config).populate(black_box(&mut rng)));
    });
}

fn bench_revived_shapes(c: &mut Criterion) {
    c.bench_function("revived_plant_all_kinds", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            PlantKind::ALL
                .iter()
                .map(|&kind| generation::revived_plant(kind, &mut rng).mesh_count())
                .sum::<usize>()
        });
    });
}

fn bench_tick_idle(c: &mut Criterion) {
    let mut sim = match Simulation::seeded(SimConfig::default(), 1) {
        Ok(sim) => sim,
        Err(e) => panic!("default config must be valid: {}", e),
    };

    c.bench_function("tick_idle", |b| {
        b.iter(|| {
            sim.tick(black_box(1.0 / 60.0));
            sim.drain_events().len()
        });
    });
}

fn bench_tick_raining(c: &mut Criterion) {
    let mut config = SimConfig::default();
    config.magic.starting_power = 1.0e6;
    config.cloud.lifetime_seconds = 1.0e6;
    let mut sim = match Simulation::seeded(config, 2) {
        Ok(sim) => sim,
        Err(e) => panic!("config must be valid: {}", e),
    };

    // Eight raining clouds over the field
    let targets: Vec<Vec2> = sim.plants().iter().take(8).map(|p| p.position()).collect();
    for target in targets {
        if sim.begin_cloud_at(target).is_ok() {
            sim.pointer_up();
        }
    }

    c.bench_function("tick_eight_clouds", |b| {
        b.iter(|| {
            sim.tick(black_box(1.0 / 60.0));
            sim.drain_events().len()
        });
    });
}

criterion_group!(benches, bench_populate, bench_revived_shapes, bench_tick_idle, bench_tick_raining);
criterion_main!(benches);
