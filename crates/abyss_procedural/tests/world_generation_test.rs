//! # World Generation Tests
//!
//! End-to-end checks of the generation pipeline: terrain heights, occupancy
//! coherence before and after caves, decoration anchoring, spawn validity.

use abyss_procedural::{
    BlockType, PerlinNoise, PermutationTable, SeabedWorld, WorldConfig, WorldGenerator, WorldSeed,
};

fn seeded(seed: u64, size: u32) -> WorldConfig {
    WorldConfig::default()
        .with_seeds(seed, seed ^ 0xDEC0)
        .with_map_size(size)
}

/// Runs the terrain pass only.
fn terrain_only(config: &WorldConfig) -> SeabedWorld {
    let generator = WorldGenerator::new(config);
    let mut world = generator.empty_world();
    generator.terrain_pass(&mut world);
    world
}

#[test]
fn test_every_column_at_least_one_high() {
    for seed in [1, 42, 9001] {
        let world = WorldGenerator::new(&seeded(seed, 60)).generate();
        assert_eq!(world.heights().defined_columns(), 60 * 60);
        for (x, z, h) in world.heights().iter() {
            assert!(h >= 1, "column ({x}, {z}) has height {h}");
        }
    }
}

#[test]
fn test_occupancy_matches_height_before_caves() {
    let config = seeded(7, 48);
    let world = terrain_only(&config);

    for x in 0..48 {
        for z in 0..48 {
            let h = world.height_at(x, z);
            for y in 0..h {
                assert!(world.is_occupied(x, y, z), "hole at ({x}, {y}, {z})");
            }
            for y in h..config.max_height + 4 {
                assert!(!world.is_occupied(x, y, z), "block above surface at ({x}, {y}, {z})");
            }
        }
    }
}

#[test]
fn test_caves_preserve_height_map() {
    let mut config = seeded(3, 64);
    // Tall terrain and a low threshold so the cave pass has work to do.
    config.terrain.amplitude = 8.0;
    config.caves.threshold = 0.1;

    let mut generator = WorldGenerator::new(&config);
    let mut world = generator.empty_world();
    generator.terrain_pass(&mut world);
    let before: Vec<_> = world.heights().iter().collect();
    let blocks_before = world.voxels().len();

    generator.cave_pass(&mut world);

    assert!(world.report().carved_columns > 0, "no caves carved");
    assert_eq!(world.voxels().len(), blocks_before - world.report().carved_blocks);
    for (x, z, h) in before {
        assert_eq!(world.height_at(x, z), h);
    }

    // Somewhere a carved column now has a hollow below its recorded surface.
    let hollow = world
        .heights()
        .iter()
        .any(|(x, z, h)| (0..h).any(|y| !world.is_occupied(x, y, z)));
    assert!(hollow);
}

#[test]
fn test_caves_never_touch_bedrock_or_short_columns() {
    let mut config = seeded(11, 64);
    config.terrain.amplitude = 8.0;
    config.caves.threshold = -1.0;

    let mut generator = WorldGenerator::new(&config);
    let mut world = generator.empty_world();
    generator.terrain_pass(&mut world);
    generator.cave_pass(&mut world);

    for (x, z, h) in world.heights().iter() {
        assert!(world.is_occupied(x, 0, z), "floor carved at ({x}, {z})");
        if h <= config.caves.min_surface {
            assert!((0..h).all(|y| world.is_occupied(x, y, z)));
        }
    }
}

#[test]
fn test_flat_seed_gives_unit_heights() {
    let mut config = seeded(99, 32);
    config.terrain.amplitude = 0.0;
    let world = WorldGenerator::new(&config).generate();

    assert!(world.heights().iter().all(|(_, _, h)| h == 1));
    assert_eq!(world.report().carved_columns, 0);
}

#[test]
fn test_decorations_anchor_to_generated_columns() {
    let world = WorldGenerator::new(&seeded(5, 80)).generate();

    assert!(!world.seaweeds().is_empty());
    for weed in world.seaweeds() {
        let (x, z) = weed.column();
        assert!(world.heights().get(x, z).is_some(), "seaweed floating at ({x}, {z})");
        assert_eq!(weed.base_y, world.height_at(x, z) as f32 + 0.5);
    }
    for rect in world.coral_rects() {
        let (x, z) = rect.column();
        assert!(world.heights().get(x, z).is_some(), "coral rect floating at ({x}, {z})");
    }
}

#[test]
fn test_dense_patch_fills_corner() {
    let world = WorldGenerator::new(&seeded(5, 80)).generate();
    assert_eq!(world.report().patch_seaweeds, 64);
    for x in 72..80 {
        for z in 72..80 {
            assert!(
                world.seaweeds().iter().any(|w| w.column() == (x, z)),
                "garden column ({x}, {z}) has no seaweed"
            );
        }
    }
}

#[test]
fn test_spawn_is_on_open_sand() {
    for seed in [2, 17, 123_456] {
        let config = seeded(seed, 80);
        let world = WorldGenerator::new(&config).generate();
        if world.report().spawn_fallback {
            assert_eq!(world.spawn_position(), config.spawn.fallback);
            continue;
        }

        let [sx, sy, sz] = world.spawn_position();
        let (x, z) = (sx.floor() as i32, sz.floor() as i32);
        assert!(x >= 1 && x < 79 && z >= 1 && z < 79);
        assert_eq!(world.top_block_id(x, z), BlockType::Sand);
        assert!(!world.has_obstacle_near(x, z, config.spawn.obstacle_radius));
        for dx in -2..=2 {
            for dz in -2..=2 {
                if world.in_bounds(x + dx, z + dz) {
                    assert_eq!(world.top_block_id(x + dx, z + dz), BlockType::Sand);
                }
            }
        }
        assert_eq!(sy, world.height_at(x, z) as f32 + 2.0);
        assert!(!world.is_occupied_at([sx, sy, sz]));
    }
}

#[test]
fn test_dressing_respects_headroom() {
    let mut config = seeded(8, 40);
    config.max_height = 4;
    config.terrain.amplitude = 3.0;
    config.dressing.coral_threshold = -1.0;

    let mut generator = WorldGenerator::new(&config);
    let mut world = generator.empty_world();
    generator.terrain_pass(&mut world);
    generator.dressing_pass(&mut world);

    for (x, z, h) in world.heights().iter() {
        let coral_on_top = world.voxels().block_at(x, h, z).is_some_and(BlockType::is_coral);
        if coral_on_top {
            assert!(h + 2 < config.max_height);
        }
    }
    for weed in world.seaweeds() {
        let (x, z) = weed.column();
        assert!(world.height_at(x, z) + 3 < config.max_height);
    }
}

#[test]
fn test_noise_from_shared_table_is_identical() {
    let table = PermutationTable::from_seed(WorldSeed::new(77));
    let a = PerlinNoise::from_table(table.clone());
    let b = PerlinNoise::from_table(table);
    for i in 0..500 {
        let (x, y) = (f64::from(i) * 0.37 - 40.0, f64::from(i) * 0.11 + 3.0);
        assert_eq!(a.sample(x, y), b.sample(x, y));
    }
}

#[test]
fn test_structure_placement_after_generation() {
    use rand::SeedableRng;

    let mut world = WorldGenerator::new(&seeded(4, 20)).generate();
    let heights: Vec<_> = world.heights().iter().collect();
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
    let placed = world.place_random_structure(
        18,
        18,
        4,
        4,
        5,
        &[BlockType::DemoRed, BlockType::DemoGreen, BlockType::DemoBlue],
        &mut rng,
    );

    assert!(placed >= 4);
    assert!(world.is_occupied(19, 0, 19));
    assert!(world.voxels().iter().all(|(p, _)| world.in_bounds(p.x, p.z)));
    for (x, z, h) in heights {
        assert_eq!(world.height_at(x, z), h);
    }
}
