use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bulwark::arena::{
    find_path_to_edge, Location, Player, ResourceKind, SnapshotArena, StructureKind, UnitCatalog,
};
use bulwark::strategy::{gaps, select_safest, Strategy, StrategyConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// A mid-game board: our layout partly built, the opponent walled along
/// its front with a few turrets behind.
fn midgame(catalog: &UnitCatalog) -> SnapshotArena<'_> {
    let mut arena = SnapshotArena::empty(catalog, 12);
    arena.set_resource(Player::Me, ResourceKind::Structure, 25.0);
    arena.set_resource(Player::Me, ResourceKind::Mobility, 14.0);
    arena.set_resource(Player::Enemy, ResourceKind::Mobility, 18.0);

    for x in [1, 3, 5, 22, 24, 26] {
        arena.place_structure(StructureKind::Wall, Player::Me, Location::new(x, 12));
    }
    for (x, y) in [(4, 11), (23, 11), (13, 11), (14, 11)] {
        arena.place_structure(StructureKind::Turret, Player::Me, Location::new(x, y));
    }
    for x in (0..28).filter(|x| *x != 9 && *x != 18) {
        arena.place_structure(StructureKind::Wall, Player::Enemy, Location::new(x, 14));
    }
    for x in [4, 10, 17, 23] {
        arena.place_structure(StructureKind::Turret, Player::Enemy, Location::new(x, 16));
    }
    arena
}

fn bench_full_turn(c: &mut Criterion) {
    let catalog = UnitCatalog::default();
    let board = midgame(&catalog);
    c.bench_function("full_turn_midgame", |b| {
        let mut rng = SmallRng::seed_from_u64(5);
        b.iter(|| {
            let mut arena = board.clone();
            let mut strategy = Strategy::new(StrategyConfig::default());
            strategy.play_turn(black_box(&mut arena), &mut rng)
        })
    });
}

fn bench_pathing(c: &mut Criterion) {
    let catalog = UnitCatalog::default();
    let board = midgame(&catalog);
    c.bench_function("path_from_bottom_tip", |b| {
        b.iter(|| {
            find_path_to_edge(black_box(Location::new(13, 0)), |l| {
                board.structure_at(l).is_some()
            })
        })
    });
}

fn bench_select_safest(c: &mut Criterion) {
    let catalog = UnitCatalog::default();
    let board = midgame(&catalog);
    let anchors = StrategyConfig::default().attack_anchors;
    c.bench_function("select_safest_5_anchors", |b| {
        b.iter(|| select_safest(black_box(&board), black_box(&anchors)))
    });
}

fn bench_gap_scan(c: &mut Criterion) {
    let catalog = UnitCatalog::default();
    let board = midgame(&catalog);
    c.bench_function("gap_scan_band", |b| {
        b.iter(|| gaps::scan(black_box(&board), black_box(&[14, 15, 16])))
    });
}

criterion_group!(
    benches,
    bench_full_turn,
    bench_pathing,
    bench_select_safest,
    bench_gap_scan,
);
criterion_main!(benches);
