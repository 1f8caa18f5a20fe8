use cloudink_core::geometry::{cloud_arcs_with, cloud_svg_path_with};
use cloudink_core::{
    Generator, RandomSource, SizeStyle, cloud_arc_points, cloud_arcs, cloud_outline,
    cloud_svg_path, inky_cloud_svg_path, pill_points,
};
use std::thread;

const DIMENSIONS: [(f64, f64); 6] = [
    (200.0, 100.0),
    (100.0, 200.0),
    (64.0, 64.0),
    (1000.0, 40.0),
    (13.5, 700.25),
    (2.0, 3.0),
];

const SEEDS: [&str; 4] = ["abc", "shape:1", "", "雲"];

#[test]
fn test_svg_path_is_deterministic() {
    for (w, h) in DIMENSIONS {
        for seed in SEEDS {
            for size in SizeStyle::ALL {
                assert_eq!(cloud_svg_path(w, h, seed, size), cloud_svg_path(w, h, seed, size));
            }
        }
    }
}

#[test]
fn test_arcs_form_a_closed_loop() {
    for (w, h) in DIMENSIONS {
        for size in SizeStyle::ALL {
            let points = cloud_arc_points(w, h, "loop", size);
            let arcs = cloud_arcs(w, h, "loop", size);
            assert_eq!(points.len(), arcs.len());
            let Some(last) = arcs.last() else { continue };
            assert_eq!(last.right_point, arcs[0].left_point);
            for (arc, point) in arcs.iter().zip(&points) {
                assert_eq!(arc.left_point, *point);
            }
        }
    }
}

#[test]
fn test_svg_path_is_well_formed() {
    for (w, h) in DIMENSIONS {
        for seed in SEEDS {
            for size in SizeStyle::ALL {
                let arcs = cloud_arcs(w, h, seed, size);
                let path = cloud_svg_path(w, h, seed, size);
                if arcs.is_empty() {
                    assert!(path.is_empty());
                    continue;
                }
                assert!(path.starts_with('M'), "{path}");
                assert!(path.ends_with('Z'), "{path}");
                assert_eq!(path.matches('A').count(), arcs.len());
            }
        }
    }
}

#[test]
fn test_example_path_starts_at_first_bump() {
    let arcs = cloud_arcs(200.0, 100.0, "abc", SizeStyle::M);
    let path = cloud_svg_path(200.0, 100.0, "abc", SizeStyle::M);
    let first = arcs[0].left_point;
    assert!(path.starts_with(&format!("M{},{}", first.x, first.y)));
    assert!(path.ends_with('Z'));
    assert_eq!(path.matches('A').count(), arcs.len());
}

#[test]
fn test_example_pill_sampling() {
    let points = pill_points(100.0, 60.0, 10.0);
    let first_run: Vec<(f64, f64)> = points.iter().take(4).map(|p| (p.point.x, p.point.y)).collect();
    assert_eq!(first_run, vec![(30.0, 0.0), (40.0, 0.0), (50.0, 0.0), (60.0, 0.0)]);
    assert_eq!(points[4].seed, 1000);
}

#[test]
fn test_wider_spacing_never_adds_points() {
    for (w, h) in DIMENSIONS {
        let mut previous = usize::MAX;
        let mut spacing = 0.5;
        while spacing < 400.0 {
            let count = pill_points(w, h, spacing).len();
            assert!(count <= previous, "{w}x{h} spacing {spacing}: {count} > {previous}");
            previous = count;
            spacing *= 1.3;
        }
    }
}

#[test]
fn test_seed_changes_output() {
    for size in SizeStyle::ALL {
        let a = cloud_outline(240.0, 160.0, "first", size);
        let b = cloud_outline(240.0, 160.0, "second", size);
        assert_ne!(a, b);
    }
}

#[test]
fn test_inky_path_is_deterministic_and_doubled() {
    let a = inky_cloud_svg_path(200.0, 100.0, "ink", SizeStyle::M);
    let b = inky_cloud_svg_path(200.0, 100.0, "ink", SizeStyle::M);
    assert_eq!(a, b);
    let arcs = cloud_arcs(200.0, 100.0, "ink", SizeStyle::M);
    assert_eq!(a.matches('A').count(), arcs.len() * 2);
    assert_eq!(a.matches('M').count(), 2);
}

#[test]
fn test_concurrent_calls_agree() {
    let expected = cloud_svg_path(321.0, 123.0, "threads", SizeStyle::L);
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| cloud_svg_path(321.0, 123.0, "threads", SizeStyle::L)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

/// Linear congruential source, to exercise swapping the random algorithm.
struct Lcg;

struct LcgGen(u64);

impl Generator for LcgGen {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
    }
}

impl RandomSource for Lcg {
    type Gen = LcgGen;

    fn generator(&self, seed: &str) -> LcgGen {
        let hash = seed
            .bytes()
            .fold(0xcbf29ce484222325u64, |h, b| (h ^ u64::from(b)).wrapping_mul(0x100000001b3));
        LcgGen(hash)
    }
}

#[test]
fn test_injected_random_source_is_used() {
    let default_path = cloud_svg_path(200.0, 100.0, "abc", SizeStyle::M);
    let lcg_path = cloud_svg_path_with(&Lcg, 200.0, 100.0, "abc", SizeStyle::M);
    assert_ne!(default_path, lcg_path);
    assert_eq!(lcg_path, cloud_svg_path_with(&Lcg, 200.0, 100.0, "abc", SizeStyle::M));

    let arcs = cloud_arcs_with(&Lcg, 200.0, 100.0, "abc", SizeStyle::M);
    assert_eq!(arcs.last().unwrap().right_point, arcs[0].left_point);
}
