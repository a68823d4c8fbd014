//! Seeded region growing regression test (planar scalar images)
//!
//! Covers:
//! 1. Two constant plateaus split exactly at their boundary
//! 2. A pixel walled in by excluded mask pixels stays unassigned
//! 3. A single seed reaches every connected included pixel
//! 4. Equal differences are resolved in discovery order
//! 5. Determinism, seed preservation and region means
//! 6. Animation snapshots and progress reporting
//!
//! Run with:
//! ```
//! cargo test -p seedgrow-region --test srg_reg
//! ```

use std::sync::{Arc, Mutex};

use seedgrow_core::{FPix, LabelImage, Mask};
use seedgrow_region::{
    ConnectivityType, RegionError, SeededRegionGrowing, SrgOptions, seeded_region_growing,
};
use seedgrow_test::{RegParams, parse_label_map, render_label_map};

/// Build an image from rows of values
fn image_from_rows(rows: &[&[f32]]) -> FPix {
    let width = rows[0].len() as u32;
    let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
    FPix::from_data(width, rows.len() as u32, data).unwrap()
}

/// Build a mask from a label map; any nonzero label is included
fn mask_from_map(text: &str) -> Mask {
    let map = parse_label_map(text).unwrap();
    let data = map.data().iter().map(|&l| l != 0).collect();
    Mask::from_data(map.width(), map.height(), map.depth(), data).unwrap()
}

/// Image with some texture: low values on the left, high on the right
fn textured_image() -> FPix {
    let mut pix = FPix::new(10, 6).unwrap();
    for y in 0..6 {
        for x in 0..10 {
            let base = if x < 5 { 40.0 } else { 160.0 };
            let wobble = ((x * 7 + y * 3) % 5) as f32;
            pix.set_pixel(x, y, base + wobble).unwrap();
        }
    }
    pix
}

fn column_seeds(width: u32, height: u32, columns: &[u32]) -> LabelImage {
    let regions: Vec<Vec<(u32, u32)>> = columns
        .iter()
        .map(|&x| (0..height).map(|y| (x, y)).collect())
        .collect();
    LabelImage::from_point_sets(width, height, &regions).unwrap()
}

#[test]
fn srg_two_plateaus() {
    let mut rp = RegParams::new("srg_plateaus");

    let mut image = FPix::new_with_value(8, 4, 10.0).unwrap();
    for y in 0..4 {
        for x in 4..8 {
            image.set_pixel(x, y, 200.0).unwrap();
        }
    }
    let seeds = column_seeds(8, 4, &[0, 7]);

    let out = seeded_region_growing(&image, &seeds, None, &SrgOptions::default()).unwrap();
    let expected = parse_label_map(
        "11112222
         11112222
         11112222
         11112222",
    )
    .unwrap();
    rp.compare_labels(&expected, &out.labels);

    rp.compare_values(2.0, out.regions.len() as f64, 0.0);
    rp.compare_values(16.0, out.regions[0].pixel_count as f64, 0.0);
    rp.compare_values(10.0, out.regions[0].mean[0], 1e-9);
    rp.compare_values(200.0, out.regions[1].mean[0], 1e-9);
    rp.compare_values(32.0, out.admissions as f64, 0.0);

    assert!(rp.cleanup(), "srg plateaus regression test failed");
}

#[test]
fn srg_masked_pixel_stays_unassigned() {
    let mut rp = RegParams::new("srg_mask");

    let image = FPix::new_with_value(5, 5, 50.0).unwrap();
    let mask = mask_from_map(
        "11111
         1...1
         1.1.1
         1...1
         11111",
    );
    let seeds = LabelImage::from_point_sets(5, 5, &[vec![(0, 0)]]).unwrap();

    let out = seeded_region_growing(&image, &seeds, Some(&mask), &SrgOptions::default()).unwrap();
    let expected = parse_label_map(
        "11111
         1...1
         1...1
         1...1
         11111",
    )
    .unwrap();
    rp.compare_labels(&expected, &out.labels);
    rp.compare_values(0.0, out.labels.get_pixel(2, 2).unwrap() as f64, 0.0);

    // Diagonal steps do not cross the excluded ring either
    let options = SrgOptions::new().with_connectivity(ConnectivityType::EightWay);
    let out = seeded_region_growing(&image, &seeds, Some(&mask), &options).unwrap();
    rp.compare_labels(&expected, &out.labels);

    if rp.display() {
        eprintln!("{}", render_label_map(&out.labels));
    }

    assert!(rp.cleanup(), "srg mask regression test failed");
}

#[test]
fn srg_single_seed_covers_image() {
    let mut rp = RegParams::new("srg_single");

    let image = textured_image();
    let seeds = LabelImage::from_point_sets(10, 6, &[vec![(4, 3)]]).unwrap();
    let out = seeded_region_growing(&image, &seeds, None, &SrgOptions::default()).unwrap();

    rp.compare_values(60.0, out.labels.count_label(1) as f64, 0.0);
    rp.compare_values(0.0, out.labels.count_unassigned() as f64, 0.0);
    rp.compare_values(1.0, out.regions.len() as f64, 0.0);
    rp.compare_values(1.0, out.labels.labels().len() as f64, 0.0);

    let mean = image.data().iter().map(|&v| v as f64).sum::<f64>() / 60.0;
    rp.compare_values(mean, out.regions[0].mean[0], 1e-6);

    // With a mask, only the included pixels connected to the seed are reached
    let mask = mask_from_map(
        "1111111111
         1111111111
         1111111111
         ..........
         1111111111
         1111111111",
    );
    let seeds = LabelImage::from_point_sets(10, 6, &[vec![(4, 1)]]).unwrap();
    let out = seeded_region_growing(&image, &seeds, Some(&mask), &SrgOptions::default()).unwrap();
    rp.compare_values(30.0, out.labels.count_label(1) as f64, 0.0);
    rp.compare_values(30.0, out.labels.count_unassigned() as f64, 0.0);

    assert!(rp.cleanup(), "srg single seed regression test failed");
}

#[test]
fn srg_ties_follow_discovery_order() {
    let mut rp = RegParams::new("srg_ties");

    // Pixel 1 (from region 1) and pixel 2 (from region 2) are both queued
    // with difference 40; pixel 1 was discovered first.
    let image = image_from_rows(&[&[0.0, 40.0, 60.0, 100.0, 100.0]]);
    let seeds = LabelImage::from_point_sets(5, 1, &[vec![(0, 0)], vec![(4, 0)]]).unwrap();
    let out = seeded_region_growing(&image, &seeds, None, &SrgOptions::default()).unwrap();

    let expected = parse_label_map("11222").unwrap();
    rp.compare_labels(&expected, &out.labels);
    rp.compare_values(20.0, out.regions[0].mean[0], 1e-9);
    rp.compare_values(260.0 / 3.0, out.regions[1].mean[0], 1e-9);

    // The first region to reach a pixel keeps it, even when the other
    // region is closer by the time it is admitted.
    let image = image_from_rows(&[&[0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0]]);
    let seeds = LabelImage::from_point_sets(9, 1, &[vec![(0, 0)], vec![(8, 0)]]).unwrap();
    let out = seeded_region_growing(&image, &seeds, None, &SrgOptions::default()).unwrap();
    let expected = parse_label_map("111122222").unwrap();
    rp.compare_labels(&expected, &out.labels);

    assert!(rp.cleanup(), "srg ties regression test failed");
}

#[test]
fn srg_properties() {
    let mut rp = RegParams::new("srg_properties");

    let image = textured_image();
    let seeds = LabelImage::from_point_sets(
        10,
        6,
        &[vec![(0, 0), (1, 5)], vec![(9, 0)], vec![(7, 3), (8, 3)]],
    )
    .unwrap();

    let first = seeded_region_growing(&image, &seeds, None, &SrgOptions::default()).unwrap();
    let second = seeded_region_growing(&image, &seeds, None, &SrgOptions::default()).unwrap();
    rp.compare_labels(&first.labels, &second.labels);

    // The engine gives the same answer as the one-shot function
    let mut srg = SeededRegionGrowing::new();
    srg.set_image(image.clone());
    srg.set_seeds(seeds.clone());
    srg.run().unwrap();
    rp.compare_labels(&first.labels, srg.region_markers().unwrap());

    // Total coverage without a mask
    rp.compare_values(0.0, first.labels.count_unassigned() as f64, 0.0);
    rp.compare_values(60.0, first.admissions as f64, 0.0);

    // Seeds keep their labels
    for (i, &label) in seeds.data().iter().enumerate() {
        if label != 0 {
            rp.compare_values(label as f64, first.labels.data()[i] as f64, 0.0);
        }
    }

    // Region means and counts match the final labeling
    for stats in &first.regions {
        let values: Vec<f64> = first
            .labels
            .data()
            .iter()
            .zip(image.data())
            .filter(|&(&l, _)| l == stats.label)
            .map(|(_, &v)| v as f64)
            .collect();
        rp.compare_values(values.len() as f64, stats.pixel_count as f64, 0.0);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        rp.compare_values(mean, stats.mean[0], 1e-6);
    }

    assert!(rp.cleanup(), "srg properties regression test failed");
}

#[test]
fn srg_animation_and_progress() {
    let mut rp = RegParams::new("srg_animation");

    let image = textured_image();
    let seeds = LabelImage::from_point_sets(10, 6, &[vec![(0, 0)], vec![(9, 5)]]).unwrap();

    let calls = Arc::new(Mutex::new(Vec::<(f64, Option<String>)>::new()));
    let sink = Arc::clone(&calls);

    let mut srg = SeededRegionGrowing::with_options(SrgOptions::new().with_animation_frames(5));
    srg.set_image(image);
    srg.set_seeds(seeds);
    srg.add_progress_listener(move |fraction, status| {
        sink.lock()
            .unwrap()
            .push((fraction, status.map(str::to_string)));
    });
    srg.run().unwrap();

    let labels = srg.region_markers().unwrap();
    let frames = srg.animation_frames();
    rp.compare_values(5.0, frames.len() as f64, 0.0);

    // Snapshots are taken every 12 admissions and only ever gain labels
    let mut previous = 0usize;
    for (k, frame) in frames.iter().enumerate() {
        let labeled = 60 - frame.count_unassigned();
        rp.compare_values(((k + 1) * 12) as f64, labeled as f64, 0.0);
        rp.compare_values(1.0, (labeled >= previous) as u32 as f64, 0.0);
        previous = labeled;

        let consistent = frame
            .data()
            .iter()
            .zip(labels.data())
            .all(|(&f, &l)| f == 0 || f == l);
        rp.compare_values(1.0, consistent as u32 as f64, 0.0);
    }
    rp.compare_labels(labels, frames.last().unwrap());

    let calls = calls.lock().unwrap();
    // One call per seeded row, one per snapshot and the final call
    rp.compare_values(12.0, calls.len() as f64, 0.0);
    let monotonic = calls.windows(2).all(|w| w[0].0 <= w[1].0);
    rp.compare_values(1.0, monotonic as u32 as f64, 0.0);
    let (last, status) = calls.last().unwrap();
    rp.compare_values(1.0, *last, 0.0);
    rp.compare_values(1.0, (status.as_deref() == Some("Done")) as u32 as f64, 0.0);

    assert!(rp.cleanup(), "srg animation regression test failed");
}

#[test]
fn srg_animation_thresholds_reached_by_seeds() {
    let mut rp = RegParams::new("srg_animation_seeds");

    // 8 seed pixels against an interval of 4: the seeds alone reach the
    // first two thresholds
    let image = FPix::new_with_value(4, 4, 5.0).unwrap();
    let top: Vec<(u32, u32)> = (0..4).map(|x| (x, 0)).collect();
    let second: Vec<(u32, u32)> = (0..4).map(|x| (x, 1)).collect();
    let seeds = LabelImage::from_point_sets(4, 4, &[top, second]).unwrap();

    let calls = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&calls);
    let mut srg = SeededRegionGrowing::with_options(SrgOptions::new().with_animation_frames(4));
    srg.set_image(image);
    srg.set_seeds(seeds);
    srg.add_progress_listener(move |_, _| *sink.lock().unwrap() += 1);
    srg.run().unwrap();

    let frames = srg.animation_frames();
    rp.compare_values(4.0, frames.len() as f64, 0.0);
    for (frame, labeled) in frames.iter().zip([8, 8, 12, 16]) {
        rp.compare_values(labeled as f64, (16 - frame.count_unassigned()) as f64, 0.0);
    }
    rp.compare_labels(srg.region_markers().unwrap(), &frames[3]);
    // 4 seeded rows, 2 snapshots taken while growing, completion
    rp.compare_values(7.0, *calls.lock().unwrap() as f64, 0.0);

    // A lone seed pixel reaches the only threshold there is
    let image = FPix::new(1, 1).unwrap();
    let seeds = LabelImage::from_point_sets(1, 1, &[vec![(0, 0)]]).unwrap();
    let options = SrgOptions::new().with_animation_frames(5);
    let out = seeded_region_growing(&image, &seeds, None, &options).unwrap();
    rp.compare_values(1.0, out.frames.len() as f64, 0.0);
    rp.compare_labels(&out.labels, &out.frames[0]);

    // Fully seeded image: every threshold is reached during seeding
    let image = FPix::new(2, 2).unwrap();
    let rows = [vec![(0, 0), (1, 0)], vec![(0, 1), (1, 1)]];
    let seeds = LabelImage::from_point_sets(2, 2, &rows).unwrap();
    let options = SrgOptions::new().with_animation_frames(2);
    let out = seeded_region_growing(&image, &seeds, None, &options).unwrap();
    rp.compare_values(2.0, out.frames.len() as f64, 0.0);
    for frame in &out.frames {
        rp.compare_labels(&out.labels, frame);
    }

    assert!(rp.cleanup(), "srg animation seed threshold regression test failed");
}

#[test]
fn srg_input_errors() {
    let image = textured_image();

    let empty = LabelImage::new(10, 6).unwrap();
    assert!(matches!(
        seeded_region_growing(&image, &empty, None, &SrgOptions::default()),
        Err(RegionError::NoSeeds)
    ));

    let seeds = LabelImage::from_point_sets(10, 6, &[vec![(3, 2)]]).unwrap();
    let mut mask = Mask::new(10, 6, true).unwrap();
    mask.set_pixel(3, 2, false).unwrap();
    assert!(matches!(
        seeded_region_growing(&image, &seeds, Some(&mask), &SrgOptions::default()),
        Err(RegionError::InvalidSeed { x: 3, y: 2, z: 0 })
    ));

    let small_mask = Mask::new(9, 6, true).unwrap();
    assert!(matches!(
        seeded_region_growing(&image, &seeds, Some(&small_mask), &SrgOptions::default()),
        Err(RegionError::Core(_))
    ));

    let options = SrgOptions::new().with_connectivity(ConnectivityType::TwentySixWay);
    assert!(matches!(
        seeded_region_growing(&image, &seeds, None, &options),
        Err(RegionError::InvalidParameters(_))
    ));
}
