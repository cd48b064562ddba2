use image::{Rgb, RgbImage};
use image_convertor::curve::{BOOST, CUT, build_table};
use image_convertor::filter::channel::swap_red_blue;
use image_convertor::filter::seasonal::{self, SeasonalMode};
use image_convertor::{FilterError, image_io};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_image(seed: u64) -> RgbImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = rng.random_range(1..40);
    let h = rng.random_range(1..40);
    RgbImage::from_fn(w, h, |_, _| Rgb([rng.random(), rng.random(), rng.random()]))
}

#[test]
fn white_image_warm_shift() {
    let img = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
    let out = seasonal::apply(&img, SeasonalMode::WarmShift).unwrap();
    for p in out.pixels() {
        assert_eq!(p[0], 255, "red stays at the top of the range");
        assert_eq!(p[1], 255);
        assert!(p[2] < 255, "blue is pulled down");
        assert_eq!(p[2], 254);
    }
}

#[test]
fn white_image_cool_shift() {
    let img = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
    let out = seasonal::apply(&img, SeasonalMode::CoolShift).unwrap();
    assert!(out.pixels().all(|p| p.0 == [254, 255, 255]));
}

#[test]
fn green_plane_is_untouched() {
    for seed in 0..16 {
        let img = random_image(seed);
        for &mode in SeasonalMode::ALL {
            let out = seasonal::apply(&img, mode).unwrap();
            let green_in: Vec<u8> = img.pixels().map(|p| p[1]).collect();
            let green_out: Vec<u8> = out.pixels().map(|p| p[1]).collect();
            assert_eq!(green_in, green_out);
        }
    }
}

#[test]
fn output_is_deterministic() {
    let img = random_image(99);
    for &mode in SeasonalMode::ALL {
        let a = seasonal::apply(&img, mode).unwrap();
        let b = seasonal::apply(&img, mode).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }
}

#[test]
fn input_is_not_modified() {
    let img = random_image(5);
    let copy = img.clone();
    seasonal::apply(&img, SeasonalMode::WarmShift).unwrap();
    assert_eq!(img, copy);
}

#[test]
fn modes_mirror_each_other_under_red_blue_swap() {
    for seed in 0..8 {
        let img = random_image(seed);
        let warm = seasonal::apply(&img, SeasonalMode::WarmShift).unwrap();
        let cool = seasonal::apply(&swap_red_blue(&img), SeasonalMode::CoolShift).unwrap();
        assert_eq!(swap_red_blue(&cool), warm);
    }
}

#[test]
fn table_boundaries() {
    let boost = build_table(&BOOST.x, &BOOST.y).unwrap();
    let cut = build_table(&CUT.x, &CUT.y).unwrap();

    assert_eq!(boost.map(0), 0);
    assert_eq!(cut.map(0), 0);

    assert!(boost.get(255) > boost.get(128));
    assert!(boost.get(255) < 256.0);
    assert!(cut.get(255) < boost.get(255));
    assert!(cut.get(255) < 255.0);

    for level in [64usize, 128, 200, 255] {
        assert!(boost.get(level) > cut.get(level));
    }
}

#[test]
fn string_modes_drive_the_filter() {
    let img = random_image(3);
    let mode: SeasonalMode = "summer".parse().unwrap();
    assert_eq!(
        seasonal::apply(&img, mode).unwrap(),
        seasonal::apply(&img, SeasonalMode::WarmShift).unwrap()
    );
    assert!(matches!(
        "spring".parse::<SeasonalMode>(),
        Err(FilterError::InvalidMode(_))
    ));
}

#[test]
fn malformed_buffers_are_rejected() {
    assert!(matches!(
        image_io::rgb_from_raw(3, 3, vec![0; 26]),
        Err(FilterError::InvalidImage(_))
    ));
    let empty = RgbImage::new(5, 0);
    assert!(matches!(
        seasonal::apply(&empty, SeasonalMode::CoolShift),
        Err(FilterError::InvalidImage(_))
    ));
}
