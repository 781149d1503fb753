//! Histogram and equalization regression test
//!
//! Histogram sum invariant, LUT shape, convergence of repeated
//! equalization, and agreement between the pure and in-place forms.

use slithice_core::Pix;
use slithice_filter::{
    build_histogram, equalization_lut, equalize_histogram, equalize_histogram_in_place,
};
use slithice_test::{
    RegParams, checker_gray, flat_gray, gradient_gray, gray_from_fn, init_tracing, seeded_gray,
};

fn mean_abs_diff(a: &Pix, b: &Pix) -> (f64, u32) {
    let mut total = 0u64;
    let mut worst = 0u32;
    for y in 0..a.height() {
        for x in 0..a.width() {
            let d = a.get_pixel_unchecked(x, y).abs_diff(b.get_pixel_unchecked(x, y));
            total += d as u64;
            worst = worst.max(d);
        }
    }
    (total as f64 / a.pixel_count() as f64, worst)
}

#[test]
fn enhance_reg_histogram_sum() {
    init_tracing();
    let mut rp = RegParams::new("enhance_histogram");

    for (w, h) in [(1u32, 1u32), (4, 4), (13, 7), (64, 33)] {
        for pix in [gradient_gray(w, h), seeded_gray(w, h, (w * h) as u64)] {
            let hist = build_histogram(&pix).expect("build_histogram");
            rp.compare_values((w * h) as f64, hist.total() as f64, 0.0);
        }
    }

    // Flat 4x4 at 100: one occupied bin
    let hist = build_histogram(&flat_gray(4, 4, 100)).expect("flat");
    rp.compare_values(16.0, hist.get(100) as f64, 0.0);
    rp.compare_values(1.0, hist.occupied_bins() as f64, 0.0);

    let checker = build_histogram(&checker_gray(8, 8, 2)).expect("checker");
    rp.compare_values(32.0, checker.get(0) as f64, 0.0);
    rp.compare_values(32.0, checker.get(255) as f64, 0.0);

    assert!(rp.cleanup(), "enhance_histogram regression test failed");
}

#[test]
fn enhance_reg_lut() {
    init_tracing();
    let mut rp = RegParams::new("enhance_lut");

    for pix in [gradient_gray(31, 17), seeded_gray(40, 30, 7), flat_gray(5, 5, 0)] {
        let hist = build_histogram(&pix).expect("hist");
        let lut = equalization_lut(&hist, pix.pixel_count()).expect("lut");
        rp.check(
            lut.windows(2).all(|w| w[0] <= w[1]),
            "equalization table decreases",
        );
        // Cumulative count reaches N at the top bin: 255 - 1
        rp.compare_values(254.0, lut[255] as f64, 0.0);
    }

    assert!(rp.cleanup(), "enhance_lut regression test failed");
}

#[test]
fn enhance_reg_equalize_converges() {
    init_tracing();
    let mut rp = RegParams::new("enhance_converges");

    let dark = gray_from_fn(30, 30, |x, y| ((x * 7 + y * 13) % 60) as u8);
    for pix in [gradient_gray(31, 17), seeded_gray(32, 32, 11), dark] {
        let hist = build_histogram(&pix).expect("hist");
        let (once, hist_once) = equalize_histogram(&pix, &hist).expect("first pass");
        rp.compare_values(pix.pixel_count() as f64, hist_once.total() as f64, 0.0);
        rp.compare_histograms(&once.gray_histogram().expect("rebuild"), &hist_once);

        let (twice, _) = equalize_histogram(&once, &hist_once).expect("second pass");
        let (first_mean, _) = mean_abs_diff(&pix, &once);
        let (second_mean, second_worst) = mean_abs_diff(&once, &twice);
        rp.check(
            second_mean <= first_mean,
            "second pass moved more than the first",
        );
        rp.check(second_mean <= 1.0, "second pass mean change above 1");
        rp.check(second_worst <= 2, "second pass moved a pixel by more than 2");
    }

    // A compressed range is stretched toward the top of the scale
    let dark = gray_from_fn(30, 30, |x, y| ((x * 7 + y * 13) % 60) as u8);
    let (stretched, _) =
        equalize_histogram(&dark, &build_histogram(&dark).expect("hist")).expect("equalize");
    let top = (0..30)
        .flat_map(|y| (0..30).map(move |x| (x, y)))
        .map(|(x, y)| stretched.get_pixel_unchecked(x, y))
        .max()
        .unwrap_or(0);
    rp.compare_values(254.0, top as f64, 0.0);

    assert!(rp.cleanup(), "enhance_converges regression test failed");
}

#[test]
fn enhance_reg_in_place_matches_pure() {
    init_tracing();
    let mut rp = RegParams::new("enhance_in_place");

    let pix = seeded_gray(23, 19, 3);
    let hist = build_histogram(&pix).expect("hist");
    let (pure, pure_hist) = equalize_histogram(&pix, &hist).expect("pure");

    let mut pm = pix.to_mut();
    let mut in_place_hist = hist.clone();
    equalize_histogram_in_place(&mut pm, &mut in_place_hist).expect("in place");
    let in_place: Pix = pm.into();

    rp.compare_pix(&pure, &in_place);
    rp.compare_histograms(&pure_hist, &in_place_hist);
    // The pure form leaves its inputs alone
    rp.compare_histograms(&build_histogram(&pix).expect("again"), &hist);

    assert!(rp.cleanup(), "enhance_in_place regression test failed");
}
