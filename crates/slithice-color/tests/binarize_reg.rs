//! Thresholding regression test

use slithice_color::{DEFAULT_BINARIZE_THRESHOLD, binarize, binarize_default, threshold_low};
use slithice_core::Pix;
use slithice_test::{RegParams, flat_gray, gradient_gray, init_tracing, ramp_color, seeded_gray};

#[test]
fn binarize_reg() {
    init_tracing();
    let mut rp = RegParams::new("binarize");

    // Flat 4x4 at 100 is below the default threshold
    let flat = flat_gray(4, 4, 100);
    let out = binarize_default(&flat).expect("binarize_default");
    rp.compare_pix(&flat_gray(4, 4, 0), &out);

    let pix = seeded_gray(37, 23, 12);
    for t in [0u8, 1, 64, DEFAULT_BINARIZE_THRESHOLD, 200, 255] {
        let bin = binarize(&pix, t).expect("binarize");
        let hist = bin.gray_histogram().expect("hist");
        rp.compare_values(
            pix.pixel_count() as f64,
            (hist.get(0) + hist.get(255)) as f64,
            0.0,
        );
        let below = pix
            .gray_histogram()
            .expect("hist")
            .counts()
            .iter()
            .take(t as usize)
            .sum::<u32>();
        rp.compare_values(below as f64, hist.get(0) as f64, 0.0);
    }

    rp.check(binarize(&ramp_color(3, 3), 10).is_err(), "color accepted");

    assert!(rp.cleanup(), "binarize regression test failed");
}

#[test]
fn threshold_low_reg() {
    init_tracing();
    let mut rp = RegParams::new("threshold_low");

    let pix = gradient_gray(40, 20);
    for t in [0u8, 50, 128, 255] {
        let out = threshold_low(&pix, t).expect("threshold_low");
        let mut ok = true;
        for y in 0..20 {
            for x in 0..40 {
                let v = pix.get_pixel_unchecked(x, y);
                let expected = if v < t as u32 { 0 } else { v };
                ok &= out.get_pixel_unchecked(x, y) == expected;
            }
        }
        rp.check(ok, &format!("threshold_low at {t}"));
    }

    // Thresholding twice is the same as once
    let once = threshold_low(&pix, 90).expect("once");
    let twice = threshold_low(&once, 90).expect("twice");
    rp.compare_pix(&once, &twice);

    // A sample equal to the threshold is kept
    let white: Pix = flat_gray(1, 1, 255);
    rp.compare_pix(&white, &threshold_low(&white, 255).expect("top"));

    assert!(rp.cleanup(), "threshold_low regression test failed");
}
