//! Inversion regression test

use slithice_color::{invert_color, invert_gray, to_grayscale};
use slithice_core::color;
use slithice_test::{RegParams, checker_gray, init_tracing, ramp_color, seeded_gray};

#[test]
fn coloring_reg() {
    init_tracing();
    let mut rp = RegParams::new("coloring");

    let pix = seeded_gray(29, 17, 21);
    let inv = invert_gray(&pix).expect("invert_gray");
    for y in 0..17 {
        for x in 0..29 {
            rp.compare_values(
                255.0 - pix.get_pixel_unchecked(x, y) as f64,
                inv.get_pixel_unchecked(x, y) as f64,
                0.0,
            );
        }
    }
    rp.compare_pix(&pix, &invert_gray(&inv).expect("invert twice"));

    // Checkerboard swaps its squares
    let board = checker_gray(8, 8, 2);
    let swapped = invert_gray(&board).expect("invert board");
    rp.compare_values(
        255.0 - board.get_pixel_unchecked(0, 0) as f64,
        swapped.get_pixel_unchecked(0, 0) as f64,
        0.0,
    );

    let colored = ramp_color(12, 9);
    let neg = invert_color(&colored).expect("invert_color");
    for y in 0..9 {
        for x in 0..12 {
            let (r, g, b) = color::extract_rgb(colored.get_pixel_unchecked(x, y));
            let word = neg.get_pixel_unchecked(x, y);
            rp.check(
                color::extract_rgb(word) == (255 - r, 255 - g, 255 - b),
                &format!("inverted channels at ({x}, {y})"),
            );
            rp.compare_values(255.0, color::alpha(word) as f64, 0.0);
        }
    }
    rp.compare_pix(&colored, &invert_color(&neg).expect("invert twice"));

    // Mean of inverted channels is the inverted mean, within truncation
    let gray_of_neg = to_grayscale(&neg).expect("gray");
    let gray = to_grayscale(&colored).expect("gray");
    for y in 0..9 {
        for x in 0..12 {
            let a = gray_of_neg.get_pixel_unchecked(x, y) as f64;
            let b = 255.0 - gray.get_pixel_unchecked(x, y) as f64;
            rp.compare_values(b, a, 1.0);
        }
    }

    assert!(rp.cleanup(), "coloring regression test failed");
}
