//! Convolution regression test
//!
//! Rim pass-through for every result mode, linearity on flat images, and
//! the flat 4x4 box-blur scenario.

use slithice_core::{Pix, PixelDepth};
use slithice_filter::{
    Kernel, SlidingWindow, convolve_normalized, convolve_raw, convolve_with_callback,
};
use slithice_test::{RegParams, flat_gray, gradient_gray, init_tracing, seeded_gray};

fn kernels() -> Vec<Kernel> {
    vec![
        Kernel::from_slice(1, 1, &[1.0]).expect("1x1"),
        Kernel::from_slice(2, 2, &[0.25, 0.25, 0.25, 0.25]).expect("2x2"),
        Kernel::box_kernel(3).expect("box 3"),
        Kernel::from_slice(3, 5, &[0.1; 15]).expect("3x5"),
        Kernel::from_slice(4, 3, &[-0.5, 0.0, 0.5, 1.0, 0.2, 0.2, 0.2, 0.2, 1.0, 0.5, 0.0, -0.5])
            .expect("4x3"),
        Kernel::box_kernel(5).expect("box 5"),
        Kernel::sobel_x(),
    ]
}

#[test]
fn convolve_reg_rim_pass_through() {
    init_tracing();
    let mut rp = RegParams::new("convolve_rim");

    let pix = seeded_gray(13, 11, 42);
    for kernel in kernels() {
        let window = SlidingWindow::new(kernel.width(), kernel.height()).expect("window");
        let interior = window.interior(pix.width(), pix.height());

        let narrow = convolve_normalized(&pix, &kernel).expect("convolve_normalized");
        let callback =
            convolve_with_callback(&pix, &kernel, |acc| acc.clamp(0, 255)).expect("callback");
        let raw = convolve_raw(&pix, &kernel).expect("convolve_raw");

        let mut rim_ok = true;
        for y in 0..pix.height() {
            for x in 0..pix.width() {
                if interior.contains(x, y) {
                    continue;
                }
                let v = pix.get_pixel_unchecked(x, y);
                rim_ok &= narrow.get_pixel_unchecked(x, y) == v;
                rim_ok &= callback.get_pixel_unchecked(x, y) == v;
                rim_ok &= raw.pix.get_pixel_unchecked(x, y) == v as i32;
            }
        }
        rp.check(
            rim_ok,
            &format!("rim differs for {}x{} kernel", kernel.width(), kernel.height()),
        );
    }

    assert!(rp.cleanup(), "convolve_rim regression test failed");
}

#[test]
fn convolve_reg_flat_linearity() {
    init_tracing();
    let mut rp = RegParams::new("convolve_linearity");

    // Square kernels keep every tap in bounds at every interior position
    let square = [
        Kernel::box_kernel(3).expect("box 3"),
        Kernel::box_kernel(5).expect("box 5"),
        Kernel::from_slice(2, 2, &[0.5, -0.25, 1.0, 0.75]).expect("2x2"),
        Kernel::from_slice(3, 3, &[0.3, -1.2, 0.7, 2.0, 0.05, -0.4, 1.1, 0.9, -0.6])
            .expect("3x3"),
        Kernel::sobel_y(),
    ];

    for &v in &[0u8, 1, 37, 100, 200, 255] {
        let pix = flat_gray(9, 8, v);
        for kernel in &square {
            let expected = v as f64 * kernel.sum() as f64;
            let raw = convolve_raw(&pix, kernel).expect("convolve_raw");
            let window = SlidingWindow::new(kernel.width(), kernel.height()).expect("window");
            let interior = window.interior(9, 8);
            for y in interior.y0..interior.y1 {
                for x in interior.x0..interior.x1 {
                    let got = raw.pix.get_pixel_unchecked(x, y) as f64;
                    rp.compare_values(expected, got, 1.01);
                }
            }
        }
    }

    assert!(rp.cleanup(), "convolve_linearity regression test failed");
}

#[test]
fn convolve_reg_flat_box_scenario() {
    init_tracing();
    let mut rp = RegParams::new("convolve_flat_box");

    let pix = flat_gray(4, 4, 100);
    let out = convolve_normalized(&pix, &Kernel::box_kernel(3).expect("box")).expect("convolve");
    rp.compare_pix(&pix, &out);

    let interior = SlidingWindow::new(3, 3).expect("window").interior(4, 4);
    rp.compare_values(4.0, interior.area() as f64, 0.0);

    assert!(rp.cleanup(), "convolve_flat_box regression test failed");
}

#[test]
fn convolve_reg_modes_agree() {
    init_tracing();
    let mut rp = RegParams::new("convolve_modes");

    // With an in-range kernel the three modes store the same interior values
    let pix = gradient_gray(17, 12);
    let kernel = Kernel::box_kernel(3).expect("box");
    let narrow = convolve_normalized(&pix, &kernel).expect("narrow");
    let callback = convolve_with_callback(&pix, &kernel, |acc| acc).expect("callback");
    let raw = convolve_raw(&pix, &kernel).expect("raw");
    rp.compare_pix(&narrow, &callback);

    let mut agree = true;
    for y in 1..11 {
        for x in 1..16 {
            agree &= narrow.get_pixel_unchecked(x, y) as i32 == raw.pix.get_pixel_unchecked(x, y);
        }
    }
    rp.check(agree, "raw and narrow interiors disagree");
    rp.check(raw.min >= 0 && raw.max <= 255, "box blur left the 8-bit range");

    // Callback clamps what the plain store would wrap
    let doubling = Kernel::from_slice(1, 1, &[2.0]).expect("1x1");
    let bright = flat_gray(3, 3, 200);
    let wrapped = convolve_normalized(&bright, &doubling).expect("wrapped");
    let clamped =
        convolve_with_callback(&bright, &doubling, |acc| acc.min(255)).expect("clamped");
    rp.compare_values(144.0, wrapped.get_pixel_unchecked(1, 1) as f64, 0.0);
    rp.compare_values(255.0, clamped.get_pixel_unchecked(1, 1) as f64, 0.0);

    // Contract violations are reported, not clamped
    let color = Pix::new(5, 5, PixelDepth::Bit32).expect("color");
    rp.check(convolve_normalized(&color, &kernel).is_err(), "color accepted");
    let tiny = flat_gray(2, 2, 1);
    rp.check(convolve_raw(&tiny, &kernel).is_err(), "oversized kernel accepted");

    assert!(rp.cleanup(), "convolve_modes regression test failed");
}
