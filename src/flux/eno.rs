//! ENO reconstruction of cell-edge values from cell averages.
//!
//! Classic one-sided ENO (Harten/Shu): starting from the cell itself, the
//! stencil grows one cell at a time toward the side with the smaller
//! undivided difference, then the edge values are formed with the standard
//! uniform-mesh reconstruction coefficients c_{r,j}. Orders 1 through 5 are
//! supported; the coefficient tables are hard-coded.

/// Reconstruction coefficients c_{r,j} for uniform meshes.
///
/// `weights(k, r)` returns the k coefficients of the stencil shifted r cells
/// to the left; r = −1 is the shifted-right row used for the left edge of
/// the r = 0 stencil.
fn weights(k: usize, r: isize) -> &'static [f64] {
    static K1: [[f64; 1]; 2] = [[1.0], [1.0]];
    static K2: [[f64; 2]; 3] = [[1.5, -0.5], [0.5, 0.5], [-0.5, 1.5]];
    static K3: [[f64; 3]; 4] = [
        [11.0 / 6.0, -7.0 / 6.0, 1.0 / 3.0],
        [1.0 / 3.0, 5.0 / 6.0, -1.0 / 6.0],
        [-1.0 / 6.0, 5.0 / 6.0, 1.0 / 3.0],
        [1.0 / 3.0, -7.0 / 6.0, 11.0 / 6.0],
    ];
    static K4: [[f64; 4]; 5] = [
        [25.0 / 12.0, -23.0 / 12.0, 13.0 / 12.0, -0.25],
        [0.25, 13.0 / 12.0, -5.0 / 12.0, 1.0 / 12.0],
        [-1.0 / 12.0, 7.0 / 12.0, 7.0 / 12.0, -1.0 / 12.0],
        [1.0 / 12.0, -5.0 / 12.0, 13.0 / 12.0, 0.25],
        [-0.25, 13.0 / 12.0, -23.0 / 12.0, 25.0 / 12.0],
    ];
    static K5: [[f64; 5]; 6] = [
        [137.0 / 60.0, -163.0 / 60.0, 137.0 / 60.0, -21.0 / 20.0, 0.2],
        [0.2, 77.0 / 60.0, -43.0 / 60.0, 17.0 / 60.0, -0.05],
        [-0.05, 0.45, 47.0 / 60.0, -13.0 / 60.0, 1.0 / 30.0],
        [1.0 / 30.0, -13.0 / 60.0, 47.0 / 60.0, 0.45, -0.05],
        [-0.05, 17.0 / 60.0, -43.0 / 60.0, 77.0 / 60.0, 0.2],
        [0.2, -21.0 / 20.0, 137.0 / 60.0, -163.0 / 60.0, 137.0 / 60.0],
    ];

    let row = (r + 1) as usize;
    match k {
        1 => &K1[row],
        2 => &K2[row],
        3 => &K3[row],
        4 => &K4[row],
        5 => &K5[row],
        _ => unreachable!("reconstruction order {} not supported", k),
    }
}

/// Undivided difference of order `order` starting at `start`.
fn undivided_diff(window: &[f64], start: usize, order: usize) -> f64 {
    let mut buf: Vec<f64> = window[start..=start + order].to_vec();
    for level in 0..order {
        for i in 0..order - level {
            buf[i] = buf[i + 1] - buf[i];
        }
    }
    buf[0]
}

/// Reconstruct both edge values of the center cell of `window`.
///
/// `window` holds 2k−1 cell averages centered on the cell of interest.
/// Returns `(left_edge, right_edge)`: the reconstructed value at the cell's
/// left interface (x_{i−1/2}) and right interface (x_{i+1/2}).
///
/// The reconstruction is exact for cell averages of polynomials of degree
/// < k and selects the smoothest stencil near discontinuities.
pub fn eno_edge_values(window: &[f64], k: usize) -> (f64, f64) {
    assert!((1..=5).contains(&k), "reconstruction order out of range");
    assert_eq!(window.len(), 2 * k - 1, "window must hold 2k-1 cells");

    if k == 1 {
        return (window[0], window[0]);
    }

    // Adaptive stencil: grow toward the side with the smaller undivided
    // difference. `left` is the leftmost window index of the stencil.
    let center = k - 1;
    let mut left = center;
    for order in 1..k {
        let d_shifted = undivided_diff(window, left - 1, order);
        let d_kept = undivided_diff(window, left, order);
        if d_shifted.abs() < d_kept.abs() {
            left -= 1;
        }
    }
    let r = (center - left) as isize;

    let c_right = weights(k, r);
    let c_left = weights(k, r - 1);

    let mut right_edge = 0.0;
    let mut left_edge = 0.0;
    for m in 0..k {
        right_edge += c_right[m] * window[left + m];
        left_edge += c_left[m] * window[left + m];
    }
    (left_edge, right_edge)
}
