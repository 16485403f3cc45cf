//! Integration tests for convolution output alignment (convslice, ConvAlign)

mod common;

use common::{assert_allclose_f64, init_tracing};
use echolect::error::Error;
use echolect::ops::{ConvAlign, convslice};
use echolect::tensor::Tensor;
use proptest::prelude::*;

/// Direct full linear convolution, used as the reference output
fn full_convolution(h: &[f64], x: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; h.len() + x.len() - 1];
    for (i, hv) in h.iter().enumerate() {
        for (j, xv) in x.iter().enumerate() {
            out[i + j] += hv * xv;
        }
    }
    out
}

#[test]
fn test_reference_ranges() {
    init_tracing();
    assert_eq!(convslice(3, 5, ConvAlign::Valid).unwrap(), 2..5);
    assert_eq!(convslice(3, 5, ConvAlign::Same).unwrap(), 1..6);
    assert_eq!(convslice(3, 5, ConvAlign::NoDelay).unwrap(), 2..7);
    assert_eq!(convslice(3, 5, ConvAlign::Full).unwrap(), 0..7);
}

#[test]
fn test_default_is_nodelay() {
    assert_eq!(
        convslice(4, 10, ConvAlign::default()).unwrap(),
        convslice(4, 10, ConvAlign::NoDelay).unwrap()
    );
}

#[test]
fn test_nodelay_removes_filter_delay() {
    // A pure delay filter: h = [0, 0, 1] delays x by two samples.
    let h = [0.0, 0.0, 1.0];
    let x = [1.0, 2.0, 3.0, 4.0];
    let full = full_convolution(&h, &x);

    let range = convslice(h.len(), x.len(), ConvAlign::NoDelay).unwrap();
    assert_allclose_f64(&full[range], &x, 0.0, 0.0, "nodelay");
}

#[test]
fn test_same_is_centered() {
    // Centered 3-tap impulse: same alignment returns x unchanged.
    let h = [0.0, 1.0, 0.0];
    let x = [5.0, -1.0, 2.0, 8.0, 3.0];
    let full = full_convolution(&h, &x);

    let range = convslice(h.len(), x.len(), ConvAlign::Same).unwrap();
    assert_allclose_f64(&full[range], &x, 0.0, 0.0, "same");
}

#[test]
fn test_valid_uses_full_overlap_only() {
    let h = [1.0, 1.0, 1.0];
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let full = full_convolution(&h, &x);

    let range = convslice(h.len(), x.len(), ConvAlign::Valid).unwrap();
    assert_allclose_f64(&full[range], &[6.0, 9.0, 12.0], 1e-12, 0.0, "valid");
}

#[test]
fn test_valid_signal_shorter_than_filter() {
    let range = convslice(6, 2, ConvAlign::Valid).unwrap();
    assert!(range.is_empty());
    assert_eq!(range.start, 5);
}

#[test]
fn test_empty_filter_rejected() {
    for align in ConvAlign::ALL {
        assert!(matches!(
            convslice(0, 4, align),
            Err(Error::InvalidArgument { .. })
        ));
    }
}

#[test]
fn test_parse_names() {
    let parsed: Vec<ConvAlign> = ["valid", "same", "nodelay", "full"]
        .iter()
        .map(|name| name.parse().unwrap())
        .collect();
    assert_eq!(parsed, ConvAlign::ALL);
    assert!("delay".parse::<ConvAlign>().is_err());
    assert!("".parse::<ConvAlign>().is_err());
}

#[test]
fn test_trim_batch_along_last_dim() {
    // Two rows of a full convolution of a 3-tap filter with 4-sample signals.
    let data: Vec<f64> = (0..12).map(|v| v as f64).collect();
    let full = Tensor::from_slice(&data, &[2, 6]);

    let kept = ConvAlign::NoDelay.trim(&full, 3, 4, -1).unwrap();

    assert_eq!(kept.shape(), &[2, 4]);
    assert_eq!(
        kept.to_vec::<f64>(),
        [2.0, 3.0, 4.0, 5.0, 8.0, 9.0, 10.0, 11.0]
    );
    assert!(kept.shares_storage(&full));
}

#[test]
fn test_trim_rejects_wrong_length() {
    let full = Tensor::from_slice(&[0.0f32; 5], &[5]);
    assert!(matches!(
        ConvAlign::Same.trim(&full, 3, 4, 0),
        Err(Error::ShapeMismatch { .. })
    ));
}

proptest! {
    #[test]
    fn prop_lengths(filter_len in 1usize..64, signal_len in 0usize..128) {
        let valid = convslice(filter_len, signal_len, ConvAlign::Valid).unwrap();
        let same = convslice(filter_len, signal_len, ConvAlign::Same).unwrap();
        let nodelay = convslice(filter_len, signal_len, ConvAlign::NoDelay).unwrap();
        let full = convslice(filter_len, signal_len, ConvAlign::Full).unwrap();
        let full_len = filter_len + signal_len - 1;

        if signal_len >= filter_len {
            prop_assert_eq!(valid.len(), signal_len - filter_len + 1);
        } else {
            prop_assert!(valid.is_empty());
        }
        prop_assert_eq!(same.len(), signal_len);
        prop_assert_eq!(nodelay.len(), signal_len);
        prop_assert_eq!(full.len(), full_len);

        for range in [valid, same, nodelay, full] {
            prop_assert!(range.end <= full_len);
        }
    }
}
