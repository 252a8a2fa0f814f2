//! Combining sample buffers in time and in parallel.

/// Place buffers end to end.
pub fn concatenate(buffers: &[Vec<f64>]) -> Vec<f64> {
    let total: usize = buffers.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    for buffer in buffers {
        out.extend_from_slice(buffer);
    }
    out
}

/// Sum buffers sample by sample, all starting at index 0.
///
/// The result is as long as the longest input; shorter inputs contribute
/// silence past their end. Buffers are summed in slice order, so the output
/// is reproducible bit for bit.
pub fn mix(buffers: &[Vec<f64>]) -> Vec<f64> {
    let len = buffers.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = vec![0.0; len];
    for buffer in buffers {
        add_into(&mut out, buffer);
    }
    out
}

/// Add `src` into `dst`, stopping at the shorter of the two.
pub fn add_into(dst: &mut [f64], src: &[f64]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d += s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenate_keeps_order() {
        let out = concatenate(&[vec![1.0, 2.0], vec![], vec![3.0]]);
        assert_eq!(out, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_concatenate_empty() {
        assert!(concatenate(&[]).is_empty());
    }

    #[test]
    fn test_mix_pads_shorter() {
        let out = mix(&[vec![1.0, 1.0, 1.0], vec![0.5]]);
        assert_eq!(out, vec![1.5, 1.0, 1.0]);
    }

    #[test]
    fn test_mix_empty() {
        assert!(mix(&[]).is_empty());
    }

    #[test]
    fn test_add_into_truncates() {
        let mut dst = vec![0.0; 2];
        add_into(&mut dst, &[1.0, 2.0, 3.0]);
        assert_eq!(dst, vec![1.0, 2.0]);
    }
}
