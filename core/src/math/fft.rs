use num_complex::Complex32;
use rustfft::{num_traits::Zero, Fft, FftPlanner};

/// Helper that wraps the `rustfft` planner for one table length.
pub struct FftHelper {
    fft: std::sync::Arc<dyn Fft<f32>>,
    size: usize,
}

impl FftHelper {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Self { fft, size }
    }

    pub fn forward(&self, input: &[f32]) -> Vec<Complex32> {
        let mut buffer: Vec<Complex32> = input
            .iter()
            .map(|&value| Complex32::new(value, 0.0))
            .collect();
        buffer.resize(self.size, Complex32::zero());
        self.fft.process(&mut buffer);
        buffer
    }

    /// Magnitudes of bins `0..=size/2`, normalized so a pure cosine of
    /// amplitude `a` shows `a` in its bin and the DC bin holds the mean.
    pub fn magnitudes(&self, input: &[f32]) -> Vec<f32> {
        let n = self.size as f32;
        self.forward(input)
            .iter()
            .take(self.size / 2 + 1)
            .enumerate()
            .map(|(bin, c)| {
                let scale = if bin == 0 || 2 * bin == self.size {
                    n
                } else {
                    n / 2.0
                };
                c.norm() / scale
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fft_helper_returns_same_length() {
        let helper = FftHelper::new(4);
        let output = helper.forward(&[1.0, 0.0, -1.0, 0.0]);
        assert_eq!(output.len(), 4);
    }

    #[test]
    fn magnitudes_separate_dc_and_fundamental() {
        let helper = FftHelper::new(4);
        let mags = helper.magnitudes(&[3.0, 2.0, 1.0, 2.0]);
        assert_eq!(mags.len(), 3);
        assert!((mags[0] - 2.0).abs() < 1e-6);
        assert!((mags[1] - 1.0).abs() < 1e-6);
        assert!(mags[2].abs() < 1e-6);
    }
}
