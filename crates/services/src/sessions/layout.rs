use rand::Rng;

use river_core::model::PadPosition;

/// Largest sideways nudge applied to a pad's baseline, in percent.
const HORIZONTAL_JITTER: f32 = 4.0;

/// Randomised lily pad placement for one session.
///
/// Pads follow a left-to-right baseline so the frog always appears to move
/// across the river; only the vertical position is fully random.
#[derive(Debug, Clone, PartialEq)]
pub struct LilyPadLayout {
    pads: Vec<PadPosition>,
}

impl LilyPadLayout {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let pads = (0..count)
            .map(|index| {
                let jitter = rng.random_range(-HORIZONTAL_JITTER..=HORIZONTAL_JITTER);
                let vertical =
                    rng.random_range(PadPosition::VERTICAL_MIN..=PadPosition::VERTICAL_MAX);
                PadPosition::clamped(baseline(index, count) + jitter, vertical)
            })
            .collect();
        Self { pads }
    }

    #[must_use]
    pub fn pads(&self) -> &[PadPosition] {
        &self.pads
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<PadPosition> {
        self.pads.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }
}

/// Evenly spaced horizontal position for pad `index` of `count`.
#[allow(clippy::cast_precision_loss)]
fn baseline(index: usize, count: usize) -> f32 {
    if count < 2 {
        return (PadPosition::HORIZONTAL_MIN + PadPosition::HORIZONTAL_MAX) / 2.0;
    }
    let span = PadPosition::HORIZONTAL_MAX - PadPosition::HORIZONTAL_MIN;
    PadPosition::HORIZONTAL_MIN + (index as f32 / (count - 1) as f32) * span
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn layout_stays_within_bounds() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let layout = LilyPadLayout::generate(8, &mut rng);

            assert_eq!(layout.len(), 8);
            for pad in layout.pads() {
                assert!((5.0..=95.0).contains(&pad.horizontal), "{pad:?}");
                assert!((25.0..=75.0).contains(&pad.vertical), "{pad:?}");
            }
        }
    }

    #[test]
    fn layout_stays_near_baseline() {
        let mut rng = StdRng::seed_from_u64(11);
        let layout = LilyPadLayout::generate(8, &mut rng);

        for (index, pad) in layout.pads().iter().enumerate() {
            let expected = baseline(index, 8);
            assert!((pad.horizontal - expected).abs() <= HORIZONTAL_JITTER + f32::EPSILON);
        }
    }

    #[test]
    fn baseline_spans_the_river() {
        assert_eq!(baseline(0, 8), 5.0);
        assert_eq!(baseline(7, 8), 95.0);
        assert!(baseline(3, 8) < baseline(4, 8));
        assert_eq!(baseline(0, 1), 50.0);
    }
}
