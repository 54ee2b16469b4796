/// Frame-by-frame count from 0 up to `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / f64::from(frame_ms.max(1))).max(1.0);
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            done: false,
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    /// Value to display after the next frame. Snaps to the target and ends.
    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            Some(self.current.floor() as u64)
        } else {
            self.done = true;
            Some(self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_to_exact_target() {
        let frames: Vec<u64> = CounterAnimation::new(100, 160, 16).collect();
        assert_eq!(frames.len(), 10);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(frames.last(), Some(&100));
        assert_eq!(frames[0], 10);
    }

    #[test]
    fn uneven_steps_snap_to_target() {
        let frames: Vec<u64> = CounterAnimation::new(7, 2_000, 16).collect();
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(frames.last(), Some(&7));
        assert!(frames[..frames.len() - 1].iter().all(|v| *v < 7));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CounterAnimation::new(0, 2_000, 16);
        assert_eq!(counter.next(), Some(0));
        assert_eq!(counter.next(), None);
    }
}
