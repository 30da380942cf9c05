/// Scalar that travels back and forth between two bounds.
///
/// Each step moves by `rate · dt` in the current direction; crossing a bound
/// clamps to it and reverses direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounce {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    sign: f32,
}

impl Bounce {
    pub fn new(value: f32, min: f32, max: f32) -> Self {
        debug_assert!(min <= max);
        Self {
            value: value.clamp(min, max),
            min,
            max,
            sign: 1.0,
        }
    }

    /// `true` while moving toward `max`.
    pub fn rising(&self) -> bool {
        self.sign > 0.0
    }

    /// Advances by `rate` units per second over `dt` seconds.
    pub fn advance(&mut self, rate: f32, dt: f32) -> f32 {
        self.value += self.sign * rate * dt;

        if self.value > self.max {
            self.value = self.max;
            self.sign = -self.sign;
        } else if self.value < self.min {
            self.value = self.min;
            self.sign = -self.sign;
        }

        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_toward_max_first() {
        let mut b = Bounce::new(0.0, -2.0, 2.0);
        assert!((b.advance(1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!(b.rising());
    }

    #[test]
    fn reflects_at_bounds() {
        let mut b = Bounce::new(1.5, -2.0, 2.0);
        assert_eq!(b.advance(1.0, 1.0), 2.0);
        assert!(!b.rising());

        assert!((b.advance(1.0, 1.0) - 1.0).abs() < 1e-6);
        assert_eq!(b.advance(10.0, 1.0), -2.0);
        assert!(b.rising());
    }

    #[test]
    fn zero_rate_holds_position() {
        let mut b = Bounce::new(0.25, -2.0, 2.0);
        assert_eq!(b.advance(0.0, 10.0), 0.25);
    }
}
