/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// `value mod modulus`, always in `0..modulus`.
pub fn wrap(value: i32, modulus: i32) -> i32 {
    value.rem_euclid(modulus)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delta {
    pub x: i32,
    pub y: i32,
}

impl Delta {
    pub fn scaled(self, factor: i32) -> Delta {
        Delta {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn negated(self) -> Delta {
        self.scaled(-1)
    }
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Moves by `delta`, wrapping each axis into `0..width` / `0..height`.
    pub fn wrapped_add(&self, delta: Delta, width: i32, height: i32) -> Point {
        Point {
            x: wrap(self.x + delta.x, width),
            y: wrap(self.y + delta.y, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: i32 = 400;
    const H: i32 = 300;

    #[test]
    fn test_wrap_is_never_negative() {
        assert_eq!(wrap(-20, 400), 380);
        assert_eq!(wrap(-400, 400), 0);
        assert_eq!(wrap(-401, 400), 399);
        assert_eq!(wrap(420, 400), 20);
        assert_eq!(wrap(0, 300), 0);
        assert_eq!(wrap(299, 300), 299);
    }

    #[test]
    fn test_distance() {
        let a = Point::new(220, 150);
        assert_eq!(distance(a, a), 0.0);
        assert_eq!(distance(a, Point::new(225, 150)), 5.0);
        assert_eq!(distance(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(
            distance(Point::new(3, 4), Point::new(0, 0)),
            distance(Point::new(0, 0), Point::new(3, 4)),
            "distance is symmetric"
        );
    }

    #[test]
    fn test_zero_delta() {
        let delta = Delta { x: 0, y: 0 };

        let pos = Point::new(200, 150);
        assert_eq!(pos.wrapped_add(delta, W, H), pos);

        let pos = Point::new(0, 0);
        assert_eq!(pos.wrapped_add(delta, W, H), pos);

        let pos = Point::new(380, 280);
        assert_eq!(pos.wrapped_add(delta, W, H), pos);
    }

    #[test]
    fn test_full_lap_returns_to_start() {
        let pos = Point::new(60, 40);

        let delta = Delta { x: W, y: H };
        assert_eq!(pos.wrapped_add(delta, W, H), pos);

        let delta = Delta { x: -W, y: -H };
        assert_eq!(pos.wrapped_add(delta, W, H), pos);
    }

    #[test]
    fn test_wrap_underflow() {
        let step = Delta { x: -1, y: 0 }.scaled(20);
        assert_eq!(Point::new(0, 100).wrapped_add(step, W, H), Point::new(380, 100));

        let step = Delta { x: 0, y: -1 }.scaled(20);
        assert_eq!(Point::new(100, 0).wrapped_add(step, W, H), Point::new(100, 280));
    }

    #[test]
    fn test_wrap_overflow() {
        let step = Delta { x: 1, y: 0 }.scaled(20);
        assert_eq!(Point::new(380, 100).wrapped_add(step, W, H), Point::new(0, 100));

        let step = Delta { x: 0, y: 1 }.scaled(20);
        assert_eq!(Point::new(100, 280).wrapped_add(step, W, H), Point::new(100, 0));
    }

    #[test]
    fn test_negated_delta() {
        let delta = Delta { x: 1, y: 0 };
        assert_eq!(delta.negated(), Delta { x: -1, y: 0 });
        assert_eq!(delta.negated().negated(), delta);
    }
}
