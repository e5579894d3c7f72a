use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Source of hand codes for the automated opponent.
///
/// Implementations must only ever return codes in {0, 1, 2}.
pub trait Opponent: Send + Sync {
    fn next(&self) -> i64;
}

/// Uniform draw from the thread-local generator.
/// Not cryptographically secure, and need not be.
#[derive(Debug, Default, Clone, Copy)]
pub struct Random;

impl Opponent for Random {
    fn next(&self) -> i64 {
        rand::random_range(0..3)
    }
}

/// Replays a fixed sequence of codes, wrapping around at the end.
#[derive(Debug)]
pub struct Scripted {
    codes: Vec<i64>,
    cursor: AtomicUsize,
}

impl Scripted {
    pub fn new(codes: Vec<i64>) -> Self {
        assert!(!codes.is_empty(), "scripted opponent needs at least one code");
        Self {
            codes,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl Opponent for Scripted {
    fn next(&self) -> i64 {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.codes[i % self.codes.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_stays_in_range() {
        let opponent = Random;
        let mut seen = [0usize; 3];
        for _ in 0..3000 {
            let code = opponent.next();
            assert!((0..3).contains(&code));
            seen[code as usize] += 1;
        }
        assert!(seen.iter().all(|n| *n > 0));
    }

    #[test]
    fn scripted_cycles() {
        let opponent = Scripted::new(vec![1, 2]);
        assert_eq!(opponent.next(), 1);
        assert_eq!(opponent.next(), 2);
        assert_eq!(opponent.next(), 1);
    }
}
