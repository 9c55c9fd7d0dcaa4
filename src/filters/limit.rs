//! Lazy truncation of result streams

/// Iterator yielding at most a fixed number of items from its source
///
/// Created by [`limit`]. Stops pulling from the source once the cap is
/// reached.
#[derive(Debug, Clone)]
pub struct Limit<I> {
    iter: I,
    remaining: Option<usize>,
}

/// Limits a stream to its first `n` items.
///
/// `None` and `Some(0)` leave the stream unlimited.
pub fn limit<I: IntoIterator>(iter: I, n: Option<usize>) -> Limit<I::IntoIter> {
    Limit {
        iter: iter.into_iter(),
        remaining: n.filter(|&n| n > 0),
    }
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.remaining {
            None => self.iter.next(),
            Some(0) => None,
            Some(remaining) => {
                *remaining -= 1;
                self.iter.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        match self.remaining {
            None => (lower, upper),
            Some(n) => (
                lower.min(n),
                Some(upper.map_or(n, |upper| upper.min(n))),
            ),
        }
    }
}
