use crate::generate::Generator;

/// Forwards the first `count` elements, then halts the upstream traversal.
#[derive(Clone)]
pub struct Take<G> {
    prev: G,
    count: usize,
}

/// Create a stage that forwards at most `count` elements.
pub fn take<G>(prev: G, count: usize) -> Take<G>
where
    G: Generator,
{
    Take { prev, count }
}

impl<G> Generator for Take<G>
where
    G: Generator,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut taken = 0;
        let mut stopped = false;
        self.prev.drive(&mut |x| {
            if taken == self.count {
                return false;
            }
            taken += 1;
            let keep = accept(x);
            if !keep {
                stopped = true;
            }
            keep
        });
        !stopped
    }
}

/// Suppresses the first `count` elements, then forwards everything else.
#[derive(Clone)]
pub struct Drop<G> {
    prev: G,
    count: usize,
}

/// Create a stage that suppresses the first `count` elements.
pub fn drop<G>(prev: G, count: usize) -> Drop<G>
where
    G: Generator,
{
    Drop { prev, count }
}

impl<G> Generator for Drop<G>
where
    G: Generator,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut seen = 0;
        self.prev.drive(&mut |x| {
            if seen < self.count {
                seen += 1;
                return true;
            }
            accept(x)
        })
    }
}

/// Suppresses every `period`-th element (1-based positions `period`,
/// `2 * period`, …), counted per traversal.
#[derive(Clone)]
pub struct DropEvery<G> {
    prev: G,
    period: usize,
}

/// Create a stage that suppresses every `period`-th element.
///
/// Panics if `period` is zero.
pub fn drop_every<G>(prev: G, period: usize) -> DropEvery<G>
where
    G: Generator,
{
    assert!(period > 0, "drop_every: period must be at least 1");
    DropEvery { prev, period }
}

impl<G> Generator for DropEvery<G>
where
    G: Generator,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut pos = 0usize;
        self.prev.drive(&mut |x| {
            pos += 1;
            if pos % self.period == 0 {
                true
            } else {
                accept(x)
            }
        })
    }
}
