use crate::generate::Generator;

/// Keeps only elements satisfying a predicate.
///
/// Skipping an element never stops the upstream traversal.
#[derive(Clone)]
pub struct Filter<G, P> {
    prev: G,
    pred: P,
}

/// Create a stage that keeps only elements satisfying `pred`.
pub fn filter<G, P>(prev: G, pred: P) -> Filter<G, P>
where
    G: Generator,
    P: Fn(&G::Item) -> bool,
{
    Filter { prev, pred }
}

impl<G, P> Generator for Filter<G, P>
where
    G: Generator,
    P: Fn(&G::Item) -> bool,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        self.prev.drive(&mut |x| {
            if (self.pred)(&x) {
                accept(x)
            } else {
                true
            }
        })
    }
}

/// Forwards the longest prefix satisfying a predicate.
///
/// The first failing element stops the traversal and is not emitted.
#[derive(Clone)]
pub struct TakeWhile<G, P> {
    prev: G,
    pred: P,
}

/// Create a stage that forwards elements while `pred` holds.
pub fn take_while<G, P>(prev: G, pred: P) -> TakeWhile<G, P>
where
    G: Generator,
    P: Fn(&G::Item) -> bool,
{
    TakeWhile { prev, pred }
}

impl<G, P> Generator for TakeWhile<G, P>
where
    G: Generator,
    P: Fn(&G::Item) -> bool,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        // cutting our own input short is exhaustion, not a downstream stop
        let mut stopped = false;
        self.prev.drive(&mut |x| {
            if !(self.pred)(&x) {
                return false;
            }
            let keep = accept(x);
            if !keep {
                stopped = true;
            }
            keep
        });
        !stopped
    }
}

/// Suppresses the longest prefix satisfying a predicate, then forwards
/// everything else.
#[derive(Clone)]
pub struct DropWhile<G, P> {
    prev: G,
    pred: P,
}

/// Create a stage that suppresses elements while `pred` holds.
pub fn drop_while<G, P>(prev: G, pred: P) -> DropWhile<G, P>
where
    G: Generator,
    P: Fn(&G::Item) -> bool,
{
    DropWhile { prev, pred }
}

impl<G, P> Generator for DropWhile<G, P>
where
    G: Generator,
    P: Fn(&G::Item) -> bool,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut dropping = true;
        self.prev.drive(&mut |x| {
            if dropping && (self.pred)(&x) {
                return true;
            }
            dropping = false;
            accept(x)
        })
    }
}
