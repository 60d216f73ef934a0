use crate::generate::Generator;

/// Transforms each element with a function.
///
/// Always forwards the downstream continue/stop signal unchanged.
#[derive(Clone)]
pub struct Map<G, F> {
    prev: G,
    f: F,
}

/// Create a stage that transforms each element with `f`.
pub fn map<G, F, U>(prev: G, f: F) -> Map<G, F>
where
    G: Generator,
    F: Fn(G::Item) -> U,
{
    Map { prev, f }
}

impl<G, F, U> Generator for Map<G, F>
where
    G: Generator,
    F: Fn(G::Item) -> U,
{
    type Item = U;

    fn drive(&self, accept: &mut dyn FnMut(U) -> bool) -> bool {
        self.prev.drive(&mut |x| accept((self.f)(x)))
    }
}

/// Flattens a sequence of sequences, transforming each inner element.
///
/// The mapping function applies to the *inner* elements; a downstream stop
/// inside an inner traversal stops the outer traversal as well.
#[derive(Clone)]
pub struct FlatMap<G, F> {
    prev: G,
    f: F,
}

/// Create a stage that flattens nested sequences, mapping inner elements with `f`.
pub fn flat_map<G, F, U>(prev: G, f: F) -> FlatMap<G, F>
where
    G: Generator,
    G::Item: Generator,
    F: Fn(<G::Item as Generator>::Item) -> U,
{
    FlatMap { prev, f }
}

impl<G, F, U> Generator for FlatMap<G, F>
where
    G: Generator,
    G::Item: Generator,
    F: Fn(<G::Item as Generator>::Item) -> U,
{
    type Item = U;

    fn drive(&self, accept: &mut dyn FnMut(U) -> bool) -> bool {
        self.prev
            .drive(&mut |inner| inner.drive(&mut |x| accept((self.f)(x))))
    }
}

/// Pairs each element with its zero-based position in the traversal.
#[derive(Clone)]
pub struct WithIndex<G> {
    prev: G,
}

/// Create a stage that pairs each element with its zero-based index.
pub fn with_index<G>(prev: G) -> WithIndex<G>
where
    G: Generator,
{
    WithIndex { prev }
}

impl<G> Generator for WithIndex<G>
where
    G: Generator,
{
    type Item = (usize, G::Item);

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut idx = 0usize;
        self.prev.drive(&mut |x| {
            let keep = accept((idx, x));
            idx += 1;
            keep
        })
    }
}
