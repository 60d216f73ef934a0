use crate::generate::Generator;

/// Running fold that emits the accumulator after each element.
///
/// Emits one value per upstream element; the seed itself is not emitted.
#[derive(Clone)]
pub struct Scan<G, A, F> {
    prev: G,
    init: A,
    f: F,
}

/// Create a seeded scan stage.
pub fn scan<G, A, F>(prev: G, init: A, f: F) -> Scan<G, A, F>
where
    G: Generator,
    A: Clone,
    F: Fn(A, G::Item) -> A,
{
    Scan { prev, init, f }
}

impl<G, A, F> Generator for Scan<G, A, F>
where
    G: Generator,
    A: Clone,
    F: Fn(A, G::Item) -> A,
{
    type Item = A;

    fn drive(&self, accept: &mut dyn FnMut(A) -> bool) -> bool {
        let mut acc = self.init.clone();
        self.prev.drive(&mut |x| {
            acc = (self.f)(acc.clone(), x);
            accept(acc.clone())
        })
    }
}

/// Unseeded scan: the first element passes through untransformed as the
/// initial accumulator.
#[derive(Clone)]
pub struct Scan1<G, F> {
    prev: G,
    f: F,
}

/// Create an unseeded scan stage.
pub fn scan1<G, F>(prev: G, f: F) -> Scan1<G, F>
where
    G: Generator,
    G::Item: Clone,
    F: Fn(G::Item, G::Item) -> G::Item,
{
    Scan1 { prev, f }
}

impl<G, F> Generator for Scan1<G, F>
where
    G: Generator,
    G::Item: Clone,
    F: Fn(G::Item, G::Item) -> G::Item,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut acc: Option<G::Item> = None;
        self.prev.drive(&mut |x| {
            let next = match acc.take() {
                Some(a) => (self.f)(a, x),
                None => x,
            };
            acc = Some(next.clone());
            accept(next)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_scan_emits_running_accumulator() {
        let s = Seq::from_vec(vec![1, 2, 3, 4]);
        assert_eq!(s.scan(0, |a, x| a + x).get(), vec![1, 3, 6, 10]);
    }

    #[test]
    fn test_scan_empty_emits_nothing() {
        let s = Seq::from_vec(Vec::<i32>::new());
        assert_eq!(s.scan(100, |a, x| a + x).get(), Vec::<i32>::new());
    }

    #[test]
    fn test_scan1_first_element_passes_through() {
        let s = Seq::from_vec(vec![5, 1, 2, 3]);
        assert_eq!(s.scan1(|a, x| a + x).get(), vec![5, 6, 8, 11]);
    }

    #[test]
    fn test_scan_accumulator_restarts_per_traversal() {
        let s = Seq::from_vec(vec![1, 1, 1]).scan(0, |a, x| a + x);
        assert_eq!(s.get(), vec![1, 2, 3]);
        assert_eq!(s.get(), vec![1, 2, 3]);
    }
}
