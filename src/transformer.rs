//! Pure value-to-value conversions.

use std::marker::PhantomData;
use std::sync::Arc;

pub trait Transformer<T, U = T> {
    fn transform(&self, value: T) -> U;

    /// Feeds this transformer's output into `next`.
    fn then<V, N>(self, next: N) -> Then<Self, N, U>
    where
        Self: Sized,
        N: Transformer<U, V>,
    {
        Then {
            first: self,
            second: next,
            middle: PhantomData,
        }
    }
}

impl<F, T, U> Transformer<T, U> for F
where
    F: Fn(T) -> U,
{
    fn transform(&self, value: T) -> U {
        self(value)
    }
}

pub type BoxedTransformer<T, U = T> = Arc<dyn Fn(T) -> U + Send + Sync>;

pub struct Then<A, B, U> {
    first: A,
    second: B,
    middle: PhantomData<fn(U)>,
}

impl<A, B, T, U, V> Transformer<T, V> for Then<A, B, U>
where
    A: Transformer<T, U>,
    B: Transformer<U, V>,
{
    fn transform(&self, value: T) -> V {
        self.second.transform(self.first.transform(value))
    }
}

pub fn identity<T>() -> impl Transformer<T> + Copy {
    |value: T| value
}

pub fn boxed<T, U, F>(transformer: F) -> BoxedTransformer<T, U>
where
    F: Fn(T) -> U + Send + Sync + 'static,
{
    Arc::new(transformer)
}
