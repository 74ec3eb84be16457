//! Values that are either available now or will be later.
//!
//! An [`Awaitable`] can always be `.await`ed; the ready variant resolves on
//! the first poll without suspending.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::future::{BoxFuture, FutureExt};

pub struct Awaitable<T> {
    inner: Inner<T>,
}

enum Inner<T> {
    // emptied once the value has been handed out
    Ready(Option<T>),
    Pending(BoxFuture<'static, T>),
}

impl<T> Awaitable<T> {
    pub fn ready(value: T) -> Self {
        Self {
            inner: Inner::Ready(Some(value)),
        }
    }
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            inner: Inner::Pending(future.boxed()),
        }
    }
    pub fn is_ready(&self) -> bool {
        matches!(self.inner, Inner::Ready(Some(_)))
    }
    /// The immediate value, if there is one.
    pub fn into_ready(self) -> Option<T> {
        match self.inner {
            Inner::Ready(value) => value,
            Inner::Pending(_) => None,
        }
    }
    pub fn map<U, F>(self, f: F) -> Awaitable<U>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        match self.inner {
            Inner::Ready(Some(value)) => Awaitable::ready(f(value)),
            Inner::Ready(None) => Awaitable {
                inner: Inner::Ready(None),
            },
            Inner::Pending(future) => Awaitable::pending(future.map(f)),
        }
    }
}

// The value is moved out, never pinned in place.
impl<T> Unpin for Awaitable<T> {}

impl<T> Future for Awaitable<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let this = self.get_mut();
        match &mut this.inner {
            Inner::Ready(value) => match value.take() {
                Some(value) => Poll::Ready(value),
                None => panic!("`Awaitable` polled after completion"),
            },
            Inner::Pending(future) => future.as_mut().poll(cx),
        }
    }
}

impl<T> From<T> for Awaitable<T> {
    fn from(value: T) -> Self {
        Self::ready(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Awaitable<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.inner {
            Inner::Ready(Some(value)) => f.debug_tuple("Ready").field(value).finish(),
            Inner::Ready(None) => f.write_str("Done"),
            Inner::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}
