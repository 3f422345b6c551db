use druid::Data;

use crate::error::Error;

/// The phases of a fetch: not requested yet, in flight with the request
/// key `K`, finished with `T`, or failed with `E`.
#[derive(Clone, Debug, Data)]
pub enum Fetch<T: Data, K: Data = (), E: Data = Error> {
    Empty,
    Pending(K),
    Ready(T),
    Failed(E),
}

impl<T: Data, K: Data, E: Data> Fetch<T, K, E> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_pending(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        matches!(self, Self::Pending(k) if k == key)
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    pub fn begin(&mut self, key: K) {
        *self = Self::Pending(key);
    }

    /// Settles the fetch with its outcome, unless it has moved on and waits
    /// for a different request now.
    pub fn settle(&mut self, (key, result): (K, Result<T, E>))
    where
        K: PartialEq,
    {
        if self.is_pending(&key) {
            *self = match result {
                Ok(ok) => Self::Ready(ok),
                Err(err) => Self::Failed(err),
            };
        }
    }
}

impl<T: Data, K: Data + Default, E: Data> Fetch<T, K, E> {
    pub fn begin_default(&mut self) {
        *self = Self::Pending(K::default());
    }
}

impl<T: Data, K: Data, E: Data> Default for Fetch<T, K, E> {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type F = Fetch<u32, u64>;

    #[test]
    fn settle_completes_the_matching_request() {
        let mut fetch = F::Empty;
        fetch.begin(1);
        fetch.settle((1, Ok(10)));
        assert!(matches!(fetch, Fetch::Ready(10)));
    }

    #[test]
    fn settle_drops_a_stale_result() {
        let mut fetch = F::Empty;
        fetch.begin(1);
        fetch.begin(2);
        fetch.settle((1, Ok(10)));
        assert!(fetch.is_pending(&2));
        fetch.settle((2, Ok(20)));
        assert!(matches!(fetch, Fetch::Ready(20)));
    }

    #[test]
    fn settle_ignores_a_finished_fetch() {
        let mut fetch = F::Empty;
        fetch.begin(1);
        fetch.settle((1, Err(Error::NotFound)));
        assert!(matches!(fetch, Fetch::Failed(Error::NotFound)));
        fetch.settle((1, Ok(10)));
        assert!(matches!(fetch, Fetch::Failed(Error::NotFound)));
    }

    #[test]
    fn clear_empties_any_phase() {
        let mut fetch = F::Empty;
        fetch.begin(1);
        fetch.settle((1, Ok(10)));
        fetch.clear();
        assert!(fetch.is_empty());
    }
}
