/// TTL cache with in-flight fetch dedup, owned explicitly by its consumer
/// instead of living in module-level singleton state
#[derive(Debug, Clone, PartialEq)]
pub struct TtlCache<T> {
    value: Option<T>,
    fetched_at: u64,
    ttl: u64,
    in_flight: bool,
}

impl<T> TtlCache<T> {
    pub fn new(ttl: u64) -> Self {
        Self {
            value: None,
            fetched_at: 0,
            ttl,
            in_flight: false,
        }
    }

    pub fn is_fresh(&self, block_time: u64) -> bool {
        self.value.is_some() && block_time < self.fetched_at + self.ttl
    }

    pub fn get(&self, block_time: u64) -> Option<&T> {
        if self.is_fresh(block_time) {
            self.value.as_ref()
        } else {
            None
        }
    }

    /// returns true when the caller should start a fetch,
    /// repeated calls while one is in flight are deduplicated
    pub fn try_begin_fetch(&mut self, block_time: u64) -> bool {
        if self.is_fresh(block_time) || self.in_flight {
            return false;
        }

        self.in_flight = true;
        true
    }

    pub fn complete_fetch(&mut self, value: T, block_time: u64) {
        self.value = Some(value);
        self.fetched_at = block_time;
        self.in_flight = false;
    }

    /// keeps any stale value so the next read can still show something
    pub fn fail_fetch(&mut self) {
        self.in_flight = false;
    }

    pub fn invalidate(&mut self) {
        self.value = None;
        self.fetched_at = 0;
        self.in_flight = false;
    }
}
