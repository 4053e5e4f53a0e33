//! # Content Cache
//!
//! Independent Draft and Live cache slots plus an observer channel.
//!
//! Each slot records the cached value, a staleness flag, a monotonically
//! increasing version, and when it was last refreshed. Invalidation is
//! logical: the value is kept (a stale page is better than a blank one) but
//! the next read through the store refetches.

use chrono::{DateTime, Utc};
use pagecraft_content::WebsiteContent;
use tokio::sync::broadcast;

/// Which copy a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheSlot {
    Draft,
    Live,
}

/// Cache notification. Observers of Live content re-read on `Refreshed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    Invalidated(CacheSlot),
    Refreshed { slot: CacheSlot, version: u64 },
}

/// Per-slot cached state.
#[derive(Debug, Clone)]
pub struct SlotState {
    pub value: Option<WebsiteContent>,
    pub stale: bool,
    pub version: u64,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl SlotState {
    fn new() -> Self {
        Self {
            value: None,
            stale: true,
            version: 0,
            refreshed_at: None,
        }
    }

    /// A slot serves reads only when it holds a value and is not stale.
    pub fn is_fresh(&self) -> bool {
        self.value.is_some() && !self.stale
    }
}

pub struct ContentCache {
    draft: SlotState,
    live: SlotState,
    events: broadcast::Sender<CacheEvent>,
}

impl ContentCache {
    pub fn new() -> Self {
        // Capacity bounds lag, not correctness: a slow observer that misses
        // events re-reads on the next one it sees.
        let (events, _) = broadcast::channel(64);
        Self {
            draft: SlotState::new(),
            live: SlotState::new(),
            events,
        }
    }

    pub fn slot(&self, slot: CacheSlot) -> &SlotState {
        match slot {
            CacheSlot::Draft => &self.draft,
            CacheSlot::Live => &self.live,
        }
    }

    fn slot_mut(&mut self, slot: CacheSlot) -> &mut SlotState {
        match slot {
            CacheSlot::Draft => &mut self.draft,
            CacheSlot::Live => &mut self.live,
        }
    }

    /// Store a freshly fetched copy, bump the slot version, notify observers.
    pub fn refresh(&mut self, slot: CacheSlot, value: WebsiteContent) -> u64 {
        let state = self.slot_mut(slot);
        state.value = Some(value);
        state.stale = false;
        state.version += 1;
        state.refreshed_at = Some(Utc::now());
        let version = state.version;

        tracing::debug!(?slot, version, "cache slot refreshed");
        let _ = self.events.send(CacheEvent::Refreshed { slot, version });
        version
    }

    /// Mark a slot stale. The cached value survives until the next refresh.
    pub fn invalidate(&mut self, slot: CacheSlot) {
        self.slot_mut(slot).stale = true;
        tracing::debug!(?slot, "cache slot invalidated");
        let _ = self.events.send(CacheEvent::Invalidated(slot));
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CacheEvent> {
        self.events.subscribe()
    }
}

impl Default for ContentCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_start_stale_and_empty() {
        let cache = ContentCache::new();
        assert!(!cache.slot(CacheSlot::Draft).is_fresh());
        assert!(!cache.slot(CacheSlot::Live).is_fresh());
        assert_eq!(cache.slot(CacheSlot::Live).version, 0);
    }

    #[test]
    fn test_refresh_bumps_version_per_slot() {
        let mut cache = ContentCache::new();
        let content = WebsiteContent::default();

        assert_eq!(cache.refresh(CacheSlot::Live, content.clone()), 1);
        assert_eq!(cache.refresh(CacheSlot::Live, content.clone()), 2);
        assert_eq!(cache.refresh(CacheSlot::Draft, content), 1);

        assert!(cache.slot(CacheSlot::Live).is_fresh());
        assert!(cache.slot(CacheSlot::Live).refreshed_at.is_some());
    }

    #[test]
    fn test_invalidate_keeps_value() {
        let mut cache = ContentCache::new();
        cache.refresh(CacheSlot::Draft, WebsiteContent::default());

        cache.invalidate(CacheSlot::Draft);

        let slot = cache.slot(CacheSlot::Draft);
        assert!(!slot.is_fresh());
        assert!(slot.value.is_some());
    }

    #[test]
    fn test_events_reach_observers() {
        let mut cache = ContentCache::new();
        let mut rx = cache.subscribe();

        cache.refresh(CacheSlot::Live, WebsiteContent::default());
        cache.invalidate(CacheSlot::Live);

        assert_eq!(
            rx.try_recv().unwrap(),
            CacheEvent::Refreshed {
                slot: CacheSlot::Live,
                version: 1
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            CacheEvent::Invalidated(CacheSlot::Live)
        );
    }
}
