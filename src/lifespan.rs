//! Live object counting.
//!
//! Every [`Vector`](crate::Vector), [`VectorView`](crate::VectorView) and
//! [`VectorIterator`](crate::VectorIterator) embeds a [`LifespanTracker`], which keeps a
//! per-type count of live objects. Counts that stay above zero after the owner is done
//! usually mean a handle leaked somewhere on the other side of the boundary.
//!
//! Tracking is active with the `lifespan` feature in debug builds, and in release builds
//! with `lifespan-release`. Otherwise every call here is a no-op and reports return 0.

use std::{
    any::{TypeId, type_name},
    collections::BTreeMap,
    marker::PhantomData,
};

use parking_lot::{Mutex, const_mutex};

const ENABLED: bool = cfg!(all(
    feature = "lifespan",
    any(debug_assertions, feature = "lifespan-release")
));

struct TypeRecord {
    name: &'static str,
    live: usize,
    trace: bool,
}

static STATE: Mutex<BTreeMap<TypeId, TypeRecord>> = const_mutex(BTreeMap::new());

fn record<T: 'static>(state: &mut BTreeMap<TypeId, TypeRecord>) -> &mut TypeRecord {
    state.entry(TypeId::of::<T>()).or_insert_with(|| TypeRecord {
        name: type_name::<T>(),
        live: 0,
        trace: false,
    })
}

/// Counts one live `T` from construction until drop.
pub struct LifespanTracker<T: 'static>(PhantomData<fn() -> T>);

impl<T: 'static> LifespanTracker<T> {
    #[inline]
    pub fn new() -> Self {
        LifespanInfo::add_object::<T>();
        Self(PhantomData)
    }
}

impl<T: 'static> Default for LifespanTracker<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Drop for LifespanTracker<T> {
    #[inline]
    fn drop(&mut self) {
        LifespanInfo::remove_object::<T>();
    }
}

/// Global live object bookkeeping.
pub struct LifespanInfo;

impl LifespanInfo {
    /// Returns `true` if live objects are being counted in this build.
    #[inline]
    pub const fn is_enabled() -> bool {
        ENABLED
    }

    /// Records that a new `T` was constructed.
    pub fn add_object<T: 'static>() {
        if !ENABLED {
            return;
        }
        let mut state = STATE.lock();
        let record = record::<T>(&mut state);
        record.live += 1;
        if record.trace {
            log::trace!("new {} ({} live)", record.name, record.live);
        }
    }

    /// Records that a `T` was dropped.
    pub fn remove_object<T: 'static>() {
        if !ENABLED {
            return;
        }
        let mut state = STATE.lock();
        let record = record::<T>(&mut state);
        // Objects created before a reset() are dropped against a zero count.
        record.live = record.live.saturating_sub(1);
        if record.trace {
            log::trace!("drop {} ({} live)", record.name, record.live);
        }
    }

    /// Returns how many `T`s are currently alive.
    pub fn live_count<T: 'static>() -> usize {
        if !ENABLED {
            return 0;
        }
        STATE
            .lock()
            .get(&TypeId::of::<T>())
            .map_or(0, |record| record.live)
    }

    /// Logs every type with live instances, highest count first, and returns the total
    /// number of live objects.
    pub fn report_live_objects() -> usize {
        if !ENABLED {
            return 0;
        }
        let state = STATE.lock();

        let mut live: Vec<(&'static str, usize)> = state
            .values()
            .filter(|record| record.live > 0)
            .map(|record| (record.name, record.live))
            .collect();
        live.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        if !live.is_empty() {
            log::warn!("live objects (may indicate leaks):");
            for (name, count) in &live {
                log::warn!("  {count}\t{name}");
            }
        }

        live.iter().map(|(_, count)| count).sum()
    }

    /// Turns per-object trace logging on or off for `T`.
    pub fn set_trace_allocations<T: 'static>(enabled: bool) {
        if !ENABLED {
            return;
        }
        record::<T>(&mut STATE.lock()).trace = enabled;
    }

    /// Wipes all counts and trace settings.
    ///
    /// Tests call this first so that leaks from one test don't show up in the next.
    pub fn reset() {
        STATE.lock().clear();
    }
}
