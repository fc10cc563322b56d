//! Shared vehicle state with synchronous change notification.
//!
//! [`VehicleStore`] is the single source of truth for one vehicle. It is a
//! cheap `Clone` handle; every screen holds one. Writes replace the whole
//! [`Vehicle`] and notify every subscriber before returning.
//!
//! # Dispatch Rules
//!
//! - The listener list is snapshotted at the start of each dispatch. A
//!   listener subscribed during dispatch first hears the next write.
//! - A listener unsubscribed during dispatch is skipped for the rest of that
//!   dispatch and never called again.
//! - Every listener called during a write receives that write's value, even if
//!   an earlier listener wrote again from inside its callback.
//! - A listener that would be re-entered while its own callback is still
//!   running is skipped with a warning.
//!
//! # Validation
//!
//! None. Out-of-range values, a running engine on a locked car and a changed
//! vehicle id are all accepted and stored. Range violations and id changes
//! are logged at `warn`; a locked car with its engine running (a remote
//! start) only at `debug`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use companion_common::Vehicle;
use tracing::{debug, warn};

type Listener = Rc<RefCell<dyn FnMut(&Vehicle)>>;

struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Registry {
    const fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(existing, _)| *existing == id)
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

struct StoreInner {
    state: RefCell<Vehicle>,
    registry: RefCell<Registry>,
}

/// Handle to the shared vehicle state.
#[derive(Clone)]
pub struct VehicleStore {
    inner: Rc<StoreInner>,
}

impl VehicleStore {
    pub fn new(initial: Vehicle) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(initial),
                registry: RefCell::new(Registry::new()),
            }),
        }
    }

    /// Snapshot of the current vehicle.
    pub fn state(&self) -> Vehicle {
        self.inner.state.borrow().clone()
    }

    /// Read the current vehicle without cloning it.
    ///
    /// # Panics
    ///
    /// If `f` writes to the store.
    pub fn with_state<R>(&self, f: impl FnOnce(&Vehicle) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Swap in `next` and notify every subscriber before returning.
    pub fn replace_state(&self, next: Vehicle) {
        for violation in next.range_violations() {
            if violation.is_out_of_range() {
                warn!(vehicle = next.id(), %violation, "Accepting out-of-range vehicle state");
            } else {
                debug!(vehicle = next.id(), %violation, "Accepting vehicle state");
            }
        }

        {
            let current = self.inner.state.borrow();
            if current.id() != next.id() {
                warn!(
                    from = current.id(),
                    to = next.id(),
                    "Vehicle id changed by replace"
                );
            }
        }

        *self.inner.state.borrow_mut() = next.clone();

        let notified = self.notify(&next);
        debug!(
            vehicle = next.id(),
            locked = next.is_locked,
            running = next.is_running,
            climate_on = next.climate.is_on,
            notified,
            "Vehicle state replaced"
        );
    }

    /// Clone the current vehicle, let `edit` change it, and store the result.
    ///
    /// Shorthand for the copy-and-override every caller of
    /// [`replace_state`](Self::replace_state) would otherwise write.
    pub fn patch(&self, edit: impl FnOnce(&mut Vehicle)) {
        let mut next = self.state();
        edit(&mut next);
        self.replace_state(next);
    }

    /// Set `is_locked`. Nothing else changes.
    pub fn lock(&self) {
        self.patch(|vehicle| vehicle.is_locked = true);
    }

    /// Clear `is_locked`. Nothing else changes.
    pub fn unlock(&self) {
        self.patch(|vehicle| vehicle.is_locked = false);
    }

    /// Register `listener` to be called with the new value on every write.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&Vehicle) + 'static,
    {
        let listener: Listener = Rc::new(RefCell::new(listener));
        let mut registry = self.inner.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, listener));
        debug!(
            listener = id,
            total = registry.listeners.len(),
            "Listener subscribed"
        );

        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.inner.registry.borrow().listeners.len()
    }

    /// Call every listener registered when dispatch starts. Returns how many ran.
    fn notify(&self, value: &Vehicle) -> usize {
        let snapshot: Vec<(u64, Listener)> = self.inner.registry.borrow().listeners.clone();
        let mut notified = 0;

        for (id, listener) in snapshot {
            if !self.inner.registry.borrow().contains(id) {
                continue;
            }
            match listener.try_borrow_mut() {
                Ok(mut callback) => {
                    (&mut *callback)(value);
                    notified += 1;
                }
                Err(_) => warn!(listener = id, "Re-entrant listener skipped"),
            }
        }

        notified
    }
}

impl Default for VehicleStore {
    fn default() -> Self {
        Self::new(Vehicle::default())
    }
}

/// Registration returned by [`VehicleStore::subscribe`].
///
/// Dropping it keeps the listener registered; call
/// [`unsubscribe`](Self::unsubscribe) to remove it.
#[must_use = "dropping a Subscription leaves the listener registered forever"]
pub struct Subscription {
    id: u64,
    store: Weak<StoreInner>,
}

impl Subscription {
    /// Remove the listener.
    ///
    /// Returns `false` if it was already gone or the store was dropped.
    pub fn unsubscribe(self) -> bool {
        let Some(inner) = self.store.upgrade() else {
            return false;
        };
        let removed = inner.registry.borrow_mut().remove(self.id);
        if removed {
            debug!(listener = self.id, "Listener unsubscribed");
        }
        removed
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.store.upgrade().is_some_and(|inner| {
            let registry = inner.registry.borrow();
            registry.contains(self.id)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io;
    use std::sync::{Arc, Mutex};

    use companion_common::{ClimateMode, label};
    use proptest::prelude::*;

    use super::*;

    fn recorder(store: &VehicleStore) -> (Rc<RefCell<Vec<Vehicle>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription =
            store.subscribe(move |vehicle| sink.borrow_mut().push(vehicle.clone()));
        (seen, subscription)
    }

    fn arb_mode() -> impl Strategy<Value = ClimateMode> {
        prop_oneof![
            Just(ClimateMode::Face),
            Just(ClimateMode::FaceFeet),
            Just(ClimateMode::Feet),
            Just(ClimateMode::FaceDefrost),
        ]
    }

    prop_compose! {
        // Includes out-of-range levels and fan speeds; the store must accept them.
        fn arb_vehicle()(
            is_locked in any::<bool>(),
            is_running in any::<bool>(),
            fuel_level in 0u8..=120,
            battery_level in 0u8..=120,
            odometer_reading in any::<u32>(),
            climate_on in any::<bool>(),
            half_degrees in 28u8..=64,
            fan_speed in 0u8..=6,
            mode in arb_mode(),
            is_ac_on in any::<bool>(),
        ) -> Vehicle {
            let mut vehicle = Vehicle::default();
            vehicle.is_locked = is_locked;
            vehicle.is_running = is_running;
            vehicle.fuel_level = fuel_level;
            vehicle.battery_level = battery_level;
            vehicle.odometer_reading = odometer_reading;
            vehicle.climate.is_on = climate_on;
            vehicle.climate.temperature = f32::from(half_degrees) / 2.0;
            vehicle.climate.fan_speed = fan_speed;
            vehicle.climate.mode = mode;
            vehicle.climate.is_ac_on = is_ac_on;
            vehicle
        }
    }

    proptest! {
        #[test]
        fn test_listeners_receive_exact_value(
            values in proptest::collection::vec(arb_vehicle(), 1..8)
        ) {
            let store = VehicleStore::default();
            let (first, _a) = recorder(&store);
            let (second, _b) = recorder(&store);

            for value in values {
                first.borrow_mut().clear();
                second.borrow_mut().clear();
                store.replace_state(value.clone());
                prop_assert_eq!(&*first.borrow(), &[value.clone()]);
                prop_assert_eq!(&*second.borrow(), &[value]);
            }
        }

        #[test]
        fn test_read_after_write(value in arb_vehicle()) {
            let store = VehicleStore::default();
            store.replace_state(value.clone());
            prop_assert_eq!(store.state(), value);
        }

        #[test]
        fn test_lock_unlock_idempotent(start in arb_vehicle()) {
            let store = VehicleStore::new(start);
            store.lock();
            prop_assert!(store.state().is_locked);
            store.lock();
            prop_assert!(store.state().is_locked);
            store.unlock();
            prop_assert!(!store.state().is_locked);
            store.unlock();
            prop_assert!(!store.state().is_locked);
        }

        #[test]
        fn test_lock_changes_only_lock_flag(start in arb_vehicle()) {
            let store = VehicleStore::new(start.clone());
            store.lock();

            let mut expected = start;
            expected.is_locked = true;
            prop_assert_eq!(store.state(), expected);
        }

        #[test]
        fn test_unsubscribe_during_dispatch(count in 2usize..6, victim in 0usize..6) {
            let victim = victim % count;
            let store = VehicleStore::default();
            let calls: Rc<Vec<Cell<u32>>> = Rc::new((0..count).map(|_| Cell::new(0)).collect());
            let slots: Rc<RefCell<Vec<Option<Subscription>>>> = Rc::new(RefCell::new(Vec::new()));

            // The first listener removes the victim on its first call.
            for index in 0..count {
                let calls = Rc::clone(&calls);
                let slots_handle = Rc::clone(&slots);
                let subscription = store.subscribe(move |_| {
                    calls[index].set(calls[index].get() + 1);
                    if index == 0 {
                        let taken = slots_handle.borrow_mut()[victim].take();
                        if let Some(subscription) = taken {
                            subscription.unsubscribe();
                        }
                    }
                });
                slots.borrow_mut().push(Some(subscription));
            }

            store.unlock();
            store.lock();

            for index in 0..count {
                let expected = match (index == victim, victim == 0) {
                    (false, _) => 2,
                    // Removed itself during its first call.
                    (true, true) => 1,
                    // Removed before its turn in the first dispatch.
                    (true, false) => 0,
                };
                prop_assert_eq!(
                    calls[index].get(),
                    expected,
                    "listener {} (victim {})",
                    index,
                    victim
                );
            }
            prop_assert_eq!(store.subscriber_count(), count - 1);
        }
    }

    #[test]
    fn test_unlock_keeps_engine_state() {
        let store = VehicleStore::default();
        assert!(store.state().is_locked, "Default vehicle starts locked");
        let before = store.state();

        store.unlock();

        let after = store.state();
        assert!(!after.is_locked);
        assert_eq!(
            after.is_running, before.is_running,
            "Unlock must not touch the engine"
        );
    }

    #[test]
    fn test_replace_temperature_only() {
        let store = VehicleStore::default();
        let before = store.state();

        let mut next = store.state();
        next.climate.temperature = 25.0;
        store.replace_state(next);

        let after = store.state();
        assert_eq!(after.climate.temperature, 25.0);
        let mut expected = before;
        expected.climate.temperature = 25.0;
        assert_eq!(after, expected, "No other field may change");
    }

    #[test]
    fn test_two_listeners_called_once_each() {
        let store = VehicleStore::default();
        let (first, _a) = recorder(&store);
        let (second, _b) = recorder(&store);

        let mut next = store.state();
        next.is_running = true;
        store.replace_state(next.clone());

        assert_eq!(*first.borrow(), vec![next.clone()]);
        assert_eq!(*second.borrow(), vec![next]);
    }

    #[test]
    fn test_out_of_range_values_are_stored() {
        let store = VehicleStore::default();
        store.patch(|vehicle| {
            vehicle.climate.fan_speed = 9;
            vehicle.fuel_level = 150;
            vehicle.is_locked = true;
            vehicle.is_running = true;
        });

        let state = store.state();
        assert_eq!(state.climate.fan_speed, 9, "Store must not clamp");
        assert_eq!(state.fuel_level, 150);
        assert!(
            state.is_locked && state.is_running,
            "Locked and running is accepted"
        );
    }

    #[test]
    fn test_changed_id_is_accepted() {
        let store = VehicleStore::default();
        let mut other = Vehicle::new("v2", "VF1RJB00000000000");
        other.nickname = label("Spare");
        store.replace_state(other.clone());
        assert_eq!(store.state().id(), "v2");
        assert_eq!(store.state(), other);
    }

    #[test]
    fn test_nested_write_keeps_outer_value_for_later_listeners() {
        let store = VehicleStore::default();

        let writer_store = store.clone();
        let writer_calls = Rc::new(Cell::new(0));
        let writer_calls_handle = Rc::clone(&writer_calls);
        let _writer = store.subscribe(move |vehicle| {
            writer_calls_handle.set(writer_calls_handle.get() + 1);
            // Turn the engine on whenever someone unlocks.
            if !vehicle.is_locked && !vehicle.is_running {
                writer_store.patch(|v| v.is_running = true);
            }
        });
        let (later, _later) = recorder(&store);

        store.unlock();

        let seen = later.borrow();
        assert_eq!(
            seen.len(),
            2,
            "Later listener hears the nested write and the outer write"
        );
        assert!(seen[0].is_running, "Nested write is delivered first");
        assert!(
            !seen[1].is_running,
            "Outer write is still delivered with its own value"
        );
        assert_eq!(
            writer_calls.get(),
            1,
            "Writer is not re-entered by its own nested write"
        );
        assert!(
            store.state().is_running,
            "Nested write was the last to store"
        );
    }

    #[test]
    fn test_subscribe_during_dispatch_waits_for_next_write() {
        let store = VehicleStore::default();
        let late_calls = Rc::new(Cell::new(0));

        let registering_store = store.clone();
        let late_calls_handle = Rc::clone(&late_calls);
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let slot_handle = Rc::clone(&slot);
        let _registrar = store.subscribe(move |_| {
            if slot_handle.borrow().is_none() {
                let counter = Rc::clone(&late_calls_handle);
                let subscription =
                    registering_store.subscribe(move |_| counter.set(counter.get() + 1));
                *slot_handle.borrow_mut() = Some(subscription);
            }
        });

        store.unlock();
        assert_eq!(
            late_calls.get(),
            0,
            "New listener must not hear the write in progress"
        );

        store.lock();
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_subscription_lifecycle() {
        let store = VehicleStore::default();
        let (seen, subscription) = recorder(&store);
        assert!(subscription.is_active());
        assert_eq!(store.subscriber_count(), 1);

        assert!(subscription.unsubscribe());
        assert_eq!(store.subscriber_count(), 0);

        store.unlock();
        assert!(
            seen.borrow().is_empty(),
            "Unsubscribed listener must not be called"
        );
    }

    #[test]
    fn test_unsubscribe_after_store_dropped() {
        let store = VehicleStore::default();
        let (_seen, subscription) = recorder(&store);
        drop(store);
        assert!(!subscription.is_active());
        assert!(!subscription.unsubscribe());
    }

    #[test]
    fn test_with_state_borrows() {
        let store = VehicleStore::default();
        let nickname_len = store.with_state(|vehicle| vehicle.nickname.len());
        assert_eq!(nickname_len, "My Renault".len());
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_remote_start_on_locked_car_is_not_a_warning() {
        let store = VehicleStore::default();
        let logs = captured_logs(|| {
            store.patch(|vehicle| vehicle.is_running = true);
            store.patch(|vehicle| vehicle.fuel_level = 60);
        });

        assert!(
            logs.contains("vehicle is locked while the engine is running"),
            "The combination is still traced"
        );
        assert!(
            !logs.lines().any(|line| line.contains("WARN")),
            "Locked and running must not warn on every write:\n{logs}"
        );
    }

    #[test]
    fn test_out_of_range_value_warns() {
        let store = VehicleStore::default();
        let logs = captured_logs(|| store.patch(|vehicle| vehicle.fuel_level = 150));

        assert!(
            logs.lines()
                .any(|line| line.contains("WARN") && line.contains("fuel level 150%")),
            "Out-of-range values are reported at warn:\n{logs}"
        );
    }
}
