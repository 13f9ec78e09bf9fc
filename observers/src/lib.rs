use common::subject_observer::{Observer, StateReader};
use log::{info, trace};

/// Reacts to low states.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteObserverA;

/// Reacts to a reset state or to anything from 2 upwards.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteObserverB;

impl ConcreteObserverA {
    pub fn reacts_to(state: i32) -> bool {
        state < 3
    }
}

impl ConcreteObserverB {
    pub fn reacts_to(state: i32) -> bool {
        state == 0 || state >= 2
    }
}

impl Observer<i32> for ConcreteObserverA {
    fn update(&self, source: &dyn StateReader<i32>) {
        let state = source.state();
        if Self::reacts_to(state) {
            info!("Observer A: Reacted to the event.");
        } else {
            trace!("Observer A: Ignored state {state}.");
        }
    }
}

impl Observer<i32> for ConcreteObserverB {
    fn update(&self, source: &dyn StateReader<i32>) {
        let state = source.state();
        if Self::reacts_to(state) {
            info!("Observer B: Reacted to the event.");
        } else {
            trace!("Observer B: Ignored state {state}.");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use common::subject_observer::{Observer, StateReader};
    use log::{LevelFilter, Log, Metadata, Record};
    use mockall::mock;

    use super::{ConcreteObserverA, ConcreteObserverB};

    mock! {
        Reader {}

        impl StateReader<i32> for Reader {
            fn state(&self) -> i32;
        }
    }

    #[test]
    fn test_concrete_observer_a_reacts_to() {
        assert!(ConcreteObserverA::reacts_to(0));
        assert!(ConcreteObserverA::reacts_to(1));
        assert!(ConcreteObserverA::reacts_to(2));
        assert!(!ConcreteObserverA::reacts_to(3));
        assert!(!ConcreteObserverA::reacts_to(5));
        assert!(!ConcreteObserverA::reacts_to(9));
    }

    #[test]
    fn test_concrete_observer_b_reacts_to() {
        assert!(ConcreteObserverB::reacts_to(0));
        assert!(
            !ConcreteObserverB::reacts_to(1),
            "Should be the only ignored state in range"
        );
        assert!(ConcreteObserverB::reacts_to(2));
        assert!(ConcreteObserverB::reacts_to(5));
        assert!(ConcreteObserverB::reacts_to(9));
    }

    #[test]
    fn test_concrete_observers_update_should_read_state_once() {
        let observers: [&dyn Observer<i32>; 2] = [&ConcreteObserverA, &ConcreteObserverB];
        for observer in observers {
            for state in 0..10 {
                // Given
                let mut reader = MockReader::new();
                reader.expect_state().times(1).return_const(state);

                // When
                observer.update(&reader);
            }
        }
    }

    thread_local! {
        static MESSAGES: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
    }

    /// Keeps the messages logged by the current thread only.
    struct ThreadLogger;

    impl Log for ThreadLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            MESSAGES.with(|messages| messages.borrow_mut().push(record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static THREAD_LOGGER: ThreadLogger = ThreadLogger;

    fn reactions_to(observer: &dyn Observer<i32>, state: i32) -> usize {
        let _ = log::set_logger(&THREAD_LOGGER);
        log::set_max_level(LevelFilter::Trace);
        MESSAGES.with(|messages| messages.borrow_mut().clear());

        let mut reader = MockReader::new();
        reader.expect_state().return_const(state);
        observer.update(&reader);

        MESSAGES.with(|messages| {
            messages
                .borrow()
                .iter()
                .filter(|message| message.contains("Reacted to the event"))
                .count()
        })
    }

    #[test]
    fn test_concrete_observers_update_should_react_by_state() {
        // Given
        let expectations = [
            (0, 1, 1),
            (1, 1, 0),
            (2, 1, 1),
            (3, 0, 1),
            (5, 0, 1),
            (9, 0, 1),
        ];

        for (state, expected_a, expected_b) in expectations {
            // When
            let result_a = reactions_to(&ConcreteObserverA, state);
            let result_b = reactions_to(&ConcreteObserverB, state);

            // Then
            assert_eq!(
                expected_a, result_a,
                "Observer A should react once to states below 3 (state {state})"
            );
            assert_eq!(
                expected_b, result_b,
                "Observer B should react once to 0 or states from 2 (state {state})"
            );
        }
    }
}
