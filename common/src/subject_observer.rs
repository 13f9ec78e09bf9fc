use std::rc::Rc;

/// Read-only view over the state of a subject, handed to observers on update.
pub trait StateReader<T> {
    fn state(&self) -> T;
}

pub trait Observer<T> {
    fn update(&self, source: &dyn StateReader<T>);
}

pub type SharedObservers<T> = Vec<Rc<dyn Observer<T>>>;

pub trait Subject<T>: StateReader<T> {
    fn attach(&mut self, observer: Rc<dyn Observer<T>>);
    fn detach(&mut self, observer: &Rc<dyn Observer<T>>);
    fn notify(&self);
}

/// Removes the first registration sharing the allocation of `observer`.
/// Returns `false` when the observer was not registered.
pub fn remove_first<T>(
    observers: &mut SharedObservers<T>,
    observer: &Rc<dyn Observer<T>>,
) -> bool {
    observers
        .iter()
        .position(|obs| Rc::ptr_eq(obs, observer))
        .map(|index| observers.remove(index))
        .is_some()
}

/// Calls every observer once, in registration order.
pub fn dispatch<T>(observers: &[Rc<dyn Observer<T>>], source: &dyn StateReader<T>) {
    for obs in observers {
        obs.update(source);
    }
}
