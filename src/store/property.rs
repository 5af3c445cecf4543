use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Describes the properties a [`Store`] holds and the hooks bound to them.
pub trait Schema: Sized + 'static {
    /// Property key.
    type Key: Copy + Eq + Hash + Debug + Send + 'static;

    /// Property value.
    type Value: Clone + Debug + Send + 'static;

    /// Read-only data hooks need (pricing, limits).
    type Context: Send + 'static;

    /// Hooks bound to `key`, in the order they must run.
    fn hooks(key: Self::Key) -> &'static [Hook<Self>];
}

/// Derived-property rule fired when its bound key changes.
pub type Hook<S> = fn(&mut Store<S>);

/// Callback for the general change event.
pub type Observer<S> = Box<dyn FnMut(<S as Schema>::Key, &<S as Schema>::Value) + Send>;

/// Callback for a single key's change event.
pub type KeyObserver<S> = Box<dyn FnMut(&<S as Schema>::Value) + Send>;

/// Notification switches for [`Store::set_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Store the value without notifying anyone.
    pub silent: bool,
    /// Notify general observers but skip key observers and hooks.
    pub silent_hooks: bool,
}

impl SetOptions {
    pub fn silent() -> Self {
        Self {
            silent: true,
            silent_hooks: false,
        }
    }

    pub fn silent_hooks() -> Self {
        Self {
            silent: false,
            silent_hooks: true,
        }
    }
}

/// Property bag that broadcasts every write.
///
/// Single-threaded by contract: wrap the owner in a mutex if it has to
/// cross threads, so a write and the hooks it triggers stay one unit.
pub struct Store<S: Schema> {
    values: HashMap<S::Key, S::Value>,
    context: S::Context,
    observers: Vec<Observer<S>>,
    key_observers: HashMap<S::Key, Vec<KeyObserver<S>>>,
}

impl<S: Schema> Store<S> {
    /// Create an empty store.
    pub fn new(context: S::Context) -> Self {
        Self {
            values: HashMap::new(),
            context,
            observers: Vec::new(),
            key_observers: HashMap::new(),
        }
    }

    pub fn context(&self) -> &S::Context {
        &self.context
    }

    /// Get the current value of `key`, or `None` if it was never set.
    pub fn get(&self, key: S::Key) -> Option<&S::Value> {
        self.values.get(&key)
    }

    /// Set `key` and notify observers and hooks.
    pub fn set(&mut self, key: S::Key, value: S::Value) -> S::Value {
        self.set_with(key, value, SetOptions::default())
    }

    /// Set `key`, honouring the notification switches in `options`.
    ///
    /// Order: the value is stored, general observers run, then key
    /// observers, then the key's hooks. Everything completes before this
    /// returns, including any writes the hooks make.
    pub fn set_with(&mut self, key: S::Key, value: S::Value, options: SetOptions) -> S::Value {
        self.values.insert(key, value.clone());
        tracing::trace!(?key, ?options, "Property set");

        if options.silent {
            return value;
        }

        for observer in &mut self.observers {
            observer(key, &value);
        }

        if options.silent_hooks {
            return value;
        }

        if let Some(observers) = self.key_observers.get_mut(&key) {
            for observer in observers {
                observer(&value);
            }
        }

        for hook in S::hooks(key) {
            (*hook)(self);
        }

        value
    }

    /// Register a callback for every non-silent write.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(S::Key, &S::Value) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Register a callback for writes to `key` alone.
    pub fn subscribe_key<F>(&mut self, key: S::Key, observer: F)
    where
        F: FnMut(&S::Value) + Send + 'static,
    {
        self.key_observers
            .entry(key)
            .or_default()
            .push(Box::new(observer));
    }
}
