// src/client/surface.rs
use std::sync::{Arc, PoisonError, RwLock};
use tokio::task::JoinHandle;

/// Something the submit handler reads its input from.
pub trait InputSurface: Send + Sync {
    /// Current value, read at call time.
    fn value(&self) -> String;
}

/// Something the submit handler writes its result to.
pub trait OutputSurface: Send + Sync {
    fn set_value(&self, value: String);
}

/// A text field whose value is shared between all of its clones.
#[derive(Clone, Debug, Default)]
pub struct TextSurface {
    value: Arc<RwLock<String>>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(RwLock::new(value.into())),
        }
    }
}

impl InputSurface for TextSurface {
    fn value(&self) -> String {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl OutputSurface for TextSurface {
    fn set_value(&self, value: String) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

type ClickListener = Arc<dyn Fn() -> JoinHandle<()> + Send + Sync>;

/// An activatable control. Listeners stay registered for as long as the
/// button (or any clone of it) lives.
#[derive(Clone, Default)]
pub struct Button {
    listeners: Arc<RwLock<Vec<ClickListener>>>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_click_listener<F>(&self, listener: F)
    where
        F: Fn() -> JoinHandle<()> + Send + Sync + 'static,
    {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    /// Runs every listener in registration order and hands back the tasks
    /// they started. Must be called from within a tokio runtime.
    pub fn click(&self) -> Vec<JoinHandle<()>> {
        // Snapshot so a listener can register another one without deadlocking.
        let listeners: Vec<ClickListener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        listeners.iter().map(|listener| listener()).collect()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
