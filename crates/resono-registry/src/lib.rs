//! Effect registry and factory for resono audio effects.
//!
//! The registry maps effect-type identifiers to constructors so hosts
//! can instantiate effect state by name. Instantiation runs the
//! mandatory initial `device_update`, so every state handed out is ready
//! for `update`/`process` immediately.
//!
//! # Example
//!
//! ```rust
//! use resono_registry::EffectRegistry;
//! use resono_effects::DeviceContext;
//!
//! let registry = EffectRegistry::new();
//! let device = DeviceContext::new(48000);
//!
//! for effect in registry.all_effects() {
//!     println!("{}: {}", effect.name, effect.description);
//! }
//!
//! let echo = registry.create("echo", &device);
//! assert!(echo.is_some());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use resono_effects::{DeviceContext, EchoState, EffectState};

/// Category of audio effect for organization and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectCategory {
    /// Time-based effects (echo, delay lines).
    TimeBased,
    /// Reverberation effects.
    Reverb,
    /// Utility processors.
    Utility,
}

impl EffectCategory {
    /// Returns a human-readable name for the category.
    pub const fn name(&self) -> &'static str {
        match self {
            EffectCategory::TimeBased => "Time-Based",
            EffectCategory::Reverb => "Reverb",
            EffectCategory::Utility => "Utility",
        }
    }
}

/// Describes an effect in the registry.
#[derive(Debug, Clone)]
pub struct EffectDescriptor {
    /// Unique identifier for the effect (lowercase, no spaces).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Brief description of the effect.
    pub description: &'static str,
    /// Category for organization.
    pub category: EffectCategory,
}

/// Factory function type for creating zeroed effect state.
type EffectFactory = fn() -> Box<dyn EffectState + Send>;

struct RegistryEntry {
    descriptor: EffectDescriptor,
    factory: EffectFactory,
}

/// Registry of all available audio effects.
pub struct EffectRegistry {
    entries: Vec<RegistryEntry>,
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectRegistry {
    /// Create a new registry with all built-in effects registered.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(1),
        };
        registry.register_builtin_effects();
        registry
    }

    fn register_builtin_effects(&mut self) {
        self.register(
            EffectDescriptor {
                id: "echo",
                name: "Echo",
                description: "Two-tap echo with damped feedback and stereo spread",
                category: EffectCategory::TimeBased,
            },
            || Box::new(EchoState::new()),
        );
    }

    fn register(&mut self, descriptor: EffectDescriptor, factory: EffectFactory) {
        self.entries.push(RegistryEntry {
            descriptor,
            factory,
        });
    }

    /// Returns descriptors for all registered effects.
    pub fn all_effects(&self) -> Vec<&EffectDescriptor> {
        self.entries.iter().map(|e| &e.descriptor).collect()
    }

    /// Returns descriptors for effects in a specific category.
    pub fn effects_in_category(&self, category: EffectCategory) -> Vec<&EffectDescriptor> {
        self.entries
            .iter()
            .filter(|e| e.descriptor.category == category)
            .map(|e| &e.descriptor)
            .collect()
    }

    /// Get a descriptor by effect ID.
    pub fn get(&self, id: &str) -> Option<&EffectDescriptor> {
        self.entries
            .iter()
            .find(|e| e.descriptor.id == id)
            .map(|e| &e.descriptor)
    }

    /// Create an effect instance by ID, configured for `device`.
    ///
    /// The fresh state gets its first `device_update` here, honoring the
    /// lifecycle rule that a state is configured on creation. Returns
    /// `None` if the effect ID is not registered.
    pub fn create(&self, id: &str, device: &DeviceContext) -> Option<Box<dyn EffectState + Send>> {
        let entry = self.entries.iter().find(|e| e.descriptor.id == id)?;
        let mut state = (entry.factory)();
        state.device_update(device);
        Some(state)
    }

    /// Returns the number of registered effects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no effects are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
