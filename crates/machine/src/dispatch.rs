//! # Contact Dispatch
//!
//! Maps colliders back to the components that registered them and
//! orients drained contact events for delivery. Registration happens
//! during attach; reset clears the map wholesale before components
//! re-attach into the fresh world.

use std::collections::HashMap;

use rapier2d::prelude::ColliderHandle;

use crate::component::{ComponentId, Contact};
use crate::physics::ContactEvent;

/// Routes contact-begin events to interested components.
#[derive(Debug, Default)]
pub struct ContactDispatcher {
    targets: HashMap<ColliderHandle, ComponentId>,
}

impl ContactDispatcher {
    pub fn register(&mut self, collider: ColliderHandle, component: ComponentId) {
        self.targets.insert(collider, component);
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }

    /// Deliveries for one event: each registered side receives a
    /// [`Contact`] with `this` set to its own collider.
    pub fn route(&self, event: &ContactEvent) -> Vec<(ComponentId, Contact)> {
        let mut routed = Vec::new();
        for (this, other) in [
            (event.first, event.second),
            (event.second, event.first),
        ] {
            if let Some(&component) = self.targets.get(&this) {
                routed.push((component, Contact { this, other }));
            }
        }
        routed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_each_registered_side_with_its_own_collider_first() {
        let a = ColliderHandle::from_raw_parts(0, 0);
        let b = ColliderHandle::from_raw_parts(1, 0);
        let mut dispatcher = ContactDispatcher::default();
        dispatcher.register(a, ComponentId(4));
        dispatcher.register(b, ComponentId(7));

        let routed = dispatcher.route(&ContactEvent { first: a, second: b });
        assert_eq!(
            routed,
            vec![
                (ComponentId(4), Contact { this: a, other: b }),
                (ComponentId(7), Contact { this: b, other: a }),
            ]
        );
    }

    #[test]
    fn unregistered_colliders_route_nowhere() {
        let a = ColliderHandle::from_raw_parts(0, 0);
        let b = ColliderHandle::from_raw_parts(1, 0);
        let mut dispatcher = ContactDispatcher::default();
        dispatcher.register(a, ComponentId(0));
        dispatcher.clear();

        assert!(dispatcher.route(&ContactEvent { first: a, second: b }).is_empty());
    }
}
