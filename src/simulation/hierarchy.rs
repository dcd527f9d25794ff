//! Who orbits whom
//!
//! A `Hierarchy` is a forest over the bodies of a [`System`](super::states::System):
//! every orbiting body names exactly one reference body and roots stay put.
//! Links are kept sorted so that a reference is always updated before any
//! body that orbits it, and every body knows its transitive orbiters
//! (descendants), which receive its per-step displacement.

use crate::error::{Result, SimError};
use crate::simulation::forces::AngularRate;
use crate::simulation::states::Body;

/// One orbiting relation: `body` circles `reference` at the angular velocity given by `rate`
pub struct Link {
    pub body: usize,      // index into System::bodies
    pub reference: usize, // index into System::bodies
    pub rate: Box<dyn AngularRate + Send + Sync>,
}

impl Link {
    pub fn new<R>(body: usize, reference: usize, rate: R) -> Self
    where
        R: AngularRate + Send + Sync + 'static,
    {
        Self {
            body,
            reference,
            rate: Box::new(rate),
        }
    }
}

pub struct Hierarchy {
    links: Vec<Link>,             // reference-before-orbiter order
    descendants: Vec<Vec<usize>>, // descendants[i] = every body orbiting i, directly or not
}

impl Hierarchy {
    /// Validate `links` against `bodies` and order them.
    ///
    /// Fails when an index is out of range, a body orbits itself, a body has
    /// more than one reference, or the references form a cycle.
    pub fn new(bodies: &[Body], mut links: Vec<Link>) -> Result<Self> {
        let n = bodies.len();
        let mut parent: Vec<Option<usize>> = vec![None; n];

        for link in &links {
            if link.body >= n || link.reference >= n {
                return Err(SimError::InvalidParameter(format!(
                    "orbit link {} -> {} out of range for {} bodies",
                    link.body, link.reference, n
                )));
            }
            if link.body == link.reference {
                return Err(SimError::SelfReference(bodies[link.body].name.clone()));
            }
            if parent[link.body].is_some() {
                return Err(SimError::InvalidParameter(format!(
                    "body `{}` has more than one reference",
                    bodies[link.body].name
                )));
            }
            parent[link.body] = Some(link.reference);
        }

        // Depth of every body (roots at 0); walking more than n parents means a cycle
        let mut depth = vec![0usize; n];
        for (i, d) in depth.iter_mut().enumerate() {
            let mut current = i;
            let mut steps = 0;
            while let Some(p) = parent[current] {
                steps += 1;
                if steps > n {
                    return Err(SimError::CyclicHierarchy(bodies[i].name.clone()));
                }
                current = p;
            }
            *d = steps;
        }

        // stable: siblings keep their configured order
        links.sort_by_key(|link| depth[link.body]);

        let mut descendants = vec![Vec::new(); n];
        for link in &links {
            let mut ancestor = parent[link.body];
            while let Some(a) = ancestor {
                descendants[a].push(link.body);
                ancestor = parent[a];
            }
        }

        Ok(Self { links, descendants })
    }

    /// Links ordered so references come before their orbiters
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Every body that orbits `body`, directly or through intermediate bodies
    pub fn descendants(&self, body: usize) -> &[usize] {
        &self.descendants[body]
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
