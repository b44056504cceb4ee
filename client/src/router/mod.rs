//! Route table and navigation policy.
//!
//! DESIGN
//! ======
//! Both modules are plain Rust with no Leptos types so the navigation rules
//! can be tested natively. `util::auth` wires them into the Leptos router.

pub mod guard;
pub mod routes;
